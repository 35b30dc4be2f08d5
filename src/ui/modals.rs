//! 弹窗状态
//!
//! 弹窗关闭时不存在（`Option::None`），打开时才构造。

use crate::error::ValidationError;
use crate::models::{Plan, TipAmount};

#[derive(Debug, Clone, PartialEq)]
pub struct SubscribeModal {
    pub creator: String,
    pub plan: Plan,
    pub notice: Option<String>,
}

impl SubscribeModal {
    pub fn new(creator: String) -> Self {
        Self {
            creator,
            plan: Plan::default(),
            notice: None,
        }
    }

    pub fn move_plan(&mut self, delta: isize) {
        let len = Plan::ALL.len() as isize;
        let current = Plan::ALL.iter().position(|p| *p == self.plan).unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len - 1);
        self.plan = Plan::ALL[next as usize];
    }
}

/// 打赏弹窗的输入焦点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipField {
    Presets,
    Custom,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TipModal {
    pub preset: Option<usize>,
    pub custom: String,
    pub field: TipField,
    pub error: Option<ValidationError>,
    pub notice: Option<String>,
}

impl TipModal {
    pub const COLUMNS: usize = 3;

    pub fn new() -> Self {
        Self {
            preset: None,
            custom: String::new(),
            field: TipField::Presets,
            error: None,
            notice: None,
        }
    }

    /// 在预设金额网格中移动
    pub fn move_preset(&mut self, delta: isize) {
        let len = TipAmount::PRESETS.len() as isize;
        let next = match self.preset {
            Some(i) => (i as isize + delta).clamp(0, len - 1),
            None => 0,
        };
        self.preset = Some(next as usize);
        self.custom.clear();
        self.error = None;
    }

    /// 点击预设金额：选中并清空自定义金额
    pub fn select_preset(&mut self, i: usize) {
        if i < TipAmount::PRESETS.len() {
            self.preset = Some(i);
            self.custom.clear();
            self.field = TipField::Presets;
            self.error = None;
        }
    }

    pub fn switch_field(&mut self) {
        self.field = match self.field {
            TipField::Presets => TipField::Custom,
            TipField::Custom => TipField::Presets,
        };
    }

    pub fn push_char(&mut self, c: char) {
        if self.field == TipField::Custom && (c.is_ascii_digit() || c == '.') {
            self.custom.push(c);
            self.preset = None;
            self.error = None;
        }
    }

    pub fn pop_char(&mut self) {
        if self.field == TipField::Custom {
            self.custom.pop();
            self.error = None;
        }
    }

    /// 确定打赏金额：自定义金额优先，否则使用选中的预设
    pub fn amount(&self) -> Result<TipAmount, ValidationError> {
        if !self.custom.is_empty() {
            return TipAmount::parse(&self.custom);
        }
        match self.preset {
            Some(i) => Ok(TipAmount::PRESETS[i]),
            None => Err(ValidationError::EmptyTipAmount),
        }
    }
}

impl Default for TipModal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tip_amount_requires_input() {
        let tip = TipModal::new();
        assert_eq!(tip.amount(), Err(ValidationError::EmptyTipAmount));
    }

    #[test]
    fn test_custom_amount_overrides_preset() {
        let mut tip = TipModal::new();
        tip.move_preset(0);
        assert_eq!(tip.amount(), Ok(TipAmount::from_cents(500)));

        tip.switch_field();
        for c in "7.5".chars() {
            tip.push_char(c);
        }
        assert_eq!(tip.preset, None);
        assert_eq!(tip.amount(), Ok(TipAmount::from_cents(750)));
    }

    #[test]
    fn test_custom_field_ignores_letters() {
        let mut tip = TipModal::new();
        tip.switch_field();
        tip.push_char('a');
        tip.push_char('3');
        assert_eq!(tip.custom, "3");
    }

    #[test]
    fn test_preset_grid_is_clamped() {
        let mut tip = TipModal::new();
        tip.move_preset(1);
        assert_eq!(tip.preset, Some(0));
        tip.move_preset(10);
        assert_eq!(tip.preset, Some(5));
    }

    #[test]
    fn test_select_preset_clears_custom() {
        let mut tip = TipModal::new();
        tip.switch_field();
        tip.push_char('9');
        tip.select_preset(3);
        assert_eq!(tip.field, TipField::Presets);
        assert_eq!(tip.custom, "");
        assert_eq!(tip.amount(), Ok(TipAmount::from_cents(5_000)));

        tip.select_preset(6);
        assert_eq!(tip.preset, Some(3));
    }

    #[test]
    fn test_plan_selection() {
        let mut sub = SubscribeModal::new("Jade".to_string());
        assert_eq!(sub.plan, Plan::Monthly);
        sub.move_plan(1);
        assert_eq!(sub.plan, Plan::Quarterly);
        sub.move_plan(5);
        assert_eq!(sub.plan, Plan::Yearly);
    }
}
