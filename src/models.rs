use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// 媒体类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// 帖子内嵌的创作者摘要
#[derive(Debug, Clone, PartialEq)]
pub struct CreatorRef {
    pub name: String,
    pub avatar: String,
    pub verified: bool,
}

/// 动态帖子
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: u32,
    pub kind: MediaKind,
    pub cover: String,
    pub caption: String,
    pub locked: bool,
    pub time: String, // 相对时间，如 "2h ago"
    pub creator: CreatorRef,
}

/// 创作者卡片数据
#[derive(Debug, Clone, PartialEq)]
pub struct CreatorSummary {
    pub name: String,
    pub avatar: String,
    pub cover: String,
    pub verified: bool,
    pub bio: String,
    pub price: String, // 两位小数的月费
}

/// 主页展示的创作者
#[derive(Debug, Clone, PartialEq)]
pub struct Creator {
    pub name: String,
    pub verified: bool,
    pub tagline: String,
    pub price: String,
    pub avatar: String,
    pub banner: String,
}

impl From<&CreatorSummary> for Creator {
    fn from(c: &CreatorSummary) -> Self {
        Self {
            name: c.name.clone(),
            verified: c.verified,
            tagline: c.bio.clone(),
            price: c.price.clone(),
            avatar: c.avatar.clone(),
            banner: c.cover.clone(),
        }
    }
}

/// 消息发送方
#[derive(Debug, Clone, PartialEq)]
pub enum Sender {
    Me,
    Creator(String),
}

/// 聊天消息
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: Sender,
    pub body: String,
    pub sent_at: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(sender: Sender, body: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            body,
            sent_at: Local::now(),
        }
    }
}

/// 订阅方案
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Plan {
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

impl Plan {
    pub const ALL: [Plan; 3] = [Plan::Monthly, Plan::Quarterly, Plan::Yearly];

    pub fn price(&self) -> TipAmount {
        match self {
            Plan::Monthly => TipAmount::from_cents(1_499),
            Plan::Quarterly => TipAmount::from_cents(3_999),
            Plan::Yearly => TipAmount::from_cents(12_999),
        }
    }

    pub fn label(&self) -> String {
        let name = match self {
            Plan::Monthly => "Monthly",
            Plan::Quarterly => "Quarterly",
            Plan::Yearly => "Yearly",
        };
        format!("{} - {}", name, self.price())
    }
}

/// 金额（以分为单位）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TipAmount(u64);

impl TipAmount {
    /// 预设打赏金额
    pub const PRESETS: [TipAmount; 6] = [
        TipAmount(500),
        TipAmount(1_000),
        TipAmount(2_000),
        TipAmount(5_000),
        TipAmount(10_000),
        TipAmount(20_000),
    ];

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    /// 解析自定义金额，如 "12"、"12.5"、"$12.50"
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let text = input.trim();
        let text = text.strip_prefix('$').unwrap_or(text);
        if text.is_empty() {
            return Err(ValidationError::EmptyTipAmount);
        }

        let invalid = || ValidationError::InvalidTipAmount(input.trim().to_string());
        let (whole, frac) = match text.split_once('.') {
            Some((w, f)) => (w, f),
            None => (text, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !frac.chars().all(|c| c.is_ascii_digit())
            || frac.len() > 2
        {
            return Err(invalid());
        }

        let dollars: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let cents: u64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        let total = dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .ok_or_else(invalid)?;
        if total == 0 {
            return Err(ValidationError::NonPositiveTipAmount);
        }
        Ok(Self(total))
    }
}

impl std::fmt::Display for TipAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 % 100 == 0 {
            write!(f, "${}", self.0 / 100)
        } else {
            write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
        }
    }
}

/// 账户设置（设置页展示，可由配置文件覆盖）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountSettings {
    pub display_name: String,
    pub username: String,
    pub bio: String,
    pub monthly_price: String,
    pub auto_renew: bool,
}

impl Default for AccountSettings {
    fn default() -> Self {
        Self {
            display_name: "Lina".to_string(),
            username: "@lina".to_string(),
            bio: "Photographer & creator. New sets weekly.".to_string(),
            monthly_price: "$14.99".to_string(),
            auto_renew: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creator_from_summary() {
        let summary = CreatorSummary {
            name: "Jade".to_string(),
            avatar: "a.png".to_string(),
            cover: "c.png".to_string(),
            verified: true,
            bio: "Exclusive shoots".to_string(),
            price: "12.99".to_string(),
        };
        let creator = Creator::from(&summary);

        assert_eq!(creator.name, "Jade");
        assert_eq!(creator.tagline, "Exclusive shoots");
        assert_eq!(creator.price, "12.99");
        assert_eq!(creator.banner, "c.png");
        assert_eq!(creator.avatar, "a.png");
        assert!(creator.verified);
    }

    #[test]
    fn test_parse_tip_amount() {
        assert_eq!(TipAmount::parse("12"), Ok(TipAmount::from_cents(1200)));
        assert_eq!(TipAmount::parse("12.5"), Ok(TipAmount::from_cents(1250)));
        assert_eq!(TipAmount::parse(" $7.05 "), Ok(TipAmount::from_cents(705)));
        assert_eq!(TipAmount::parse(".50"), Ok(TipAmount::from_cents(50)));
    }

    #[test]
    fn test_parse_tip_amount_rejects_bad_input() {
        assert_eq!(TipAmount::parse(""), Err(ValidationError::EmptyTipAmount));
        assert_eq!(TipAmount::parse("$"), Err(ValidationError::EmptyTipAmount));
        assert_eq!(TipAmount::parse("0.00"), Err(ValidationError::NonPositiveTipAmount));
        assert_eq!(
            TipAmount::parse("1.234"),
            Err(ValidationError::InvalidTipAmount("1.234".to_string()))
        );
        assert_eq!(
            TipAmount::parse("abc"),
            Err(ValidationError::InvalidTipAmount("abc".to_string()))
        );
        assert_eq!(
            TipAmount::parse("."),
            Err(ValidationError::InvalidTipAmount(".".to_string()))
        );
    }

    #[test]
    fn test_amount_display() {
        assert_eq!(TipAmount::from_cents(500).to_string(), "$5");
        assert_eq!(TipAmount::from_cents(1499).to_string(), "$14.99");
        assert_eq!(Plan::Yearly.label(), "Yearly - $129.99");
    }
}
