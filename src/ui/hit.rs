//! 鼠标点击区域
//!
//! 渲染时按绘制顺序登记区域，后登记的在上层。点击时从最上层开始查找。

use ratatui::layout::{Position, Rect};

use super::actions::Action;

#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Option<Action>)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// 登记可点击区域
    pub fn register(&mut self, area: Rect, action: Action) {
        self.regions.push((area, Some(action)));
    }

    /// 登记吞掉点击的区域（如弹窗主体）
    pub fn block(&mut self, area: Rect) {
        self.regions.push((area, None));
    }

    pub fn lookup(&self, column: u16, row: u16) -> Option<Action> {
        let pos = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(pos))
            .and_then(|(_, action)| action.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topmost_region_wins() {
        let mut hits = HitMap::default();
        hits.register(Rect::new(0, 0, 80, 24), Action::CloseTip);
        hits.block(Rect::new(20, 5, 40, 10));
        hits.register(Rect::new(55, 5, 3, 1), Action::CloseTip);

        assert_eq!(hits.lookup(1, 1), Some(Action::CloseTip));
        assert_eq!(hits.lookup(30, 8), None);
        assert_eq!(hits.lookup(56, 5), Some(Action::CloseTip));
        assert_eq!(hits.lookup(200, 200), None);
    }
}
