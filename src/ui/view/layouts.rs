//! 布局辅助函数

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 固定尺寸的居中区域，超出时收缩到可用大小
pub fn centered_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(
        r.x + (r.width - width) / 2,
        r.y + (r.height - height) / 2,
        width,
        height,
    )
}

/// 将区域切成 rows x cols 的网格，按行优先返回
pub fn grid(area: Rect, rows: usize, cols: usize) -> Vec<Rect> {
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(area);

    row_areas
        .iter()
        .flat_map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, cols as u32); cols])
                .split(*row)
                .to_vec()
        })
        .collect()
}

/// 一行中的单元区域（用于登记点击）
pub fn line_at(area: Rect, offset: u16) -> Option<Rect> {
    if offset < area.height {
        Some(Rect::new(area.x, area.y + offset, area.width, 1))
    } else {
        None
    }
}

/// 行内居中内容所占的区域，与 `Line::centered()` 的摆放一致
pub fn centered_in_row(row: Rect, width: usize) -> Rect {
    let width = (width as u16).min(row.width);
    Rect::new(row.x + (row.width - width) / 2, row.y, width, row.height.min(1))
}

/// 行内从左起依次排列的各段所占区域
pub fn spans_in_row(row: Rect, widths: &[usize]) -> Vec<Rect> {
    let mut x = row.x;
    widths
        .iter()
        .map(|w| {
            let area = Rect::new(x, row.y, *w as u16, 1).intersection(row);
            x = x.saturating_add(*w as u16);
            area
        })
        .collect()
}
