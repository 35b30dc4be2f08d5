//! 导航外壳：顶栏、侧栏（抽屉）、底部导航

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::components::{ACCENT, button, muted};
use super::layouts::line_at;
use crate::ui::actions::Action;
use crate::ui::pages::Page;
use crate::ui::state::App;

const SEARCH_PLACEHOLDER: &str = "Search creators, posts, tags…";

pub fn render_top_nav(frame: &mut Frame, app: &mut App, area: Rect, wide: bool) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Min(10),
            Constraint::Length(16),
        ])
        .split(inner);

    let mut brand = Vec::new();
    if !wide {
        brand.push(Span::raw("[≡] "));
        app.hits
            .register(Rect::new(chunks[0].x, chunks[0].y, 3, 1), Action::OpenSidebar);
    }
    brand.push(Span::styled("🔥", Style::default().fg(ACCENT)));
    brand.push(Span::styled(
        " Fanz",
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(Line::from(brand)), chunks[0]);

    if wide {
        let search = Line::from(vec![Span::raw("⌕ "), muted(SEARCH_PLACEHOLDER)]);
        frame.render_widget(Paragraph::new(search), chunks[1]);
    }

    let me = Line::from(vec![
        Span::raw("🔔 "),
        Span::raw("📷 "),
        Span::styled("(me)", Style::default().fg(Color::Cyan)),
    ])
    .right_aligned();
    frame.render_widget(Paragraph::new(me), chunks[2]);
}

/// 侧栏。`drawer` 为 true 时作为浮层绘制在页面之上
pub fn render_sidebar(frame: &mut Frame, app: &mut App, area: Rect, drawer: bool) {
    if drawer {
        frame.render_widget(Clear, area);
    }
    let title = if drawer { " Fanz  [x] " } else { "" };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if app.sidebar_open {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if drawer {
        app.hits.block(area);
        app.hits.register(
            Rect::new(area.x + 8, area.y, 3, 1),
            Action::CloseSidebar,
        );
    }

    let mut lines = vec![Line::from(button("Create Post", true)), Line::from("")];
    let first_entry = lines.len() as u16;

    let active = app.active_page();
    for (i, page) in Page::ALL.iter().enumerate() {
        let is_active = *page == active;
        let is_cursor = app.sidebar_open && i == app.menu_cursor;
        let style = if is_active {
            Style::default()
                .fg(ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
        };
        let marker = if is_cursor { "› " } else { "  " };
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{} {}", page.icon(), page.label()), style),
            muted(format!("  {}", page.key_number())),
        ]));

        if let Some(row) = line_at(inner, first_entry + i as u16) {
            app.hits.register(row, Action::GoTo(*page));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "🛡 Safe Creator Tips",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(muted(
        "Verify your email, enable 2FA, and follow community guidelines.",
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

pub fn render_bottom_nav(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, Page::ALL.len() as u32); Page::ALL.len()])
        .split(inner);

    let active = app.active_page();
    for (page, cell) in Page::ALL.iter().zip(cells.iter()) {
        let style = if *page == active {
            Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Gray)
        };
        let item = Line::from(Span::styled(
            format!("{} {}", page.icon(), page.short_label()),
            style,
        ))
        .centered();
        frame.render_widget(Paragraph::new(item), *cell);
        app.hits.register(*cell, Action::GoTo(*page));
    }
}
