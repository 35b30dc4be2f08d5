//! 页面渲染：动态、发现、创作者主页、消息、设置

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::cards::{
    CREATOR_CARD_HEIGHT, POST_CARD_HEIGHT, render_creator_card, render_media_grid,
    render_paywall_banner, render_post_card, render_video_grid,
};
use super::components::{ACCENT, badge, button, muted, render_input_widget};
use super::layouts::{grid, line_at, spans_in_row};
use crate::models::Sender;
use crate::sample::TRENDING_TAGS;
use crate::ui::actions::Action;
use crate::ui::hit::HitMap;
use crate::ui::pages::{
    DiscoverView, FeedItem, FeedView, MessagesView, PageView, ProfileTab, ProfileView,
    SettingsView,
};

/// 按当前挂载的页面分发到对应的渲染函数
pub fn render_page(frame: &mut Frame, hits: &mut HitMap, view: &PageView, area: Rect) {
    match view {
        PageView::Feed(v) => render_feed(frame, hits, v, area),
        PageView::Discover(v) => render_discover(frame, hits, v, area),
        PageView::Profile(v) => render_profile(frame, hits, v, area),
        PageView::Messages(v) => render_messages(frame, hits, v, area),
        PageView::Settings(v) => render_settings(frame, v, area),
    }
}

fn render_feed(frame: &mut Frame, hits: &mut HitMap, feed: &FeedView, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(64), Constraint::Percentage(36)])
        .split(area);

    // 帖子列表，保证焦点帖子可见
    let fit = usize::from((columns[0].height / POST_CARD_HEIGHT).max(1));
    let focused = feed.focused();
    let start = match focused {
        FeedItem::Post(i) if i >= fit => i + 1 - fit,
        _ => 0,
    };
    for (row, (i, card)) in feed.posts.iter().enumerate().skip(start).take(fit).enumerate() {
        let y = columns[0].y + row as u16 * POST_CARD_HEIGHT;
        let height = POST_CARD_HEIGHT.min(columns[0].bottom().saturating_sub(y));
        let area = Rect::new(columns[0].x, y, columns[0].width, height);
        render_post_card(frame, hits, area, card, i, focused == FeedItem::Post(i));
    }

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(4)])
        .split(columns[1]);

    let block = Block::default()
        .title(" Suggested creators ")
        .borders(Borders::ALL);
    let inner = block.inner(side[0]);
    frame.render_widget(block, side[0]);
    let rows = feed.suggested.len().div_ceil(2);
    let cells = grid(
        Rect::new(
            inner.x,
            inner.y,
            inner.width,
            inner.height.min(CREATOR_CARD_HEIGHT * rows as u16),
        ),
        rows,
        2,
    );
    for (i, (c, cell)) in feed.suggested.iter().zip(cells).enumerate() {
        render_creator_card(frame, cell, c, focused == FeedItem::Creator(i));
        hits.register(cell, Action::OpenCreator(i));
    }

    let tags: Vec<Span> = TRENDING_TAGS
        .iter()
        .flat_map(|t| [Span::styled(*t, Style::default().fg(Color::Cyan)), Span::raw(" ")])
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(tags))
            .wrap(Wrap { trim: true })
            .block(Block::default().title(" Trending tags ").borders(Borders::ALL)),
        side[1],
    );
}

fn render_discover(frame: &mut Frame, hits: &mut HitMap, discover: &DiscoverView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(6)])
        .split(area);

    let header = Line::from(vec![
        Span::styled("Discover", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("   "),
        button("All", false),
        Span::raw(" "),
        button("Photos", false),
        Span::raw(" "),
        button("Videos", false),
    ]);
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let rows = discover.creators.len().div_ceil(DiscoverView::COLUMNS);
    let cells = grid(chunks[1], rows, DiscoverView::COLUMNS);
    for (i, (c, cell)) in discover.creators.iter().zip(cells).enumerate() {
        render_creator_card(frame, cell, c, i == discover.cursor);
        hits.register(cell, Action::OpenCreator(i));
    }
}

fn render_profile(frame: &mut Frame, hits: &mut HitMap, profile: &ProfileView, area: Rect) {
    let creator = &profile.creator;
    let banner_height = if profile.locked { 4 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(banner_height),
            Constraint::Length(3),
            Constraint::Min(4),
        ])
        .split(area);

    // 头部
    let mut name = vec![
        Span::styled("◉ ", Style::default().fg(Color::Magenta)),
        Span::styled(
            creator.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    if creator.verified {
        name.push(Span::raw(" "));
        name.push(badge("Verified"));
    }
    let subscribe = button(&format!("Subscribe ${}/mo", creator.price), true);
    let subscribe_width = subscribe.width() as u16;
    let header = vec![
        Line::from(muted(format!("{}  ·  {}", creator.banner, creator.avatar))),
        Line::from(name),
        Line::from(muted(creator.tagline.clone())),
        Line::from(subscribe).right_aligned(),
    ];
    let block = Block::default().borders(Borders::ALL);
    let header_inner = block.inner(chunks[0]);
    frame.render_widget(Paragraph::new(header).block(block), chunks[0]);
    if let Some(row) = line_at(header_inner, 3) {
        let width = subscribe_width.min(row.width);
        hits.register(
            Rect::new(row.right() - width, row.y, width, 1),
            Action::OpenSubscribe,
        );
    }

    if profile.locked {
        render_paywall_banner(frame, chunks[1], &creator.price);
        hits.register(chunks[1], Action::OpenSubscribe);
    }

    // 标签栏
    let mut tabs = Vec::new();
    let mut widths = Vec::new();
    for tab in ProfileTab::ALL {
        let style = if tab == profile.tab {
            Style::default()
                .fg(ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Gray)
        };
        let span = Span::styled(format!(" {} {} ", tab.icon(), tab.label()), style);
        widths.extend([span.width(), 1]);
        tabs.push(span);
        tabs.push(Span::raw(" "));
    }
    let block = Block::default().borders(Borders::ALL);
    let tab_row = block.inner(chunks[2]);
    frame.render_widget(Paragraph::new(Line::from(tabs)).block(block), chunks[2]);
    let cells = spans_in_row(tab_row, &widths);
    for (tab, cell) in ProfileTab::ALL.into_iter().zip(cells.into_iter().step_by(2)) {
        hits.register(cell, Action::SelectTab(tab));
    }

    match profile.tab {
        ProfileTab::Posts => render_media_grid(frame, chunks[3], true),
        ProfileTab::Videos => render_video_grid(frame, chunks[3]),
        ProfileTab::Likes => frame.render_widget(
            Paragraph::new(Span::styled("Likes are private.", Style::default().fg(Color::Gray))),
            chunks[3],
        ),
    }
}

fn render_messages(frame: &mut Frame, hits: &mut HitMap, messages: &MessagesView, area: Rect) {
    let block = Block::default().title(" ☷ Messages ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(inner);

    let mut lines = Vec::new();
    for msg in &messages.transcript {
        let time = msg.sent_at.format("%H:%M").to_string();
        let line = match &msg.sender {
            Sender::Creator(name) => Line::from(vec![
                Span::styled(format!("{name}: "), Style::default().fg(Color::Magenta)),
                Span::raw(msg.body.clone()),
                muted(format!("  {time}")),
            ]),
            Sender::Me => Line::from(vec![
                muted(format!("{time}  ")),
                Span::styled(
                    msg.body.clone(),
                    Style::default().fg(Color::White).bg(ACCENT),
                ),
            ])
            .right_aligned(),
        };
        lines.push(line);
        lines.push(Line::from(""));
    }
    // 只保留最后能放下的部分
    let visible = usize::from(chunks[0].height);
    let skip = lines.len().saturating_sub(visible);
    frame.render_widget(
        Paragraph::new(lines.into_iter().skip(skip).collect::<Vec<_>>()),
        chunks[0],
    );

    if let Some(err) = &messages.error {
        frame.render_widget(
            Paragraph::new(Span::styled(err.clone(), Style::default().fg(Color::Red))),
            chunks[1],
        );
    }

    let input = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(16)])
        .split(chunks[2]);
    render_input_widget(
        frame,
        input[0],
        "",
        &messages.draft,
        "Type a message…",
        messages.composing,
        Color::Yellow,
    );
    hits.register(input[0], Action::StartCompose);
    frame.render_widget(
        Paragraph::new(Line::from(vec![Span::raw("[▣] "), button("Send", true)]))
            .block(Block::default().borders(Borders::ALL)),
        input[1],
    );
    hits.register(input[1], Action::SendMessage);
}

fn render_settings(frame: &mut Frame, settings: &SettingsView, area: Rect) {
    let account = &settings.account;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Length(6), Constraint::Min(0)])
        .split(area);

    let field = |label: &str, value: &str| {
        Line::from(vec![
            Span::styled(format!("{label:<14}"), Style::default().fg(Color::Gray)),
            Span::raw(value.to_string()),
        ])
    };

    let account_lines = vec![
        field("Display name", &account.display_name),
        field("Username", &account.username),
        field("Bio", &account.bio),
    ];
    frame.render_widget(
        Paragraph::new(account_lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().title(" Account ").borders(Borders::ALL)),
        chunks[0],
    );

    let renew = if account.auto_renew { "Enabled" } else { "Disabled" };
    let subscription_lines = vec![
        field("Monthly price", &account.monthly_price),
        field("Auto-renew", renew),
        Line::from(vec![
            Span::styled(format!("{:<14}", "Promotions"), Style::default().fg(Color::Gray)),
            button("Create Discount", false),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(subscription_lines)
            .block(Block::default().title(" Subscription ").borders(Borders::ALL)),
        chunks[1],
    );
}
