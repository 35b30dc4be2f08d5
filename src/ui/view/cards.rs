//! 卡片组件：帖子卡片、创作者卡片、付费墙横幅、媒体网格

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::components::{ACCENT, badge, button, card_block, muted};
use super::layouts::{grid, line_at, spans_in_row};
use crate::models::{CreatorSummary, MediaKind};
use crate::ui::actions::Action;
use crate::ui::hit::HitMap;
use crate::ui::pages::PostCard;

pub const POST_CARD_HEIGHT: u16 = 9;
pub const CREATOR_CARD_HEIGHT: u16 = 6;

/// 帖子卡片。`index` 是帖子在动态页中的位置，用于登记点击区域
pub fn render_post_card(
    frame: &mut Frame,
    hits: &mut HitMap,
    area: Rect,
    card: &PostCard,
    index: usize,
    focused: bool,
) {
    let post = &card.post;

    let mut header = vec![Span::styled(
        post.creator.name.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if post.creator.verified {
        header.push(Span::raw(" "));
        header.push(badge("Verified"));
    }
    header.push(muted(format!("  {}", post.time)));

    let media = if post.locked {
        vec![
            Line::from(Span::styled("🔒", Style::default().fg(Color::Gray))).centered(),
            Line::from(button("Subscribe to unlock", true)).centered(),
        ]
    } else {
        match post.kind {
            MediaKind::Video => vec![
                Line::from(Span::styled("▶", Style::default().add_modifier(Modifier::BOLD)))
                    .centered(),
                Line::from(muted(post.cover.clone())).centered(),
            ],
            MediaKind::Image => vec![
                Line::from("▣").centered(),
                Line::from(muted(post.cover.clone())).centered(),
            ],
        }
    };

    let like_style = if card.liked {
        Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let like = Span::styled(format!("[♥ {}]", card.like_label()), like_style);
    let inert = Span::raw(" [Comment] [Share]  ");
    let tip = Span::styled("[🎁 Tip]", Style::default().fg(Color::Yellow));
    let widths = [like.width(), inert.width(), tip.width()];
    let actions = Line::from(vec![like, inert, tip]);

    let mut lines = vec![Line::from(header), Line::from("")];
    let media_row = lines.len() as u16;
    lines.extend(media);
    lines.push(Line::from(""));
    lines.push(Line::from(post.caption.clone()));
    let actions_row = lines.len() as u16;
    lines.push(actions);

    let block = card_block(String::new(), focused)
        .title_bottom(Line::from(muted(post.creator.avatar.clone())).right_aligned());
    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(lines).block(block), area);

    // 媒体区（锁定时即 "Subscribe to unlock"）与操作栏
    let media_area = Rect::new(inner.x, inner.y + media_row, inner.width, 2).intersection(inner);
    hits.register(media_area, Action::OpenMedia(index));
    if let Some(row) = line_at(inner, actions_row) {
        let spans = spans_in_row(row, &widths);
        hits.register(spans[0], Action::LikePost(index));
        hits.register(spans[2], Action::TipPost(index));
    }
}

pub fn render_creator_card(frame: &mut Frame, area: Rect, c: &CreatorSummary, focused: bool) {
    let mut name = vec![
        Span::styled("● ", Style::default().fg(Color::Magenta)),
        Span::styled(c.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
    ];
    if c.verified {
        name.push(Span::raw(" "));
        name.push(badge("Verified"));
    }

    let lines = vec![
        Line::from(name),
        Line::from(muted(c.bio.clone())),
        Line::from(vec![
            Span::raw("$ "),
            Span::styled(
                format!("${}/mo", c.price),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(muted(c.cover.clone())),
    ];

    let block = card_block(String::new(), focused);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

pub fn render_paywall_banner(frame: &mut Frame, area: Rect, price: &str) {
    let lines = vec![
        Line::from(Span::styled(
            "Subscribe to unlock all content",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            muted("Full-resolution photos, videos, and DMs.  "),
            button(&format!("Subscribe ${price}/mo"), true),
        ]),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// 3x3 图片网格，锁定时覆盖锁图标
pub fn render_media_grid(frame: &mut Frame, area: Rect, locked: bool) {
    for (i, cell) in grid(area, 3, 3).into_iter().enumerate() {
        let label = if locked {
            Line::from("🔒").centered()
        } else {
            Line::from(format!("▣ {}", i + 1)).centered()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(Paragraph::new(label).block(block), cell);
    }
}

/// 视频网格，每项带时长
pub fn render_video_grid(frame: &mut Frame, area: Rect) {
    for (i, cell) in grid(area, 2, 3).into_iter().enumerate() {
        let lines = vec![
            Line::from("▶").centered(),
            Line::from(muted(format!("00:{}", (i + 1) * 7))).right_aligned(),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(Paragraph::new(lines).block(block), cell);
    }
}
