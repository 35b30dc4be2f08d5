//! 订阅与打赏弹窗

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::components::{button, muted, render_dialog_framework, render_input_widget};
use super::layouts::{centered_fixed, centered_in_row, grid, line_at};
use crate::models::{Plan, TipAmount};
use crate::ui::actions::Action;
use crate::ui::modals::{SubscribeModal, TipField, TipModal};
use crate::ui::state::App;

/// 登记遮罩（点击关闭）、弹窗主体和标题栏上的关闭按钮
fn register_overlay(app: &mut App, screen: Rect, area: Rect, title: &str, close: Action) {
    app.hits.register(screen, close.clone());
    app.hits.block(area);
    let offset = title.chars().take_while(|c| *c != '[').count() as u16;
    app.hits
        .register(Rect::new(area.x + 1 + offset, area.y, 3, 1), close);
}

fn dialog_title(title: &str) -> String {
    format!(" {title} ─ [x] ")
}

fn notice_line(notice: Option<&str>, color: Color) -> Line<'static> {
    match notice {
        Some(text) => Line::from(Span::styled(text.to_string(), Style::default().fg(color))),
        None => Line::from(""),
    }
}

pub fn render_subscribe_modal(frame: &mut Frame, app: &mut App, modal: &SubscribeModal) {
    let screen = frame.area();
    let area = centered_fixed(52, 16, screen);
    let title = dialog_title("Subscribe");
    register_overlay(app, screen, area, &title, Action::CloseSubscribe);
    let inner = render_dialog_framework(frame, area, &title);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 创作者 + 说明
            Constraint::Length(1),
            Constraint::Length(Plan::ALL.len() as u16),
            Constraint::Length(1),
            Constraint::Length(1), // 确认按钮
            Constraint::Min(0),
        ])
        .split(inner);

    let header = vec![
        Line::from(Span::styled(
            modal.creator.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(muted(
            "This is a demo. Hook up your payment provider here.",
        )),
    ];
    frame.render_widget(Paragraph::new(header).wrap(Wrap { trim: true }), chunks[0]);
    frame.render_widget(Paragraph::new("Plan"), chunks[1]);

    let mut plans = Vec::new();
    for (i, plan) in Plan::ALL.into_iter().enumerate() {
        let selected = plan == modal.plan;
        let marker = if selected { "(•) " } else { "( ) " };
        let style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        plans.push(Line::from(Span::styled(format!("{marker}{}", plan.label()), style)));
        if let Some(row) = line_at(chunks[2], i as u16) {
            app.hits.register(row, Action::SelectPlan(plan));
        }
    }
    frame.render_widget(Paragraph::new(plans), chunks[2]);

    let confirm = button("Confirm Subscription", true);
    app.hits.register(
        centered_in_row(chunks[4], confirm.width()),
        Action::ConfirmSubscribe,
    );
    frame.render_widget(Paragraph::new(Line::from(confirm).centered()), chunks[4]);
    frame.render_widget(
        Paragraph::new(notice_line(modal.notice.as_deref(), Color::Red)).wrap(Wrap { trim: true }),
        chunks[5],
    );
}

pub fn render_tip_modal(frame: &mut Frame, app: &mut App, modal: &TipModal) {
    let screen = frame.area();
    let area = centered_fixed(44, 16, screen);
    let title = dialog_title("Send a Tip");
    register_overlay(app, screen, area, &title, Action::CloseTip);
    let inner = render_dialog_framework(frame, area, &title);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(inner);

    let presets_focused = modal.field == TipField::Presets;
    let rows = TipAmount::PRESETS.len() / TipModal::COLUMNS;
    for (i, (amount, cell)) in TipAmount::PRESETS
        .iter()
        .zip(grid(chunks[0], rows, TipModal::COLUMNS))
        .enumerate()
    {
        let selected = modal.preset == Some(i);
        let style = match (selected, presets_focused) {
            (true, true) => Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(Color::Yellow),
            _ => Style::default(),
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(format!("[{amount}]"), style)).centered()),
            cell,
        );
        app.hits.register(cell, Action::SelectPreset(i));
    }

    render_input_widget(
        frame,
        chunks[1],
        "",
        &modal.custom,
        "Custom amount",
        modal.field == TipField::Custom,
        Color::Yellow,
    );
    app.hits
        .register(chunks[1], Action::FocusTipField(TipField::Custom));

    let send = button("Send Tip", true);
    app.hits
        .register(centered_in_row(chunks[2], send.width()), Action::SendTip);
    frame.render_widget(Paragraph::new(Line::from(send).centered()), chunks[2]);

    let feedback = match (&modal.error, &modal.notice) {
        (Some(err), _) => notice_line(Some(&err.to_string()), Color::Red),
        (None, Some(notice)) => notice_line(Some(notice), Color::Red),
        (None, None) => Line::from(muted("[Tab] custom amount")),
    };
    frame.render_widget(Paragraph::new(feedback).wrap(Wrap { trim: true }), chunks[3]);
}
