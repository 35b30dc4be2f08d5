//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod cards;
pub mod components;
pub mod layouts;
pub mod modals;
pub mod nav;
pub mod pages;

use chrono::{Datelike, Local};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::actions::Action;
use super::modals::TipField;
use super::pages::Page;
use super::state::{App, Focus};
use modals::{render_subscribe_modal, render_tip_modal};
use nav::{render_bottom_nav, render_sidebar, render_top_nav};
use pages::render_page;

const SIDEBAR_WIDTH: u16 = 30;

/// 渲染 UI，同时重建本帧的点击区域
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hits.clear();

    let area = frame.area();
    let wide = area.width >= app.wide_breakpoint;

    let mut constraints = vec![
        Constraint::Length(3), // 顶栏
        Constraint::Min(10),   // 主体
    ];
    if !wide {
        constraints.push(Constraint::Length(3)); // 底部导航
    }
    constraints.push(Constraint::Length(4)); // 帮助 + 页脚

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    render_top_nav(frame, app, chunks[0], wide);

    let body = chunks[1];
    let main = if wide {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
            .split(body);
        render_sidebar(frame, app, columns[0], false);
        columns[1]
    } else {
        render_bottom_nav(frame, app, chunks[2]);
        body
    };

    render_page(frame, &mut app.hits, &app.view, main);
    render_help(frame, app, chunks[chunks.len() - 1]);

    // 窄屏抽屉：点击抽屉外部关闭
    if !wide && app.sidebar_open {
        app.hits.register(area, Action::CloseSidebar);
        let drawer = Rect::new(
            body.x,
            body.y,
            SIDEBAR_WIDTH.min(body.width),
            body.height,
        );
        render_sidebar(frame, app, drawer, true);
    }

    // 弹窗：关闭时不存在，不渲染
    if let Some(modal) = app.subscribe.clone() {
        render_subscribe_modal(frame, app, &modal);
    }
    if let Some(modal) = app.tip.clone() {
        render_tip_modal(frame, app, &modal);
    }
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.focus() {
        Focus::Tip(TipField::Presets) => "[hjkl] 选择金额  [Tab] 自定义  [Enter] 打赏  [Esc] 关闭",
        Focus::Tip(TipField::Custom) => "输入金额  [Tab] 预设  [Enter] 打赏  [Esc] 关闭",
        Focus::Subscribe => "[j/k] 选择方案  [Enter] 确认  [Esc] 关闭",
        Focus::Menu => "[j/k] 选择  [Enter] 打开  [Esc] 关闭菜单",
        Focus::Composer => "输入消息后按 [Enter] 发送  [Esc] 取消",
        Focus::Page(page) => match page {
            Page::Feed => {
                "[1-5] 页面  [j/k] 导航  [Enter] 打开  [l] 赞  [t] 打赏  [s] 订阅  [m] 菜单  [q] 退出"
            }
            Page::Discover => "[1-5] 页面  [hjkl] 导航  [Enter] 打开主页  [m] 菜单  [q] 退出",
            Page::Profile => "[1-5] 页面  [h/l] 切换标签  [s] 订阅  [m] 菜单  [q] 退出",
            Page::Messages => "[1-5] 页面  [i] 输入消息  [m] 菜单  [q] 退出",
            Page::Settings => "[1-5] 页面  [m] 菜单  [q] 退出",
        },
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let footer = format!(
        "© {} Fanz - Demo UI. This is a frontend prototype. No real payments or accounts.",
        Local::now().year()
    );

    let help = Paragraph::new(vec![
        Line::from(text),
        Line::styled(footer, Style::default().fg(Color::DarkGray)),
    ])
    .style(Style::default().fg(Color::Gray))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    use super::*;
    use crate::config::Config;
    use crate::ui::input::{handle_key_event, handle_mouse_event};

    fn buffer_text(buffer: &Buffer) -> String {
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw_buffer(app: &mut App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        buffer_text(&draw_buffer(app, width, height))
    }

    /// 第一次出现 `needle` 的单元格坐标
    fn locate(buffer: &Buffer, needle: &str) -> (u16, u16) {
        let width = buffer.area.width as usize;
        for (y, row) in buffer.content.chunks(width).enumerate() {
            for x in 0..width {
                let rest: String = row[x..].iter().map(|cell| cell.symbol()).collect();
                if rest.starts_with(needle) {
                    return (x as u16, y as u16);
                }
            }
        }
        panic!("{needle:?} not on screen");
    }

    /// 画一帧后点击 `needle` 的第 `offset` 个字符
    fn click_text(app: &mut App, needle: &str, offset: u16) {
        let (x, y) = locate(&draw_buffer(app, 140, 50), needle);
        click(app, x + offset, y);
    }

    fn click(app: &mut App, column: u16, row: u16) {
        handle_mouse_event(
            app,
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            },
        );
    }

    #[test]
    fn test_each_page_renders_alone() {
        let markers = [
            (Page::Feed, "Suggested creators"),
            (Page::Discover, "Exclusive shoots"),
            (Page::Profile, "Subscribe to unlock all content"),
            (Page::Messages, "Type a message"),
            (Page::Settings, "Create Discount"),
        ];
        let mut app = App::new(&Config::default());
        for (page, marker) in markers {
            app.set_page(page);
            let screen = draw(&mut app, 140, 50);
            assert!(screen.contains(marker), "{page:?} should show {marker}");
            for (other, other_marker) in markers {
                if other != page {
                    assert!(
                        !screen.contains(other_marker),
                        "{page:?} should not show {other_marker}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_discover_then_open_jade() {
        let mut app = App::new(&Config::default());
        assert_eq!(app.active_page(), Page::Feed);

        handle_key_event(&mut app, KeyCode::Char('2'));
        let screen = draw(&mut app, 140, 50);
        assert_eq!(app.active_page(), Page::Discover);
        assert!(!screen.contains("Suggested creators"));
        assert!(screen.contains("Jade"));

        handle_key_event(&mut app, KeyCode::Enter);
        let screen = draw(&mut app, 140, 50);
        assert_eq!(app.active_page(), Page::Profile);
        assert!(screen.contains("Jade"));
        assert!(screen.contains("Subscribe $12.99/mo"));
    }

    #[test]
    fn test_like_label_toggles() {
        let mut app = App::new(&Config::default());
        let screen = draw(&mut app, 140, 50);
        assert!(!screen.contains("Liked"));

        handle_key_event(&mut app, KeyCode::Char('l'));
        let screen = draw(&mut app, 140, 50);
        assert_eq!(screen.matches("Liked").count(), 1);
    }

    #[test]
    fn test_likes_tab_shows_placeholder() {
        let mut app = App::new(&Config::default());
        app.set_page(Page::Profile);
        let screen = draw(&mut app, 140, 50);
        assert!(!screen.contains("Likes are private."));

        handle_key_event(&mut app, KeyCode::Left);
        let screen = draw(&mut app, 140, 50);
        assert!(screen.contains("Likes are private."));
        assert!(!screen.contains("🔒"));
    }

    #[test]
    fn test_sidebar_click_changes_page() {
        let mut app = App::new(&Config::default());
        draw(&mut app, 140, 50);
        // 顶栏 3 行 + 侧栏边框 1 行 + "Create Post" + 空行，Discover 是第二个条目
        click(&mut app, 5, 3 + 1 + 2 + 1);
        assert_eq!(app.active_page(), Page::Discover);
    }

    #[test]
    fn test_modal_present_only_when_open() {
        let mut app = App::new(&Config::default());
        let screen = draw(&mut app, 140, 50);
        assert!(!screen.contains("Confirm Subscription"));

        app.open_subscribe();
        let screen = draw(&mut app, 140, 50);
        assert!(screen.contains("Confirm Subscription"));
        assert!(!screen.contains("Send Tip"));

        // 点击遮罩关闭
        click(&mut app, 0, 49);
        assert!(app.subscribe.is_none());
        let screen = draw(&mut app, 140, 50);
        assert!(!screen.contains("Confirm Subscription"));
    }

    #[test]
    fn test_click_inside_modal_keeps_it_open() {
        let mut app = App::new(&Config::default());
        app.open_tip();
        draw(&mut app, 140, 50);
        // 提示行，没有可点击的内容
        click(&mut app, 50, 27);
        assert!(app.tip.is_some());
    }

    #[test]
    fn test_tip_backdrop_click_closes_tip() {
        let mut app = App::new(&Config::default());
        app.open_tip();
        draw(&mut app, 140, 50);
        click(&mut app, 0, 49);
        assert!(app.tip.is_none());
        assert!(!draw(&mut app, 140, 50).contains("Send Tip"));
    }

    #[test]
    fn test_close_controls_in_modal_titles() {
        let mut app = App::new(&Config::default());
        app.open_subscribe();
        click_text(&mut app, "[x]", 1);
        assert!(app.subscribe.is_none());

        app.open_tip();
        click_text(&mut app, "[x]", 1);
        assert!(app.tip.is_none());
    }

    #[test]
    fn test_backdrop_closes_only_topmost_modal() {
        let mut app = App::new(&Config::default());
        app.open_subscribe();
        app.open_tip();
        draw(&mut app, 140, 50);

        click(&mut app, 0, 49);
        assert!(app.tip.is_none());
        assert!(app.subscribe.is_some());

        let screen = draw(&mut app, 140, 50);
        assert!(screen.contains("Confirm Subscription"));
        click(&mut app, 0, 49);
        assert!(app.subscribe.is_none());
    }

    #[test]
    fn test_click_creator_card_opens_profile() {
        let mut app = App::new(&Config::default());
        app.set_page(Page::Discover);
        click_text(&mut app, "Jade", 0);
        assert_eq!(app.active_page(), Page::Profile);
        let screen = draw(&mut app, 140, 50);
        assert!(screen.contains("Subscribe $12.99/mo"));

        app.set_page(Page::Feed);
        click_text(&mut app, "Kira", 0);
        assert_eq!(app.selected_creator.as_ref().map(|c| c.name.as_str()), Some("Kira"));
    }

    #[test]
    fn test_click_post_actions() {
        let mut app = App::new(&Config::default());
        click_text(&mut app, "Subscribe to unlock", 2);
        assert_eq!(app.subscribe.as_ref().map(|s| s.creator.as_str()), Some("Mika"));
        app.close_subscribe();

        click_text(&mut app, "[♥ Like]", 1);
        let screen = draw(&mut app, 140, 50);
        assert_eq!(screen.matches("Liked").count(), 1);

        click_text(&mut app, "Tip]", 0);
        assert!(app.tip.is_some());
    }

    #[test]
    fn test_click_profile_tab_and_subscribe() {
        let mut app = App::new(&Config::default());
        app.set_page(Page::Profile);
        click_text(&mut app, "Videos", 0);
        assert!(draw(&mut app, 140, 50).contains("00:7"));

        click_text(&mut app, "Subscribe $14.99/mo", 3);
        assert_eq!(app.subscribe.as_ref().map(|s| s.creator.as_str()), Some("Lina"));
    }

    #[test]
    fn test_click_modal_controls() {
        use crate::models::Plan;

        let mut app = App::new(&Config::default());
        app.set_page(Page::Profile);
        app.open_subscribe();
        click_text(&mut app, "Quarterly", 0);
        assert_eq!(app.subscribe.as_ref().map(|s| s.plan), Some(Plan::Quarterly));
        click_text(&mut app, "Confirm Subscription", 0);
        let notice = app.subscribe.as_ref().and_then(|s| s.notice.clone());
        assert!(notice.is_some_and(|n| n.contains("payment provider")));

        app.close_subscribe();
        app.open_tip();
        click_text(&mut app, "[$50]", 1);
        assert_eq!(app.tip.as_ref().and_then(|t| t.preset), Some(3));
        click_text(&mut app, "Send Tip", 0);
        let notice = app.tip.as_ref().and_then(|t| t.notice.clone());
        assert!(notice.is_some_and(|n| n.starts_with("Tip of $50 not sent")));
    }

    #[test]
    fn test_wide_menu_closes_after_sidebar_click() {
        let mut app = App::new(&Config::default());
        handle_key_event(&mut app, KeyCode::Char('m'));
        assert_eq!(app.focus(), Focus::Menu);
        draw(&mut app, 140, 50);
        click(&mut app, 5, 3 + 1 + 2 + 1);

        assert_eq!(app.active_page(), Page::Discover);
        assert!(!app.sidebar_open);
        assert_eq!(app.focus(), Focus::Page(Page::Discover));
        handle_key_event(&mut app, KeyCode::Char('1'));
        assert_eq!(app.active_page(), Page::Feed);
    }

    #[test]
    fn test_narrow_layout_uses_bottom_nav_and_drawer() {
        let mut app = App::new(&Config::default());
        let screen = draw(&mut app, 80, 50);
        assert!(screen.contains("Chats"));
        assert!(!screen.contains("Safe Creator Tips"));

        handle_key_event(&mut app, KeyCode::Char('m'));
        let screen = draw(&mut app, 80, 50);
        assert!(screen.contains("Safe Creator Tips"));

        // 点击抽屉外部关闭
        click(&mut app, 70, 20);
        assert!(!app.sidebar_open);
    }
}
