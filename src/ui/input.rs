//! 键盘与鼠标事件映射 (Input -> Action)
//!
//! 将按键/点击事件转换为 Action

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};

use super::actions::Action;
use super::modals::TipField;
use super::pages::Page;
use super::state::{App, Focus};

/// 根据当前焦点和按键获取对应的 Action
pub fn get_action(focus: Focus, key: KeyCode) -> Option<Action> {
    match focus {
        Focus::Tip(field) => match key {
            KeyCode::Esc => Some(Action::CloseTip),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Tab | KeyCode::BackTab => Some(Action::SwitchField),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Up => Some(Action::MoveUp),
            KeyCode::Down => Some(Action::MoveDown),
            KeyCode::Left => Some(Action::MoveLeft),
            KeyCode::Right => Some(Action::MoveRight),
            KeyCode::Char(c) => match field {
                TipField::Custom => Some(Action::Input(c)),
                TipField::Presets => match c {
                    'x' => Some(Action::CloseTip),
                    'k' => Some(Action::MoveUp),
                    'j' => Some(Action::MoveDown),
                    'h' => Some(Action::MoveLeft),
                    'l' => Some(Action::MoveRight),
                    _ => None,
                },
            },
            _ => None,
        },
        Focus::Subscribe => match key {
            KeyCode::Esc | KeyCode::Char('x') => Some(Action::CloseSubscribe),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
            _ => None,
        },
        Focus::Menu => match key {
            KeyCode::Esc | KeyCode::Char('m') => Some(Action::CloseSidebar),
            KeyCode::Enter => Some(Action::SelectMenuEntry),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
        Focus::Composer => match key {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        Focus::Page(page) => page_action(page, key),
    }
}

/// 普通模式：全局快捷键 + 页面按键
fn page_action(page: Page, key: KeyCode) -> Option<Action> {
    let global = match key {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('m') => Some(Action::OpenSidebar),
        KeyCode::Tab => Some(Action::NextPage),
        KeyCode::BackTab => Some(Action::PrevPage),
        KeyCode::Char(c) => Page::from_key(c).map(Action::GoTo),
        _ => None,
    };
    if global.is_some() {
        return global;
    }

    match (page, key) {
        (_, KeyCode::Char('k') | KeyCode::Up) => Some(Action::MoveUp),
        (_, KeyCode::Char('j') | KeyCode::Down) => Some(Action::MoveDown),
        (_, KeyCode::Enter) => Some(Action::Activate),
        (Page::Feed, KeyCode::Char('l')) => Some(Action::ToggleLike),
        (Page::Feed, KeyCode::Char('t')) => Some(Action::OpenTip),
        (Page::Feed | Page::Profile, KeyCode::Char('s')) => Some(Action::OpenSubscribe),
        (Page::Discover | Page::Profile, KeyCode::Char('h') | KeyCode::Left) => {
            Some(Action::MoveLeft)
        }
        (Page::Discover | Page::Profile, KeyCode::Char('l') | KeyCode::Right) => {
            Some(Action::MoveRight)
        }
        (Page::Messages, KeyCode::Char('i')) => Some(Action::StartCompose),
        _ => None,
    }
}

/// 鼠标左键点击查找上一帧登记的区域
pub fn get_mouse_action(app: &App, event: MouseEvent) -> Option<Action> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => app.hits.lookup(event.column, event.row),
        _ => None,
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyCode) -> bool {
    match get_action(app.focus(), key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

/// 处理鼠标事件
pub fn handle_mouse_event(app: &mut App, event: MouseEvent) -> bool {
    match get_mouse_action(app, event) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_select_pages() {
        let focus = Focus::Page(Page::Feed);
        assert_eq!(get_action(focus, KeyCode::Char('2')), Some(Action::GoTo(Page::Discover)));
        assert_eq!(get_action(focus, KeyCode::Char('5')), Some(Action::GoTo(Page::Settings)));
    }

    #[test]
    fn test_like_key_is_page_specific() {
        assert_eq!(
            get_action(Focus::Page(Page::Feed), KeyCode::Char('l')),
            Some(Action::ToggleLike)
        );
        assert_eq!(
            get_action(Focus::Page(Page::Profile), KeyCode::Char('l')),
            Some(Action::MoveRight)
        );
    }

    #[test]
    fn test_composer_captures_text() {
        assert_eq!(get_action(Focus::Composer, KeyCode::Char('q')), Some(Action::Input('q')));
        assert_eq!(get_action(Focus::Composer, KeyCode::Char('1')), Some(Action::Input('1')));
    }

    #[test]
    fn test_tip_field_routing() {
        assert_eq!(
            get_action(Focus::Tip(TipField::Custom), KeyCode::Char('x')),
            Some(Action::Input('x'))
        );
        assert_eq!(
            get_action(Focus::Tip(TipField::Presets), KeyCode::Char('x')),
            Some(Action::CloseTip)
        );
    }
}
