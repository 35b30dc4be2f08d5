//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

use super::modals::TipField;
use super::pages::{Page, ProfileTab};
use crate::models::Plan;

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,

    // 导航
    GoTo(Page),
    NextPage,
    PrevPage,
    OpenSidebar,
    CloseSidebar,
    SelectMenuEntry, // 抽屉中选中当前条目

    // 页面内焦点
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Activate, // Enter

    // 卡片/页面意图
    ToggleLike,
    OpenTip,
    OpenSubscribe,
    StartCompose,

    // 鼠标点击：先把焦点移到被点击的条目
    OpenCreator(usize), // 当前页面的第 i 张创作者卡片
    LikePost(usize),
    TipPost(usize),
    OpenMedia(usize),
    SelectTab(ProfileTab),
    SendMessage,

    // 弹窗
    CloseSubscribe,
    CloseTip,
    SwitchField,
    SelectPlan(Plan),
    ConfirmSubscribe,
    SelectPreset(usize),
    FocusTipField(TipField),
    SendTip,

    // 表单/通用交互
    Cancel,      // Esc
    Submit,      // Enter
    Input(char), // 输入字符
    DeleteChar,  // Backspace
}
