//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各种状态转换方法

use tracing::{debug, info, warn};

use super::actions::Action;
use super::modals::{SubscribeModal, TipField, TipModal};
use super::pages::{DiscoverView, FeedItem, Page, PageView};
use super::state::{App, Focus};
use crate::error::ValidationError;
use crate::models::{ChatMessage, Creator, CreatorSummary, MediaKind, Sender};

impl App {
    /// 核心逻辑分发
    pub fn dispatch(&mut self, action: Action) -> bool {
        // 状态提示只保留到下一次操作
        self.message = None;

        match action {
            Action::Quit => return true,

            Action::GoTo(page) => self.set_page(page),
            Action::NextPage => self.set_page(self.active_page().next()),
            Action::PrevPage => self.set_page(self.active_page().prev()),
            Action::OpenSidebar => self.open_sidebar(),
            Action::CloseSidebar => self.close_sidebar(),
            Action::SelectMenuEntry => self.select_menu_entry(),

            Action::MoveUp => self.move_focus(0, -1),
            Action::MoveDown => self.move_focus(0, 1),
            Action::MoveLeft => self.move_focus(-1, 0),
            Action::MoveRight => self.move_focus(1, 0),
            Action::Activate => self.activate(),

            Action::ToggleLike => self.toggle_like(),
            Action::OpenTip => self.open_tip(),
            Action::OpenSubscribe => self.open_subscribe(),
            Action::StartCompose => self.start_compose(),

            Action::OpenCreator(i) => self.open_creator_at(i),
            Action::LikePost(i) => {
                if self.focus_post(i) {
                    self.toggle_like();
                }
            }
            Action::TipPost(i) => {
                if self.focus_post(i) {
                    self.open_tip();
                }
            }
            Action::OpenMedia(i) => {
                if self.focus_post(i) {
                    self.activate();
                }
            }
            Action::SelectTab(tab) => {
                if let PageView::Profile(profile) = &mut self.view {
                    profile.tab = tab;
                }
            }
            Action::SendMessage => self.send_message(),

            Action::CloseSubscribe => self.close_subscribe(),
            Action::CloseTip => self.close_tip(),
            Action::SwitchField => {
                if let Some(tip) = self.tip.as_mut() {
                    tip.switch_field();
                }
            }
            Action::SelectPlan(plan) => {
                if let Some(sub) = self.subscribe.as_mut() {
                    sub.plan = plan;
                }
            }
            Action::ConfirmSubscribe => self.confirm_subscribe(),
            Action::SelectPreset(i) => {
                if let Some(tip) = self.tip.as_mut() {
                    tip.select_preset(i);
                }
            }
            Action::FocusTipField(field) => {
                if let Some(tip) = self.tip.as_mut() {
                    tip.field = field;
                }
            }
            Action::SendTip => self.send_tip(),

            Action::Cancel => self.cancel(),
            Action::Submit => match self.focus() {
                Focus::Tip(_) => self.send_tip(),
                Focus::Subscribe => self.confirm_subscribe(),
                Focus::Composer => self.send_message(),
                Focus::Menu | Focus::Page(_) => {}
            },

            Action::Input(c) => match self.focus() {
                Focus::Tip(_) => {
                    if let Some(tip) = self.tip.as_mut() {
                        tip.push_char(c);
                    }
                }
                Focus::Composer => {
                    if let PageView::Messages(m) = &mut self.view {
                        m.draft.push(c);
                        m.error = None;
                    }
                }
                _ => {}
            },

            Action::DeleteChar => match self.focus() {
                Focus::Tip(_) => {
                    if let Some(tip) = self.tip.as_mut() {
                        tip.pop_char();
                    }
                }
                Focus::Composer => {
                    if let PageView::Messages(m) = &mut self.view {
                        m.draft.pop();
                    }
                }
                _ => {}
            },
        }
        false
    }

    // ============ 导航相关 ============

    /// 切换页面：卸载当前页面并挂载新页面，菜单随之关闭
    pub fn set_page(&mut self, page: Page) {
        debug!(from = ?self.active_page(), to = ?page, "page change");
        self.view = self.mount(page);
        self.sidebar_open = false;
    }

    pub fn open_sidebar(&mut self) {
        self.sidebar_open = true;
        self.menu_cursor = self.active_page().index();
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    fn select_menu_entry(&mut self) {
        let page = Page::ALL[self.menu_cursor.min(Page::ALL.len() - 1)];
        self.set_page(page);
    }

    /// 打开创作者主页：复制卡片数据到选中创作者，并切换到主页
    pub fn open_creator(&mut self, summary: &CreatorSummary) {
        info!(creator = %summary.name, "open creator profile");
        self.selected_creator = Some(Creator::from(summary));
        self.set_page(Page::Profile);
    }

    // ============ 页面内焦点 ============

    /// 把动态页焦点移到第 i 条帖子
    fn focus_post(&mut self, i: usize) -> bool {
        match &mut self.view {
            PageView::Feed(feed) if i < feed.posts.len() => {
                feed.cursor = i;
                true
            }
            _ => false,
        }
    }

    /// 打开当前页面第 i 张创作者卡片（动态页的推荐或发现页网格）
    fn open_creator_at(&mut self, i: usize) {
        let summary = match &self.view {
            PageView::Feed(feed) => feed.suggested.get(i).cloned(),
            PageView::Discover(discover) => discover.creators.get(i).cloned(),
            _ => None,
        };
        if let Some(summary) = summary {
            self.open_creator(&summary);
        }
    }

    fn move_focus(&mut self, dx: isize, dy: isize) {
        match self.focus() {
            Focus::Tip(TipField::Presets) => {
                if let Some(tip) = self.tip.as_mut() {
                    tip.move_preset(dx + dy * TipModal::COLUMNS as isize);
                }
            }
            Focus::Tip(TipField::Custom) => {}
            Focus::Subscribe => {
                if let Some(sub) = self.subscribe.as_mut() {
                    sub.move_plan(dy);
                }
            }
            Focus::Menu => {
                let next = self.menu_cursor as isize + dy;
                self.menu_cursor = next.clamp(0, Page::ALL.len() as isize - 1) as usize;
            }
            Focus::Composer => {}
            Focus::Page(_) => match &mut self.view {
                PageView::Feed(feed) => feed.move_focus(dy),
                PageView::Discover(discover) => {
                    discover.move_focus(dx + dy * DiscoverView::COLUMNS as isize)
                }
                PageView::Profile(profile) => profile.tab = profile.tab.cycle(dx),
                PageView::Messages(_) | PageView::Settings(_) => {}
            },
        }
    }

    /// Enter：激活当前焦点条目
    fn activate(&mut self) {
        match &self.view {
            PageView::Feed(feed) => match feed.focused() {
                FeedItem::Post(i) => {
                    let (locked, kind) = (feed.posts[i].post.locked, feed.posts[i].post.kind);
                    if locked {
                        self.open_subscribe();
                    } else if kind == MediaKind::Video {
                        self.message = Some("Playback is not available in the demo".to_string());
                    }
                }
                FeedItem::Creator(i) => {
                    let summary = feed.suggested[i].clone();
                    self.open_creator(&summary);
                }
            },
            PageView::Discover(discover) => {
                if let Some(summary) = discover.focused().cloned() {
                    self.open_creator(&summary);
                }
            }
            PageView::Profile(_) => self.open_subscribe(),
            PageView::Messages(_) => self.start_compose(),
            PageView::Settings(_) => {}
        }
    }

    // ============ 卡片意图 ============

    fn toggle_like(&mut self) {
        if let PageView::Feed(feed) = &mut self.view {
            if let Some(liked) = feed.toggle_like() {
                let post = feed.focused_post().map(|card| card.post.id);
                debug!(?post, liked, "toggle like");
            }
        }
    }

    fn start_compose(&mut self) {
        if let PageView::Messages(m) = &mut self.view {
            m.composing = true;
        }
    }

    // ============ 弹窗相关 ============

    /// 没有可订阅的创作者时不打开
    pub fn open_subscribe(&mut self) {
        match self.subscribe_target() {
            Some(creator) => self.subscribe = Some(SubscribeModal::new(creator)),
            None => debug!(page = ?self.active_page(), "nothing to subscribe to"),
        }
    }

    pub fn close_subscribe(&mut self) {
        self.subscribe = None;
    }

    pub fn open_tip(&mut self) {
        self.tip = Some(TipModal::new());
    }

    pub fn close_tip(&mut self) {
        self.tip = None;
    }

    fn confirm_subscribe(&mut self) {
        let Some(sub) = self.subscribe.as_mut() else {
            return;
        };
        match self.backend.subscribe(&sub.creator, sub.plan) {
            Ok(()) => {
                info!(creator = %sub.creator, plan = ?sub.plan, "subscription confirmed");
                self.message = Some(format!("Subscribed: {}", sub.plan.label()));
                self.subscribe = None;
            }
            Err(e) => {
                warn!(error = %e, "subscribe failed");
                sub.notice = Some(format!("Not subscribed: {e}"));
            }
        }
    }

    fn send_tip(&mut self) {
        let Some(tip) = self.tip.as_mut() else {
            return;
        };
        let amount = match tip.amount() {
            Ok(amount) => amount,
            Err(e) => {
                tip.error = Some(e);
                return;
            }
        };
        match self.backend.tip(amount) {
            Ok(()) => {
                info!(cents = amount.cents(), "tip sent");
                self.message = Some(format!("Tip of {amount} sent"));
                self.tip = None;
            }
            Err(e) => {
                warn!(error = %e, cents = amount.cents(), "tip failed");
                tip.notice = Some(format!("Tip of {amount} not sent: {e}"));
            }
        }
    }

    fn send_message(&mut self) {
        let PageView::Messages(m) = &mut self.view else {
            return;
        };
        let body = m.draft.trim().to_string();
        if body.is_empty() {
            m.error = Some(ValidationError::EmptyMessage.to_string());
            return;
        }
        match self.backend.send_message(&body) {
            Ok(()) => {
                let msg = ChatMessage::new(Sender::Me, body);
                debug!(id = %msg.id, "message sent");
                m.transcript.push(msg);
                m.draft.clear();
                m.error = None;
            }
            Err(e) => {
                warn!(error = %e, "send message failed");
                m.error = Some(format!("Not sent: {e}"));
            }
        }
    }

    // ============ 通用操作 ============

    /// 取消当前操作
    pub fn cancel(&mut self) {
        if let PageView::Messages(m) = &mut self.view {
            m.composing = false;
            m.error = None;
        }
    }
}
