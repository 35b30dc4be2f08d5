//! App 状态定义 (Model)
//!
//! 外壳持有的全部跨页面状态：当前页面、侧栏、两个弹窗、选中的创作者

use crate::backend::{Collaborators, Offline};
use crate::config::Config;
use crate::models::{AccountSettings, Creator};
use crate::sample;

use super::hit::HitMap;
use super::modals::{SubscribeModal, TipField, TipModal};
use super::pages::{
    DiscoverView, FeedItem, FeedView, MessagesView, Page, PageView, ProfileView, SettingsView,
};

/// 应用状态
pub struct App {
    pub view: PageView,
    pub sidebar_open: bool,
    pub menu_cursor: usize, // 抽屉中高亮的条目
    pub subscribe: Option<SubscribeModal>,
    pub tip: Option<TipModal>,
    pub selected_creator: Option<Creator>,
    pub message: Option<String>,
    pub account: AccountSettings,
    pub wide_breakpoint: u16,
    pub hits: HitMap, // 上一帧记录的可点击区域
    pub backend: Box<dyn Collaborators>,
}

/// 当前接收键盘输入的区域，按层级从上到下
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Tip(TipField),
    Subscribe,
    Menu,
    Composer,
    Page(Page),
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: &Config) -> Self {
        Self::with_backend(config, Box::new(Offline))
    }

    pub fn with_backend(config: &Config, backend: Box<dyn Collaborators>) -> Self {
        let mut app = Self {
            view: PageView::Feed(FeedView::new()),
            sidebar_open: false,
            menu_cursor: 0,
            subscribe: None,
            tip: None,
            selected_creator: None,
            message: None,
            account: config.account.clone(),
            wide_breakpoint: config.ui.wide_breakpoint,
            hits: HitMap::default(),
            backend,
        };
        if config.ui.start_page != Page::Feed {
            app.set_page(config.ui.start_page);
        }
        app
    }

    pub fn active_page(&self) -> Page {
        self.view.page()
    }

    /// 构造新的页面视图
    pub(super) fn mount(&self, page: Page) -> PageView {
        match page {
            Page::Feed => PageView::Feed(FeedView::new()),
            Page::Discover => PageView::Discover(DiscoverView::new()),
            Page::Profile => PageView::Profile(ProfileView::new(
                self.selected_creator
                    .clone()
                    .unwrap_or_else(sample::default_creator),
            )),
            Page::Messages => PageView::Messages(MessagesView::new()),
            Page::Settings => PageView::Settings(SettingsView {
                account: self.account.clone(),
            }),
        }
    }

    /// 按层级决定输入焦点
    pub fn focus(&self) -> Focus {
        if let Some(tip) = &self.tip {
            return Focus::Tip(tip.field);
        }
        if self.subscribe.is_some() {
            return Focus::Subscribe;
        }
        if self.sidebar_open {
            return Focus::Menu;
        }
        match &self.view {
            PageView::Messages(m) if m.composing => Focus::Composer,
            view => Focus::Page(view.page()),
        }
    }

    /// 当前页面可订阅的创作者名：主页的创作者，或动态页焦点所在的帖子/推荐创作者
    pub fn subscribe_target(&self) -> Option<String> {
        match &self.view {
            PageView::Profile(p) => Some(p.creator.name.clone()),
            PageView::Feed(f) => match f.focused() {
                FeedItem::Post(i) => f.posts.get(i).map(|card| card.post.creator.name.clone()),
                FeedItem::Creator(i) => f.suggested.get(i).map(|c| c.name.clone()),
            },
            PageView::Discover(_) | PageView::Messages(_) | PageView::Settings(_) => None,
        }
    }
}
