//! 页面定义与各页面的本地状态
//!
//! 每次切换页面都会重新构造对应的 `PageView`，页面内的局部状态
//! （点赞、草稿、标签页）随之重置。

use serde::{Deserialize, Serialize};

use crate::models::{AccountSettings, ChatMessage, Creator, CreatorSummary, Post};
use crate::sample;

/// 顶层页面
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Feed,
    Discover,
    Profile,
    Messages,
    Settings,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Feed,
        Page::Discover,
        Page::Profile,
        Page::Messages,
        Page::Settings,
    ];

    /// 侧栏标签
    pub fn label(&self) -> &'static str {
        match self {
            Page::Feed => "Feed",
            Page::Discover => "Discover",
            Page::Profile => "My Profile",
            Page::Messages => "Messages",
            Page::Settings => "Settings",
        }
    }

    /// 底部导航标签
    pub fn short_label(&self) -> &'static str {
        match self {
            Page::Feed => "Feed",
            Page::Discover => "Discover",
            Page::Profile => "Profile",
            Page::Messages => "Chats",
            Page::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Feed => "⌂",
            Page::Discover => "☷",
            Page::Profile => "★",
            Page::Messages => "✉",
            Page::Settings => "⚙",
        }
    }

    /// 数字快捷键 (1-5)
    pub fn key_number(&self) -> u8 {
        match self {
            Page::Feed => 1,
            Page::Discover => 2,
            Page::Profile => 3,
            Page::Messages => 4,
            Page::Settings => 5,
        }
    }

    pub fn from_key(key: char) -> Option<Self> {
        Page::ALL
            .into_iter()
            .find(|p| char::from(b'0' + p.key_number()) == key)
    }

    pub fn index(&self) -> usize {
        usize::from(self.key_number() - 1)
    }

    pub fn next(&self) -> Page {
        Page::ALL[(self.index() + 1) % Page::ALL.len()]
    }

    pub fn prev(&self) -> Page {
        Page::ALL[(self.index() + Page::ALL.len() - 1) % Page::ALL.len()]
    }
}

/// 帖子卡片及其本地点赞状态
#[derive(Debug, Clone)]
pub struct PostCard {
    pub post: Post,
    pub liked: bool,
}

impl PostCard {
    pub fn new(post: Post) -> Self {
        Self { post, liked: false }
    }

    pub fn like_label(&self) -> &'static str {
        if self.liked { "Liked" } else { "Like" }
    }
}

/// 动态页上可获得焦点的条目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedItem {
    Post(usize),
    Creator(usize),
}

#[derive(Debug, Clone)]
pub struct FeedView {
    pub posts: Vec<PostCard>, // 挂载时构造一次
    pub suggested: Vec<CreatorSummary>,
    pub cursor: usize,
}

impl FeedView {
    pub fn new() -> Self {
        Self {
            posts: sample::feed_posts().into_iter().map(PostCard::new).collect(),
            suggested: sample::suggested_creators(),
            cursor: 0,
        }
    }

    fn len(&self) -> usize {
        self.posts.len() + self.suggested.len()
    }

    pub fn focused(&self) -> FeedItem {
        if self.cursor < self.posts.len() {
            FeedItem::Post(self.cursor)
        } else {
            FeedItem::Creator(self.cursor - self.posts.len())
        }
    }

    pub fn focused_post(&self) -> Option<&PostCard> {
        match self.focused() {
            FeedItem::Post(i) => self.posts.get(i),
            FeedItem::Creator(_) => None,
        }
    }

    pub fn move_focus(&mut self, delta: isize) {
        self.cursor = step(self.cursor, delta, self.len());
    }

    /// 切换当前帖子的点赞状态，返回新状态
    pub fn toggle_like(&mut self) -> Option<bool> {
        match self.focused() {
            FeedItem::Post(i) => self.posts.get_mut(i).map(|card| {
                card.liked = !card.liked;
                card.liked
            }),
            FeedItem::Creator(_) => None,
        }
    }
}

impl Default for FeedView {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct DiscoverView {
    pub creators: Vec<CreatorSummary>,
    pub cursor: usize,
}

impl DiscoverView {
    pub const COLUMNS: usize = 3;

    pub fn new() -> Self {
        Self {
            creators: sample::discover_creators(),
            cursor: 0,
        }
    }

    pub fn move_focus(&mut self, delta: isize) {
        self.cursor = step(self.cursor, delta, self.creators.len());
    }

    pub fn focused(&self) -> Option<&CreatorSummary> {
        self.creators.get(self.cursor)
    }
}

impl Default for DiscoverView {
    fn default() -> Self {
        Self::new()
    }
}

/// 主页内容标签
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Posts,
    Videos,
    Likes,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 3] = [ProfileTab::Posts, ProfileTab::Videos, ProfileTab::Likes];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileTab::Posts => "Posts",
            ProfileTab::Videos => "Videos",
            ProfileTab::Likes => "Likes",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ProfileTab::Posts => "▣",
            ProfileTab::Videos => "▶",
            ProfileTab::Likes => "♥",
        }
    }

    fn index(&self) -> usize {
        match self {
            ProfileTab::Posts => 0,
            ProfileTab::Videos => 1,
            ProfileTab::Likes => 2,
        }
    }

    pub fn cycle(&self, delta: isize) -> ProfileTab {
        let len = Self::ALL.len() as isize;
        let i = (self.index() as isize + delta).rem_euclid(len);
        Self::ALL[i as usize]
    }
}

#[derive(Debug, Clone)]
pub struct ProfileView {
    pub creator: Creator,
    pub tab: ProfileTab,
    /// 主页内容始终对未订阅用户锁定
    pub locked: bool,
}

impl ProfileView {
    pub fn new(creator: Creator) -> Self {
        Self {
            creator,
            tab: ProfileTab::Posts,
            locked: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MessagesView {
    pub transcript: Vec<ChatMessage>,
    pub draft: String,
    pub composing: bool,
    pub error: Option<String>,
}

impl MessagesView {
    pub fn new() -> Self {
        Self {
            transcript: sample::conversation(),
            draft: String::new(),
            composing: false,
            error: None,
        }
    }
}

impl Default for MessagesView {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct SettingsView {
    pub account: AccountSettings,
}

/// 当前挂载的页面，同一时刻只有一个
#[derive(Debug, Clone)]
pub enum PageView {
    Feed(FeedView),
    Discover(DiscoverView),
    Profile(ProfileView),
    Messages(MessagesView),
    Settings(SettingsView),
}

impl PageView {
    pub fn page(&self) -> Page {
        match self {
            PageView::Feed(_) => Page::Feed,
            PageView::Discover(_) => Page::Discover,
            PageView::Profile(_) => Page::Profile,
            PageView::Messages(_) => Page::Messages,
            PageView::Settings(_) => Page::Settings,
        }
    }
}

/// 在 [0, len) 内移动光标，不回绕
fn step(cursor: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let next = cursor as isize + delta;
    next.clamp(0, len as isize - 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_keys() {
        for page in Page::ALL {
            let key = char::from(b'0' + page.key_number());
            assert_eq!(Page::from_key(key), Some(page));
        }
        assert_eq!(Page::from_key('0'), None);
        assert_eq!(Page::from_key('6'), None);
    }

    #[test]
    fn test_page_cycle() {
        assert_eq!(Page::Feed.next(), Page::Discover);
        assert_eq!(Page::Settings.next(), Page::Feed);
        assert_eq!(Page::Feed.prev(), Page::Settings);
    }

    #[test]
    fn test_feed_focus_moves_from_posts_to_creators() {
        let mut feed = FeedView::new();
        assert_eq!(feed.focused(), FeedItem::Post(0));
        feed.move_focus(3);
        assert_eq!(feed.focused(), FeedItem::Creator(0));
        feed.move_focus(100);
        assert_eq!(feed.focused(), FeedItem::Creator(3));
        feed.move_focus(-100);
        assert_eq!(feed.focused(), FeedItem::Post(0));
    }

    #[test]
    fn test_toggle_like_only_affects_focused_card() {
        let mut feed = FeedView::new();
        feed.move_focus(1);
        assert_eq!(feed.toggle_like(), Some(true));
        assert!(!feed.posts[0].liked);
        assert!(feed.posts[1].liked);
        assert!(!feed.posts[2].liked);
        assert_eq!(feed.posts[1].like_label(), "Liked");
        assert_eq!(feed.posts[0].like_label(), "Like");

        assert_eq!(feed.toggle_like(), Some(false));
        assert_eq!(feed.posts[1].like_label(), "Like");
    }

    #[test]
    fn test_profile_tab_cycle() {
        assert_eq!(ProfileTab::Posts.cycle(1), ProfileTab::Videos);
        assert_eq!(ProfileTab::Likes.cycle(1), ProfileTab::Posts);
        assert_eq!(ProfileTab::Posts.cycle(-1), ProfileTab::Likes);
    }
}
