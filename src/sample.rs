//! 示例数据
//!
//! 所有页面使用的固定数据，页面挂载时构造

use crate::models::{
    ChatMessage, Creator, CreatorRef, CreatorSummary, MediaKind, Post, Sender,
};

pub const AVATARS: [&str; 5] = [
    "https://i.pravatar.cc/150?img=1",
    "https://i.pravatar.cc/150?img=2",
    "https://i.pravatar.cc/150?img=3",
    "https://i.pravatar.cc/150?img=4",
    "https://i.pravatar.cc/150?img=5",
];

pub const PHOTO_COUNT: usize = 12;

pub const TRENDING_TAGS: [&str; 5] = ["#bts", "#fitness", "#vlog", "#travel", "#studio"];

/// 第 i 张示例图片
pub fn photo(i: usize) -> String {
    format!("https://picsum.photos/seed/only{}/800/600", i % PHOTO_COUNT)
}

fn price(base: f64, step: f64, n: usize) -> String {
    format!("{:.2}", base + step * n as f64)
}

fn creator_ref(name: &str, avatar: usize, verified: bool) -> CreatorRef {
    CreatorRef {
        name: name.to_string(),
        avatar: AVATARS[avatar].to_string(),
        verified,
    }
}

/// 动态页帖子
pub fn feed_posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            kind: MediaKind::Image,
            cover: photo(0),
            caption: "Sunset set sneak peek ☀️".to_string(),
            locked: false,
            time: "2h ago".to_string(),
            creator: creator_ref("Lina", 0, true),
        },
        Post {
            id: 2,
            kind: MediaKind::Video,
            cover: photo(1),
            caption: "New vlog dropped!".to_string(),
            locked: true,
            time: "5h ago".to_string(),
            creator: creator_ref("Mika", 1, false),
        },
        Post {
            id: 3,
            kind: MediaKind::Image,
            cover: photo(2),
            caption: "BTS from today’s shoot".to_string(),
            locked: true,
            time: "1d ago".to_string(),
            creator: creator_ref("Ava", 3, true),
        },
    ]
}

/// 动态页侧栏的推荐创作者
pub fn suggested_creators() -> Vec<CreatorSummary> {
    ["Luna", "Kira", "Nova", "Aria"]
        .iter()
        .enumerate()
        .map(|(i, name)| CreatorSummary {
            name: name.to_string(),
            avatar: AVATARS[(i + 1) % AVATARS.len()].to_string(),
            cover: photo(i + 4),
            verified: i % 2 == 0,
            bio: "Daily sets • Behind the scenes • Q&A".to_string(),
            price: price(9.99, 3.0, i),
        })
        .collect()
}

/// 发现页创作者
pub fn discover_creators() -> Vec<CreatorSummary> {
    ["Jade", "Ivy", "Rin", "Sia", "Nori", "Ari", "Mila", "Zoë", "Yui"]
        .iter()
        .enumerate()
        .map(|(i, name)| CreatorSummary {
            name: name.to_string(),
            avatar: AVATARS[i % AVATARS.len()].to_string(),
            cover: photo(i + 3),
            verified: i % 3 == 0,
            bio: "Exclusive shoots • Livestreams • Polls".to_string(),
            price: price(12.99, 4.0, i % 3),
        })
        .collect()
}

/// 未选择创作者时主页显示的默认创作者
pub fn default_creator() -> Creator {
    Creator {
        name: "Lina".to_string(),
        verified: true,
        tagline: "Weekly sets • BTS • livestreams".to_string(),
        price: "14.99".to_string(),
        avatar: AVATARS[0].to_string(),
        banner: photo(5),
    }
}

/// 消息页初始对话
pub fn conversation() -> Vec<ChatMessage> {
    vec![
        ChatMessage::new(
            Sender::Creator("Mika".to_string()),
            "Hey! Thanks for subscribing 💜".to_string(),
        ),
        ChatMessage::new(
            Sender::Me,
            "Loving the new set! When’s the next drop?".to_string(),
        ),
    ]
}
