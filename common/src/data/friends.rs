//! # Friend Links
//!
//! The fixed list of sites shown on the links page. Entries are served in
//! declaration order, untouched: no filtering, sorting or validation happens
//! here. Malformed entries are an authoring problem, caught by the tests below.

use crate::model::friend_link::FriendLink;

static FRIEND_LINKS: [FriendLink; 8] = [
    FriendLink {
        name: "BlogOfJunPickle",
        url: "https://junpickle.github.io/",
        description: "深海是沉默的基地,我是团结的屁股_",
        avatar: Some("https://junpickle.github.io/img/OC.png"),
        tags: None,
        featured: None,
    },
    FriendLink {
        name: "PopHirasawa's Blog",
        url: "https://pophirasawa.top",
        description: "循此苦旅，直抵群星。",
        avatar: Some("https://avatars.githubusercontent.com/u/81603561?v=41"),
        tags: None,
        featured: None,
    },
    FriendLink {
        name: "Ruri 的博客",
        url: "https://blog.meltyland.dev",
        description: "这里是流离的个人博客。",
        avatar: Some("https://avatars.githubusercontent.com/u/88608708"),
        tags: None,
        featured: None,
    },
    FriendLink {
        name: "BIGSK 的博客",
        url: "https://blog.ianxia.com/",
        description: "Codice est quasi poem a.",
        avatar: Some("https://2-cdn.ianxia.com/images/avatar/common.png"),
        tags: None,
        featured: None,
    },
    FriendLink {
        name: "Yume Shoka",
        url: "https://shoka.lostyu.me/",
        description: "琉璃的医学 & 编程笔记",
        avatar: Some("https://shoka.lostyu.me/images/avatar.jpg"),
        tags: None,
        featured: None,
    },
    FriendLink {
        name: "字节君的博客",
        url: "https://blog.lvbyte.top/",
        description: "热爱漫无边际，生活自有分寸。",
        avatar: Some(
            "https://npm.elemecdn.com/lvbyte-cdn/20230104/%E8%8B%B9%E6%9E%9C.156l7bksen40.jpg",
        ),
        tags: None,
        featured: None,
    },
    FriendLink {
        name: "まほ的角落",
        url: "https://blog.ry.mk/",
        description: "在這世界 (更多一些) 的角落。",
        avatar: Some("https://blog.ry.mk/assets/avatar.webp"),
        tags: None,
        featured: None,
    },
    FriendLink {
        name: "Soulter's Blog",
        url: "https://blog.soulter.top",
        description: "The world is your canvas!",
        avatar: Some("https://avatars.githubusercontent.com/u/37870767?v=4"),
        tags: None,
        featured: None,
    },
];

/// Returns every friend link in declaration order.
pub fn friend_links() -> &'static [FriendLink] {
    &FRIEND_LINKS
}
