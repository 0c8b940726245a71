use serde::Serialize;

/// An external site listed on the links page.
///
/// Entries are authored at build time and compiled into the binary (see
/// `crate::data::friends`), so every field borrows from `'static` data and the
/// type is never deserialized. Absent optional fields are left out of the JSON
/// form instead of being written as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FriendLink {
    /// Display name. Not guaranteed to be unique.
    pub name: &'static str,
    /// Target URL of the site.
    pub url: &'static str,
    pub description: &'static str,
    /// Optional avatar image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<&'static str>,
    /// Optional category labels, in authored order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<&'static [&'static str]>,
    /// Marks the entry for highlighting on the links page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}
