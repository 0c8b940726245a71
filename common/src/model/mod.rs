pub mod friend_link;
pub mod snippet;
