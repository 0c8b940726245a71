//! Snippet collection endpoints.

pub mod list;
