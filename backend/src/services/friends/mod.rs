//! Friend-link endpoints.

pub mod list;
