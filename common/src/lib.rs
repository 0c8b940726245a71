//! Types and static data shared by the blog backend.

pub mod data;
pub mod model;
