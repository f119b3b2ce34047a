//! CLI command implementations

pub mod completions;
pub mod find;
pub mod layout;
pub mod list;
pub mod path;
pub mod route;
