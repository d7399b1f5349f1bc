// Marketplace catalog - API Core
//
// Tag-group filtering, search scoring and paginated resource queries for a
// content marketplace. Storage sits behind the kernel's catalog store trait.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
