// Common types and utilities shared across the application

pub mod auth;
pub mod entity_ids;
pub mod id;
pub mod pagination;

pub use auth::{Actor, Role};
pub use entity_ids::*;
pub use id::{Id, V4, V7};
pub use pagination::{paginate, Page, PageArgs, PageDefaults, ValidatedPageArgs};
