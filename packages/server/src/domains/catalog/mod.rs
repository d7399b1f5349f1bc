//! Catalog domain - items (projects) and their categories

pub mod actions;
pub mod data;
pub mod models;

pub use actions::{best_match, search_items};
pub use data::{ItemConnection, ItemData, ItemTypeData};
pub use models::{Category, Item, ItemType};
