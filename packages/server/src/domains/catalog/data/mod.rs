//! Catalog domain data types (GraphQL types)

pub mod item_types;

pub use item_types::{ItemConnection, ItemData, ItemTypeData};
