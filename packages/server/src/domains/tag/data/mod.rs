//! Tag domain data types (GraphQL types)

pub mod tag_types;

pub use tag_types::{TagData, TagGroupData, TagOptionData, TagTypeData};
