pub mod actions;
pub mod data;
pub mod filters;
pub mod models;

// Re-export commonly used types
pub use actions::get_available_filter_tags;
pub use data::{TagData, TagGroupData};
pub use filters::build_available_filters;
pub use models::{DynamicAvailableFilterTags, DynamicTagGroup, Tag, TagGroupConfig, TagType};
