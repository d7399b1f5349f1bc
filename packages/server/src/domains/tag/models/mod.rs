pub mod tag;
pub mod tag_group;

pub use tag::{Tag, TagStyle, TagType};
pub use tag_group::{
    DynamicAvailableFilterTags, DynamicTagGroup, TagGroupConfig, TagLevel, TagOption, TagUsage,
};
