use juniper::{GraphQLEnum, GraphQLObject};
use uuid::Uuid;

use crate::domains::tag::models::{DynamicTagGroup, Tag, TagOption, TagType};

/// Tag type for GraphQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, GraphQLEnum)]
pub enum TagTypeData {
    Category,
    Channel,
    Misc,
}

impl From<TagType> for TagTypeData {
    fn from(tag_type: TagType) -> Self {
        match tag_type {
            TagType::Category => TagTypeData::Category,
            TagType::Channel => TagTypeData::Channel,
            TagType::Misc => TagTypeData::Misc,
        }
    }
}

/// Tag GraphQL data type
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "A tag assigned to resources or files")]
pub struct TagData {
    pub id: Uuid,
    pub name: String,
    pub tag_type: TagTypeData,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    /// Inline icon markup
    pub icon: Option<String>,
}

impl From<Tag> for TagData {
    fn from(tag: Tag) -> Self {
        let style = tag.style.unwrap_or_default();
        Self {
            id: tag.id.into_uuid(),
            name: tag.name,
            tag_type: tag.tag_type.into(),
            background_color: style.background_color,
            text_color: style.text_color,
            icon: tag.icon,
        }
    }
}

/// A tag offered by a filter group
#[derive(Debug, Clone, GraphQLObject)]
pub struct TagOptionData {
    pub tag: TagData,
    /// Resources in the category carrying this tag
    pub resource_count: i32,
}

impl From<TagOption> for TagOptionData {
    fn from(option: TagOption) -> Self {
        Self {
            tag: option.tag.into(),
            resource_count: i32::try_from(option.resource_count).unwrap_or(i32::MAX),
        }
    }
}

/// A filter dimension offered for a category
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "A filter group with the tags currently in use")]
pub struct TagGroupData {
    pub id: Uuid,
    pub name: String,
    pub category_id: Uuid,
    pub applies_to_resources: bool,
    pub applies_to_files: bool,
    pub tags: Vec<TagOptionData>,
}

impl From<DynamicTagGroup> for TagGroupData {
    fn from(group: DynamicTagGroup) -> Self {
        Self {
            id: group.id.into_uuid(),
            name: group.name,
            category_id: group.category_id.into_uuid(),
            applies_to_resources: group.applies_to_resources,
            applies_to_files: group.applies_to_files,
            tags: group.tags.into_iter().map(Into::into).collect(),
        }
    }
}
