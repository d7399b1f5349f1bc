use chrono::{DateTime, Utc};
use juniper::{GraphQLEnum, GraphQLObject};
use uuid::Uuid;

use crate::common::Page;
use crate::domains::catalog::models::{Item, ItemType};

/// Item type for GraphQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, GraphQLEnum)]
pub enum ItemTypeData {
    Game,
    Web,
    App,
    ArtMusic,
}

impl From<ItemTypeData> for ItemType {
    fn from(data: ItemTypeData) -> Self {
        match data {
            ItemTypeData::Game => ItemType::Game,
            ItemTypeData::Web => ItemType::Web,
            ItemTypeData::App => ItemType::App,
            ItemTypeData::ArtMusic => ItemType::ArtMusic,
        }
    }
}

impl From<ItemType> for ItemTypeData {
    fn from(item_type: ItemType) -> Self {
        match item_type {
            ItemType::Game => ItemTypeData::Game,
            ItemType::Web => ItemTypeData::Web,
            ItemType::App => ItemTypeData::App,
            ItemType::ArtMusic => ItemTypeData::ArtMusic,
        }
    }
}

/// GraphQL type for Item
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "A top-level project in the marketplace")]
pub struct ItemData {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub item_type: ItemTypeData,
    pub author_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Item> for ItemData {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.into_uuid(),
            slug: item.slug,
            name: item.name,
            description: item.description,
            item_type: item.item_type.into(),
            author_name: item.author_name,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

/// One page of item search results
#[derive(Debug, Clone, GraphQLObject)]
pub struct ItemConnection {
    pub items: Vec<ItemData>,
    pub total: i32,
    pub has_more: bool,
}

impl From<Page<Item>> for ItemConnection {
    fn from(page: Page<Item>) -> Self {
        Self {
            total: i32::try_from(page.total).unwrap_or(i32::MAX),
            has_more: page.has_more,
            items: page.items.into_iter().map(Into::into).collect(),
        }
    }
}
