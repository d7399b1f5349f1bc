use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::ItemId;
use crate::domains::search::Searchable;
use crate::kernel::CatalogError;

/// Kind of top-level project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemType {
    Game,
    Web,
    App,
    ArtMusic,
}

impl ItemType {
    pub const ALL: [ItemType; 4] = [
        ItemType::Game,
        ItemType::Web,
        ItemType::App,
        ItemType::ArtMusic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Game => "game",
            ItemType::Web => "web",
            ItemType::App => "app",
            ItemType::ArtMusic => "art-music",
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ItemType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "game" => Ok(ItemType::Game),
            "web" => Ok(ItemType::Web),
            "app" => Ok(ItemType::App),
            "art-music" | "art_music" => Ok(ItemType::ArtMusic),
            _ => Err(anyhow::anyhow!("Invalid item type: {}", s)),
        }
    }
}

/// A top-level project: a game, web project, app, or art/music entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub item_type: ItemType,
    pub author_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Searchable for Item {
    fn search_name(&self) -> &str {
        &self.name
    }

    fn search_description(&self) -> &str {
        &self.description
    }

    fn search_author(&self) -> Option<&str> {
        self.author_name.as_deref()
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ItemRow {
    id: ItemId,
    slug: String,
    name: String,
    description: String,
    item_type: String,
    author_name: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ItemRow> for Item {
    type Error = CatalogError;

    fn try_from(row: ItemRow) -> std::result::Result<Self, Self::Error> {
        let item_type = row
            .item_type
            .parse()
            .map_err(|e| CatalogError::invalid_row("items", row.id.into_uuid(), e))?;

        Ok(Item {
            id: row.id,
            slug: row.slug,
            name: row.name,
            description: row.description,
            item_type,
            author_name: row.author_name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

// =============================================================================
// Queries
// =============================================================================

impl Item {
    /// Find items, optionally restricted to one item type, in catalog order.
    pub async fn find_all(item_type: Option<ItemType>, pool: &PgPool) -> Result<Vec<Self>> {
        let rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT i.id, i.slug, i.name, i.description, i.item_type,
                   m.display_name AS author_name, i.created_at, i.updated_at
            FROM items i
            LEFT JOIN members m ON m.id = i.author_id
            WHERE ($1::text IS NULL OR i.item_type = $1)
            ORDER BY i.created_at, i.id
            "#,
        )
        .bind(item_type.map(|t| t.as_str()))
        .fetch_all(pool)
        .await?;

        rows.into_iter()
            .map(|row| Item::try_from(row).map_err(Into::into))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_type_strings_round_trip() {
        for item_type in ItemType::ALL {
            assert_eq!(item_type.as_str().parse::<ItemType>().unwrap(), item_type);
        }
        assert_eq!("art_music".parse::<ItemType>().unwrap(), ItemType::ArtMusic);
        assert!("movie".parse::<ItemType>().is_err());
    }

    #[test]
    fn item_type_serializes_kebab_case() {
        let json = serde_json::to_string(&ItemType::ArtMusic).unwrap();
        assert_eq!(json, "\"art-music\"");
    }
}
