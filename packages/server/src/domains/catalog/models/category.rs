use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{CategoryId, ItemId};
use crate::domains::catalog::models::ItemType;

/// Named grouping of resources within an item ("Mods", "Maps", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub item_id: ItemId,
    pub slug: String,
    pub name: String,
    pub sort_order: i32,
}

impl Category {
    /// Resolve a category slug inside an item identified by slug and type.
    pub async fn find_in_item(
        item_slug: &str,
        item_type: ItemType,
        category_slug: &str,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT c.id, c.item_id, c.slug, c.name, c.sort_order
            FROM categories c
            INNER JOIN items i ON i.id = c.item_id
            WHERE i.slug = $1 AND i.item_type = $2 AND c.slug = $3
            "#,
        )
        .bind(item_slug)
        .bind(item_type.as_str())
        .bind(category_slug)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }
}
