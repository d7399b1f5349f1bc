//! Postgres-backed catalog store.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use super::BaseCatalogStore;
use crate::common::CategoryId;
use crate::domains::catalog::models::{Category, Item, ItemType};
use crate::domains::resources::models::Resource;
use crate::domains::resources::query::ResourceScope;
use crate::domains::tag::models::{TagGroupConfig, TagUsage};

/// Reads the catalog through the model queries.
#[derive(Clone)]
pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl BaseCatalogStore for PgCatalogStore {
    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn find_items(&self, item_type: Option<ItemType>) -> Result<Vec<Item>> {
        Item::find_all(item_type, &self.pool).await
    }

    async fn find_category(
        &self,
        item_slug: &str,
        item_type: ItemType,
        category_slug: &str,
    ) -> Result<Option<Category>> {
        Category::find_in_item(item_slug, item_type, category_slug, &self.pool).await
    }

    async fn find_resources(&self, scope: &ResourceScope) -> Result<Vec<Resource>> {
        Resource::find_in_scope(scope, &self.pool).await
    }

    async fn find_resource(&self, scope: &ResourceScope, slug: &str) -> Result<Option<Resource>> {
        Resource::find_by_slug(scope, slug, &self.pool).await
    }

    async fn find_tag_groups(&self, category_id: CategoryId) -> Result<Vec<TagGroupConfig>> {
        TagGroupConfig::find_for_category(category_id, &self.pool).await
    }

    async fn find_tag_usage(&self, category_id: CategoryId) -> Result<Vec<TagUsage>> {
        TagUsage::find_for_category(category_id, &self.pool).await
    }
}
