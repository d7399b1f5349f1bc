// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Filtering, scoring and pagination live in the domains and run over what
// these traits return.
//
// Naming convention: Base* for trait names (e.g., BaseCatalogStore)

use anyhow::Result;
use async_trait::async_trait;

use crate::common::CategoryId;
use crate::domains::catalog::models::{Category, Item, ItemType};
use crate::domains::resources::models::Resource;
use crate::domains::resources::query::ResourceScope;
use crate::domains::tag::models::{TagGroupConfig, TagUsage};

// =============================================================================
// Catalog Store Trait (Infrastructure - read access to catalog data)
// =============================================================================

#[async_trait]
pub trait BaseCatalogStore: Send + Sync {
    /// Cheap connectivity probe used by the health endpoint
    async fn ping(&self) -> Result<()>;

    /// Items, optionally restricted to one item type, in catalog order
    async fn find_items(&self, item_type: Option<ItemType>) -> Result<Vec<Item>>;

    /// Resolve a category slug inside an item
    async fn find_category(
        &self,
        item_slug: &str,
        item_type: ItemType,
        category_slug: &str,
    ) -> Result<Option<Category>>;

    /// Candidate resources for a scope, with tags and files attached.
    /// Returned oldest first so downstream stable sorts break ties the same
    /// way every time.
    async fn find_resources(&self, scope: &ResourceScope) -> Result<Vec<Resource>>;

    /// One resource by slug inside a scope
    async fn find_resource(&self, scope: &ResourceScope, slug: &str) -> Result<Option<Resource>>;

    /// Configured tag groups of a category, in display order
    async fn find_tag_groups(&self, category_id: CategoryId) -> Result<Vec<TagGroupConfig>>;

    /// Every tag assignment observed on resources of a category
    async fn find_tag_usage(&self, category_id: CategoryId) -> Result<Vec<TagUsage>>;
}
