// TestDependencies - in-memory implementations for testing
//
// Provides a catalog store that can be injected into ServerDeps for tests,
// with call recording and failure injection.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};

use super::{BaseCatalogStore, CatalogError, ServerDeps};
use crate::common::{CategoryId, PageDefaults};
use crate::domains::catalog::models::{Category, Item, ItemType};
use crate::domains::resources::models::Resource;
use crate::domains::resources::query::ResourceScope;
use crate::domains::tag::models::{TagGroupConfig, TagUsage};

// =============================================================================
// In-Memory Catalog Store
// =============================================================================

#[derive(Default)]
pub struct InMemoryCatalogStore {
    items: Vec<Item>,
    categories: Vec<Category>,
    resources: Vec<Resource>,
    tag_groups: Vec<TagGroupConfig>,
    failure: Mutex<Option<String>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.resources.push(resource);
        self
    }

    pub fn with_resources(mut self, resources: impl IntoIterator<Item = Resource>) -> Self {
        self.resources.extend(resources);
        self
    }

    /// Tag groups keep insertion order, which stands in for `sort_order`
    pub fn with_tag_group(mut self, group: TagGroupConfig) -> Self {
        self.tag_groups.push(group);
        self
    }

    /// Make every subsequent call fail with `message`
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock().unwrap_or_else(PoisonError::into_inner) = Some(message.into());
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Names of the store methods called so far
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn was_called(&self, method: &str) -> bool {
        self.calls().iter().any(|c| c == method)
    }

    fn record(&self, method: &str) -> Result<()> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(method.to_string());

        match self
            .failure
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
        {
            Some(message) => Err(CatalogError::Unavailable(message).into()),
            None => Ok(()),
        }
    }

    fn scoped(&self, scope: &ResourceScope) -> Vec<Resource> {
        let mut resources: Vec<Resource> = self
            .resources
            .iter()
            .filter(|r| r.in_scope(scope))
            .cloned()
            .collect();
        resources.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        resources
    }
}

#[async_trait]
impl BaseCatalogStore for InMemoryCatalogStore {
    async fn ping(&self) -> Result<()> {
        self.record("ping")
    }

    async fn find_items(&self, item_type: Option<ItemType>) -> Result<Vec<Item>> {
        self.record("find_items")?;
        let mut items: Vec<Item> = self
            .items
            .iter()
            .filter(|i| item_type.map_or(true, |t| i.item_type == t))
            .cloned()
            .collect();
        items.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(items)
    }

    async fn find_category(
        &self,
        item_slug: &str,
        item_type: ItemType,
        category_slug: &str,
    ) -> Result<Option<Category>> {
        self.record("find_category")?;
        let Some(item) = self
            .items
            .iter()
            .find(|i| i.slug == item_slug && i.item_type == item_type)
        else {
            return Ok(None);
        };

        Ok(self
            .categories
            .iter()
            .find(|c| c.item_id == item.id && c.slug == category_slug)
            .cloned())
    }

    async fn find_resources(&self, scope: &ResourceScope) -> Result<Vec<Resource>> {
        self.record("find_resources")?;
        Ok(self.scoped(scope))
    }

    async fn find_resource(&self, scope: &ResourceScope, slug: &str) -> Result<Option<Resource>> {
        self.record("find_resource")?;
        Ok(self.scoped(scope).into_iter().find(|r| r.slug == slug))
    }

    async fn find_tag_groups(&self, category_id: CategoryId) -> Result<Vec<TagGroupConfig>> {
        self.record("find_tag_groups")?;
        Ok(self
            .tag_groups
            .iter()
            .filter(|g| g.category_id == category_id)
            .cloned()
            .collect())
    }

    async fn find_tag_usage(&self, category_id: CategoryId) -> Result<Vec<TagUsage>> {
        self.record("find_tag_usage")?;
        Ok(self
            .resources
            .iter()
            .filter(|r| r.category_id == category_id)
            .flat_map(|r| r.tag_usages())
            .collect())
    }
}

// =============================================================================
// TestDependencies - Builder for test dependencies
// =============================================================================

#[derive(Clone)]
pub struct TestDependencies {
    pub store: Arc<InMemoryCatalogStore>,
    pub page_defaults: PageDefaults,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            store: Arc::new(InMemoryCatalogStore::new()),
            page_defaults: PageDefaults::default(),
        }
    }

    /// Set the in-memory store
    pub fn store(mut self, store: InMemoryCatalogStore) -> Self {
        self.store = Arc::new(store);
        self
    }

    /// Override default and maximum page sizes
    pub fn page_defaults(mut self, defaults: PageDefaults) -> Self {
        self.page_defaults = defaults;
        self
    }

    /// Convert into ServerDeps for testing. Clone `store` first to keep
    /// observing calls and injecting failures.
    pub fn into_server_deps(self) -> ServerDeps {
        ServerDeps::new(self.store, self.page_defaults)
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
