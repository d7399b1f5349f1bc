//! Server dependencies for queries (using traits for testability)
//!
//! This module provides the central dependency container handed to every
//! query entry point. Storage sits behind a trait so tests can swap in the
//! in-memory store.

use sqlx::PgPool;
use std::sync::Arc;

use crate::common::PageDefaults;
use crate::kernel::{BaseCatalogStore, PgCatalogStore};

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to queries (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    pub store: Arc<dyn BaseCatalogStore>,
    pub page_defaults: PageDefaults,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(store: Arc<dyn BaseCatalogStore>, page_defaults: PageDefaults) -> Self {
        Self {
            store,
            page_defaults,
        }
    }

    /// Dependencies backed by Postgres
    pub fn postgres(pool: PgPool, page_defaults: PageDefaults) -> Self {
        Self::new(Arc::new(PgCatalogStore::new(pool)), page_defaults)
    }

    pub fn store(&self) -> &dyn BaseCatalogStore {
        self.store.as_ref()
    }
}
