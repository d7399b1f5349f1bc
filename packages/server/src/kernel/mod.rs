//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod errors;
pub mod pg_catalog;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use errors::CatalogError;
pub use pg_catalog::PgCatalogStore;
pub use test_dependencies::{InMemoryCatalogStore, TestDependencies};
pub use traits::*;
