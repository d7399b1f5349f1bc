//! Resources domain - downloadable creations and the listing query engine
//!
//! Candidates for a scope come from the catalog store; tag filtering,
//! search scoring, ordering and pagination run in `query` as pure steps.

pub mod actions;
pub mod data;
pub mod models;
pub mod query;

// Re-export models
pub use models::{Author, FileTagAssignment, Resource, ResourceFile};

// Re-export data types (GraphQL types)
pub use data::{ResourceConnection, ResourceData, ResourcesInput};

// Re-export query types
pub use query::{GetResourcesParams, PaginatedResourcesResponse, ResourceScope, SortMode};

// Re-export actions
pub use actions::{get_resource, get_resources};
