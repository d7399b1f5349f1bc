//! Resource listing queries: the request descriptor and the pure pipeline
//! that answers it.

pub mod params;
pub mod pipeline;

pub use params::{GetResourcesParams, ResourceScope, SortMode};
pub use pipeline::{
    filter_and_order, run_resource_query, sort_resources, PaginatedResourcesResponse,
};
