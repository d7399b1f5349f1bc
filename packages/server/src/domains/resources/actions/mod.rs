pub mod queries;

pub use queries::{get_resource, get_resources};
