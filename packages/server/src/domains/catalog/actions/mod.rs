pub mod queries;

pub use queries::{best_match, search_items};
