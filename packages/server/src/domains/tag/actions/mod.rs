pub mod queries;

pub use queries::get_available_filter_tags;
