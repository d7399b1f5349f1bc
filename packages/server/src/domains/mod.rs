// Business domains
pub mod catalog;
pub mod resources;
pub mod search;
pub mod tag;
