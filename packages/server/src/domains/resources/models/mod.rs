pub mod resource;
pub mod resource_file;

pub use resource::{Author, Resource};
pub use resource_file::{FileTagAssignment, ResourceFile};
