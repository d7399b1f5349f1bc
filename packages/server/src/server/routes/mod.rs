// HTTP routes
pub mod graphql;
pub mod health;
pub mod resources;

pub use graphql::*;
pub use health::*;
pub use resources::*;
