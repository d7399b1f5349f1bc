// HTTP middleware
pub mod caller_context;

pub use caller_context::*;
