//! Caller context for catalog queries.
//!
//! Authentication happens upstream; this module only carries who is asking
//! so queries can record it without reaching for ambient state:
//!
//! ```rust
//! use marketplace_core::common::auth::{Actor, Role};
//! use marketplace_core::common::MemberId;
//!
//! let actor = Actor::member(MemberId::new(), Role::Editor);
//! assert_eq!(actor.role(), Role::Editor);
//! ```

mod actor;

pub use actor::{Actor, Role};
