//! Typed ID aliases for every catalog entity.
//!
//! ```rust
//! use marketplace_core::common::{CategoryId, ItemId};
//!
//! let item: ItemId = ItemId::new();
//! let category: CategoryId = CategoryId::new();
//! // let wrong: CategoryId = item; // compile error
//! # let _ = (item, category);
//! ```

pub use super::id::{Id, V4, V7};

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker for top-level projects (games, web projects, apps, art/music).
pub struct Item;

/// Marker for a category inside an item ("Mods", "Maps", ...).
pub struct Category;

/// Marker for downloadable resources.
pub struct Resource;

/// Marker for a single uploaded file of a resource.
pub struct ResourceFile;

pub struct Tag;

/// Marker for per-category filter dimensions.
pub struct TagGroup;

/// Marker for members (authors, callers).
pub struct Member;

// ============================================================================
// Type aliases
// ============================================================================

pub type ItemId = Id<Item>;
pub type CategoryId = Id<Category>;
pub type ResourceId = Id<Resource>;
pub type ResourceFileId = Id<ResourceFile>;
pub type TagId = Id<Tag>;
pub type TagGroupId = Id<TagGroup>;
pub type MemberId = Id<Member>;
