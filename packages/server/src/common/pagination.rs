//! Page-number pagination shared by every listing surface.
//!
//! Listings are evaluated fresh on each request: callers pass a 1-indexed
//! `page` and a `limit`, the full filtered sequence is derived, and
//! [`paginate`] slices the requested window out of it.
//!
//! ```rust
//! use marketplace_core::common::{paginate, PageArgs, PageDefaults};
//!
//! let args = PageArgs::new(Some(2), Some(10)).normalize(&PageDefaults::default());
//! let page = paginate((1..=15).collect::<Vec<_>>(), &args);
//! assert_eq!(page.items.len(), 5);
//! assert!(!page.has_more);
//! ```

use serde::{Deserialize, Serialize};

/// Page size used when the caller gives none.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

// ============================================================================
// Defaults
// ============================================================================

/// Values substituted while normalizing [`PageArgs`]. Built from
/// [`crate::Config`] in the server, or left at the crate defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDefaults {
    pub default_limit: u32,
}

impl PageDefaults {
    /// A zero default is raised to 1.
    pub fn new(default_limit: u32) -> Self {
        Self {
            default_limit: default_limit.max(1),
        }
    }
}

impl Default for PageDefaults {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

// ============================================================================
// Arguments
// ============================================================================

/// Raw pagination input as it arrives from a query string or GraphQL
/// variables. Values may be missing, zero or negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageArgs {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl PageArgs {
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        Self { page, limit }
    }

    /// Normalizes the arguments instead of rejecting them, so stale or
    /// hand-edited query strings still render a page.
    ///
    /// - missing or `< 1` page becomes 1
    /// - missing or `< 1` limit becomes the default limit
    ///
    /// A positive limit is always honoured, however large.
    pub fn normalize(&self, defaults: &PageDefaults) -> ValidatedPageArgs {
        let page = match self.page {
            Some(p) if p >= 1 => u32::try_from(p).unwrap_or(u32::MAX),
            _ => 1,
        };

        let limit = match self.limit {
            Some(l) if l >= 1 => u32::try_from(l).unwrap_or(u32::MAX),
            _ => defaults.default_limit,
        };

        ValidatedPageArgs { page, limit }
    }
}

/// Pagination arguments after normalization. `page >= 1` and `limit >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedPageArgs {
    pub page: u32,
    pub limit: u32,
}

impl ValidatedPageArgs {
    /// Number of items skipped before this page.
    pub fn offset(&self) -> usize {
        (self.page as usize - 1).saturating_mul(self.limit as usize)
    }

    /// Whether items remain after this page given the filtered total.
    pub fn has_more(&self, total: usize) -> bool {
        (self.page as usize).saturating_mul(self.limit as usize) < total
    }
}

// ============================================================================
// Page
// ============================================================================

/// One window of a filtered listing. `total` always counts the filtered
/// sequence, never the unfiltered catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub has_more: bool,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Page {
            items: Vec::new(),
            total: 0,
            has_more: false,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            has_more: self.has_more,
        }
    }
}

/// Slices the requested window out of a fully filtered and ordered sequence.
///
/// A page past the end yields an empty window with `has_more = false`.
pub fn paginate<T>(items: Vec<T>, args: &ValidatedPageArgs) -> Page<T> {
    let total = items.len();
    let has_more = args.has_more(total);
    let items = items
        .into_iter()
        .skip(args.offset())
        .take(args.limit as usize)
        .collect();

    Page {
        items,
        total,
        has_more,
    }
}
