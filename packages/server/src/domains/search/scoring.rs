//! Pure scoring functions for free-text search.
//!
//! A score is the sum of independent signals, each matched
//! case-insensitively against the trimmed query:
//!
//! | signal                                   | weight                 |
//! |------------------------------------------|------------------------|
//! | name equals query                        | `EXACT_NAME`           |
//! | name contains query                      | `NAME_CONTAINS`        |
//! | each distinct query token found in name  | `NAME_TOKEN` per token |
//! | description contains query               | `DESCRIPTION_CONTAINS` |
//! | each tag whose name equals query         | `TAG_EXACT` per tag    |
//! | author name contains query               | `AUTHOR_CONTAINS`      |
//!
//! A score of 0 means "no match"; such entities are removed from search
//! results, never just sorted last.
//!
//! ```rust
//! use marketplace_core::domains::search::{score_entity, Searchable};
//!
//! struct Theme(&'static str, &'static str);
//!
//! impl Searchable for Theme {
//!     fn search_name(&self) -> &str {
//!         self.0
//!     }
//!
//!     fn search_description(&self) -> &str {
//!         self.1
//!     }
//! }
//!
//! let exact = Theme("Dark Mode Theme", "");
//! let mention = Theme("Light Theme", "mentions dark mode once");
//! assert!(score_entity(&exact, "dark mode") > score_entity(&mention, "dark mode"));
//! assert_eq!(score_entity(&Theme("Map Pack", ""), "dark mode"), 0);
//! ```

use std::collections::HashSet;

pub const EXACT_NAME: u32 = 100;
pub const NAME_CONTAINS: u32 = 50;
pub const NAME_TOKEN: u32 = 10;
pub const TAG_EXACT: u32 = 20;
pub const DESCRIPTION_CONTAINS: u32 = 5;
pub const AUTHOR_CONTAINS: u32 = 3;

/// Anything listable that free-text search can score.
///
/// Only name and description are required; richer entities add tags and an
/// author. Missing fields contribute nothing.
pub trait Searchable {
    fn search_name(&self) -> &str;

    fn search_description(&self) -> &str;

    fn search_tag_names(&self) -> Vec<&str> {
        Vec::new()
    }

    fn search_author(&self) -> Option<&str> {
        None
    }
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn search_name(&self) -> &str {
        (**self).search_name()
    }

    fn search_description(&self) -> &str {
        (**self).search_description()
    }

    fn search_tag_names(&self) -> Vec<&str> {
        (**self).search_tag_names()
    }

    fn search_author(&self) -> Option<&str> {
        (**self).search_author()
    }
}

/// Trims and lowercases a raw query. `None` when nothing is left, meaning
/// search is skipped entirely.
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Relevance of `entity` for `query`. Never fails; 0 means no match.
pub fn score_entity<E: Searchable + ?Sized>(entity: &E, query: &str) -> u32 {
    match normalize_query(query) {
        Some(normalized) => score_normalized(entity, &normalized),
        None => 0,
    }
}

/// Scores against a query already passed through [`normalize_query`].
fn score_normalized<E: Searchable + ?Sized>(entity: &E, query: &str) -> u32 {
    let name = entity.search_name().to_lowercase();
    let mut score = 0;

    if name == query {
        score += EXACT_NAME;
    }

    if name.contains(query) {
        score += NAME_CONTAINS;
    }

    let mut seen = HashSet::new();
    for token in query.split_whitespace() {
        if seen.insert(token) && name.contains(token) {
            score += NAME_TOKEN;
        }
    }

    if entity.search_description().to_lowercase().contains(query) {
        score += DESCRIPTION_CONTAINS;
    }

    let tag_hits = entity
        .search_tag_names()
        .into_iter()
        .filter(|tag| tag.trim().to_lowercase() == query)
        .count() as u32;
    score += tag_hits * TAG_EXACT;

    if let Some(author) = entity.search_author() {
        if author.to_lowercase().contains(query) {
            score += AUTHOR_CONTAINS;
        }
    }

    score
}

/// Scores every entity, drops non-matches, and keeps the survivors paired
/// with their score in input order. A blank query keeps everything at 0.
pub fn score_all<T: Searchable>(items: Vec<T>, query: &str) -> Vec<(T, u32)> {
    let Some(normalized) = normalize_query(query) else {
        return items.into_iter().map(|item| (item, 0)).collect();
    };

    items
        .into_iter()
        .filter_map(|item| {
            let score = score_normalized(&item, &normalized);
            (score > 0).then_some((item, score))
        })
        .collect()
}

/// Keeps matching entities ordered by descending score. Ties keep input
/// order. An empty query returns the input untouched.
pub fn rank_by_relevance<T: Searchable>(items: Vec<T>, query: &str) -> Vec<T> {
    if normalize_query(query).is_none() {
        return items;
    }

    let mut scored = score_all(items, query);
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().map(|(item, _)| item).collect()
}

/// The single best match, first in input order on ties. `None` when the
/// query is empty or nothing matches.
pub fn best_match<'a, T: Searchable>(items: &'a [T], query: &str) -> Option<&'a T> {
    let normalized = normalize_query(query)?;

    let mut best: Option<(&T, u32)> = None;
    for item in items {
        let score = score_normalized(item, &normalized);
        if score > 0 && best.map_or(true, |(_, top)| score > top) {
            best = Some((item, score));
        }
    }
    best.map(|(item, _)| item)
}
