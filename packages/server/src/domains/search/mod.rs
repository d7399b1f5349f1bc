//! Heuristic text relevance for small catalogs.
//!
//! Not an index: every candidate is scored on each request.

pub mod scoring;

pub use scoring::{
    best_match, normalize_query, rank_by_relevance, score_all, score_entity, Searchable,
};
