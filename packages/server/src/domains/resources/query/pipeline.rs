//! The resource listing pipeline.
//!
//! Runs over the candidates fetched for a scope, in a fixed order:
//!
//! 1. scope filter (item slug + type, optional category)
//! 2. conjunctive tag filter
//! 3. search filter, dropping every zero score
//! 4. ordering (relevance, or the requested deterministic mode)
//! 5. pagination
//!
//! Every step is pure; the same candidates and parameters always produce
//! the same page.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::params::{GetResourcesParams, SortMode};
use crate::common::{paginate, Page, PageDefaults, TagId};
use crate::domains::resources::models::Resource;
use crate::domains::search::{normalize_query, score_all};

/// One page of a resource listing. `total` counts the filtered sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResourcesResponse {
    pub resources: Vec<Resource>,
    pub total: usize,
    pub has_more: bool,
}

impl PaginatedResourcesResponse {
    pub fn empty() -> Self {
        Page::empty().into()
    }
}

impl From<Page<Resource>> for PaginatedResourcesResponse {
    fn from(page: Page<Resource>) -> Self {
        Self {
            resources: page.items,
            total: page.total,
            has_more: page.has_more,
        }
    }
}

/// Runs the whole pipeline over `candidates`.
pub fn run_resource_query(
    candidates: Vec<Resource>,
    params: &GetResourcesParams,
    defaults: &PageDefaults,
) -> PaginatedResourcesResponse {
    let page_args = params.page_args().normalize(defaults);
    let filtered = filter_and_order(candidates, params);
    paginate(filtered, &page_args).into()
}

/// Steps 1-4: the full ordered sequence before pagination.
pub fn filter_and_order(candidates: Vec<Resource>, params: &GetResourcesParams) -> Vec<Resource> {
    let mut resources: Vec<Resource> = candidates
        .into_iter()
        .filter(|r| r.in_scope(&params.scope))
        .collect();

    retain_carrying_all(&mut resources, &params.selected_tag_ids);

    let query = params.query.as_deref().and_then(normalize_query);
    let sort = params.sort.effective(query.is_some());

    match query {
        Some(query) => {
            let mut scored = score_all(resources, &query);
            if sort == SortMode::Relevance {
                scored.sort_by(|a, b| b.1.cmp(&a.1));
                scored.into_iter().map(|(r, _)| r).collect()
            } else {
                let mut matched: Vec<Resource> = scored.into_iter().map(|(r, _)| r).collect();
                sort_resources(&mut matched, sort);
                matched
            }
        }
        None => {
            sort_resources(&mut resources, sort);
            resources
        }
    }
}

/// Keeps resources carrying every selected tag. Selecting nothing keeps all.
pub fn retain_carrying_all(resources: &mut Vec<Resource>, selected: &[TagId]) {
    if selected.is_empty() {
        return;
    }

    let required: HashSet<TagId> = selected.iter().copied().collect();
    resources.retain(|r| {
        let carried = r.effective_tag_ids();
        required.is_subset(&carried)
    });
}

/// Stable sort by one deterministic mode. `Relevance` leaves order untouched
/// since it needs scores.
pub fn sort_resources(resources: &mut [Resource], sort: SortMode) {
    match sort {
        SortMode::Relevance => {}
        SortMode::Updated => resources.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
        SortMode::Newest => resources.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortMode::Oldest => resources.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortMode::Name => resources.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortMode::Downloads => resources.sort_by(|a, b| b.downloads.cmp(&a.downloads)),
        SortMode::Rating => resources.sort_by(|a, b| {
            b.rating
                .total_cmp(&a.rating)
                .then_with(|| b.review_count.cmp(&a.review_count))
        }),
    }
}

/// Lowercase code-point comparison, falling back to exact comparison so that
/// names differing only in case still order deterministically.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
