//! Item search actions

use anyhow::Result;
use tracing::{info, instrument};

use crate::common::{paginate, Actor, Page, PageArgs};
use crate::domains::catalog::models::{Item, ItemType};
use crate::domains::search::{best_match as best_scored, normalize_query, rank_by_relevance};
use crate::kernel::ServerDeps;

/// Items matching `query`, highest score first, paged.
///
/// A blank query matches nothing.
#[instrument(skip(actor, deps), fields(role = %actor.role()))]
pub async fn search_items(
    item_type: Option<ItemType>,
    query: &str,
    page_args: PageArgs,
    actor: &Actor,
    deps: &ServerDeps,
) -> Result<Page<Item>> {
    let page_args = page_args.normalize(&deps.page_defaults);
    if normalize_query(query).is_none() {
        return Ok(Page::empty());
    }

    let items = deps.store().find_items(item_type).await?;
    let ranked = rank_by_relevance(items, query);
    let page = paginate(ranked, &page_args);

    info!(total = page.total, has_more = page.has_more, "Searched items");
    Ok(page)
}

/// The single best-scoring item for `query`, if anything scores above zero.
#[instrument(skip(actor, deps), fields(role = %actor.role()))]
pub async fn best_match(
    item_type: Option<ItemType>,
    query: &str,
    actor: &Actor,
    deps: &ServerDeps,
) -> Result<Option<Item>> {
    if normalize_query(query).is_none() {
        return Ok(None);
    }

    let items = deps.store().find_items(item_type).await?;
    Ok(best_scored(&items, query).cloned())
}
