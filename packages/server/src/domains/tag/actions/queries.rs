//! Tag query actions
//!
//! Filter groups are recomputed from current assignments on every call.

use anyhow::Result;
use tracing::{debug, info, instrument};

use crate::common::Actor;
use crate::domains::catalog::models::ItemType;
use crate::domains::tag::filters::build_available_filters;
use crate::domains::tag::models::DynamicAvailableFilterTags;
use crate::kernel::ServerDeps;

/// Filter groups offered for one category of an item.
///
/// An unknown item or category yields no groups rather than an error.
#[instrument(skip(deps, actor), fields(role = %actor.role()))]
pub async fn get_available_filter_tags(
    item_slug: &str,
    item_type: ItemType,
    category_slug: &str,
    actor: &Actor,
    deps: &ServerDeps,
) -> Result<DynamicAvailableFilterTags> {
    let store = deps.store();

    let Some(category) = store
        .find_category(item_slug, item_type, category_slug)
        .await?
    else {
        debug!("Category not found, no filters configured");
        return Ok(DynamicAvailableFilterTags::empty());
    };

    let groups = store.find_tag_groups(category.id).await?;
    if groups.is_empty() {
        return Ok(DynamicAvailableFilterTags::empty());
    }
    let usages = store.find_tag_usage(category.id).await?;

    let filters = build_available_filters(groups, &usages);
    info!(
        category_id = %category.id,
        groups = filters.len(),
        "Computed available filter tags"
    );

    Ok(filters)
}
