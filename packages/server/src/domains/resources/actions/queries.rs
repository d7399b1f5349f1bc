//! Resource query actions
//!
//! Entry points for resource reads. The store only supplies candidates for
//! a scope; filtering, ordering and paging run in the pure pipeline.

use anyhow::Result;
use tracing::{debug, info, instrument};

use crate::common::Actor;
use crate::domains::resources::models::Resource;
use crate::domains::resources::query::{
    run_resource_query, GetResourcesParams, PaginatedResourcesResponse, ResourceScope,
};
use crate::kernel::ServerDeps;

/// One page of resources for `params`. Unknown scopes give an empty page.
#[instrument(
    skip(params, actor, deps),
    fields(
        item_slug = %params.scope.item_slug,
        item_type = %params.scope.item_type,
        category = ?params.scope.category_slug,
        sort = %params.sort,
        page = ?params.page,
        limit = ?params.limit,
        role = %actor.role(),
    )
)]
pub async fn get_resources(
    params: &GetResourcesParams,
    actor: &Actor,
    deps: &ServerDeps,
) -> Result<PaginatedResourcesResponse> {
    let candidates = deps.store().find_resources(&params.scope).await?;
    debug!(candidates = candidates.len(), "Fetched candidate resources");

    let response = run_resource_query(candidates, params, &deps.page_defaults);
    info!(
        total = response.total,
        returned = response.resources.len(),
        has_more = response.has_more,
        "Resolved resource page"
    );

    Ok(response)
}

/// A single resource by slug inside `scope`.
#[instrument(skip(actor, deps), fields(role = %actor.role()))]
pub async fn get_resource(
    scope: &ResourceScope,
    resource_slug: &str,
    actor: &Actor,
    deps: &ServerDeps,
) -> Result<Option<Resource>> {
    let resource = deps.store().find_resource(scope, resource_slug).await?;
    if resource.is_none() {
        debug!("Resource not found");
    }
    Ok(resource)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{CategoryId, ItemId, ResourceId};
    use crate::domains::catalog::models::ItemType;
    use crate::domains::resources::query::SortMode;
    use crate::kernel::{InMemoryCatalogStore, TestDependencies};
    use chrono::{Duration, TimeZone, Utc};

    fn resource(name: &str, downloads: i64, age_days: i64) -> Resource {
        let created = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap() - Duration::days(age_days);
        Resource {
            id: ResourceId::new(),
            item_id: ItemId::nil(),
            item_slug: "skyforge".to_string(),
            item_type: ItemType::Game,
            category_id: CategoryId::nil(),
            category_slug: "mods".to_string(),
            slug: name.to_lowercase(),
            name: name.to_string(),
            description: String::new(),
            author: None,
            tags: vec![],
            downloads,
            followers: 0,
            rating: 0.0,
            review_count: 0,
            created_at: created,
            updated_at: created,
            files: vec![],
        }
    }

    fn deps() -> ServerDeps {
        let store = InMemoryCatalogStore::new().with_resources(vec![
            resource("Alpha", 10, 3),
            resource("Beta", 30, 2),
            resource("Gamma", 20, 1),
        ]);
        TestDependencies::new().store(store).into_server_deps()
    }

    fn scope() -> ResourceScope {
        ResourceScope::new("skyforge", ItemType::Game).with_category("mods")
    }

    #[tokio::test]
    async fn test_get_resources_sorts_by_downloads_by_default() {
        let params = GetResourcesParams::builder().scope(scope()).build();
        let response = get_resources(&params, &Actor::anonymous(), &deps())
            .await
            .unwrap();

        let names: Vec<_> = response.resources.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Beta", "Gamma", "Alpha"]);
        assert_eq!(response.total, 3);
    }

    #[tokio::test]
    async fn test_get_resources_is_idempotent() {
        let deps = deps();
        let params = GetResourcesParams::builder()
            .scope(scope())
            .sort(SortMode::Newest)
            .limit(2)
            .build();

        let first = get_resources(&params, &Actor::anonymous(), &deps).await.unwrap();
        let second = get_resources(&params, &Actor::anonymous(), &deps).await.unwrap();

        assert_eq!(first, second);
        assert!(first.has_more);
    }

    #[tokio::test]
    async fn test_unknown_item_is_empty() {
        let params = GetResourcesParams::builder()
            .scope(ResourceScope::new("nowhere", ItemType::Web))
            .build();
        let response = get_resources(&params, &Actor::anonymous(), &deps())
            .await
            .unwrap();
        assert_eq!(response, PaginatedResourcesResponse::empty());
    }

    #[tokio::test]
    async fn test_get_resource_by_slug() {
        let deps = deps();
        let found = get_resource(&scope(), "beta", &Actor::anonymous(), &deps)
            .await
            .unwrap();
        assert_eq!(found.map(|r| r.name), Some("Beta".to_string()));

        let missing = get_resource(&scope(), "delta", &Actor::anonymous(), &deps)
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let test_deps = TestDependencies::new();
        let store = test_deps.store.clone();
        let deps = test_deps.into_server_deps();
        store.fail_with("pool timed out");

        let params = GetResourcesParams::builder().scope(scope()).build();
        let err = get_resources(&params, &Actor::anonymous(), &deps)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("pool timed out"));
    }
}
