//! GraphQL schema definition.

use super::context::GraphQLContext;
use juniper::{EmptyMutation, EmptySubscription, FieldError, FieldResult, RootNode};
use tracing::error;

use crate::common::PageArgs;

// Domain actions
use crate::domains::catalog::actions as catalog_actions;
use crate::domains::resources::actions as resource_actions;
use crate::domains::tag::actions as tag_actions;

// Domain data types (GraphQL types)
use crate::domains::catalog::data::{ItemConnection, ItemData, ItemTypeData};
use crate::domains::resources::data::{ResourceConnection, ResourceData, ResourcesInput};
use crate::domains::resources::query::{GetResourcesParams, ResourceScope};
use crate::domains::tag::data::TagGroupData;

// =============================================================================
// Helper functions
// =============================================================================

/// Log the underlying failure and hand the client a generic message
fn to_field_error(message: &'static str) -> impl FnOnce(anyhow::Error) -> FieldError {
    move |e| {
        error!(error = %e, "{}", message);
        FieldError::new(message, juniper::Value::null())
    }
}

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    // =========================================================================
    // Filter Queries
    // =========================================================================

    /// Filter groups for a category, each holding only tags currently in use
    async fn available_filter_tags(
        ctx: &GraphQLContext,
        item_slug: String,
        item_type: ItemTypeData,
        category_slug: String,
    ) -> FieldResult<Vec<TagGroupData>> {
        let filters = tag_actions::get_available_filter_tags(
            &item_slug,
            item_type.into(),
            &category_slug,
            ctx.actor(),
            ctx.deps(),
        )
        .await
        .map_err(to_field_error("Failed to get filter tags"))?;

        Ok(filters.into_groups().into_iter().map(Into::into).collect())
    }

    // =========================================================================
    // Resource Queries
    // =========================================================================

    /// Paginated resources matching every selected tag and the search query
    async fn resources(
        ctx: &GraphQLContext,
        input: ResourcesInput,
    ) -> FieldResult<ResourceConnection> {
        let params = GetResourcesParams::from(input);
        let response = resource_actions::get_resources(&params, ctx.actor(), ctx.deps())
            .await
            .map_err(to_field_error("Failed to get resources"))?;

        Ok(response.into())
    }

    /// A single resource by slug
    async fn resource(
        ctx: &GraphQLContext,
        item_slug: String,
        item_type: ItemTypeData,
        category_slug: String,
        slug: String,
    ) -> FieldResult<Option<ResourceData>> {
        let scope = ResourceScope::new(item_slug, item_type.into()).with_category(category_slug);
        let resource = resource_actions::get_resource(&scope, &slug, ctx.actor(), ctx.deps())
            .await
            .map_err(to_field_error("Failed to get resource"))?;

        Ok(resource.map(Into::into))
    }

    // =========================================================================
    // Item Queries
    // =========================================================================

    /// Items ranked by relevance to the query
    async fn search_items(
        ctx: &GraphQLContext,
        query: String,
        item_type: Option<ItemTypeData>,
        page: Option<i32>,
        limit: Option<i32>,
    ) -> FieldResult<ItemConnection> {
        let page_args = PageArgs::new(page.map(i64::from), limit.map(i64::from));
        let page = catalog_actions::search_items(
            item_type.map(Into::into),
            &query,
            page_args,
            ctx.actor(),
            ctx.deps(),
        )
        .await
        .map_err(to_field_error("Failed to search items"))?;

        Ok(page.into())
    }

    /// The single best-scoring item for the query
    async fn best_match(
        ctx: &GraphQLContext,
        query: String,
        item_type: Option<ItemTypeData>,
    ) -> FieldResult<Option<ItemData>> {
        let item =
            catalog_actions::best_match(item_type.map(Into::into), &query, ctx.actor(), ctx.deps())
                .await
                .map_err(to_field_error("Failed to find best match"))?;

        Ok(item.map(Into::into))
    }
}

pub type Schema =
    RootNode<'static, Query, EmptyMutation<GraphQLContext>, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, EmptyMutation::new(), EmptySubscription::new())
}
