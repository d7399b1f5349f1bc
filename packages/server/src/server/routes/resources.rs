//! REST endpoints for filters and resource listings.

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::common::{Actor, TagId};
use crate::domains::catalog::models::ItemType;
use crate::domains::resources::actions::get_resources;
use crate::domains::resources::query::{
    GetResourcesParams, PaginatedResourcesResponse, ResourceScope, SortMode,
};
use crate::domains::tag::actions::get_available_filter_tags;
use crate::domains::tag::models::DynamicAvailableFilterTags;
use crate::server::app::AxumAppState;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Failure returned by the REST handlers as a JSON body
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal(e) => {
                error!(error = %e, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        ApiError::Internal(e)
    }
}

fn parse_item_type(raw: &str) -> Result<ItemType, ApiError> {
    raw.parse()
        .map_err(|e: anyhow::Error| ApiError::BadRequest(e.to_string()))
}

/// Comma separated tag ids. Blank entries are skipped. The first malformed
/// entry is returned as the error; no resource can carry it.
fn parse_tag_ids(raw: Option<&str>) -> Result<Vec<TagId>, String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| TagId::parse(s).map_err(|_| s.to_string()))
        .collect()
}

/// Lenient integer parsing; anything unparseable counts as absent.
fn parse_number(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse().ok())
}

#[derive(Debug, Default, Deserialize)]
pub struct FiltersQuery {
    pub category: Option<String>,
}

/// `GET /api/:item_type/:item_slug/filters?category=`
pub async fn filters_handler(
    Extension(state): Extension<AxumAppState>,
    Extension(actor): Extension<Actor>,
    Path((item_type, item_slug)): Path<(String, String)>,
    Query(query): Query<FiltersQuery>,
) -> Result<Json<DynamicAvailableFilterTags>, ApiError> {
    let item_type = parse_item_type(&item_type)?;
    let Some(category) = query.category.filter(|c| !c.trim().is_empty()) else {
        return Ok(Json(DynamicAvailableFilterTags::empty()));
    };

    let filters =
        get_available_filter_tags(&item_slug, item_type, &category, &actor, &state.deps).await?;
    Ok(Json(filters))
}

#[derive(Debug, Default, Deserialize)]
pub struct ResourcesQuery {
    pub category: Option<String>,
    pub tags: Option<String>,
    pub q: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ResourcesQuery {
    fn into_params(
        self,
        item_slug: String,
        item_type: ItemType,
    ) -> Result<GetResourcesParams, String> {
        let scope = ResourceScope::new(item_slug, item_type).with_optional_category(self.category);

        Ok(GetResourcesParams {
            scope,
            selected_tag_ids: parse_tag_ids(self.tags.as_deref())?,
            query: self.q,
            sort: SortMode::parse_lenient(self.sort.as_deref()),
            page: parse_number(self.page.as_deref()),
            limit: parse_number(self.limit.as_deref()),
        })
    }
}

/// `GET /api/:item_type/:item_slug/resources?category=&tags=&q=&sort=&page=&limit=`
pub async fn resources_handler(
    Extension(state): Extension<AxumAppState>,
    Extension(actor): Extension<Actor>,
    Path((item_type, item_slug)): Path<(String, String)>,
    Query(query): Query<ResourcesQuery>,
) -> Result<Response, ApiError> {
    let item_type = parse_item_type(&item_type)?;
    let params = match query.into_params(item_slug, item_type) {
        Ok(params) => params,
        Err(unmatched) => {
            warn!(tag = %unmatched, "Selected tag id is malformed, nothing can match");
            return Ok(Json(PaginatedResourcesResponse::empty()).into_response());
        }
    };

    let response = get_resources(&params, &actor, &state.deps).await?;
    Ok(Json(response).into_response())
}
