//! GraphQL data types for resources

use chrono::{DateTime, Utc};
use juniper::{GraphQLInputObject, GraphQLObject};
use uuid::Uuid;

use crate::common::TagId;
use crate::domains::catalog::data::ItemTypeData;
use crate::domains::resources::models::{Author, Resource, ResourceFile};
use crate::domains::resources::query::{
    GetResourcesParams, PaginatedResourcesResponse, ResourceScope, SortMode,
};
use crate::domains::tag::data::TagData;

fn clamp_count(value: i64) -> i32 {
    i32::try_from(value.max(0)).unwrap_or(i32::MAX)
}

#[derive(Debug, Clone, GraphQLObject)]
pub struct AuthorData {
    pub id: Uuid,
    pub name: String,
}

impl From<Author> for AuthorData {
    fn from(author: Author) -> Self {
        Self {
            id: author.id.into_uuid(),
            name: author.name,
        }
    }
}

/// GraphQL type for a resource file
#[derive(Debug, Clone, GraphQLObject)]
pub struct ResourceFileData {
    pub id: Uuid,
    pub file_name: String,
    pub version_label: String,
    pub changelog: Option<String>,
    pub channel: Option<TagData>,
    /// Tags assigned through file-level groups
    pub tags: Vec<TagData>,
    pub created_at: DateTime<Utc>,
}

impl From<ResourceFile> for ResourceFileData {
    fn from(file: ResourceFile) -> Self {
        Self {
            id: file.id.into_uuid(),
            file_name: file.file_name,
            version_label: file.version_label,
            changelog: file.changelog,
            channel: file.channel.map(Into::into),
            tags: file.tags.into_iter().map(|a| a.tag.into()).collect(),
            created_at: file.created_at,
        }
    }
}

/// GraphQL type for Resource
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "A downloadable creation within a category")]
pub struct ResourceData {
    pub id: Uuid,
    pub item_slug: String,
    pub item_type: ItemTypeData,
    pub category_slug: String,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub author: Option<AuthorData>,
    pub tags: Vec<TagData>,
    pub downloads: i32,
    pub followers: i32,
    pub rating: f64,
    pub review_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub files: Vec<ResourceFileData>,
}

impl From<Resource> for ResourceData {
    fn from(resource: Resource) -> Self {
        Self {
            id: resource.id.into_uuid(),
            item_slug: resource.item_slug,
            item_type: resource.item_type.into(),
            category_slug: resource.category_slug,
            slug: resource.slug,
            name: resource.name,
            description: resource.description,
            author: resource.author.map(Into::into),
            tags: resource.tags.into_iter().map(Into::into).collect(),
            downloads: clamp_count(resource.downloads),
            followers: clamp_count(resource.followers),
            rating: resource.rating,
            review_count: clamp_count(resource.review_count),
            created_at: resource.created_at,
            updated_at: resource.updated_at,
            files: resource.files.into_iter().map(Into::into).collect(),
        }
    }
}

/// Paginated resources for GraphQL
#[derive(Debug, Clone, GraphQLObject)]
pub struct ResourceConnection {
    pub resources: Vec<ResourceData>,
    pub total: i32,
    pub has_more: bool,
}

impl From<PaginatedResourcesResponse> for ResourceConnection {
    fn from(response: PaginatedResourcesResponse) -> Self {
        Self {
            total: i32::try_from(response.total).unwrap_or(i32::MAX),
            has_more: response.has_more,
            resources: response.resources.into_iter().map(Into::into).collect(),
        }
    }
}

/// Input for the `resources` query
#[derive(Debug, Clone, GraphQLInputObject)]
pub struct ResourcesInput {
    pub item_slug: String,
    pub item_type: ItemTypeData,
    pub category_slug: Option<String>,
    /// Every selected tag must be carried by a returned resource
    pub selected_tag_ids: Option<Vec<Uuid>>,
    pub query: Option<String>,
    /// relevance, updated, newest, oldest, name, downloads or rating
    pub sort: Option<String>,
    pub page: Option<i32>,
    pub limit: Option<i32>,
}

impl From<ResourcesInput> for GetResourcesParams {
    fn from(input: ResourcesInput) -> Self {
        let scope = ResourceScope::new(input.item_slug, input.item_type.into())
            .with_optional_category(input.category_slug);

        GetResourcesParams {
            scope,
            selected_tag_ids: input
                .selected_tag_ids
                .unwrap_or_default()
                .into_iter()
                .map(TagId::from_uuid)
                .collect(),
            query: input.query,
            sort: SortMode::parse_lenient(input.sort.as_deref()),
            page: input.page.map(i64::from),
            limit: input.limit.map(i64::from),
        }
    }
}
