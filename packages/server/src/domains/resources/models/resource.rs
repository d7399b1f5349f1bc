use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use super::resource_file::{FileTagAssignment, ResourceFile};
use crate::common::{CategoryId, ItemId, MemberId, ResourceId, TagId};
use crate::domains::catalog::models::ItemType;
use crate::domains::resources::query::ResourceScope;
use crate::domains::search::Searchable;
use crate::domains::tag::models::{Tag, TagLevel, TagUsage};
use crate::kernel::CatalogError;

/// Who published a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: MemberId,
    pub name: String,
}

/// A downloadable creation inside one category of one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: ResourceId,
    pub item_id: ItemId,
    pub item_slug: String,
    pub item_type: ItemType,
    pub category_id: CategoryId,
    pub category_slug: String,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub author: Option<Author>,
    pub tags: Vec<Tag>,
    pub downloads: i64,
    pub followers: i64,
    pub rating: f64,
    pub review_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub files: Vec<ResourceFile>,
}

impl Resource {
    /// Whether the resource sits inside `scope`.
    pub fn in_scope(&self, scope: &ResourceScope) -> bool {
        self.item_slug == scope.item_slug
            && self.item_type == scope.item_type
            && scope
                .category_slug
                .as_deref()
                .map_or(true, |slug| self.category_slug == slug)
    }

    /// Own tags, every file's group tags, and every file's channel.
    pub fn effective_tag_ids(&self) -> HashSet<TagId> {
        self.tags
            .iter()
            .map(|t| t.id)
            .chain(self.files.iter().flat_map(|f| f.tag_ids()))
            .collect()
    }

    /// Whether the tag is on the resource or on any of its files.
    pub fn carries_tag(&self, tag_id: TagId) -> bool {
        self.tags.iter().any(|t| t.id == tag_id) || self.files.iter().any(|f| f.carries_tag(tag_id))
    }

    /// Every tag assignment this resource contributes to its category's
    /// filter groups.
    pub fn tag_usages(&self) -> Vec<TagUsage> {
        let resource_id = self.id;
        let own = self.tags.iter().map(|t| TagUsage {
            resource_id,
            tag_id: t.id,
            level: TagLevel::Resource,
        });
        let per_file = self.files.iter().flat_map(|file| {
            let grouped = file.tags.iter().map(|a| TagUsage {
                resource_id,
                tag_id: a.tag.id,
                level: TagLevel::File(a.group_id),
            });
            let channel = file.channel.iter().map(|t| TagUsage {
                resource_id,
                tag_id: t.id,
                level: TagLevel::Channel,
            });
            grouped.chain(channel)
        });
        own.chain(per_file).collect()
    }
}

impl Searchable for Resource {
    fn search_name(&self) -> &str {
        &self.name
    }

    fn search_description(&self) -> &str {
        &self.description
    }

    fn search_tag_names(&self) -> Vec<&str> {
        self.tags.iter().map(|t| t.name.as_str()).collect()
    }

    fn search_author(&self) -> Option<&str> {
        self.author.as_ref().map(|a| a.name.as_str())
    }
}

// =============================================================================
// Queries
// =============================================================================

#[derive(Debug, sqlx::FromRow)]
struct ResourceRow {
    id: ResourceId,
    item_id: ItemId,
    item_slug: String,
    item_type: String,
    category_id: CategoryId,
    category_slug: String,
    slug: String,
    name: String,
    description: String,
    author_id: Option<MemberId>,
    author_name: Option<String>,
    downloads: i64,
    followers: i64,
    rating: f64,
    review_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ResourceRow> for Resource {
    type Error = CatalogError;

    fn try_from(row: ResourceRow) -> std::result::Result<Self, Self::Error> {
        let item_type = row
            .item_type
            .parse()
            .map_err(|e| CatalogError::invalid_row("resources", row.id.into_uuid(), e))?;

        let author = match (row.author_id, row.author_name) {
            (Some(id), Some(name)) => Some(Author { id, name }),
            _ => None,
        };

        Ok(Resource {
            id: row.id,
            item_id: row.item_id,
            item_slug: row.item_slug,
            item_type,
            category_id: row.category_id,
            category_slug: row.category_slug,
            slug: row.slug,
            name: row.name,
            description: row.description,
            author,
            tags: Vec::new(),
            downloads: row.downloads,
            followers: row.followers,
            rating: row.rating,
            review_count: row.review_count,
            created_at: row.created_at,
            updated_at: row.updated_at,
            files: Vec::new(),
        })
    }
}

impl Resource {
    /// Every resource inside `scope`, oldest first, with tags and files.
    pub async fn find_in_scope(scope: &ResourceScope, pool: &PgPool) -> Result<Vec<Self>> {
        Self::find_scoped(scope, None, pool).await
    }

    /// One resource by slug inside `scope`.
    pub async fn find_by_slug(
        scope: &ResourceScope,
        slug: &str,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        Ok(Self::find_scoped(scope, Some(slug), pool)
            .await?
            .into_iter()
            .next())
    }

    async fn find_scoped(
        scope: &ResourceScope,
        slug: Option<&str>,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        let rows = sqlx::query_as::<_, ResourceRow>(
            r#"
            SELECT r.id, r.item_id, i.slug AS item_slug, i.item_type,
                   r.category_id, c.slug AS category_slug,
                   r.slug, r.name, r.description,
                   r.author_id, m.display_name AS author_name,
                   r.downloads, r.followers, r.rating, r.review_count,
                   r.created_at, r.updated_at
            FROM resources r
            INNER JOIN items i ON i.id = r.item_id
            INNER JOIN categories c ON c.id = r.category_id
            LEFT JOIN members m ON m.id = r.author_id
            WHERE i.slug = $1
              AND i.item_type = $2
              AND ($3::text IS NULL OR c.slug = $3)
              AND ($4::text IS NULL OR r.slug = $4)
            ORDER BY r.created_at, r.id
            "#,
        )
        .bind(&scope.item_slug)
        .bind(scope.item_type.as_str())
        .bind(scope.category_slug.as_deref())
        .bind(slug)
        .fetch_all(pool)
        .await?;

        let mut resources = rows
            .into_iter()
            .map(Resource::try_from)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        if resources.is_empty() {
            return Ok(resources);
        }

        Self::attach_tags_and_files(&mut resources, pool).await?;
        Ok(resources)
    }

    async fn attach_tags_and_files(resources: &mut [Resource], pool: &PgPool) -> Result<()> {
        let ids: Vec<ResourceId> = resources.iter().map(|r| r.id).collect();

        let mut tags_by_resource: HashMap<Uuid, Vec<Tag>> = HashMap::new();
        for row in Tag::find_for_resource_ids(&ids, pool).await? {
            tags_by_resource
                .entry(row.owner_id)
                .or_default()
                .push(Tag::try_from(row.tag)?);
        }

        let mut files = ResourceFile::find_rows_for_resource_ids(&ids, pool)
            .await?
            .into_iter()
            .map(|row| row.into_file())
            .collect::<Result<Vec<_>>>()?;

        let file_ids: Vec<_> = files.iter().map(|f| f.id).collect();
        let mut assignments_by_file: HashMap<Uuid, Vec<FileTagAssignment>> = HashMap::new();
        if !file_ids.is_empty() {
            for row in Tag::find_for_file_ids(&file_ids, pool).await? {
                let Some(group_id) = row.group_id else {
                    continue;
                };
                assignments_by_file
                    .entry(row.owner_id)
                    .or_default()
                    .push(FileTagAssignment {
                        group_id,
                        tag: Tag::try_from(row.tag)?,
                    });
            }
        }

        let mut files_by_resource: HashMap<ResourceId, Vec<ResourceFile>> = HashMap::new();
        for mut file in files.drain(..) {
            file.tags = assignments_by_file
                .remove(file.id.as_uuid())
                .unwrap_or_default();
            files_by_resource
                .entry(file.resource_id)
                .or_default()
                .push(file);
        }

        for resource in resources.iter_mut() {
            resource.tags = tags_by_resource
                .remove(resource.id.as_uuid())
                .unwrap_or_default();
            resource.files = files_by_resource.remove(&resource.id).unwrap_or_default();
        }

        Ok(())
    }
}
