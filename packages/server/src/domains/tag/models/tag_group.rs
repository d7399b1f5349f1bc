use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use super::tag::{Tag, TagWithOwner};
use crate::common::{CategoryId, ResourceId, TagGroupId, TagId};
use crate::kernel::CatalogError;

/// Persisted configuration of one filter dimension of a category.
///
/// Groups are data, not types: every category carries its own list, and the
/// two applicability flags decide whether the group filters resources,
/// individual files, or both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagGroupConfig {
    pub id: TagGroupId,
    pub name: String,
    pub category_id: CategoryId,
    pub applies_to_resources: bool,
    pub applies_to_files: bool,
    /// Member tags in display order, unique by id.
    pub tags: Vec<Tag>,
}

impl TagGroupConfig {
    /// Builds a group, dropping repeated tag ids (first occurrence wins).
    pub fn new(
        id: TagGroupId,
        name: impl Into<String>,
        category_id: CategoryId,
        applies_to_resources: bool,
        applies_to_files: bool,
        tags: Vec<Tag>,
    ) -> Self {
        let mut seen = HashSet::new();
        let tags = tags.into_iter().filter(|t| seen.insert(t.id)).collect();

        Self {
            id,
            name: name.into(),
            category_id,
            applies_to_resources,
            applies_to_files,
            tags,
        }
    }
}

/// Where a tag assignment was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "level", content = "groupId")]
pub enum TagLevel {
    /// Assigned to the resource itself.
    Resource,
    /// Assigned to one of the resource's files through a tag group.
    File(TagGroupId),
    /// Release channel of one of the resource's files.
    Channel,
}

/// One observed tag assignment inside a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagUsage {
    pub resource_id: ResourceId,
    pub tag_id: TagId,
    pub level: TagLevel,
}

impl TagUsage {
    /// Whether this assignment makes `group` offer the tag.
    pub fn counts_for(&self, group: &TagGroupConfig) -> bool {
        match self.level {
            TagLevel::Resource => group.applies_to_resources,
            TagLevel::File(group_id) => group.applies_to_files && group_id == group.id,
            TagLevel::Channel => group.applies_to_files,
        }
    }
}

/// A tag offered by a filter group, with the number of resources in scope
/// that carry it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagOption {
    #[serde(flatten)]
    pub tag: Tag,
    pub resource_count: usize,
}

/// A filter dimension as offered to the UI: only tags in use, never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicTagGroup {
    pub id: TagGroupId,
    pub name: String,
    pub category_id: CategoryId,
    pub applies_to_resources: bool,
    pub applies_to_files: bool,
    pub tags: Vec<TagOption>,
}

impl DynamicTagGroup {
    pub fn tag_ids(&self) -> impl Iterator<Item = TagId> + '_ {
        self.tags.iter().map(|o| o.tag.id)
    }
}

/// Ordered filter groups for one (item, category) pair. Computed on every
/// request from current assignments; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DynamicAvailableFilterTags(pub Vec<DynamicTagGroup>);

impl DynamicAvailableFilterTags {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn groups(&self) -> &[DynamicTagGroup] {
        &self.0
    }

    pub fn into_groups(self) -> Vec<DynamicTagGroup> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<DynamicTagGroup> for DynamicAvailableFilterTags {
    fn from_iter<I: IntoIterator<Item = DynamicTagGroup>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// =============================================================================
// Queries
// =============================================================================

#[derive(Debug, sqlx::FromRow)]
struct TagGroupRow {
    id: TagGroupId,
    name: String,
    category_id: CategoryId,
    applies_to_resources: bool,
    applies_to_files: bool,
}

#[derive(Debug, sqlx::FromRow)]
struct TagUsageRow {
    resource_id: ResourceId,
    tag_id: TagId,
    group_id: Option<TagGroupId>,
    level: String,
}

impl TryFrom<TagUsageRow> for TagUsage {
    type Error = CatalogError;

    fn try_from(row: TagUsageRow) -> std::result::Result<Self, Self::Error> {
        let level = match (row.level.as_str(), row.group_id) {
            ("resource", _) => TagLevel::Resource,
            ("file", Some(group_id)) => TagLevel::File(group_id),
            ("channel", _) => TagLevel::Channel,
            (other, _) => {
                return Err(CatalogError::invalid_row(
                    "tag usage",
                    row.resource_id.into_uuid(),
                    format!("unexpected level {other}"),
                ))
            }
        };

        Ok(TagUsage {
            resource_id: row.resource_id,
            tag_id: row.tag_id,
            level,
        })
    }
}

impl TagGroupConfig {
    /// Load every group configured for a category with its member tags.
    pub async fn find_for_category(category_id: CategoryId, pool: &PgPool) -> Result<Vec<Self>> {
        let groups = sqlx::query_as::<_, TagGroupRow>(
            r#"
            SELECT id, name, category_id, applies_to_resources, applies_to_files
            FROM tag_groups
            WHERE category_id = $1
            ORDER BY sort_order, name, id
            "#,
        )
        .bind(category_id)
        .fetch_all(pool)
        .await?;

        if groups.is_empty() {
            return Ok(Vec::new());
        }

        let group_ids: Vec<TagGroupId> = groups.iter().map(|g| g.id).collect();
        let members = sqlx::query_as::<_, TagWithOwner>(
            r#"
            SELECT gt.group_id AS owner_id, gt.group_id,
                   t.id, t.name, t.tag_type, t.background_color, t.text_color, t.icon
            FROM tag_group_tags gt
            INNER JOIN tags t ON t.id = gt.tag_id
            WHERE gt.group_id = ANY($1)
            ORDER BY gt.position, t.name, t.id
            "#,
        )
        .bind(&group_ids)
        .fetch_all(pool)
        .await?;

        let mut tags_by_group: HashMap<Uuid, Vec<Tag>> = HashMap::new();
        for row in members {
            tags_by_group
                .entry(row.owner_id)
                .or_default()
                .push(Tag::try_from(row.tag)?);
        }

        Ok(groups
            .into_iter()
            .map(|g| {
                let tags = tags_by_group.remove(g.id.as_uuid()).unwrap_or_default();
                TagGroupConfig::new(
                    g.id,
                    g.name,
                    g.category_id,
                    g.applies_to_resources,
                    g.applies_to_files,
                    tags,
                )
            })
            .collect())
    }
}

impl TagUsage {
    /// Distinct tag assignments observed on resources of a category and on
    /// their files.
    pub async fn find_for_category(category_id: CategoryId, pool: &PgPool) -> Result<Vec<Self>> {
        let rows = sqlx::query_as::<_, TagUsageRow>(
            r#"
            SELECT r.id AS resource_id, rt.tag_id, NULL::uuid AS group_id, 'resource' AS level
            FROM resources r
            INNER JOIN resource_tags rt ON rt.resource_id = r.id
            WHERE r.category_id = $1
            UNION
            SELECT r.id AS resource_id, ft.tag_id, ft.group_id, 'file' AS level
            FROM resources r
            INNER JOIN resource_files f ON f.resource_id = r.id
            INNER JOIN resource_file_tags ft ON ft.file_id = f.id
            WHERE r.category_id = $1
            UNION
            SELECT r.id AS resource_id, f.channel_tag_id AS tag_id,
                   NULL::uuid AS group_id, 'channel' AS level
            FROM resources r
            INNER JOIN resource_files f ON f.resource_id = r.id
            WHERE r.category_id = $1 AND f.channel_tag_id IS NOT NULL
            "#,
        )
        .bind(category_id)
        .fetch_all(pool)
        .await?;

        rows.into_iter()
            .map(|row| TagUsage::try_from(row).map_err(Into::into))
            .collect()
    }
}
