use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{ResourceFileId, ResourceId, TagGroupId, TagId};
use crate::domains::tag::models::tag::TagRow;
use crate::domains::tag::models::Tag;

/// A tag assigned to a file through one of the category's file-level groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileTagAssignment {
    pub group_id: TagGroupId,
    pub tag: Tag,
}

/// One uploaded file (release) of a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceFile {
    pub id: ResourceFileId,
    pub resource_id: ResourceId,
    pub file_name: String,
    pub version_label: String,
    pub changelog: Option<String>,
    /// Single-select release channel ("Stable", "Beta").
    pub channel: Option<Tag>,
    pub tags: Vec<FileTagAssignment>,
    pub created_at: DateTime<Utc>,
}

impl ResourceFile {
    /// Group tags plus the channel tag.
    pub fn tag_ids(&self) -> impl Iterator<Item = TagId> + '_ {
        self.tags
            .iter()
            .map(|a| a.tag.id)
            .chain(self.channel.iter().map(|t| t.id))
    }

    pub fn carries_tag(&self, tag_id: TagId) -> bool {
        self.tag_ids().any(|id| id == tag_id)
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ResourceFileRow {
    pub id: ResourceFileId,
    pub resource_id: ResourceId,
    pub file_name: String,
    pub version_label: String,
    pub changelog: Option<String>,
    pub created_at: DateTime<Utc>,
    pub channel_id: Option<TagId>,
    pub channel_name: Option<String>,
    pub channel_tag_type: Option<String>,
    pub channel_background_color: Option<String>,
    pub channel_text_color: Option<String>,
    pub channel_icon: Option<String>,
}

impl ResourceFileRow {
    /// Splits the row into the file (without group tags) and its channel.
    pub(crate) fn into_file(self) -> Result<ResourceFile> {
        let channel = match (self.channel_id, self.channel_name, self.channel_tag_type) {
            (Some(id), Some(name), Some(tag_type)) => Some(Tag::try_from(TagRow {
                id,
                name,
                tag_type,
                background_color: self.channel_background_color,
                text_color: self.channel_text_color,
                icon: self.channel_icon,
            })?),
            _ => None,
        };

        Ok(ResourceFile {
            id: self.id,
            resource_id: self.resource_id,
            file_name: self.file_name,
            version_label: self.version_label,
            changelog: self.changelog,
            channel,
            tags: Vec::new(),
            created_at: self.created_at,
        })
    }
}

impl ResourceFile {
    /// Batch-load files of many resources, newest first within a resource.
    /// Group tags are attached by the caller.
    pub(crate) async fn find_rows_for_resource_ids(
        resource_ids: &[ResourceId],
        pool: &PgPool,
    ) -> Result<Vec<ResourceFileRow>> {
        sqlx::query_as::<_, ResourceFileRow>(
            r#"
            SELECT f.id, f.resource_id, f.file_name, f.version_label, f.changelog, f.created_at,
                   ct.id AS channel_id, ct.name AS channel_name, ct.tag_type AS channel_tag_type,
                   ct.background_color AS channel_background_color,
                   ct.text_color AS channel_text_color, ct.icon AS channel_icon
            FROM resource_files f
            LEFT JOIN tags ct ON ct.id = f.channel_tag_id
            WHERE f.resource_id = ANY($1)
            ORDER BY f.resource_id, f.created_at DESC, f.id
            "#,
        )
        .bind(resource_ids)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
