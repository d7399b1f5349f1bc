use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::{ResourceFileId, ResourceId, TagGroupId, TagId};
use crate::kernel::CatalogError;

/// Semantic type of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagType {
    /// Describes what a resource is ("Weapons", "Dark Theme").
    Category,
    /// Release channel of a file ("Stable", "Beta").
    Channel,
    Misc,
}

impl std::fmt::Display for TagType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagType::Category => write!(f, "category"),
            TagType::Channel => write!(f, "channel"),
            TagType::Misc => write!(f, "misc"),
        }
    }
}

impl std::str::FromStr for TagType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "category" => Ok(TagType::Category),
            "channel" => Ok(TagType::Channel),
            "misc" => Ok(TagType::Misc),
            _ => Err(anyhow::anyhow!("Invalid tag type: {}", s)),
        }
    }
}

/// Optional colors for rendering a tag chip.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagStyle {
    pub background_color: Option<String>,
    pub text_color: Option<String>,
}

/// A selectable tag. Immutable once resources reference it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    pub tag_type: TagType,
    pub style: Option<TagStyle>,
    /// Inline SVG markup.
    pub icon: Option<String>,
}

impl Tag {
    pub fn new(name: impl Into<String>, tag_type: TagType) -> Self {
        Self {
            id: TagId::new(),
            name: name.into(),
            tag_type,
            style: None,
            icon: None,
        }
    }

    pub fn with_style(mut self, background_color: &str, text_color: &str) -> Self {
        self.style = Some(TagStyle {
            background_color: Some(background_color.to_string()),
            text_color: Some(text_color.to_string()),
        });
        self
    }
}

// =============================================================================
// Rows
// =============================================================================

#[derive(Debug, Clone, sqlx::FromRow)]
pub(crate) struct TagRow {
    pub id: TagId,
    pub name: String,
    pub tag_type: String,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub icon: Option<String>,
}

impl TryFrom<TagRow> for Tag {
    type Error = CatalogError;

    fn try_from(row: TagRow) -> std::result::Result<Self, Self::Error> {
        let tag_type = row
            .tag_type
            .parse()
            .map_err(|e| CatalogError::invalid_row("tags", row.id.into_uuid(), e))?;

        let style = match (row.background_color, row.text_color) {
            (None, None) => None,
            (background_color, text_color) => Some(TagStyle {
                background_color,
                text_color,
            }),
        };

        Ok(Tag {
            id: row.id,
            name: row.name,
            tag_type,
            style,
            icon: row.icon,
        })
    }
}

/// A tag together with the entity it is assigned to.
#[derive(Debug, Clone, sqlx::FromRow)]
pub(crate) struct TagWithOwner {
    pub owner_id: Uuid,
    /// Set for file assignments made through a tag group.
    pub group_id: Option<TagGroupId>,
    #[sqlx(flatten)]
    pub tag: TagRow,
}

// =============================================================================
// Queries
// =============================================================================

impl Tag {
    /// Batch-load resource-level tags for many resources.
    pub(crate) async fn find_for_resource_ids(
        resource_ids: &[ResourceId],
        pool: &PgPool,
    ) -> Result<Vec<TagWithOwner>> {
        sqlx::query_as::<_, TagWithOwner>(
            r#"
            SELECT rt.resource_id AS owner_id, NULL::uuid AS group_id,
                   t.id, t.name, t.tag_type, t.background_color, t.text_color, t.icon
            FROM resource_tags rt
            INNER JOIN tags t ON t.id = rt.tag_id
            WHERE rt.resource_id = ANY($1)
            ORDER BY t.name, t.id
            "#,
        )
        .bind(resource_ids)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Batch-load group-assigned tags for many files.
    pub(crate) async fn find_for_file_ids(
        file_ids: &[ResourceFileId],
        pool: &PgPool,
    ) -> Result<Vec<TagWithOwner>> {
        sqlx::query_as::<_, TagWithOwner>(
            r#"
            SELECT ft.file_id AS owner_id, ft.group_id,
                   t.id, t.name, t.tag_type, t.background_color, t.text_color, t.icon
            FROM resource_file_tags ft
            INNER JOIN tags t ON t.id = ft.tag_id
            WHERE ft.file_id = ANY($1)
            ORDER BY t.name, t.id
            "#,
        )
        .bind(file_ids)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
