use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::common::{PageArgs, TagId};
use crate::domains::catalog::models::ItemType;

/// Parent scoping of a resource listing: an item, and optionally one of its
/// categories. Always applied as a hard AND.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceScope {
    pub item_slug: String,
    pub item_type: ItemType,
    pub category_slug: Option<String>,
}

impl ResourceScope {
    pub fn new(item_slug: impl Into<String>, item_type: ItemType) -> Self {
        Self {
            item_slug: item_slug.into(),
            item_type,
            category_slug: None,
        }
    }

    pub fn with_category(mut self, category_slug: impl Into<String>) -> Self {
        self.category_slug = Some(category_slug.into());
        self
    }

    /// Scopes to a category unless the slug is missing or blank, in which
    /// case the whole item is listed.
    pub fn with_optional_category(mut self, category_slug: Option<String>) -> Self {
        self.category_slug = category_slug.filter(|c| !c.trim().is_empty());
        self
    }
}

/// Ordering of a resource listing. Exactly one is active per query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Descending search score; only meaningful with a search query.
    Relevance,
    /// Last update first.
    Updated,
    /// Creation time, newest first.
    Newest,
    /// Creation time, oldest first.
    Oldest,
    /// Name order: lowercase comparison, then exact comparison. Not locale
    /// collation; accented and non-Latin names order by code point.
    Name,
    #[default]
    Downloads,
    /// Rating, then review count.
    Rating,
}

impl SortMode {
    /// Parses a sort string from a query string or CLI flag. Missing or
    /// unknown values fall back to the default instead of failing.
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse().ok()).unwrap_or_default()
    }

    /// Ordering actually applied: relevance needs a query, otherwise the
    /// default ordering is used.
    pub fn effective(self, has_query: bool) -> Self {
        match self {
            SortMode::Relevance if !has_query => SortMode::default(),
            other => other,
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortMode::Relevance => write!(f, "relevance"),
            SortMode::Updated => write!(f, "updated"),
            SortMode::Newest => write!(f, "newest"),
            SortMode::Oldest => write!(f, "oldest"),
            SortMode::Name => write!(f, "name"),
            SortMode::Downloads => write!(f, "downloads"),
            SortMode::Rating => write!(f, "rating"),
        }
    }
}

impl std::str::FromStr for SortMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relevance" => Ok(SortMode::Relevance),
            "updated" => Ok(SortMode::Updated),
            "newest" | "created_desc" => Ok(SortMode::Newest),
            "oldest" | "created_asc" => Ok(SortMode::Oldest),
            "name" => Ok(SortMode::Name),
            "downloads" => Ok(SortMode::Downloads),
            "rating" => Ok(SortMode::Rating),
            other => Err(anyhow::anyhow!("Invalid sort mode: {}", other)),
        }
    }
}

/// Descriptor of one resource listing request.
///
/// ```rust
/// use marketplace_core::domains::catalog::models::ItemType;
/// use marketplace_core::domains::resources::query::{GetResourcesParams, ResourceScope, SortMode};
///
/// let params = GetResourcesParams::builder()
///     .scope(ResourceScope::new("skyforge", ItemType::Game).with_category("mods"))
///     .query("dark mode")
///     .sort(SortMode::Relevance)
///     .page(2)
///     .build();
/// assert_eq!(params.page_args().page, Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct GetResourcesParams {
    pub scope: ResourceScope,

    /// Tags a resource must all carry (one per active filter group).
    #[builder(default)]
    #[serde(default)]
    pub selected_tag_ids: Vec<TagId>,

    /// Free-text query; blank after trimming means no search.
    #[builder(default, setter(strip_option, into))]
    #[serde(default)]
    pub query: Option<String>,

    #[builder(default)]
    #[serde(default)]
    pub sort: SortMode,

    /// 1-indexed page; normalized to 1 when missing or below 1.
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    pub page: Option<i64>,

    /// Page size; normalized to the configured default when missing or below 1.
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    pub limit: Option<i64>,
}

impl GetResourcesParams {
    pub fn page_args(&self) -> PageArgs {
        PageArgs::new(self.page, self.limit)
    }
}
