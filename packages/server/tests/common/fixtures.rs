//! Test fixtures for building an in-memory catalog.
//!
//! One game item ("skyforge") with a "mods" and a "maps" category. Mods has
//! four resources spread over resource-level and file-level tag groups.

use chrono::{DateTime, Duration, TimeZone, Utc};
use marketplace_core::common::{
    CategoryId, ItemId, MemberId, ResourceFileId, ResourceId, TagGroupId,
};
use marketplace_core::domains::catalog::models::{Category, Item, ItemType};
use marketplace_core::domains::resources::models::{
    Author, FileTagAssignment, Resource, ResourceFile,
};
use marketplace_core::domains::tag::models::{Tag, TagGroupConfig, TagType};
use marketplace_core::kernel::InMemoryCatalogStore;

pub const ITEM_SLUG: &str = "skyforge";

pub fn day(n: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap() + Duration::days(n)
}

pub struct CatalogFixture {
    pub item: Item,
    pub mods: Category,
    pub maps: Category,

    pub lighting: Tag,
    pub ui: Tag,
    pub audio: Tag,
    pub v120: Tag,
    pub v121: Tag,
    pub stable: Tag,
    pub beta: Tag,

    pub type_group: TagGroupConfig,
    pub version_group: TagGroupConfig,
    pub channel_group: TagGroupConfig,
    pub audio_group: TagGroupConfig,

    pub resources: Vec<Resource>,
}

struct ResourceSeed<'a> {
    name: &'a str,
    description: &'a str,
    tags: Vec<Tag>,
    downloads: i64,
    rating: f64,
    created_day: i64,
    file: Option<(Tag, Tag)>,
}

impl CatalogFixture {
    pub fn new() -> Self {
        let item = Item {
            id: ItemId::new(),
            slug: ITEM_SLUG.to_string(),
            name: "Skyforge".to_string(),
            description: "Open world crafting game".to_string(),
            item_type: ItemType::Game,
            author_name: Some("Forge Studio".to_string()),
            created_at: day(0),
            updated_at: day(0),
        };
        let mods = Category {
            id: CategoryId::new(),
            item_id: item.id,
            slug: "mods".to_string(),
            name: "Mods".to_string(),
            sort_order: 0,
        };
        let maps = Category {
            id: CategoryId::new(),
            item_id: item.id,
            slug: "maps".to_string(),
            name: "Maps".to_string(),
            sort_order: 1,
        };

        let lighting = Tag::new("Lighting", TagType::Category).with_style("#222", "#fff");
        let ui = Tag::new("UI", TagType::Category);
        let audio = Tag::new("Audio", TagType::Category);
        let v120 = Tag::new("1.20", TagType::Misc);
        let v121 = Tag::new("1.21", TagType::Misc);
        let stable = Tag::new("Stable", TagType::Channel);
        let beta = Tag::new("Beta", TagType::Channel);

        let type_group = TagGroupConfig::new(
            TagGroupId::new(),
            "Type",
            mods.id,
            true,
            false,
            vec![lighting.clone(), ui.clone(), audio.clone()],
        );
        let version_group = TagGroupConfig::new(
            TagGroupId::new(),
            "Game Version",
            mods.id,
            false,
            true,
            vec![v120.clone(), v121.clone()],
        );
        let channel_group = TagGroupConfig::new(
            TagGroupId::new(),
            "Channel",
            mods.id,
            false,
            true,
            vec![stable.clone(), beta.clone()],
        );
        let audio_group = TagGroupConfig::new(
            TagGroupId::new(),
            "Sound",
            mods.id,
            true,
            false,
            vec![audio.clone()],
        );

        let author = Author {
            id: MemberId::new(),
            name: "Ana Smith".to_string(),
        };

        let seeds = vec![
            ResourceSeed {
                name: "Dark Mode Theme",
                description: "A dark interface skin",
                tags: vec![ui.clone()],
                downloads: 50,
                rating: 4.0,
                created_day: 1,
                file: Some((v121.clone(), stable.clone())),
            },
            ResourceSeed {
                name: "Light Theme",
                description: "Mentions dark colors once",
                tags: vec![ui.clone(), lighting.clone()],
                downloads: 120,
                rating: 4.5,
                created_day: 2,
                file: Some((v120.clone(), beta.clone())),
            },
            ResourceSeed {
                name: "Better Lighting",
                description: "Volumetric light for every biome",
                tags: vec![lighting.clone()],
                downloads: 300,
                rating: 4.8,
                created_day: 3,
                file: None,
            },
            ResourceSeed {
                name: "Shadow Pack",
                description: "Softer shadows",
                tags: vec![lighting.clone()],
                downloads: 10,
                rating: 3.9,
                created_day: 4,
                file: Some((v121.clone(), stable.clone())),
            },
        ];

        let mut resources: Vec<Resource> = seeds
            .into_iter()
            .map(|seed| {
                build_resource(&item, &mods, &version_group, Some(author.clone()), seed)
            })
            .collect();

        resources.push(build_resource(
            &item,
            &maps,
            &version_group,
            None,
            ResourceSeed {
                name: "Castle Map",
                description: "A hilltop castle",
                tags: vec![],
                downloads: 999,
                rating: 5.0,
                created_day: 5,
                file: None,
            },
        ));

        Self {
            item,
            mods,
            maps,
            lighting,
            ui,
            audio,
            v120,
            v121,
            stable,
            beta,
            type_group,
            version_group,
            channel_group,
            audio_group,
            resources,
        }
    }

    pub fn resource(&self, name: &str) -> &Resource {
        self.resources
            .iter()
            .find(|r| r.name == name)
            .unwrap_or_else(|| panic!("no fixture resource named {}", name))
    }

    /// In-memory store holding the whole fixture
    pub fn store(&self) -> InMemoryCatalogStore {
        let other_item = Item {
            id: ItemId::new(),
            slug: "lullaby".to_string(),
            name: "Lullaby".to_string(),
            description: "Soft piano pieces".to_string(),
            item_type: ItemType::ArtMusic,
            author_name: None,
            created_at: day(1),
            updated_at: day(1),
        };

        InMemoryCatalogStore::new()
            .with_item(self.item.clone())
            .with_item(other_item)
            .with_category(self.mods.clone())
            .with_category(self.maps.clone())
            .with_tag_group(self.type_group.clone())
            .with_tag_group(self.version_group.clone())
            .with_tag_group(self.channel_group.clone())
            .with_tag_group(self.audio_group.clone())
            .with_resources(self.resources.iter().cloned())
    }
}

fn build_resource(
    item: &Item,
    category: &Category,
    version_group: &TagGroupConfig,
    author: Option<Author>,
    seed: ResourceSeed<'_>,
) -> Resource {
    let id = ResourceId::new();
    let created = day(seed.created_day);

    let files = seed
        .file
        .map(|(version, channel)| ResourceFile {
            id: ResourceFileId::new(),
            resource_id: id,
            file_name: format!("{}.zip", seed.name.to_lowercase().replace(' ', "_")),
            version_label: "1.0.0".to_string(),
            changelog: Some("Initial release".to_string()),
            channel: Some(channel),
            tags: vec![FileTagAssignment {
                group_id: version_group.id,
                tag: version,
            }],
            created_at: created,
        })
        .into_iter()
        .collect();

    Resource {
        id,
        item_id: item.id,
        item_slug: item.slug.clone(),
        item_type: item.item_type,
        category_id: category.id,
        category_slug: category.slug.clone(),
        slug: seed.name.to_lowercase().replace(' ', "-"),
        name: seed.name.to_string(),
        description: seed.description.to_string(),
        author,
        tags: seed.tags,
        downloads: seed.downloads,
        followers: 0,
        rating: seed.rating,
        review_count: 3,
        created_at: created,
        updated_at: created + Duration::hours(seed.downloads),
        files,
    }
}
