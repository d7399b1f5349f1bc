//! Property tests for the resource listing pipeline.

use chrono::{Duration, TimeZone, Utc};
use marketplace_core::common::{CategoryId, ItemId, PageArgs, PageDefaults, ResourceId};
use marketplace_core::domains::catalog::models::ItemType;
use marketplace_core::domains::resources::models::Resource;
use marketplace_core::domains::resources::query::{
    filter_and_order, run_resource_query, GetResourcesParams, ResourceScope, SortMode,
};
use marketplace_core::domains::search::{normalize_query, score_entity};
use marketplace_core::domains::tag::models::{Tag, TagType};
use proptest::prelude::*;

const NAMES: [&str; 6] = [
    "Dark Mode Theme",
    "Light Theme",
    "Map Pack",
    "Castle Map",
    "Dark Castle",
    "Theme Park",
];
const DESCRIPTIONS: [&str; 3] = ["mentions dark colors once", "a small map", ""];
const QUERIES: [&str; 7] = ["", "   ", "dark", "theme", "map", "dark mode", "castle map"];
const SORTS: [SortMode; 7] = [
    SortMode::Relevance,
    SortMode::Updated,
    SortMode::Newest,
    SortMode::Oldest,
    SortMode::Name,
    SortMode::Downloads,
    SortMode::Rating,
];

type Shape = (usize, usize, u8, i64, i64, u8);

fn build(shapes: &[Shape], tags: &[Tag]) -> Vec<Resource> {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    shapes
        .iter()
        .map(|&(name, description, mask, downloads, age, rating)| Resource {
            id: ResourceId::new(),
            item_id: ItemId::nil(),
            item_slug: "skyforge".to_string(),
            item_type: ItemType::Game,
            category_id: CategoryId::nil(),
            category_slug: if mask & 0b1_0000 == 0 { "mods" } else { "maps" }.to_string(),
            slug: NAMES[name].to_lowercase().replace(' ', "-"),
            name: NAMES[name].to_string(),
            description: DESCRIPTIONS[description].to_string(),
            author: None,
            tags: tags
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, t)| t.clone())
                .collect(),
            downloads,
            followers: 0,
            rating: f64::from(rating) / 2.0,
            review_count: downloads % 7,
            created_at: base + Duration::days(age),
            updated_at: base + Duration::days(age * 3 % 17),
            files: vec![],
        })
        .collect()
}

fn shape_strategy() -> impl Strategy<Value = Vec<Shape>> {
    prop::collection::vec(
        (0..NAMES.len(), 0..DESCRIPTIONS.len(), 0u8..32, 0i64..500, 0i64..60, 0u8..11),
        0..40,
    )
}

fn tags() -> Vec<Tag> {
    (0..4)
        .map(|i| Tag::new(format!("Tag {}", i), TagType::Category))
        .collect()
}

fn params(
    tags: &[Tag],
    selected_mask: u8,
    query: usize,
    sort: usize,
    page: i64,
    limit: i64,
) -> GetResourcesParams {
    let selected = tags
        .iter()
        .enumerate()
        .filter(|(i, _)| selected_mask & (1 << i) != 0)
        .map(|(_, t)| t.id)
        .collect();

    GetResourcesParams::builder()
        .scope(ResourceScope::new("skyforge", ItemType::Game).with_category("mods"))
        .selected_tag_ids(selected)
        .query(QUERIES[query])
        .sort(SORTS[sort])
        .page(page)
        .limit(limit)
        .build()
}

proptest! {
    #[test]
    fn page_respects_limit_and_has_more(
        shapes in shape_strategy(),
        selected in 0u8..16,
        query in 0..QUERIES.len(),
        sort in 0..SORTS.len(),
        page in -2i64..8,
        limit in -2i64..50,
    ) {
        let tags = tags();
        let params = params(&tags, selected, query, sort, page, limit);
        let defaults = PageDefaults::new(5);
        let args = PageArgs::new(Some(page), Some(limit)).normalize(&defaults);

        let response = run_resource_query(build(&shapes, &tags), &params, &defaults);

        let limit = args.limit as usize;
        let page = args.page as usize;
        prop_assert!(response.resources.len() <= limit);
        prop_assert_eq!(response.has_more, page * limit < response.total);

        let expected_len = limit.min(response.total.saturating_sub((page - 1) * limit));
        prop_assert_eq!(response.resources.len(), expected_len);
    }

    #[test]
    fn listing_is_idempotent(
        shapes in shape_strategy(),
        selected in 0u8..16,
        query in 0..QUERIES.len(),
        sort in 0..SORTS.len(),
        page in 1i64..4,
    ) {
        let tags = tags();
        let resources = build(&shapes, &tags);
        let params = params(&tags, selected, query, sort, page, 4);
        let defaults = PageDefaults::default();

        let first = run_resource_query(resources.clone(), &params, &defaults);
        let second = run_resource_query(resources, &params, &defaults);

        prop_assert_eq!(first.total, second.total);
        let first_ids: Vec<_> = first.resources.iter().map(|r| r.id).collect();
        let second_ids: Vec<_> = second.resources.iter().map(|r| r.id).collect();
        prop_assert_eq!(first_ids, second_ids);
    }

    #[test]
    fn filtered_sequence_honours_scope_tags_and_search(
        shapes in shape_strategy(),
        selected in 0u8..16,
        query in 0..QUERIES.len(),
        sort in 0..SORTS.len(),
    ) {
        let tags = tags();
        let params = params(&tags, selected, query, sort, 1, 10);

        let ordered = filter_and_order(build(&shapes, &tags), &params);

        for resource in &ordered {
            prop_assert_eq!(resource.category_slug.as_str(), "mods");
            for tag_id in &params.selected_tag_ids {
                prop_assert!(resource.carries_tag(*tag_id));
            }
            if normalize_query(QUERIES[query]).is_some() {
                prop_assert!(score_entity(resource, QUERIES[query]) > 0);
            }
        }
    }

    #[test]
    fn relevance_order_never_increases(
        shapes in shape_strategy(),
        query in 2..QUERIES.len(),
    ) {
        let tags = tags();
        let params = params(&tags, 0, query, 0, 1, 10);

        let ordered = filter_and_order(build(&shapes, &tags), &params);
        let scores: Vec<u32> = ordered
            .iter()
            .map(|r| score_entity(r, QUERIES[query]))
            .collect();

        for pair in scores.windows(2) {
            prop_assert!(pair[0] >= pair[1]);
        }
    }
}
