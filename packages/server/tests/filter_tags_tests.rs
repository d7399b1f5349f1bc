//! Integration tests for available filter tags over GraphQL and REST.

mod common;

use crate::common::TestHarness;
use axum::http::StatusCode;
use serde_json::Value;

fn names(values: &Value, key: &str) -> Vec<String> {
    values
        .as_array()
        .expect("expected an array")
        .iter()
        .map(|v| v[key].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn filter_groups_keep_order_and_drop_unused_tags() {
    let harness = TestHarness::new();

    let data = harness
        .graphql()
        .query(
            r#"{
                availableFilterTags(itemSlug: "skyforge", itemType: GAME, categorySlug: "mods") {
                    name
                    appliesToResources
                    appliesToFiles
                    tags { resourceCount tag { name tagType backgroundColor } }
                }
            }"#,
        )
        .await;

    let groups = &data["availableFilterTags"];
    // "Sound" only holds a tag nobody uses, so it is dropped entirely
    assert_eq!(names(groups, "name"), vec!["Type", "Game Version", "Channel"]);

    let type_tags = &groups[0]["tags"];
    assert_eq!(type_tags.as_array().unwrap().len(), 2);
    assert_eq!(type_tags[0]["tag"]["name"], "Lighting");
    assert_eq!(type_tags[0]["tag"]["tagType"], "CATEGORY");
    assert_eq!(type_tags[0]["tag"]["backgroundColor"], "#222");
    assert_eq!(type_tags[0]["resourceCount"], 3);
    assert_eq!(type_tags[1]["tag"]["name"], "UI");
    assert_eq!(type_tags[1]["resourceCount"], 2);

    let versions = &groups[1];
    assert_eq!(versions["appliesToFiles"], true);
    assert_eq!(versions["appliesToResources"], false);
    assert_eq!(versions["tags"][0]["tag"]["name"], "1.20");
    assert_eq!(versions["tags"][0]["resourceCount"], 1);
    assert_eq!(versions["tags"][1]["tag"]["name"], "1.21");
    assert_eq!(versions["tags"][1]["resourceCount"], 2);

    let channels = &groups[2]["tags"];
    assert_eq!(channels[0]["tag"]["name"], "Stable");
    assert_eq!(channels[0]["resourceCount"], 2);
    assert_eq!(channels[1]["tag"]["name"], "Beta");
}

#[tokio::test]
async fn unknown_category_has_no_filters() {
    let harness = TestHarness::new();

    let data = harness
        .graphql()
        .query(
            r#"{
                availableFilterTags(itemSlug: "skyforge", itemType: GAME, categorySlug: "textures") {
                    name
                }
            }"#,
        )
        .await;
    assert_eq!(data["availableFilterTags"], serde_json::json!([]));

    let data = harness
        .graphql()
        .query(
            r#"{
                availableFilterTags(itemSlug: "skyforge", itemType: WEB, categorySlug: "mods") {
                    name
                }
            }"#,
        )
        .await;
    assert_eq!(data["availableFilterTags"], serde_json::json!([]));
}

#[tokio::test]
async fn category_without_groups_has_no_filters() {
    let harness = TestHarness::new();

    let (status, body) = harness
        .get_json("/api/game/skyforge/filters?category=maps")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
    assert!(!harness.store.was_called("find_tag_usage"));
}

#[tokio::test]
async fn rest_filters_match_graphql_shape() {
    let harness = TestHarness::new();

    let (status, body) = harness
        .get_json("/api/game/skyforge/filters?category=mods")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body, "name"), vec!["Type", "Game Version", "Channel"]);
    assert_eq!(body[0]["tags"][0]["name"], "Lighting");
    assert_eq!(body[0]["tags"][0]["resourceCount"], 3);
    assert_eq!(body[0]["tags"][0]["tagType"], "category");
}

#[tokio::test]
async fn rest_filters_reject_unknown_item_type() {
    let harness = TestHarness::new();

    let (status, body) = harness
        .get_json("/api/spaceship/skyforge/filters?category=mods")
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("spaceship"));
}

#[tokio::test]
async fn store_failure_surfaces_as_error() {
    let harness = TestHarness::new();
    harness.store.fail_with("database is down");

    let result = harness
        .graphql()
        .execute(
            r#"{
                availableFilterTags(itemSlug: "skyforge", itemType: GAME, categorySlug: "mods") {
                    name
                }
            }"#,
        )
        .await;
    assert!(!result.is_ok());
    assert_eq!(result.errors, vec!["Failed to get filter tags".to_string()]);

    let (status, body) = harness
        .get_json("/api/game/skyforge/filters?category=mods")
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
}
