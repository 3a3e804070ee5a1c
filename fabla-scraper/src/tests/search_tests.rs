use serde_json::json;

use super::*;
use crate::mock::MockCatalog;
use crate::types::UpstreamResponse;

#[tokio::test]
async fn test_search_returns_trimmed_hits() {
    let client = MockCatalog::new().search_response(UpstreamResponse::json(
        200,
        json!({
            "count": 1,
            "results": [{
                "id": 13537,
                "name": "Half-Life 2",
                "slug": "half-life-2",
                "released": "2004-11-16",
                "background_image": "https://media.rawg.io/hl2.jpg"
            }]
        }),
    ));

    let hits = search(&client, "  half life  ").await.unwrap();

    assert_eq!(
        hits,
        vec![SearchHit {
            id: 13537,
            name: "Half-Life 2".to_string(),
            slug: "half-life-2".to_string(),
            released: Some("2004-11-16".to_string()),
        }]
    );
    assert_eq!(client.calls(), vec!["search:half life"]);
}

#[tokio::test]
async fn test_search_rejects_blank_query() {
    let client = MockCatalog::new();
    let err = search(&client, "   ").await.unwrap_err();
    assert!(matches!(err, ScrapeError::InvalidQuery));
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn test_search_checks_key_before_query() {
    let client = MockCatalog::new().without_api_key();
    let err = search(&client, "").await.unwrap_err();
    assert!(matches!(err, ScrapeError::MissingApiKey));
}

#[tokio::test]
async fn test_search_relays_upstream_status() {
    let client = MockCatalog::new()
        .search_response(UpstreamResponse::json(401, json!({ "error": "bad key" })));

    match search(&client, "portal").await.unwrap_err() {
        ScrapeError::Upstream { status, details } => {
            assert_eq!(status, 401);
            assert_eq!(details["error"], "bad key");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_search_without_results_field() {
    let client = MockCatalog::new().search_response(UpstreamResponse::json(200, json!({})));
    assert!(search(&client, "portal").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_success_with_unparseable_body_is_empty() {
    let client = MockCatalog::new().search_response(UpstreamResponse::from_text(200, "<html>"));

    let hits = search(&client, "zelda").await.unwrap();

    assert!(hits.is_empty());
}
