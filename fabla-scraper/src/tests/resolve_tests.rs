use serde_json::json;

use super::*;
use crate::mock::MockCatalog;

#[tokio::test]
async fn test_resolve_found_with_screenshots() {
    let client = MockCatalog::new()
        .game(
            "stardew-valley",
            json!({ "id": 10, "slug": "stardew-valley", "name": "Stardew Valley", "redirect": false }),
        )
        .screenshots("stardew-valley", &["s1.jpg", "s2.jpg"]);

    let resolution = resolve(&client, "stardew-valley").await.unwrap();

    assert!(resolution.is_found());
    assert_eq!(resolution.record().name, "Stardew Valley");
    let images: Vec<_> = resolution
        .screenshots()
        .iter()
        .map(|s| s.image_url.as_str())
        .collect();
    assert_eq!(images, vec!["s1.jpg", "s2.jpg"]);
}

#[tokio::test]
async fn test_resolve_follows_redirect() {
    let client = MockCatalog::new()
        .game("old-slug", json!({ "detail": "Moved", "slug": "new-slug", "redirect": true }))
        .game("new-slug", json!({ "id": 42, "slug": "new-slug", "name": "New Title" }))
        .screenshots("new-slug", &["n1.jpg"]);

    let resolution = resolve(&client, "old-slug").await.unwrap();

    assert_eq!(resolution.record().name, "New Title");
    assert_eq!(resolution.record().slug, "new-slug");
    assert_eq!(resolution.record().id, 42);
    assert_eq!(resolution.screenshots().len(), 1);
    assert_eq!(
        client.calls(),
        vec!["game:old-slug", "game:new-slug", "screenshots:new-slug"]
    );
}

#[tokio::test]
async fn test_resolve_redirect_to_undefined_is_not_found() {
    let client = MockCatalog::new()
        .game("broken", json!({ "slug": "undefined", "redirect": true }));

    let resolution = resolve(&client, "broken").await.unwrap();

    match resolution {
        Resolution::NotFound(nf) => {
            assert_eq!(nf.message, "RAWG redirect target invalid");
            assert_eq!(nf.sentinel.slug, "broken");
            assert_eq!(nf.sentinel.name, "UNDEFINED");
            assert_eq!(nf.sentinel.id, 0);
            assert_eq!(nf.details["requested"], "broken");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert_eq!(client.calls(), vec!["game:broken"]);
}

#[tokio::test]
async fn test_resolve_redirect_to_empty_slug_is_not_found() {
    let client = MockCatalog::new().game("broken", json!({ "slug": "   ", "redirect": true }));

    let resolution = resolve(&client, "broken").await.unwrap();
    assert!(!resolution.is_found());
    assert!(resolution.screenshots().is_empty());
}

#[tokio::test]
async fn test_resolve_failed_redirect_keeps_original() {
    let client = MockCatalog::new()
        .game(
            "old-slug",
            json!({ "id": 5, "slug": "new-slug", "name": "Old Title", "redirect": true }),
        )
        .game_response("new-slug", UpstreamResponse::json(500, json!({})))
        .screenshots("new-slug", &[]);

    let resolution = resolve(&client, "old-slug").await.unwrap();

    assert!(resolution.is_found());
    assert_eq!(resolution.record().name, "Old Title");
    assert_eq!(resolution.record().id, 5);
}

#[tokio::test]
async fn test_resolve_redirect_transport_error_keeps_original() {
    let client = MockCatalog::new()
        .game(
            "old-slug",
            json!({ "id": 5, "slug": "new-slug", "name": "Old Title", "redirect": true }),
        )
        .game_transport_error("new-slug");

    let resolution = resolve(&client, "old-slug").await.unwrap();
    assert_eq!(resolution.record().name, "Old Title");
}

#[tokio::test]
async fn test_resolve_redirect_to_same_slug_does_not_refetch() {
    let client = MockCatalog::new()
        .game("same", json!({ "id": 1, "slug": "same", "name": "Same", "redirect": true }));

    let resolution = resolve(&client, "same").await.unwrap();
    assert_eq!(resolution.record().name, "Same");
    assert_eq!(client.calls(), vec!["game:same", "screenshots:same"]);
}

#[tokio::test]
async fn test_resolve_404_is_not_found() {
    let client = MockCatalog::new();

    let resolution = resolve(&client, "missing-game").await.unwrap();

    match resolution {
        Resolution::NotFound(nf) => {
            assert_eq!(nf.message, "RAWG game fetch failed: 404");
            assert_eq!(nf.details["detail"], "Not found.");
            assert_eq!(nf.sentinel, CatalogRecord::not_found("missing-game"));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_resolve_unparseable_body_is_not_found() {
    let client = MockCatalog::new()
        .game_response("garbled", UpstreamResponse::from_text(200, "<html>oops</html>"));

    let resolution = resolve(&client, "garbled").await.unwrap();

    match resolution {
        Resolution::NotFound(nf) => {
            assert_eq!(nf.details["raw"], "<html>oops</html>");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_resolve_undefined_name_is_not_found() {
    let client = MockCatalog::new()
        .game("ghost", json!({ "id": 9, "slug": "ghost", "name": "UNDEFINED" }));

    let resolution = resolve(&client, "ghost").await.unwrap();
    match resolution {
        Resolution::NotFound(nf) => assert_eq!(nf.message, "Invalid RAWG game returned"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_resolve_screenshot_failure_keeps_record() {
    let client = MockCatalog::new()
        .game("portal", json!({ "id": 4200, "slug": "portal", "name": "Portal" }))
        .screenshots_transport_error("portal");

    let resolution = resolve(&client, "portal").await.unwrap();

    assert!(resolution.is_found());
    assert_eq!(resolution.record().name, "Portal");
    assert!(resolution.screenshots().is_empty());
}

#[tokio::test]
async fn test_resolve_screenshot_error_status_keeps_record() {
    let client = MockCatalog::new()
        .game("portal", json!({ "id": 4200, "slug": "portal", "name": "Portal" }))
        .screenshots_response("portal", UpstreamResponse::json(503, json!({})));

    let resolution = resolve(&client, "portal").await.unwrap();
    assert!(resolution.is_found());
    assert!(resolution.screenshots().is_empty());
}

#[tokio::test]
async fn test_resolve_transport_error_propagates() {
    let client = MockCatalog::new().game_transport_error("portal");

    let err = resolve(&client, "portal").await.unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_resolve_missing_key_fails_before_lookup() {
    let client = MockCatalog::new()
        .without_api_key()
        .game("portal", json!({ "slug": "portal", "name": "Portal" }));

    let err = resolve(&client, "portal").await.unwrap_err();
    assert!(matches!(err, ScrapeError::MissingApiKey));
    assert!(client.calls().is_empty());
}
