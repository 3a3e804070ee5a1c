use super::*;

fn full_game() -> Value {
    json!({
        "id": 3498,
        "slug": "grand-theft-auto-v",
        "name": "Grand Theft Auto V",
        "released": "2013-09-17",
        "rating": 4.47,
        "ratings_count": 6900,
        "metacritic": 92,
        "playtime": 74,
        "description_raw": "Rockstar Games went bigger.",
        "website": "http://www.rockstargames.com/V/",
        "genres": [{ "id": 4, "name": "Action" }, { "id": 3, "name": "Adventure" }],
        "platforms": [
            { "platform": { "id": 4, "name": "PC" } },
            { "platform": { "id": 187, "name": "PlayStation 5" } }
        ],
        "developers": [{ "name": "Rockstar North" }],
        "publishers": [{ "name": "Rockstar Games" }],
        "background_image": "https://media.rawg.io/bg.jpg",
        "background_image_additional": "https://media.rawg.io/bg2.jpg"
    })
}

#[test]
fn test_from_value_extracts_all_fields() {
    let game = RawgGame::from_value(&full_game()).unwrap();
    assert_eq!(game.id, 3498);
    assert_eq!(game.name, "Grand Theft Auto V");
    assert!(!game.redirect);
    assert_eq!(game.released.as_deref(), Some("2013-09-17"));
    assert_eq!(game.rating, Some(4.47));
    assert_eq!(game.ratings_count, Some(6900));
    assert_eq!(game.metacritic, Some(92));
    assert_eq!(game.playtime, Some(74));
    assert_eq!(game.genres, vec!["Action", "Adventure"]);
    assert_eq!(game.platforms, vec!["PC", "PlayStation 5"]);
    assert_eq!(game.developers, vec!["Rockstar North"]);
    assert_eq!(game.publishers, vec!["Rockstar Games"]);
}

#[test]
fn test_from_value_tolerates_wrong_types() {
    let game = RawgGame::from_value(&json!({
        "id": "not-a-number",
        "slug": "odd",
        "name": "Odd",
        "rating": "high",
        "metacritic": null,
        "genres": "Action",
        "platforms": [{ "platform": null }, { "platform": { "name": "PC" } }],
        "website": ""
    }))
    .unwrap();

    assert_eq!(game.id, 0);
    assert_eq!(game.rating, None);
    assert_eq!(game.metacritic, None);
    assert!(game.genres.is_empty());
    assert_eq!(game.platforms, vec!["PC"]);
    assert_eq!(game.website, None);
}

#[test]
fn test_from_value_rejects_non_object() {
    assert!(RawgGame::from_value(&json!([1, 2, 3])).is_none());
    assert!(RawgGame::from_value(&json!("game")).is_none());
}

#[test]
fn test_redirect_flag_requires_true() {
    let game = RawgGame::from_value(&json!({ "slug": "x", "redirect": "yes" })).unwrap();
    assert!(!game.redirect);
    let game = RawgGame::from_value(&json!({ "slug": "x", "redirect": true })).unwrap();
    assert!(game.redirect);
}

#[test]
fn test_into_record_maps_images() {
    let record = RawgGame::from_value(&full_game())
        .unwrap()
        .into_record("gta-v");
    assert_eq!(record.slug, "grand-theft-auto-v");
    assert_eq!(record.primary_image.as_deref(), Some("https://media.rawg.io/bg.jpg"));
    assert_eq!(record.secondary_image.as_deref(), Some("https://media.rawg.io/bg2.jpg"));
    assert_eq!(record.critic_score, Some(92));
}

#[test]
fn test_into_record_falls_back_to_requested_slug() {
    let record = RawgGame::from_value(&json!({ "name": "Nameless" }))
        .unwrap()
        .into_record("requested");
    assert_eq!(record.slug, "requested");
}

#[test]
fn test_from_text_keeps_snippet() {
    let long = "<html>".repeat(100);
    let response = UpstreamResponse::from_text(502, &long);
    match &response.body {
        UpstreamBody::Unparseable(raw) => assert_eq!(raw.chars().count(), 300),
        other => panic!("unexpected body: {other:?}"),
    }
    assert_eq!(response.details()["raw"].as_str().unwrap().len(), 300);
    assert!(response.success_json().is_none());
}

#[test]
fn test_success_json_requires_success_status() {
    let response = UpstreamResponse::json(404, json!({ "detail": "Not found." }));
    assert!(!response.is_success());
    assert!(response.success_json().is_none());
    assert_eq!(response.details()["detail"], "Not found.");
}

#[test]
fn test_screenshots_from_response_skips_bad_items() {
    let response = UpstreamResponse::json(
        200,
        json!({
            "count": 3,
            "results": [
                { "id": 1, "image": "https://media.rawg.io/s1.jpg", "width": 1920, "height": 1080 },
                { "id": "bad", "image": "https://media.rawg.io/s2.jpg" },
                { "id": 3, "image": "https://media.rawg.io/s3.jpg", "is_deleted": false }
            ]
        }),
    );

    let shots = screenshots_from_response(&response);
    assert_eq!(shots.len(), 2);
    assert_eq!(shots[0].image_url, "https://media.rawg.io/s1.jpg");
    assert_eq!(shots[0].width, Some(1920));
    assert_eq!(shots[1].id, 3);
}

#[test]
fn test_screenshots_from_failed_response_is_empty() {
    let response = UpstreamResponse::json(500, json!({ "results": [{ "id": 1, "image": "x" }] }));
    assert!(screenshots_from_response(&response).is_empty());
}

#[test]
fn test_parse_search_results() {
    let hits: Vec<SearchHit> = parse_results(&json!({
        "results": [
            { "id": 1, "name": "Portal", "slug": "portal", "released": "2007-10-09", "rating": 4.5 },
            { "id": 2, "name": "Portal 2", "slug": "portal-2", "released": null }
        ]
    }));
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[1].released, None);
}
