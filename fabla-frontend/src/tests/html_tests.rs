use fabla_core::{CatalogRecord, ExternalLinks, Screenshot, SeedRecord};

use super::*;

fn found_view() -> EnrichedGameView {
    let mut seed = SeedRecord::new("stardew-valley", "Acme & Co").with_region("Teruel");
    seed.links = ExternalLinks {
        storefront_url: Some("https://store.example/413150".to_string()),
        distribution_url: None,
        website_url: Some("https://acme.example".to_string()),
    };
    let record = CatalogRecord {
        id: 10,
        slug: "stardew-valley".to_string(),
        name: "Stardew <Valley>".to_string(),
        rating: Some(4.4),
        ratings_count: Some(2310),
        playtime_hours: Some(0),
        genres: vec!["RPG".to_string(), "Simulation".to_string()],
        description: Some("Farm life.".to_string()),
        ..CatalogRecord::default()
    };
    EnrichedGameView::merged(
        &seed,
        &record,
        &[Screenshot::new(1, "s1.jpg"), Screenshot::new(2, "s2.jpg")],
    )
}

#[test]
fn test_escape_html() {
    assert_eq!(escape_html("Tom & Jerry"), "Tom &amp; Jerry");
    assert_eq!(escape_html("<b>\"x\"</b>"), "&lt;b&gt;&quot;x&quot;&lt;/b&gt;");
    assert_eq!(escape_html("it's"), "it&#39;s");
}

#[test]
fn test_region_label() {
    assert_eq!(region_label(Some(" Huesca ")), "Huesca");
    assert_eq!(region_label(Some("  ")), "Sin provincia");
    assert_eq!(region_label(None), "Sin provincia");
}

#[test]
fn test_region_class() {
    assert_eq!(region_class("ZARAGOZA"), "zaragoza");
    assert_eq!(region_class("Sin provincia"), "other");
}

#[test]
fn test_render_one_card_per_view() {
    let degraded = EnrichedGameView::degraded(&SeedRecord::new("missing-game", "Solo Dev"));
    let html = HtmlPage::default().render(&[found_view(), degraded.clone(), degraded]);
    assert_eq!(html.matches("<article class=\"card\">").count(), 3);
}

#[test]
fn test_render_found_card() {
    let html = HtmlPage::default().render(&[found_view()]);

    assert!(html.contains("<h3>Stardew &lt;Valley&gt;</h3>"));
    assert!(html.contains("<img src=\"s1.jpg\" alt=\"Stardew &lt;Valley&gt;\" loading=\"lazy\">"));
    assert!(html.contains("<span class=\"badge teruel\">Teruel</span>"));
    assert!(html.contains("Acme &amp; Co"));
    assert!(html.contains("<dt>Rating</dt><dd>4.4 (2310 votos)</dd>"));
    assert!(html.contains("<dt>Playtime</dt><dd>Sin datos</dd>"));
    assert!(html.contains("<dt>Géneros</dt><dd>RPG, Simulation</dd>"));
    assert!(html.contains("<dt>Itch</dt><dd>No disponible</dd>"));
    assert!(html.contains("href=\"https://store.example/413150\""));
    assert!(html.contains("<div class=\"gallery\">"));
    assert!(html.contains("<p>Farm life.</p>"));
}

#[test]
fn test_render_degraded_card() {
    let view = EnrichedGameView::degraded(&SeedRecord::new("missing-game", "Solo Dev"));
    let html = HtmlPage::default().render(&[view]);

    assert!(html.contains("<h3>missing-game</h3>"));
    assert!(html.contains("<p>Sin imágenes</p>"));
    assert!(html.contains("<span class=\"badge other\">Sin provincia</span>"));
    assert!(html.contains("<dt>Lanzamiento</dt><dd>Sin datos</dd>"));
    assert!(!html.contains("<div class=\"gallery\">"));
}

#[test]
fn test_write_to_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("index.html");

    HtmlPage::default().write_to(&[found_view()], &path).unwrap();

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<h1>FablaGames</h1>"));
}
