use std::fmt::Write as _;
use std::path::Path;

use fabla_core::{CatalogDetails, EnrichedGameView};

use crate::FrontendError;

const NO_DATA: &str = "Sin datos";
const NOT_AVAILABLE: &str = "No disponible";
const NO_IMAGES: &str = "Sin imágenes";
const NO_REGION: &str = "Sin provincia";

const STYLE: &str = "\
body{margin:0;font-family:system-ui,sans-serif;background:#fff;color:#171717}\
main{max-width:72rem;margin:0 auto;padding:2.5rem 1rem}\
h1{font-size:1.875rem;margin:0}\
.tagline{margin-top:.5rem;color:#525252;font-size:.875rem}\
.grid{display:grid;gap:2rem;grid-template-columns:repeat(auto-fill,minmax(18rem,1fr))}\
.card{border:1px solid #e5e5e5;border-radius:1rem;overflow:hidden;box-shadow:0 1px 2px #0001}\
.cover{position:relative;aspect-ratio:16/9;background:#f5f5f5;display:grid;place-items:center}\
.cover img{width:100%;height:100%;object-fit:cover}\
.seed{position:absolute;left:.75rem;top:.75rem;background:#000b;color:#fff;border-radius:999px;\
padding:.25rem .6rem;font-size:11px;font-weight:600;text-transform:uppercase}\
.body{padding:.75rem 1rem 1rem}\
.body h3{margin:0 0 .5rem;font-size:1rem}\
.meta{display:flex;justify-content:space-between;color:#525252;font-size:.875rem}\
.badge{border-radius:999px;padding:.1rem .5rem;font-size:.75rem;font-weight:600}\
.zaragoza{background:#fef3c7;color:#b45309}.teruel{background:#fae8ff;color:#a21caf}\
.huesca{background:#e0f2fe;color:#0369a1}.other{background:#d1fae5;color:#047857}\
details{padding:0 1rem 1rem;font-size:.875rem}\
.gallery{display:flex;gap:.5rem;overflow-x:auto}.gallery img{height:6rem;border-radius:.5rem}\
dl{display:grid;grid-template-columns:max-content 1fr;gap:.25rem .75rem}dt{font-weight:600}";

/// A full HTML listing page.
#[derive(Debug, Clone)]
pub struct HtmlPage {
    pub title: String,
    pub tagline: String,
}

impl Default for HtmlPage {
    fn default() -> Self {
        Self {
            title: "FablaGames".to_string(),
            tagline: "Videojuegos y creadores locales de Aragón.".to_string(),
        }
    }
}

impl HtmlPage {
    /// Render one card per view, in order.
    pub fn render(&self, views: &[EnrichedGameView]) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        let _ = writeln!(html, "<title>{}</title>", escape_html(&self.title));
        let _ = writeln!(html, "<style>{}</style>", STYLE);
        html.push_str("</head>\n<body>\n<main>\n<header>\n");
        let _ = writeln!(html, "<h1>{}</h1>", escape_html(&self.title));
        let _ = writeln!(html, "<p class=\"tagline\">{}</p>", escape_html(&self.tagline));
        html.push_str("</header>\n<section class=\"grid\">\n");

        for view in views {
            write_card(&mut html, view);
        }

        html.push_str("</section>\n</main>\n</body>\n</html>\n");
        html
    }

    /// Render to a file, for a static export of the listing.
    pub fn write_to(&self, views: &[EnrichedGameView], path: &Path) -> Result<(), FrontendError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.render(views))?;
        Ok(())
    }
}

fn write_card(html: &mut String, view: &EnrichedGameView) {
    let title = escape_html(&view.title);
    let region = region_label(view.region.as_deref());

    html.push_str("<article class=\"card\">\n<div class=\"cover\">\n");
    match view.images.first() {
        Some(src) => {
            let _ = writeln!(
                html,
                "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
                escape_html(src),
                title
            );
        }
        None => {
            let _ = writeln!(html, "<p>{}</p>", NO_IMAGES);
        }
    }
    let _ = writeln!(html, "<span class=\"seed\">{}</span>", escape_html(&view.seed));
    html.push_str("</div>\n<div class=\"body\">\n");
    let _ = writeln!(html, "<h3>{}</h3>", title);
    let _ = writeln!(
        html,
        "<div class=\"meta\"><span>{}</span><span class=\"badge {}\">{}</span></div>",
        escape_html(&view.developer),
        region_class(region),
        escape_html(region),
    );
    html.push_str("</div>\n");

    write_details(html, view);
    html.push_str("</article>\n");
}

/// The detail view: gallery, links and catalog metadata.
fn write_details(html: &mut String, view: &EnrichedGameView) {
    html.push_str("<details>\n<summary>Detalles</summary>\n");

    if view.images.len() > 1 {
        html.push_str("<div class=\"gallery\">\n");
        for src in &view.images {
            let _ = writeln!(html, "<img src=\"{}\" alt=\"\" loading=\"lazy\">", escape_html(src));
        }
        html.push_str("</div>\n");
    }

    let developer = match &view.links.website_url {
        Some(url) => link(url, &view.developer),
        None => escape_html(&view.developer),
    };
    let catalog = view.catalog.as_ref();

    html.push_str("<dl>\n");
    write_row(html, "Desarrollo", &developer);
    write_row(html, "Steam", &optional_link(view.links.storefront_url.as_deref()));
    write_row(html, "Itch", &optional_link(view.links.distribution_url.as_deref()));
    write_row(html, "Web del juego", &optional_link(catalog.and_then(|c| c.website.as_deref())));
    write_row(html, "Lanzamiento", &text_or_no_data(catalog.and_then(|c| c.released.as_deref())));
    write_row(html, "Rating", &rating_text(catalog));
    write_row(
        html,
        "Metacritic",
        &catalog
            .and_then(|c| c.metacritic)
            .map(|m| m.to_string())
            .unwrap_or_else(|| NO_DATA.to_string()),
    );
    write_row(
        html,
        "Playtime",
        &catalog
            .and_then(|c| c.playtime)
            .filter(|&h| h > 0)
            .map(|h| format!("{}h", h))
            .unwrap_or_else(|| NO_DATA.to_string()),
    );
    write_row(html, "Géneros", &list_text(catalog.map(|c| c.genres.as_slice())));
    write_row(html, "Plataformas", &list_text(catalog.map(|c| c.platforms.as_slice())));
    write_row(html, "Developers RAWG", &list_text(catalog.map(|c| c.developers.as_slice())));
    write_row(html, "Publishers", &list_text(catalog.map(|c| c.publishers.as_slice())));
    html.push_str("</dl>\n");

    if let Some(description) = catalog.and_then(|c| c.description.as_deref()) {
        let _ = writeln!(html, "<p>{}</p>", escape_html(description));
    }

    html.push_str("</details>\n");
}

/// `value_html` must already be escaped.
fn write_row(html: &mut String, label: &str, value_html: &str) {
    let _ = writeln!(html, "<dt>{}</dt><dd>{}</dd>", label, value_html);
}

fn link(url: &str, text: &str) -> String {
    format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noreferrer\">{}</a>",
        escape_html(url),
        escape_html(text)
    )
}

fn optional_link(url: Option<&str>) -> String {
    match url.filter(|u| !u.trim().is_empty()) {
        Some(url) => link(url, "Abrir"),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn text_or_no_data(value: Option<&str>) -> String {
    value
        .map(escape_html)
        .unwrap_or_else(|| NO_DATA.to_string())
}

fn list_text(items: Option<&[String]>) -> String {
    match items {
        Some(items) if !items.is_empty() => escape_html(&items.join(", ")),
        _ => NO_DATA.to_string(),
    }
}

/// Rating with one decimal, plus the vote count when there is one.
fn rating_text(catalog: Option<&CatalogDetails>) -> String {
    let Some(rating) = catalog.and_then(|c| c.rating).filter(|&r| r > 0.0) else {
        return NO_DATA.to_string();
    };
    match catalog.and_then(|c| c.ratings_count).filter(|&n| n > 0) {
        Some(count) => format!("{:.1} ({} votos)", rating, count),
        None => format!("{:.1}", rating),
    }
}

/// The region shown on a card; blank regions read as "Sin provincia".
pub fn region_label(region: Option<&str>) -> &str {
    match region.map(str::trim) {
        Some(r) if !r.is_empty() => r,
        _ => NO_REGION,
    }
}

fn region_class(label: &str) -> &'static str {
    match label.to_lowercase().as_str() {
        "zaragoza" => "zaragoza",
        "teruel" => "teruel",
        "huesca" => "huesca",
        _ => "other",
    }
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
#[path = "tests/html_tests.rs"]
mod tests;
