use serde::{Deserialize, Serialize};

/// Name the catalog uses (and we substitute) for a game that could not be resolved.
pub const NOT_FOUND_NAME: &str = "UNDEFINED";

/// Slug value the catalog returns when a redirect points nowhere.
pub const UNDEFINED_SLUG: &str = "undefined";

/// External links curated alongside a seed entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalLinks {
    /// Storefront page (Steam)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storefront_url: Option<String>,
    /// Distribution page (itch.io)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution_url: Option<String>,
    /// Studio website
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
}

/// A locally curated entry identifying one game/developer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedRecord {
    /// Catalog identifier used for lookups (never empty)
    pub catalog_slug: String,
    /// Studio name (never empty)
    pub developer_name: String,
    /// Province or region the studio belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default)]
    pub links: ExternalLinks,
}

impl SeedRecord {
    pub fn new(catalog_slug: impl Into<String>, developer_name: impl Into<String>) -> Self {
        Self {
            catalog_slug: catalog_slug.into(),
            developer_name: developer_name.into(),
            region: None,
            links: ExternalLinks::default(),
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}

/// Game metadata as resolved from the external catalog.
///
/// Serialized with the catalog's own field names so the JSON endpoints look
/// like a thin proxy of the upstream API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: u64,
    pub slug: String,
    pub name: String,
    #[serde(rename = "released", default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings_count: Option<u64>,
    #[serde(rename = "metacritic", default, skip_serializing_if = "Option::is_none")]
    pub critic_score: Option<u32>,
    #[serde(rename = "playtime", default, skip_serializing_if = "Option::is_none")]
    pub playtime_hours: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "website", default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub developers: Vec<String>,
    #[serde(default)]
    pub publishers: Vec<String>,
    #[serde(rename = "background_image", default)]
    pub primary_image: Option<String>,
    #[serde(rename = "background_image_additional", default)]
    pub secondary_image: Option<String>,
}

impl CatalogRecord {
    /// The well-formed "not found" placeholder for a requested slug.
    pub fn not_found(requested_slug: impl Into<String>) -> Self {
        Self {
            id: 0,
            slug: requested_slug.into(),
            name: NOT_FOUND_NAME.to_string(),
            ..Self::default()
        }
    }

    /// True for the placeholder, or for any record the catalog itself marks as undefined.
    pub fn is_not_found(&self) -> bool {
        self.name == NOT_FOUND_NAME || self.slug == UNDEFINED_SLUG
    }
}

/// A screenshot attached to a resolved catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screenshot {
    pub id: u64,
    #[serde(rename = "image")]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Screenshot {
    pub fn new(id: u64, image_url: impl Into<String>) -> Self {
        Self {
            id,
            image_url: image_url.into(),
            width: None,
            height: None,
        }
    }
}

/// Catalog fields shown in the detail view of a card.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDetails {
    pub id: u64,
    pub slug: String,
    pub released: Option<String>,
    pub rating: Option<f64>,
    pub ratings_count: Option<u64>,
    pub metacritic: Option<u32>,
    pub playtime: Option<u32>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub genres: Vec<String>,
    pub platforms: Vec<String>,
    pub developers: Vec<String>,
    pub publishers: Vec<String>,
}

impl From<&CatalogRecord> for CatalogDetails {
    fn from(record: &CatalogRecord) -> Self {
        Self {
            id: record.id,
            slug: record.slug.clone(),
            released: record.release_date.clone(),
            rating: record.rating,
            ratings_count: record.ratings_count,
            metacritic: record.critic_score,
            playtime: record.playtime_hours,
            description: record.description.clone(),
            website: record.website_url.clone(),
            genres: record.genres.clone(),
            platforms: record.platforms.clone(),
            developers: record.developers.clone(),
            publishers: record.publishers.clone(),
        }
    }
}

/// One seed entry merged with whatever the catalog had to say about it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedGameView {
    /// The slug the seed file asked for (kept even after a catalog redirect)
    pub seed: String,
    pub title: String,
    pub developer: String,
    pub region: Option<String>,
    /// Screenshots first, then the additional background, then the main background
    pub images: Vec<String>,
    pub links: ExternalLinks,
    /// `None` when the catalog lookup failed or found nothing
    pub catalog: Option<CatalogDetails>,
}

impl EnrichedGameView {
    /// Merge a seed entry with a resolved record and its screenshots.
    ///
    /// A record without a name keeps the seed slug as its title.
    pub fn merged(seed: &SeedRecord, record: &CatalogRecord, screenshots: &[Screenshot]) -> Self {
        let images = screenshots
            .iter()
            .map(|s| Some(s.image_url.as_str()))
            .chain([record.secondary_image.as_deref(), record.primary_image.as_deref()])
            .flatten()
            .filter(|url| !url.trim().is_empty())
            .map(str::to_string)
            .collect();

        let title = if record.name.trim().is_empty() {
            seed.catalog_slug.clone()
        } else {
            record.name.clone()
        };

        Self {
            seed: seed.catalog_slug.clone(),
            title,
            developer: seed.developer_name.clone(),
            region: seed.region.clone(),
            images,
            links: seed.links.clone(),
            catalog: Some(CatalogDetails::from(record)),
        }
    }

    /// A card with no catalog data: the slug stands in for the title.
    pub fn degraded(seed: &SeedRecord) -> Self {
        Self {
            seed: seed.catalog_slug.clone(),
            title: seed.catalog_slug.clone(),
            developer: seed.developer_name.clone(),
            region: seed.region.clone(),
            images: Vec::new(),
            links: seed.links.clone(),
            catalog: None,
        }
    }

    pub fn has_catalog_data(&self) -> bool {
        self.catalog.is_some()
    }
}

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod tests;
