use fabla_core::{CatalogRecord, Screenshot};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// How much of a non-JSON body is kept for diagnostics.
const RAW_SNIPPET_CHARS: usize = 300;

/// A raw upstream reply: status plus whatever the body turned out to be.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: UpstreamBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamBody {
    Json(Value),
    /// Body that did not parse as JSON, truncated.
    Unparseable(String),
}

impl UpstreamResponse {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: UpstreamBody::Json(body),
        }
    }

    /// Build from response text, keeping a snippet when it is not JSON.
    pub fn from_text(status: u16, text: &str) -> Self {
        let body = match serde_json::from_str(text) {
            Ok(value) => UpstreamBody::Json(value),
            Err(_) => UpstreamBody::Unparseable(text.chars().take(RAW_SNIPPET_CHARS).collect()),
        };
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The parsed body, if the status was a success and the body was JSON.
    pub fn success_json(&self) -> Option<&Value> {
        match &self.body {
            UpstreamBody::Json(value) if self.is_success() => Some(value),
            _ => None,
        }
    }

    /// Body as a JSON value suitable for error details.
    pub fn details(&self) -> Value {
        match &self.body {
            UpstreamBody::Json(value) => value.clone(),
            UpstreamBody::Unparseable(raw) => json!({ "raw": raw }),
        }
    }
}

/// A game object from the catalog, extracted field by field.
///
/// Nothing about the upstream shape is trusted: wrong-typed fields are
/// treated as absent.
#[derive(Debug, Clone, PartialEq)]
pub struct RawgGame {
    pub id: u64,
    pub slug: String,
    pub name: String,
    pub redirect: bool,
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
    pub background_image: Option<String>,
    pub background_image_additional: Option<String>,
    /// The body as received, kept for diagnostics.
    pub raw: Value,
}

impl RawgGame {
    /// Extract a game from a JSON value. Returns `None` unless it is an object.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let text = |key: &str| obj.get(key).and_then(Value::as_str).map(str::to_string);
        let non_empty = |key: &str| text(key).filter(|s| !s.trim().is_empty());
        let small = |key: &str| {
            obj.get(key)
                .and_then(Value::as_u64)
                .and_then(|n| u32::try_from(n).ok())
        };

        Some(Self {
            id: obj.get("id").and_then(Value::as_u64).unwrap_or(0),
            slug: scalar_text(obj.get("slug")),
            name: scalar_text(obj.get("name")),
            redirect: obj.get("redirect").and_then(Value::as_bool) == Some(true),
            released: non_empty("released"),
            rating: obj.get("rating").and_then(Value::as_f64),
            ratings_count: obj.get("ratings_count").and_then(Value::as_u64),
            metacritic: small("metacritic"),
            playtime: small("playtime"),
            description: non_empty("description_raw"),
            website: non_empty("website"),
            genres: names(obj.get("genres"), &["name"]),
            platforms: names(obj.get("platforms"), &["platform", "name"]),
            developers: names(obj.get("developers"), &["name"]),
            publishers: names(obj.get("publishers"), &["name"]),
            background_image: non_empty("background_image"),
            background_image_additional: non_empty("background_image_additional"),
            raw: value.clone(),
        })
    }

    /// Extract a game from a successful upstream response.
    pub fn from_response(response: &UpstreamResponse) -> Option<Self> {
        response.success_json().and_then(Self::from_value)
    }

    /// The trimmed slug, or `fallback` when the catalog gave none.
    pub fn slug_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        let slug = self.slug.trim();
        if slug.is_empty() { fallback } else { slug }
    }

    pub fn into_record(self, requested_slug: &str) -> CatalogRecord {
        let slug = self.slug_or(requested_slug).to_string();
        CatalogRecord {
            id: self.id,
            slug,
            name: self.name,
            release_date: self.released,
            rating: self.rating,
            ratings_count: self.ratings_count,
            critic_score: self.metacritic,
            playtime_hours: self.playtime,
            description: self.description,
            website_url: self.website,
            genres: self.genres,
            platforms: self.platforms,
            developers: self.developers,
            publishers: self.publishers,
            primary_image: self.background_image,
            secondary_image: self.background_image_additional,
        }
    }
}

/// One entry of a catalog search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub released: Option<String>,
}

/// Items of a `{ "results": [...] }` page that deserialize as `T`; the rest are dropped.
pub fn parse_results<T: for<'de> Deserialize<'de>>(body: &Value) -> Vec<T> {
    body.get("results")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Screenshots from a successful response; anything else yields none.
pub fn screenshots_from_response(response: &UpstreamResponse) -> Vec<Screenshot> {
    response
        .success_json()
        .map(parse_results::<Screenshot>)
        .unwrap_or_default()
        .into_iter()
        .filter(|s| !s.image_url.trim().is_empty())
        .collect()
}

/// Text form of a scalar: strings as-is, numbers and booleans literally.
fn scalar_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Follow `path` into each element of an array of objects, keeping the strings found.
fn names(value: Option<&Value>, path: &[&str]) -> Vec<String> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            path.iter()
                .try_fold(item, |v, key| v.get(key))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
