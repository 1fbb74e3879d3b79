use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Source name used when the payload carries no usable source.
pub const UNKNOWN_SOURCE: &str = "Unknown";

/// A normalized news item.
///
/// Decoding is tolerant: a missing or non-string `id` gets a fresh UUID, a
/// missing `description` becomes an empty string, and `source` may be either
/// a bare string or an object with a `name` field. Only `title` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawArticle")]
pub struct Article {
    id: String,
    title: String,
    description: String,
    #[serde(rename = "urlToImage", skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    source: String,
    #[serde(rename = "publishedAt", skip_serializing_if = "Option::is_none")]
    published_at: Option<String>,
}

impl Article {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            id: generate_id(),
            title: title.into(),
            description: description.into(),
            image_url: None,
            source: source.into(),
            published_at: None,
        }
    }

    /// 空字串的 id 會被忽略，維持「id 永遠非空」
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        if !id.is_empty() {
            self.id = id;
        }
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_published_at(mut self, published_at: impl Into<String>) -> Self {
        self.published_at = Some(published_at.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn published_at(&self) -> Option<&str> {
        self.published_at.as_deref()
    }

    /// Identity comparison used for de-duplication. Full equality (`==`)
    /// also compares every other field.
    pub fn same_id(&self, other: &Article) -> bool {
        self.id == other.id
    }

    /// Same headline from the same source at the same time. Lets a re-fetched
    /// live article, whose id was regenerated, be matched to a saved copy.
    pub fn same_story(&self, other: &Article) -> bool {
        self.title == other.title
            && self.source == other.source
            && self.published_at == other.published_at
    }
}

fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Wire shape accepted by the decoder before normalization.
#[derive(Deserialize)]
struct RawArticle {
    #[serde(default)]
    id: Option<Value>,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(rename = "urlToImage", default)]
    image_url: Option<String>,
    #[serde(default)]
    source: Option<Value>,
    #[serde(rename = "publishedAt", default)]
    published_at: Option<String>,
}

impl From<RawArticle> for Article {
    fn from(raw: RawArticle) -> Self {
        let id = raw
            .id
            .as_ref()
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .unwrap_or_else(generate_id);

        Self {
            id,
            title: raw.title,
            description: raw.description.unwrap_or_default(),
            image_url: raw.image_url,
            source: resolve_source(raw.source.as_ref()),
            published_at: raw.published_at,
        }
    }
}

type SourceStrategy = fn(&Value) -> Option<String>;

/// Tried in order; the first strategy that yields a name wins.
const SOURCE_STRATEGIES: &[SourceStrategy] = &[source_from_string, source_from_named_object];

fn source_from_string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

fn source_from_named_object(value: &Value) -> Option<String> {
    value.get("name")?.as_str().map(str::to_string)
}

fn resolve_source(value: Option<&Value>) -> String {
    value
        .and_then(|v| SOURCE_STRATEGIES.iter().find_map(|strategy| strategy(v)))
        .unwrap_or_else(|| UNKNOWN_SOURCE.to_string())
}

/// Envelope returned by the articles endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticlesResponse {
    pub articles: Vec<Article>,
    #[serde(rename = "totalResults", default, skip_serializing_if = "Option::is_none")]
    pub total_results: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Auto,
}

impl From<Theme> for u8 {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => 0,
            Theme::Dark => 1,
            Theme::Auto => 2,
        }
    }
}

impl TryFrom<u8> for Theme {
    type Error = String;

    fn try_from(index: u8) -> std::result::Result<Self, Self::Error> {
        match index {
            0 => Ok(Theme::Light),
            1 => Ok(Theme::Dark),
            2 => Ok(Theme::Auto),
            other => Err(format!("unknown theme index {}", other)),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "auto" => Ok(Theme::Auto),
            other => Err(format!("unknown theme '{}', expected light, dark or auto", other)),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::Auto => "Auto",
        };
        f.write_str(name)
    }
}

pub const MIN_FONT_SIZE: f32 = 12.0;
pub const MAX_FONT_SIZE: f32 = 24.0;
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// Reader preferences persisted as one flat JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub name: String,
    pub email: String,
    pub notes: String,
    pub notifications_enabled: bool,
    pub font_size: f32,
    pub theme: Theme,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            notes: String::new(),
            notifications_enabled: false,
            font_size: DEFAULT_FONT_SIZE,
            theme: Theme::default(),
        }
    }
}

impl UserSettings {
    /// Reads each field independently; a missing or mistyped field keeps its
    /// default instead of discarding the whole record.
    pub fn from_json_value(value: &Value) -> Self {
        let defaults = Self::default();
        let text = |key: &str, fallback: String| {
            value
                .get(key)
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or(fallback)
        };

        Self {
            name: text("name", defaults.name),
            email: text("email", defaults.email),
            notes: text("notes", defaults.notes),
            notifications_enabled: value
                .get("notificationsEnabled")
                .and_then(Value::as_bool)
                .unwrap_or(defaults.notifications_enabled),
            font_size: value
                .get("fontSize")
                .and_then(Value::as_f64)
                .map(|size| size as f32)
                .filter(|size| (MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(size))
                .unwrap_or(defaults.font_size),
            theme: value
                .get("theme")
                .and_then(Value::as_u64)
                .and_then(|index| u8::try_from(index).ok())
                .and_then(|index| Theme::try_from(index).ok())
                .unwrap_or(defaults.theme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: Value) -> Article {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_new_article_has_generated_id() {
        let article = Article::new("Test Article", "Test Description", "Test Source");
        assert_eq!(article.title(), "Test Article");
        assert_eq!(article.description(), "Test Description");
        assert_eq!(article.source(), "Test Source");
        assert!(!article.id().is_empty());
    }

    #[test]
    fn test_equality_compares_all_fields() {
        let a = Article::new("Title", "Desc", "Source").with_id("same");
        let b = Article::new("Title", "Desc", "Source").with_id("same");
        let c = Article::new("Other", "Desc", "Source").with_id("same");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.same_id(&c));
    }

    #[test]
    fn test_decode_newsapi_shape() {
        let article = decode(json!({
            "title": "Test Article",
            "description": "Test Description",
            "urlToImage": "https://example.com/image.jpg",
            "source": { "id": null, "name": "Test Source" },
            "publishedAt": "2025-12-18T10:00:00Z"
        }));

        assert_eq!(article.title(), "Test Article");
        assert_eq!(article.description(), "Test Description");
        assert_eq!(article.image_url(), Some("https://example.com/image.jpg"));
        assert_eq!(article.source(), "Test Source");
        assert_eq!(article.published_at(), Some("2025-12-18T10:00:00Z"));
        assert!(!article.id().is_empty());
    }

    #[test]
    fn test_string_and_object_source_decode_alike() {
        let plain = decode(json!({ "title": "t", "source": "Reuters" }));
        let nested = decode(json!({ "title": "t", "source": { "name": "Reuters" } }));
        assert_eq!(plain.source(), nested.source());
    }

    #[test]
    fn test_unusable_source_falls_back_to_unknown() {
        for source in [json!(null), json!(42), json!({ "id": "x" }), json!({ "name": 7 })] {
            let article = decode(json!({ "title": "t", "source": source }));
            assert_eq!(article.source(), UNKNOWN_SOURCE);
        }
        let missing = decode(json!({ "title": "t" }));
        assert_eq!(missing.source(), UNKNOWN_SOURCE);
    }

    #[test]
    fn test_missing_optional_fields() {
        let article = decode(json!({ "title": "only a title" }));
        assert_eq!(article.description(), "");
        assert_eq!(article.image_url(), None);
        assert_eq!(article.published_at(), None);

        let null_description = decode(json!({ "title": "t", "description": null }));
        assert_eq!(null_description.description(), "");
    }

    #[test]
    fn test_unusable_id_is_regenerated() {
        let numeric = decode(json!({ "id": 17, "title": "t" }));
        let empty = decode(json!({ "id": "", "title": "t" }));
        assert!(!numeric.id().is_empty());
        assert_ne!(numeric.id(), "17");
        assert!(!empty.id().is_empty());

        let kept = decode(json!({ "id": "abc", "title": "t" }));
        assert_eq!(kept.id(), "abc");
    }

    #[test]
    fn test_missing_title_is_an_error() {
        let result = serde_json::from_value::<Article>(json!({ "description": "d" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_persisted_form_decodes_back() {
        let article = Article::new("Title", "Desc", "Source")
            .with_id("fav-1")
            .with_image_url("https://picsum.photos/400/300?random=1");
        let encoded = serde_json::to_value(&article).unwrap();

        assert_eq!(encoded["source"], json!("Source"));
        assert_eq!(encoded["urlToImage"], json!("https://picsum.photos/400/300?random=1"));
        assert!(encoded.get("publishedAt").is_none());
        assert_eq!(decode(encoded), article);
    }

    #[test]
    fn test_articles_response() {
        let response: ArticlesResponse = serde_json::from_value(json!({
            "articles": [
                { "title": "Article 1", "description": "Description 1", "source": "Source 1" },
                { "title": "Article 2", "description": "Description 2", "source": "Source 2" }
            ],
            "totalResults": 2
        }))
        .unwrap();

        assert_eq!(response.articles.len(), 2);
        assert_eq!(response.articles[0].title(), "Article 1");
        assert_eq!(response.articles[1].title(), "Article 2");
        assert_eq!(response.total_results, Some(2));
    }

    #[test]
    fn test_settings_fields_fall_back_individually() {
        let settings = UserSettings::from_json_value(&json!({
            "name": "Ada",
            "email": 5,
            "notificationsEnabled": true,
            "fontSize": 20.0,
            "theme": 9
        }));

        assert_eq!(settings.name, "Ada");
        assert_eq!(settings.email, "");
        assert!(settings.notifications_enabled);
        assert_eq!(settings.font_size, 20.0);
        assert_eq!(settings.theme, Theme::Light);
    }

    #[test]
    fn test_stored_font_size_outside_range_falls_back() {
        for stored in [json!(100), json!(11.5), json!(-3)] {
            let settings = UserSettings::from_json_value(&json!({ "name": "Ada", "fontSize": stored }));
            assert_eq!(settings.font_size, DEFAULT_FONT_SIZE);
            assert_eq!(settings.name, "Ada");
        }
        let edge = UserSettings::from_json_value(&json!({ "fontSize": 24 }));
        assert_eq!(edge.font_size, MAX_FONT_SIZE);
    }

    #[test]
    fn test_theme_parsing() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(Theme::try_from(2).unwrap(), Theme::Auto);
        assert!("sepia".parse::<Theme>().is_err());
        assert_eq!(serde_json::to_value(Theme::Auto).unwrap(), json!(2));
    }
}
