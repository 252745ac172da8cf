//! Article Data Types
//!
//! The persisted `Article` record and the two caller-supplied shapes that feed it:
//! `NewArticle` (creation body) and `ArticlePatch` (shallow-merge update body).
//!
//! Articles are open objects: every top-level field a caller supplies, `title`
//! and `body` included, is kept in `fields` as whatever JSON value was sent and
//! written back verbatim. No field is type-checked.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys owned by the store. Callers can never set or overwrite them.
pub const RESERVED_FIELDS: [&str; 3] = ["id", "createdAt", "votes"];

/// Vote tally attached to every article. Starts at zero and is never changed
/// by the exposed operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Votes {
    pub up: u64,
    pub down: u64,
}

/// A stored article.
///
/// Field order matters for the wire shape: caller fields first, in the order
/// they were supplied, then the store-assigned `id`, `createdAt` and `votes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Caller-supplied top-level fields (`title`, `body`, anything else).
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    /// Decimal-string sequence number assigned at insert time.
    pub id: String,
    /// ISO-8601 UTC timestamp, set once at creation.
    pub created_at: String,
    #[serde(default)]
    pub votes: Votes,
}

impl Article {
    /// `title`, when it is present and a string.
    pub fn title(&self) -> Option<&str> {
        self.fields.get("title").and_then(Value::as_str)
    }

    /// `body`, when it is present and a string.
    pub fn body(&self) -> Option<&str> {
        self.fields.get("body").and_then(Value::as_str)
    }
}

/// Body of a creation request: any JSON object.
///
/// A request without `title` or `body` is accepted and the article is stored
/// without those fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewArticle {
    pub fields: Map<String, Value>,
}

impl NewArticle {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::default()
            .with("title", Value::String(title.into()))
            .with("body", Value::String(body.into()))
    }

    pub fn with(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Builds the stored record, dropping any reserved keys the caller tried to set.
    pub fn into_article(self, id: String, created_at: String) -> Article {
        Article {
            fields: without_reserved(self.fields),
            id,
            created_at,
            votes: Votes::default(),
        }
    }
}

/// Body of an update request: any JSON object. Every supplied key replaces the
/// stored one, `null` included; absent keys are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticlePatch {
    pub fields: Map<String, Value>,
}

impl ArticlePatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self::default().with("title", Value::String(title.into()))
    }

    pub fn body(body: impl Into<String>) -> Self {
        Self::default().with("body", Value::String(body.into()))
    }

    pub fn with(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Shallow-merges this patch onto `article`. `id`, `createdAt` and `votes`
    /// are never touched.
    pub fn apply(self, article: &mut Article) {
        article.fields.extend(without_reserved(self.fields));
    }
}

fn without_reserved(mut fields: Map<String, Value>) -> Map<String, Value> {
    for key in RESERVED_FIELDS {
        if fields.shift_remove(key).is_some() {
            tracing::debug!("Ignoring caller-supplied reserved field '{}'", key);
        }
    }
    fields
}
