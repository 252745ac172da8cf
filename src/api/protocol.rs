//! HTTP Protocol
//!
//! Route paths, fixed response bodies and the DTOs that are not articles
//! themselves.

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Route index.
pub const ENDPOINT_INDEX: &str = "/";
/// Collection endpoint: list (GET) and create (POST).
pub const ENDPOINT_ARTICLES: &str = "/articles";
/// Item endpoint: read (GET), update (PATCH), delete (DELETE).
pub const ENDPOINT_ARTICLE: &str = "/articles/:id";

// --- Fixed bodies ---

/// Body of every 404 the item endpoint returns.
pub const NOT_FOUND_MESSAGE: &str = "404 Article not found";
/// Plain-text body of every 500. The underlying error is only logged.
pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong";

/// Response of `GET /`: a human-readable description of each route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteIndex {
    #[serde(rename = "/articles")]
    pub articles: String,
    #[serde(rename = "/articles/:id")]
    pub article: String,
}

impl Default for RouteIndex {
    fn default() -> Self {
        Self {
            articles: "read and create new articles".to_string(),
            article: "read, update and delete an individual article".to_string(),
        }
    }
}
