//! In-memory form of the persisted document.
//!
//! Both store backends run every operation against a `Collection`: the file
//! store decodes one from disk per call, the memory store keeps one resident.

use super::error::{Result, StoreError};
use super::types::{Article, ArticlePatch, NewArticle};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// The article collection plus the last id handed out.
///
/// `sequence` only ever grows, so an id is never issued twice even after the
/// article carrying it has been deleted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub sequence: u64,
    pub articles: Vec<Article>,
}

/// Accepted on-disk layouts. Older files hold a bare array of articles.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredDocument {
    Current(Collection),
    Legacy(Vec<Article>),
}

impl Collection {
    pub fn decode(content: &str) -> Result<Self> {
        let mut collection = match serde_json::from_str::<StoredDocument>(content)? {
            StoredDocument::Current(collection) => collection,
            StoredDocument::Legacy(articles) => Collection {
                sequence: 0,
                articles,
            },
        };
        collection.sequence = collection.sequence.max(collection.highest_numeric_id());
        Ok(collection)
    }

    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Fails with `SequenceExhausted` once the last id has reached `u64::MAX`.
    pub fn insert(&mut self, new: NewArticle) -> Result<Article> {
        self.sequence = self
            .sequence
            .checked_add(1)
            .ok_or(StoreError::SequenceExhausted)?;
        let article = new.into_article(self.sequence.to_string(), now_iso());
        self.articles.push(article.clone());
        Ok(article)
    }

    pub fn find(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|article| article.id == id)
    }

    /// Returns the merged article, or `None` when nothing matched.
    pub fn update(&mut self, id: &str, patch: ArticlePatch) -> Option<Article> {
        let article = self.articles.iter_mut().find(|article| article.id == id)?;
        patch.apply(article);
        Some(article.clone())
    }

    /// Returns whether an article was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.articles.len();
        self.articles.retain(|article| article.id != id);
        self.articles.len() != before
    }

    fn highest_numeric_id(&self) -> u64 {
        self.articles
            .iter()
            .filter_map(|article| article.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
    }
}

/// Current time in the `2024-01-31T12:00:00.000Z` form.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
