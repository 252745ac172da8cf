use super::collection::Collection;
use super::error::{Result, StoreError};
use super::types::{Article, ArticlePatch, NewArticle};
use super::ArticleStore;

use async_trait::async_trait;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

/// Article store held entirely in process memory.
///
/// Shares the `Collection` logic with `FileStore`, so ids, merge rules and
/// ordering behave identically. Contents are lost when the process exits.
#[derive(Default)]
pub struct MemoryStore {
    collection: Mutex<Collection>,
    simulate_failure: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent operation fail with an I/O error, for exercising
    /// error paths in callers.
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }

    fn check(&self) -> Result<()> {
        if self.simulate_failure.load(Ordering::SeqCst) {
            return Err(StoreError::Io(io::Error::other("simulated store failure")));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleStore for MemoryStore {
    async fn insert(&self, new: NewArticle) -> Result<Article> {
        self.check()?;
        self.collection.lock().await.insert(new)
    }

    async fn find_all(&self) -> Result<Vec<Article>> {
        self.check()?;
        Ok(self.collection.lock().await.articles.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Article>> {
        self.check()?;
        Ok(self.collection.lock().await.find(id).cloned())
    }

    async fn update_by_id(&self, id: &str, patch: ArticlePatch) -> Result<Option<Article>> {
        self.check()?;
        Ok(self.collection.lock().await.update(id, patch))
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        self.check()?;
        self.collection.lock().await.remove(id);
        Ok(())
    }
}
