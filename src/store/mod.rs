//! Article Persistence Module
//!
//! Owns the article collection and exposes it through the `ArticleStore` trait,
//! so the HTTP layer never knows which backend it is talking to.
//!
//! ## Backends
//! - **`FileStore`**: Reads the whole JSON document on every call and rewrites it
//!   on every mutation. Writes go through a temp file + rename.
//! - **`MemoryStore`**: Same contract over a resident `Collection`. Used by tests
//!   and by `--store memory`.
//!
//! ## Writers
//! Each backend serializes its mutating operations behind a single async lock,
//! so two concurrent read-modify-write cycles can never overwrite each other.

pub mod collection;
pub mod error;
pub mod file;
pub mod memory;
pub mod types;

pub use collection::Collection;
pub use error::{Result, StoreError};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use types::{Article, ArticlePatch, NewArticle, Votes};

use async_trait::async_trait;

/// CRUD contract over the article collection.
///
/// Lookups that find nothing return `Ok(None)`. `Err` is reserved for I/O and
/// parse failures.
#[async_trait]
pub trait ArticleStore: Send + Sync + 'static {
    /// Appends a new article with a fresh id, `createdAt` and zeroed votes.
    async fn insert(&self, new: NewArticle) -> Result<Article>;

    /// All articles in insertion order.
    async fn find_all(&self) -> Result<Vec<Article>>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Article>>;

    /// Shallow-merges `patch` onto the matching article.
    /// Returns `None` without writing anything when no article matches.
    async fn update_by_id(&self, id: &str, patch: ArticlePatch) -> Result<Option<Article>>;

    /// Removes the matching article, if any. Succeeds either way.
    async fn delete_by_id(&self, id: &str) -> Result<()>;
}
