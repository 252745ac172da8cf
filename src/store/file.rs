use super::collection::Collection;
use super::error::Result;
use super::types::{Article, ArticlePatch, NewArticle};
use super::ArticleStore;

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Flat-file article store.
///
/// Every call reads and decodes the entire file; every mutation re-encodes and
/// rewrites it. There is no caching between calls.
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Opens the store at `path`, creating the parent directory and an empty
    /// document if the file does not exist yet.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if fs::try_exists(&path).await? {
            tracing::info!("Using article store at {}", path.display());
        } else {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).await?;
            }
            write_atomic(&path, &Collection::default().encode()?).await?;
            tracing::info!("Created empty article store at {}", path.display());
        }

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Collection> {
        let content = fs::read_to_string(&self.path).await?;
        Collection::decode(&content)
    }

    async fn save(&self, collection: &Collection) -> Result<()> {
        write_atomic(&self.path, &collection.encode()?).await
    }
}

#[async_trait]
impl ArticleStore for FileStore {
    async fn insert(&self, new: NewArticle) -> Result<Article> {
        let _guard = self.write_lock.lock().await;

        let mut collection = self.load().await?;
        let article = collection.insert(new)?;
        self.save(&collection).await?;

        tracing::debug!("Inserted article {}", article.id);
        Ok(article)
    }

    async fn find_all(&self) -> Result<Vec<Article>> {
        Ok(self.load().await?.articles)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Article>> {
        Ok(self.load().await?.find(id).cloned())
    }

    async fn update_by_id(&self, id: &str, patch: ArticlePatch) -> Result<Option<Article>> {
        let _guard = self.write_lock.lock().await;

        let mut collection = self.load().await?;
        let updated = collection.update(id, patch);
        if updated.is_some() {
            self.save(&collection).await?;
        }

        Ok(updated)
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut collection = self.load().await?;
        if !collection.remove(id) {
            tracing::debug!("No article {} to delete", id);
        }
        self.save(&collection).await
    }
}

/// Writes `content` to a sibling temp file, then renames it over `path`.
async fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp_path = path.with_file_name(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));

    fs::write(&tmp_path, content).await?;
    if let Err(e) = fs::rename(&tmp_path, path).await {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(e.into());
    }

    Ok(())
}
