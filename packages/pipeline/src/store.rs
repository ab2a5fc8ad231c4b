//! Artifact store abstraction. Section artifacts and juriscontent HTML
//! live under string keys; the filesystem backend maps keys to paths
//! under a fixed root.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::{PipelineError, Result};

/// Text blob storage keyed by slash-separated paths.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Read a text blob. Missing keys are `BlobNotFound`.
    async fn get_text(&self, key: &str) -> Result<String>;

    /// Write a text blob, creating parent folders as needed.
    async fn put_text(&self, key: &str, content: &str) -> Result<()>;

    /// Remove everything under a key prefix. Removing a prefix that does
    /// not exist is not an error.
    async fn clear_prefix(&self, prefix: &str) -> Result<()>;
}

/// Filesystem-backed store rooted at a directory.
#[derive(Debug, Clone)]
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() {
            return Err(PipelineError::InvalidInput("empty store key".into()));
        }
        let relative = Path::new(key);
        let escapes = relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, std::path::Component::ParentDir));
        if escapes {
            return Err(PipelineError::InvalidInput(format!(
                "store key must be relative and stay under the root: {key}"
            )));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn get_text(&self, key: &str) -> Result<String> {
        let path = self.resolve(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(PipelineError::BlobNotFound(key.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn put_text(&self, key: &str, content: &str) -> Result<()> {
        let path = self.resolve(key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, content).await?;
        Ok(())
    }

    async fn clear_prefix(&self, prefix: &str) -> Result<()> {
        let path = self.resolve(prefix)?;
        match tokio::fs::remove_dir_all(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, FsBlobStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FsBlobStore::new(dir.path());
        (dir, store)
    }

    #[tokio::test]
    async fn test_put_then_get_round_trip() {
        let (_dir, store) = store();
        store
            .put_text("legislation/act-1/juriscontent.html", "<html></html>")
            .await
            .unwrap();
        let content = store
            .get_text("legislation/act-1/juriscontent.html")
            .await
            .unwrap();
        assert_eq!(content, "<html></html>");
    }

    #[tokio::test]
    async fn test_get_missing_key_is_blob_not_found() {
        let (_dir, store) = store();
        let err = store.get_text("legislation/nope.html").await.unwrap_err();
        assert!(matches!(err, PipelineError::BlobNotFound(_)));
    }

    #[tokio::test]
    async fn test_clear_prefix_removes_contents() {
        let (_dir, store) = store();
        store
            .put_text("legislation/act-1/sections/miniviewer_1.txt", "one")
            .await
            .unwrap();
        store
            .put_text("legislation/act-1/sections/miniviewer_2.txt", "two")
            .await
            .unwrap();

        store.clear_prefix("legislation/act-1/sections").await.unwrap();

        let err = store
            .get_text("legislation/act-1/sections/miniviewer_1.txt")
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::BlobNotFound(_)));
    }

    #[tokio::test]
    async fn test_clear_missing_prefix_is_ok() {
        let (_dir, store) = store();
        store.clear_prefix("legislation/never-written").await.unwrap();
    }

    #[tokio::test]
    async fn test_rejects_escaping_keys() {
        let (_dir, store) = store();
        let err = store.get_text("../outside.txt").await.unwrap_err();
        assert!(matches!(err, PipelineError::InvalidInput(_)));

        let err = store.get_text("/etc/passwd").await.unwrap_err();
        assert!(matches!(err, PipelineError::InvalidInput(_)));
    }
}
