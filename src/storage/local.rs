use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

use crate::{
    errors::{AppError, Result},
    storage::Storage,
};

/// Route prefix the bucket directory is served under.
pub const ASSETS_ROUTE: &str = "/assets";

pub struct LocalStorage {
    base_path: PathBuf,
    public_base_url: String,
}

impl LocalStorage {
    pub fn new<P: AsRef<Path>>(base_path: P, public_base_url: &str) -> Result<Self> {
        let base_path = base_path.as_ref().to_path_buf();

        std::fs::create_dir_all(&base_path)
            .map_err(|e| AppError::Storage(format!("Failed to create storage directory: {}", e)))?;

        Ok(Self {
            base_path,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn get_full_path(&self, path: &str) -> Result<PathBuf> {
        let relative = Path::new(path);
        let is_plain = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));

        if path.is_empty() || !is_plain {
            return Err(AppError::Storage(format!("Invalid object path: {}", path)));
        }

        Ok(self.base_path.join(relative))
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn store(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.get_full_path(path)?;

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::Storage(format!("Failed to create directory: {}", e)))?;
        }

        fs::write(&full_path, data)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to write file: {}", e)))?;

        Ok(())
    }

    async fn retrieve(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.get_full_path(path)?;

        fs::read(&full_path)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to read file: {}", e)))
    }

    async fn exists(&self, path: &str) -> Result<bool> {
        let full_path = self.get_full_path(path)?;
        Ok(fs::try_exists(&full_path).await.unwrap_or(false))
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}{}/{}", self.public_base_url, ASSETS_ROUTE, path)
    }
}
