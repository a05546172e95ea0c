use async_trait::async_trait;

use crate::errors::Result;

pub mod local;

pub use local::LocalStorage;

/// Object storage for uploaded game assets. Stored objects are publicly readable.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Writes `data` at `path`, replacing any object already there.
    async fn store(&self, path: &str, data: &[u8]) -> Result<()>;

    async fn retrieve(&self, path: &str) -> Result<Vec<u8>>;

    async fn exists(&self, path: &str) -> Result<bool>;

    /// The URL clients use to fetch the object at `path`.
    fn public_url(&self, path: &str) -> String;
}
