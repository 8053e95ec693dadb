//! Remote object store for publishing reports.
//!
//! A generated report can optionally be pushed off-device as an opaque
//! blob plus a file name. The store returns an opaque identifier on
//! success; nothing is retried automatically.

use async_trait::async_trait;

use crate::error::{EngineError, EngineResult};

/// A remote store accepting named binary blobs.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Uploads the blob under the given file name, returning the
    /// store-assigned object identifier.
    async fn put(&self, bytes: Vec<u8>, filename: &str) -> EngineResult<String>;
}

/// An [`ObjectStore`] backed by a plain HTTP endpoint.
///
/// Uploads with `PUT {base_url}/{filename}`; the response body is taken
/// as the object identifier.
#[derive(Debug, Clone)]
pub struct HttpObjectStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpObjectStore {
    /// Creates a store for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ObjectStore for HttpObjectStore {
    async fn put(&self, bytes: Vec<u8>, filename: &str) -> EngineResult<String> {
        let url = format!("{}/{}", self.base_url, filename);

        let response = self
            .client
            .put(&url)
            .body(bytes)
            .send()
            .await
            .map_err(|e| EngineError::UploadError {
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(EngineError::UploadError {
                message: format!("{} returned status {}", url, response.status()),
            });
        }

        response.text().await.map_err(|e| EngineError::UploadError {
            message: e.to_string(),
        })
    }
}
