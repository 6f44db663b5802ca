use std::path::Path;

use reqwest::Client;

use crate::error::{FaviconError, Result};

/// Reads a local source image.
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| FaviconError::File {
        path: path.to_path_buf(),
        source,
    })
}

/// Downloads source images over HTTP.
pub struct ImageFetcher {
    client: Client,
}

impl ImageFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .gzip(true)
            .build()
            .map_err(|e| FaviconError::Unknown(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Issues a single GET and returns the body. Any non-2xx status is an error.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| FaviconError::network(url, e))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FaviconError::network(url, e))?;

        tracing::debug!(bytes = bytes.len(), "downloaded {url}");
        Ok(bytes.to_vec())
    }
}
