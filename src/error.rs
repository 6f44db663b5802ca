use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = FaviconError> = std::result::Result<T, E>;

/// Failure kinds for every step of favicon generation.
#[derive(Debug, Error)]
pub enum FaviconError {
    #[error("cannot identify image data: {0}")]
    Decode(#[source] image::ImageError),

    #[error("failed to read {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to fetch {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Unknown(String),
}

impl FaviconError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FaviconError::Write {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn network(url: &str, source: reqwest::Error) -> Self {
        FaviconError::Network {
            url: url.to_string(),
            source,
        }
    }
}
