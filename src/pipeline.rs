use std::path::{Path, PathBuf};

use crate::alpha_bleed::alpha_bleed;
use crate::config::Config;
use crate::error::{FaviconError, Result};
use crate::raster;
use crate::writer::{write_favicon_set, OutputBundle};

/// Decodes `bytes` and writes the complete favicon set into `output_dir`.
///
/// Nothing touches `output_dir` until decoding has succeeded.
pub fn create_favicon_set(
    bytes: &[u8],
    output_dir: &Path,
    config: &Config,
) -> Result<OutputBundle> {
    let mut img = raster::decode(bytes)?;
    if config.icons.bleed {
        alpha_bleed(&mut img);
    }
    write_favicon_set(&img, output_dir, &config.manifest)
}

/// Runs [`create_favicon_set`] on the blocking pool.
pub async fn create_favicon_set_blocking(
    bytes: Vec<u8>,
    output_dir: PathBuf,
    config: Config,
) -> Result<OutputBundle> {
    tokio::task::spawn_blocking(move || create_favicon_set(&bytes, &output_dir, &config))
        .await
        .map_err(|e| FaviconError::Unknown(format!("favicon task failed: {e}")))?
}
