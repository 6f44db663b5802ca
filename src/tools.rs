use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::pipeline::create_favicon_set_blocking;
use crate::source::{read_file, ImageFetcher};
use crate::writer::OutputBundle;

pub const FROM_PNG: &str = "generate_favicon_from_png";
pub const FROM_URL: &str = "generate_favicon_from_url";

/// The two favicon tools. Both always answer with a human-readable string;
/// failures are folded into an `Error ...` message instead of being returned.
pub struct FaviconTools {
    config: Config,
    fetcher: ImageFetcher,
}

impl FaviconTools {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            config,
            fetcher: ImageFetcher::new()?,
        })
    }

    pub async fn generate_favicon_from_png(&self, image_path: &str, output_path: &str) -> String {
        match self.from_png(image_path, output_path).await {
            Ok(bundle) => format!(
                "Successfully generated favicon set!\n\n{}",
                describe(&bundle)
            ),
            Err(e) => {
                tracing::warn!(image_path, "favicon generation failed: {e}");
                format!("Error generating favicon: {e}")
            }
        }
    }

    pub async fn generate_favicon_from_url(&self, image_url: &str, output_path: &str) -> String {
        match self.from_url(image_url, output_path).await {
            Ok(bundle) => format!(
                "Successfully downloaded image from {image_url} and generated favicon set!\n\n{}",
                describe(&bundle)
            ),
            Err(e) => {
                tracing::warn!(image_url, "favicon generation failed: {e}");
                format!("Error generating favicon from URL: {e}")
            }
        }
    }

    async fn from_png(&self, image_path: &str, output_path: &str) -> Result<OutputBundle> {
        let bytes = read_file(Path::new(image_path))?;
        create_favicon_set_blocking(bytes, PathBuf::from(output_path), self.config.clone()).await
    }

    async fn from_url(&self, image_url: &str, output_path: &str) -> Result<OutputBundle> {
        let bytes = self.fetcher.fetch(image_url).await?;
        create_favicon_set_blocking(bytes, PathBuf::from(output_path), self.config.clone()).await
    }
}

/// True when a tool answer reports a failure.
pub fn is_error(message: &str) -> bool {
    message.starts_with("Error")
}

fn describe(bundle: &OutputBundle) -> String {
    let mut out = format!(
        "Output directory: {}\nGenerated files:",
        bundle.output_directory.display()
    );
    for path in &bundle.generated_files {
        let _ = write!(out, "\n- {}", path.display());
    }
    out
}
