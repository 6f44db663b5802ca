use serde::{Deserialize, Serialize};

use crate::config::ManifestConfig;

pub const MANIFEST_NAME: &str = "manifest.json";

/// Web app manifest describing the generated PNG set.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Manifest {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: String,
    pub display: String,
    pub background_color: String,
    pub theme_color: String,
    pub icons: Vec<ManifestIcon>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl ManifestIcon {
    pub fn png(src: String, size: u32) -> Self {
        Self {
            src,
            sizes: format!("{size}x{size}"),
            mime_type: "image/png".to_string(),
        }
    }
}

impl Manifest {
    /// One icon entry per size, each pointing at the PNG named by `file_name`.
    pub fn build(
        meta: &ManifestConfig,
        sizes: &[u32],
        file_name: impl Fn(u32) -> String,
    ) -> Self {
        Self {
            name: meta.name.clone(),
            short_name: meta.short_name.clone(),
            description: meta.description.clone(),
            start_url: meta.start_url.clone(),
            display: meta.display.clone(),
            background_color: meta.background_color.clone(),
            theme_color: meta.theme_color.clone(),
            icons: sizes
                .iter()
                .map(|&size| ManifestIcon::png(file_name(size), size))
                .collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
