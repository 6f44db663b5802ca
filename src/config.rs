use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_NAME: &str = "favicon.toml";

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub manifest: ManifestConfig,

    #[serde(default)]
    pub icons: IconsConfig,
}

/// Metadata copied into `manifest.json`. The icon list is never configurable.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ManifestConfig {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: String,
    pub display: String,
    pub background_color: String,
    pub theme_color: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            name: "Favicon App".to_string(),
            short_name: "Favicon".to_string(),
            description: "Generated favicon application".to_string(),
            start_url: "/".to_string(),
            display: "standalone".to_string(),
            background_color: "#ffffff".to_string(),
            theme_color: "#000000".to_string(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct IconsConfig {
    /// Apply alpha bleed to the source before resizing (default: false)
    #[serde(default)]
    pub bleed: bool,
}

impl Config {
    /// Loads the config file, falling back to defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}
