use std::fs::File;
use std::io::{self, BufWriter, Cursor, Write};
use std::path::{Component, Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::config::ManifestConfig;
use crate::error::{FaviconError, Result};
use crate::ico::encode_ico;
use crate::manifest::{Manifest, MANIFEST_NAME};
use crate::raster::resize_square;

/// Standard favicon PNG sizes, also the manifest icon list.
pub const FAVICON_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

/// Resolutions embedded in `favicon.ico`.
pub const ICO_SIZES: [u32; 3] = [16, 32, 48];

/// Apple touch icon sizes.
pub const APPLE_SIZES: [u32; 9] = [180, 152, 144, 120, 114, 76, 72, 60, 57];

pub const ICO_NAME: &str = "favicon.ico";

pub fn favicon_name(size: u32) -> String {
    format!("favicon-{size}x{size}.png")
}

pub fn apple_touch_name(size: u32) -> String {
    format!("apple-touch-icon-{size}x{size}.png")
}

/// Drops `.` segments and trailing separators, so `./out/` is reported as `out`.
pub fn normalize_dir(dir: &Path) -> PathBuf {
    let cleaned: PathBuf = dir
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}

/// One file of the set, fully encoded and ready to land on disk.
#[derive(Debug)]
pub struct GeneratedAsset {
    pub name: String,
    pub content: Vec<u8>,
    pub path: PathBuf,
}

impl GeneratedAsset {
    fn new(dir: &Path, name: String, content: Vec<u8>) -> Self {
        let path = dir.join(&name);
        Self {
            name,
            content,
            path,
        }
    }

    fn png(dir: &Path, name: String, img: &RgbaImage) -> Result<Self> {
        let path = dir.join(&name);
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .map_err(|e| FaviconError::write(&path, io::Error::other(e)))?;
        Ok(Self {
            name,
            content: buf,
            path,
        })
    }

    /// Writes the asset and hands back its path.
    fn persist(self) -> Result<PathBuf> {
        std::fs::write(&self.path, &self.content)
            .map_err(|e| FaviconError::write(&self.path, e))?;
        tracing::debug!(
            name = %self.name,
            bytes = self.content.len(),
            "wrote {}",
            self.path.display()
        );
        Ok(self.path)
    }
}

#[derive(Debug, Clone)]
pub struct OutputBundle {
    pub generated_files: Vec<PathBuf>,
    pub manifest: Manifest,
    pub output_directory: PathBuf,
}

/// Writes the full favicon set for `img` into `output_dir`.
///
/// Files are produced in a fixed order: standard PNGs, `favicon.ico`, Apple
/// touch icons, then `manifest.json`. The first failure stops the run and
/// whatever was already written stays on disk.
pub fn write_favicon_set(
    img: &RgbaImage,
    output_dir: &Path,
    meta: &ManifestConfig,
) -> Result<OutputBundle> {
    let output_dir = normalize_dir(output_dir);
    let output_dir = output_dir.as_path();
    std::fs::create_dir_all(output_dir).map_err(|e| FaviconError::write(output_dir, e))?;

    let mut generated_files = Vec::with_capacity(FAVICON_SIZES.len() + APPLE_SIZES.len() + 2);

    for size in FAVICON_SIZES {
        let resized = resize_square(img, size);
        let asset = GeneratedAsset::png(output_dir, favicon_name(size), &resized)?;
        generated_files.push(asset.persist()?);
    }

    generated_files.push(write_ico(img, output_dir)?);

    for size in APPLE_SIZES {
        let resized = resize_square(img, size);
        let asset = GeneratedAsset::png(output_dir, apple_touch_name(size), &resized)?;
        generated_files.push(asset.persist()?);
    }

    let manifest = Manifest::build(meta, &FAVICON_SIZES, favicon_name);
    let json = manifest.to_json().map_err(|e| {
        FaviconError::Unknown(format!("failed to serialize {MANIFEST_NAME}: {e}"))
    })?;
    let asset = GeneratedAsset::new(output_dir, MANIFEST_NAME.to_string(), json.into_bytes());
    generated_files.push(asset.persist()?);

    tracing::info!(
        files = generated_files.len(),
        "generated favicon set in {}",
        output_dir.display()
    );

    Ok(OutputBundle {
        generated_files,
        manifest,
        output_directory: output_dir.to_path_buf(),
    })
}

fn write_ico(img: &RgbaImage, output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join(ICO_NAME);
    let frames: Vec<RgbaImage> = ICO_SIZES
        .iter()
        .map(|&size| resize_square(img, size))
        .collect();

    let file = File::create(&path).map_err(|e| FaviconError::write(&path, e))?;
    let mut out = BufWriter::new(file);
    encode_ico(&frames, &mut out).map_err(|e| FaviconError::write(&path, io::Error::other(e)))?;
    out.flush().map_err(|e| FaviconError::write(&path, e))?;

    tracing::debug!(sizes = ?ICO_SIZES, "wrote {}", path.display());
    Ok(path)
}
