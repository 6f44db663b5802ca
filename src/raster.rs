use std::io::Write;
use std::path::Path;

use image::error::{DecodingError, ImageFormatHint};
use image::imageops::{self, FilterType};
use image::{ImageError, ImageReader, RgbaImage};
use tempfile::NamedTempFile;

use crate::error::{FaviconError, Result};

/// Resampling filter used for every generated size.
pub const FILTER: FilterType = FilterType::Lanczos3;

/// Decodes raw image bytes into an RGBA buffer.
///
/// The bytes are staged in a scratch file that is removed when this function
/// returns, whether decoding succeeded or not. The format is sniffed from the
/// content, so the `.png` suffix on the scratch file does not matter.
pub fn decode(bytes: &[u8]) -> Result<RgbaImage> {
    decode_in(bytes, &std::env::temp_dir())
}

/// Like [`decode`], staging the scratch file under `scratch_dir`.
pub fn decode_in(bytes: &[u8], scratch_dir: &Path) -> Result<RgbaImage> {
    let mut scratch = tempfile::Builder::new()
        .prefix("favicon-src-")
        .suffix(".png")
        .tempfile_in(scratch_dir)
        .map_err(|e| FaviconError::Unknown(format!("failed to create scratch file: {e}")))?;
    stage(&mut scratch, bytes)?;
    decode_file(&scratch)
}

fn stage(scratch: &mut NamedTempFile, bytes: &[u8]) -> Result<()> {
    scratch
        .write_all(bytes)
        .and_then(|()| scratch.flush())
        .map_err(|e| FaviconError::write(scratch.path(), e))
}

fn decode_file(scratch: &NamedTempFile) -> Result<RgbaImage> {
    let img = ImageReader::open(scratch.path())
        .map_err(|e| FaviconError::Unknown(format!("failed to reopen scratch file: {e}")))?
        .with_guessed_format()
        .map_err(|e| FaviconError::Unknown(format!("failed to read scratch file: {e}")))?
        .decode()
        .map_err(FaviconError::Decode)?;

    if img.width() == 0 || img.height() == 0 {
        return Err(FaviconError::Decode(ImageError::Decoding(DecodingError::new(
            ImageFormatHint::Unknown,
            format!("image has no pixels ({}x{})", img.width(), img.height()),
        ))));
    }

    tracing::debug!(
        width = img.width(),
        height = img.height(),
        color = ?img.color(),
        "decoded source image"
    );

    Ok(img.into_rgba8())
}

/// Resamples `img` to an `size`×`size` copy. Aspect ratio is not preserved.
pub fn resize_square(img: &RgbaImage, size: u32) -> RgbaImage {
    imageops::resize(img, size, size, FILTER)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

    use super::*;

    fn encode(img: DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), format).unwrap();
        buf
    }

    #[test]
    fn rgb_input_gains_opaque_alpha() {
        let src = RgbImage::from_pixel(4, 4, Rgb([12, 34, 56]));
        let bytes = encode(DynamicImage::ImageRgb8(src), ImageFormat::Png);

        let img = decode(&bytes).unwrap();

        assert_eq!(img.dimensions(), (4, 4));
        assert!(img.pixels().all(|p| p.0 == [12, 34, 56, 255]));
    }

    #[test]
    fn format_is_sniffed_from_content() {
        let src = RgbImage::from_pixel(8, 8, Rgb([255, 255, 255]));
        let bytes = encode(DynamicImage::ImageRgb8(src), ImageFormat::Jpeg);

        let img = decode(&bytes).unwrap();

        assert_eq!(img.dimensions(), (8, 8));
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, FaviconError::Decode(_)), "got {err:?}");
    }

    #[test]
    fn zero_sized_image_is_a_decode_error() {
        let err = decode(b"P6\n0 0\n255\n").unwrap_err();
        assert!(matches!(err, FaviconError::Decode(_)), "got {err:?}");
    }

    #[test]
    fn scratch_file_is_removed_on_every_path() {
        let dir = tempfile::tempdir().unwrap();
        let bytes = encode(DynamicImage::new_rgba8(2, 2), ImageFormat::Png);

        decode_in(&bytes, dir.path()).unwrap();
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);

        decode_in(b"junk", dir.path()).unwrap_err();
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn resize_distorts_to_square() {
        let src = RgbaImage::new(40, 10);
        let out = resize_square(&src, 16);
        assert_eq!(out.dimensions(), (16, 16));
    }
}
