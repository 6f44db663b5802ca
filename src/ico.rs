use std::io::Write;

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::{ExtendedColorType, ImageResult, RgbaImage};

/// Packs square RGBA images into a single ICO container, one PNG-compressed
/// entry per image, in the order given.
pub fn encode_ico<W: Write>(images: &[RgbaImage], writer: W) -> ImageResult<()> {
    let frames = images
        .iter()
        .map(|img| {
            IcoFrame::as_png(
                img.as_raw(),
                img.width(),
                img.height(),
                ExtendedColorType::Rgba8,
            )
        })
        .collect::<ImageResult<Vec<_>>>()?;

    IcoEncoder::new(writer).encode_images(&frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lists_every_entry() {
        let images = [RgbaImage::new(16, 16), RgbaImage::new(32, 32)];
        let mut buf = Vec::new();

        encode_ico(&images, &mut buf).unwrap();

        // ICONDIR: reserved, type 1, count
        assert_eq!(&buf[..6], &[0, 0, 1, 0, 2, 0]);
        // First ICONDIRENTRY width/height bytes
        assert_eq!(buf[6], 16);
        assert_eq!(buf[7], 16);
        assert_eq!(buf[6 + 16], 32);
    }
}
