//! Lossless PNG encoding of RGBA grids.

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;

use super::types::check_buffer;
use super::EncodeError;
use crate::decode::RgbaImage;

/// Encode an RGBA image to PNG bytes.
///
/// The output is always 8-bit RGBA, regardless of the color model the source
/// was decoded from.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, EncodeError> {
    check_buffer(&image.pixels, image.width, image.height, 4)?;

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(
            &image.pixels,
            image.width,
            image.height,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}
