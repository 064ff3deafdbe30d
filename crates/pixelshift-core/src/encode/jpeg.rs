//! JPEG encoding.
//!
//! Brightness output is always written at [`JPEG_QUALITY`]; callers have no
//! control over it. JPEG carries no alpha, so RGBA grids are flattened to RGB
//! by dropping the alpha byte.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;

use super::types::check_buffer;
use super::EncodeError;
use crate::decode::RgbaImage;

/// Fixed JPEG quality used for re-encoding.
pub const JPEG_QUALITY: u8 = 95;

/// Encode an RGBA image to JPEG bytes at [`JPEG_QUALITY`].
pub fn encode_jpeg(image: &RgbaImage) -> Result<Vec<u8>, EncodeError> {
    check_buffer(&image.pixels, image.width, image.height, 4)?;
    encode_jpeg_rgb(&image.to_rgb_pixels(), image.width, image.height)
}

/// Encode RGB pixel data (3 bytes per pixel, row-major) to JPEG bytes.
fn encode_jpeg_rgb(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    check_buffer(pixels, width, height, 3)?;

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY);

    encoder
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
