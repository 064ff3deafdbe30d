//! Shared test utilities for the pixelshift-core test suite.
//!
//! Builds small PNG/JPEG fixtures in memory and wraps them in data URLs, so
//! tests never depend on files on disk.

use std::io::Cursor;

use base64::{engine::general_purpose, Engine as _};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageEncoder};

// =========================================================================
// Fixture images
// =========================================================================

/// Encode any dynamic image as PNG bytes.
pub fn encode_png(img: &DynamicImage) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, image::ImageFormat::Png).unwrap();
    buffer.into_inner()
}

/// PNG bytes for an RGBA image (4 bytes per pixel, row-major).
pub fn rgba_png(width: u32, height: u32, pixels: Vec<u8>) -> Vec<u8> {
    let img = image::RgbaImage::from_raw(width, height, pixels).unwrap();
    encode_png(&DynamicImage::ImageRgba8(img))
}

/// PNG bytes for a flat grayscale image.
pub fn gray_png(width: u32, height: u32, value: u8) -> Vec<u8> {
    let img = image::GrayImage::from_pixel(width, height, image::Luma([value]));
    encode_png(&DynamicImage::ImageLuma8(img))
}

/// PNG bytes for a gray+alpha image (2 bytes per pixel, row-major).
pub fn gray_alpha_png(width: u32, height: u32, pixels: Vec<u8>) -> Vec<u8> {
    let img = image::GrayAlphaImage::from_raw(width, height, pixels).unwrap();
    encode_png(&DynamicImage::ImageLumaA8(img))
}

/// PNG bytes for a 16-bit RGBA image (4 samples per pixel, row-major).
pub fn rgba16_png(width: u32, height: u32, samples: Vec<u16>) -> Vec<u8> {
    let img = image::ImageBuffer::<image::Rgba<u16>, Vec<u16>>::from_raw(width, height, samples)
        .unwrap();
    encode_png(&DynamicImage::ImageRgba16(img))
}

/// 2x1 indexed PNG: palette [red, blue], tRNS [255, 128], pixels [0, 1].
///
/// Decodes to `[255, 0, 0, 255, 0, 0, 255, 128]`.
pub const PALETTE_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x01, 0x08, 0x03, 0x00, 0x00, 0x00, 0xC3,
    0xFC, 0x8F, 0xB8, 0x00, 0x00, 0x00, 0x06, 0x50, 0x4C, 0x54, 0x45, 0xFF, 0x00, 0x00, 0x00,
    0x00, 0xFF, 0x6C, 0xA1, 0xFD, 0x8E, 0x00, 0x00, 0x00, 0x02, 0x74, 0x52, 0x4E, 0x53, 0xFF,
    0x80, 0x08, 0x0F, 0xB3, 0x6A, 0x00, 0x00, 0x00, 0x0B, 0x49, 0x44, 0x41, 0x54, 0x78, 0xDA,
    0x63, 0x60, 0x60, 0x04, 0x00, 0x00, 0x04, 0x00, 0x02, 0x2C, 0xDE, 0x48, 0xAD, 0x00, 0x00,
    0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

/// JPEG bytes for an RGB image (3 bytes per pixel, row-major).
pub fn rgb_jpeg(width: u32, height: u32, pixels: &[u8]) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, 95)
        .write_image(pixels, width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
    buffer.into_inner()
}

/// A small RGBA gradient with varying alpha.
pub fn gradient_pixels(width: u32, height: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.push((x * 255 / width.max(1)) as u8);
            pixels.push((y * 255 / height.max(1)) as u8);
            pixels.push(((x + y) * 7 % 256) as u8);
            pixels.push((64 + (x * 3) % 192) as u8);
        }
    }
    pixels
}

// =========================================================================
// Data URLs
// =========================================================================

/// Wrap bytes in a `data:image/<subtype>;base64,` URL.
pub fn data_url(subtype: &str, bytes: &[u8]) -> String {
    format!(
        "data:image/{};base64,{}",
        subtype,
        general_purpose::STANDARD.encode(bytes)
    )
}

/// Decode a data URL produced by the pipeline back to an RGBA image.
pub fn decode_data_url(url: &str) -> image::RgbaImage {
    let (_, payload) = url.split_once(',').unwrap();
    let bytes = general_purpose::STANDARD.decode(payload).unwrap();
    image::load_from_memory(&bytes).unwrap().into_rgba8()
}
