//! Core types for image decoding.

use std::fmt;
use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The declared MIME type is not one of the supported formats.
    #[error("Unsupported image format. Only JPEG and PNG are supported.")]
    UnsupportedFormat,

    /// The codec rejected the byte stream (corrupt, truncated or wrong codec).
    #[error("Failed to decode image: {0}")]
    CorruptedFile(String),
}

/// Output format tag, derived from the declared MIME subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Lossless PNG.
    Png,
    /// Baseline JPEG. Both `jpeg` and `jpg` subtypes map here.
    Jpeg,
}

impl ImageFormat {
    /// Determine the format from a data URL header such as `data:image/png;base64`.
    ///
    /// Matching is a case-sensitive prefix match on the header as received.
    pub fn from_header(header: &str) -> Result<Self, DecodeError> {
        if header.starts_with("data:image/png") {
            Ok(ImageFormat::Png)
        } else if header.starts_with("data:image/jpeg") || header.starts_with("data:image/jpg") {
            Ok(ImageFormat::Jpeg)
        } else {
            Err(DecodeError::UnsupportedFormat)
        }
    }

    /// The MIME subtype written on output.
    pub fn subtype(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
        }
    }

    /// Convert to the image crate's format selector.
    pub fn to_image_format(self) -> image::ImageFormat {
        match self {
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.subtype())
    }
}

/// A decoded image with non-premultiplied RGBA pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    /// Length should be width * height * 4.
    pub pixels: Vec<u8>,
}

impl RgbaImage {
    /// Create a new RgbaImage with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 4,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create an RgbaImage from an image::RgbaImage.
    pub fn from_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Pixel data with the alpha channel dropped (3 bytes per pixel).
    pub fn to_rgb_pixels(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.pixel_count() * 3);
        for chunk in self.pixels.chunks_exact(4) {
            rgb.extend_from_slice(&chunk[..3]);
        }
        rgb
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}
