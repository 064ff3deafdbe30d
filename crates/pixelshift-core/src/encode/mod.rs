//! Image encoding for Pixelshift.
//!
//! This module provides functionality for:
//! - Encoding RGBA grids to lossless PNG
//! - Encoding RGBA grids to JPEG at a fixed quality of 95
//!
//! # Examples
//!
//! ```ignore
//! use pixelshift_core::decode::ImageFormat;
//! use pixelshift_core::encode::encode_image;
//!
//! let bytes = encode_image(&image, ImageFormat::Png)?;
//! println!("Encoded {} bytes", bytes.len());
//! ```

mod jpeg;
mod png;
mod types;

pub use jpeg::{encode_jpeg, JPEG_QUALITY};
pub use png::encode_png;
pub use types::EncodeError;

use crate::decode::{ImageFormat, RgbaImage};

/// Encode an RGBA image with the encoder selected by `format`.
pub fn encode_image(image: &RgbaImage, format: ImageFormat) -> Result<Vec<u8>, EncodeError> {
    match format {
        ImageFormat::Png => encode_png(image),
        ImageFormat::Jpeg => encode_jpeg(image),
    }
}
