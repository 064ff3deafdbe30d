//! Image decoding for Pixelshift.
//!
//! This module provides functionality for:
//! - Mapping a data URL header to a supported format tag
//! - Decoding PNG and JPEG bytes
//! - Normalizing every source color model to an 8-bit RGBA grid
//!
//! # Architecture
//!
//! Decoding runs inside a single synchronous host call via the WASM bindings.
//! Nothing is cached between calls.
//!
//! # Examples
//!
//! ```ignore
//! use pixelshift_core::decode::decode_image;
//!
//! let (image, format) = decode_image("data:image/png;base64", &png_bytes)?;
//! println!("Decoded {}x{} {}", image.width, image.height, format);
//! ```

mod codec;
mod types;

pub use codec::{decode_bytes, decode_image};
pub use types::{DecodeError, ImageFormat, RgbaImage};
