//! Pixelshift Core - data URL brightness pipeline
//!
//! This crate provides the host-agnostic functionality behind the Pixelshift
//! WASM module: parsing image data URLs, decoding PNG/JPEG to RGBA, shifting
//! brightness, re-encoding, and the host-callable entry points built on top.
//!
//! # Pipeline
//!
//! ```text
//! data URL -> bytes -> RGBA grid -> RGBA grid -> bytes -> data URL
//!  envelope   decode   brightness    encode    envelope
//! ```
//!
//! Every call is synchronous and stateless.

pub mod brightness;
pub mod decode;
pub mod encode;
pub mod envelope;
pub mod exports;
pub mod host;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use brightness::{apply_brightness, Brightness, BRIGHTNESS_MAX, BRIGHTNESS_MIN};
pub use decode::{DecodeError, ImageFormat, RgbaImage};
pub use encode::{EncodeError, JPEG_QUALITY};
pub use envelope::DataUrl;
pub use exports::{sum, ExportTable};
pub use host::{DiagnosticSink, HostValue};

use thiserror::Error;

/// Every failure a host call can end with.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrong number or type of arguments.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Brightness outside `[-100, 100]`.
    #[error("Brightness must be between -100 and 100, got {0}")]
    BrightnessOutOfRange(i64),

    /// The data URL does not contain exactly one comma.
    #[error("Invalid Data URL format.")]
    MalformedEnvelope,

    /// The payload is not valid base64.
    #[error("Failed to decode Base64 image data: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    /// Unsupported format or undecodable image.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The encoder failed to produce output.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Shift the brightness of an image given as a data URL.
///
/// The output uses the same format as the input; `jpg` input is written back
/// as `jpeg`. JPEG output is encoded at [`JPEG_QUALITY`].
///
/// # Errors
///
/// Fails if the data URL is malformed, its payload is not base64, the format
/// is not PNG/JPEG, the image cannot be decoded, or encoding fails.
pub fn change_brightness(data_url: &str, brightness: Brightness) -> Result<String, Error> {
    let url = DataUrl::parse(data_url)?;
    let (mut image, format) = decode::decode_image(url.header, &url.bytes)?;

    apply_brightness(&mut image, brightness);

    let bytes = encode::encode_image(&image, format)?;
    Ok(DataUrl::encode(format, &bytes))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
