//! PNG/JPEG decoding with RGBA normalization.

use super::{DecodeError, ImageFormat, RgbaImage};

/// Decode image bytes using the codec selected by a data URL header.
///
/// # Arguments
///
/// * `header` - The data URL header, e.g. `data:image/png;base64`
/// * `bytes` - Raw encoded image bytes
///
/// # Returns
///
/// The decoded RGBA image and the format tag to re-encode with.
///
/// # Errors
///
/// Returns `DecodeError::UnsupportedFormat` if the header names neither PNG nor JPEG.
/// Returns `DecodeError::CorruptedFile` if the codec rejects the bytes.
pub fn decode_image(header: &str, bytes: &[u8]) -> Result<(RgbaImage, ImageFormat), DecodeError> {
    let format = ImageFormat::from_header(header)?;
    let image = decode_bytes(bytes, format)?;
    Ok((image, format))
}

/// Decode image bytes with an explicit codec.
///
/// The declared format is trusted: PNG bytes handed to the JPEG decoder fail
/// rather than being sniffed. Any source color model (gray, palette, 16-bit,
/// with or without alpha) is converted to 8-bit RGBA.
pub fn decode_bytes(bytes: &[u8], format: ImageFormat) -> Result<RgbaImage, DecodeError> {
    let img = image::load_from_memory_with_format(bytes, format.to_image_format())
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    Ok(RgbaImage::from_image(img.into_rgba8()))
}
