//! Brightness adjustment.
//!
//! Brightness is a uniform additive shift of the R, G and B channels in the
//! 0-255 range: `out = clamp(in + brightness / 100 * 255, 0, 255)`, truncated
//! to `u8`. Alpha is never touched. At +100 every color channel saturates to
//! 255 and at -100 every color channel saturates to 0.

use crate::decode::RgbaImage;
use crate::Error;

/// Lowest accepted brightness.
pub const BRIGHTNESS_MIN: i64 = -100;
/// Highest accepted brightness.
pub const BRIGHTNESS_MAX: i64 = 100;

/// A brightness value validated to lie in `[-100, 100]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Brightness(i8);

impl Brightness {
    /// Validate a raw brightness value.
    ///
    /// Out-of-range values are rejected, never clamped.
    pub fn new(value: i64) -> Result<Self, Error> {
        if !(BRIGHTNESS_MIN..=BRIGHTNESS_MAX).contains(&value) {
            return Err(Error::BrightnessOutOfRange(value));
        }
        Ok(Self(value as i8))
    }

    /// The validated value.
    pub fn get(self) -> i64 {
        self.0 as i64
    }

    /// Channel shift in the 0-255 range (±255 at ±100).
    pub fn shift(self) -> f64 {
        (self.0 as f64 / 100.0) * 255.0
    }

    /// Check if this brightness leaves pixels unchanged.
    pub fn is_identity(self) -> bool {
        self.0 == 0
    }
}

/// Per-channel lookup table for a brightness shift.
#[derive(Debug, Clone)]
pub struct BrightnessLut {
    /// LUT values: lut[input] = output
    pub lut: [u8; 256],
}

impl BrightnessLut {
    /// Build the table for a validated brightness.
    pub fn new(brightness: Brightness) -> Self {
        let mut lut = [0u8; 256];
        for (i, lut_value) in lut.iter_mut().enumerate() {
            *lut_value = adjust_channel(i as u8, brightness);
        }
        Self { lut }
    }
}

/// Shift a single channel value, clamping to 0-255 and truncating.
#[inline]
pub fn adjust_channel(value: u8, brightness: Brightness) -> u8 {
    (value as f64 + brightness.shift()).clamp(0.0, 255.0) as u8
}

/// Apply a brightness shift to RGBA pixels in place.
///
/// # Arguments
/// * `pixels` - RGBA pixel data (4 bytes per pixel)
/// * `brightness` - Validated brightness in `[-100, 100]`
pub fn apply_brightness_to_pixels(pixels: &mut [u8], brightness: Brightness) {
    if brightness.is_identity() {
        return;
    }

    let lut = BrightnessLut::new(brightness);
    for chunk in pixels.chunks_exact_mut(4) {
        chunk[0] = lut.lut[chunk[0] as usize];
        chunk[1] = lut.lut[chunk[1] as usize];
        chunk[2] = lut.lut[chunk[2] as usize];
    }
}

/// Apply a brightness shift to an image in place.
pub fn apply_brightness(image: &mut RgbaImage, brightness: Brightness) {
    apply_brightness_to_pixels(&mut image.pixels, brightness);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brightness(value: i64) -> Brightness {
        Brightness::new(value).unwrap()
    }

    fn pixel(r: u8, g: u8, b: u8, a: u8) -> Vec<u8> {
        vec![r, g, b, a]
    }

    // ===== Validation Tests =====

    #[test]
    fn test_brightness_range_bounds_accepted() {
        assert_eq!(brightness(-100).get(), -100);
        assert_eq!(brightness(0).get(), 0);
        assert_eq!(brightness(100).get(), 100);
    }

    #[test]
    fn test_brightness_out_of_range_rejected() {
        assert!(matches!(
            Brightness::new(101),
            Err(Error::BrightnessOutOfRange(101))
        ));
        assert!(matches!(
            Brightness::new(-101),
            Err(Error::BrightnessOutOfRange(-101))
        ));
        assert!(Brightness::new(i64::MAX).is_err());
        assert!(Brightness::new(i64::MIN).is_err());
    }

    #[test]
    fn test_shift_at_extremes() {
        assert_eq!(brightness(100).shift(), 255.0);
        assert_eq!(brightness(-100).shift(), -255.0);
        assert_eq!(brightness(0).shift(), 0.0);
    }

    // ===== Transform Tests =====

    #[test]
    fn test_channel_independence_example() {
        let mut pixels = pixel(10, 200, 0, 128);
        apply_brightness_to_pixels(&mut pixels, brightness(20));
        assert_eq!(pixels, pixel(61, 251, 51, 128));
    }

    #[test]
    fn test_identity_leaves_pixels_unchanged() {
        let original = vec![0, 64, 128, 192, 255, 100, 3, 0];
        let mut pixels = original.clone();
        apply_brightness_to_pixels(&mut pixels, brightness(0));
        assert_eq!(pixels, original);
    }

    #[test]
    fn test_full_positive_saturates_to_white() {
        let mut pixels = vec![0, 1, 128, 7, 254, 255, 30, 200];
        apply_brightness_to_pixels(&mut pixels, brightness(100));
        assert_eq!(pixels, vec![255, 255, 255, 7, 255, 255, 255, 200]);
    }

    #[test]
    fn test_full_negative_saturates_to_black() {
        let mut pixels = vec![0, 1, 128, 7, 254, 255, 30, 200];
        apply_brightness_to_pixels(&mut pixels, brightness(-100));
        assert_eq!(pixels, vec![0, 0, 0, 7, 0, 0, 0, 200]);
    }

    #[test]
    fn test_negative_shift_clamps_at_zero() {
        let mut pixels = pixel(10, 60, 255, 255);
        apply_brightness_to_pixels(&mut pixels, brightness(-20));
        // -20 => -51
        assert_eq!(pixels, pixel(0, 9, 204, 255));
    }

    #[test]
    fn test_result_is_truncated_not_rounded() {
        // +1 => +2.55
        assert_eq!(adjust_channel(0, brightness(1)), 2);
        assert_eq!(adjust_channel(100, brightness(1)), 102);
    }

    #[test]
    fn test_partial_trailing_bytes_untouched() {
        let mut pixels = vec![10, 10, 10, 10, 10, 10];
        apply_brightness_to_pixels(&mut pixels, brightness(50));
        assert_eq!(&pixels[..4], &[137, 137, 137, 10]);
        assert_eq!(&pixels[4..], &[10, 10]);
    }

    #[test]
    fn test_apply_brightness_on_image() {
        let mut img = RgbaImage::new(1, 2, vec![0, 0, 0, 255, 100, 100, 100, 0]);
        apply_brightness(&mut img, brightness(100));
        assert_eq!(img.pixels, vec![255, 255, 255, 255, 255, 255, 255, 0]);
        assert_eq!((img.width, img.height), (1, 2));
    }

    #[test]
    fn test_lut_matches_channel_function() {
        let b = brightness(-37);
        let lut = BrightnessLut::new(b);
        for v in 0..=255u8 {
            assert_eq!(lut.lut[v as usize], adjust_channel(v, b));
        }
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
