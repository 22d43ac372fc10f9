//! Truncating channel quantizer.
//!
//! Reduces an 8-bit channel value to `width` bits by keeping the most
//! significant bits and discarding the rest. Truncation (rather than
//! rounding) biases each output level downward within its input range;
//! downstream ROM images were generated this way, so the behavior must be
//! preserved bit-for-bit.

/// Quantize an 8-bit channel value down to `width` bits.
///
/// Keeps the `width` most significant bits: `value >> (8 - width)`.
/// A width of 8 (or more) is the identity; widths above 8 are not
/// meaningful and the caller is expected to constrain them via
/// [`SpriteConfig`](crate::config::SpriteConfig).
///
/// The result is always in `0..=(1 << width) - 1` and is monotonically
/// non-decreasing in `value` for a fixed width.
///
/// # Example
///
/// ```
/// use sprite_rom::quantize::quantize;
///
/// assert_eq!(quantize(255, 4), 0xf);
/// assert_eq!(quantize(0x37, 4), 0x3);
/// assert_eq!(quantize(200, 8), 200);
/// ```
#[inline]
pub fn quantize(value: u8, width: u8) -> u8 {
    if width >= 8 {
        value
    } else {
        value >> (8 - width)
    }
}

/// Expand a quantized `width`-bit channel value back to 8 bits.
///
/// Inverse of [`quantize`] up to the discarded low bits: the value is
/// shifted back into the high bits and the low bits are left at zero,
/// which is exactly what the hardware color DAC sees. Used to reconstruct
/// preview images from packed ROM codes.
///
/// # Example
///
/// ```
/// use sprite_rom::quantize::{expand, quantize};
///
/// assert_eq!(expand(0xf, 4), 0xf0);
/// assert_eq!(expand(quantize(200, 8), 8), 200);
/// ```
#[inline]
pub fn expand(value: u8, width: u8) -> u8 {
    if width >= 8 {
        value
    } else {
        value << (8 - width)
    }
}
