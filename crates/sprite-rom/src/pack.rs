//! Packed pixel codes.
//!
//! One ROM word holds all three quantized channels: red in the most
//! significant field, green in the middle, blue in the least significant.
//! The downstream hardware color decoder slices the word with exactly these
//! offsets, so the layout is load-bearing and must not change.
//!
//! ```text
//! bit: [r+g+b-1 .. g+b] [g+b-1 .. b] [b-1 .. 0]
//!            R'              G'          B'
//! ```

use crate::config::ChannelWidths;

/// Pack quantized channel values into one ROM code.
///
/// `r`, `g`, `b` must already be quantized to their declared widths
/// (see [`quantize`](crate::quantize::quantize)); values wider than their
/// field would bleed into the neighboring field.
///
/// # Example
///
/// ```
/// use sprite_rom::{pack::pack, ChannelWidths};
///
/// // Solid red at 4/4/4 packs to 0xf00.
/// assert_eq!(pack(0xf, 0x0, 0x0, ChannelWidths::new(4, 4, 4)), 0xf00);
/// ```
#[inline]
pub fn pack(r: u8, g: u8, b: u8, widths: ChannelWidths) -> u32 {
    (b as u32) | ((g as u32) << widths.b) | ((r as u32) << (widths.g + widths.b))
}

/// Recover the quantized channel values from a packed code.
///
/// Inverse of [`pack`]: slices the `(r, g, b)` fields back out with the
/// same offsets. Used by the preview reconstruction path and by tests.
#[inline]
pub fn unpack(code: u32, widths: ChannelWidths) -> (u8, u8, u8) {
    let b_mask = (1u32 << widths.b) - 1;
    let g_mask = (1u32 << widths.g) - 1;
    let r_mask = (1u32 << widths.r) - 1;

    let b = code & b_mask;
    let g = (code >> widths.b) & g_mask;
    let r = (code >> (widths.g + widths.b)) & r_mask;
    (r as u8, g as u8, b as u8)
}
