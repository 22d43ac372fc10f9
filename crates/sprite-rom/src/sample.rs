//! Grid sampling: frame traversal in ROM address order.
//!
//! The ROM is addressed row-major within a sprite (y outer, x inner). For a
//! quadrant-tiled sheet, four sprite windows are read out of one double-size
//! frame, each window row-major within itself.

use crate::frame::{Frame, Rgb};

/// Read the whole frame in row-major order (y outer, x inner).
///
/// This is the single-sprite address order: pixel `(x, y)` lands at ROM
/// address `y * width + x`.
pub fn row_major(frame: &Frame) -> Vec<Rgb> {
    frame.pixels().to_vec()
}

/// Read one `width` x `height` window at `(origin_x, origin_y)` in
/// row-major order.
///
/// # Panics
///
/// Panics if the window extends past the frame edge (the encoder checks
/// frame dimensions before sampling).
pub fn window(frame: &Frame, origin_x: u32, origin_y: u32, width: u32, height: u32) -> Vec<Rgb> {
    let mut out = Vec::with_capacity((width as usize) * (height as usize));
    for y in origin_y..origin_y + height {
        for x in origin_x..origin_x + width {
            out.push(frame.pixel(x, y));
        }
    }
    out
}

/// Split a `(2 * width)` x `(2 * height)` frame into its four quadrant
/// sprites, returned in serialization order S1, S2, S3, S4:
///
/// ```text
/// S1 S2
/// S3 S4
/// ```
///
/// # Panics
///
/// Debug-asserts that the frame is exactly twice the sprite grid per axis.
pub fn quadrants(frame: &Frame, width: u32, height: u32) -> [Vec<Rgb>; 4] {
    debug_assert_eq!(
        frame.dimensions(),
        (width * 2, height * 2),
        "quadrant sampling needs a {}x{} frame",
        width * 2,
        height * 2,
    );
    [
        window(frame, 0, 0, width, height),
        window(frame, width, 0, width, height),
        window(frame, 0, height, width, height),
        window(frame, width, height, width, height),
    ]
}
