//! Pixel frame type -- the input to the encoding pipeline.
//!
//! [`Frame`] wraps a row-major buffer of [`Rgb`] pixels with dimension
//! metadata. Frames are produced once by the caller's decoder/resampler and
//! never mutated; everything downstream reads them through accessors.

/// A single pixel as an ordered (R, G, B) triple of 8-bit channels.
///
/// This is the full-depth source representation. Channel reduction happens
/// later, in [`quantize`](crate::quantize::quantize); `Rgb` always carries
/// the original 0..=255 values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a pixel from individual channel values.
    #[inline]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a pixel from a `[R, G, B]` byte array.
    ///
    /// # Example
    /// ```
    /// use sprite_rom::Rgb;
    /// let red = Rgb::from_bytes([255, 0, 0]);
    /// assert_eq!(red.r, 255);
    /// ```
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self {
            r: bytes[0],
            g: bytes[1],
            b: bytes[2],
        }
    }

    /// Return the pixel as a `[R, G, B]` byte array.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// An immutable 2-D grid of [`Rgb`] pixels in row-major order.
///
/// `Frame` is the contract boundary with the external decoder: the caller
/// decodes and resamples an image to the grid size the encoder expects and
/// hands the result over as a `Frame`. The pixel at `(x, y)` lives at buffer
/// index `y * width + x`.
///
/// # Example
///
/// ```
/// use sprite_rom::{Frame, Rgb};
///
/// let pixels = vec![Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)];
/// let frame = Frame::new(pixels, 2, 1);
///
/// assert_eq!(frame.width(), 2);
/// assert_eq!(frame.height(), 1);
/// assert_eq!(frame.pixel(1, 0), Rgb::new(255, 255, 255));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Pixels, one per grid cell, row-major order.
    pixels: Vec<Rgb>,
    /// Frame width in pixels.
    width: u32,
    /// Frame height in pixels.
    height: u32,
}

impl Frame {
    /// Create a new `Frame` from row-major pixels.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `pixels.len() == width * height`.
    pub fn new(pixels: Vec<Rgb>, width: u32, height: u32) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize),
            "pixel count ({}) must match width * height ({}x{}={})",
            pixels.len(),
            width,
            height,
            (width as usize) * (height as usize),
        );
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Create a frame filled with a single color. Used by tests and
    /// synthetic inputs.
    pub fn solid(color: Rgb, width: u32, height: u32) -> Self {
        Self::new(
            vec![color; (width as usize) * (height as usize)],
            width,
            height,
        )
    }

    /// Returns the frame width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the frame height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)` as a pair.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the frame.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds for {}x{} frame",
            x,
            y,
            self.width,
            self.height,
        );
        self.pixels[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Returns the raw pixel buffer in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }
}
