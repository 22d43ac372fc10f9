//! Sprite encoder -- the primary entry point for the crate.
//!
//! [`SpriteEncoder`] wires the sampling, quantization, and packing stages
//! behind a validated [`SpriteConfig`]. It is reusable: `encode()` takes
//! `&self`, so one encoder can process any number of frames with the same
//! configuration.

use thiserror::Error;

use crate::config::{Layout, SpriteConfig};
use crate::frame::{Frame, Rgb};
use crate::pack::{pack, unpack};
use crate::quantize::{expand, quantize};
use crate::sample::{quadrants, row_major};

/// Error type for encoding and reconstruction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Frame dimensions do not match the configured grid.
    #[error("frame is {actual_width}x{actual_height}, expected {expected_width}x{expected_height} for this configuration")]
    FrameDimensions {
        /// Width the configuration requires
        expected_width: u32,
        /// Height the configuration requires
        expected_height: u32,
        /// Width of the frame actually supplied
        actual_width: u32,
        /// Height of the frame actually supplied
        actual_height: u32,
    },

    /// Code count does not match the configured sprite sheet.
    #[error("got {actual} codes, expected {expected} for this configuration")]
    CodeCount {
        /// Code count the configuration requires
        expected: usize,
        /// Code count actually supplied
        actual: usize,
    },
}

/// Encodes pixel frames into packed sprite ROM codes.
///
/// The encoder owns a validated [`SpriteConfig`] (invalid widths or a
/// zero-sized grid cannot reach this type) and performs the pure part of
/// the conversion: address ordering, channel quantization, and bit
/// packing. Decoding and resampling the source image to
/// [`SpriteConfig::frame_dimensions`] is the caller's job.
///
/// # Example
///
/// ```
/// use sprite_rom::{ChannelWidths, Frame, Layout, Rgb, SpriteConfig, SpriteEncoder};
///
/// let config = SpriteConfig::new(2, 2, ChannelWidths::new(4, 4, 4), Layout::Single).unwrap();
/// let encoder = SpriteEncoder::new(config);
///
/// let frame = Frame::solid(Rgb::new(255, 0, 0), 2, 2);
/// let codes = encoder.encode(&frame).unwrap();
///
/// assert_eq!(codes, vec![0xf00; 4]);
/// ```
#[derive(Debug, Clone)]
pub struct SpriteEncoder {
    config: SpriteConfig,
}

impl SpriteEncoder {
    /// Create an encoder from a validated configuration.
    pub fn new(config: SpriteConfig) -> Self {
        Self { config }
    }

    /// Returns the encoder's configuration.
    #[inline]
    pub fn config(&self) -> &SpriteConfig {
        &self.config
    }

    /// Encode a frame into packed codes in ROM address order.
    ///
    /// Single layout: the frame is read row-major. Quad layout: the frame
    /// is split into quadrants S1..S4 and their blocks are concatenated in
    /// that order, so address `i` within block `k` maps to sprite `k+1`'s
    /// pixel `i`.
    ///
    /// # Errors
    ///
    /// [`EncodeError::FrameDimensions`] if the frame is not exactly
    /// [`SpriteConfig::frame_dimensions`].
    pub fn encode(&self, frame: &Frame) -> Result<Vec<u32>, EncodeError> {
        self.check_frame(frame)?;

        let mut codes = Vec::with_capacity(self.config.total_pixels());
        match self.config.layout {
            Layout::Single => {
                self.pack_sequence(&row_major(frame), &mut codes);
            }
            Layout::Quad => {
                for sprite in quadrants(frame, self.config.width, self.config.height) {
                    self.pack_sequence(&sprite, &mut codes);
                }
            }
        }
        Ok(codes)
    }

    /// Reconstruct the quantized frame a ROM image will display.
    ///
    /// Inverse of [`encode`](Self::encode): unpacks each code and expands
    /// the channels back to 8 bits (low bits zero, exactly what the
    /// hardware DAC outputs). Quad layout re-tiles the four blocks into
    /// the 2W x 2H sheet. Used for preview rendering.
    ///
    /// # Errors
    ///
    /// [`EncodeError::CodeCount`] if `codes` does not hold exactly one
    /// code per configured pixel.
    pub fn reconstruct(&self, codes: &[u32]) -> Result<Frame, EncodeError> {
        if codes.len() != self.config.total_pixels() {
            return Err(EncodeError::CodeCount {
                expected: self.config.total_pixels(),
                actual: codes.len(),
            });
        }

        let (frame_w, frame_h) = self.config.frame_dimensions();
        let mut pixels =
            vec![Rgb::new(0, 0, 0); (frame_w as usize) * (frame_h as usize)];

        let w = self.config.width;
        let h = self.config.height;
        let per_sprite = self.config.pixels_per_sprite();
        // Window origins in block order S1..S4 (single layout uses only S1).
        let origins = [(0, 0), (w, 0), (0, h), (w, h)];

        for (block, chunk) in codes.chunks(per_sprite).enumerate() {
            let (ox, oy) = origins[block];
            for (i, &code) in chunk.iter().enumerate() {
                let x = ox + (i as u32) % w;
                let y = oy + (i as u32) / w;
                pixels[(y as usize) * (frame_w as usize) + (x as usize)] =
                    self.unpack_pixel(code);
            }
        }
        Ok(Frame::new(pixels, frame_w, frame_h))
    }

    /// Quantize and pack one sequence of pixels, appending to `codes`.
    fn pack_sequence(&self, pixels: &[Rgb], codes: &mut Vec<u32>) {
        let widths = self.config.channels;
        for p in pixels {
            let r = quantize(p.r, widths.r);
            let g = quantize(p.g, widths.g);
            let b = quantize(p.b, widths.b);
            codes.push(pack(r, g, b, widths));
        }
    }

    /// Unpack one code into an 8-bit-expanded pixel.
    fn unpack_pixel(&self, code: u32) -> Rgb {
        let widths = self.config.channels;
        let (r, g, b) = unpack(code, widths);
        Rgb::new(
            expand(r, widths.r),
            expand(g, widths.g),
            expand(b, widths.b),
        )
    }

    fn check_frame(&self, frame: &Frame) -> Result<(), EncodeError> {
        let (expected_width, expected_height) = self.config.frame_dimensions();
        if frame.dimensions() != (expected_width, expected_height) {
            return Err(EncodeError::FrameDimensions {
                expected_width,
                expected_height,
                actual_width: frame.width(),
                actual_height: frame.height(),
            });
        }
        Ok(())
    }
}
