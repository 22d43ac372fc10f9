//! Sprite ROM configuration.
//!
//! [`SpriteConfig`] bundles the sprite grid size, the per-channel bit
//! widths, and the sheet layout. Construction validates everything up
//! front, so an encoder built from a config can never produce malformed
//! bit widths or a zero-sized grid. Configuration is an explicit value
//! passed into the pipeline, not ambient state; two conversions with
//! different configs can run side by side.

use thiserror::Error;

/// Error type for sprite configuration validation.
///
/// Returned by [`SpriteConfig::new`] before any I/O happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A channel bit width is outside the valid 1..=8 range.
    #[error("{channel} channel width {bits} is out of range (must be 1..=8)")]
    ChannelWidth {
        /// Which channel ("red", "green", or "blue")
        channel: &'static str,
        /// The rejected width
        bits: u8,
    },

    /// The sprite grid has a zero dimension.
    #[error("sprite grid {width}x{height} is invalid (both dimensions must be >= 1)")]
    ZeroDimension {
        /// Requested sprite width
        width: u32,
        /// Requested sprite height
        height: u32,
    },
}

/// How many most-significant bits of each 8-bit channel are retained.
///
/// The packed ROM word is `r + g + b` bits wide; whether that fits the
/// target ROM's word width is the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelWidths {
    /// Retained red bits (1..=8)
    pub r: u8,
    /// Retained green bits (1..=8)
    pub g: u8,
    /// Retained blue bits (1..=8)
    pub b: u8,
}

impl ChannelWidths {
    /// Create channel widths without validation. Validation happens in
    /// [`SpriteConfig::new`].
    #[inline]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Total packed code width in bits.
    #[inline]
    pub fn total(&self) -> u8 {
        self.r + self.g + self.b
    }
}

impl Default for ChannelWidths {
    /// 4/4/4 -- a 12-bit packed code, the ROM format the reference
    /// hardware uses.
    fn default() -> Self {
        Self { r: 4, g: 4, b: 4 }
    }
}

/// Sheet layout: one sprite, or four quadrant-tiled sprites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// The whole image becomes one W x H sprite.
    #[default]
    Single,
    /// The image is resampled to 2W x 2H and split into four W x H
    /// sprites S1..S4 (top-left, top-right, bottom-left, bottom-right),
    /// serialized in that order.
    Quad,
}

/// Validated configuration for one conversion run.
///
/// # Example
///
/// ```
/// use sprite_rom::{ChannelWidths, Layout, SpriteConfig};
///
/// let config = SpriteConfig::new(32, 32, ChannelWidths::new(4, 4, 4), Layout::Single).unwrap();
/// assert_eq!(config.code_bits(), 12);
/// assert_eq!(config.pixels_per_sprite(), 1024);
/// assert_eq!(config.frame_dimensions(), (32, 32));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteConfig {
    /// Per-sprite grid width in pixels.
    pub width: u32,
    /// Per-sprite grid height in pixels.
    pub height: u32,
    /// Retained bits per channel.
    pub channels: ChannelWidths,
    /// Single or quadrant-tiled sheet.
    pub layout: Layout,
}

impl SpriteConfig {
    /// Create a validated configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ZeroDimension`] if `width` or `height` is 0;
    /// [`ConfigError::ChannelWidth`] if any channel width is outside
    /// `1..=8`.
    pub fn new(
        width: u32,
        height: u32,
        channels: ChannelWidths,
        layout: Layout,
    ) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroDimension { width, height });
        }
        for (channel, bits) in [
            ("red", channels.r),
            ("green", channels.g),
            ("blue", channels.b),
        ] {
            if !(1..=8).contains(&bits) {
                return Err(ConfigError::ChannelWidth { channel, bits });
            }
        }
        Ok(Self {
            width,
            height,
            channels,
            layout,
        })
    }

    /// Width of one packed pixel code in bits.
    #[inline]
    pub fn code_bits(&self) -> u8 {
        self.channels.total()
    }

    /// Pixel count (= ROM address range) of one sprite.
    #[inline]
    pub fn pixels_per_sprite(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Number of sprites in the output: 1 for [`Layout::Single`], 4 for
    /// [`Layout::Quad`].
    #[inline]
    pub fn sprite_count(&self) -> usize {
        match self.layout {
            Layout::Single => 1,
            Layout::Quad => 4,
        }
    }

    /// Total pixel count across all sprites (= output line count).
    #[inline]
    pub fn total_pixels(&self) -> usize {
        self.pixels_per_sprite() * self.sprite_count()
    }

    /// Dimensions the decoded frame must have before encoding: the sprite
    /// grid itself for [`Layout::Single`], twice it per axis for
    /// [`Layout::Quad`].
    #[inline]
    pub fn frame_dimensions(&self) -> (u32, u32) {
        match self.layout {
            Layout::Single => (self.width, self.height),
            Layout::Quad => (self.width * 2, self.height * 2),
        }
    }
}
