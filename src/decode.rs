//! Image decode and resample -- the external boundary of the pipeline.
//!
//! Everything format-related is delegated to the `image` crate; the rest of
//! the tool only ever sees a [`Frame`] already at the grid size the encoder
//! expects. Resampling uses Lanczos3, chosen for deterministic, repeatable
//! output across runs.

use std::path::Path;

use image::imageops::FilterType;
use sprite_rom::{Frame, Rgb};
use tracing::debug;

use crate::error::ConvertError;

/// A decoded image resampled to the target grid, with the source
/// dimensions kept for logging.
#[derive(Debug)]
pub struct DecodedImage {
    /// Pixels at exactly the requested target dimensions.
    pub frame: Frame,
    /// Native width of the source image.
    pub source_width: u32,
    /// Native height of the source image.
    pub source_height: u32,
}

/// Decode `path` and resample it to exactly `target_w` x `target_h`.
///
/// Sources smaller than the target are upsampled; that is accepted
/// behavior with no quality guarantee. A source already at the target size
/// is passed through untouched, so feeding pre-sized images is lossless.
///
/// # Errors
///
/// [`ConvertError::Decode`] if the file is missing, unreadable, or not a
/// recognized image format.
pub fn decode_and_resize(
    path: &Path,
    target_w: u32,
    target_h: u32,
) -> Result<DecodedImage, ConvertError> {
    let img = image::open(path).map_err(|source| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let (source_width, source_height) = (img.width(), img.height());
    debug!(source_width, source_height, target_w, target_h, "decoded source image");

    let resized = if (source_width, source_height) == (target_w, target_h) {
        img
    } else {
        img.resize_exact(target_w, target_h, FilterType::Lanczos3)
    };
    let rgb = resized.to_rgb8();

    let pixels: Vec<Rgb> = rgb.pixels().map(|p| Rgb::from_bytes(p.0)).collect();
    Ok(DecodedImage {
        frame: Frame::new(pixels, target_w, target_h),
        source_width,
        source_height,
    })
}
