//! One-shot conversion orchestrator.
//!
//! Wires the fixed stage sequence: decode and resample the source image,
//! encode it into packed codes, write the mem file, and optionally render
//! a preview PNG of the quantized result. Fully sequential, no state kept
//! between runs; the same input and options always reproduce the same
//! output bytes.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use sprite_rom::{mem, Frame, SpriteConfig, SpriteEncoder};
use tracing::debug;

use crate::decode::decode_and_resize;
use crate::error::ConvertError;

/// Everything one conversion run needs.
pub struct ConvertOptions {
    /// Source image path.
    pub input: PathBuf,
    /// Destination mem file path (created or overwritten).
    pub output: PathBuf,
    /// Optional path for a quantized preview PNG.
    pub preview: Option<PathBuf>,
    /// Validated sprite/channel configuration.
    pub config: SpriteConfig,
}

/// What a successful run produced, for logging and tests.
#[derive(Debug)]
pub struct ConvertSummary {
    /// Native dimensions of the source image.
    pub source_width: u32,
    /// Native dimensions of the source image.
    pub source_height: u32,
    /// Mem file line count (= total ROM addresses written).
    pub lines: usize,
}

/// Run one conversion end to end.
///
/// The output file is only created after encoding succeeds, so decode and
/// configuration failures leave no partial output behind.
pub fn run(opts: &ConvertOptions) -> Result<ConvertSummary, ConvertError> {
    let (frame_w, frame_h) = opts.config.frame_dimensions();
    let decoded = decode_and_resize(&opts.input, frame_w, frame_h)?;

    let encoder = SpriteEncoder::new(opts.config);
    let codes = encoder.encode(&decoded.frame)?;
    debug!(
        codes = codes.len(),
        code_bits = opts.config.code_bits(),
        "encoded frame"
    );

    write_mem_file(&opts.output, &codes)?;

    if let Some(preview_path) = &opts.preview {
        let preview = encoder.reconstruct(&codes)?;
        write_preview(preview_path, &preview)?;
        debug!(path = %preview_path.display(), "wrote quantized preview");
    }

    Ok(ConvertSummary {
        source_width: decoded.source_width,
        source_height: decoded.source_height,
        lines: codes.len(),
    })
}

/// Create (or overwrite) the mem file and serialize all codes into it.
fn write_mem_file(path: &Path, codes: &[u32]) -> Result<(), ConvertError> {
    let io_err = |source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    mem::write_mem(&mut writer, codes).map_err(io_err)?;
    writer.flush().map_err(io_err)
}

/// Save the reconstructed quantized frame as a PNG.
fn write_preview(path: &Path, frame: &Frame) -> Result<(), ConvertError> {
    let img = image::RgbImage::from_fn(frame.width(), frame.height(), |x, y| {
        image::Rgb(frame.pixel(x, y).to_bytes())
    });
    img.save(path).map_err(|source| ConvertError::Preview {
        path: path.to_path_buf(),
        source,
    })
}
