use std::path::PathBuf;
use thiserror::Error;

/// Error taxonomy for one conversion run.
///
/// Every variant is fatal: the tool is a one-shot batch conversion with no
/// retry or partial-failure semantics. Decode and configuration errors are
/// raised before the output file is created, so a failed run leaves no
/// partial mem file behind.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("cannot decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] sprite_rom::ConfigError),

    #[error("encoding failed: {0}")]
    Encode(#[from] sprite_rom::EncodeError),

    #[error("cannot write mem file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write preview image {}: {source}", path.display())]
    Preview {
        path: PathBuf,
        source: image::ImageError,
    },
}
