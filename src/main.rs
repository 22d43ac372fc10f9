use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spritemem::convert::{self, ConvertOptions};
use sprite_rom::{ChannelWidths, Layout, SpriteConfig};

#[derive(Parser)]
#[command(name = "spritemem")]
#[command(about = "Convert a raster image into a packed mem file for sprite ROM preloading")]
struct Cli {
    /// Source image (any format the image decoder supports)
    input: PathBuf,

    /// Destination mem file (one hex code per line, line = ROM address)
    output: PathBuf,

    /// Sprite grid width in pixels
    #[arg(long, default_value_t = 32)]
    width: u32,

    /// Sprite grid height in pixels
    #[arg(long, default_value_t = 32)]
    height: u32,

    /// Retained red bits (1..=8, most significant field of the ROM word)
    #[arg(long, default_value_t = 4)]
    r_bits: u8,

    /// Retained green bits (1..=8)
    #[arg(long, default_value_t = 4)]
    g_bits: u8,

    /// Retained blue bits (1..=8, least significant field of the ROM word)
    #[arg(long, default_value_t = 4)]
    b_bits: u8,

    /// Quadrant tiling: resample to a double-size sheet and emit four
    /// sprites S1..S4 (top-left, top-right, bottom-left, bottom-right)
    #[arg(long)]
    quad: bool,

    /// Also write a PNG preview of the quantized result
    #[arg(long)]
    preview: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "spritemem=debug"
    } else {
        "spritemem=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let layout = if cli.quad { Layout::Quad } else { Layout::Single };
    let config = SpriteConfig::new(
        cli.width,
        cli.height,
        ChannelWidths::new(cli.r_bits, cli.g_bits, cli.b_bits),
        layout,
    )?;

    let opts = ConvertOptions {
        input: cli.input,
        output: cli.output,
        preview: cli.preview,
        config,
    };
    let summary = convert::run(&opts)?;

    tracing::info!(
        source = %format!("{}x{}", summary.source_width, summary.source_height),
        grid = %format!("{}x{}", config.width, config.height),
        sprites = config.sprite_count(),
        code_bits = config.code_bits(),
        lines = summary.lines,
        output = %opts.output.display(),
        "conversion complete"
    );
    Ok(())
}
