//! File-level integration tests: synthesize source images on disk, run the
//! full conversion, and inspect the produced mem files.

use std::fs;
use std::path::{Path, PathBuf};

use sprite_rom::{ChannelWidths, Layout, SpriteConfig};
use spritemem::convert::{self, ConvertOptions};
use spritemem::error::ConvertError;
use tempfile::TempDir;

/// Helper: write a solid-color PNG of the given size.
fn write_solid_png(dir: &Path, name: &str, color: [u8; 3], width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    let img = image::RgbImage::from_pixel(width, height, image::Rgb(color));
    img.save(&path).expect("failed to write test PNG");
    path
}

/// Helper: 2x2-tiled PNG with one color per quadrant.
fn write_quadrant_png(dir: &Path, name: &str, colors: [[u8; 3]; 4], size: u32) -> PathBuf {
    let path = dir.join(name);
    let half = size / 2;
    let img = image::RgbImage::from_fn(size, size, |x, y| {
        let quad = (y / half) * 2 + (x / half);
        image::Rgb(colors[quad as usize])
    });
    img.save(&path).expect("failed to write test PNG");
    path
}

fn config(width: u32, height: u32, layout: Layout) -> SpriteConfig {
    SpriteConfig::new(width, height, ChannelWidths::new(4, 4, 4), layout).unwrap()
}

#[test]
fn test_solid_red_single_sprite() {
    let dir = TempDir::new().unwrap();
    let input = write_solid_png(dir.path(), "red.png", [255, 0, 0], 32, 32);
    let output = dir.path().join("red.mem");

    let summary = convert::run(&ConvertOptions {
        input,
        output: output.clone(),
        preview: None,
        config: config(32, 32, Layout::Single),
    })
    .unwrap();

    assert_eq!(summary.lines, 1024);
    assert_eq!((summary.source_width, summary.source_height), (32, 32));

    let mem = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = mem.lines().collect();
    assert_eq!(lines.len(), 1024);
    assert!(lines.iter().all(|&l| l == "f00"), "every address must hold f00");
}

#[test]
fn test_solid_red_quad_sheet() {
    let dir = TempDir::new().unwrap();
    // 64x64 source feeds a 2x2 sheet of 32x32 sprites with no resize.
    let input = write_solid_png(dir.path(), "red.png", [255, 0, 0], 64, 64);
    let output = dir.path().join("red4.mem");

    let summary = convert::run(&ConvertOptions {
        input,
        output: output.clone(),
        preview: None,
        config: config(32, 32, Layout::Quad),
    })
    .unwrap();
    assert_eq!(summary.lines, 4096);

    let mem = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = mem.lines().collect();
    assert_eq!(lines.len(), 4096);
    for (i, block) in lines.chunks(1024).enumerate() {
        assert!(
            block.iter().all(|&l| l == "f00"),
            "quadrant block {} must match the single-sprite output",
            i
        );
    }
}

#[test]
fn test_quadrant_blocks_follow_s1_to_s4_order() {
    let dir = TempDir::new().unwrap();
    let input = write_quadrant_png(
        dir.path(),
        "quads.png",
        [[255, 0, 0], [0, 255, 0], [0, 0, 255], [255, 255, 255]],
        64,
    );
    let output = dir.path().join("quads.mem");

    convert::run(&ConvertOptions {
        input,
        output: output.clone(),
        preview: None,
        config: config(32, 32, Layout::Quad),
    })
    .unwrap();

    let mem = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = mem.lines().collect();
    let expected = ["f00", "0f0", "00f", "fff"];
    for (i, block) in lines.chunks(1024).enumerate() {
        assert!(
            block.iter().all(|&l| l == expected[i]),
            "block {} must come from sprite S{} ({})",
            i,
            i + 1,
            expected[i]
        );
    }
}

#[test]
fn test_resampled_source_produces_full_rom() {
    let dir = TempDir::new().unwrap();
    // Source needs an actual resample (48x20 -> 16x16).
    let input = write_solid_png(dir.path(), "odd.png", [10, 200, 90], 48, 20);
    let output = dir.path().join("odd.mem");

    let summary = convert::run(&ConvertOptions {
        input,
        output: output.clone(),
        preview: None,
        config: config(16, 16, Layout::Single),
    })
    .unwrap();

    assert_eq!((summary.source_width, summary.source_height), (48, 20));
    let mem = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = mem.lines().collect();
    assert_eq!(lines.len(), 256);
    for line in lines {
        assert!(
            u32::from_str_radix(line, 16).is_ok(),
            "line {:?} must be valid hex",
            line
        );
        assert_eq!(line, line.to_lowercase(), "hex must be lowercase");
    }
}

#[test]
fn test_conversion_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let input = write_quadrant_png(
        dir.path(),
        "quads.png",
        [[13, 37, 240], [250, 128, 7], [99, 0, 180], [0, 0, 0]],
        64,
    );

    let out_a = dir.path().join("a.mem");
    let out_b = dir.path().join("b.mem");
    for output in [&out_a, &out_b] {
        convert::run(&ConvertOptions {
            input: input.clone(),
            output: output.clone(),
            preview: None,
            config: config(32, 32, Layout::Quad),
        })
        .unwrap();
    }

    assert_eq!(
        fs::read(&out_a).unwrap(),
        fs::read(&out_b).unwrap(),
        "repeated runs must be byte-identical"
    );
}

#[test]
fn test_preview_is_the_quantized_image() {
    let dir = TempDir::new().unwrap();
    // 0x37 truncates to nibble 3, which expands to 0x30.
    let input = write_solid_png(dir.path(), "grey.png", [0x37, 0x37, 0x37], 32, 32);
    let output = dir.path().join("grey.mem");
    let preview = dir.path().join("grey_preview.png");

    convert::run(&ConvertOptions {
        input,
        output,
        preview: Some(preview.clone()),
        config: config(32, 32, Layout::Single),
    })
    .unwrap();

    let img = image::open(&preview).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (32, 32));
    for pixel in img.pixels() {
        assert_eq!(pixel.0, [0x30, 0x30, 0x30]);
    }
}

#[test]
fn test_one_pixel_grid() {
    let dir = TempDir::new().unwrap();
    let input = write_solid_png(dir.path(), "dot.png", [255, 255, 255], 8, 8);
    let output = dir.path().join("dot.mem");

    convert::run(&ConvertOptions {
        input,
        output: output.clone(),
        preview: None,
        config: config(1, 1, Layout::Single),
    })
    .unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "fff\n");
}

#[test]
fn test_missing_input_leaves_no_output() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("never.mem");

    let err = convert::run(&ConvertOptions {
        input: dir.path().join("missing.png"),
        output: output.clone(),
        preview: None,
        config: config(32, 32, Layout::Single),
    })
    .unwrap_err();

    match err {
        ConvertError::Decode { .. } => {}
        other => panic!("expected Decode error, got {:?}", other),
    }
    assert!(!output.exists(), "failed decode must not create an output file");
}

#[test]
fn test_unwritable_output_is_io_error() {
    let dir = TempDir::new().unwrap();
    let input = write_solid_png(dir.path(), "red.png", [255, 0, 0], 32, 32);
    // Parent directory does not exist.
    let output = dir.path().join("no_such_dir").join("out.mem");

    let err = convert::run(&ConvertOptions {
        input,
        output,
        preview: None,
        config: config(32, 32, Layout::Single),
    })
    .unwrap_err();

    match err {
        ConvertError::Io { .. } => {}
        other => panic!("expected Io error, got {:?}", other),
    }
}
