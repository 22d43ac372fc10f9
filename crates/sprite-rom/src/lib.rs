//! sprite-rom: quantize and pack RGB pixel data into sprite ROM memory images
//!
//! This library turns a resampled pixel frame into the packed,
//! fixed-bit-width codes a hardware sprite ROM is preloaded with. It is the
//! pure core of the `spritemem` tool: no image decoding, no file handling
//! beyond writing to a caller-supplied [`std::io::Write`].
//!
//! # Quick Start
//!
//! [`SpriteEncoder`] is the primary entry point:
//!
//! ```
//! use sprite_rom::{ChannelWidths, Frame, Layout, Rgb, SpriteConfig, SpriteEncoder};
//!
//! let config = SpriteConfig::new(32, 32, ChannelWidths::new(4, 4, 4), Layout::Single).unwrap();
//! let encoder = SpriteEncoder::new(config);
//!
//! let frame = Frame::solid(Rgb::new(255, 0, 0), 32, 32);
//! let codes = encoder.encode(&frame).unwrap();
//!
//! assert_eq!(sprite_rom::mem::to_mem_string(&codes).lines().next(), Some("f00"));
//! ```
//!
//! # ROM Word Layout
//!
//! Each ROM word holds one pixel. Every channel is quantized by truncation
//! (keep the most significant bits, drop the rest -- see
//! [`quantize::quantize`]) and the three fields are packed red-high:
//!
//! ```text
//! bit: [r+g+b-1 ............. g+b] [g+b-1 ....... b] [b-1 ....... 0]
//!                 R'                      G'               B'
//! ```
//!
//! With the default 4/4/4 widths a word is 12 bits and solid red is
//! `0xf00`. Both the truncating quantization and the red-high field order
//! are contracts with the hardware color decoder: changing either would
//! make newly generated ROM images incompatible with images already in
//! use, so they are covered by regression tests and must not be "improved".
//!
//! # Address Order
//!
//! A mem file line number is a ROM address. Within one sprite, addresses
//! run row-major: address `i` is pixel `(i % width, i / width)`. The
//! quadrant-tiled layout ([`Layout::Quad`]) cuts a double-size sheet into
//! four sprites
//!
//! ```text
//! S1 S2
//! S3 S4
//! ```
//!
//! and concatenates their blocks in S1, S2, S3, S4 order, so the high
//! address bits select the sub-sprite exactly the way the hardware
//! address decoder expects.
//!
//! # Pipeline
//!
//! ```text
//! Frame  (resampled W x H, or 2W x 2H for quad -- caller's decoder)
//!   |
//!   v
//! sample     row-major traversal, quadrant windows   (sample)
//!   |
//!   v
//! quantize   8-bit channel -> n-bit, truncating      (quantize)
//!   |
//!   v
//! pack       (R', G', B') -> one code, red high      (pack)
//!   |
//!   v
//! mem        one lowercase hex line per address      (mem)
//! ```

pub mod config;
pub mod encoder;
pub mod frame;
pub mod mem;
pub mod pack;
pub mod quantize;
pub mod sample;


pub use config::{ChannelWidths, ConfigError, Layout, SpriteConfig};
pub use encoder::{EncodeError, SpriteEncoder};
pub use frame::{Frame, Rgb};
