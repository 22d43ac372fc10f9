//! spritemem - image to sprite ROM mem-file converter.
//!
//! Decodes and resamples an image, then drives the sprite-rom encoder.
//! This library exposes modules for integration testing.

pub mod convert;
pub mod decode;
pub mod error;
