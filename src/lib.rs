//! Procedural tree glyphs and reference tracing for application icons.
//!
//! Two pipelines share a supersample-then-downsample stage:
//! - [`glyph`] designs built on the recursive [`branch`] emitter are drawn at
//!   a multiple of the requested size and resampled by [`render`].
//! - [`trace`] thresholds existing artwork into a mask and re-centres it on
//!   a padded square.

pub mod batch;
pub mod branch;
pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod glyph;
pub mod render;
pub mod trace;

pub use color::Color;
pub use error::{GlyphError, Result};
