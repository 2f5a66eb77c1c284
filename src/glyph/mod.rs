// Glyph trait and parameters shared by every generated design

mod designs;
mod registry;
mod tag;

pub use designs::{BranchingGlyph, ClassicDockGlyph, DockGlyph, GroveGlyph, MenubarGlyph, TreeGlyph};
pub use registry::GlyphRegistry;
pub use tag::{TagMarker, TagShape};

use crate::canvas::Surface;
use crate::color::Color;
use crate::error::Result;

/// Stroke used by stroke-based designs when the caller gives none,
/// as a fraction of the working size
pub const DEFAULT_STROKE_RATIO: f32 = 0.047;

/// Per-call drawing parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphParams {
    pub color: Color,
    /// Canvas fill; `None` leaves the canvas transparent
    pub background: Option<Color>,
    /// Overrides the design's own padding when set
    pub padding_ratio: Option<f32>,
    /// Explicit stroke width in pixels of the size being drawn
    pub stroke_width: Option<f32>,
}

impl GlyphParams {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            background: None,
            padding_ratio: None,
            stroke_width: None,
        }
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    pub fn with_padding(mut self, padding_ratio: f32) -> Self {
        self.padding_ratio = Some(padding_ratio);
        self
    }

    pub fn with_stroke(mut self, stroke_width: f32) -> Self {
        self.stroke_width = Some(stroke_width);
        self
    }

    /// Parameters for drawing at `factor` times the size; every pixel
    /// measurement is multiplied, ratios are left alone
    pub fn scaled(&self, factor: u32) -> Self {
        Self {
            stroke_width: self.stroke_width.map(|w| w * factor as f32),
            ..*self
        }
    }

    pub fn padding_for(&self, glyph: &dyn Glyph) -> f32 {
        self.padding_ratio.unwrap_or_else(|| glyph.default_padding())
    }

    pub fn stroke_for(&self, size: u32) -> f32 {
        self.stroke_width
            .unwrap_or(size as f32 * DEFAULT_STROKE_RATIO)
    }

    /// Color for cut-outs: the background, or transparent
    pub fn hole_color(&self) -> Color {
        self.background.unwrap_or(Color::TRANSPARENT)
    }
}

/// A procedurally drawn icon design
///
/// Implementations must derive every length from `size` so that drawing at
/// a multiple of the final size only changes edge quality, not proportions.
pub trait Glyph: Send + Sync {
    /// Name used on the command line and in output file names
    fn name(&self) -> &str;

    /// Padding ratio used when the caller gives none
    fn default_padding(&self) -> f32 {
        0.1
    }

    /// Whether the design honors [`GlyphParams::stroke_width`]
    fn uses_stroke(&self) -> bool {
        false
    }

    /// Draw the design into a `size` x `size` surface
    fn draw(&self, surface: &mut dyn Surface, size: u32, params: &GlyphParams) -> Result<()>;
}

/// Stroke width ladder for stroke-based designs at a final pixel size
pub fn stroke_for_size(size: u32) -> f32 {
    match size {
        0..=22 => 2.0,
        23..=44 => 3.0,
        45..=64 => 4.0,
        65..=128 => 6.0,
        129..=256 => 10.0,
        _ => 16.0,
    }
}

/// Integer pixel padding, truncated toward zero
pub(crate) fn padding_px(size: u32, ratio: f32) -> f32 {
    (size as f32 * ratio).floor()
}

/// Horizontal center on the pixel grid
pub(crate) fn center_x(size: u32) -> f32 {
    (size / 2) as f32
}
