// Trunk carrying a round crown

use crate::canvas::Surface;
use crate::error::Result;
use crate::geometry::Point;
use crate::glyph::{center_x, padding_px, Glyph, GlyphParams};

pub struct TreeGlyph;

impl Glyph for TreeGlyph {
    fn name(&self) -> &str {
        "tree"
    }

    fn default_padding(&self) -> f32 {
        0.12
    }

    fn uses_stroke(&self) -> bool {
        true
    }

    fn draw(&self, surface: &mut dyn Surface, size: u32, params: &GlyphParams) -> Result<()> {
        let s = size as f32;
        let padding = padding_px(size, params.padding_for(self));
        let cx = center_x(size);
        let base_y = s - padding;
        let height = base_y - padding;

        let trunk_top = base_y - height * 0.4;
        surface.stroke_line(
            Point::new(cx, base_y),
            Point::new(cx, trunk_top),
            params.stroke_for(size),
            params.color,
        );

        let crown = Point::new(cx, trunk_top - height * 0.25);
        surface.fill_circle(crown, height * 0.28, params.color);
        Ok(())
    }
}
