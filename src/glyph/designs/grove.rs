// Three ascending lines that converge slightly toward the base

use crate::canvas::Surface;
use crate::error::Result;
use crate::geometry::Point;
use crate::glyph::{center_x, padding_px, Glyph, GlyphParams};

pub struct GroveGlyph;

impl Glyph for GroveGlyph {
    fn name(&self) -> &str {
        "grove"
    }

    fn uses_stroke(&self) -> bool {
        true
    }

    fn draw(&self, surface: &mut dyn Surface, size: u32, params: &GlyphParams) -> Result<()> {
        let s = size as f32;
        let padding = padding_px(size, params.padding_for(self));
        let cx = center_x(size);
        let base_y = s - padding;
        let stroke = params.stroke_for(size);
        let color = params.color;

        let top_spread = s * 0.32;
        let bottom_spread = s * 0.22;
        let center_height = base_y - padding;
        let side_height = center_height * 0.85;

        let lines = [
            (
                Point::new(cx - bottom_spread, base_y),
                Point::new(cx - top_spread, base_y - side_height),
            ),
            (Point::new(cx, base_y), Point::new(cx, padding)),
            (
                Point::new(cx + bottom_spread, base_y),
                Point::new(cx + top_spread, base_y - side_height),
            ),
        ];

        for (bottom, top) in lines {
            surface.stroke_line(bottom, top, stroke, color);
        }
        let terminal = (stroke * 0.6).max(1.0);
        for (_, top) in lines {
            surface.fill_circle(top, terminal, color);
        }
        Ok(())
    }
}
