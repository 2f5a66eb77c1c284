// Trunk that forks into three strokes with round terminals

use crate::canvas::Surface;
use crate::error::Result;
use crate::geometry::Point;
use crate::glyph::{center_x, padding_px, Glyph, GlyphParams};

pub struct BranchingGlyph;

impl Glyph for BranchingGlyph {
    fn name(&self) -> &str {
        "branching"
    }

    fn default_padding(&self) -> f32 {
        0.15
    }

    fn uses_stroke(&self) -> bool {
        true
    }

    fn draw(&self, surface: &mut dyn Surface, size: u32, params: &GlyphParams) -> Result<()> {
        let s = size as f32;
        let padding = padding_px(size, params.padding_for(self));
        let inner = s - padding * 2.0;
        let cx = center_x(size);
        let base_y = s - padding;
        let top_y = padding;
        let stroke = params.stroke_for(size);
        let color = params.color;

        let trunk_top_y = base_y - inner * 0.35;
        let spread = inner * 0.35;
        let fork = Point::new(cx, trunk_top_y + inner * 0.05);

        let tips = [
            Point::new(cx - spread, top_y + inner * 0.1),
            Point::new(cx, top_y),
            Point::new(cx + spread, top_y + inner * 0.1),
        ];

        surface.stroke_line(Point::new(cx, base_y), fork, stroke, color);
        for tip in tips {
            surface.stroke_line(fork, tip, stroke, color);
        }

        let terminal = (stroke / 2.0).floor().max(1.0);
        for tip in tips {
            surface.fill_circle(tip, terminal, color);
        }
        Ok(())
    }
}
