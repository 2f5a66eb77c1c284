// Simple tree tuned to stay legible at menubar sizes

use crate::branch::stroke_width;
use crate::canvas::Surface;
use crate::error::Result;
use crate::geometry::Point;
use crate::glyph::{center_x, padding_px, Glyph, GlyphParams};

pub struct MenubarGlyph;

impl Glyph for MenubarGlyph {
    fn name(&self) -> &str {
        "menubar"
    }

    fn default_padding(&self) -> f32 {
        0.12
    }

    fn draw(&self, surface: &mut dyn Surface, size: u32, params: &GlyphParams) -> Result<()> {
        let s = size as f32;
        let padding = padding_px(size, params.padding_for(self));
        let cx = center_x(size);
        let base_y = s - padding;
        let height = base_y - padding;

        let trunk_top = base_y - height * 0.38;
        surface.stroke_line(
            Point::new(cx, base_y),
            Point::new(cx, trunk_top),
            stroke_width((s * 0.12).max(2.0)),
            params.color,
        );

        let crown = Point::new(cx, trunk_top - height * 0.28);
        surface.fill_circle(crown, height * 0.32, params.color);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::color::Color;

    #[test]
    fn test_crown_and_trunk_filled() {
        let mut canvas = Canvas::new(144, 144, None).unwrap();
        MenubarGlyph
            .draw(&mut canvas, 144, &GlyphParams::new(Color::BLACK))
            .unwrap();
        // padding 17; height 110; trunk top at 85.2; crown center at 54.4
        assert_eq!(canvas.pixel(72, 110), Some(Color::BLACK));
        assert_eq!(canvas.pixel(72, 54), Some(Color::BLACK));
        assert_eq!(canvas.pixel(72, 5).unwrap().a, 0);
        assert_eq!(canvas.pixel(5, 72).unwrap().a, 0);
    }
}
