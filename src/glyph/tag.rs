// Tag marker drawn beneath the dock tree

use crate::branch::stroke_width;
use crate::canvas::Surface;
use crate::color::Color;
use crate::geometry::{diamond, rotated_square, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagShape {
    /// Corners on the axes, inner border at 72%
    Diamond,
    /// Corners at 45° steps, inner border at 70%
    Square,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TagMarker {
    pub center: Point,
    pub size: f32,
    pub shape: TagShape,
}

impl TagMarker {
    pub fn new(center: Point, size: f32, shape: TagShape) -> Self {
        Self {
            center,
            size,
            shape,
        }
    }

    /// Fill the marker with `color`. With an `inner` color the middle is
    /// refilled to leave a border, and a small branch symbol is drawn in it.
    pub fn draw(&self, surface: &mut dyn Surface, color: Color, inner: Option<Color>) {
        let half = self.size / 2.0;
        match self.shape {
            TagShape::Diamond => {
                surface.fill_polygon(&diamond(self.center, half), color);
                if let Some(inner) = inner {
                    let inner_half = half * 0.72;
                    surface.fill_polygon(&diamond(self.center, inner_half), inner);
                    self.diamond_symbol(surface, inner_half, color);
                }
            }
            TagShape::Square => {
                surface.fill_polygon(&rotated_square(self.center, half, 45.0), color);
                if let Some(inner) = inner {
                    let inner_size = self.size * 0.7;
                    surface.fill_polygon(&rotated_square(self.center, inner_size / 2.0, 45.0), inner);
                    self.square_symbol(surface, inner_size, color);
                }
            }
        }
    }

    fn diamond_symbol(&self, surface: &mut dyn Surface, inner_half: f32, color: Color) {
        let Point { x: cx, y: cy } = self.center;
        let line_w = stroke_width((self.size * 0.09).max(2.0));
        let dot_r = self.size * 0.07;
        let main = inner_half * 0.6;

        let p1 = Point::new(cx - main * 0.5, cy + main * 0.5);
        let p2 = Point::new(cx + main * 0.5, cy - main * 0.5);
        surface.stroke_line(p1, p2, line_w, color);

        let fork = Point::new(cx - main * 0.1, cy + main * 0.1);
        let tip = Point::new(cx + main * 0.4, cy + main * 0.25);
        surface.stroke_line(fork, tip, line_w, color);

        for p in [p1, p2, tip] {
            surface.fill_circle(p, dot_r, color);
        }
    }

    fn square_symbol(&self, surface: &mut dyn Surface, inner_size: f32, color: Color) {
        let Point { x: cx, y: cy } = self.center;
        let len = inner_size * 0.5;
        let line_w = stroke_width((self.size * 0.08).max(2.0));
        let dot_r = self.size * 0.06;

        let start = Point::new(cx - len * 0.4, cy + len * 0.4);
        let end = Point::new(cx + len * 0.4, cy - len * 0.4);
        surface.stroke_line(start, end, line_w, color);

        let tip = Point::new(cx + len * 0.35, cy + len * 0.1);
        surface.stroke_line(self.center, tip, line_w, color);

        for p in [start, end, tip] {
            surface.fill_circle(p, dot_r, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;

    #[test]
    fn test_solid_diamond() {
        let mut canvas = Canvas::new(100, 100, None).unwrap();
        let tag = TagMarker::new(Point::new(50.0, 50.0), 80.0, TagShape::Diamond);
        tag.draw(&mut canvas, Color::BLACK, None);
        assert_eq!(canvas.pixel(50, 50), Some(Color::BLACK));
        assert_eq!(canvas.pixel(50, 15), Some(Color::BLACK));
        // Outside the diamond near the bounding-box corner.
        assert_eq!(canvas.pixel(15, 15).unwrap().a, 0);
    }

    #[test]
    fn test_diamond_border_leaves_hole() {
        let mut canvas = Canvas::new(200, 200, None).unwrap();
        let tag = TagMarker::new(Point::new(100.0, 100.0), 160.0, TagShape::Diamond);
        tag.draw(&mut canvas, Color::BLACK, Some(Color::TRANSPARENT));
        // Border ring between 72% and 100% of the half size.
        assert_eq!(canvas.pixel(100, 30), Some(Color::BLACK));
        // Inside the inset, away from the symbol.
        assert_eq!(canvas.pixel(100, 60).unwrap().a, 0);
        // Symbol fork dots are opaque.
        let main = 80.0 * 0.72 * 0.6;
        let p2 = (100.0 + main * 0.5, 100.0 - main * 0.5);
        assert_eq!(canvas.pixel(p2.0 as u32, p2.1 as u32), Some(Color::BLACK));
    }

    #[test]
    fn test_square_border_uses_inner_color() {
        let mut canvas = Canvas::new(200, 200, None).unwrap();
        let inner = Color::rgb(245, 245, 245);
        let tag = TagMarker::new(Point::new(100.0, 100.0), 160.0, TagShape::Square);
        tag.draw(&mut canvas, Color::BLACK, Some(inner));
        // Corners at 45° make an axis-aligned square of half side 80/sqrt(2).
        assert_eq!(canvas.pixel(100, 40).unwrap().a, 0);
        assert_eq!(canvas.pixel(100, 50), Some(Color::BLACK));
        assert_eq!(canvas.pixel(100, 65), Some(inner));
        assert_eq!(canvas.pixel(100, 100), Some(Color::BLACK));
    }
}
