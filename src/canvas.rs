use crate::color::Color;
use crate::error::{GlyphError, Result};
use crate::geometry::Point;
use image::RgbaImage;
use tiny_skia::{BlendMode, FillRule, LineCap, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Drawing operations the glyph designs are written against.
///
/// Every operation replaces the covered pixels with `color` instead of
/// compositing, so drawing a transparent shape cuts a hole.
pub trait Surface {
    /// Straight stroke with flat ends
    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Color);

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    fn fill_polygon(&mut self, points: &[Point], color: Color);
}

/// RGBA pixel buffer owned by a single render call
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Create a canvas filled with `background`, or fully transparent
    pub fn new(width: u32, height: u32, background: Option<Color>) -> Result<Self> {
        let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
            GlyphError::invalid_dimension(format!("cannot allocate {}x{} canvas", width, height))
        })?;
        if let Some(bg) = background {
            pixmap.fill(bg.to_skia());
        }
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Straight-alpha color at `(x, y)`
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let p = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(p.red(), p.green(), p.blue(), p.alpha()))
    }

    /// Consume the canvas, keeping tiny-skia's premultiplied channel layout
    pub fn into_premultiplied(self) -> RgbaImage {
        let (w, h) = (self.pixmap.width(), self.pixmap.height());
        RgbaImage::from_raw(w, h, self.pixmap.take())
            .unwrap_or_else(|| RgbaImage::new(w, h))
    }

    /// Straight-alpha copy of the canvas
    pub fn to_image(&self) -> RgbaImage {
        let mut img = RgbaImage::new(self.width(), self.height());
        for (dst, src) in img.pixels_mut().zip(self.pixmap.pixels()) {
            let c = src.demultiply();
            *dst = image::Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
        img
    }

    fn paint(color: Color) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(color.to_skia());
        // Hard edges; smoothing comes from the supersample downsample.
        paint.anti_alias = false;
        paint.blend_mode = if color.is_transparent() {
            BlendMode::Clear
        } else {
            BlendMode::Source
        };
        paint
    }
}

impl Surface for Canvas {
    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Color) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x, from.y);
        pb.line_to(to.x, to.y);
        let Some(path) = pb.finish() else {
            return;
        };
        let stroke = Stroke {
            width,
            line_cap: LineCap::Butt,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &Self::paint(color), &stroke, Transform::identity(), None);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        if let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) {
            self.pixmap.fill_path(
                &path,
                &Self::paint(color),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut pb = PathBuilder::new();
        pb.move_to(first.x, first.y);
        for p in rest {
            pb.line_to(p.x, p.y);
        }
        pb.close();
        if let Some(path) = pb.finish() {
            self.pixmap.fill_path(
                &path,
                &Self::paint(color),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }
}
