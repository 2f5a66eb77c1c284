// First dock icon: symmetric branching over a square tag

use crate::branch::{stroke_width, synthesize_branch, BranchState, BranchStyle, BranchTable};
use crate::canvas::Surface;
use crate::error::Result;
use crate::geometry::Point;
use crate::glyph::{center_x, padding_px, Glyph, GlyphParams, TagMarker, TagShape};

const MAX_DEPTH: usize = 4;

pub struct ClassicDockGlyph {
    table: BranchTable,
    style: BranchStyle,
}

impl ClassicDockGlyph {
    pub fn new() -> Result<Self> {
        Ok(Self {
            // Spread widens 5° per level; decay is constant.
            table: BranchTable::linear(MAX_DEPTH + 1, 35.0, 5.0, 0.65, 0.7)?,
            style: BranchStyle::symmetric(),
        })
    }
}

impl Glyph for ClassicDockGlyph {
    fn name(&self) -> &str {
        "dock-classic"
    }

    fn draw(&self, surface: &mut dyn Surface, size: u32, params: &GlyphParams) -> Result<()> {
        let s = size as f32;
        let padding = padding_px(size, params.padding_for(self));
        let cx = center_x(size);
        let color = params.color;

        let tree_top = padding;
        let tree_bottom = s - padding - s * 0.12;
        let trunk_length = (tree_bottom - tree_top) * 0.25;
        let trunk_width = s * 0.06;
        let trunk_top = Point::new(cx, tree_bottom - trunk_length);

        surface.stroke_line(
            Point::new(cx, tree_bottom),
            trunk_top,
            stroke_width(trunk_width),
            color,
        );

        for angle in [-25.0, 25.0] {
            let root = BranchState::root(trunk_top, angle, trunk_length * 1.2, trunk_width * 0.85);
            synthesize_branch(&mut *surface, root, MAX_DEPTH, color, &self.table, &self.style)?;
        }

        let tag_size = s * 0.18;
        let tag_center = Point::new(cx - s * 0.08, tree_bottom + s * 0.08);
        TagMarker::new(tag_center, tag_size, TagShape::Square).draw(
            surface,
            color,
            Some(params.hole_color()),
        );

        surface.stroke_line(
            Point::new(cx, tree_bottom),
            Point::new(tag_center.x, tag_center.y - tag_size * 0.5),
            stroke_width((trunk_width * 0.4).max(2.0)),
            color,
        );
        Ok(())
    }
}
