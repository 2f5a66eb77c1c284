// Dock icon: organic branching tree standing on a diamond tag

use crate::branch::{stroke_width, synthesize_branch, BranchState, BranchStyle, BranchTable};
use crate::canvas::Surface;
use crate::error::Result;
use crate::geometry::Point;
use crate::glyph::{center_x, padding_px, Glyph, GlyphParams, TagMarker, TagShape};

pub struct DockGlyph {
    table: BranchTable,
    style: BranchStyle,
    max_depth: usize,
    /// Angle of the two main branches either side of vertical
    main_angle: f32,
}

impl DockGlyph {
    pub fn new(table: BranchTable, style: BranchStyle, max_depth: usize) -> Self {
        Self {
            table,
            style,
            max_depth,
            main_angle: 22.0,
        }
    }

    pub fn table(&self) -> &BranchTable {
        &self.table
    }

    pub fn style(&self) -> &BranchStyle {
        &self.style
    }
}

impl Default for DockGlyph {
    fn default() -> Self {
        let style = BranchStyle {
            cap_divisor: 2.2,
            ..BranchStyle::default()
        };
        Self::new(BranchTable::dock(), style, 4)
    }
}

impl Glyph for DockGlyph {
    fn name(&self) -> &str {
        "dock"
    }

    fn default_padding(&self) -> f32 {
        0.08
    }

    fn draw(&self, surface: &mut dyn Surface, size: u32, params: &GlyphParams) -> Result<()> {
        let s = size as f32;
        let padding = padding_px(size, params.padding_for(self));
        let cx = center_x(size);
        let color = params.color;

        let tag_size = s * 0.14;
        let tag_center_y = (s - padding) - tag_size * 0.6;

        let trunk_bottom_y = tag_center_y - tag_size * 0.6;
        let trunk_top_y = trunk_bottom_y - s * 0.22;
        let trunk_width = s * 0.055;
        let trunk_top = Point::new(cx, trunk_top_y);

        surface.stroke_line(
            Point::new(cx, trunk_bottom_y),
            trunk_top,
            stroke_width(trunk_width),
            color,
        );

        let main_length = s * 0.18;
        let main_width = trunk_width * 0.9;
        for angle in [-self.main_angle, self.main_angle] {
            let root = BranchState::root(trunk_top, angle, main_length, main_width);
            synthesize_branch(
                &mut *surface,
                root,
                self.max_depth,
                color,
                &self.table,
                &self.style,
            )?;
        }

        // Connector runs slightly left of the trunk to the tag's top corner.
        let tag_cx = cx - s * 0.06;
        surface.stroke_line(
            Point::new(cx, trunk_bottom_y),
            Point::new(tag_cx, tag_center_y - tag_size * 0.5),
            stroke_width((trunk_width * 0.5).max(2.0)),
            color,
        );

        TagMarker::new(Point::new(tag_cx, tag_center_y), tag_size, TagShape::Diamond).draw(
            surface,
            color,
            Some(params.hole_color()),
        );
        Ok(())
    }
}
