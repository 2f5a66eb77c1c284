use super::table::{BranchStyle, BranchTable};
use crate::canvas::Surface;
use crate::color::Color;
use crate::error::{GlyphError, Result};
use crate::geometry::{endpoint, Point, Segment};

/// Position and shape of the branch about to be drawn
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BranchState {
    pub start: Point,
    /// Degrees from vertical, clockwise positive
    pub angle: f32,
    pub length: f32,
    pub width: f32,
    pub depth: usize,
}

impl BranchState {
    pub fn root(start: Point, angle: f32, length: f32, width: f32) -> Self {
        Self {
            start,
            angle,
            length,
            width,
            depth: 0,
        }
    }

    fn segment(&self) -> Segment {
        Segment {
            start: self.start,
            end: endpoint(self.start, self.angle, self.length),
            width: self.width,
        }
    }
}

/// Draws one branch and its descendants onto `surface`.
///
/// Each branch is a stroke of `state.length` with a round cap at its tip,
/// followed by a left and a right child at `depth + 1`. Recursion stops once
/// the depth exceeds `max_depth` or the branch falls under the style's
/// minimum length or width. Returns the number of segments drawn.
pub fn synthesize_branch<S: Surface + ?Sized>(
    surface: &mut S,
    state: BranchState,
    max_depth: usize,
    color: Color,
    table: &BranchTable,
    style: &BranchStyle,
) -> Result<usize> {
    if !(state.length > 0.0 && state.width > 0.0) {
        return Err(GlyphError::degenerate(format!(
            "branch at depth {} has length {} and width {}",
            state.depth, state.length, state.width
        )));
    }
    if !(style.cap_divisor > 0.0) {
        return Err(GlyphError::degenerate("cap divisor must be positive"));
    }
    for spec in table.levels() {
        spec.validate()?;
    }

    let drawn = emit(surface, state, max_depth, color, table, style);
    tracing::trace!(segments = drawn, max_depth, "branch synthesized");
    Ok(drawn)
}

fn emit<S: Surface + ?Sized>(
    surface: &mut S,
    state: BranchState,
    max_depth: usize,
    color: Color,
    table: &BranchTable,
    style: &BranchStyle,
) -> usize {
    if state.depth > max_depth || state.length < style.min_length || state.width < style.min_width {
        return 0;
    }

    let segment = state.segment();
    surface.stroke_line(segment.start, segment.end, stroke_width(segment.width), color);
    surface.fill_circle(segment.end, segment.width / style.cap_divisor, color);

    let spec = table.spec_for(state.depth);
    let depth = state.depth as f32;
    let child = |angle| BranchState {
        start: segment.end,
        angle,
        length: state.length * spec.length_decay,
        width: state.width * spec.width_decay,
        depth: state.depth + 1,
    };
    let left = child(state.angle - (spec.spread + depth * style.left_growth));
    let right = child(state.angle + (spec.spread + depth * style.right_growth));

    1 + emit(surface, left, max_depth, color, table, style)
        + emit(surface, right, max_depth, color, table, style)
}

/// Whole-pixel stroke width, never thinner than one pixel
pub fn stroke_width(width: f32) -> f32 {
    width.floor().max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::table::BranchSpec;

    #[derive(Default)]
    struct Recorder {
        lines: Vec<(Point, Point, f32)>,
        caps: Vec<(Point, f32)>,
    }

    impl Surface for Recorder {
        fn stroke_line(&mut self, from: Point, to: Point, width: f32, _color: Color) {
            self.lines.push((from, to, width));
        }

        fn fill_circle(&mut self, center: Point, radius: f32, _color: Color) {
            self.caps.push((center, radius));
        }

        fn fill_polygon(&mut self, _points: &[Point], _color: Color) {}
    }

    fn close(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-3
    }

    fn single_level_table() -> BranchTable {
        BranchTable::new(vec![BranchSpec::new(30.0, 0.6, 0.7).unwrap()]).unwrap()
    }

    #[test]
    fn test_two_level_scenario() {
        let mut rec = Recorder::default();
        let state = BranchState::root(Point::new(100.0, 200.0), 0.0, 50.0, 10.0);
        let drawn = synthesize_branch(
            &mut rec,
            state,
            1,
            Color::BLACK,
            &single_level_table(),
            &BranchStyle::default(),
        )
        .unwrap();

        assert_eq!(drawn, 3);
        assert_eq!(rec.lines.len(), 3);

        let (from, to, width) = rec.lines[0];
        assert!(close(from, Point::new(100.0, 200.0)));
        assert!(close(to, Point::new(100.0, 150.0)));
        assert_eq!(width, 10.0);
        assert_eq!(rec.caps[0].1, 5.0);

        let fork = Point::new(100.0, 150.0);
        let left_end = endpoint(fork, -30.0, 30.0);
        let right_end = endpoint(fork, 30.0, 30.0);
        let (lf, lt, lw) = rec.lines[1];
        let (rf, rt, rw) = rec.lines[2];
        assert!(close(lf, fork) && close(rf, fork));
        assert!(close(lt, left_end));
        assert!(close(rt, right_end));
        assert_eq!(lw, 7.0);
        assert_eq!(rw, 7.0);
        assert!((rec.caps[1].1 - 3.5).abs() < 1e-4);
    }

    #[test]
    fn test_segment_count_bounded_by_depth() {
        for max_depth in 0..=5usize {
            let mut rec = Recorder::default();
            let state = BranchState::root(Point::new(500.0, 1000.0), 0.0, 400.0, 60.0);
            let drawn = synthesize_branch(
                &mut rec,
                state,
                max_depth,
                Color::BLACK,
                &BranchTable::dock(),
                &BranchStyle::default(),
            )
            .unwrap();
            assert_eq!(drawn, (1 << (max_depth + 1)) - 1);
            assert_eq!(rec.lines.len(), drawn);
        }
    }

    #[test]
    fn test_min_length_stops_recursion() {
        let mut rec = Recorder::default();
        let style = BranchStyle {
            min_length: 20.0,
            ..BranchStyle::default()
        };
        let state = BranchState::root(Point::new(0.0, 0.0), 0.0, 50.0, 10.0);
        // 50 -> 30 -> 18: the third level is below the minimum.
        let drawn =
            synthesize_branch(&mut rec, state, 10, Color::BLACK, &single_level_table(), &style)
                .unwrap();
        assert_eq!(drawn, 3);
    }

    #[test]
    fn test_growth_is_asymmetric() {
        let mut rec = Recorder::default();
        let style = BranchStyle {
            left_growth: 3.0,
            right_growth: 2.0,
            ..BranchStyle::default()
        };
        let table = BranchTable::new(vec![
            BranchSpec::new(30.0, 0.9, 0.9).unwrap(),
            BranchSpec::new(30.0, 0.9, 0.9).unwrap(),
        ])
        .unwrap();
        let state = BranchState::root(Point::new(0.0, 0.0), 0.0, 100.0, 10.0);
        synthesize_branch(&mut rec, state, 2, Color::BLACK, &table, &style).unwrap();

        // Depth-2 children of the left depth-1 branch (angle -30).
        let origin = rec.lines[1].1;
        let expected_left = endpoint(origin, -30.0 - 33.0, 81.0);
        let expected_right = endpoint(origin, -30.0 + 32.0, 81.0);
        assert!(close(rec.lines[2].1, expected_left));
        assert!(close(rec.lines[3].1, expected_right));
    }

    #[test]
    fn test_zero_width_is_degenerate() {
        let mut rec = Recorder::default();
        let state = BranchState::root(Point::new(0.0, 0.0), 0.0, 50.0, 0.0);
        let err = synthesize_branch(
            &mut rec,
            state,
            3,
            Color::BLACK,
            &BranchTable::dock(),
            &BranchStyle::default(),
        )
        .unwrap_err();
        assert!(matches!(err, GlyphError::DegenerateGeometry(_)));
        assert!(rec.lines.is_empty());
    }

    #[test]
    fn test_fractional_width_floors() {
        assert_eq!(stroke_width(7.9), 7.0);
        assert_eq!(stroke_width(0.4), 1.0);
    }
}
