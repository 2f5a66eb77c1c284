// Pixel-space geometry. Origin is top-left and y grows downward.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A directed stroke with a rounded terminal cap at `end`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub width: f32,
}

/// End of a stroke of `length` leaving `start` at `angle_deg`.
///
/// 0° points straight up and angles grow clockwise, so the y term is
/// subtracted.
pub fn endpoint(start: Point, angle_deg: f32, length: f32) -> Point {
    let rad = angle_deg.to_radians();
    Point::new(start.x + length * rad.sin(), start.y - length * rad.cos())
}

/// Corners of an upright diamond: top, right, bottom, left
pub fn diamond(center: Point, half: f32) -> [Point; 4] {
    [
        Point::new(center.x, center.y - half),
        Point::new(center.x + half, center.y),
        Point::new(center.x, center.y + half),
        Point::new(center.x - half, center.y),
    ]
}

/// Corners placed at `angle_deg + i * 90°` around `center`, measured in
/// screen space from the positive x axis
pub fn rotated_square(center: Point, half: f32, angle_deg: f32) -> [Point; 4] {
    let mut corners = [center; 4];
    for (i, corner) in corners.iter_mut().enumerate() {
        let a = (angle_deg + i as f32 * 90.0).to_radians();
        *corner = Point::new(center.x + half * a.cos(), center.y + half * a.sin());
    }
    corners
}
