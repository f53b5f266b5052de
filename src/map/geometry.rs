//! Points in the map's coordinate space and the path data built from them.

use std::fmt;

/// A point in the background map's native coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Formats as `x,y`. Whole numbers print without a fractional part.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Renders a point as `"x,y"` for use in path and transform directives.
pub fn format_point(point: Point) -> String {
    point.to_string()
}

/// Component-wise mean of two points.
pub fn midpoint(p: Point, q: Point) -> Point {
    Point::new((p.x + q.x) / 2.0, (p.y + q.y) / 2.0)
}

/// Straight two-point path data: `M<from>L<to>`.
pub fn line_path(from: Point, to: Point) -> String {
    format!("M{}L{}", from, to)
}

/// Cubic Bezier path data: `M<start>C<c1> <c2> <end>`.
pub fn cubic_path(start: Point, c1: Point, c2: Point, end: Point) -> String {
    format!("M{}C{} {} {}", start, c1, c2, end)
}

/// `translate(x,y)` transform for placing a symbol at `point`.
pub fn translate(point: Point) -> String {
    format!("translate({})", point)
}
