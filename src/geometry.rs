// Plain 2D geometry shared by the controller, the gesture state and the surfaces.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    /// Vector from `origin` to `self`.
    pub fn offset_from(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Placement of a surface in viewport coordinates: the top-left corner
/// `getBoundingClientRect` reports. Only the origin matters for local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Viewport point expressed relative to the top-left corner.
    pub fn to_local(&self, viewport: Point) -> Point {
        viewport.offset_from(self.origin())
    }
}

/// Distance and midpoint of the first two contacts, or `None` with fewer than two.
pub fn two_finger_geometry(touches: &[Point]) -> Option<(f64, Point)> {
    match touches {
        [a, b, ..] => Some((a.distance_to(*b), a.midpoint(*b))),
        _ => None,
    }
}
