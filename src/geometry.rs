//! Planar geometry used by shape tessellation.

/// A point on the canvas plane (y grows upward)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point2d {
    pub x: f32,
    pub y: f32,
}

impl Point2d {
    pub const fn new(x: f32, y: f32) -> Point2d {
        Point2d { x, y }
    }
}

/// Axis-aligned rectangle canonicalized from any two diagonal corners.
///
/// The inputs may name either diagonal in either order; the stored corners
/// come out the same for all four orderings. Two equal inputs degenerate to a
/// zero-area rectangle, which is allowed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingRectangle {
    pub top_left: Point2d,
    pub top_right: Point2d,
    pub bottom_left: Point2d,
    pub bottom_right: Point2d,
}

impl BoundingRectangle {
    pub fn new(p1: Point2d, p2: Point2d) -> BoundingRectangle {
        let min_x = p1.x.min(p2.x);
        let max_x = p1.x.max(p2.x);
        let min_y = p1.y.min(p2.y);
        let max_y = p1.y.max(p2.y);

        BoundingRectangle {
            top_left: Point2d::new(min_x, max_y),
            top_right: Point2d::new(max_x, max_y),
            bottom_left: Point2d::new(min_x, min_y),
            bottom_right: Point2d::new(max_x, min_y),
        }
    }

    pub fn width(&self) -> f32 {
        self.top_right.x - self.top_left.x
    }

    pub fn height(&self) -> f32 {
        self.top_left.y - self.bottom_left.y
    }

    pub fn center(&self) -> Point2d {
        midpoint(self.bottom_left, self.top_right)
    }
}

/// Componentwise average of two points; commutative
pub fn midpoint(p1: Point2d, p2: Point2d) -> Point2d {
    Point2d::new((p1.x + p2.x) / 2.0, (p1.y + p2.y) / 2.0)
}

/// The two interior trisection points of the segment p1 -> p2.
///
/// The first returned point is the one closer to `p1`, so the argument order
/// matters.
pub fn third_points(p1: Point2d, p2: Point2d) -> (Point2d, Point2d) {
    let dx = (p2.x - p1.x) / 3.0;
    let dy = (p2.y - p1.y) / 3.0;
    (
        Point2d::new(p1.x + dx, p1.y + dy),
        Point2d::new(p1.x + 2.0 * dx, p1.y + 2.0 * dy),
    )
}
