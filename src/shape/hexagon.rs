use crate::color::RGBColor;
use crate::geometry::{midpoint, third_points, BoundingRectangle, Point2d};
use crate::shape::{push_convex_fan, FLOATS_PER_DYNAMIC_VERTEX};

/// Hexagon inscribed in the bounding rectangle: the side edges sit on the
/// vertical trisection points, the top and bottom corners on the edge
/// midpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct Hexagon {
    vertices: Vec<f32>,
    color: RGBColor,
}

impl Hexagon {
    pub fn new(point1: Point2d, point2: Point2d, color: RGBColor) -> Hexagon {
        let rect = BoundingRectangle::new(point1, point2);

        let (left_lower, left_upper) = third_points(rect.bottom_left, rect.top_left);
        let (right_lower, right_upper) = third_points(rect.bottom_right, rect.top_right);
        let top_mid = midpoint(rect.top_left, rect.top_right);
        let bottom_mid = midpoint(rect.bottom_left, rect.bottom_right);

        let outline = [
            left_upper,
            top_mid,
            right_upper,
            right_lower,
            bottom_mid,
            left_lower,
        ];

        let mut vertices = Vec::with_capacity(12 * FLOATS_PER_DYNAMIC_VERTEX);
        push_convex_fan(&mut vertices, &outline, 0.0, &color);

        Hexagon { vertices, color }
    }

    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    pub fn color(&self) -> RGBColor {
        self.color
    }
}
