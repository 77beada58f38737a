use crate::color::RGBColor;
use crate::geometry::{third_points, BoundingRectangle, Point2d};
use crate::shape::{push_convex_fan, FLOATS_PER_DYNAMIC_VERTEX};

/// Octogon inscribed in the bounding rectangle, with corners on the
/// trisection points of all four edges.
#[derive(Clone, Debug, PartialEq)]
pub struct Octogon {
    vertices: Vec<f32>,
    color: RGBColor,
}

impl Octogon {
    pub fn new(point1: Point2d, point2: Point2d, color: RGBColor) -> Octogon {
        let rect = BoundingRectangle::new(point1, point2);

        let (left_lower, left_upper) = third_points(rect.bottom_left, rect.top_left);
        let (top_left_third, top_right_third) = third_points(rect.top_left, rect.top_right);
        let (right_lower, right_upper) = third_points(rect.bottom_right, rect.top_right);
        let (bottom_left_third, bottom_right_third) =
            third_points(rect.bottom_left, rect.bottom_right);

        let outline = [
            left_upper,
            top_left_third,
            top_right_third,
            right_upper,
            right_lower,
            bottom_right_third,
            bottom_left_third,
            left_lower,
        ];

        let mut vertices = Vec::with_capacity(18 * FLOATS_PER_DYNAMIC_VERTEX);
        push_convex_fan(&mut vertices, &outline, 0.0, &color);

        Octogon { vertices, color }
    }

    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    pub fn color(&self) -> RGBColor {
        self.color
    }
}
