use crate::color::RGBColor;
use crate::geometry::{BoundingRectangle, Point2d};
use crate::shape::{push_vertex, FLOATS_PER_DYNAMIC_VERTEX};

/// Axis-aligned rectangle filled with two triangles
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    vertices: Vec<f32>,
    color: RGBColor,
}

impl Rectangle {
    pub fn new(point1: Point2d, point2: Point2d, color: RGBColor) -> Rectangle {
        let rect = BoundingRectangle::new(point1, point2);

        // Both triangles share the bottom-left to top-right diagonal
        let mut vertices = Vec::with_capacity(6 * FLOATS_PER_DYNAMIC_VERTEX);
        push_vertex(&mut vertices, rect.bottom_left, 0.0, &color);
        push_vertex(&mut vertices, rect.top_left, 0.0, &color);
        push_vertex(&mut vertices, rect.top_right, 0.0, &color);
        push_vertex(&mut vertices, rect.bottom_left, 0.0, &color);
        push_vertex(&mut vertices, rect.top_right, 0.0, &color);
        push_vertex(&mut vertices, rect.bottom_right, 0.0, &color);

        Rectangle { vertices, color }
    }

    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    pub fn color(&self) -> RGBColor {
        self.color
    }
}
