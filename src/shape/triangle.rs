use crate::color::RGBColor;
use crate::geometry::{midpoint, BoundingRectangle, Point2d};
use crate::shape::{push_vertex, FLOATS_PER_DYNAMIC_VERTEX};

/// Isosceles triangle: flat bottom edge, apex above the middle of the top edge
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    vertices: Vec<f32>,
    color: RGBColor,
}

impl Triangle {
    pub fn new(point1: Point2d, point2: Point2d, color: RGBColor) -> Triangle {
        let rect = BoundingRectangle::new(point1, point2);
        let apex = midpoint(rect.top_left, rect.top_right);

        let mut vertices = Vec::with_capacity(3 * FLOATS_PER_DYNAMIC_VERTEX);
        push_vertex(&mut vertices, rect.bottom_left, 0.0, &color);
        push_vertex(&mut vertices, apex, 0.0, &color);
        push_vertex(&mut vertices, rect.bottom_right, 0.0, &color);

        Triangle { vertices, color }
    }

    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    pub fn color(&self) -> RGBColor {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_has_three_vertices() {
        let triangle = Triangle::new(
            Point2d::new(0.5, 0.5),
            Point2d::new(1.0, 1.0),
            RGBColor::new(1.0, 1.0, 1.0),
        );
        assert_eq!(triangle.vertices().len(), 3 * FLOATS_PER_DYNAMIC_VERTEX);
    }

    #[test]
    fn test_triangle_spans_the_bottom_edge_with_the_apex_centered() {
        let triangle = Triangle::new(
            Point2d::new(5.0, 2.0),
            Point2d::new(1.0, 8.0),
            RGBColor::new(0.0, 1.0, 0.0),
        );

        let positions: Vec<&[f32]> = triangle
            .vertices()
            .chunks(FLOATS_PER_DYNAMIC_VERTEX)
            .map(|vertex| &vertex[0..3])
            .collect();
        assert_eq!(positions[0], &[1.0, 2.0, 0.0]);
        assert_eq!(positions[1], &[3.0, 8.0, 0.0]);
        assert_eq!(positions[2], &[5.0, 2.0, 0.0]);
    }

    #[test]
    fn test_triangle_carries_its_color_on_every_vertex() {
        let triangle = Triangle::new(
            Point2d::new(0.0, 0.0),
            Point2d::new(2.0, 2.0),
            RGBColor::new(0.29, 0.0, 0.51),
        );
        for vertex in triangle.vertices().chunks(FLOATS_PER_DYNAMIC_VERTEX) {
            assert_eq!(&vertex[3..6], &[0.29, 0.0, 0.51]);
        }
    }
}
