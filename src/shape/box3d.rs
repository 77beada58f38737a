use crate::color::RGBColor;
use crate::geometry::{BoundingRectangle, Point2d};
use crate::shape::{push_vertex, FLOATS_PER_DYNAMIC_VERTEX};

/// Rectangular box: the bounding rectangle extruded along z. Depth equals the
/// rectangle width and is centered on the picked plane, so a square drag
/// produces a cube.
#[derive(Clone, Debug, PartialEq)]
pub struct Box3d {
    vertices: Vec<f32>,
    color: RGBColor,
}

impl Box3d {
    pub fn new(point1: Point2d, point2: Point2d, color: RGBColor) -> Box3d {
        let rect = BoundingRectangle::new(point1, point2);
        let half_depth = rect.width() / 2.0;
        let front = half_depth;
        let back = -half_depth;

        let mut vertices = Vec::with_capacity(36 * FLOATS_PER_DYNAMIC_VERTEX);
        // front and back
        push_quad(
            &mut vertices,
            [
                (rect.bottom_left, front),
                (rect.top_left, front),
                (rect.top_right, front),
                (rect.bottom_right, front),
            ],
            &color,
        );
        push_quad(
            &mut vertices,
            [
                (rect.bottom_right, back),
                (rect.top_right, back),
                (rect.top_left, back),
                (rect.bottom_left, back),
            ],
            &color,
        );
        // left and right
        push_quad(
            &mut vertices,
            [
                (rect.bottom_left, back),
                (rect.top_left, back),
                (rect.top_left, front),
                (rect.bottom_left, front),
            ],
            &color,
        );
        push_quad(
            &mut vertices,
            [
                (rect.bottom_right, front),
                (rect.top_right, front),
                (rect.top_right, back),
                (rect.bottom_right, back),
            ],
            &color,
        );
        // top and bottom
        push_quad(
            &mut vertices,
            [
                (rect.top_left, front),
                (rect.top_left, back),
                (rect.top_right, back),
                (rect.top_right, front),
            ],
            &color,
        );
        push_quad(
            &mut vertices,
            [
                (rect.bottom_left, back),
                (rect.bottom_left, front),
                (rect.bottom_right, front),
                (rect.bottom_right, back),
            ],
            &color,
        );

        Box3d { vertices, color }
    }

    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    pub fn color(&self) -> RGBColor {
        self.color
    }
}

// Two triangles covering the quad [a, b, c, d], sharing the a-c diagonal.
fn push_quad(out: &mut Vec<f32>, quad: [(Point2d, f32); 4], color: &RGBColor) {
    let [a, b, c, d] = quad;
    for (point, z) in [a, b, c, a, c, d] {
        push_vertex(out, point, z, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_has_thirty_six_vertices() {
        let shape = Box3d::new(
            Point2d::new(0.5, 0.5),
            Point2d::new(1.0, 1.0),
            RGBColor::new(1.0, 1.0, 1.0),
        );
        assert_eq!(shape.vertices().len(), 36 * FLOATS_PER_DYNAMIC_VERTEX);
    }

    #[test]
    fn test_square_drag_extrudes_to_a_cube() {
        let shape = Box3d::new(
            Point2d::new(0.0, 0.0),
            Point2d::new(2.0, 2.0),
            RGBColor::new(0.0, 1.0, 0.0),
        );

        let mut min = [f32::MAX; 3];
        let mut max = [f32::MIN; 3];
        for vertex in shape.vertices().chunks(FLOATS_PER_DYNAMIC_VERTEX) {
            for axis in 0..3 {
                min[axis] = min[axis].min(vertex[axis]);
                max[axis] = max[axis].max(vertex[axis]);
            }
            // Depth is split evenly on both sides of the picked plane
            assert!(vertex[2] == 1.0 || vertex[2] == -1.0);
        }
        assert_eq!(min, [0.0, 0.0, -1.0]);
        assert_eq!(max, [2.0, 2.0, 1.0]);
    }

    #[test]
    fn test_box_faces_cover_the_extruded_corners() {
        let shape = Box3d::new(
            Point2d::new(1.0, 2.0),
            Point2d::new(5.0, 8.0),
            RGBColor::new(0.0, 0.0, 1.0),
        );

        // Front face starts at the bottom-left corner on the near plane
        assert_eq!(&shape.vertices()[0..3], &[1.0, 2.0, 2.0]);
        // Every corner of the rectangle appears on both planes
        let positions: Vec<[f32; 3]> = shape
            .vertices()
            .chunks(FLOATS_PER_DYNAMIC_VERTEX)
            .map(|vertex| [vertex[0], vertex[1], vertex[2]])
            .collect();
        for x in [1.0, 5.0] {
            for y in [2.0, 8.0] {
                for z in [2.0, -2.0] {
                    assert!(positions.contains(&[x, y, z]));
                }
            }
        }
    }
}
