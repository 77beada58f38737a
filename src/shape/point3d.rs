use crate::color::RGBColor;
use crate::shape::FLOATS_PER_POINT_VERTEX;

/// A single positioned point with its own size, drawn with the points
/// topology
#[derive(Clone, Debug, PartialEq)]
pub struct Point3d {
    vertices: [f32; FLOATS_PER_POINT_VERTEX],
    color: RGBColor,
}

impl Point3d {
    pub fn new(x: f32, y: f32, z: f32, color: RGBColor, point_size: f32) -> Point3d {
        Point3d {
            vertices: [x, y, z, color.red, color.green, color.blue, point_size],
            color,
        }
    }

    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    pub fn color(&self) -> RGBColor {
        self.color
    }

    pub fn point_size(&self) -> f32 {
        self.vertices[6]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_packs_position_color_and_size() {
        let point = Point3d::new(1.0, 2.0, 3.0, RGBColor::new(0.0, 1.0, 1.0), 16.0);
        assert_eq!(point.vertices(), &[1.0, 2.0, 3.0, 0.0, 1.0, 1.0, 16.0]);
        assert_eq!(point.point_size(), 16.0);
        assert_eq!(point.color(), RGBColor::new(0.0, 1.0, 1.0));
    }
}
