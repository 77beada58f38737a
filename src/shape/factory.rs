use crate::color::RGBColor;
use crate::error::RenderError;
use crate::geometry::Point2d;
use crate::settings::{Precision, Settings};
use crate::shape::{
    Box3d, Ellipse, Hexagon, Line, Octogon, Point3d, Rectangle, Shape, ShapeMode, Triangle,
};

/// Builds the planar shapes from two picked corner points.
///
/// Points, lines and boxes have dedicated entry points and are refused here
/// with an error naming the right one.
#[derive(Clone, Debug, Default)]
pub struct ShapeFactory {
    pub settings: Settings,
}

impl ShapeFactory {
    pub fn new() -> ShapeFactory {
        ShapeFactory::default()
    }

    pub fn create_shape(
        &self,
        point1: Point2d,
        point2: Point2d,
        shape_mode: ShapeMode,
        color: RGBColor,
    ) -> Result<Shape, RenderError> {
        tessellate(point1, point2, shape_mode, color, self.settings.default_precision)
    }

    pub fn create_line(&self, point: Point2d, color: RGBColor) -> Line {
        Line::new(point, color)
    }
}

/// The planar factory plus the 3d-only shapes: boxes and sized points.
#[derive(Clone, Debug, Default)]
pub struct ShapeFactory3d {
    pub settings: Settings,
}

impl ShapeFactory3d {
    pub fn new() -> ShapeFactory3d {
        ShapeFactory3d::default()
    }

    pub fn create_shape(
        &self,
        point1: Point2d,
        point2: Point2d,
        shape_mode: ShapeMode,
        color: RGBColor,
    ) -> Result<Shape, RenderError> {
        match shape_mode {
            ShapeMode::Box => Ok(Shape::Box3d(Box3d::new(point1, point2, color))),
            _ => tessellate(point1, point2, shape_mode, color, self.settings.default_precision),
        }
    }

    pub fn create_line(&self, point: Point2d, color: RGBColor) -> Line {
        Line::new(point, color)
    }

    /// Missing color or size fall back to the configured defaults
    pub fn create_point(
        &self,
        x: f32,
        y: f32,
        z: f32,
        color: Option<RGBColor>,
        point_size: Option<f32>,
    ) -> Point3d {
        Point3d::new(
            x,
            y,
            z,
            color.unwrap_or(self.settings.default_color),
            point_size.unwrap_or(self.settings.default_point_size),
        )
    }
}

fn tessellate(
    point1: Point2d,
    point2: Point2d,
    shape_mode: ShapeMode,
    color: RGBColor,
    precision: Precision,
) -> Result<Shape, RenderError> {
    match shape_mode {
        ShapeMode::Points => Err(RenderError::UnsupportedShapeOperation {
            what: "point",
            instead: "create_point",
        }),
        ShapeMode::Lines => Err(RenderError::UnsupportedShapeOperation {
            what: "line",
            instead: "create_line",
        }),
        ShapeMode::Box => Err(RenderError::UnsupportedShapeOperation {
            what: "box",
            instead: "ShapeFactory3d",
        }),
        ShapeMode::Ellipses => Ok(Shape::Ellipse(Ellipse::new(point1, point2, color, precision))),
        ShapeMode::Triangles => Ok(Shape::Triangle(Triangle::new(point1, point2, color))),
        ShapeMode::Rectangles => Ok(Shape::Rectangle(Rectangle::new(point1, point2, color))),
        ShapeMode::Hexagons => Ok(Shape::Hexagon(Hexagon::new(point1, point2, color))),
        ShapeMode::Octogons => Ok(Shape::Octogon(Octogon::new(point1, point2, color))),
    }
}
