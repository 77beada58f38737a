//! Shape vocabulary and the tessellated shape variants the scene stores.

pub mod box3d;
pub mod ellipse;
pub mod factory;
pub mod hexagon;
pub mod line;
pub mod octogon;
pub mod point3d;
pub mod rectangle;
pub mod triangle;

pub use box3d::Box3d;
pub use ellipse::Ellipse;
pub use factory::{ShapeFactory, ShapeFactory3d};
pub use hexagon::Hexagon;
pub use line::Line;
pub use octogon::Octogon;
pub use point3d::Point3d;
pub use rectangle::Rectangle;
pub use triangle::Triangle;

use crate::color::RGBColor;
use crate::error::RenderError;
use crate::geometry::Point2d;
use crate::render_mode::RenderMode;

/// Floats per vertex for every shape except points: x, y, z, r, g, b
pub const FLOATS_PER_DYNAMIC_VERTEX: usize = 6;
/// Floats per point vertex: x, y, z, r, g, b, point size
pub const FLOATS_PER_POINT_VERTEX: usize = 7;

/// Which shape the next canvas drag produces
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeMode {
    Points,
    Lines,
    Ellipses,
    Triangles,
    Rectangles,
    Hexagons,
    Octogons,
    Box,
}

impl ShapeMode {
    pub fn from_name(name: &str) -> Result<ShapeMode, RenderError> {
        match name {
            "points" => Ok(ShapeMode::Points),
            "lines" => Ok(ShapeMode::Lines),
            "ellipses" => Ok(ShapeMode::Ellipses),
            "triangles" => Ok(ShapeMode::Triangles),
            "rectangles" => Ok(ShapeMode::Rectangles),
            "hexagons" => Ok(ShapeMode::Hexagons),
            "octogons" => Ok(ShapeMode::Octogons),
            "box" => Ok(ShapeMode::Box),
            other => Err(RenderError::UnrecognizedShapeMode(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShapeMode::Points => "points",
            ShapeMode::Lines => "lines",
            ShapeMode::Ellipses => "ellipses",
            ShapeMode::Triangles => "triangles",
            ShapeMode::Rectangles => "rectangles",
            ShapeMode::Hexagons => "hexagons",
            ShapeMode::Octogons => "octogons",
            ShapeMode::Box => "box",
        }
    }
}

/// A tessellated shape ready to be appended to the scene
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Triangle(Triangle),
    Rectangle(Rectangle),
    Hexagon(Hexagon),
    Octogon(Octogon),
    Ellipse(Ellipse),
    Line(Line),
    Box3d(Box3d),
    Point(Point3d),
}

impl Shape {
    /// Packed vertex data, laid out per `vertex_stride`
    pub fn vertices(&self) -> &[f32] {
        match self {
            Shape::Triangle(shape) => shape.vertices(),
            Shape::Rectangle(shape) => shape.vertices(),
            Shape::Hexagon(shape) => shape.vertices(),
            Shape::Octogon(shape) => shape.vertices(),
            Shape::Ellipse(shape) => shape.vertices(),
            Shape::Line(shape) => shape.vertices(),
            Shape::Box3d(shape) => shape.vertices(),
            Shape::Point(shape) => shape.vertices(),
        }
    }

    pub fn vertex_stride(&self) -> usize {
        match self {
            Shape::Point(_) => FLOATS_PER_POINT_VERTEX,
            _ => FLOATS_PER_DYNAMIC_VERTEX,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices().len() / self.vertex_stride()
    }

    /// Primitive topology this shape is drawn with
    pub fn render_mode(&self) -> RenderMode {
        match self {
            Shape::Line(shape) => shape.render_mode(),
            Shape::Point(_) => RenderMode::Points,
            _ => RenderMode::Triangles,
        }
    }

    pub fn color(&self) -> RGBColor {
        match self {
            Shape::Triangle(shape) => shape.color(),
            Shape::Rectangle(shape) => shape.color(),
            Shape::Hexagon(shape) => shape.color(),
            Shape::Octogon(shape) => shape.color(),
            Shape::Ellipse(shape) => shape.color(),
            Shape::Line(shape) => shape.color(),
            Shape::Box3d(shape) => shape.color(),
            Shape::Point(shape) => shape.color(),
        }
    }
}

// Appends one colored vertex in the 6-float layout.
pub(crate) fn push_vertex(out: &mut Vec<f32>, point: Point2d, z: f32, color: &RGBColor) {
    out.push(point.x);
    out.push(point.y);
    out.push(z);
    out.push(color.red);
    out.push(color.green);
    out.push(color.blue);
}

// Fills a convex outline with a triangle fan anchored at the first outline
// point. An outline of n points yields n - 2 triangles.
pub(crate) fn push_convex_fan(out: &mut Vec<f32>, outline: &[Point2d], z: f32, color: &RGBColor) {
    for i in 1..outline.len() - 1 {
        push_vertex(out, outline[0], z, color);
        push_vertex(out, outline[i], z, color);
        push_vertex(out, outline[i + 1], z, color);
    }
}
