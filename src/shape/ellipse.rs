use std::f32::consts::TAU;

use crate::color::RGBColor;
use crate::geometry::{BoundingRectangle, Point2d};
use crate::settings::Precision;
use crate::shape::{push_vertex, FLOATS_PER_DYNAMIC_VERTEX};

/// Ellipse inscribed in the bounding rectangle, tessellated as a fan of
/// triangles around the center. The segment count comes from the requested
/// precision.
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipse {
    vertices: Vec<f32>,
    color: RGBColor,
}

impl Ellipse {
    pub fn new(point1: Point2d, point2: Point2d, color: RGBColor, precision: Precision) -> Ellipse {
        let rect = BoundingRectangle::new(point1, point2);
        let center = rect.center();
        let horizontal_radius = rect.width() / 2.0;
        let vertical_radius = rect.height() / 2.0;
        let segments = precision.ellipse_segments();

        let mut vertices = Vec::with_capacity(segments * 3 * FLOATS_PER_DYNAMIC_VERTEX);
        for i in 0..segments {
            let start = TAU * i as f32 / segments as f32;
            let end = TAU * (i + 1) as f32 / segments as f32;
            push_vertex(&mut vertices, center, 0.0, &color);
            push_vertex(
                &mut vertices,
                boundary_point(center, horizontal_radius, vertical_radius, start),
                0.0,
                &color,
            );
            push_vertex(
                &mut vertices,
                boundary_point(center, horizontal_radius, vertical_radius, end),
                0.0,
                &color,
            );
        }

        Ellipse { vertices, color }
    }

    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    pub fn color(&self) -> RGBColor {
        self.color
    }
}

fn boundary_point(
    center: Point2d,
    horizontal_radius: f32,
    vertical_radius: f32,
    angle: f32,
) -> Point2d {
    Point2d::new(
        center.x + horizontal_radius * angle.cos(),
        center.y + vertical_radius * angle.sin(),
    )
}
