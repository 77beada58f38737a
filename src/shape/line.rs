use crate::color::RGBColor;
use crate::error::RenderError;
use crate::geometry::Point2d;
use crate::render_mode::RenderMode;
use crate::shape::{push_vertex, FLOATS_PER_DYNAMIC_VERTEX};

/// Open-ended polyline. Seeded with a single vertex and grown one vertex at a
/// time, unlike the other shapes which tessellate up front.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    vertices: Vec<f32>,
    color: RGBColor,
    render_mode: RenderMode,
}

impl Line {
    pub fn new(point: Point2d, color: RGBColor) -> Line {
        let mut vertices = Vec::with_capacity(FLOATS_PER_DYNAMIC_VERTEX);
        push_vertex(&mut vertices, point, 0.0, &color);

        Line {
            vertices,
            color,
            render_mode: RenderMode::LineStrip,
        }
    }

    pub fn add_vertex(&mut self, point: Point2d) {
        push_vertex(&mut self.vertices, point, 0.0, &self.color);
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    /// Switches between the line topologies; everything else is rejected
    pub fn set_render_mode(&mut self, render_mode: RenderMode) -> Result<(), RenderError> {
        if !render_mode.is_line_mode() {
            return Err(RenderError::UnsupportedLineRenderMode(render_mode.name()));
        }
        self.render_mode = render_mode;
        Ok(())
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
    fn test_line_starts_with_its_seed_vertex() {
        let line = Line::new(Point2d::new(2.0, 3.0), RGBColor::new(1.0, 0.0, 1.0));
        assert_eq!(line.vertices(), &[2.0, 3.0, 0.0, 1.0, 0.0, 1.0]);
        assert_eq!(line.render_mode(), RenderMode::LineStrip);
    }

    #[test]
    fn test_line_grows_one_vertex_at_a_time() {
        let mut line = Line::new(Point2d::new(0.0, 0.0), RGBColor::new(1.0, 1.0, 0.0));
        line.add_vertex(Point2d::new(1.0, 1.0));
        line.add_vertex(Point2d::new(2.0, 0.0));

        assert_eq!(line.vertices().len(), 3 * FLOATS_PER_DYNAMIC_VERTEX);
        assert_eq!(&line.vertices()[6..12], &[1.0, 1.0, 0.0, 1.0, 1.0, 0.0]);
        assert_eq!(&line.vertices()[12..18], &[2.0, 0.0, 0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_line_accepts_the_line_render_modes() {
        let mut line = Line::new(Point2d::new(0.0, 0.0), RGBColor::new(1.0, 1.0, 1.0));
        for mode in [RenderMode::Lines, RenderMode::LineLoop, RenderMode::LineStrip] {
            match line.set_render_mode(mode) {
                Ok(()) => assert_eq!(line.render_mode(), mode),
                Err(e) => panic!("Expected {} to be accepted, got {}", mode.name(), e),
            }
        }
    }

    #[test]
    fn test_line_rejects_non_line_render_modes() {
        let mut line = Line::new(Point2d::new(0.0, 0.0), RGBColor::new(1.0, 1.0, 1.0));
        match line.set_render_mode(RenderMode::Triangles) {
            Err(e) => assert_eq!(
                e.to_string(),
                "cannot render a line as triangles, please use one of the line render modes"
            ),
            Ok(()) => panic!("Expected a rejected render mode"),
        }
        assert_eq!(line.render_mode(), RenderMode::LineStrip);
    }
}
