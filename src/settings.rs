use crate::color::RGBColor;
use crate::render_mode::RenderMode;
use crate::shape::ShapeMode;

/// Tessellation density for the curved shapes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Precision {
    Low,
    High,
}

impl Precision {
    /// Number of boundary segments used when tessellating an ellipse
    pub fn ellipse_segments(self) -> usize {
        match self {
            Precision::Low => 36,
            Precision::High => 402,
        }
    }
}

/// Default knobs shared by the renderer and the shape factories
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    pub default_color: RGBColor,
    pub default_background_color: RGBColor,
    pub default_background_alpha: f32,
    pub default_point_size: f32,
    pub default_render_mode: RenderMode,
    pub default_shape_mode: ShapeMode,
    pub default_precision: Precision,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            default_color: RGBColor::new(0.0, 0.0, 0.0),
            default_background_color: RGBColor::new(0.9, 0.9, 0.9),
            default_background_alpha: 1.0,
            default_point_size: 10.0,
            default_render_mode: RenderMode::Points,
            default_shape_mode: ShapeMode::Points,
            default_precision: Precision::High,
        }
    }
}
