use web_sys::WebGl2RenderingContext;

use crate::error::RenderError;

/// The primitive topologies a vertex bucket can be drawn with.
///
/// Declared in GL constant order so the discriminant doubles as the bucket
/// index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    Points,
    Lines,
    LineLoop,
    LineStrip,
    Triangles,
    TriangleStrip,
    TriangleFan,
}

/// Every render mode, in bucket order
pub const RENDER_MODES: [RenderMode; 7] = [
    RenderMode::Points,
    RenderMode::Lines,
    RenderMode::LineLoop,
    RenderMode::LineStrip,
    RenderMode::Triangles,
    RenderMode::TriangleStrip,
    RenderMode::TriangleFan,
];

impl RenderMode {
    /// Parse one of the render-mode names: points, lines, lineStrip,
    /// lineLoop, triangles, triangleStrip, triangleFan
    pub fn from_name(name: &str) -> Result<RenderMode, RenderError> {
        let mode = match name {
            "points" => RenderMode::Points,
            "lines" => RenderMode::Lines,
            "lineLoop" => RenderMode::LineLoop,
            "lineStrip" => RenderMode::LineStrip,
            "triangles" => RenderMode::Triangles,
            "triangleStrip" => RenderMode::TriangleStrip,
            "triangleFan" => RenderMode::TriangleFan,
            other => return Err(RenderError::UnrecognizedRenderMode(other.to_string())),
        };
        Ok(mode)
    }

    pub fn name(self) -> &'static str {
        match self {
            RenderMode::Points => "points",
            RenderMode::Lines => "lines",
            RenderMode::LineLoop => "lineLoop",
            RenderMode::LineStrip => "lineStrip",
            RenderMode::Triangles => "triangles",
            RenderMode::TriangleStrip => "triangleStrip",
            RenderMode::TriangleFan => "triangleFan",
        }
    }

    /// The GL constant passed to `draw_arrays`
    pub fn gl_mode(self) -> u32 {
        match self {
            RenderMode::Points => WebGl2RenderingContext::POINTS,
            RenderMode::Lines => WebGl2RenderingContext::LINES,
            RenderMode::LineLoop => WebGl2RenderingContext::LINE_LOOP,
            RenderMode::LineStrip => WebGl2RenderingContext::LINE_STRIP,
            RenderMode::Triangles => WebGl2RenderingContext::TRIANGLES,
            RenderMode::TriangleStrip => WebGl2RenderingContext::TRIANGLE_STRIP,
            RenderMode::TriangleFan => WebGl2RenderingContext::TRIANGLE_FAN,
        }
    }

    /// True for the three line topologies
    pub fn is_line_mode(self) -> bool {
        matches!(
            self,
            RenderMode::Lines | RenderMode::LineLoop | RenderMode::LineStrip
        )
    }
}
