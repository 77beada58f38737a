use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors produced while building shapes or driving the renderer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// A shape-mode name outside the supported vocabulary
    #[error("cannot recognize shape type {0}")]
    UnrecognizedShapeMode(String),

    /// A render-mode name outside the supported vocabulary
    #[error("cannot recognize render mode {0}")]
    UnrecognizedRenderMode(String),

    /// A color name outside the supported vocabulary
    #[error("cannot recognize color {0}")]
    UnrecognizedColor(String),

    /// The generic factory path was asked for a shape that has a dedicated
    /// entry point
    #[error("cannot create a {what} with this method, please use {instead}")]
    UnsupportedShapeOperation {
        what: &'static str,
        instead: &'static str,
    },

    /// A topology outside the line family was requested for a line shape
    #[error("cannot render a line as {0}, please use one of the line render modes")]
    UnsupportedLineRenderMode(&'static str),

    /// Bulk vertex data whose length does not divide into whole vertices
    #[error("vertex data of length {length} is not a multiple of the vertex stride {stride}")]
    MalformedVertexData { length: usize, stride: usize },

    /// Shader source rejected by the driver; fatal at renderer construction
    #[error("failed to compile {kind} shader: {log}")]
    ShaderCompilationFailed { kind: &'static str, log: String },

    /// Program link rejected by the driver; fatal at renderer construction
    #[error("failed to link shader program: {log}")]
    ShaderLinkFailed { log: String },

    /// The browser declined to hand out an object we asked for
    #[error("failed to create {0}")]
    ResourceAllocationFailed(&'static str),

    #[error("Renderer not initialized. Call init() first.")]
    NotInitialized,
}

impl From<RenderError> for JsValue {
    fn from(err: RenderError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_shape_mode_message() {
        let err = RenderError::UnrecognizedShapeMode("notShape".to_string());
        assert_eq!(err.to_string(), "cannot recognize shape type notShape");
    }

    #[test]
    fn test_dedicated_entry_point_messages() {
        let point = RenderError::UnsupportedShapeOperation {
            what: "point",
            instead: "create_point",
        };
        assert_eq!(
            point.to_string(),
            "cannot create a point with this method, please use create_point"
        );

        let line = RenderError::UnsupportedShapeOperation {
            what: "line",
            instead: "create_line",
        };
        assert_eq!(
            line.to_string(),
            "cannot create a line with this method, please use create_line"
        );
    }

    #[test]
    fn test_malformed_vertex_data_message() {
        let err = RenderError::MalformedVertexData {
            length: 7,
            stride: 6,
        };
        assert_eq!(
            err.to_string(),
            "vertex data of length 7 is not a multiple of the vertex stride 6"
        );
    }

    #[test]
    fn test_not_initialized_message() {
        assert_eq!(
            RenderError::NotInitialized.to_string(),
            "Renderer not initialized. Call init() first."
        );
    }
}
