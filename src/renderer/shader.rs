use web_sys::{WebGl2RenderingContext, WebGlProgram, WebGlShader};

use crate::error::RenderError;

// WebGL constants
pub const COLOR_BUFFER_BIT: u32 = WebGl2RenderingContext::COLOR_BUFFER_BIT;
pub const ARRAY_BUFFER: u32 = WebGl2RenderingContext::ARRAY_BUFFER;
pub const STATIC_DRAW: u32 = WebGl2RenderingContext::STATIC_DRAW;
pub const FLOAT: u32 = WebGl2RenderingContext::FLOAT;
pub const VERTEX_SHADER: u32 = WebGl2RenderingContext::VERTEX_SHADER;
pub const FRAGMENT_SHADER: u32 = WebGl2RenderingContext::FRAGMENT_SHADER;

// One program draws every topology. Positions are already in clip space and
// the color rides on each vertex; point_size only matters for the points
// topology and is pinned to a constant for everything else.
pub const SHAPE_VERTEX_SHADER: &str = r#"#version 300 es
in vec3 position;
in vec3 color;
in float point_size;
out lowp vec3 vColor;
void main() {
    gl_Position = vec4(position, 1.0);
    gl_PointSize = point_size;
    vColor = color;
}
"#;

pub const SHAPE_FRAGMENT_SHADER: &str = r#"#version 300 es
precision lowp float;
in lowp vec3 vColor;
out vec4 fragColor;
void main() {
    fragColor = vec4(vColor, 1.0);
}
"#;

// Attribute locations are fixed before linking, so no lookups are needed at
// draw time.
pub const POSITION_ATTRIB_LOCATION: u32 = 0;
pub const COLOR_ATTRIB_LOCATION: u32 = 1;
pub const POINT_SIZE_ATTRIB_LOCATION: u32 = 2;

const ATTRIBUTE_BINDINGS: [(&str, u32); 3] = [
    ("position", POSITION_ATTRIB_LOCATION),
    ("color", COLOR_ATTRIB_LOCATION),
    ("point_size", POINT_SIZE_ATTRIB_LOCATION),
];

/// Compile and link the shape program
pub fn compile_shape_program(gl: &WebGl2RenderingContext) -> Result<WebGlProgram, RenderError> {
    let vert_shader = compile_shader(gl, VERTEX_SHADER, SHAPE_VERTEX_SHADER)?;
    let frag_shader = compile_shader(gl, FRAGMENT_SHADER, SHAPE_FRAGMENT_SHADER)?;

    let program = gl
        .create_program()
        .ok_or(RenderError::ResourceAllocationFailed("shader program"))?;

    gl.attach_shader(&program, &vert_shader);
    gl.attach_shader(&program, &frag_shader);

    for (name, location) in ATTRIBUTE_BINDINGS {
        gl.bind_attrib_location(&program, location, name);
    }

    gl.link_program(&program);

    if !gl
        .get_program_parameter(&program, WebGl2RenderingContext::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        let log = gl
            .get_program_info_log(&program)
            .unwrap_or_else(|| "Unknown error".to_string());
        return Err(RenderError::ShaderLinkFailed { log });
    }

    gl.delete_shader(Some(&vert_shader));
    gl.delete_shader(Some(&frag_shader));

    Ok(program)
}

/// Compile a single shader
fn compile_shader(
    gl: &WebGl2RenderingContext,
    shader_type: u32,
    source: &str,
) -> Result<WebGlShader, RenderError> {
    let kind = if shader_type == VERTEX_SHADER {
        "vertex"
    } else {
        "fragment"
    };

    let shader = gl
        .create_shader(shader_type)
        .ok_or(RenderError::ResourceAllocationFailed("shader object"))?;

    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if !gl
        .get_shader_parameter(&shader, WebGl2RenderingContext::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        let log = gl
            .get_shader_info_log(&shader)
            .unwrap_or_else(|| "Unknown error".to_string());
        gl.delete_shader(Some(&shader));
        return Err(RenderError::ShaderCompilationFailed { kind, log });
    }

    Ok(shader)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_bound_attribute_is_declared_in_the_vertex_shader() {
        for (name, _) in ATTRIBUTE_BINDINGS {
            assert!(
                SHAPE_VERTEX_SHADER.contains(&format!(" {};", name)),
                "attribute {} missing from the vertex shader",
                name
            );
        }
    }
}
