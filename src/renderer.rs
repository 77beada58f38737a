//! WebGL renderer: accumulates scene vertices per topology and draws each
//! non-empty bucket with a single draw call.

pub mod buffer;
pub mod shader;

use js_sys::Float32Array;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext, WebGlProgram};

use crate::color::RGBColor;
use crate::error::RenderError;
use crate::render_mode::RenderMode;
use crate::renderer::buffer::{GlBuffers, SceneBuckets, VertexBucket};
use crate::renderer::shader::{
    compile_shape_program, ARRAY_BUFFER, COLOR_ATTRIB_LOCATION, COLOR_BUFFER_BIT, FLOAT,
    POINT_SIZE_ATTRIB_LOCATION, POSITION_ATTRIB_LOCATION, STATIC_DRAW,
};
use crate::settings::Settings;
use crate::shape::{Point3d, Shape, ShapeMode, FLOATS_PER_POINT_VERTEX};

/// Pull a WebGL2 context out of a canvas
pub fn get_webgl_context(
    canvas: &HtmlCanvasElement,
) -> Result<WebGl2RenderingContext, RenderError> {
    let context = canvas
        .get_context("webgl2")
        .ok()
        .flatten()
        .ok_or(RenderError::ResourceAllocationFailed("WebGL2 context"))?;

    context
        .dyn_into::<WebGl2RenderingContext>()
        .map_err(|_| RenderError::ResourceAllocationFailed("WebGL2 context"))
}

/// Scene renderer for one canvas
pub struct WebGlRenderer {
    gl: WebGl2RenderingContext,
    program: WebGlProgram,
    buckets: SceneBuckets,
    gl_buffers: GlBuffers,
    settings: Settings,
    color: RGBColor,
    background_color: RGBColor,
    background_alpha: f32,
    shape_mode: ShapeMode,
    render_mode: RenderMode,
    width: u32,
    height: u32,
}

impl WebGlRenderer {
    /// Compile the shape program and set up the initial viewport
    pub fn new(
        gl: WebGl2RenderingContext,
        width: u32,
        height: u32,
        settings: Settings,
    ) -> Result<WebGlRenderer, RenderError> {
        let program = compile_shape_program(&gl)?;
        gl.use_program(Some(&program));
        gl.viewport(0, 0, width as i32, height as i32);

        Ok(WebGlRenderer {
            color: settings.default_color,
            background_color: settings.default_background_color,
            background_alpha: settings.default_background_alpha,
            shape_mode: settings.default_shape_mode,
            render_mode: settings.default_render_mode,
            gl,
            program,
            buckets: SceneBuckets::new(),
            gl_buffers: GlBuffers::new(),
            settings,
            width,
            height,
        })
    }

    pub fn set_view_port_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.gl.viewport(0, 0, width as i32, height as i32);
        log::info!("viewport resized to {}x{}", width, height);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn color(&self) -> RGBColor {
        self.color
    }

    pub fn set_color(&mut self, color: RGBColor) {
        self.color = color;
    }

    pub fn background_color(&self) -> RGBColor {
        self.background_color
    }

    pub fn set_background_color(&mut self, color: RGBColor) {
        self.background_color = color;
    }

    pub fn background_alpha(&self) -> f32 {
        self.background_alpha
    }

    pub fn set_background_alpha(&mut self, alpha: f32) {
        self.background_alpha = alpha;
    }

    pub fn shape_mode(&self) -> ShapeMode {
        self.shape_mode
    }

    pub fn set_shape_mode(&mut self, shape_mode: ShapeMode) {
        self.shape_mode = shape_mode;
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    /// The topology ad-hoc vertices are appended with
    pub fn set_render_mode(&mut self, render_mode: RenderMode) {
        self.render_mode = render_mode;
    }

    /// Appends a vertex at the picked canvas position, using the current
    /// foreground color and the active topology
    pub fn add_xy_point_to_scene(&mut self, x: f32, y: f32) {
        self.buckets.add_vertex(
            self.render_mode,
            x,
            y,
            0.0,
            self.color,
            self.settings.default_point_size,
        );
    }

    /// Appends a vertex with an explicit position and color
    pub fn add_xyz_point_to_scene(&mut self, x: f32, y: f32, z: f32, r: f32, g: f32, b: f32) {
        self.buckets.add_vertex(
            self.render_mode,
            x,
            y,
            z,
            RGBColor::new(r, g, b),
            self.settings.default_point_size,
        );
    }

    /// Bulk append of `[x, y, z, r, g, b]` vertices to the active topology
    pub fn add_xyz_points_to_scene(&mut self, floats: &[f32]) -> Result<(), RenderError> {
        self.buckets
            .add_packed_vertices(self.render_mode, floats, self.settings.default_point_size)
    }

    pub fn add_shape_to_scene(&mut self, shape: &Shape) {
        self.buckets.add_shape(shape);
    }

    pub fn add_shapes_to_scene(&mut self, shapes: &[Shape]) {
        for shape in shapes {
            self.buckets.add_shape(shape);
        }
    }

    pub fn add_point_to_scene(&mut self, point: &Point3d) {
        self.buckets.add_point(point);
    }

    pub fn remove_all_shapes(&mut self) {
        self.buckets.clear();
    }

    /// The non-empty buckets, in the order they will be drawn
    pub fn batches(&self) -> impl Iterator<Item = &VertexBucket> {
        self.buckets.batches()
    }

    /// Clears the canvas and issues one draw call per non-empty bucket
    pub fn draw(&mut self) -> Result<(), RenderError> {
        let gl = &self.gl;
        gl.use_program(Some(&self.program));
        gl.clear_color(
            self.background_color.red,
            self.background_color.green,
            self.background_color.blue,
            self.background_alpha,
        );
        gl.clear(COLOR_BUFFER_BIT);

        let mut draw_calls = 0;
        for bucket in self.buckets.batches() {
            let buffer = self.gl_buffers.get_or_create(gl, bucket.render_mode())?;
            gl.bind_buffer(ARRAY_BUFFER, Some(buffer));
            unsafe {
                let array = Float32Array::view(bucket.vertices());
                gl.buffer_data_with_array_buffer_view(ARRAY_BUFFER, &array, STATIC_DRAW);
            }

            let stride_bytes = (bucket.vertex_stride() * std::mem::size_of::<f32>()) as i32;
            gl.enable_vertex_attrib_array(POSITION_ATTRIB_LOCATION);
            gl.vertex_attrib_pointer_with_i32(
                POSITION_ATTRIB_LOCATION,
                3,
                FLOAT,
                false,
                stride_bytes,
                0,
            );
            gl.enable_vertex_attrib_array(COLOR_ATTRIB_LOCATION);
            gl.vertex_attrib_pointer_with_i32(
                COLOR_ATTRIB_LOCATION,
                3,
                FLOAT,
                false,
                stride_bytes,
                12,
            );

            // Only the points bucket carries a per-vertex size; everywhere
            // else the attribute is pinned to the default constant
            if bucket.vertex_stride() == FLOATS_PER_POINT_VERTEX {
                gl.enable_vertex_attrib_array(POINT_SIZE_ATTRIB_LOCATION);
                gl.vertex_attrib_pointer_with_i32(
                    POINT_SIZE_ATTRIB_LOCATION,
                    1,
                    FLOAT,
                    false,
                    stride_bytes,
                    24,
                );
            } else {
                gl.disable_vertex_attrib_array(POINT_SIZE_ATTRIB_LOCATION);
                gl.vertex_attrib1f(POINT_SIZE_ATTRIB_LOCATION, self.settings.default_point_size);
            }

            gl.draw_arrays(
                bucket.render_mode().gl_mode(),
                0,
                bucket.vertex_count() as i32,
            );
            draw_calls += 1;
        }

        log::debug!("drew {} batches", draw_calls);
        Ok(())
    }
}
