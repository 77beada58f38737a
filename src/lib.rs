pub mod color;
pub mod error;
pub mod geometry;
pub mod input;
pub mod render_mode;
pub mod renderer;
pub mod settings;
pub mod shape;

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::color::RGBColor;
use crate::error::RenderError;
use crate::geometry::Point2d;
use crate::input::CanvasMouseHandler;
use crate::render_mode::RenderMode;
use crate::renderer::{get_webgl_context, WebGlRenderer};
use crate::settings::Settings;
use crate::shape::{ShapeFactory3d, ShapeMode};

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Canvas shape renderer driven from JavaScript
#[wasm_bindgen]
#[derive(Default)]
pub struct ShapeRenderer {
    renderer: Option<WebGlRenderer>,
    factory: ShapeFactory3d,
    settings: Settings,
    mouse_handler: Option<CanvasMouseHandler>,
}

#[wasm_bindgen]
impl ShapeRenderer {
    /// Create a new ShapeRenderer instance
    #[wasm_bindgen(constructor)]
    pub fn new() -> ShapeRenderer {
        ShapeRenderer::default()
    }

    /// Initialize logging and the WebGL renderer for a canvas
    ///
    /// # Arguments
    /// * `canvas` - Canvas element to render into
    /// * `width` / `height` - Initial viewport dimensions in pixels
    ///
    /// # Returns
    /// * `"init_done"` signal on success
    pub fn init(
        &mut self,
        canvas: &HtmlCanvasElement,
        width: u32,
        height: u32,
    ) -> Result<String, JsValue> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let gl = get_webgl_context(canvas)?;
        self.renderer = Some(WebGlRenderer::new(gl, width, height, self.settings)?);
        Ok("init_done".to_string())
    }

    /// Resize the viewport when the canvas dimensions change
    ///
    /// # Returns
    /// * `"viewport_done"` signal on success
    pub fn set_view_port_dimensions(&mut self, width: u32, height: u32) -> Result<String, JsValue> {
        self.renderer_mut()?.set_view_port_dimensions(width, height);
        Ok("viewport_done".to_string())
    }

    /// Select which shape the next drag produces, by name
    pub fn set_shape(&mut self, name: &str) -> Result<(), JsValue> {
        let shape_mode = ShapeMode::from_name(name)?;
        self.renderer_mut()?.set_shape_mode(shape_mode);
        Ok(())
    }

    pub fn shape(&self) -> Result<String, JsValue> {
        Ok(self.renderer_ref()?.shape_mode().name().to_string())
    }

    /// Select the topology for ad-hoc vertices, by name
    pub fn set_render_mode(&mut self, name: &str) -> Result<(), JsValue> {
        let render_mode = RenderMode::from_name(name)?;
        self.renderer_mut()?.set_render_mode(render_mode);
        Ok(())
    }

    pub fn render_mode(&self) -> Result<String, JsValue> {
        Ok(self.renderer_ref()?.render_mode().name().to_string())
    }

    /// Set the foreground color by name
    pub fn set_color(&mut self, name: &str) -> Result<(), JsValue> {
        let color = RGBColor::from_name(name)?;
        self.renderer_mut()?.set_color(color);
        Ok(())
    }

    pub fn set_color_rgb(&mut self, r: f32, g: f32, b: f32) -> Result<(), JsValue> {
        self.renderer_mut()?.set_color(RGBColor::new(r, g, b));
        Ok(())
    }

    /// Set the clear color by name
    pub fn set_background_color(&mut self, name: &str) -> Result<(), JsValue> {
        let color = RGBColor::from_name(name)?;
        self.renderer_mut()?.set_background_color(color);
        Ok(())
    }

    pub fn set_background_color_rgb(&mut self, r: f32, g: f32, b: f32) -> Result<(), JsValue> {
        self.renderer_mut()?
            .set_background_color(RGBColor::new(r, g, b));
        Ok(())
    }

    pub fn set_background_alpha(&mut self, alpha: f32) -> Result<(), JsValue> {
        self.renderer_mut()?.set_background_alpha(alpha);
        Ok(())
    }

    /// Append a vertex at a picked canvas position
    pub fn add_xy_point(&mut self, x: f32, y: f32) -> Result<(), JsValue> {
        self.renderer_mut()?.add_xy_point_to_scene(x, y);
        Ok(())
    }

    /// Append a vertex with an explicit position and color
    pub fn add_xyz_point(
        &mut self,
        x: f32,
        y: f32,
        z: f32,
        r: f32,
        g: f32,
        b: f32,
    ) -> Result<(), JsValue> {
        self.renderer_mut()?.add_xyz_point_to_scene(x, y, z, r, g, b);
        Ok(())
    }

    /// Append vertices in bulk
    ///
    /// # Arguments
    /// * `floats` - Flat array of `[x, y, z, r, g, b]` per vertex
    ///
    /// # Errors
    /// * Returns error if the length is not a multiple of the vertex stride
    pub fn add_xyz_points(&mut self, floats: &[f32]) -> Result<(), JsValue> {
        self.renderer_mut()?.add_xyz_points_to_scene(floats)?;
        Ok(())
    }

    /// Build the active shape from two drag corners and add it to the scene
    ///
    /// # Arguments
    /// * `x1` / `y1` - First corner of the drag
    /// * `x2` / `y2` - Opposite corner of the drag
    ///
    /// # Errors
    /// * Returns error if the active shape mode has a dedicated entry point
    pub fn add_shape(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<(), JsValue> {
        let (shape_mode, color) = {
            let renderer = self.renderer_ref()?;
            (renderer.shape_mode(), renderer.color())
        };
        let shape = self.factory.create_shape(
            Point2d::new(x1, y1),
            Point2d::new(x2, y2),
            shape_mode,
            color,
        )?;
        self.renderer_mut()?.add_shape_to_scene(&shape);
        Ok(())
    }

    /// Add a sized point at an explicit position
    pub fn add_point(
        &mut self,
        x: f32,
        y: f32,
        z: f32,
        point_size: f32,
        r: f32,
        g: f32,
        b: f32,
    ) -> Result<(), JsValue> {
        let point = self
            .factory
            .create_point(x, y, z, Some(RGBColor::new(r, g, b)), Some(point_size));
        self.renderer_mut()?.add_point_to_scene(&point);
        Ok(())
    }

    /// Empty the scene
    ///
    /// # Returns
    /// * `"clear_done"` signal on success
    pub fn remove_all_shapes(&mut self) -> Result<String, JsValue> {
        self.renderer_mut()?.remove_all_shapes();
        Ok("clear_done".to_string())
    }

    /// Draw the scene: one draw call per non-empty topology bucket
    ///
    /// # Returns
    /// * `"draw_done"` signal on success
    pub fn draw(&mut self) -> Result<String, JsValue> {
        self.renderer_mut()?.draw()?;
        Ok("draw_done".to_string())
    }

    /// Forward dragged canvas positions to a JavaScript callback
    ///
    /// # Arguments
    /// * `canvas` - Canvas to listen on
    /// * `callback` - Invoked with `(x, y)` for the press and every held move
    pub fn attach_mouse_handler(
        &mut self,
        canvas: &HtmlCanvasElement,
        callback: js_sys::Function,
    ) -> Result<(), JsValue> {
        let handler = CanvasMouseHandler::attach(canvas, move |x, y| {
            let _ = callback.call2(
                &JsValue::NULL,
                &JsValue::from_f64(x as f64),
                &JsValue::from_f64(y as f64),
            );
        })?;
        self.mouse_handler = Some(handler);
        Ok(())
    }

    /// Stop forwarding mouse positions and remove the canvas listeners
    pub fn detach_mouse_handler(&mut self) {
        self.mouse_handler = None;
    }
}

impl ShapeRenderer {
    fn renderer_ref(&self) -> Result<&WebGlRenderer, RenderError> {
        self.renderer.as_ref().ok_or(RenderError::NotInitialized)
    }

    fn renderer_mut(&mut self) -> Result<&mut WebGlRenderer, RenderError> {
        self.renderer.as_mut().ok_or(RenderError::NotInitialized)
    }
}
