use crate::error::RenderError;

/// An RGB color with channels in the 0.0..=1.0 range
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RGBColor {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl RGBColor {
    pub const fn new(red: f32, green: f32, blue: f32) -> RGBColor {
        RGBColor { red, green, blue }
    }

    /// Look up one of the named colors: red, orange, yellow, green, cyan,
    /// blue, indigo, fuchsia, white
    pub fn from_name(name: &str) -> Result<RGBColor, RenderError> {
        let color = match name {
            "red" => RGBColor::new(1.0, 0.0, 0.0),
            "orange" => RGBColor::new(1.0, 0.65, 0.0),
            "yellow" => RGBColor::new(1.0, 1.0, 0.0),
            "green" => RGBColor::new(0.0, 1.0, 0.0),
            "cyan" => RGBColor::new(0.0, 1.0, 1.0),
            "blue" => RGBColor::new(0.0, 0.0, 1.0),
            "indigo" => RGBColor::new(0.29, 0.0, 0.51),
            "fuchsia" => RGBColor::new(1.0, 0.0, 1.0),
            "white" => RGBColor::new(1.0, 1.0, 1.0),
            other => return Err(RenderError::UnrecognizedColor(other.to_string())),
        };
        Ok(color)
    }
}
