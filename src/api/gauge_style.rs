use serde::{Deserialize, Serialize};

use crate::error::{GaugeError, GaugeResult};
use crate::render::Color;

/// Colors and stroke widths for the gauge's non-gradient parts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeStyle {
    pub axis_color: Color,
    pub big_tick_color: Color,
    pub big_tick_width: f64,
    /// Length of each big tick along both axes of its rotated frame.
    pub big_tick_length: f64,
    pub small_tick_color: Color,
    pub small_tick_width: f64,
    pub small_tick_length: f64,
    pub pointer_color: Color,
    pub label_color: Color,
    pub readout_color: Color,
    pub warning_color: Color,
}

impl Default for GaugeStyle {
    fn default() -> Self {
        Self {
            axis_color: Color::BLACK,
            big_tick_color: Color::BLACK,
            big_tick_width: 2.0,
            big_tick_length: 6.0,
            small_tick_color: Color::from_rgb8(0x11, 0x11, 0x11),
            small_tick_width: 1.0,
            small_tick_length: 4.0,
            pointer_color: Color::BLACK,
            label_color: Color::BLACK,
            readout_color: Color::BLACK,
            warning_color: Color::BLACK,
        }
    }
}

impl GaugeStyle {
    pub fn validate(&self) -> GaugeResult<()> {
        for color in [
            self.axis_color,
            self.big_tick_color,
            self.small_tick_color,
            self.pointer_color,
            self.label_color,
            self.readout_color,
            self.warning_color,
        ] {
            color.validate()?;
        }
        for (name, width) in [
            ("big_tick_width", self.big_tick_width),
            ("big_tick_length", self.big_tick_length),
            ("small_tick_width", self.small_tick_width),
            ("small_tick_length", self.small_tick_length),
        ] {
            if !width.is_finite() || width <= 0.0 {
                return Err(GaugeError::InvalidData(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }
        Ok(())
    }
}
