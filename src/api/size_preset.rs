use serde::{Deserialize, Serialize};

use crate::core::Viewport;

/// Named gauge size.
///
/// Only `"small"` selects the compact layout; any other name, including a
/// missing one, selects the default layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizePresetKind {
    Small,
    #[default]
    Default,
}

impl SizePresetKind {
    #[must_use]
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("small") => Self::Small,
            _ => Self::Default,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Default => "default",
        }
    }

    #[must_use]
    pub fn preset(self) -> SizePreset {
        match self {
            Self::Small => SizePreset::SMALL,
            Self::Default => SizePreset::DEFAULT,
        }
    }
}

/// Pixel layout constants for one gauge size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizePreset {
    pub kind: SizePresetKind,
    pub div_width: u32,
    pub div_height: u32,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub small_tick_offset: f64,
    pub big_tick_offset: f64,
    /// Readout baseline as a fraction of `div_height`.
    pub text_coeff: f64,
    pub label_font_px: f64,
    /// `None` leaves the readout size to the host stylesheet.
    pub readout_font_px: Option<f64>,
    pub warning_font_px: Option<f64>,
    /// Distance of the warning baseline from the bottom edge.
    pub warning_bottom_margin: f64,
    /// Area of the triangular pointer symbol, in square pixels.
    pub pointer_area: f64,
    /// Gap between the outer radius and the pointer center.
    pub pointer_offset: f64,
}

impl SizePreset {
    pub const SMALL: Self = Self {
        kind: SizePresetKind::Small,
        div_width: 245,
        div_height: 260,
        inner_radius: 85.0,
        outer_radius: 100.0,
        small_tick_offset: 30.0,
        big_tick_offset: 32.0,
        text_coeff: 0.85,
        label_font_px: 12.0,
        readout_font_px: Some(30.0),
        warning_font_px: Some(18.0),
        warning_bottom_margin: 10.0,
        pointer_area: 100.0,
        pointer_offset: 10.0,
    };

    pub const DEFAULT: Self = Self {
        kind: SizePresetKind::Default,
        div_width: 350,
        div_height: 350,
        inner_radius: 130.0,
        outer_radius: 145.0,
        small_tick_offset: 43.0,
        big_tick_offset: 45.0,
        text_coeff: 0.6,
        label_font_px: 14.5,
        readout_font_px: None,
        warning_font_px: None,
        warning_bottom_margin: 30.0,
        pointer_area: 200.0,
        pointer_offset: 13.0,
    };

    #[must_use]
    pub fn from_name(name: Option<&str>) -> Self {
        SizePresetKind::from_name(name).preset()
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        Viewport::new(self.div_width, self.div_height)
    }

    /// Radius of the circle the pointer travels on.
    #[must_use]
    pub fn pointer_radius(self) -> f64 {
        self.outer_radius + self.pointer_offset
    }
}

impl Default for SizePreset {
    fn default() -> Self {
        Self::DEFAULT
    }
}
