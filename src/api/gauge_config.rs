use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::core::{GaugeScale, integer_part, parse_int_lenient};
use crate::error::{GaugeError, GaugeResult};

use super::{ColorPalette, ColorPaletteKind, GaugeStyle, SizePreset, SizePresetKind};

/// Unit text used when the caller has no unit to show.
pub const BLANK_UNIT: &str = " ";

/// Merged, immutable description of one gauge.
///
/// Range and current value are whole numbers, or NaN when the raw input was
/// not numeric. `min_val <= max_val` is assumed and never checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeConfig {
    pub min_val: f64,
    pub max_val: f64,
    pub current_val: f64,
    #[serde(default)]
    pub size: SizePreset,
    #[serde(default)]
    pub palette: ColorPalette,
    /// Readout suffix, already carrying its leading separator space.
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default)]
    pub sensor_type: Option<String>,
    #[serde(default)]
    pub style: GaugeStyle,
}

impl GaugeConfig {
    /// Creates a default-size autumn gauge with a blank unit.
    ///
    /// Inputs are truncated to integers; non-finite inputs become NaN.
    #[must_use]
    pub fn new(min_val: f64, max_val: f64, current_val: f64) -> Self {
        Self {
            min_val: integer_part(min_val),
            max_val: integer_part(max_val),
            current_val: integer_part(current_val),
            size: SizePreset::default(),
            palette: ColorPalette::default(),
            unit: default_unit(),
            sensor_type: None,
            style: GaugeStyle::default(),
        }
    }

    #[must_use]
    pub fn with_size(mut self, size: SizePresetKind) -> Self {
        self.size = size.preset();
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: ColorPaletteKind) -> Self {
        self.palette = palette.palette();
        self
    }

    /// Sets the unit from a raw field; see [`normalize_unit`].
    #[must_use]
    pub fn with_unit(mut self, unit: Option<&str>) -> Self {
        self.unit = normalize_unit(unit);
        self
    }

    #[must_use]
    pub fn with_sensor_type(mut self, sensor_type: impl Into<String>) -> Self {
        self.sensor_type = Some(sensor_type.into());
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: GaugeStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn scale(&self) -> GaugeScale {
        GaugeScale::new(self.min_val, self.max_val)
    }

    #[must_use]
    pub fn is_small(&self) -> bool {
        self.size.kind == SizePresetKind::Small
    }

    /// Names of the numeric fields that did not parse.
    #[must_use]
    pub fn invalid_inputs(&self) -> SmallVec<[&'static str; 3]> {
        [
            ("min_val", self.min_val),
            ("max_val", self.max_val),
            ("current_val", self.current_val),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_nan())
        .map(|(field, _)| field)
        .collect()
    }

    /// Strict check for hosts that prefer an error over NaN-derived output.
    pub fn validate_numeric(&self) -> GaugeResult<()> {
        match self.invalid_inputs().first() {
            Some(&field) => Err(GaugeError::InvalidNumericInput { field }),
            None => Ok(()),
        }
    }
}

/// Builds a gauge configuration from raw sensor fields.
///
/// Numbers are read with lenient integer parsing. Unknown size names fall
/// back to the default layout and unknown palettes to autumn; neither is an
/// error. Non-numeric inputs are kept as NaN and reported through
/// [`GaugeConfig::invalid_inputs`].
#[must_use]
pub fn build_config(
    min_val: &str,
    max_val: &str,
    current_val: &str,
    size: Option<&str>,
    palette: Option<&str>,
    unit: Option<&str>,
) -> GaugeConfig {
    merge_config(
        parse_int_lenient(min_val),
        parse_int_lenient(max_val),
        parse_int_lenient(current_val),
        size,
        palette,
        unit,
    )
}

/// Same as [`build_config`] for inputs that are already whole numbers
/// (or NaN).
#[must_use]
pub fn merge_config(
    min_val: f64,
    max_val: f64,
    current_val: f64,
    size: Option<&str>,
    palette: Option<&str>,
    unit: Option<&str>,
) -> GaugeConfig {
    let size_kind = SizePresetKind::from_name(size);
    let palette_kind = ColorPaletteKind::from_name(palette);
    if let Some(requested) = palette.filter(|name| ColorPaletteKind::lookup(name).is_none()) {
        debug!(
            requested,
            fallback = palette_kind.name(),
            "unknown color palette"
        );
    }

    let config = GaugeConfig {
        min_val,
        max_val,
        current_val,
        size: size_kind.preset(),
        palette: palette_kind.palette(),
        unit: normalize_unit(unit),
        sensor_type: None,
        style: GaugeStyle::default(),
    };

    let invalid = config.invalid_inputs();
    if !invalid.is_empty() {
        warn!(fields = ?invalid, "non-numeric gauge input, layout will degrade");
    }
    debug!(
        min_val = config.min_val,
        max_val = config.max_val,
        current_val = config.current_val,
        size = size_kind.name(),
        palette = palette_kind.name(),
        "built gauge config"
    );
    config
}

/// Prefixes the unit with a separator space. Missing units and the literal
/// placeholders `"null"` and `"undefined"` become a single blank so the
/// readout shows only the number.
#[must_use]
pub fn normalize_unit(unit: Option<&str>) -> String {
    match unit {
        None | Some("null") | Some("undefined") => BLANK_UNIT.to_owned(),
        Some(unit) => format!(" {unit}"),
    }
}

fn default_unit() -> String {
    BLANK_UNIT.to_owned()
}
