use serde::{Deserialize, Serialize};

use crate::core::{integer_part, parse_int_lenient, parse_number_strict};
use crate::error::{GaugeError, GaugeResult};

use super::{GaugeConfig, merge_config};

/// A number as delivered by a sensor feed: already numeric, or text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Whole-number reading used for the configured range.
    #[must_use]
    pub fn as_integer(&self) -> f64 {
        match self {
            Self::Number(value) => integer_part(*value),
            Self::Text(text) => parse_int_lenient(text),
        }
    }

    /// Full numeric reading used as an animation target. Text is coerced as
    /// a whole, so blank text reads as `0` and anything non-numeric as NaN.
    #[must_use]
    pub fn as_number(&self) -> f64 {
        match self {
            Self::Number(value) => *value,
            Self::Text(text) => parse_number_strict(text),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Everything a host supplies to put one live gauge on screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeSpec {
    pub id: String,
    pub current_value: RawValue,
    pub min: RawValue,
    pub max: RawValue,
    #[serde(default)]
    pub sensor_type: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub color_map: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
}

impl GaugeSpec {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        current_value: impl Into<RawValue>,
        min: impl Into<RawValue>,
        max: impl Into<RawValue>,
    ) -> Self {
        Self {
            id: id.into(),
            current_value: current_value.into(),
            min: min.into(),
            max: max.into(),
            sensor_type: None,
            size: None,
            color_map: None,
            unit: None,
        }
    }

    #[must_use]
    pub fn with_sensor_type(mut self, sensor_type: impl Into<String>) -> Self {
        self.sensor_type = Some(sensor_type.into());
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    #[must_use]
    pub fn with_color_map(mut self, color_map: impl Into<String>) -> Self {
        self.color_map = Some(color_map.into());
        self
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn from_json_str(input: &str) -> GaugeResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| GaugeError::InvalidData(format!("failed to parse gauge spec json: {e}")))
    }

    pub fn to_json_pretty(&self) -> GaugeResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            GaugeError::InvalidData(format!("failed to serialize gauge spec json: {e}"))
        })
    }

    /// Merged configuration for this spec.
    #[must_use]
    pub fn to_config(&self) -> GaugeConfig {
        let mut config = merge_config(
            self.min.as_integer(),
            self.max.as_integer(),
            self.current_value.as_integer(),
            self.size.as_deref(),
            self.color_map.as_deref(),
            self.unit.as_deref(),
        );
        config.sensor_type = self.sensor_type.clone();
        config
    }

    /// Value the first transition animates to.
    #[must_use]
    pub fn target_value(&self) -> f64 {
        self.current_value.as_number()
    }
}
