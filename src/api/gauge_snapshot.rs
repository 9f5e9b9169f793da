use serde::{Deserialize, Serialize};

use crate::error::{GaugeError, GaugeResult};
use crate::render::Transform;

use super::GaugeConfig;

pub const GAUGE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable state of one gauge, for regression tests and debugging.
///
/// NaN values serialize as `null` and do not read back; snapshots of gauges
/// built from non-numeric input are write-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeSnapshot {
    pub id: String,
    pub config: GaugeConfig,
    pub displayed_value: f64,
    pub readout_text: String,
    pub warning_text: String,
    pub pointer_transform: Option<Transform>,
    /// Target of the running transition, if one is in flight.
    pub target_value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: GaugeSnapshot,
}

impl GaugeSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> GaugeResult<String> {
        let payload = GaugeSnapshotJsonContractV1 {
            schema_version: GAUGE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            GaugeError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> GaugeResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<GaugeSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: GaugeSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            GaugeError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != GAUGE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(GaugeError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
