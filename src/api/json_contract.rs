use serde::{Deserialize, Serialize};

use crate::core::{ChartGeometry, ChartKind, DateAxis, ParseFailure, RawRecord, Series, ValueScale};
use crate::error::{ChartError, ChartResult};

use super::ChartModel;

pub const CHART_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Parses the data-fetch layer's record array.
///
/// Only a malformed envelope is an error; bad dates or values inside
/// well-formed records are handled later as dropped or absent data.
pub fn records_from_json_str(input: &str) -> ChartResult<Vec<RawRecord>> {
    serde_json::from_str(input)
        .map_err(|e| ChartError::InvalidData(format!("failed to parse records json: {e}")))
}

/// Serializable view of a prepared chart, for platform adapters and fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub kind: ChartKind,
    pub axis: DateAxis,
    pub series: Vec<Series>,
    pub scale: ValueScale,
    pub gridline_labels: Vec<String>,
    pub geometry: ChartGeometry,
    pub rejected: Vec<ParseFailure>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ChartSnapshot,
}

impl ChartSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartSnapshotJsonContractV1 {
            schema_version: CHART_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ChartSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ChartSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != CHART_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl ChartModel {
    pub fn snapshot(&self) -> ChartResult<ChartSnapshot> {
        Ok(ChartSnapshot {
            kind: self.kind(),
            axis: self.axis().clone(),
            series: self.series().to_vec(),
            scale: self.scale(),
            gridline_labels: self
                .gridline_labels()
                .into_iter()
                .map(|label| label.text)
                .collect(),
            geometry: self.geometry()?,
            rejected: self.rejected().to_vec(),
        })
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.snapshot()?.to_json_contract_v1_pretty()
    }
}
