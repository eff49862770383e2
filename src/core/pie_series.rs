use serde::{Deserialize, Serialize};

use crate::core::series::Series;
use crate::core::types::PlotArea;

/// Start of the first slice: 12 o'clock.
pub const PIE_START_ANGLE_DEG: f64 = -90.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieInput {
    pub entity: String,
    pub value: Option<f64>,
}

impl PieInput {
    #[must_use]
    pub fn new(entity: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            entity: entity.into(),
            value,
        }
    }
}

/// Clockwise slice in screen space (y grows downward).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub entity: String,
    pub start_angle_deg: f64,
    pub sweep_angle_deg: f64,
    pub value: f64,
    /// Input position, used to pick a stable colour.
    pub source_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieLayout {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

impl PieLayout {
    /// Largest circle centred in the plot rectangle.
    #[must_use]
    pub fn from_area(area: PlotArea) -> Self {
        Self {
            center_x: area.left() + area.inner_width() * 0.5,
            center_y: area.top() + area.inner_height() * 0.5,
            radius: area.inner_width().min(area.inner_height()) * 0.5,
        }
    }
}

/// How a time series collapses into a single pie value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieValueSource {
    /// Most recent non-gap value, e.g. current account balances.
    #[default]
    Latest,
    /// Sum over the axis, e.g. total spend per category.
    Sum,
}

#[must_use]
pub fn pie_inputs_from_series(series: &[Series], source: PieValueSource) -> Vec<PieInput> {
    series
        .iter()
        .map(|series| {
            let value = match source {
                PieValueSource::Latest => series.latest_value(),
                PieValueSource::Sum => series.total(),
            };
            PieInput::new(series.entity.clone(), value)
        })
        .collect()
}

/// Converts values into consecutive clockwise slices starting at -90 degrees.
///
/// Missing, non-finite and non-positive values are excluded from the total
/// and produce no slice. When the total is not positive the result is empty.
/// The last slice absorbs rounding so sweeps sum to 360; its sweep never
/// goes negative.
#[must_use]
pub fn project_pie(inputs: &[PieInput]) -> Vec<PieSlice> {
    let included: Vec<(usize, &PieInput, f64)> = inputs
        .iter()
        .enumerate()
        .filter_map(|(index, input)| {
            input
                .value
                .filter(|value| value.is_finite() && *value > 0.0)
                .map(|value| (index, input, value))
        })
        .collect();

    let total: f64 = included.iter().map(|(_, _, value)| value).sum();
    if !total.is_finite() || total <= 0.0 {
        return Vec::new();
    }

    let mut slices = Vec::with_capacity(included.len());
    let mut start = PIE_START_ANGLE_DEG;
    let last = included.len() - 1;
    for (position, (source_index, input, value)) in included.into_iter().enumerate() {
        // Rounding in `start` can leave a tiny final value slightly below 0.
        let sweep = if position == last {
            (PIE_START_ANGLE_DEG + 360.0 - start).clamp(0.0, 360.0)
        } else {
            360.0 * value / total
        };
        slices.push(PieSlice {
            entity: input.entity.clone(),
            start_angle_deg: start,
            sweep_angle_deg: sweep,
            value,
            source_index,
        });
        start += sweep;
    }

    slices
}
