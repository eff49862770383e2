use serde::{Deserialize, Serialize};

use crate::core::geometry::{group_width, value_to_y};
use crate::core::scale::{ValueScale, saturating_add};
use crate::core::series::Series;
use crate::core::types::PlotArea;
use crate::error::{ChartError, ChartResult};

/// Share of each group's width occupied by its bars.
pub const DEFAULT_BAR_FILL_FRACTION: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One bar, addressed by group (axis position) and bar (series) index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub group_index: usize,
    pub bar_index: usize,
    pub rect: BarRect,
}

/// Side-by-side bars: each group holds one sub-bar per series.
///
/// Sub-bars sit edge to edge and jointly fill `fill_fraction` of the group
/// width. The remaining width is split equally into the left and right
/// padding of the group, so adjacent groups are separated by one full
/// remainder and bars within a group have no gap between them. A series gap
/// keeps its slot empty instead of shifting its neighbours. Heights grow
/// from the zero baseline.
pub fn project_grouped_bars(
    group_count: usize,
    series: &[Series],
    scale: ValueScale,
    area: PlotArea,
    fill_fraction: f64,
) -> ChartResult<Vec<BarGeometry>> {
    validate_fill_fraction(fill_fraction)?;
    if group_count == 0 || series.is_empty() {
        return Ok(Vec::new());
    }

    let group = group_width(group_count, area);
    let occupied = group * fill_fraction;
    let bar_width = occupied / series.len() as f64;
    let inset = (group - occupied) * 0.5;
    let baseline_y = value_to_y(0.0, scale, area);

    let mut bars = Vec::with_capacity(group_count * series.len());
    for group_index in 0..group_count {
        let group_left = area.left() + (group_index as f64) * group + inset;
        for (bar_index, series) in series.iter().enumerate() {
            let Some(value) = series.value_at(group_index) else {
                continue;
            };
            let value_y = value_to_y(value, scale, area);
            bars.push(BarGeometry {
                group_index,
                bar_index,
                rect: BarRect {
                    x: group_left + (bar_index as f64) * bar_width,
                    y: value_y.min(baseline_y),
                    width: bar_width,
                    height: (value_y - baseline_y).abs(),
                },
            });
        }
    }

    Ok(bars)
}

/// One stacked bar per group.
///
/// Positive values stack upward from zero, negative values downward, in
/// series order. `bar_index` identifies the series of each segment.
pub fn project_stacked_bars(
    group_count: usize,
    series: &[Series],
    scale: ValueScale,
    area: PlotArea,
    fill_fraction: f64,
) -> ChartResult<Vec<BarGeometry>> {
    validate_fill_fraction(fill_fraction)?;
    if group_count == 0 || series.is_empty() {
        return Ok(Vec::new());
    }

    let group = group_width(group_count, area);
    let occupied = group * fill_fraction;
    let inset = (group - occupied) * 0.5;

    let mut bars = Vec::with_capacity(group_count * series.len());
    for group_index in 0..group_count {
        let x = area.left() + (group_index as f64) * group + inset;
        let mut positive_top = 0.0;
        let mut negative_bottom = 0.0;
        for (bar_index, series) in series.iter().enumerate() {
            let Some(value) = series.value_at(group_index) else {
                continue;
            };
            let (start, end) = if value >= 0.0 {
                let start = positive_top;
                positive_top = saturating_add(positive_top, value);
                (start, positive_top)
            } else {
                let start = negative_bottom;
                negative_bottom = saturating_add(negative_bottom, value);
                (start, negative_bottom)
            };
            let start_y = value_to_y(start, scale, area);
            let end_y = value_to_y(end, scale, area);
            bars.push(BarGeometry {
                group_index,
                bar_index,
                rect: BarRect {
                    x,
                    y: start_y.min(end_y),
                    width: occupied,
                    height: (end_y - start_y).abs(),
                },
            });
        }
    }

    Ok(bars)
}

fn validate_fill_fraction(fill_fraction: f64) -> ChartResult<()> {
    if !fill_fraction.is_finite() || fill_fraction <= 0.0 || fill_fraction > 1.0 {
        return Err(ChartError::InvalidConfig(
            "bar fill fraction must be finite and in (0, 1]".to_owned(),
        ));
    }
    Ok(())
}
