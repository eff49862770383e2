use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::axis::DateAxis;
use crate::core::bar_series::{
    BarGeometry, DEFAULT_BAR_FILL_FRACTION, project_grouped_bars, project_stacked_bars,
};
use crate::core::line_series::{LineGeometry, project_lines};
use crate::core::pie_series::{
    PieLayout, PieSlice, PieValueSource, pie_inputs_from_series, project_pie,
};
use crate::core::scale::ValueScale;
use crate::core::series::Series;
use crate::core::types::PlotArea;
use crate::error::ChartResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    #[default]
    Line,
    GroupedBar,
    StackedBar,
    Pie,
}

impl ChartKind {
    #[must_use]
    pub fn is_bar(self) -> bool {
        matches!(self, Self::GroupedBar | Self::StackedBar)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryOptions {
    pub bar_fill_fraction: f64,
    pub pie_value_source: PieValueSource,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            bar_fill_fraction: DEFAULT_BAR_FILL_FRACTION,
            pie_value_source: PieValueSource::default(),
        }
    }
}

/// Chart-type specific drawing geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartGeometry {
    Line { lines: Vec<LineGeometry> },
    Bar { bars: Vec<BarGeometry> },
    Pie { layout: PieLayout, slices: Vec<PieSlice> },
}

impl ChartGeometry {
    /// `true` when there is nothing to draw and the host should show its
    /// "no data" placeholder instead.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Line { lines } => !lines.iter().any(LineGeometry::has_points),
            Self::Bar { bars } => bars.is_empty(),
            Self::Pie { slices, .. } => slices.is_empty(),
        }
    }
}

/// Maps aligned series to geometry for `kind`.
///
/// Bars use one group per axis position. Pie values are reduced from each
/// series according to `options.pie_value_source`.
pub fn map_geometry(
    kind: ChartKind,
    axis: &DateAxis,
    series: &[Series],
    scale: ValueScale,
    area: PlotArea,
    options: GeometryOptions,
) -> ChartResult<ChartGeometry> {
    let geometry = match kind {
        ChartKind::Line => ChartGeometry::Line {
            lines: project_lines(axis, series, scale, area),
        },
        ChartKind::GroupedBar => ChartGeometry::Bar {
            bars: project_grouped_bars(
                axis.len(),
                series,
                scale,
                area,
                options.bar_fill_fraction,
            )?,
        },
        ChartKind::StackedBar => ChartGeometry::Bar {
            bars: project_stacked_bars(
                axis.len(),
                series,
                scale,
                area,
                options.bar_fill_fraction,
            )?,
        },
        ChartKind::Pie => ChartGeometry::Pie {
            layout: PieLayout::from_area(area),
            slices: project_pie(&pie_inputs_from_series(series, options.pie_value_source)),
        },
    };

    trace!(
        ?kind,
        axis_len = axis.len(),
        series = series.len(),
        empty = geometry.is_empty(),
        "mapped chart geometry"
    );
    Ok(geometry)
}

/// Horizontal distance between adjacent axis positions on a line chart.
pub(crate) fn axis_step_width(axis_len: usize, area: PlotArea) -> f64 {
    area.inner_width() / (axis_len.saturating_sub(1).max(1) as f64)
}

/// Width of one bar group.
pub(crate) fn group_width(group_count: usize, area: PlotArea) -> f64 {
    area.inner_width() / (group_count.max(1) as f64)
}

pub(crate) fn value_to_y(value: f64, scale: ValueScale, area: PlotArea) -> f64 {
    area.top() + area.inner_height() - scale.ratio(value) * area.inner_height()
}
