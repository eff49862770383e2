use indexmap::IndexMap;
use tracing::debug;

use crate::core::geometry::{axis_step_width, group_width, value_to_y};
use crate::core::{
    ChartGeometry, ChartKind, DateAxis, GeometryOptions, HitMode, ParseFailure, PlotArea,
    RawRecord, Series, TooltipResult, ValueScale, align_records, build_axis,
    compute_scale_with_divisions, map_geometry, nearest_line_at, resolve_axis_index, resolve_tooltip,
    stacked_extent_values,
};
use crate::error::ChartResult;

use super::label_format::{format_date_label, select_with_min_spacing};
use super::{ChartEngineConfig, DateLabelPattern, GridlineLabelPolicy};

/// Positioned date label along the bottom of the plot.
#[derive(Debug, Clone, PartialEq)]
pub struct DateLabel {
    pub axis_index: usize,
    pub x: f64,
    pub text: String,
}

/// Positioned value label for one gridline.
#[derive(Debug, Clone, PartialEq)]
pub struct GridlineLabel {
    pub value: f64,
    pub y: f64,
    pub text: String,
}

/// Everything derived from one data refresh: axis, aligned series and scale.
///
/// A model is never mutated. A refresh or resize builds a new one, and a
/// superseded model is simply dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    kind: ChartKind,
    area: PlotArea,
    options: GeometryOptions,
    label_policy: GridlineLabelPolicy,
    date_pattern: DateLabelPattern,
    date_label_min_spacing_px: f64,
    axis: DateAxis,
    series: Vec<Series>,
    scale: ValueScale,
    rejected: Vec<ParseFailure>,
}

impl ChartModel {
    pub fn from_records(records: &[RawRecord], config: &ChartEngineConfig) -> ChartResult<Self> {
        Self::from_record_sets(&[records], config)
    }

    /// Builds one chart from several record collections sharing one axis.
    pub fn from_record_sets(
        record_sets: &[&[RawRecord]],
        config: &ChartEngineConfig,
    ) -> ChartResult<Self> {
        let build = build_axis(record_sets.iter().copied());
        let mut rejected = build.rejected;

        let mut series = Vec::new();
        for records in record_sets {
            let (aligned, failures) = align_records(&build.axis, records);
            series.extend(aligned);
            rejected.extend(failures);
        }

        let model = Self::from_aligned(build.axis, merge_entities(series), rejected, config)?;
        debug!(
            kind = ?model.kind,
            dates = model.axis.len(),
            entities = model.series.len(),
            rejected = model.rejected.len(),
            ceiling = model.scale.ceiling(),
            "prepared chart model"
        );
        Ok(model)
    }

    /// Builds a model from an axis and series aligned by the caller.
    pub fn from_series(
        axis: DateAxis,
        series: Vec<Series>,
        config: &ChartEngineConfig,
    ) -> ChartResult<Self> {
        Self::from_aligned(axis, series, Vec::new(), config)
    }

    fn from_aligned(
        axis: DateAxis,
        series: Vec<Series>,
        rejected: Vec<ParseFailure>,
        config: &ChartEngineConfig,
    ) -> ChartResult<Self> {
        let area = config.validate()?;
        let scale = match config.chart_kind {
            ChartKind::StackedBar => compute_scale_with_divisions(
                stacked_extent_values(&series, axis.len()),
                config.divisions,
            ),
            _ => compute_scale_with_divisions(
                series.iter().flat_map(|series| series.values()),
                config.divisions,
            ),
        };

        Ok(Self {
            kind: config.chart_kind,
            area,
            options: config.geometry,
            label_policy: config.gridline_label_policy.clone(),
            date_pattern: config.date_label_pattern,
            date_label_min_spacing_px: config.render_style.date_label_min_spacing_px,
            axis,
            series,
            scale,
            rejected,
        })
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn area(&self) -> PlotArea {
        self.area
    }

    #[must_use]
    pub fn axis(&self) -> &DateAxis {
        &self.axis
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn scale(&self) -> ValueScale {
        self.scale
    }

    /// Records dropped (dates) or treated as absent (values) while preparing.
    #[must_use]
    pub fn rejected(&self) -> &[ParseFailure] {
        &self.rejected
    }

    #[must_use]
    pub fn label_policy(&self) -> &GridlineLabelPolicy {
        &self.label_policy
    }

    /// `false` when the axis is empty; hosts show a placeholder instead.
    #[must_use]
    pub fn has_data(&self) -> bool {
        !self.axis.is_empty()
    }

    pub fn geometry(&self) -> ChartResult<ChartGeometry> {
        map_geometry(
            self.kind,
            &self.axis,
            &self.series,
            self.scale,
            self.area,
            self.options,
        )
    }

    /// Label policy with precision raised to fit the gridline step.
    #[must_use]
    pub fn effective_label_policy(&self) -> GridlineLabelPolicy {
        let gridlines = self.scale.gridlines();
        let step = match gridlines.as_slice() {
            [first, second, ..] => second.value - first.value,
            _ => self.scale.ceiling(),
        };
        self.label_policy.for_step(step)
    }

    #[must_use]
    pub fn gridline_labels(&self) -> Vec<GridlineLabel> {
        let policy = self.effective_label_policy();
        self.scale
            .gridlines()
            .into_iter()
            .map(|gridline| GridlineLabel {
                value: gridline.value,
                y: value_to_y(gridline.value, self.scale, self.area),
                text: policy.format(gridline.value),
            })
            .collect()
    }

    /// Date labels at axis positions, thinned to the configured spacing.
    ///
    /// Pie charts have no date axis and return nothing.
    #[must_use]
    pub fn date_labels(&self) -> Vec<DateLabel> {
        let Some((origin, step)) = self.axis_x_layout() else {
            return Vec::new();
        };

        let candidates: Vec<((usize, String), f64)> = self
            .axis
            .iter()
            .enumerate()
            .map(|(index, date)| {
                (
                    (index, format_date_label(date, self.date_pattern)),
                    origin + (index as f64) * step,
                )
            })
            .collect();

        select_with_min_spacing(candidates, self.date_label_min_spacing_px)
            .into_iter()
            .map(|((axis_index, text), x)| DateLabel { axis_index, x, text })
            .collect()
    }

    #[must_use]
    pub fn hit_mode(&self) -> HitMode {
        if self.kind.is_bar() {
            HitMode::Group
        } else {
            HitMode::Nearest
        }
    }

    /// Tooltip entry point for the host's pointer handler.
    #[must_use]
    pub fn resolve_tooltip(&self, pointer_x: f64) -> Option<TooltipResult> {
        resolve_tooltip(
            &self.axis,
            &self.series,
            pointer_x,
            self.area,
            self.hit_mode(),
        )
    }

    /// Series under the pointer on a line chart, for hover highlighting.
    pub fn hovered_series(&self, pointer_x: f64, pointer_y: f64) -> ChartResult<Option<&Series>> {
        let ChartKind::Line = self.kind else {
            return Ok(None);
        };
        let Some(axis_index) =
            resolve_axis_index(self.axis.len(), pointer_x, self.area, HitMode::Nearest)
        else {
            return Ok(None);
        };
        let ChartGeometry::Line { lines } = self.geometry()? else {
            return Ok(None);
        };
        Ok(nearest_line_at(&lines, axis_index, pointer_y).and_then(|index| self.series.get(index)))
    }

    /// Tooltip as display text: the date first, then one line per entity.
    #[must_use]
    pub fn tooltip_lines(&self, pointer_x: f64) -> Option<Vec<String>> {
        let tooltip = self.resolve_tooltip(pointer_x)?;
        let policy = self.effective_label_policy();
        let mut lines = vec![format_date_label(tooltip.date, DateLabelPattern::Iso)];
        lines.extend(tooltip.format_lines(|value| policy.format(value)));
        Some(lines)
    }

    /// `(x of index 0, distance between indices)` for axis-aligned kinds.
    fn axis_x_layout(&self) -> Option<(f64, f64)> {
        let area = self.area;
        let len = self.axis.len();
        match self.kind {
            ChartKind::Pie => None,
            ChartKind::Line => Some((area.left(), axis_step_width(len, area))),
            ChartKind::GroupedBar | ChartKind::StackedBar => {
                let group = group_width(len, area);
                Some((area.left() + group * 0.5, group))
            }
        }
    }
}

// Entities split across record sets become one series; earlier sets win
// where both have a value.
fn merge_entities(series: Vec<Series>) -> Vec<Series> {
    let mut merged: IndexMap<String, Series> = IndexMap::new();
    for item in series {
        match merged.get_mut(&item.entity) {
            Some(existing) => {
                for (slot, value) in existing.points.iter_mut().zip(item.points) {
                    if slot.is_none() {
                        *slot = value;
                    }
                }
            }
            None => {
                merged.insert(item.entity.clone(), item);
            }
        }
    }
    merged.into_values().collect()
}
