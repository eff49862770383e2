use serde::{Deserialize, Serialize};

use crate::core::{
    ChartKind, DEFAULT_DIVISIONS, GeometryOptions, Margins, PieValueSource, PlotArea, Viewport,
};
use crate::error::{ChartError, ChartResult};

use super::validation::{
    validate_divisions, validate_gridline_label_policy, validate_render_style,
};
use super::{DateLabelPattern, GridlineLabelPolicy, RenderStyle};

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can persist chart setup per screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default)]
    pub chart_kind: ChartKind,
    #[serde(default = "default_divisions")]
    pub divisions: usize,
    #[serde(default)]
    pub geometry: GeometryOptions,
    #[serde(default)]
    pub gridline_label_policy: GridlineLabelPolicy,
    #[serde(default)]
    pub date_label_pattern: DateLabelPattern,
    #[serde(default)]
    pub render_style: RenderStyle,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: Margins::default(),
            chart_kind: ChartKind::default(),
            divisions: DEFAULT_DIVISIONS,
            geometry: GeometryOptions::default(),
            gridline_label_policy: GridlineLabelPolicy::default(),
            date_label_pattern: DateLabelPattern::default(),
            render_style: RenderStyle::default(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_chart_kind(mut self, chart_kind: ChartKind) -> Self {
        self.chart_kind = chart_kind;
        self
    }

    #[must_use]
    pub fn with_divisions(mut self, divisions: usize) -> Self {
        self.divisions = divisions;
        self
    }

    #[must_use]
    pub fn with_bar_fill_fraction(mut self, fill_fraction: f64) -> Self {
        self.geometry.bar_fill_fraction = fill_fraction;
        self
    }

    #[must_use]
    pub fn with_pie_value_source(mut self, source: PieValueSource) -> Self {
        self.geometry.pie_value_source = source;
        self
    }

    #[must_use]
    pub fn with_gridline_label_policy(mut self, policy: GridlineLabelPolicy) -> Self {
        self.gridline_label_policy = policy;
        self
    }

    #[must_use]
    pub fn with_date_label_pattern(mut self, pattern: DateLabelPattern) -> Self {
        self.date_label_pattern = pattern;
        self
    }

    #[must_use]
    pub fn with_render_style(mut self, style: RenderStyle) -> Self {
        self.render_style = style;
        self
    }

    /// Checks every field and returns the plot rectangle it describes.
    pub fn validate(&self) -> ChartResult<PlotArea> {
        let area = PlotArea::new(self.viewport, self.margins)?;
        validate_divisions(self.divisions)?;
        let fraction = self.geometry.bar_fill_fraction;
        if !fraction.is_finite() || fraction <= 0.0 || fraction > 1.0 {
            return Err(ChartError::InvalidConfig(
                "bar fill fraction must be finite and in (0, 1]".to_owned(),
            ));
        }
        validate_gridline_label_policy(&self.gridline_label_policy)?;
        validate_render_style(&self.render_style)?;
        Ok(area)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }
}

fn default_divisions() -> usize {
    DEFAULT_DIVISIONS
}
