use crate::error::{ChartError, ChartResult};

use super::label_format::MAX_LABEL_PRECISION;
use super::{GridlineLabelPolicy, RenderStyle};

const MAX_DIVISIONS: usize = 20;

pub(super) fn validate_divisions(divisions: usize) -> ChartResult<()> {
    if !(1..=MAX_DIVISIONS).contains(&divisions) {
        return Err(ChartError::InvalidConfig(format!(
            "gridline divisions must be in 1..={MAX_DIVISIONS}"
        )));
    }
    Ok(())
}

pub(super) fn validate_gridline_label_policy(policy: &GridlineLabelPolicy) -> ChartResult<()> {
    match policy {
        GridlineLabelPolicy::Plain { precision }
        | GridlineLabelPolicy::Currency { precision, .. } => {
            if *precision > MAX_LABEL_PRECISION {
                return Err(ChartError::InvalidConfig(format!(
                    "gridline label precision must be <= {MAX_LABEL_PRECISION}"
                )));
            }
        }
        GridlineLabelPolicy::Compact { .. } => {}
    }
    Ok(())
}

pub(super) fn validate_render_style(style: &RenderStyle) -> ChartResult<()> {
    if style.series_palette.is_empty() {
        return Err(ChartError::InvalidConfig(
            "series palette must contain at least one color".to_owned(),
        ));
    }
    for color in &style.series_palette {
        color.validate()?;
    }
    style.gridline_color.validate()?;
    style.axis_label_color.validate()?;

    for (name, value) in [
        ("series line width", style.series_line_width),
        ("point marker size", style.point_marker_size_px),
        ("gridline width", style.gridline_width),
        ("axis label font size", style.axis_label_font_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "{name} must be finite and > 0"
            )));
        }
    }

    for (name, value) in [
        ("axis label offset", style.axis_label_offset_px),
        ("date label min spacing", style.date_label_min_spacing_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "{name} must be finite and >= 0"
            )));
        }
    }

    Ok(())
}
