use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Series colors, assigned by series (or slice) index and repeated as needed.
pub const DEFAULT_SERIES_PALETTE: [Color; 8] = [
    Color::rgb(0.392, 0.584, 0.929),
    Color::rgb(1.0, 0.647, 0.0),
    Color::rgb(0.235, 0.702, 0.443),
    Color::rgb(0.863, 0.078, 0.235),
    Color::rgb(0.855, 0.647, 0.125),
    Color::rgb(0.416, 0.353, 0.804),
    Color::rgb(0.0, 0.545, 0.545),
    Color::rgb(1.0, 0.412, 0.706),
];

/// Visual style applied when turning geometry into render primitives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub series_palette: Vec<Color>,
    pub series_line_width: f64,
    pub point_marker_size_px: f64,
    pub gridline_color: Color,
    pub gridline_width: f64,
    pub axis_label_color: Color,
    pub axis_label_font_size_px: f64,
    /// Gap between the plot edge and axis labels.
    pub axis_label_offset_px: f64,
    /// Date labels closer than this are thinned out.
    pub date_label_min_spacing_px: f64,
}

impl RenderStyle {
    /// Palette color for a series or slice index.
    #[must_use]
    pub fn series_color(&self, index: usize) -> Color {
        if self.series_palette.is_empty() {
            return DEFAULT_SERIES_PALETTE[index % DEFAULT_SERIES_PALETTE.len()];
        }
        self.series_palette[index % self.series_palette.len()]
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            series_palette: DEFAULT_SERIES_PALETTE.to_vec(),
            series_line_width: 2.0,
            point_marker_size_px: 5.0,
            gridline_color: Color::rgba(0.0, 0.0, 0.0, 0.12),
            gridline_width: 1.0,
            axis_label_color: Color::rgb(0.35, 0.35, 0.35),
            axis_label_font_size_px: 11.0,
            axis_label_offset_px: 6.0,
            date_label_min_spacing_px: 56.0,
        }
    }
}
