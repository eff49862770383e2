pub mod axis;
pub mod bar_series;
pub mod geometry;
pub mod line_series;
pub mod pie_series;
pub mod primitives;
pub mod scale;
pub mod series;
pub mod types;

pub use axis::{AxisBuild, DateAxis, build_axis};
pub use bar_series::{
    BarGeometry, BarRect, DEFAULT_BAR_FILL_FRACTION, project_grouped_bars, project_stacked_bars,
};
pub use geometry::{ChartGeometry, ChartKind, GeometryOptions, map_geometry};
pub use hit_test::{
    HitMode, TooltipResult, nearest_line_at, resolve_axis_index, resolve_tooltip,
};
pub use line_series::{LineGeometry, LineSegment, PixelPoint, project_line, project_lines};
pub use pie_series::{
    PIE_START_ANGLE_DEG, PieInput, PieLayout, PieSlice, PieValueSource, pie_inputs_from_series,
    project_pie,
};
pub use scale::{
    DEFAULT_CEILING, DEFAULT_DIVISIONS, Gridline, ValueScale, compute_scale,
    compute_scale_with_divisions, stacked_extent_values,
};
pub use series::{Series, align_records, align_series, align_series_reporting};
pub use types::{
    CalendarDate, Margins, ParseFailure, ParseField, PlotArea, RawRecord, RawValue, Record,
    Viewport,
};
