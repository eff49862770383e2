mod chart_model;
mod engine;
mod engine_config;
mod json_contract;
mod label_format;
mod render_frame_builder;
mod render_style;
mod validation;

pub use chart_model::{ChartModel, DateLabel, GridlineLabel};
pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use json_contract::{
    CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot, ChartSnapshotJsonContractV1,
    records_from_json_str,
};
pub use label_format::{
    DateLabelPattern, GridlineLabelPolicy, format_date_label, format_value_label,
};
pub use render_frame_builder::{RenderOutcome, build_render_frame};
pub use render_style::{DEFAULT_SERIES_PALETTE, RenderStyle};
