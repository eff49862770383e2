//! budget-chart: time-indexed multi-series chart engine.
//!
//! Sparse per-entity dated records go in; a shared date axis, aligned series,
//! a rounded value scale, pixel geometry and tooltip lookups come out. Every
//! stage is a pure function so platform adapters only have to draw.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, ChartModel};
pub use error::{ChartError, ChartResult};
