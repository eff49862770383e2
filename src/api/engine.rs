use tracing::debug;

use crate::core::{ChartKind, RawRecord, Viewport};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::render_frame_builder::{RenderOutcome, build_render_frame};
use super::{ChartEngineConfig, ChartModel};

/// Facade consumed by platform chart screens.
///
/// The engine owns configuration and a drawing adapter but no chart data:
/// each refresh prepares a fresh [`ChartModel`] and renders it.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    config: ChartEngineConfig,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self { renderer, config })
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    /// Applies a resize. Models prepared before the call keep the old size.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        let candidate = ChartEngineConfig {
            viewport,
            ..self.config.clone()
        };
        candidate.validate()?;
        debug!(width = viewport.width, height = viewport.height, "chart viewport changed");
        self.config = candidate;
        Ok(())
    }

    pub fn set_chart_kind(&mut self, chart_kind: ChartKind) {
        self.config.chart_kind = chart_kind;
    }

    pub fn prepare(&self, records: &[RawRecord]) -> ChartResult<ChartModel> {
        ChartModel::from_records(records, &self.config)
    }

    pub fn prepare_sets(&self, record_sets: &[&[RawRecord]]) -> ChartResult<ChartModel> {
        ChartModel::from_record_sets(record_sets, &self.config)
    }

    /// Builds the frame for `model` and hands it to the renderer.
    ///
    /// The renderer is not called when there is nothing to draw.
    pub fn render(&mut self, model: &ChartModel) -> ChartResult<RenderOutcome> {
        match build_render_frame(model, &self.config.render_style)? {
            Some(frame) => {
                self.renderer.render(&frame)?;
                Ok(RenderOutcome::Rendered)
            }
            None => {
                debug!("chart has no drawable data");
                Ok(RenderOutcome::NoData)
            }
        }
    }

    /// Prepares and renders in one step, returning the model for tooltips.
    pub fn refresh(&mut self, records: &[RawRecord]) -> ChartResult<(ChartModel, RenderOutcome)> {
        let model = self.prepare(records)?;
        let outcome = self.render(&model)?;
        Ok((model, outcome))
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
