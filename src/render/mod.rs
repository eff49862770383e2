mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    ArcPrimitive, Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive,
};

use crate::error::ChartResult;

/// Contract implemented by each platform drawing adapter.
///
/// Adapters receive a fully materialized `RenderFrame`, so they only stroke
/// lines, fill rectangles and arcs, and place text.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
