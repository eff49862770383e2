use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{ArcPrimitive, LinePrimitive, RectPrimitive, TextPrimitive};

/// Everything a platform adapter draws for one chart.
///
/// Draw order is arcs, rects, lines, then texts, so gridlines and series
/// strokes sit above bars and labels sit above everything.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub arcs: Vec<ArcPrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            arcs: Vec::new(),
            rects: Vec::new(),
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.arcs.len() + self.rects.len() + self.lines.len() + self.texts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitive_count() == 0
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.arcs.iter().try_for_each(|arc| arc.validate())?;
        self.rects.iter().try_for_each(|rect| rect.validate())?;
        self.lines.iter().try_for_each(|line| line.validate())?;
        self.texts.iter().try_for_each(TextPrimitive::validate)
    }
}
