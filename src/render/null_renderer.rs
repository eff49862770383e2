use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer for tests and headless use.
///
/// It still validates each frame and keeps the last one for inspection.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
