use tracing::trace;

use crate::core::ChartGeometry;
use crate::error::ChartResult;
use crate::render::{
    ArcPrimitive, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::{ChartModel, RenderStyle};

/// Outcome of one render request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// A frame was produced and handed to the renderer.
    Rendered,
    /// Nothing to draw; the host shows its "no data" placeholder.
    NoData,
}

/// Converts a prepared model into drawing instructions.
///
/// Returns `None` when the model has no drawable geometry. Line series are
/// stroked only between adjacent present points; isolated points get a
/// square marker.
pub fn build_render_frame(
    model: &ChartModel,
    style: &RenderStyle,
) -> ChartResult<Option<RenderFrame>> {
    if !model.has_data() {
        return Ok(None);
    }
    let geometry = model.geometry()?;
    if geometry.is_empty() {
        return Ok(None);
    }

    let area = model.area();
    let mut frame = RenderFrame::new(area.viewport());

    if !matches!(geometry, ChartGeometry::Pie { .. }) {
        append_value_axis(&mut frame, model, style);
        append_date_axis(&mut frame, model, style);
    }

    match geometry {
        ChartGeometry::Line { lines } => {
            let half_marker = style.point_marker_size_px * 0.5;
            for (index, line) in lines.iter().enumerate() {
                let color = style.series_color(index);
                for segment in line.segments() {
                    frame.lines.push(LinePrimitive::new(
                        segment.x1,
                        segment.y1,
                        segment.x2,
                        segment.y2,
                        style.series_line_width,
                        color,
                    ));
                }
                for point in line.isolated_points() {
                    frame.rects.push(RectPrimitive::new(
                        point.x - half_marker,
                        point.y - half_marker,
                        style.point_marker_size_px,
                        style.point_marker_size_px,
                        color,
                    ));
                }
            }
        }
        ChartGeometry::Bar { bars } => {
            for bar in bars {
                frame.rects.push(RectPrimitive::new(
                    bar.rect.x,
                    bar.rect.y,
                    bar.rect.width,
                    bar.rect.height,
                    style.series_color(bar.bar_index),
                ));
            }
        }
        ChartGeometry::Pie { layout, slices } => {
            for slice in slices {
                frame.arcs.push(ArcPrimitive {
                    center_x: layout.center_x,
                    center_y: layout.center_y,
                    radius: layout.radius,
                    start_angle_deg: slice.start_angle_deg,
                    sweep_angle_deg: slice.sweep_angle_deg,
                    fill: style.series_color(slice.source_index),
                });
            }
        }
    }

    trace!(
        arcs = frame.arcs.len(),
        rects = frame.rects.len(),
        lines = frame.lines.len(),
        texts = frame.texts.len(),
        "built render frame"
    );
    Ok(Some(frame))
}

fn append_value_axis(frame: &mut RenderFrame, model: &ChartModel, style: &RenderStyle) {
    let area = model.area();
    for label in model.gridline_labels() {
        frame.lines.push(LinePrimitive::new(
            area.left(),
            label.y,
            area.right(),
            label.y,
            style.gridline_width,
            style.gridline_color,
        ));
        frame.texts.push(TextPrimitive::new(
            label.text,
            area.left() - style.axis_label_offset_px,
            label.y,
            style.axis_label_font_size_px,
            style.axis_label_color,
            TextHAlign::Right,
        ));
    }
}

fn append_date_axis(frame: &mut RenderFrame, model: &ChartModel, style: &RenderStyle) {
    let y = model.area().bottom() + style.axis_label_offset_px + style.axis_label_font_size_px;
    for label in model.date_labels() {
        frame.texts.push(TextPrimitive::new(
            label.text,
            label.x,
            y,
            style.axis_label_font_size_px,
            style.axis_label_color,
            TextHAlign::Center,
        ));
    }
}
