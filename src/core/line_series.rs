use serde::{Deserialize, Serialize};

use crate::core::axis::DateAxis;
use crate::core::geometry::{axis_step_width, value_to_y};
use crate::core::scale::ValueScale;
use crate::core::series::Series;
use crate::core::types::PlotArea;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Polyline for one series; `None` entries are gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineGeometry {
    pub entity: String,
    pub pixel_points: Vec<Option<PixelPoint>>,
}

impl LineGeometry {
    /// Contiguous runs of present points, split at every gap.
    #[must_use]
    pub fn runs(&self) -> Vec<Vec<PixelPoint>> {
        self.pixel_points
            .split(Option::is_none)
            .filter(|run| !run.is_empty())
            .map(|run| run.iter().flatten().copied().collect())
            .collect()
    }

    /// Segments between adjacent present points. Nothing bridges a gap.
    #[must_use]
    pub fn segments(&self) -> Vec<LineSegment> {
        self.pixel_points
            .windows(2)
            .filter_map(|pair| match (pair[0], pair[1]) {
                (Some(from), Some(to)) => Some(LineSegment {
                    x1: from.x,
                    y1: from.y,
                    x2: to.x,
                    y2: to.y,
                }),
                _ => None,
            })
            .collect()
    }

    /// Present points with no present neighbour; these get a marker instead
    /// of a stroke.
    #[must_use]
    pub fn isolated_points(&self) -> Vec<PixelPoint> {
        let present = |index: Option<usize>| {
            index
                .and_then(|index| self.pixel_points.get(index))
                .is_some_and(Option::is_some)
        };

        self.pixel_points
            .iter()
            .enumerate()
            .filter_map(|(index, point)| {
                let point = (*point)?;
                let has_neighbour = present(index.checked_sub(1)) || present(Some(index + 1));
                (!has_neighbour).then_some(point)
            })
            .collect()
    }

    #[must_use]
    pub fn has_points(&self) -> bool {
        self.pixel_points.iter().any(Option::is_some)
    }
}

/// Maps one aligned series to pixel space.
///
/// `x = left + i * inner_width / max(n - 1, 1)` and `y` runs from the plot
/// bottom (scale floor) to the plot top (scale ceiling).
#[must_use]
pub fn project_line(
    axis: &DateAxis,
    series: &Series,
    scale: ValueScale,
    area: PlotArea,
) -> LineGeometry {
    let step = axis_step_width(axis.len(), area);
    let pixel_points = series
        .points
        .iter()
        .copied()
        .take(axis.len())
        .enumerate()
        .map(|(index, value)| {
            value.map(|value| PixelPoint {
                x: area.left() + (index as f64) * step,
                y: value_to_y(value, scale, area),
            })
        })
        .collect();

    LineGeometry {
        entity: series.entity.clone(),
        pixel_points,
    }
}

#[must_use]
pub fn project_lines(
    axis: &DateAxis,
    series: &[Series],
    scale: ValueScale,
    area: PlotArea,
) -> Vec<LineGeometry> {
    series
        .iter()
        .map(|series| project_line(axis, series, scale, area))
        .collect()
}
