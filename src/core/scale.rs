use serde::{Deserialize, Deserializer, Serialize, de};

use crate::core::series::Series;
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_DIVISIONS: usize = 5;

/// Ceiling used when there is nothing meaningful to scale against.
pub const DEFAULT_CEILING: f64 = 1_000.0;

/// Value range of a chart with round gridline values.
///
/// Invariants: `ceiling > 0`, `floor <= 0`, `divisions >= 1`. Deserialized
/// scales go through [`ValueScale::new`] as well.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueScale {
    ceiling: f64,
    floor: f64,
    divisions: usize,
}

#[derive(Deserialize)]
struct ValueScaleFields {
    ceiling: f64,
    floor: f64,
    divisions: usize,
}

impl<'de> Deserialize<'de> for ValueScale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = ValueScaleFields::deserialize(deserializer)?;
        Self::new(fields.ceiling, fields.floor, fields.divisions).map_err(de::Error::custom)
    }
}

/// One horizontal gridline; `index == 0` is the floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gridline {
    pub index: usize,
    pub value: f64,
}

impl ValueScale {
    /// Builds an explicit scale, e.g. to pin several charts to one range.
    pub fn new(ceiling: f64, floor: f64, divisions: usize) -> ChartResult<Self> {
        if !ceiling.is_finite() || ceiling <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "scale ceiling must be finite and > 0".to_owned(),
            ));
        }
        if !floor.is_finite() || floor > 0.0 {
            return Err(ChartError::InvalidConfig(
                "scale floor must be finite and <= 0".to_owned(),
            ));
        }
        Ok(Self {
            ceiling,
            floor,
            divisions: divisions.max(1),
        })
    }

    #[must_use]
    pub fn fallback(divisions: usize) -> Self {
        Self {
            ceiling: DEFAULT_CEILING,
            floor: 0.0,
            divisions: divisions.max(1),
        }
    }

    #[must_use]
    pub fn ceiling(self) -> f64 {
        self.ceiling
    }

    #[must_use]
    pub fn floor(self) -> f64 {
        self.floor
    }

    #[must_use]
    pub fn divisions(self) -> usize {
        self.divisions
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.ceiling - self.floor
    }

    /// Position of `value` inside `[floor, ceiling]` as a 0..=1 ratio.
    #[must_use]
    pub fn ratio(self, value: f64) -> f64 {
        let span = self.span();
        if span.is_finite() {
            (value - self.floor) / span
        } else {
            // Halved operands keep ranges near f64::MAX from overflowing.
            (value * 0.5 - self.floor * 0.5) / (self.ceiling * 0.5 - self.floor * 0.5)
        }
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.floor && value <= self.ceiling
    }

    /// `divisions + 1` evenly spaced gridlines from floor to ceiling.
    #[must_use]
    pub fn gridlines(self) -> Vec<Gridline> {
        let denominator = self.divisions as f64;
        let span = self.span();
        (0..=self.divisions)
            .map(|index| {
                let value = if span.is_finite() {
                    self.floor + span * (index as f64) / denominator
                } else {
                    let t = (index as f64) / denominator;
                    self.floor * (1.0 - t) + self.ceiling * t
                };
                Gridline { index, value }
            })
            .collect()
    }
}

#[must_use]
pub fn compute_scale<I>(values: I) -> ValueScale
where
    I: IntoIterator<Item = f64>,
{
    compute_scale_with_divisions(values, DEFAULT_DIVISIONS)
}

/// Computes a scale whose ceiling is the maximum rounded up to a
/// magnitude-dependent step (1,234 -> 2,000; 57 -> 60; 0.37 -> 0.4).
///
/// Non-finite values are ignored. Empty or all-zero input yields
/// [`ValueScale::fallback`]. The floor stays at zero unless a value is
/// negative, in which case it is the rounded-down minimum.
#[must_use]
pub fn compute_scale_with_divisions<I>(values: I, divisions: usize) -> ValueScale
where
    I: IntoIterator<Item = f64>,
{
    let divisions = divisions.max(1);
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in values.into_iter().filter(|value| value.is_finite()) {
        min = min.min(value);
        max = max.max(value);
    }

    if min > max || (min == 0.0 && max == 0.0) {
        return ValueScale::fallback(divisions);
    }

    let floor = if min < 0.0 {
        -round_up_to_step(-min)
    } else {
        0.0
    };
    let ceiling = if max > 0.0 {
        round_up_to_step(max)
    } else {
        magnitude_step(-floor)
    };

    ValueScale {
        ceiling,
        floor,
        divisions,
    }
}

/// Largest power of ten not above `value`; `1.0` for non-positive input.
#[must_use]
pub fn magnitude_step(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 1.0;
    }
    let step = 10f64.powf(value.log10().floor());
    if step.is_finite() && step > 0.0 {
        step
    } else {
        1.0
    }
}

/// Rounds a positive value up to the next multiple of its magnitude step.
///
/// Values whose rounded form would overflow are returned unchanged.
#[must_use]
pub fn round_up_to_step(value: f64) -> f64 {
    let step = magnitude_step(value);
    let mut rounded = (value / step).ceil() * step;
    if rounded < value {
        rounded += step;
    }
    if rounded.is_finite() { rounded } else { value }
}

/// Per-group stack extremes (positive sum and negative sum) for stacked bars.
///
/// Feeding these into [`compute_scale`] guarantees every stack fits.
pub fn stacked_extent_values(
    series: &[Series],
    group_count: usize,
) -> impl Iterator<Item = f64> + '_ {
    (0..group_count).flat_map(move |group| {
        let (positive, negative) = series
            .iter()
            .filter_map(|series| series.value_at(group))
            .fold((0.0, 0.0), |(pos, neg), value| {
                if value >= 0.0 {
                    (saturating_add(pos, value), neg)
                } else {
                    (pos, saturating_add(neg, value))
                }
            });
        [positive, negative]
    })
}

/// Finite sum that clamps to `±f64::MAX` instead of overflowing.
pub(crate) fn saturating_add(left: f64, right: f64) -> f64 {
    (left + right).clamp(f64::MIN, f64::MAX)
}
