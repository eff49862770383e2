use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::axis::DateAxis;
use crate::core::primitives::{parse_amount, parse_calendar_date};
use crate::core::types::{ParseFailure, RawRecord, RawValue};

/// One entity's values aligned 1:1 with a [`DateAxis`].
///
/// `None` marks a gap: the entity has no value for that date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub entity: String,
    pub points: Vec<Option<f64>>,
}

impl Series {
    #[must_use]
    pub fn new(entity: impl Into<String>, points: Vec<Option<f64>>) -> Self {
        Self {
            entity: entity.into(),
            points,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.points.get(index).copied().flatten()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().filter_map(|point| *point)
    }

    /// Latest non-gap value.
    #[must_use]
    pub fn latest_value(&self) -> Option<f64> {
        self.points.iter().rev().find_map(|point| *point)
    }

    /// Sum of non-gap values, or `None` when the series is all gaps.
    #[must_use]
    pub fn total(&self) -> Option<f64> {
        self.values().fold(None, |acc, value| Some(acc.unwrap_or(0.0) + value))
    }
}

/// Aligns one entity's sparse `date -> value` entries to `axis`.
///
/// See [`align_series_reporting`] for the rules; this variant discards the
/// value-parse diagnostics.
#[must_use]
pub fn align_series<'a, I>(axis: &DateAxis, entity: &str, entries: I) -> Series
where
    I: IntoIterator<Item = (&'a str, &'a RawValue)>,
{
    align_series_reporting(axis, entity, entries).0
}

/// Aligns one entity's sparse `date -> value` entries to `axis`.
///
/// The output always has `axis.len()` points. Dates missing from the entries
/// or from the axis stay `None`; values that fail to parse are `None` and are
/// reported. Nothing is filled forward or zero-filled. When an entity repeats
/// a date, the last entry wins. Unparseable date keys are skipped without a
/// report, since the axis builder already reports them.
pub fn align_series_reporting<'a, I>(
    axis: &DateAxis,
    entity: &str,
    entries: I,
) -> (Series, Vec<ParseFailure>)
where
    I: IntoIterator<Item = (&'a str, &'a RawValue)>,
{
    let mut slots: Vec<Option<&RawValue>> = vec![None; axis.len()];
    for (date, value) in entries {
        let Ok(date) = parse_calendar_date(date) else {
            continue;
        };
        if let Some(index) = axis.index_of(date) {
            slots[index] = Some(value);
        }
    }

    let mut rejected = Vec::new();
    let points = slots
        .into_iter()
        .map(|slot| {
            let raw = slot?;
            match parse_amount(raw) {
                Ok(value) => value,
                Err(reason) => {
                    rejected.push(ParseFailure::value(entity, raw, reason));
                    None
                }
            }
        })
        .collect();

    if !rejected.is_empty() {
        warn!(
            entity,
            rejected = rejected.len(),
            "treated unparseable values as absent"
        );
    }

    (Series::new(entity, points), rejected)
}

/// Groups flat records by entity (first-seen order) and aligns each group.
pub fn align_records(axis: &DateAxis, records: &[RawRecord]) -> (Vec<Series>, Vec<ParseFailure>) {
    let mut grouped: IndexMap<&str, Vec<(&str, &RawValue)>> = IndexMap::new();
    for record in records {
        grouped
            .entry(record.entity.as_str())
            .or_default()
            .push((record.date.as_str(), &record.value));
    }

    let mut rejected = Vec::new();
    let series = grouped
        .into_iter()
        .map(|(entity, entries)| {
            let (series, failures) = align_series_reporting(axis, entity, entries);
            rejected.extend(failures);
            series
        })
        .collect();

    (series, rejected)
}
