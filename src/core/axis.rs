use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::primitives::parse_calendar_date;
use crate::core::types::{CalendarDate, ParseFailure, RawRecord};

/// Sorted, deduplicated chronological axis shared by every series of a chart.
///
/// Construction is the only way to obtain an axis, so the strictly increasing
/// invariant holds for every instance.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<CalendarDate>", into = "Vec<CalendarDate>")]
pub struct DateAxis {
    dates: Vec<CalendarDate>,
}

impl DateAxis {
    #[must_use]
    pub fn from_dates(dates: impl IntoIterator<Item = CalendarDate>) -> Self {
        let mut dates: Vec<CalendarDate> = dates.into_iter().collect();
        dates.sort_unstable();
        dates.dedup();
        Self { dates }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    #[must_use]
    pub fn dates(&self) -> &[CalendarDate] {
        &self.dates
    }

    #[must_use]
    pub fn date_at(&self, index: usize) -> Option<CalendarDate> {
        self.dates.get(index).copied()
    }

    #[must_use]
    pub fn index_of(&self, date: CalendarDate) -> Option<usize> {
        self.dates.binary_search(&date).ok()
    }

    #[must_use]
    pub fn first(&self) -> Option<CalendarDate> {
        self.dates.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<CalendarDate> {
        self.dates.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.dates.iter().copied()
    }
}

impl From<Vec<CalendarDate>> for DateAxis {
    fn from(dates: Vec<CalendarDate>) -> Self {
        Self::from_dates(dates)
    }
}

impl From<DateAxis> for Vec<CalendarDate> {
    fn from(axis: DateAxis) -> Self {
        axis.dates
    }
}

/// Result of building an axis: the axis plus the records dropped on the way.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisBuild {
    pub axis: DateAxis,
    pub rejected: Vec<ParseFailure>,
}

/// Collects the distinct dates of one or more record collections.
///
/// Unparseable dates are dropped and reported in `rejected`; they never fail
/// the build. With no valid dates the axis is empty.
pub fn build_axis<'a, I>(collections: I) -> AxisBuild
where
    I: IntoIterator<Item = &'a [RawRecord]>,
{
    let mut dates = Vec::new();
    let mut rejected = Vec::new();

    for records in collections {
        for record in records {
            match parse_calendar_date(&record.date) {
                Ok(date) => dates.push(date),
                Err(reason) => {
                    rejected.push(ParseFailure::date(&record.entity, &record.date, reason));
                }
            }
        }
    }

    if !rejected.is_empty() {
        warn!(
            rejected = rejected.len(),
            "dropped records with unparseable dates"
        );
    }

    let axis = DateAxis::from_dates(dates);
    debug!(
        dates = axis.len(),
        first = ?axis.first(),
        last = ?axis.last(),
        "built date axis"
    );

    AxisBuild { axis, rejected }
}
