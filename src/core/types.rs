use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{parse_amount, parse_calendar_date};
use crate::error::{ChartError, ChartResult};

pub type CalendarDate = NaiveDate;

/// Untyped value as delivered by the data-fetch layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    #[default]
    Null,
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
            Self::Null => f.write_str("null"),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Option<f64>> for RawValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Null, Self::Number)
    }
}

/// One record exactly as received from the budgeting API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub entity: String,
    pub date: String,
    #[serde(default)]
    pub value: RawValue,
}

impl RawRecord {
    #[must_use]
    pub fn new(entity: impl Into<String>, date: impl Into<String>, value: impl Into<RawValue>) -> Self {
        Self {
            entity: entity.into(),
            date: date.into(),
            value: value.into(),
        }
    }

    /// Parses this record into the typed boundary shape.
    ///
    /// Fails only on an unparseable date. An unparseable value becomes `None`.
    pub fn parse(&self) -> Result<Record, ParseFailure> {
        let date = parse_calendar_date(&self.date)
            .map_err(|reason| ParseFailure::date(&self.entity, &self.date, reason))?;
        Ok(Record {
            entity: self.entity.clone(),
            date,
            value: parse_amount(&self.value).ok().flatten(),
        })
    }
}

/// Typed record. `value == None` means "no data", never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub entity: String,
    pub date: CalendarDate,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseField {
    Date,
    Value,
}

/// Diagnostic for a record field that was dropped or treated as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseFailure {
    pub entity: String,
    pub field: ParseField,
    pub raw: String,
    pub reason: String,
}

impl ParseFailure {
    #[must_use]
    pub fn date(entity: &str, raw: &str, reason: String) -> Self {
        Self {
            entity: entity.to_owned(),
            field: ParseField::Date,
            raw: raw.to_owned(),
            reason,
        }
    }

    #[must_use]
    pub fn value(entity: &str, raw: &RawValue, reason: String) -> Self {
        Self {
            entity: entity.to_owned(),
            field: ParseField::Value,
            raw: raw.to_string(),
            reason,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Pixel margins between the viewport edge and the plot rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(16.0, 16.0, 28.0, 64.0)
    }
}

/// Drawing rectangle shared by geometry mapping and hit-testing.
///
/// Inner extents never go negative; margins wider than the viewport collapse
/// the plot to zero size rather than flipping it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    viewport: Viewport,
    margins: Margins,
}

impl PlotArea {
    pub fn new(viewport: Viewport, margins: Margins) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(Self {
            viewport,
            margins: margins.validate()?,
        })
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn margins(self) -> Margins {
        self.margins
    }

    #[must_use]
    pub fn width(self) -> f64 {
        f64::from(self.viewport.width)
    }

    #[must_use]
    pub fn height(self) -> f64 {
        f64::from(self.viewport.height)
    }

    #[must_use]
    pub fn left(self) -> f64 {
        self.margins.left
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.margins.top
    }

    #[must_use]
    pub fn inner_width(self) -> f64 {
        (self.width() - self.margins.left - self.margins.right).max(0.0)
    }

    #[must_use]
    pub fn inner_height(self) -> f64 {
        (self.height() - self.margins.top - self.margins.bottom).max(0.0)
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left() + self.inner_width()
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top() + self.inner_height()
    }
}
