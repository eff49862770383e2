use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How gridline and tooltip values are turned into text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum GridlineLabelPolicy {
    /// `12,500.00`
    Plain { precision: u8 },
    /// `$12,500`
    Currency { symbol: String, precision: u8 },
    /// `$12.5k`, `$3M`
    Compact { symbol: String },
}

impl Default for GridlineLabelPolicy {
    fn default() -> Self {
        Self::Currency {
            symbol: "$".to_owned(),
            precision: 0,
        }
    }
}

/// Most decimals a label may carry.
pub(crate) const MAX_LABEL_PRECISION: u8 = 12;

impl GridlineLabelPolicy {
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        format_value_label(value, self)
    }

    /// Same policy with enough decimals to tell gridlines `step` apart.
    ///
    /// Precision is only ever raised, so `0.08` steps under a
    /// `Currency { precision: 0 }` policy print `$0.08`, `$0.16`, ...
    #[must_use]
    pub fn for_step(&self, step: f64) -> Self {
        let needed = step_precision(step);
        match self {
            Self::Plain { precision } => Self::Plain {
                precision: (*precision).max(needed),
            },
            Self::Currency { symbol, precision } => Self::Currency {
                symbol: symbol.clone(),
                precision: (*precision).max(needed),
            },
            Self::Compact { .. } => self.clone(),
        }
    }
}

// Decimals needed to print multiples of a fractional `step` exactly,
// capped two digits past its leading digit.
fn step_precision(step: f64) -> u8 {
    if !step.is_finite() || step <= 0.0 || step >= 1.0 {
        return 0;
    }
    let leading = (-step.log10() - 1e-9)
        .ceil()
        .clamp(0.0, f64::from(MAX_LABEL_PRECISION)) as u8;
    let last = leading.saturating_add(2).min(MAX_LABEL_PRECISION);
    (leading..=last)
        .find(|decimals| {
            let scaled = step * 10f64.powi(i32::from(*decimals));
            (scaled - scaled.round()).abs() <= 1e-6 * scaled
        })
        .unwrap_or(last)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateLabelPattern {
    /// `2024-03-01`
    Iso,
    /// `Mar 01`
    #[default]
    MonthDay,
    /// `Mar 2024`
    MonthYear,
}

impl DateLabelPattern {
    fn chrono_format(self) -> &'static str {
        match self {
            Self::Iso => "%Y-%m-%d",
            Self::MonthDay => "%b %d",
            Self::MonthYear => "%b %Y",
        }
    }
}

#[must_use]
pub fn format_date_label(date: NaiveDate, pattern: DateLabelPattern) -> String {
    date.format(pattern.chrono_format()).to_string()
}

#[must_use]
pub fn format_value_label(value: f64, policy: &GridlineLabelPolicy) -> String {
    if !value.is_finite() {
        return "-".to_owned();
    }

    match policy {
        GridlineLabelPolicy::Plain { precision } => {
            with_sign(value, "", &group_thousands(value.abs(), usize::from(*precision)))
        }
        GridlineLabelPolicy::Currency { symbol, precision } => with_sign(
            value,
            symbol,
            &group_thousands(value.abs(), usize::from(*precision)),
        ),
        GridlineLabelPolicy::Compact { symbol } => with_sign(value, symbol, &compact(value.abs())),
    }
}

fn with_sign(value: f64, symbol: &str, magnitude: &str) -> String {
    let is_zero = magnitude
        .chars()
        .all(|ch| !ch.is_ascii_digit() || ch == '0');
    if value < 0.0 && !is_zero {
        format!("-{symbol}{magnitude}")
    } else {
        format!("{symbol}{magnitude}")
    }
}

fn group_thousands(magnitude: f64, precision: usize) -> String {
    let text = format!("{magnitude:.precision$}");
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let digits = integer.len();
    let mut grouped = String::with_capacity(text.len() + digits / 3);
    for (index, ch) in integer.chars().enumerate() {
        if index > 0 && (digits - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

fn compact(magnitude: f64) -> String {
    let (scaled, suffix) = if magnitude >= 1e9 {
        (magnitude / 1e9, "B")
    } else if magnitude >= 1e6 {
        (magnitude / 1e6, "M")
    } else if magnitude >= 1e3 {
        (magnitude / 1e3, "k")
    } else {
        (magnitude, "")
    };
    format!("{}{suffix}", trim_decimal(format!("{scaled:.1}")))
}

fn trim_decimal(mut text: String) -> String {
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    text
}

/// Keeps labels at least `min_spacing_px` apart, scanning left to right.
///
/// The last label replaces the previously kept one when only it still fits,
/// so the most recent date stays labelled.
#[must_use]
pub(crate) fn select_with_min_spacing<T: Clone>(
    mut items: Vec<(T, f64)>,
    min_spacing_px: f64,
) -> Vec<(T, f64)> {
    items.sort_by(|left, right| left.1.total_cmp(&right.1));
    if items.len() <= 1 || !min_spacing_px.is_finite() || min_spacing_px <= 0.0 {
        return items;
    }

    let mut selected: Vec<(T, f64)> = Vec::with_capacity(items.len());
    for item in &items {
        let fits = selected
            .last()
            .is_none_or(|last| item.1 - last.1 >= min_spacing_px);
        if fits {
            selected.push(item.clone());
        }
    }

    let Some(last_item) = items.last() else {
        return selected;
    };
    let tail_selected = selected
        .last()
        .is_some_and(|kept| (kept.1 - last_item.1).abs() <= 1e-9);
    if !tail_selected {
        let kept = selected.len();
        if kept == 1 {
            selected[0] = last_item.clone();
        } else if last_item.1 - selected[kept - 2].1 >= min_spacing_px {
            selected[kept - 1] = last_item.clone();
        }
    }

    selected
}
