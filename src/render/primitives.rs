use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color with 0..=1 channels.
///
/// Serialized as `#rrggbb` or `#rrggbbaa` so host apps can pass brand colors
/// straight from their theme files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let digits = input.trim().trim_start_matches('#');
        if !matches!(digits.len(), 6 | 8) || !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(ChartError::InvalidConfig(format!(
                "color `{input}` must be #rrggbb or #rrggbbaa"
            )));
        }

        let channel = |offset: usize| -> ChartResult<f64> {
            u8::from_str_radix(&digits[offset..offset + 2], 16)
                .map(|byte| f64::from(byte) / 255.0)
                .map_err(|e| ChartError::InvalidConfig(format!("color `{input}`: {e}")))
        };
        let alpha = if digits.len() == 8 { channel(6)? } else { 1.0 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    pub fn validate(self) -> ChartResult<()> {
        let channels = [self.red, self.green, self.blue, self.alpha];
        if channels
            .iter()
            .any(|value| !value.is_finite() || !(0.0..=1.0).contains(value))
        {
            return Err(ChartError::InvalidData(format!(
                "color channels must be finite and in [0, 1], got {self:?}"
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        write!(
            f,
            "#{:02x}{:02x}{:02x}",
            byte(self.red),
            byte(self.green),
            byte(self.blue)
        )?;
        if self.alpha < 1.0 {
            write!(f, "{:02x}", byte(self.alpha))?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

fn ensure_finite(what: &str, values: &[f64]) -> ChartResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!("{what} must be finite")))
    }
}

fn ensure_positive(what: &str, value: f64) -> ChartResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!("{what} must be finite and > 0")))
    }
}

/// Gridline or series stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_finite("line endpoints", &[self.x1, self.y1, self.x2, self.y2])?;
        ensure_positive("line stroke width", self.stroke_width)?;
        self.color.validate()
    }
}

/// Bar, or the square marker of an isolated line point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_finite("rect bounds", &[self.x, self.y, self.width, self.height])?;
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ChartError::InvalidData(
                "rect size must be >= 0".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// Pie wedge. Angles are degrees, clockwise from +x in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPrimitive {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub start_angle_deg: f64,
    pub sweep_angle_deg: f64,
    pub fill: Color,
}

impl ArcPrimitive {
    pub fn validate(self) -> ChartResult<()> {
        ensure_finite(
            "arc geometry",
            &[
                self.center_x,
                self.center_y,
                self.radius,
                self.start_angle_deg,
                self.sweep_angle_deg,
            ],
        )?;
        if self.radius < 0.0 {
            return Err(ChartError::InvalidData("arc radius must be >= 0".to_owned()));
        }
        if !(0.0..=360.0).contains(&self.sweep_angle_deg) {
            return Err(ChartError::InvalidData(format!(
                "arc sweep must be in [0, 360], got {}",
                self.sweep_angle_deg
            )));
        }
        self.fill.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Axis label anchored at `(x, y)` according to `h_align`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "text label must not be blank".to_owned(),
            ));
        }
        ensure_finite("text anchor", &[self.x, self.y])?;
        ensure_positive("font size", self.font_size_px)?;
        self.color.validate()
    }
}
