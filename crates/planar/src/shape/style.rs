//! Stroke and fill attributes of a shape.

use serde::{Deserialize, Serialize};

use crate::error::GeomError;

/// RGBA color, components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const CLEAR: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgba(r, g, b, 1.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

/// End style of open subpaths when stroked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// Joint style between connected segments when stroked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Fill and stroke attributes. Missing fields deserialize to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// None for no fill.
    pub fill_color: Option<Color>,
    pub fill_rule: FillRule,
    /// None for no stroke.
    pub stroke_color: Option<Color>,
    /// Fraction of the path length where stroking starts, in `[0, 1]`.
    pub stroke_start: f64,
    /// Fraction of the path length where stroking ends, in `[0, 1]`.
    pub stroke_end: f64,
    pub line_width: f64,
    pub miter_limit: f64,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    pub line_dash_phase: f64,
    /// Alternating painted/unpainted lengths; None draws a solid line.
    pub line_dash_pattern: Option<Vec<f64>>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill_color: Some(Color::BLACK),
            fill_rule: FillRule::NonZero,
            stroke_color: None,
            stroke_start: 0.0,
            stroke_end: 1.0,
            line_width: 1.0,
            miter_limit: 10.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            line_dash_phase: 0.0,
            line_dash_pattern: None,
        }
    }
}

impl Style {
    /// Check value ranges; reports the first offending field.
    pub fn validate(&self) -> Result<(), GeomError> {
        let unit = |field: &'static str, value: f64| {
            if (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(GeomError::InvalidStyle { field, value })
            }
        };
        let non_negative = |field: &'static str, value: f64| {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(GeomError::InvalidStyle { field, value })
            }
        };
        unit("stroke_start", self.stroke_start)?;
        unit("stroke_end", self.stroke_end)?;
        non_negative("line_width", self.line_width)?;
        non_negative("miter_limit", self.miter_limit)?;
        if !self.line_dash_phase.is_finite() {
            return Err(GeomError::InvalidStyle {
                field: "line_dash_phase",
                value: self.line_dash_phase,
            });
        }
        if let Some(pattern) = &self.line_dash_pattern {
            for &len in pattern {
                non_negative("line_dash_pattern", len)?;
            }
        }
        Ok(())
    }
}
