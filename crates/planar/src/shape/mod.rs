//! Drawable shape as data: bounds, an optional path and its style.
//!
//! The shape never draws. It keeps the geometric bookkeeping a view layer
//! needs: emptiness, the intrinsic size that fits the stroked path, and
//! refitting its bounds to the path.

mod style;

use serde::{Deserialize, Serialize};

use crate::error::GeomError;
use crate::geom2::{Rect, Size, Vector};
use crate::path::Path;

pub use style::{Color, FillRule, LineCap, LineJoin, Style};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub bounds: Rect,
    #[serde(default)]
    path: Option<Path>,
    #[serde(default)]
    pub style: Style,
}

impl Shape {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            path: None,
            style: Style::default(),
        }
    }

    /// Shape whose bounds are the path's bounding box (zero rect if the path
    /// has no geometry).
    pub fn with_path(path: Path) -> Self {
        let bounds = path.bounding_box().unwrap_or_default();
        Self {
            bounds,
            path: Some(path),
            style: Style::default(),
        }
    }

    #[inline]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    pub fn set_path(&mut self, path: Option<Path>) {
        self.path = path;
    }

    fn path_mut(&mut self) -> &mut Path {
        self.path.get_or_insert_with(Path::new)
    }

    pub fn add_circle(&mut self, center: Vector, radius: f64) {
        self.path_mut().add_circle(center, radius);
    }

    pub fn add_polygon(&mut self, points: &[Vector], closed: bool) {
        self.path_mut().add_polygon(points, closed);
    }

    pub fn add_line(&mut self, start: Vector, stop: Vector) {
        self.path_mut().add_line(start, stop);
    }

    /// True without a path or with a path that has no elements.
    pub fn is_empty(&self) -> bool {
        self.path.as_ref().map_or(true, Path::is_empty)
    }

    /// Rejects negative or non-finite widths.
    pub fn set_line_width(&mut self, width: f64) -> Result<(), GeomError> {
        if !(width.is_finite() && width >= 0.0) {
            return Err(GeomError::InvalidStyle {
                field: "line_width",
                value: width,
            });
        }
        self.style.line_width = width;
        Ok(())
    }

    /// Clamped to `[0, 1]`.
    pub fn set_stroke_start(&mut self, start: f64) {
        self.style.stroke_start = start.clamp(0.0, 1.0);
    }

    /// Clamped to `[0, 1]`.
    pub fn set_stroke_end(&mut self, end: f64) {
        self.style.stroke_end = end.clamp(0.0, 1.0);
    }

    /// Half the stroke width. A negative or NaN width written straight into
    /// `style` counts as no stroke.
    fn half_stroke(&self) -> f64 {
        self.style.line_width.max(0.0) / 2.0
    }

    /// Size that holds the path from the origin plus half the stroke on the
    /// far sides. Zero without path geometry.
    pub fn intrinsic_content_size(&self) -> Size {
        match self.path.as_ref().and_then(Path::bounding_box) {
            Some(bb) => {
                let half = self.half_stroke();
                let max = bb.max();
                Size::new(max.x + half, max.y + half)
            }
            None => Size::zero(),
        }
    }

    /// Path bounding box grown by half the line width on every side, so the
    /// stroke stays inside. None without path geometry.
    pub fn fitted_bounds(&self) -> Option<Rect> {
        let half = self.half_stroke();
        self.path
            .as_ref()
            .and_then(Path::bounding_box)
            .map(|bb| bb.inset(-half, -half))
    }

    /// Replace the bounds with [`Shape::fitted_bounds`]; no-op without path
    /// geometry.
    pub fn adjust_to_fit_path(&mut self) {
        if let Some(b) = self.fitted_bounds() {
            self.bounds = b;
        }
    }
}
