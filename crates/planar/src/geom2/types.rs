//! Basic 2D types and tolerances.
//!
//! - `GeomCfg`: centralizes epsilons for degenerate areas and point dedup.
//! - `Size`, `Rect`: axis-aligned extents used for path bounds and shape frames.
//! - `Affine2`: 2D affine map `x ↦ M x + t` applied to vectors and paths.

use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};

use super::Vector;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Polygons with `|area|` below this are treated as degenerate.
    pub eps_area: f64,
    /// Points closer than this collapse into one during hull construction.
    pub eps_dedup: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_area: 1e-18,
            eps_dedup: 1e-12,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Axis-aligned rectangle given by an origin corner and a size.
///
/// A negative width or height is allowed; `min`/`max` always report the
/// standardized corners.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Vector,
    pub size: Size,
}

impl Rect {
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Vector::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Rect spanned by two opposite corners.
    pub fn from_corners(a: Vector, b: Vector) -> Self {
        let lo = Vector::new(a.x.min(b.x), a.y.min(b.y));
        let hi = Vector::new(a.x.max(b.x), a.y.max(b.y));
        Self::new(lo.x, lo.y, hi.x - lo.x, hi.y - lo.y)
    }

    /// Smallest rect containing every point; `None` for an empty input.
    pub fn from_points<I: IntoIterator<Item = Vector>>(points: I) -> Option<Self> {
        let mut it = points.into_iter();
        let first = it.next()?;
        let (lo, hi) = it.fold((first, first), |(lo, hi), p| {
            (
                Vector::new(lo.x.min(p.x), lo.y.min(p.y)),
                Vector::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        });
        Some(Self::from_corners(lo, hi))
    }

    #[inline]
    pub fn min(&self) -> Vector {
        let far = self.origin + Vector::new(self.size.width, self.size.height);
        Vector::new(self.origin.x.min(far.x), self.origin.y.min(far.y))
    }

    #[inline]
    pub fn max(&self) -> Vector {
        let far = self.origin + Vector::new(self.size.width, self.size.height);
        Vector::new(self.origin.x.max(far.x), self.origin.y.max(far.y))
    }

    #[inline]
    pub fn center(&self) -> Vector {
        self.min().lerp(self.max(), 0.5)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.size.width.abs()
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.size.height.abs()
    }

    /// Corners in counterclockwise order starting at `min`.
    pub fn corners(&self) -> [Vector; 4] {
        let lo = self.min();
        let hi = self.max();
        [lo, Vector::new(hi.x, lo.y), hi, Vector::new(lo.x, hi.y)]
    }

    /// Move each edge inward by `dx` (left/right) and `dy` (top/bottom).
    /// Negative amounts grow the rect. The result is standardized; an inset
    /// larger than half the extent collapses that axis to its center line.
    pub fn inset(&self, dx: f64, dy: f64) -> Rect {
        let lo = self.min();
        let hi = self.max();
        let c = self.center();
        let (x0, x1) = if hi.x - lo.x >= 2.0 * dx {
            (lo.x + dx, hi.x - dx)
        } else {
            (c.x, c.x)
        };
        let (y0, y1) = if hi.y - lo.y >= 2.0 * dy {
            (lo.y + dy, hi.y - dy)
        } else {
            (c.y, c.y)
        };
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    pub fn union(&self, other: &Rect) -> Rect {
        Rect::from_corners(
            Vector::new(self.min().x.min(other.min().x), self.min().y.min(other.min().y)),
            Vector::new(self.max().x.max(other.max().x), self.max().y.max(other.max().y)),
        )
    }

    /// Closed containment test.
    pub fn contains(&self, p: Vector) -> bool {
        let lo = self.min();
        let hi = self.max();
        p.x >= lo.x && p.x <= hi.x && p.y >= lo.y && p.y <= hi.y
    }

    pub fn approx_eq(&self, other: &Rect, eps: f64) -> bool {
        self.min().approx_eq(other.min(), eps) && self.max().approx_eq(other.max(), eps)
    }
}

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2 {
    pub m: Matrix2<f64>,
    pub t: Vector,
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Affine2 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector::zero(),
        }
    }

    #[inline]
    pub fn translation(t: Vector) -> Self {
        Self {
            m: Matrix2::identity(),
            t,
        }
    }

    /// Counterclockwise rotation about the origin.
    pub fn rotation(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            m: Matrix2::new(c, -s, s, c),
            t: Vector::zero(),
        }
    }

    #[inline]
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self {
            m: Matrix2::new(sx, 0.0, 0.0, sy),
            t: Vector::zero(),
        }
    }

    #[inline]
    pub fn apply(&self, p: Vector) -> Vector {
        Vector::from(self.m * Vector2::<f64>::from(p)) + self.t
    }

    /// Linear part only; use for directions.
    #[inline]
    pub fn apply_linear(&self, v: Vector) -> Vector {
        Vector::from(self.m * Vector2::<f64>::from(v))
    }

    /// `other ∘ self`: first `self`, then `other`.
    pub fn then(&self, other: &Affine2) -> Affine2 {
        Affine2 {
            m: other.m * self.m,
            t: other.apply(self.t),
        }
    }

    /// None if `M` is singular.
    pub fn inverse(&self) -> Option<Self> {
        self.m.try_inverse().map(|minv| Self {
            m: minv,
            t: -Vector::from(minv * Vector2::<f64>::from(self.t)),
        })
    }

    #[inline]
    pub fn is_orientation_preserving(&self) -> bool {
        self.m.determinant() > 0.0
    }
}
