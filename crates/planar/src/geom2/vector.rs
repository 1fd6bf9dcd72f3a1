//! The 2D vector value type.
//!
//! `Vector` is a plain `Copy` pair of `f64` coordinates. Operations never mutate
//! their receiver; they return new values. Addition and subtraction are the
//! `+`/`-` operators. Non-finite inputs are not validated and propagate per
//! IEEE-754.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::GeomError;

/// Displacement or direction in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Build from polar form: `(magnitude·cos h, magnitude·sin h)`.
    #[inline]
    pub fn from_polar(magnitude: f64, heading: f64) -> Self {
        let (s, c) = heading.sin_cos();
        Self {
            x: magnitude * c,
            y: magnitude * s,
        }
    }

    /// Euclidean length `sqrt(x² + y²)`.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Angle from the positive x-axis in radians, `atan2(y, x)` in `[-π, π]`.
    ///
    /// Zero coordinates keep their sign as `atan2` sees them: `(0, 0)` gives 0,
    /// `(-0, 0)` gives π and `(0, -0)` gives -0. A zero heading carries no meaning.
    #[inline]
    pub fn heading(&self) -> f64 {
        self.y.atan2(self.x)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Same direction, magnitude 1.
    ///
    /// Errors with [`GeomError::ZeroVector`] when both coordinates are zero.
    /// A NaN coordinate is not rejected and yields NaN coordinates.
    ///
    /// Scales by the larger coordinate first so subnormal and near-overflow
    /// inputs still normalize to magnitude 1.
    pub fn unit_vector(&self) -> Result<Vector, GeomError> {
        if self.is_zero() {
            return Err(GeomError::ZeroVector);
        }
        let s = self.x.abs().max(self.y.abs());
        let w = *self / s;
        Ok(w / w.magnitude())
    }

    #[inline]
    pub fn dot(&self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Scalar 2D cross product `x1*y2 - y1*x2` (perp-dot).
    /// Positive when `other` lies counterclockwise of `self`.
    #[inline]
    pub fn cross(&self, other: Vector) -> f64 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn scale(&self, factor: f64) -> Vector {
        *self * factor
    }

    /// Coordinatewise comparison: both coordinates differ by less than `eps`.
    #[inline]
    pub fn approx_eq(&self, other: Vector, eps: f64) -> bool {
        (self.x - other.x).abs() < eps && (self.y - other.y).abs() < eps
    }

    #[inline]
    pub fn distance(&self, other: Vector) -> f64 {
        (*self - other).magnitude()
    }

    /// Rotated by +90°.
    #[inline]
    pub fn perp(&self) -> Vector {
        Vector::new(-self.y, self.x)
    }

    /// Rotated counterclockwise by `angle` radians.
    pub fn rotated(&self, angle: f64) -> Vector {
        let (s, c) = angle.sin_cos();
        Vector::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    /// Signed angle from `self` to `other` in `(-π, π]`.
    #[inline]
    pub fn angle_to(&self, other: Vector) -> f64 {
        self.cross(other).atan2(self.dot(other))
    }

    /// Linear interpolation; `t = 0` gives `self`, `t = 1` gives `other`.
    #[inline]
    pub fn lerp(&self, other: Vector, t: f64) -> Vector {
        *self + (other - *self) * t
    }
}

impl Add for Vector {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, k: f64) -> Vector {
        Vector::new(self.x * k, self.y * k)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;
    #[inline]
    fn mul(self, v: Vector) -> Vector {
        v * self
    }
}

impl Div<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn div(self, k: f64) -> Vector {
        Vector::new(self.x / k, self.y / k)
    }
}

impl Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl AddAssign for Vector {
    #[inline]
    fn add_assign(&mut self, rhs: Vector) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector) {
        *self = *self - rhs;
    }
}

impl Sum for Vector {
    fn sum<I: Iterator<Item = Vector>>(iter: I) -> Vector {
        iter.fold(Vector::zero(), |acc, v| acc + v)
    }
}

impl From<Vector2<f64>> for Vector {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Vector::new(v.x, v.y)
    }
}

impl From<Vector> for Vector2<f64> {
    #[inline]
    fn from(v: Vector) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Vector {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Vector::new(x, y)
    }
}
