//! Polygon helpers built on the scalar cross product.
//!
//! Polygons are plain vertex slices; the closing edge from the last vertex back
//! to the first is implicit.

use std::cmp::Ordering;

use super::{GeomCfg, Vector};

/// Turn direction of three points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

#[inline]
fn turn(a: Vector, b: Vector, c: Vector) -> f64 {
    (b - a).cross(c - a)
}

/// Orientation of `a → b → c`; `|cross| <= eps` counts as collinear.
pub fn orientation(a: Vector, b: Vector, c: Vector, eps: f64) -> Orientation {
    let t = turn(a, b, c);
    if t > eps {
        Orientation::CounterClockwise
    } else if t < -eps {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Shoelace area; positive for counterclockwise vertex order.
pub fn signed_area(points: &[Vector]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let n = points.len();
    let twice: f64 = (0..n).map(|i| points[i].cross(points[(i + 1) % n])).sum();
    0.5 * twice
}

/// Area centroid of a simple polygon. None for fewer than three vertices or a
/// (near) zero area.
pub fn area_centroid(points: &[Vector], cfg: GeomCfg) -> Option<Vector> {
    if points.len() < 3 {
        return None;
    }
    let mut a = 0.0;
    let mut c = Vector::zero();
    for i in 0..points.len() {
        let p = points[i];
        let q = points[(i + 1) % points.len()];
        let cross = p.cross(q);
        a += cross;
        c += (p + q) * cross;
    }
    a *= 0.5;
    if a.abs() < cfg.eps_area {
        return None;
    }
    Some(c / (6.0 * a))
}

/// Andrew’s monotone chain convex hull (returns hull in CCW order).
///
/// Collinear boundary points are dropped. None when fewer than two distinct
/// points remain after dedup.
pub fn convex_hull(points: &[Vector], cfg: GeomCfg) -> Option<Vec<Vector>> {
    if points.len() < 2 {
        return None;
    }
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(|a, b| match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    });
    pts.dedup_by(|a, b| a.distance(*b) < cfg.eps_dedup);
    if pts.len() < 2 {
        return None;
    }
    let mut lower: Vec<Vector> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && turn(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Vector> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && turn(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    Some(hull)
}

/// `sides` vertices evenly spaced on a circle, counterclockwise from `phase`.
/// Fewer than three sides yields an empty vector.
pub fn regular_polygon(center: Vector, radius: f64, sides: usize, phase: f64) -> Vec<Vector> {
    if sides < 3 {
        return Vec::new();
    }
    let delta = std::f64::consts::TAU / sides as f64;
    (0..sides)
        .map(|k| center + Vector::from_polar(radius, phase + k as f64 * delta))
        .collect()
}
