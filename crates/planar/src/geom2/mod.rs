//! 2D geometry: the `Vector` value type and what is built directly on it.
//!
//! Purpose
//! - `Vector` carries magnitude, heading, unit-vector normalization, dot and
//!   cross products, and the arithmetic operators.
//! - Around it: tolerances (`GeomCfg`), axis-aligned `Rect`/`Size`, affine maps
//!   (`Affine2`), polygon helpers (signed area, orientation, centroid, hull) and
//!   a reproducible random polygon sampler.
//!
//! Conventions
//! - Angles are radians, counterclockwise from the positive x-axis.
//! - Positive signed area means counterclockwise vertex order.

pub mod rand;
mod types;
mod util;
mod vector;

pub use types::{Affine2, GeomCfg, Rect, Size};
pub use util::{area_centroid, convex_hull, orientation, regular_polygon, signed_area, Orientation};
pub use vector::Vector;

#[cfg(test)]
mod tests;
