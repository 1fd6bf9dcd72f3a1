//! Error type for the few operations that can refuse their input.
//!
//! Queries without an answer for degenerate input (hull of a single point,
//! centroid of a zero-area polygon, inverse of a singular map) return `Option`
//! instead.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// Normalizing a vector of magnitude zero.
    #[error("cannot normalize the zero vector")]
    ZeroVector,
    /// A style value outside its admissible range.
    #[error("invalid value {value} for style field `{field}`")]
    InvalidStyle { field: &'static str, value: f64 },
}
