//! Plane geometry for shape drawing.
//!
//! Layout
//! - `geom2`: the `Vector` value type plus tolerances, rectangles, affine maps
//!   and the polygon helpers built on dot/cross products.
//! - `path`: plain path outlines (move/line/ellipse/close) and the circle,
//!   polygon and line construction helpers.
//! - `shape`: a drawable shape as data: an optional path, its bounds and the
//!   stroke/fill style, with the size derivations a view layer needs.
//!
//! Nothing here renders. Callers hand the values to whatever drawing backend
//! they use.

pub mod error;
pub mod geom2;
pub mod path;
pub mod shape;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::GeomError;
pub use geom2::{Affine2, GeomCfg, Rect, Size, Vector};
pub use path::{Path, PathElement};
pub use shape::{Color, FillRule, LineCap, LineJoin, Shape, Style};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::GeomError;
    pub use crate::geom2::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::geom2::{
        area_centroid, convex_hull, orientation, regular_polygon, signed_area, Affine2, GeomCfg,
        Orientation, Rect, Size, Vector,
    };
    pub use crate::path::{Path, PathElement};
    pub use crate::shape::{Color, FillRule, LineCap, LineJoin, Shape, Style};
}

/// Signed area of the parallelogram spanned by `a` and `b`.
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Vector, b: Vector) -> f64 {
    a.cross(b)
}
