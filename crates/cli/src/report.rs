use anyhow::{ensure, Context, Result};
use planar::geom2::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
use planar::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::Path as FsPath;

/// Derived quantities of one vector, optionally paired with a second one.
#[derive(Debug, Serialize)]
pub struct VectorReport {
    pub vector: Vector,
    pub magnitude: f64,
    pub heading: f64,
    /// None for the zero vector.
    pub unit: Option<Vector>,
    pub dot: Option<f64>,
    pub cross: Option<f64>,
    pub angle_to: Option<f64>,
}

pub fn vector_report(v: Vector, other: Option<Vector>) -> VectorReport {
    let unit = match v.unit_vector() {
        Ok(u) => Some(u),
        Err(err) => {
            tracing::warn!(x = v.x, y = v.y, %err, "no unit vector");
            None
        }
    };
    VectorReport {
        vector: v,
        magnitude: v.magnitude(),
        heading: v.heading(),
        unit,
        dot: other.map(|o| v.dot(o)),
        cross: other.map(|o| v.cross(o)),
        angle_to: other.map(|o| v.angle_to(o)),
    }
}

#[derive(Debug, Serialize)]
pub struct ShapeReport {
    pub is_empty: bool,
    pub elements: usize,
    pub bounds: Rect,
    pub bounding_box: Option<Rect>,
    pub fitted_bounds: Option<Rect>,
    pub intrinsic_size: Size,
}

/// Read a JSON shape description and check its style values.
pub fn load_shape(path: &FsPath) -> Result<Shape> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let shape: Shape =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    shape
        .style
        .validate()
        .with_context(|| format!("invalid style in {}", path.display()))?;
    Ok(shape)
}

pub fn shape_report(shape: &Shape) -> ShapeReport {
    ShapeReport {
        is_empty: shape.is_empty(),
        elements: shape.path().map_or(0, |p| p.elements().len()),
        bounds: shape.bounds,
        bounding_box: shape.path().and_then(Path::bounding_box),
        fitted_bounds: shape.fitted_bounds(),
        intrinsic_size: shape.intrinsic_content_size(),
    }
}

#[derive(Debug, Serialize)]
pub struct PolygonReport {
    /// Requested vertex count; the hull may keep fewer.
    pub sides: u64,
    pub seed: u64,
    pub index: u64,
    pub vertices: Vec<Vector>,
    pub signed_area: f64,
    pub centroid: Option<Vector>,
    pub bounding_box: Option<Rect>,
}

pub fn polygon_report(sides: u64, seed: u64, index: u64) -> Result<PolygonReport> {
    ensure!(sides >= 3, "a polygon needs at least 3 sides, got {sides}");
    let count = usize::try_from(sides).context("side count does not fit in memory")?;
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(count),
        ..RadialCfg::default()
    };
    let vertices = draw_polygon_radial(cfg, ReplayToken { seed, index })
        .context("sampled points did not span a polygon")?;
    Ok(PolygonReport {
        sides,
        seed,
        index,
        signed_area: signed_area(&vertices),
        centroid: area_centroid(&vertices, GeomCfg::default()),
        bounding_box: Rect::from_points(vertices.iter().copied()),
        vertices,
    })
}

/// Pretty JSON to `out`, or to stdout when `out` is None.
pub fn emit<T: Serialize>(value: &T, out: Option<&FsPath>) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
        }
        None => println!("{text}"),
    }
    Ok(())
}
