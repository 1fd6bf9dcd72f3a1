//! Plain path outlines and the circle/polygon/line construction helpers.
//!
//! A `Path` is an ordered element list, the geometric content a drawing
//! backend turns into its own path object. Bounding boxes follow the usual
//! drawing-API convention: every anchor point and every ellipse rect counts.

use serde::{Deserialize, Serialize};

use crate::geom2::{Affine2, Rect, Vector};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathElement {
    MoveTo { to: Vector },
    LineTo { to: Vector },
    /// Closed ellipse inscribed in `rect`.
    Ellipse { rect: Rect },
    Close,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    elements: Vec<PathElement>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_elements(elements: Vec<PathElement>) -> Self {
        Self { elements }
    }

    #[inline]
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn move_to(&mut self, p: Vector) {
        self.elements.push(PathElement::MoveTo { to: p });
    }

    pub fn line_to(&mut self, p: Vector) {
        self.elements.push(PathElement::LineTo { to: p });
    }

    pub fn add_ellipse(&mut self, rect: Rect) {
        self.elements.push(PathElement::Ellipse { rect });
    }

    pub fn close_subpath(&mut self) {
        self.elements.push(PathElement::Close);
    }

    /// Circle as the ellipse inscribed in the square around `center`.
    pub fn add_circle(&mut self, center: Vector, radius: f64) {
        self.add_ellipse(Rect::new(
            center.x - radius,
            center.y - radius,
            radius * 2.0,
            radius * 2.0,
        ));
    }

    /// Move to the first point, then a line to every point (the first one
    /// included), then close when `closed`. An empty slice adds nothing.
    pub fn add_polygon(&mut self, points: &[Vector], closed: bool) {
        let Some(first) = points.first() else {
            return;
        };
        self.move_to(*first);
        for p in points {
            self.line_to(*p);
        }
        if closed {
            self.close_subpath();
        }
    }

    pub fn add_line(&mut self, start: Vector, stop: Vector) {
        self.move_to(start);
        self.line_to(stop);
    }

    /// Anchor points of move/line elements, in order.
    pub fn points(&self) -> impl Iterator<Item = Vector> + '_ {
        self.elements.iter().filter_map(|e| match e {
            PathElement::MoveTo { to } | PathElement::LineTo { to } => Some(*to),
            _ => None,
        })
    }

    /// Smallest rect containing all anchor points and ellipse rects.
    /// None for a path with no geometry.
    pub fn bounding_box(&self) -> Option<Rect> {
        Rect::from_points(self.elements.iter().flat_map(|e| {
            let pts: Vec<Vector> = match e {
                PathElement::MoveTo { to } | PathElement::LineTo { to } => vec![*to],
                PathElement::Ellipse { rect } => vec![rect.min(), rect.max()],
                PathElement::Close => Vec::new(),
            };
            pts
        }))
    }

    /// Image under `f`. Ellipses map to the ellipse inscribed in the bounding
    /// box of the transformed rect, exact for axis-aligned scalings and
    /// translations only.
    pub fn transformed(&self, f: &Affine2) -> Path {
        let elements = self
            .elements
            .iter()
            .map(|e| match *e {
                PathElement::MoveTo { to } => PathElement::MoveTo { to: f.apply(to) },
                PathElement::LineTo { to } => PathElement::LineTo { to: f.apply(to) },
                PathElement::Ellipse { rect } => PathElement::Ellipse {
                    rect: Rect::from_points(rect.corners().map(|c| f.apply(c))).unwrap_or(rect),
                },
                PathElement::Close => PathElement::Close,
            })
            .collect();
        Path { elements }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_is_inscribed_ellipse() {
        let mut p = Path::new();
        p.add_circle(Vector::new(10.0, 5.0), 2.0);
        assert_eq!(
            p.elements(),
            &[PathElement::Ellipse {
                rect: Rect::new(8.0, 3.0, 4.0, 4.0)
            }]
        );
        assert_eq!(p.bounding_box(), Some(Rect::new(8.0, 3.0, 4.0, 4.0)));
    }

    #[test]
    fn polygon_elements_closed_and_open() {
        let pts = [
            Vector::new(0.0, 0.0),
            Vector::new(4.0, 0.0),
            Vector::new(2.0, 3.0),
        ];
        let mut closed = Path::new();
        closed.add_polygon(&pts, true);
        assert_eq!(closed.elements().len(), 5);
        assert_eq!(closed.elements()[0], PathElement::MoveTo { to: pts[0] });
        assert_eq!(closed.elements()[1], PathElement::LineTo { to: pts[0] });
        assert_eq!(closed.elements()[4], PathElement::Close);

        let mut open = Path::new();
        open.add_polygon(&pts, false);
        assert_eq!(open.elements().len(), 4);
        assert_eq!(open.bounding_box(), Some(Rect::new(0.0, 0.0, 4.0, 3.0)));
    }

    #[test]
    fn empty_polygon_adds_nothing() {
        let mut p = Path::new();
        p.add_polygon(&[], true);
        assert!(p.is_empty());
        assert_eq!(p.bounding_box(), None);
    }

    #[test]
    fn close_only_path_has_no_bounds() {
        let p = Path::from_elements(vec![PathElement::Close]);
        assert!(!p.is_empty());
        assert_eq!(p.bounding_box(), None);
    }

    #[test]
    fn line_and_mixed_bounds() {
        let mut p = Path::new();
        p.add_line(Vector::new(-1.0, 2.0), Vector::new(3.0, -2.0));
        p.add_circle(Vector::new(5.0, 5.0), 1.0);
        assert_eq!(p.points().count(), 2);
        assert_eq!(p.bounding_box(), Some(Rect::new(-1.0, -2.0, 7.0, 8.0)));
    }

    #[test]
    fn transform_moves_points_and_ellipses() {
        let mut p = Path::new();
        p.add_line(Vector::new(0.0, 0.0), Vector::new(1.0, 0.0));
        p.add_circle(Vector::new(0.0, 0.0), 1.0);
        let f = Affine2::scaling(2.0, 3.0).then(&Affine2::translation(Vector::new(1.0, 1.0)));
        let q = p.transformed(&f);
        let pts: Vec<_> = q.points().collect();
        assert_eq!(pts, vec![Vector::new(1.0, 1.0), Vector::new(3.0, 1.0)]);
        assert_eq!(q.bounding_box(), Some(Rect::new(-1.0, -2.0, 4.0, 6.0)));
    }

    #[test]
    fn serde_shape_of_elements() {
        let mut p = Path::new();
        p.add_line(Vector::new(0.0, 1.0), Vector::new(2.0, 3.0));
        p.close_subpath();
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["elements"][0]["op"], "move_to");
        assert_eq!(json["elements"][1]["to"]["y"], 3.0);
        assert_eq!(json["elements"][2]["op"], "close");
        let back: Path = serde_json::from_value(json).unwrap();
        assert_eq!(back, p);
    }
}
