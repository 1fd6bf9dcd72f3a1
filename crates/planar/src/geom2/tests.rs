use super::*;
use crate::error::GeomError;
use proptest::prelude::*;
use ::rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::{FRAC_PI_2, PI};

fn any_vector() -> impl Strategy<Value = Vector> {
    (-1e3f64..1e3, -1e3f64..1e3).prop_map(|(x, y)| Vector::new(x, y))
}

fn nonzero_vector() -> impl Strategy<Value = Vector> {
    (-1e6f64..1e6, -1e6f64..1e6)
        .prop_map(|(x, y)| Vector::new(x, y))
        .prop_filter("non-zero magnitude", |v| v.magnitude() > 1e-6)
}

proptest! {
    #[test]
    fn unit_vector_has_magnitude_one(v in nonzero_vector()) {
        let u = v.unit_vector().unwrap();
        prop_assert!((u.magnitude() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn unit_vector_keeps_heading(v in nonzero_vector()) {
        let u = v.unit_vector().unwrap();
        prop_assert!((u.heading() - v.heading()).abs() < 1e-14);
    }

    #[test]
    fn self_dot_is_squared_magnitude(v in any_vector()) {
        let d = v.dot(v);
        let m = v.magnitude();
        prop_assert!((d - m * m).abs() <= 1e-12 * d.max(1.0));
    }

    #[test]
    fn dot_commutes(a in any_vector(), b in any_vector()) {
        prop_assert_eq!(a.dot(b), b.dot(a));
    }

    #[test]
    fn dot_is_linear_in_scale(a in any_vector(), b in any_vector(), k in -1e3f64..1e3) {
        let lhs = a.scale(k).dot(b);
        let rhs = k * a.dot(b);
        let bound = 1e-12 * (k.abs() * a.magnitude() * b.magnitude()).max(1e-300);
        prop_assert!((lhs - rhs).abs() <= bound);
    }

    #[test]
    fn dot_distributes_over_addition(a in any_vector(), b in any_vector(), c in any_vector()) {
        let lhs = (a + b).dot(c);
        let rhs = a.dot(c) + b.dot(c);
        let bound = 1e-12 * ((a.magnitude() + b.magnitude()) * c.magnitude()).max(1e-300);
        prop_assert!((lhs - rhs).abs() <= bound);
    }

    #[test]
    fn cross_is_antisymmetric(a in any_vector(), b in any_vector()) {
        prop_assert_eq!(a.cross(b), -b.cross(a));
        prop_assert_eq!(a.dot(a.perp()), 0.0);
    }

    #[test]
    fn negation_rotates_heading_by_pi(v in nonzero_vector()) {
        let n = v.scale(-1.0);
        prop_assert_eq!(n.magnitude(), v.magnitude());
        let turned = (n.heading() - v.heading()).rem_euclid(2.0 * PI);
        prop_assert!((turned - PI).abs() < 1e-12);
    }
}

#[test]
fn zero_vector_policy_is_domain_error() {
    let err = Vector::new(0.0, 0.0).unit_vector().unwrap_err();
    assert_eq!(err, GeomError::ZeroVector);
    assert_eq!(err.to_string(), "cannot normalize the zero vector");
}

#[test]
fn unit_vector_at_range_extremes() {
    for v in [
        Vector::new(5e-324, 5e-324),
        Vector::new(1e-320, 3e-321),
        Vector::new(3e-310, 1e-310),
        Vector::new(1e-310, 0.0),
        Vector::new(-1e-320, 0.0),
        Vector::new(1e308, 1e308),
        Vector::new(-f64::MAX, f64::MAX),
    ] {
        let u = v.unit_vector().unwrap();
        assert!((u.magnitude() - 1.0).abs() < 1e-15, "{v:?} -> {u:?}");
        assert!((u.heading() - v.heading()).abs() < 1e-14, "{v:?} -> {u:?}");
    }
}

#[test]
fn parallelogram_area_matches_cross() {
    let a = Vector::new(1.0, 0.0);
    let b = Vector::new(0.0, 2.5);
    assert!((crate::parallelogram_area(a, b) - 2.5).abs() < 1e-12);

    let mut rng = StdRng::seed_from_u64(42);
    let a = Vector::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
    let b = Vector::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
    let expected = a.x * b.y - a.y * b.x;
    assert!((crate::parallelogram_area(a, b) - expected).abs() < 1e-12);
}

#[test]
fn affine_compose_and_inverse() {
    let rot = Affine2::rotation(FRAC_PI_2);
    let shift = Affine2::translation(Vector::new(1.0, -1.0));
    let f = rot.then(&shift);
    // rotate (1, 0) to (0, 1), then shift
    let p = f.apply(Vector::new(1.0, 0.0));
    assert!(p.approx_eq(Vector::new(1.0, 0.0), 1e-12));
    let back = f.inverse().unwrap().apply(p);
    assert!(back.approx_eq(Vector::new(1.0, 0.0), 1e-12));
    assert!(f.is_orientation_preserving());
    // directions ignore the translation
    assert!(f.apply_linear(Vector::new(1.0, 0.0)).approx_eq(Vector::new(0.0, 1.0), 1e-12));
}

#[test]
fn affine_singular_and_reflection() {
    let flat = Affine2::scaling(1.0, 0.0);
    assert!(flat.inverse().is_none());
    let mirror = Affine2::scaling(-1.0, 1.0);
    assert!(!mirror.is_orientation_preserving());
    assert_eq!(mirror.apply(Vector::new(2.0, 3.0)), Vector::new(-2.0, 3.0));
    assert_eq!(Affine2::default(), Affine2::identity());
}

#[test]
fn rect_queries() {
    let r = Rect::new(2.0, 3.0, -2.0, 4.0);
    assert_eq!(r.min(), Vector::new(0.0, 3.0));
    assert_eq!(r.max(), Vector::new(2.0, 7.0));
    assert_eq!(r.center(), Vector::new(1.0, 5.0));
    assert_eq!(r.width(), 2.0);
    assert!(r.contains(Vector::new(0.0, 7.0)));
    assert!(!r.contains(Vector::new(-0.1, 5.0)));

    let grown = r.inset(-1.0, -0.5);
    assert_eq!(grown, Rect::new(-1.0, 2.5, 4.0, 5.0));
    let collapsed = r.inset(5.0, 1.0);
    assert_eq!(collapsed, Rect::new(1.0, 4.0, 0.0, 2.0));

    let u = r.union(&Rect::new(10.0, -1.0, 1.0, 1.0));
    assert_eq!(u, Rect::new(0.0, -1.0, 11.0, 8.0));
}

#[test]
fn rect_from_points() {
    assert!(Rect::from_points(std::iter::empty()).is_none());
    let r = Rect::from_points(vec![
        Vector::new(1.0, 1.0),
        Vector::new(-1.0, 4.0),
        Vector::new(3.0, 0.0),
    ])
    .unwrap();
    assert_eq!(r, Rect::new(-1.0, 0.0, 4.0, 4.0));
    let single = Rect::from_points([Vector::new(5.0, 5.0)]).unwrap();
    assert_eq!(single.size, Size::zero());
}
