//! Tests for the Vector type.

use super::*;
use approx::assert_relative_eq;

fn tol() -> Tolerance {
    Tolerance::default()
}

#[test]
fn equality_is_reflexive() {
    let v = Vector::new(1.5, -2.0, 1.0e6);
    assert!(v.approx_eq(v, tol()));
}

/// Half an epsilon keeps equality, two epsilons break it, in both directions.
#[test]
fn equality_tolerance_is_symmetric() {
    let eps = tol().epsilon();
    let v = Vector::new(1.0, 2.0, 3.0);

    for axis in 0..3 {
        let mut near = v.to_array();
        near[axis] += 0.5 * eps;
        let near = Vector::from(near);
        assert!(v.approx_eq(near, tol()));
        assert!(near.approx_eq(v, tol()));

        let mut far = v.to_array();
        far[axis] += 2.0 * eps;
        let far = Vector::from(far);
        assert!(!v.approx_eq(far, tol()));
        assert!(!far.approx_eq(v, tol()));
    }
}

#[test]
fn arithmetic_operators() {
    let a = Vector::new(1.0, 2.0, 3.0);
    let b = Vector::new(4.0, 5.0, 6.0);
    assert!((a + b).approx_eq(Vector::new(5.0, 7.0, 9.0), tol()));
    assert!((b - a).approx_eq(Vector::new(3.0, 3.0, 3.0), tol()));
    assert!((a * 2.0).approx_eq(Vector::new(2.0, 4.0, 6.0), tol()));
    assert!((a / 2.0).approx_eq(Vector::new(0.5, 1.0, 1.5), tol()));
    assert!((-a).approx_eq(Vector::new(-1.0, -2.0, -3.0), tol()));
}

#[test]
fn cross_and_dot() {
    let a = Vector::new(1.0, 2.0, 3.0);
    let b = Vector::new(4.0, 5.0, 6.0);
    assert!(a.cross(b).approx_eq(Vector::new(-3.0, 6.0, -3.0), tol()));
    assert_relative_eq!(a.dot(b), 32.0);
    assert_relative_eq!(a.cross(b).dot(a), 0.0);
}

#[test]
fn unit_has_length_one() {
    let v = Vector::new(3.0, 4.0, 0.0);
    assert_relative_eq!(v.length(), 5.0);
    assert_relative_eq!(v.unit().length(), 1.0);
    assert!(v.try_unit(tol()).is_some());
}

#[test]
fn unit_of_zero_is_not_finite() {
    assert!(!Vector::ZERO.unit().is_finite());
    assert!(Vector::ZERO.try_unit(tol()).is_none());
}

#[test]
fn dominant_axis_picks_largest_magnitude() {
    assert_eq!(Vector::new(-5.0, 1.0, 2.0).dominant_axis(), 0);
    assert_eq!(Vector::new(0.0, -3.0, 2.0).dominant_axis(), 1);
    assert_eq!(Vector::new(0.1, 0.2, -0.3).dominant_axis(), 2);
}

#[test]
fn axis_accessor_wraps() {
    let v = Vector::new(1.0, 2.0, 3.0);
    assert_eq!(v.axis(0), 1.0);
    assert_eq!(v.axis(4), 2.0);
    assert_eq!(v.axis(5), 3.0);
}

#[test]
fn lerp_interpolates() {
    let a = Vector::new(0.0, 0.0, 0.0);
    let b = Vector::new(2.0, 4.0, 6.0);
    assert!(a.lerp(b, 0.25).approx_eq(Vector::new(0.5, 1.0, 1.5), tol()));
}
