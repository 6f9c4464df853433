//! Line segments and line-line intersection.
//!
//! ## Algorithm
//!
//! Non-parallel lines use Goldman's closest-point-of-approach solve:
//!
//! ```text
//! C = d1 × d2
//! t = det[a2 - a1, d2, C] / |C|²      p1 = a1 + t·d1
//! s = det[a2 - a1, d1, C] / |C|²      p2 = a2 + s·d2
//! ```
//!
//! The lines meet when `p1 ≈ p2`. Parallel lines (|C|² < ε) are checked for
//! collinearity and return the overlap of the two segments.

use tracing::trace;

use crate::context::Tolerance;

use super::matrix::det3;
use super::vector::Vector;

// =============================================================================
// SEGMENT
// =============================================================================

/// An ordered pair of endpoints.
///
/// Equality ([`Segment::approx_eq`]) ignores endpoint order.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    a: Vector,
    b: Vector,
}

/// Result of intersecting two lines / segments.
#[derive(Debug, Clone, Copy)]
pub enum LineIntersection {
    /// The lines cross at a single point.
    Point(Vector),
    /// The segments are collinear and share a sub-segment.
    Overlap(Segment),
}

impl Segment {
    /// Creates a segment from `a` to `b`.
    pub fn new(a: Vector, b: Vector) -> Self {
        Self { a, b }
    }

    /// Start point.
    #[inline]
    pub fn a(&self) -> Vector {
        self.a
    }

    /// End point.
    #[inline]
    pub fn b(&self) -> Vector {
        self.b
    }

    /// `b - a`.
    #[inline]
    pub fn direction(&self) -> Vector {
        self.b - self.a
    }

    /// Segment length.
    pub fn length(&self) -> f64 {
        self.direction().length()
    }

    /// Point halfway between the endpoints.
    pub fn midpoint(&self) -> Vector {
        self.a.lerp(self.b, 0.5)
    }

    /// Point at parameter `t` along the segment (`0 → a`, `1 → b`).
    pub fn point_at(&self, t: f64) -> Vector {
        self.a + self.direction() * t
    }

    /// Undirected approximate equality.
    ///
    /// # Examples
    /// ```
    /// use mesh_kernel::{Segment, Tolerance, Vector};
    /// let a = Vector::new(0.0, 0.0, 0.0);
    /// let b = Vector::new(1.0, 1.0, 1.0);
    /// assert!(Segment::new(a, b).approx_eq(&Segment::new(b, a), Tolerance::default()));
    /// ```
    pub fn approx_eq(&self, other: &Segment, tol: Tolerance) -> bool {
        (self.a.approx_eq(other.a, tol) && self.b.approx_eq(other.b, tol))
            || (self.a.approx_eq(other.b, tol) && self.b.approx_eq(other.a, tol))
    }

    /// Locates `other` on the supporting line of `self`.
    ///
    /// Returns the parameters `(t_a, t_b)` such that
    /// `other.a ≈ self.point_at(t_a)` and `other.b ≈ self.point_at(t_b)`, or
    /// `None` when either endpoint is off the line (or `self` is degenerate).
    pub fn collinear(&self, other: &Segment, tol: Tolerance) -> Option<(f64, f64)> {
        let direction = self.direction();
        let axis = direction.dominant_axis();
        let step = direction.axis(axis);
        if tol.is_zero(step) {
            return None;
        }

        let locate = |point: Vector| {
            let t = (point.axis(axis) - self.a.axis(axis)) / step;
            self.point_at(t).approx_eq(point, tol).then_some(t)
        };

        Some((locate(other.a)?, locate(other.b)?))
    }

    /// Intersects the supporting lines of two segments.
    ///
    /// Non-parallel lines are treated as infinite: the meeting point may lie
    /// outside either segment. Collinear segments return their overlap,
    /// clamped to `self`; disjoint collinear segments return `None`.
    ///
    /// # Examples
    /// ```
    /// use mesh_kernel::{LineIntersection, Segment, Tolerance, Vector};
    /// let first = Segment::new(Vector::new(1.0, 1.0, 1.0), Vector::new(2.0, 2.0, 2.0));
    /// let second = Segment::new(Vector::new(1.0, 1.0, 1.0), Vector::new(3.0, 4.0, 5.0));
    /// match first.intersect(&second, Tolerance::default()) {
    ///     Some(LineIntersection::Point(p)) => {
    ///         assert!(p.approx_eq(Vector::new(1.0, 1.0, 1.0), Tolerance::default()))
    ///     }
    ///     other => panic!("expected a point, got {other:?}"),
    /// }
    /// ```
    pub fn intersect(&self, other: &Segment, tol: Tolerance) -> Option<LineIntersection> {
        let d1 = self.direction();
        let d2 = other.direction();
        let c = d1.cross(d2);
        let denom = c.length_squared();

        if denom < tol.epsilon() {
            return self.collinear_overlap(other, tol);
        }

        let offset = other.a - self.a;
        let t = det3(offset, d2, c) / denom;
        let s = det3(offset, d1, c) / denom;
        let p1 = self.a + d1 * t;
        let p2 = other.a + d2 * s;
        trace!(t, s, "closest points of approach");

        p1.approx_eq(p2, tol).then_some(LineIntersection::Point(p1))
    }

    fn collinear_overlap(&self, other: &Segment, tol: Tolerance) -> Option<LineIntersection> {
        let (ta, tb) = self.collinear(other, tol)?;
        let lo = ta.min(tb).max(0.0);
        let hi = ta.max(tb).min(1.0);

        // Work in world units so ε means the same thing for long and short segments.
        let length = self.length();
        if (hi - lo) * length < -tol.epsilon() {
            return None;
        }
        if ((hi - lo) * length).abs() < tol.epsilon() {
            return Some(LineIntersection::Point(self.point_at(lo)));
        }
        Some(LineIntersection::Overlap(Segment::new(
            self.point_at(lo),
            self.point_at(hi),
        )))
    }
}
