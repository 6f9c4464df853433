//! # Triangle-Triangle Intersection
//!
//! Möller's interval test, extended to return the intersection geometry.
//!
//! ## Algorithm
//!
//! 1. Signed distances of each triangle's vertices to the other's plane;
//!    three same-sign non-zero distances mean no intersection.
//! 2. All six distances zero: coplanar, delegated to the polygon boolean.
//! 3. Otherwise the planes meet in `L(t) = O + t·D`. Each triangle crosses
//!    `L` over an interval, found by interpolating its two edges that
//!    leave the lone vertex.
//! 4. The overlap of both intervals is a segment, a point, or nothing.

use tracing::{trace, warn};

use crate::context::Tolerance;
use crate::core::matrix::det3;
use crate::core::segment::Segment;
use crate::core::vector::Vector;
use crate::error::GeometryResult;
use crate::polygon::Polygon;

use super::Triangle;

/// Geometry shared by two triangles.
#[derive(Debug, Clone)]
pub enum TriangleIntersection {
    /// The triangles touch at a single point.
    Point(Vector),
    /// The triangles cross along a segment.
    Segment(Segment),
    /// Coplanar overlap with three vertices.
    Triangle(Triangle),
    /// Coplanar overlap with more vertices.
    Polygon(Polygon),
}

/// A triangle's plane `normal · X = offset` with a unit normal.
#[derive(Debug, Clone, Copy)]
struct Plane {
    normal: Vector,
    offset: f64,
}

impl Plane {
    fn of(triangle: &Triangle, tol: Tolerance) -> Option<Self> {
        let normal = triangle.normal().try_unit(tol)?;
        Some(Self {
            normal,
            offset: normal.dot(triangle.corners()[0]),
        })
    }

    /// ε-snapped signed distances of `triangle`'s vertices.
    fn distances(&self, triangle: &Triangle, tol: Tolerance) -> [f64; 3] {
        triangle
            .corners()
            .map(|v| tol.snap(self.normal.dot(v) - self.offset))
    }
}

impl Triangle {
    /// Intersects two triangles.
    ///
    /// Returns `Ok(None)` when they are disjoint or either is degenerate.
    ///
    /// # Errors
    ///
    /// Only the coplanar path can fail, with the errors of
    /// [`Polygon::intersect`].
    pub fn intersect(&self, other: &Triangle, tol: Tolerance) -> GeometryResult<Option<TriangleIntersection>> {
        let (Some(p1), Some(p2)) = (Plane::of(self, tol), Plane::of(other, tol)) else {
            return Ok(None);
        };

        let d1 = p2.distances(self, tol);
        if strictly_one_side(d1) {
            return Ok(None);
        }
        let d2 = p1.distances(other, tol);
        if strictly_one_side(d2) {
            return Ok(None);
        }

        let flat1 = d1.iter().all(|&d| d == 0.0);
        let flat2 = d2.iter().all(|&d| d == 0.0);
        if flat1 && flat2 {
            return self.intersect_coplanar(other, tol);
        }

        let Some(direction) = p1.normal.cross(p2.normal).try_unit(tol) else {
            // Parallel planes: touching only if one triangle lies in the other's plane.
            return if flat1 || flat2 {
                self.intersect_coplanar(other, tol)
            } else {
                Ok(None)
            };
        };

        let origin = (p2.normal.cross(direction) * p1.offset + direction.cross(p1.normal) * p2.offset)
            / det3(p1.normal, p2.normal, direction);

        let (a0, a1) = interval(self, d1, origin, direction);
        let (b0, b1) = interval(other, d2, origin, direction);
        let lo = a0.max(b0);
        let hi = a1.min(b1);
        trace!(lo, hi, "line interval overlap");

        let at = |t: f64| origin + direction * t;
        Ok(if tol.is_zero(hi - lo) {
            Some(TriangleIntersection::Point(at(lo)))
        } else if hi > lo {
            Some(TriangleIntersection::Segment(Segment::new(at(lo), at(hi))))
        } else {
            None
        })
    }

    fn intersect_coplanar(&self, other: &Triangle, tol: Tolerance) -> GeometryResult<Option<TriangleIntersection>> {
        let subject = Polygon::from(self.clone());
        let mut regions = subject.intersect(&Polygon::from(other.clone()), tol)?;

        if regions.len() > 1 {
            warn!(components = regions.len(), "coplanar triangles overlap in several components");
            regions.sort_by(|a, b| b.area().total_cmp(&a.area()));
        }
        let Some(region) = regions.into_iter().next() else {
            return Ok(None);
        };

        Ok(match region.len() {
            0 => None,
            3 => Some(TriangleIntersection::Triangle(Triangle::try_from_vertices(region.vertices())?)),
            _ => Some(TriangleIntersection::Polygon(region)),
        })
    }
}

fn strictly_one_side(d: [f64; 3]) -> bool {
    d[0] * d[1] > 0.0 && d[0] * d[2] > 0.0
}

/// Sorted parameter interval over which `triangle` crosses the line
/// `origin + t·direction`.
fn interval(triangle: &Triangle, d: [f64; 3], origin: Vector, direction: Vector) -> (f64, f64) {
    let p = triangle.corners().map(|v| direction.dot(v - origin));

    // A triangle inside the other plane lies along the line.
    if d.iter().all(|&dk| dk == 0.0) {
        let lo = p.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = p.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        return (lo, hi);
    }

    // (lone, a, b): the edges lone→a and lone→b reach the line.
    let (lone, a, b) = if d[0] * d[1] > 0.0 {
        (2, 0, 1)
    } else if d[0] * d[2] > 0.0 {
        (1, 0, 2)
    } else if d[1] * d[2] > 0.0 || d[0] != 0.0 {
        (0, 1, 2)
    } else if d[1] != 0.0 {
        (1, 0, 2)
    } else {
        (2, 0, 1)
    };

    let along = |k: usize| p[k] + (p[lone] - p[k]) * d[k] / (d[k] - d[lone]);
    let (t0, t1) = (along(a), along(b));
    if t0 <= t1 {
        (t0, t1)
    } else {
        (t1, t0)
    }
}
