//! # Triangles
//!
//! A three-vertex face over a [`VertexLoop`]. Construction fixes the vertex
//! order so that `det[v0, v1, v2] >= 0`; the 3-vertex invariant is enforced
//! by the constructors, never checked later.
//!
//! Plane cutting lives in [`cut`](Triangle::cut) and triangle-triangle
//! intersection in [`intersect`](Triangle::intersect).

mod cut;
mod intersect;

pub use cut::CutResult;
pub use intersect::TriangleIntersection;

use crate::context::Tolerance;
use crate::core::matrix::det3;
use crate::core::segment::Segment;
use crate::core::vector::Vector;
use crate::error::{GeometryError, GeometryResult};
use crate::face::{Face, Shape};
use crate::polygon::Polygon;
use crate::vertex_loop::VertexLoop;

/// A triangle with non-negative signed volume.
#[derive(Debug, Clone)]
pub struct Triangle {
    ring: VertexLoop,
}

impl Triangle {
    /// Creates a triangle, swapping `b` and `c` when `det[a, b, c] < 0`.
    pub fn new(a: Vector, b: Vector, c: Vector) -> Self {
        let vertices = if det3(a, b, c) < 0.0 {
            vec![a, c, b]
        } else {
            vec![a, b, c]
        };
        Self {
            ring: VertexLoop::new(vertices),
        }
    }

    /// Creates a triangle from a vertex slice.
    ///
    /// # Errors
    ///
    /// [`GeometryError::MalformedTriangle`] unless exactly three vertices
    /// are given.
    pub fn try_from_vertices(vertices: &[Vector]) -> GeometryResult<Self> {
        match *vertices {
            [a, b, c] => Ok(Self::new(a, b, c)),
            _ => Err(GeometryError::MalformedTriangle {
                vertices: vertices.len(),
            }),
        }
    }

    /// The three vertices, in stored order.
    #[inline]
    pub fn vertices(&self) -> &[Vector] {
        self.ring.vertices()
    }

    /// `(v1 - v0) × (v2 - v0)`; not normalized.
    pub fn normal(&self) -> Vector {
        let [a, b, c] = self.corners();
        (b - a).cross(c - a)
    }

    /// Enclosed area.
    pub fn area(&self) -> f64 {
        self.normal().length() / 2.0
    }

    /// The edges `(v0, v1)`, `(v1, v2)`, `(v2, v0)`.
    pub fn edges(&self) -> [Segment; 3] {
        let [a, b, c] = self.corners();
        [Segment::new(a, b), Segment::new(b, c), Segment::new(c, a)]
    }

    /// True when `point` lies in the triangle's plane and inside or on its
    /// boundary.
    ///
    /// The in-plane check uses the unit normal; the inside check compares
    /// the areas of the three sub-triangles through `point` with the
    /// triangle's own area.
    pub fn contains(&self, point: Vector, tol: Tolerance) -> bool {
        let [a, b, c] = self.corners();
        let Some(unit) = self.normal().try_unit(tol) else {
            return false;
        };
        if !tol.is_zero(unit.dot(point - a)) {
            return false;
        }

        let sub_area = |p: Vector, q: Vector| (p - point).cross(q - point).length() / 2.0;
        tol.eq(sub_area(a, b) + sub_area(b, c) + sub_area(c, a), self.area())
    }

    /// True when `other` has exactly three vertices and each vertex of
    /// `self` matches a distinct vertex of `other`, in any order.
    pub fn approx_eq<S: Shape + ?Sized>(&self, other: &S, tol: Tolerance) -> bool {
        let theirs = other.vertices();
        if theirs.len() != 3 {
            return false;
        }
        let mut used = [false; 3];
        for &mine in self.ring.iter() {
            match (0..3).find(|&j| !used[j] && mine.approx_eq(theirs[j], tol)) {
                Some(j) => used[j] = true,
                None => return false,
            }
        }
        true
    }

    /// Consumes the triangle, returning its loop.
    pub fn into_vertex_loop(self) -> VertexLoop {
        self.ring
    }

    pub(crate) fn corners(&self) -> [Vector; 3] {
        let v = self.ring.vertices();
        [v[0], v[1], v[2]]
    }
}

impl Shape for Triangle {
    fn vertex_loop(&self) -> &VertexLoop {
        &self.ring
    }

    fn is_planar(&self, _tol: Tolerance) -> bool {
        true
    }

    fn is_convex(&self, _tol: Tolerance) -> bool {
        true
    }

    fn tesselate(&self) -> Vec<Face> {
        vec![Face::Triangle(self.clone())]
    }
}

impl TryFrom<Polygon> for Triangle {
    type Error = GeometryError;

    fn try_from(polygon: Polygon) -> GeometryResult<Self> {
        Self::try_from_vertices(polygon.vertices())
    }
}

impl TryFrom<&[Vector]> for Triangle {
    type Error = GeometryError;

    fn try_from(vertices: &[Vector]) -> GeometryResult<Self> {
        Self::try_from_vertices(vertices)
    }
}
