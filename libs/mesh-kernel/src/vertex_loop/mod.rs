//! # Vertex Loops
//!
//! An ordered, implicitly closed sequence of vertices. The last vertex
//! connects back to the first. Both [`Polygon`](crate::Polygon) and
//! [`Triangle`](crate::Triangle) are built on a loop and share its
//! predicates.
//!
//! Planarity and simplicity are assumed by the predicates, not enforced:
//! [`VertexLoop::is_planar`] checks but never repairs.

use std::ops::Index;

use crate::context::Tolerance;
use crate::core::segment::Segment;
use crate::core::vector::Vector;
use crate::planar::{is_left, PlaneFrame};

/// Ordered vertex loop.
#[derive(Debug, Clone, Default)]
pub struct VertexLoop {
    vertices: Vec<Vector>,
}

impl VertexLoop {
    /// Creates a loop; insertion order defines the winding.
    pub fn new(vertices: Vec<Vector>) -> Self {
        Self { vertices }
    }

    /// The empty loop.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Vertices in loop order.
    #[inline]
    pub fn vertices(&self) -> &[Vector] {
        &self.vertices
    }

    /// Consumes the loop, returning its vertices.
    pub fn into_vertices(self) -> Vec<Vector> {
        self.vertices
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True when the loop has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over the vertices.
    pub fn iter(&self) -> std::slice::Iter<'_, Vector> {
        self.vertices.iter()
    }

    /// Edges `(v0, v1), (v1, v2), …, (vn-1, v0)`.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// The same loop with reversed winding.
    pub fn reversed(&self) -> Self {
        Self::new(self.vertices.iter().rev().copied().collect())
    }

    /// Newell normal of the best-fit plane.
    ///
    /// The length is twice the enclosed area. `None` for fewer than three
    /// vertices.
    pub fn normal(&self) -> Option<Vector> {
        let n = self.vertices.len();
        if n < 3 {
            return None;
        }

        let (mut x, mut y, mut z) = (0.0, 0.0, 0.0);
        for i in 0..n {
            let current = self.vertices[i];
            let next = self.vertices[(i + 1) % n];
            x += (current.y() - next.y()) * (current.z() + next.z());
            y += (current.z() - next.z()) * (current.x() + next.x());
            z += (current.x() - next.x()) * (current.y() + next.y());
        }
        Some(Vector::new(x, y, z))
    }

    /// Unit normal, `None` when the loop is degenerate.
    pub fn unit_normal(&self, tol: Tolerance) -> Option<Vector> {
        self.normal()?.try_unit(tol)
    }

    /// Enclosed area of a planar loop.
    pub fn area(&self) -> f64 {
        self.normal().map_or(0.0, |n| n.length() / 2.0)
    }

    /// Projection frame for the loop's plane.
    pub fn frame(&self, tol: Tolerance) -> Option<PlaneFrame> {
        let normal = self.unit_normal(tol)?;
        let centroid = self
            .vertices
            .iter()
            .fold(Vector::ZERO, |acc, &v| acc + v)
            / self.vertices.len() as f64;
        Some(PlaneFrame::new(normal, centroid))
    }

    /// True when every vertex lies within ε of the plane through the first
    /// three vertices.
    ///
    /// Loops of three or fewer vertices are always planar. When the first
    /// three vertices are collinear the Newell plane is used instead.
    pub fn is_planar(&self, tol: Tolerance) -> bool {
        if self.vertices.len() <= 3 {
            return true;
        }

        let [a, b, c] = [self.vertices[0], self.vertices[1], self.vertices[2]];
        let normal = match (b - a).cross(c - a).try_unit(tol) {
            Some(normal) => normal,
            None => match self.unit_normal(tol) {
                Some(normal) => normal,
                // Every vertex on one line.
                None => return true,
            },
        };

        let offset = normal.dot(a);
        self.vertices
            .iter()
            .all(|&v| tol.is_zero(normal.dot(v) - offset))
    }

    /// True when, for every edge, all other vertices lie on one side of the
    /// plane through that edge and the loop normal.
    ///
    /// The side is fixed by the first vertex that is not within ε of the
    /// edge plane, so collinear vertices are tolerated.
    pub fn is_convex(&self, tol: Tolerance) -> bool {
        let n = self.vertices.len();
        if n <= 3 {
            return true;
        }
        let Some(normal) = self.unit_normal(tol) else {
            return true;
        };

        for i in 0..n {
            let j = (i + 1) % n;
            let start = self.vertices[i];
            let Some(edge_normal) = (self.vertices[j] - start).cross(normal).try_unit(tol) else {
                continue;
            };

            let mut side = 0.0_f64;
            for (k, &vertex) in self.vertices.iter().enumerate() {
                if k == i || k == j {
                    continue;
                }
                let distance = edge_normal.dot(vertex - start);
                if tol.is_zero(distance) {
                    continue;
                }
                if side == 0.0 {
                    side = distance.signum();
                } else if distance.signum() != side {
                    return false;
                }
            }
        }
        true
    }

    /// Even-odd containment test in the loop's projected frame.
    ///
    /// Counts signed crossings of a horizontal ray through `point` and
    /// reports "inside" for an odd winding number. The distance of `point`
    /// from the plane is not checked.
    pub fn contains(&self, point: Vector, tol: Tolerance) -> bool {
        let Some(frame) = self.frame(tol) else {
            return false;
        };
        let ring: Vec<_> = self.vertices.iter().map(|&v| frame.project(v)).collect();
        let target = frame.project(point);

        let n = ring.len();
        let mut winding = 0_i32;
        for i in 0..n {
            let (a, b) = (ring[i], ring[(i + 1) % n]);
            if a[1] <= target[1] {
                if b[1] > target[1] && is_left(a, b, target) > 0.0 {
                    winding += 1;
                }
            } else if b[1] <= target[1] && is_left(a, b, target) < 0.0 {
                winding -= 1;
            }
        }
        winding % 2 != 0
    }

    /// True when both loops have the same length and the same cyclic vertex
    /// order (any starting vertex, same direction).
    pub fn approx_eq(&self, other: &VertexLoop, tol: Tolerance) -> bool {
        let n = self.vertices.len();
        if n != other.vertices.len() {
            return false;
        }
        if n == 0 {
            return true;
        }
        (0..n).any(|shift| {
            (0..n).all(|i| self.vertices[i].approx_eq(other.vertices[(i + shift) % n], tol))
        })
    }
}

impl Index<usize> for VertexLoop {
    type Output = Vector;

    fn index(&self, index: usize) -> &Vector {
        &self.vertices[index]
    }
}

impl From<Vec<Vector>> for VertexLoop {
    fn from(vertices: Vec<Vector>) -> Self {
        Self::new(vertices)
    }
}

impl<'a> IntoIterator for &'a VertexLoop {
    type Item = &'a Vector;
    type IntoIter = std::slice::Iter<'a, Vector>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}
