//! Plane cut of a single triangle.
//!
//! The plane is `{X : normal · X = offset}`; `normal` is used as given, so
//! distances are scaled by its length.

use tracing::trace;

use crate::context::Tolerance;
use crate::core::vector::Vector;
use crate::face::Face;
use crate::polygon::Polygon;

use super::Triangle;

/// The two sides of a plane cut.
///
/// A side the triangle does not reach holds [`Face::empty`]. A triangle
/// lying in the cut plane appears on both sides.
#[derive(Debug, Clone)]
pub struct CutResult {
    /// Pieces on the non-negative side of the plane.
    pub above: Face,
    /// Pieces on the non-positive side of the plane.
    pub below: Face,
}

impl CutResult {
    fn new(above: impl Into<Face>, below: impl Into<Face>) -> Self {
        Self {
            above: above.into(),
            below: below.into(),
        }
    }
}

impl Triangle {
    /// Splits the triangle by a plane.
    ///
    /// | distances                     | above          | below          |
    /// |-------------------------------|----------------|----------------|
    /// | all within ε                  | `self`         | `self`         |
    /// | all > −ε                      | `self`         | empty          |
    /// | all < ε                       | empty          | `self`         |
    /// | one on plane, others straddle | one triangle   | one triangle   |
    /// | one lone vertex               | triangle/quad  | quad/triangle  |
    ///
    /// Two vertices on the plane fall into the second or third row: the
    /// whole triangle goes to the side of its third vertex.
    pub fn cut(&self, normal: Vector, offset: f64, tol: Tolerance) -> CutResult {
        let vertices = self.corners();
        let d = vertices.map(|v| tol.snap(normal.dot(v) - offset));

        if d.iter().all(|&di| di == 0.0) {
            return CutResult::new(self.clone(), self.clone());
        }
        if d.iter().all(|&di| di >= 0.0) {
            return CutResult::new(self.clone(), Face::empty());
        }
        if d.iter().all(|&di| di <= 0.0) {
            return CutResult::new(Face::empty(), self.clone());
        }

        // Walk the loop from the on-plane or lone vertex so that `o → p → q`
        // keeps the triangle's winding.
        if let Some(i) = d.iter().position(|&di| di == 0.0) {
            let (o, p, q) = (vertices[i], vertices[(i + 1) % 3], vertices[(i + 2) % 3]);
            let (dp, dq) = (d[(i + 1) % 3], d[(i + 2) % 3]);
            let crossing = edge_crossing(p, q, dp, dq);
            trace!(vertex = i, "cut through vertex");

            let first = Triangle::new(o, p, crossing);
            let second = Triangle::new(o, crossing, q);
            return if dp > 0.0 {
                CutResult::new(first, second)
            } else {
                CutResult::new(second, first)
            };
        }

        let lone = (0..3)
            .find(|&i| d[i].signum() != d[(i + 1) % 3].signum() && d[i].signum() != d[(i + 2) % 3].signum())
            .unwrap_or(0);
        let (l, p, q) = (vertices[lone], vertices[(lone + 1) % 3], vertices[(lone + 2) % 3]);
        let (dl, dp, dq) = (d[lone], d[(lone + 1) % 3], d[(lone + 2) % 3]);
        let x1 = edge_crossing(l, p, dl, dp);
        let x2 = edge_crossing(l, q, dl, dq);
        trace!(vertex = lone, "cut with lone vertex");

        let tip = Triangle::new(l, x1, x2);
        let quad = Polygon::new(vec![x1, p, q, x2]);
        if dl > 0.0 {
            CutResult::new(tip, quad)
        } else {
            CutResult::new(quad, tip)
        }
    }
}

/// Point where the edge `a → b` reaches signed distance zero.
fn edge_crossing(a: Vector, b: Vector, da: f64, db: f64) -> Vector {
    a.lerp(b, da / (da - db))
}
