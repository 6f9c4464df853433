//! # Polygons
//!
//! General planar polygon over a [`VertexLoop`], with coplanar boolean
//! operations.
//!
//! ## Boolean Operations
//!
//! `intersect`, `subtract` and `add` require both operands to lie in the
//! same plane. The 2D work is delegated to a [`Clipper`]; results with one
//! hole are split into two simple polygons, results with more holes are
//! rejected.
//!
//! ```rust
//! use mesh_kernel::{Polygon, Tolerance, Vector};
//!
//! let square = |min: f64, max: f64| {
//!     Polygon::new(vec![
//!         Vector::new(min, min, 0.0),
//!         Vector::new(max, min, 0.0),
//!         Vector::new(max, max, 0.0),
//!         Vector::new(min, max, 0.0),
//!     ])
//! };
//!
//! let pieces = square(0.0, 10.0).subtract(&square(3.0, 7.0), Tolerance::default())?;
//! assert_eq!(pieces.len(), 2);
//! # Ok::<(), mesh_kernel::GeometryError>(())
//! ```

mod boolean;
pub mod clip;
mod holes;
pub mod tesselate;

use crate::context::Tolerance;
use crate::core::vector::Vector;
use crate::error::GeometryResult;
use crate::face::{Face, Shape};
use crate::triangle::Triangle;
use crate::vertex_loop::VertexLoop;

use clip::{ClipOp, Clipper, GeoClipper};
use tesselate::Tesselator;

// =============================================================================
// POLYGON
// =============================================================================

/// An ordered, implicitly closed planar polygon.
///
/// A polygon with no vertices is the canonical empty result of cuts and
/// boolean differences.
#[derive(Debug, Clone, Default)]
pub struct Polygon {
    ring: VertexLoop,
}

impl Polygon {
    /// Creates a polygon; insertion order defines the winding.
    pub fn new(vertices: Vec<Vector>) -> Self {
        Self {
            ring: VertexLoop::new(vertices),
        }
    }

    /// The empty polygon.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// True when the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Vertices in loop order.
    #[inline]
    pub fn vertices(&self) -> &[Vector] {
        self.ring.vertices()
    }

    /// Newell normal (length = twice the area); `None` below three vertices.
    pub fn normal(&self) -> Option<Vector> {
        self.ring.normal()
    }

    /// Enclosed area.
    pub fn area(&self) -> f64 {
        self.ring.area()
    }

    /// Even-odd containment in the polygon's projected frame.
    pub fn contains(&self, point: Vector, tol: Tolerance) -> bool {
        self.ring.contains(point, tol)
    }

    /// Same vertex count and cyclic order within tolerance.
    pub fn approx_eq(&self, other: &Polygon, tol: Tolerance) -> bool {
        self.ring.approx_eq(&other.ring, tol)
    }

    /// Intersection with a coplanar polygon.
    ///
    /// # Errors
    ///
    /// [`GeometryError::NonCoplanar`](crate::GeometryError::NonCoplanar) when
    /// the planes differ; an unsupported-topology error when a result would
    /// have more than one hole.
    pub fn intersect(&self, other: &Polygon, tol: Tolerance) -> GeometryResult<Vec<Polygon>> {
        self.intersect_with(other, &GeoClipper, tol)
    }

    /// Area of `self` not covered by a coplanar `other`.
    ///
    /// # Errors
    ///
    /// As for [`Polygon::intersect`].
    pub fn subtract(&self, other: &Polygon, tol: Tolerance) -> GeometryResult<Vec<Polygon>> {
        self.subtract_with(other, &GeoClipper, tol)
    }

    /// Union with a coplanar polygon.
    ///
    /// # Errors
    ///
    /// As for [`Polygon::intersect`].
    pub fn add(&self, other: &Polygon, tol: Tolerance) -> GeometryResult<Vec<Polygon>> {
        self.add_with(other, &GeoClipper, tol)
    }

    /// [`Polygon::intersect`] with a caller-supplied clipper.
    pub fn intersect_with(
        &self,
        other: &Polygon,
        clipper: &dyn Clipper,
        tol: Tolerance,
    ) -> GeometryResult<Vec<Polygon>> {
        boolean::apply(self, other, ClipOp::Intersection, clipper, tol)
    }

    /// [`Polygon::subtract`] with a caller-supplied clipper.
    pub fn subtract_with(
        &self,
        other: &Polygon,
        clipper: &dyn Clipper,
        tol: Tolerance,
    ) -> GeometryResult<Vec<Polygon>> {
        boolean::apply(self, other, ClipOp::Difference, clipper, tol)
    }

    /// [`Polygon::add`] with a caller-supplied clipper.
    pub fn add_with(
        &self,
        other: &Polygon,
        clipper: &dyn Clipper,
        tol: Tolerance,
    ) -> GeometryResult<Vec<Polygon>> {
        boolean::apply(self, other, ClipOp::Union, clipper, tol)
    }

    /// Triangulates through a caller-supplied tesselator.
    pub fn tesselate_with(&self, tesselator: &dyn Tesselator) -> Vec<Face> {
        tesselator.tesselate(self)
    }
}

impl Shape for Polygon {
    fn vertex_loop(&self) -> &VertexLoop {
        &self.ring
    }

    fn is_planar(&self, tol: Tolerance) -> bool {
        self.ring.is_planar(tol)
    }

    fn is_convex(&self, tol: Tolerance) -> bool {
        self.ring.is_convex(tol)
    }

    fn tesselate(&self) -> Vec<Face> {
        self.tesselate_with(&tesselate::IdentityTesselator)
    }
}

impl From<VertexLoop> for Polygon {
    fn from(ring: VertexLoop) -> Self {
        Self { ring }
    }
}

impl From<Triangle> for Polygon {
    fn from(triangle: Triangle) -> Self {
        Self {
            ring: triangle.into_vertex_loop(),
        }
    }
}

impl FromIterator<Vector> for Polygon {
    fn from_iter<I: IntoIterator<Item = Vector>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
