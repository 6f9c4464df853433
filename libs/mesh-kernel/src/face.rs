//! # Faces
//!
//! [`Shape`] gathers the loop operations whose behavior differs between
//! triangles and general polygons. [`Face`] is the tagged result type used
//! wherever an operation may yield either kind (cut pieces, tesselation).

use crate::context::Tolerance;
use crate::core::vector::Vector;
use crate::polygon::Polygon;
use crate::triangle::Triangle;
use crate::vertex_loop::VertexLoop;

// =============================================================================
// SHAPE
// =============================================================================

/// Operations shared by every planar face type.
///
/// `is_planar`, `is_convex` and `tesselate` are trivially answered by
/// triangles and computed from the loop for polygons.
pub trait Shape {
    /// The underlying vertex loop.
    fn vertex_loop(&self) -> &VertexLoop;

    /// Vertices in loop order.
    fn vertices(&self) -> &[Vector] {
        self.vertex_loop().vertices()
    }

    /// Planarity within tolerance.
    fn is_planar(&self, tol: Tolerance) -> bool;

    /// Convexity within tolerance.
    fn is_convex(&self, tol: Tolerance) -> bool;

    /// Splits the shape into faces covering the same area.
    ///
    /// The default contract is the identity: one face, unchanged.
    fn tesselate(&self) -> Vec<Face>;
}

// =============================================================================
// FACE
// =============================================================================

/// Either a triangle or a general polygon.
#[derive(Debug, Clone)]
pub enum Face {
    /// Exactly three vertices.
    Triangle(Triangle),
    /// Any other vertex count, including the empty polygon.
    Polygon(Polygon),
}

impl Face {
    /// The canonical empty face (a polygon with no vertices).
    pub fn empty() -> Self {
        Face::Polygon(Polygon::empty())
    }

    /// True for the empty polygon.
    pub fn is_empty(&self) -> bool {
        match self {
            Face::Triangle(_) => false,
            Face::Polygon(polygon) => polygon.is_empty(),
        }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices().len()
    }

    /// The triangle, if this face is one.
    pub fn as_triangle(&self) -> Option<&Triangle> {
        match self {
            Face::Triangle(triangle) => Some(triangle),
            Face::Polygon(_) => None,
        }
    }

    /// The polygon, if this face is one.
    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Face::Triangle(_) => None,
            Face::Polygon(polygon) => Some(polygon),
        }
    }

    /// Converts to a general polygon, keeping vertex order.
    pub fn into_polygon(self) -> Polygon {
        match self {
            Face::Triangle(triangle) => Polygon::from(triangle),
            Face::Polygon(polygon) => polygon,
        }
    }

    /// Compares two faces. Triangles compare as vertex sets; polygons by
    /// cyclic vertex order.
    pub fn approx_eq(&self, other: &Face, tol: Tolerance) -> bool {
        match (self, other) {
            (Face::Triangle(a), _) => a.approx_eq(other, tol),
            (_, Face::Triangle(b)) => b.approx_eq(self, tol),
            (Face::Polygon(a), Face::Polygon(b)) => a.approx_eq(b, tol),
        }
    }
}

impl Shape for Face {
    fn vertex_loop(&self) -> &VertexLoop {
        match self {
            Face::Triangle(triangle) => triangle.vertex_loop(),
            Face::Polygon(polygon) => polygon.vertex_loop(),
        }
    }

    fn is_planar(&self, tol: Tolerance) -> bool {
        match self {
            Face::Triangle(triangle) => triangle.is_planar(tol),
            Face::Polygon(polygon) => polygon.is_planar(tol),
        }
    }

    fn is_convex(&self, tol: Tolerance) -> bool {
        match self {
            Face::Triangle(triangle) => triangle.is_convex(tol),
            Face::Polygon(polygon) => polygon.is_convex(tol),
        }
    }

    fn tesselate(&self) -> Vec<Face> {
        match self {
            Face::Triangle(triangle) => triangle.tesselate(),
            Face::Polygon(polygon) => polygon.tesselate(),
        }
    }
}

impl From<Triangle> for Face {
    fn from(triangle: Triangle) -> Self {
        Face::Triangle(triangle)
    }
}

impl From<Polygon> for Face {
    fn from(polygon: Polygon) -> Self {
        Face::Polygon(polygon)
    }
}
