//! # Mesh Kernel
//!
//! Tolerance-aware 3D geometry for triangle meshes: segment intersection,
//! coplanar polygon booleans, triangle cuts and intersections, and mesh
//! cut/connectivity queries.
//!
//! ## Architecture
//!
//! ```text
//! config (GlobalConfig) → Tolerance
//!
//! core (Vector, Matrix3, Segment)
//!   → VertexLoop → Polygon ─┐
//!                → Triangle ┴→ Face → Mesh
//! ```
//!
//! ## Tolerance
//!
//! Every comparison takes a [`Tolerance`]. Two coordinates are equal when
//! they differ by strictly less than ε; there is no global epsilon.
//!
//! ## Collaborators
//!
//! - **2D clipping**: [`Clipper`], backed by `geo` in [`GeoClipper`]
//! - **Tesselation**: [`Tesselator`], with identity and fan implementations
//!
//! ## Usage
//!
//! ```rust
//! use mesh_kernel::{LineIntersection, Segment, Tolerance, Vector};
//!
//! let first = Segment::new(Vector::new(1.0, 1.0, 1.0), Vector::new(2.0, 2.0, 2.0));
//! let second = Segment::new(Vector::new(1.0, 1.0, 1.0), Vector::new(3.0, 4.0, 5.0));
//!
//! match first.intersect(&second, Tolerance::default()) {
//!     Some(LineIntersection::Point(p)) => {
//!         assert!(p.approx_eq(Vector::new(1.0, 1.0, 1.0), Tolerance::default()))
//!     }
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

pub mod context;
pub mod core;
pub mod error;
pub mod face;
pub mod mesh;
pub mod planar;
pub mod polygon;
pub mod triangle;
pub mod vertex_loop;

pub use context::Tolerance;
pub use crate::core::matrix::{det3, Matrix3};
pub use crate::core::segment::{LineIntersection, Segment};
pub use crate::core::vector::Vector;
pub use error::{GeometryError, GeometryResult};
pub use face::{Face, Shape};
pub use mesh::{BoundingBox, Mesh, MeshCut};
pub use polygon::clip::{ClipOp, Clipper, GeoClipper, Region2};
pub use polygon::tesselate::{FanTesselator, IdentityTesselator, Tesselator};
pub use polygon::Polygon;
pub use triangle::{CutResult, Triangle, TriangleIntersection};
pub use vertex_loop::VertexLoop;
