//! # Mesh Data Structure
//!
//! A triangle soup: an owned, ordered list of [`Triangle`] faces with no
//! vertex sharing. Connectivity is derived on demand from ε-equal vertices.
//!
//! Indexed buffers (shared vertices plus `[u32; 3]` faces) convert to and
//! from the soup through [`Mesh::from_indexed`] and [`Mesh::to_indexed`].

use tracing::debug;

use crate::context::Tolerance;
use crate::core::vector::Vector;
use crate::error::{GeometryError, GeometryResult};
use crate::face::Face;
use crate::polygon::tesselate::{FanTesselator, Tesselator};
use crate::triangle::Triangle;

/// A triangle mesh.
///
/// # Example
///
/// ```rust
/// use mesh_kernel::{Mesh, Tolerance, Vector};
///
/// let vertices = [
///     Vector::new(0.0, 0.0, 0.0),
///     Vector::new(1.0, 0.0, 0.0),
///     Vector::new(0.0, 1.0, 0.0),
///     Vector::new(1.0, 1.0, 0.0),
/// ];
/// let mesh = Mesh::from_indexed(&vertices, &[[0, 1, 2], [1, 3, 2]])?;
/// assert_eq!(mesh.len(), 2);
/// assert!(mesh.is_contiguous(Tolerance::default()));
/// # Ok::<(), mesh_kernel::GeometryError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    faces: Vec<Triangle>,
}

/// The two halves of a mesh cut.
#[derive(Debug, Clone, Default)]
pub struct MeshCut {
    /// Faces on the non-negative side of the plane.
    pub above: Mesh,
    /// Faces on the non-positive side of the plane.
    pub below: Mesh,
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    /// Per-axis minimum.
    pub min: Vector,
    /// Per-axis maximum.
    pub max: Vector,
}

impl BoundingBox {
    /// Extent along each axis.
    pub fn size(&self) -> Vector {
        self.max - self.min
    }

    /// Center point.
    pub fn center(&self) -> Vector {
        self.min.lerp(self.max, 0.5)
    }
}

impl Mesh {
    /// Creates a mesh from faces.
    pub fn new(faces: Vec<Triangle>) -> Self {
        Self { faces }
    }

    /// Builds a mesh from shared vertices and index triples.
    ///
    /// # Errors
    ///
    /// [`GeometryError::IndexOutOfRange`] when an index does not name a
    /// vertex.
    pub fn from_indexed(vertices: &[Vector], indices: &[[u32; 3]]) -> GeometryResult<Self> {
        let vertex = |index: u32| {
            vertices
                .get(index as usize)
                .copied()
                .ok_or(GeometryError::IndexOutOfRange {
                    index,
                    len: vertices.len(),
                })
        };

        indices
            .iter()
            .map(|&[a, b, c]| -> GeometryResult<Triangle> {
                Ok(Triangle::new(vertex(a)?, vertex(b)?, vertex(c)?))
            })
            .collect()
    }

    /// Welds ε-equal vertices and returns shared vertices plus index
    /// triples, in face order.
    pub fn to_indexed(&self, tol: Tolerance) -> (Vec<Vector>, Vec<[u32; 3]>) {
        let mut vertices: Vec<Vector> = Vec::new();
        let mut indices = Vec::with_capacity(self.faces.len());

        for face in &self.faces {
            let mut triple = [0_u32; 3];
            for (slot, &v) in triple.iter_mut().zip(face.vertices()) {
                let index = match vertices.iter().position(|&w| w.approx_eq(v, tol)) {
                    Some(index) => index,
                    None => {
                        vertices.push(v);
                        vertices.len() - 1
                    }
                };
                *slot = index as u32;
            }
            indices.push(triple);
        }
        (vertices, indices)
    }

    /// Faces in insertion order.
    #[inline]
    pub fn faces(&self) -> &[Triangle] {
        &self.faces
    }

    /// Number of faces.
    #[inline]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// True when the mesh has no faces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Iterates over the faces.
    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.faces.iter()
    }

    /// Every face vertex in face order; shared vertices repeat.
    pub fn vertices(&self) -> Vec<Vector> {
        self.faces
            .iter()
            .flat_map(|face| face.vertices().iter().copied())
            .collect()
    }

    /// Computes the axis-aligned bounding box; `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut vertices = self.faces.iter().flat_map(|face| face.vertices().iter().copied());
        let first = vertices.next()?;
        let (min, max) = vertices.fold((first, first), |(min, max), v| (min.min(v), max.max(v)));
        Some(BoundingBox { min, max })
    }

    /// Sum of face areas.
    pub fn surface_area(&self) -> f64 {
        self.faces.iter().map(Triangle::area).sum()
    }

    /// Cuts every face by the plane `normal · X = offset`.
    ///
    /// Quadrilateral pieces are fan-split so both halves stay triangle
    /// meshes. Faces lying in the plane appear in both halves.
    pub fn cut(&self, normal: Vector, offset: f64, tol: Tolerance) -> MeshCut {
        self.cut_with(normal, offset, &FanTesselator, tol)
    }

    /// [`Mesh::cut`] with a caller-supplied tesselator for non-triangular
    /// pieces. Anything the tesselator leaves non-triangular is fan-split.
    pub fn cut_with(&self, normal: Vector, offset: f64, tesselator: &dyn Tesselator, tol: Tolerance) -> MeshCut {
        let mut above = Vec::new();
        let mut below = Vec::new();

        for face in &self.faces {
            let pieces = face.cut(normal, offset, tol);
            push_triangles(&mut above, pieces.above, tesselator);
            push_triangles(&mut below, pieces.below, tesselator);
        }

        debug!(
            faces = self.faces.len(),
            above = above.len(),
            below = below.len(),
            "cut mesh"
        );
        MeshCut {
            above: Mesh::new(above),
            below: Mesh::new(below),
        }
    }

    /// Partitions the faces into vertex-connected sub-meshes.
    ///
    /// Two faces are connected when they share an ε-equal vertex. Each face
    /// lands in exactly one sub-mesh, and faces keep their relative order.
    pub fn split(&self, tol: Tolerance) -> Vec<Mesh> {
        let n = self.faces.len();
        let mut assigned = vec![false; n];
        let mut parts: Vec<Mesh> = Vec::new();

        for seed in 0..n {
            if assigned[seed] {
                continue;
            }
            assigned[seed] = true;
            let mut region = vec![seed];
            let mut frontier = vec![seed];

            while let Some(current) = frontier.pop() {
                for candidate in 0..n {
                    if !assigned[candidate] && shares_vertex(&self.faces[current], &self.faces[candidate], tol) {
                        assigned[candidate] = true;
                        region.push(candidate);
                        frontier.push(candidate);
                    }
                }
            }

            region.sort_unstable();
            parts.push(region.into_iter().map(|i| self.faces[i].clone()).collect());
        }

        debug!(faces = n, parts = parts.len(), "split mesh");
        parts
    }

    /// True when the mesh has at most one connected region.
    pub fn is_contiguous(&self, tol: Tolerance) -> bool {
        self.split(tol).len() <= 1
    }
}

fn shares_vertex(a: &Triangle, b: &Triangle, tol: Tolerance) -> bool {
    a.vertices()
        .iter()
        .any(|&p| b.vertices().iter().any(|&q| p.approx_eq(q, tol)))
}

fn push_triangles(out: &mut Vec<Triangle>, piece: Face, tesselator: &dyn Tesselator) {
    match piece {
        Face::Triangle(triangle) => out.push(triangle),
        Face::Polygon(polygon) if polygon.is_empty() => {}
        Face::Polygon(polygon) => {
            for face in tesselator.tesselate(&polygon) {
                match face {
                    Face::Triangle(triangle) => out.push(triangle),
                    Face::Polygon(rest) => out.extend(FanTesselator.triangles(&rest)),
                }
            }
        }
    }
}

impl FromIterator<Triangle> for Mesh {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Mesh {
    type Item = Triangle;
    type IntoIter = std::vec::IntoIter<Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.faces.into_iter()
    }
}

impl<'a> IntoIterator for &'a Mesh {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.faces.iter()
    }
}

impl From<Vec<Triangle>> for Mesh {
    fn from(faces: Vec<Triangle>) -> Self {
        Self::new(faces)
    }
}

#[cfg(test)]
mod tests;
