//! # Tesselation
//!
//! Polygon triangulation is a collaborator behind the [`Tesselator`] trait.
//! The identity tesselator keeps the polygon as one face; the fan
//! tesselator splits convex polygons into triangles sharing the first
//! vertex, which is all the kernel needs for plane-cut pieces.

use crate::face::Face;
use crate::triangle::Triangle;

use super::Polygon;

/// Triangulation service.
pub trait Tesselator {
    /// Returns faces covering the same area as `polygon`.
    fn tesselate(&self, polygon: &Polygon) -> Vec<Face>;
}

/// Returns the polygon unchanged as a single face.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTesselator;

impl Tesselator for IdentityTesselator {
    fn tesselate(&self, polygon: &Polygon) -> Vec<Face> {
        if polygon.is_empty() {
            Vec::new()
        } else {
            vec![Face::Polygon(polygon.clone())]
        }
    }
}

/// Fan triangulation from the first vertex.
///
/// Exact for convex polygons. Non-convex input yields overlapping
/// triangles; callers are expected to check
/// [`Shape::is_convex`](crate::Shape::is_convex) first.
#[derive(Debug, Clone, Copy, Default)]
pub struct FanTesselator;

impl FanTesselator {
    /// Fan triangles of `polygon`; empty for fewer than three vertices.
    pub fn triangles(&self, polygon: &Polygon) -> Vec<Triangle> {
        let vertices = polygon.vertices();
        if vertices.len() < 3 {
            return Vec::new();
        }
        vertices
            .windows(2)
            .skip(1)
            .map(|pair| Triangle::new(vertices[0], pair[0], pair[1]))
            .collect()
    }
}

impl Tesselator for FanTesselator {
    fn tesselate(&self, polygon: &Polygon) -> Vec<Face> {
        self.triangles(polygon).into_iter().map(Face::Triangle).collect()
    }
}
