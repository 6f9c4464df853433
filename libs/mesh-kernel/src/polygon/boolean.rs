//! # Coplanar Boolean Operations
//!
//! ## Pipeline
//!
//! ```text
//! coplanarity check → project to 2D (drop dominant axis) → Clipper
//!   → undo grid snap → split single holes → lift to 3D on the subject
//!   plane → Polygon
//! ```
//!
//! Results keep the subject's winding. More than one hole in any result
//! region is rejected.
//!
//! ## Grid repair
//!
//! The clipper may round its output to an integer grid scaled to the input
//! bounds, which moves vertices by far more than ε once coordinates grow.
//! Every output vertex is therefore put back where it belongs: onto the
//! input vertex within grid distance, or else onto the exact crossing of
//! the subject and clip edges it lies on.

use tracing::{debug, trace};

use crate::context::Tolerance;
use crate::core::segment::{LineIntersection, Segment};
use crate::error::{GeometryError, GeometryResult};
use crate::face::Shape;
use crate::planar::{dedup_ring, distance_to_edge, PlaneFrame, Point2};

use super::clip::{ClipOp, Clipper, Region2, Ring2};
use super::holes::{oriented, simple_rings};
use super::Polygon;

/// Grid spacing assumed for the clipper, relative to the largest input
/// coordinate.
const GRID_RESOLUTION: f64 = 1e-7;

/// Applies `op` to two coplanar polygons.
pub(crate) fn apply(
    subject: &Polygon,
    clip: &Polygon,
    op: ClipOp,
    clipper: &dyn Clipper,
    tol: Tolerance,
) -> GeometryResult<Vec<Polygon>> {
    let subject_frame = subject.vertex_loop().frame(tol);
    let clip_frame = clip.vertex_loop().frame(tol);

    // Degenerate operands cover no area.
    let (frame, clip_frame) = match (subject_frame, clip_frame) {
        (Some(frame), Some(clip_frame)) => (frame, clip_frame),
        (None, None) => return Ok(Vec::new()),
        (Some(_), None) => {
            return Ok(match op {
                ClipOp::Intersection => Vec::new(),
                ClipOp::Difference | ClipOp::Union => vec![subject.clone()],
            })
        }
        (None, Some(_)) => {
            return Ok(match op {
                ClipOp::Intersection | ClipOp::Difference => Vec::new(),
                ClipOp::Union => vec![clip.clone()],
            })
        }
    };

    if !coplanar(&frame, &clip_frame, clip, tol) {
        return Err(GeometryError::NonCoplanar {
            operation: op.name(),
        });
    }

    let project = |polygon: &Polygon| -> Region2 {
        let ring: Ring2 = polygon.vertices().iter().map(|&v| frame.project(v)).collect();
        Region2::simple(oriented(&ring, true))
    };
    let regions = clipper.clip(&project(subject), &project(clip), op);
    debug!(op = op.name(), regions = regions.len(), "clipped coplanar polygons");

    let repair = GridRepair::new(frame, subject, clip, tol);
    let mut rings: Vec<Ring2> = Vec::with_capacity(regions.len());
    for region in regions {
        rings.extend(simple_rings(&repair.region(region), tol)?);
    }

    Ok(rings
        .into_iter()
        .filter_map(|ring| lift(&frame, ring, tol))
        .collect())
}

/// Normals parallel (either direction) and a vertex of `clip` on the
/// subject plane.
fn coplanar(frame: &PlaneFrame, clip_frame: &PlaneFrame, clip: &Polygon, tol: Tolerance) -> bool {
    let parallel = tol.is_zero(frame.normal().cross(clip_frame.normal()).length());
    parallel && tol.is_zero(frame.signed_distance(clip.vertices()[0]))
}

/// Lifts a counter-clockwise 2D ring onto the subject plane, matching the
/// subject's winding. Rings that collapse below three vertices are dropped.
fn lift(frame: &PlaneFrame, ring: Ring2, tol: Tolerance) -> Option<Polygon> {
    let ring = dedup_ring(ring, tol);
    if ring.len() < 3 {
        return None;
    }
    let mut vertices: Vec<_> = ring.into_iter().map(|p| frame.lift(p)).collect();
    if !frame.preserves_orientation() {
        vertices.reverse();
    }
    Some(Polygon::new(vertices))
}

/// Moves clipper output vertices back onto exact input geometry.
struct GridRepair {
    frame: PlaneFrame,
    corners: Vec<Point2>,
    subject_edges: Vec<(Point2, Point2)>,
    clip_edges: Vec<(Point2, Point2)>,
    radius: f64,
    tol: Tolerance,
}

impl GridRepair {
    fn new(frame: PlaneFrame, subject: &Polygon, clip: &Polygon, tol: Tolerance) -> Self {
        let ring = |polygon: &Polygon| -> Ring2 { polygon.vertices().iter().map(|&v| frame.project(v)).collect() };
        let (subject, clip) = (ring(subject), ring(clip));
        let extent = subject
            .iter()
            .chain(&clip)
            .flatten()
            .fold(0.0_f64, |max, c| max.max(c.abs()));

        Self {
            frame,
            corners: subject.iter().chain(&clip).copied().collect(),
            subject_edges: edges(&subject),
            clip_edges: edges(&clip),
            radius: (GRID_RESOLUTION * extent).max(tol.epsilon()),
            tol,
        }
    }

    fn region(&self, region: Region2) -> Region2 {
        let ring = |ring: Ring2| -> Ring2 { ring.into_iter().map(|p| self.point(p)).collect() };
        Region2 {
            exterior: ring(region.exterior),
            holes: region.holes.into_iter().map(&ring).collect(),
        }
    }

    fn point(&self, p: Point2) -> Point2 {
        let corner = self
            .corners
            .iter()
            .map(|&c| (distance(c, p), c))
            .filter(|&(d, _)| d <= self.radius)
            .min_by(|a, b| a.0.total_cmp(&b.0));
        if let Some((_, corner)) = corner {
            return corner;
        }

        let nearest = |edges: &[(Point2, Point2)]| {
            edges
                .iter()
                .map(|&(a, b)| (distance_to_edge(a, b, p), a, b))
                .filter(|&(d, _, _)| d <= self.radius)
                .min_by(|x, y| x.0.total_cmp(&y.0))
        };
        let (Some((_, a, b)), Some((_, c, d))) = (nearest(&self.subject_edges), nearest(&self.clip_edges)) else {
            return p;
        };

        let lift = |q: Point2| self.frame.lift(q);
        match Segment::new(lift(a), lift(b)).intersect(&Segment::new(lift(c), lift(d)), self.tol) {
            Some(LineIntersection::Point(x)) if distance(self.frame.project(x), p) <= self.radius => {
                trace!(?p, "recomputed edge crossing");
                self.frame.project(x)
            }
            _ => p,
        }
    }
}

fn edges(ring: &[Point2]) -> Vec<(Point2, Point2)> {
    let n = ring.len();
    (0..n).map(|i| (ring[i], ring[(i + 1) % n])).collect()
}

fn distance(a: Point2, b: Point2) -> f64 {
    (a[0] - b[0]).hypot(a[1] - b[1])
}
