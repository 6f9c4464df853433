//! # Hole Splitting
//!
//! Faces in this kernel are simple loops, so a boolean result with a hole is
//! cut into two hole-free loops.
//!
//! ## Algorithm
//!
//! ```text
//!   +-------------------+        A = S2 → exterior (top) → S1 → C1
//!   |      +-----+      |            → hole (top) → C2
//!  S1 ---- C1    C2 ---- S2      B = S1 → exterior (bottom) → S2 → C2
//!   |      +-----+      |            → hole (bottom) → C1
//!   +-------------------+
//! ```
//!
//! A horizontal line at the hole's vertical midpoint crosses the hole at
//! least twice. C1/C2 are its leftmost/rightmost hole crossings, S1/S2 the
//! nearest exterior crossings outside them. The segments S1–C1 and C2–S2
//! lie inside the region and cut it into two pieces.
//!
//! ## Touching holes
//!
//! A hole that meets the exterior at a single point may come back from the
//! clipper as a pinch in the exterior ring (the point visited twice) or as
//! a hole with a vertex on an exterior edge. Both are brought to the pinch
//! form, rings are cut at every repeated vertex, and the pieces of the
//! bisection split are cut again at the touching point. Every output ring is
//! simple; the touching point is a corner only of the pieces that meet there.

use tracing::debug;

use crate::context::Tolerance;
use crate::error::{GeometryError, GeometryResult};
use crate::planar::{dedup_ring, distance_to_edge, points_eq, ring_contains, signed_area2, Point2};

use super::clip::{Region2, Ring2};

/// Resolves one clipper region into simple counter-clockwise rings.
///
/// # Errors
///
/// [`GeometryError::TooManyHoles`] when a part of the region has more than
/// one hole; an unsupported-topology error when a hole cannot be placed or
/// split.
pub fn simple_rings(region: &Region2, tol: Tolerance) -> GeometryResult<Vec<Ring2>> {
    let mut outers: Vec<Ring2> = Vec::new();
    let mut holes: Vec<Ring2> = Vec::new();

    let exterior = dedup_ring(oriented(&region.exterior, true), tol);
    for part in split_pinches(exterior, tol) {
        match winding(&part, tol) {
            Some(true) => outers.push(part),
            Some(false) => holes.push(part),
            None => {}
        }
    }
    holes.extend(
        region
            .holes
            .iter()
            .map(|hole| dedup_ring(hole.iter().copied(), tol))
            .filter(|hole| hole.len() >= 3),
    );

    let mut owned: Vec<Vec<Ring2>> = vec![Vec::new(); outers.len()];
    for hole in holes {
        let owner = match outers.len() {
            1 => Some(0),
            _ => outers.iter().position(|outer| ring_contains(outer, vertex_mean(&hole))),
        };
        let Some(owner) = owner else {
            return Err(GeometryError::unsupported("hole is not enclosed by its exterior ring"));
        };
        owned[owner].push(hole);
    }

    let mut rings = Vec::new();
    for (outer, holes) in outers.into_iter().zip(owned) {
        match holes.as_slice() {
            [] => rings.push(outer),
            [hole] => {
                let outer = insert_touching(&outer, hole, tol);
                for piece in split_single_hole(&outer, hole, tol)? {
                    rings.extend(
                        split_pinches(piece, tol)
                            .into_iter()
                            .filter(|ring| winding(ring, tol) == Some(true)),
                    );
                }
            }
            _ => return Err(GeometryError::TooManyHoles { holes: holes.len() }),
        }
    }
    Ok(rings)
}

/// Cuts a ring at every vertex it visits more than once.
pub fn split_pinches(ring: Ring2, tol: Tolerance) -> Vec<Ring2> {
    let mut pending = vec![ring];
    let mut loops = Vec::new();
    while let Some(ring) = pending.pop() {
        match find_pinch(&ring, tol) {
            Some((i, j)) => {
                debug!(at = ?ring[i], "splitting pinched ring");
                pending.push(ring[i..j].to_vec());
                pending.push(ring[j..].iter().chain(&ring[..i]).copied().collect());
            }
            None => loops.push(ring),
        }
    }
    loops
}

fn find_pinch(ring: &[Point2], tol: Tolerance) -> Option<(usize, usize)> {
    let n = ring.len();
    (0..n)
        .flat_map(|i| (i + 2..n).map(move |j| (i, j)))
        .find(|&(i, j)| points_eq(ring[i], ring[j], tol))
}

/// `Some(true)` for counter-clockwise rings, `Some(false)` for clockwise
/// ones, `None` for rings without area.
fn winding(ring: &[Point2], tol: Tolerance) -> Option<bool> {
    let area = signed_area2(ring);
    (ring.len() >= 3 && !tol.is_zero(area)).then_some(area > 0.0)
}

fn vertex_mean(ring: &[Point2]) -> Point2 {
    let n = ring.len() as f64;
    let [x, y] = ring
        .iter()
        .fold([0.0, 0.0], |[x, y], &[px, py]| [x + px, y + py]);
    [x / n, y / n]
}

/// Adds the hole vertices lying inside an exterior edge to the exterior
/// ring, in order along the edge.
fn insert_touching(exterior: &[Point2], hole: &[Point2], tol: Tolerance) -> Ring2 {
    let n = exterior.len();
    let mut ring = Vec::with_capacity(n);
    for i in 0..n {
        let (a, b) = (exterior[i], exterior[(i + 1) % n]);
        ring.push(a);

        let mut touching: Vec<Point2> = hole
            .iter()
            .copied()
            .filter(|&h| {
                !points_eq(h, a, tol) && !points_eq(h, b, tol) && distance_to_edge(a, b, h) <= tol.epsilon()
            })
            .collect();
        let along = |p: &Point2| (p[0] - a[0]) * (b[0] - a[0]) + (p[1] - a[1]) * (b[1] - a[1]);
        touching.sort_by(|p, q| along(p).total_cmp(&along(q)));
        ring.extend(touching);
    }
    ring
}

/// Where a horizontal line crosses a ring.
#[derive(Debug, Clone, Copy)]
struct Crossing {
    /// Index of the edge `ring[edge] → ring[edge + 1]`.
    edge: usize,
    x: f64,
}

impl Crossing {
    fn point(&self, y: f64) -> Point2 {
        [self.x, y]
    }
}

/// Splits the region bounded by `exterior` with one `hole` into simple
/// counter-clockwise rings.
///
/// Returns the exterior alone when the hole has no vertical extent (and
/// therefore no area).
pub fn split_single_hole(exterior: &[Point2], hole: &[Point2], tol: Tolerance) -> GeometryResult<Vec<Ring2>> {
    let exterior = oriented(exterior, true);
    let hole = oriented(hole, false);

    let (low, high) = hole
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p[1]), hi.max(p[1])));
    if hole.len() < 3 || high - low <= tol.epsilon() {
        debug!("dropping hole without vertical extent");
        return Ok(vec![exterior]);
    }
    let y = (low + high) / 2.0;

    let hole_crossings = crossings(&hole, y);
    let (c1, c2) = match (
        hole_crossings.iter().copied().min_by(|a, b| a.x.total_cmp(&b.x)),
        hole_crossings.iter().copied().max_by(|a, b| a.x.total_cmp(&b.x)),
    ) {
        (Some(c1), Some(c2)) if c1.edge != c2.edge => (c1, c2),
        _ => return Err(GeometryError::unsupported("hole does not cross its bisection line")),
    };

    let exterior_crossings = crossings(&exterior, y);
    let s1 = exterior_crossings
        .iter()
        .copied()
        .filter(|s| s.x < c1.x)
        .max_by(|a, b| a.x.total_cmp(&b.x));
    let s2 = exterior_crossings
        .iter()
        .copied()
        .filter(|s| s.x > c2.x)
        .min_by(|a, b| a.x.total_cmp(&b.x));
    let (Some(s1), Some(s2)) = (s1, s2) else {
        return Err(GeometryError::unsupported("hole is not enclosed by its exterior ring"));
    };

    debug!(y, c1 = c1.x, c2 = c2.x, s1 = s1.x, s2 = s2.x, "splitting hole");

    let upper = std::iter::once(s2.point(y))
        .chain(chain(&exterior, s2.edge, s1.edge))
        .chain([s1.point(y), c1.point(y)])
        .chain(chain(&hole, c1.edge, c2.edge))
        .chain(std::iter::once(c2.point(y)));
    let lower = std::iter::once(s1.point(y))
        .chain(chain(&exterior, s1.edge, s2.edge))
        .chain([s2.point(y), c2.point(y)])
        .chain(chain(&hole, c2.edge, c1.edge))
        .chain(std::iter::once(c1.point(y)));

    Ok(vec![dedup_ring(upper, tol), dedup_ring(lower, tol)])
}

/// Copies `ring`, reversing it if needed so that it is counter-clockwise
/// (`ccw = true`) or clockwise.
pub fn oriented(ring: &[Point2], ccw: bool) -> Ring2 {
    let mut ring = ring.to_vec();
    if (signed_area2(&ring) > 0.0) != ccw {
        ring.reverse();
    }
    ring
}

/// Edge crossings of the line `Y = y`, using the half-open rule so a vertex
/// lying on the line is counted once.
fn crossings(ring: &[Point2], y: f64) -> Vec<Crossing> {
    let n = ring.len();
    (0..n)
        .filter_map(|edge| {
            let [x0, y0] = ring[edge];
            let [x1, y1] = ring[(edge + 1) % n];
            ((y0 <= y) != (y1 <= y)).then(|| Crossing {
                edge,
                x: x0 + (y - y0) * (x1 - x0) / (y1 - y0),
            })
        })
        .collect()
}

/// Vertices strictly after edge `from` up to and including the start of
/// edge `to`, walking forward: `ring[from + 1] ..= ring[to]`.
fn chain(ring: &[Point2], from: usize, to: usize) -> Vec<Point2> {
    let n = ring.len();
    let mut points = Vec::new();
    let mut index = (from + 1) % n;
    loop {
        points.push(ring[index]);
        if index == to {
            break;
        }
        index = (index + 1) % n;
    }
    points
}
