//! # Planar Frames
//!
//! Projection of a plane into 2D by dropping its dominant normal axis, and
//! lifting 2D points back onto the plane.
//!
//! The two kept axes are taken in cyclic order after the dropped one
//! (`x → (y, z)`, `y → (z, x)`, `z → (x, y)`), so a loop that winds
//! counter-clockwise around `+axis` stays counter-clockwise in 2D.

use crate::context::Tolerance;
use crate::core::vector::Vector;

/// A 2D point in a projected frame.
pub type Point2 = [f64; 2];

// =============================================================================
// PLANE FRAME
// =============================================================================

/// A plane `normal · X = offset` together with its projection axes.
#[derive(Debug, Clone, Copy)]
pub struct PlaneFrame {
    normal: Vector,
    offset: f64,
    axis: usize,
}

impl PlaneFrame {
    /// Creates a frame from a unit normal and a point on the plane.
    pub fn new(unit_normal: Vector, point: Vector) -> Self {
        Self {
            normal: unit_normal,
            offset: unit_normal.dot(point),
            axis: unit_normal.dominant_axis(),
        }
    }

    /// Unit normal of the plane.
    #[inline]
    pub fn normal(&self) -> Vector {
        self.normal
    }

    /// Plane offset along the normal.
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Index of the dropped axis.
    #[inline]
    pub fn axis(&self) -> usize {
        self.axis
    }

    /// Signed distance of `point` from the plane.
    #[inline]
    pub fn signed_distance(&self, point: Vector) -> f64 {
        self.normal.dot(point) - self.offset
    }

    /// True when counter-clockwise 2D loops lift to loops winding around
    /// this plane's normal.
    #[inline]
    pub fn preserves_orientation(&self) -> bool {
        self.normal.axis(self.axis) > 0.0
    }

    /// Projects onto the two kept axes.
    #[inline]
    pub fn project(&self, point: Vector) -> Point2 {
        [point.axis(self.axis + 1), point.axis(self.axis + 2)]
    }

    /// Lifts a projected point back onto the plane by solving the plane
    /// equation for the dropped coordinate.
    pub fn lift(&self, point: Point2) -> Vector {
        let (u, v) = ((self.axis + 1) % 3, (self.axis + 2) % 3);
        let dropped = (self.offset
            - self.normal.axis(u) * point[0]
            - self.normal.axis(v) * point[1])
            / self.normal.axis(self.axis);

        let mut coords = [0.0; 3];
        coords[self.axis] = dropped;
        coords[u] = point[0];
        coords[v] = point[1];
        Vector::from(coords)
    }
}

// =============================================================================
// 2D HELPERS
// =============================================================================

/// Twice the signed area of a ring (positive for counter-clockwise).
pub fn signed_area2(ring: &[Point2]) -> f64 {
    let n = ring.len();
    (0..n)
        .map(|i| {
            let [x0, y0] = ring[i];
            let [x1, y1] = ring[(i + 1) % n];
            x0 * y1 - x1 * y0
        })
        .sum()
}

/// Cross product of `(b - a)` and `(p - a)`; positive when `p` is left of
/// the directed line `a → b`.
#[inline]
pub fn is_left(a: Point2, b: Point2, p: Point2) -> f64 {
    (b[0] - a[0]) * (p[1] - a[1]) - (p[0] - a[0]) * (b[1] - a[1])
}

/// Distance from `p` to the closed segment `a → b`.
pub fn distance_to_edge(a: Point2, b: Point2, p: Point2) -> f64 {
    let (dx, dy) = (b[0] - a[0], b[1] - a[1]);
    let length2 = dx * dx + dy * dy;
    let t = if length2 > 0.0 {
        (((p[0] - a[0]) * dx + (p[1] - a[1]) * dy) / length2).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (a[0] + t * dx - p[0]).hypot(a[1] + t * dy - p[1])
}

/// Even-odd containment of `p` in a 2D ring.
pub fn ring_contains(ring: &[Point2], p: Point2) -> bool {
    let n = ring.len();
    let mut inside = false;
    for i in 0..n {
        let [x0, y0] = ring[i];
        let [x1, y1] = ring[(i + 1) % n];
        if (y0 <= p[1]) != (y1 <= p[1]) && p[0] < x0 + (p[1] - y0) * (x1 - x0) / (y1 - y0) {
            inside = !inside;
        }
    }
    inside
}

/// Approximate 2D point equality (strict per-axis ε).
#[inline]
pub fn points_eq(a: Point2, b: Point2, tol: Tolerance) -> bool {
    tol.eq(a[0], b[0]) && tol.eq(a[1], b[1])
}

/// Drops consecutive duplicates and a closing point equal to the first.
pub fn dedup_ring(ring: impl IntoIterator<Item = Point2>, tol: Tolerance) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::new();
    for point in ring {
        if out.last().map_or(true, |&last| !points_eq(last, point, tol)) {
            out.push(point);
        }
    }
    while out.len() > 1 && points_eq(out[0], out[out.len() - 1], tol) {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tol() -> Tolerance {
        Tolerance::default()
    }

    #[test]
    fn lift_inverts_project() {
        let normal = Vector::new(1.0, 2.0, -3.0).unit();
        let frame = PlaneFrame::new(normal, Vector::new(1.0, 1.0, 1.0));
        assert_eq!(frame.axis(), 2);

        let point = Vector::new(4.0, -2.0, 0.0);
        let on_plane = point - normal * frame.signed_distance(point);
        let lifted = frame.lift(frame.project(on_plane));
        assert!(lifted.approx_eq(on_plane, tol()));
    }

    #[test]
    fn projection_keeps_cyclic_axes() {
        let frame = PlaneFrame::new(Vector::new(-1.0, 0.0, 0.0), Vector::ZERO);
        assert_eq!(frame.project(Vector::new(9.0, 2.0, 3.0)), [2.0, 3.0]);
        assert!(!frame.preserves_orientation());

        let frame = PlaneFrame::new(Vector::new(0.0, 1.0, 0.0), Vector::ZERO);
        assert_eq!(frame.project(Vector::new(1.0, 9.0, 3.0)), [3.0, 1.0]);
        assert!(frame.preserves_orientation());
    }

    #[test]
    fn signed_area_sign_follows_winding() {
        let ccw = [[0.0, 0.0], [2.0, 0.0], [2.0, 1.0], [0.0, 1.0]];
        assert_eq!(signed_area2(&ccw), 4.0);
        let cw: Vec<Point2> = ccw.iter().rev().copied().collect();
        assert_eq!(signed_area2(&cw), -4.0);
    }

    #[test]
    fn dedup_removes_repeats_and_closing_point() {
        let ring = vec![
            [0.0, 0.0],
            [1.0, 0.0],
            [1.0, 1.0e-10],
            [1.0, 1.0],
            [0.0, 0.0],
        ];
        let ring = dedup_ring(ring, tol());
        assert_eq!(ring, vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]);
    }

    #[test]
    fn distance_to_edge_clamps_to_endpoints() {
        assert_eq!(distance_to_edge([0.0, 0.0], [4.0, 0.0], [2.0, 3.0]), 3.0);
        assert_eq!(distance_to_edge([0.0, 0.0], [4.0, 0.0], [7.0, 4.0]), 5.0);
        assert_eq!(distance_to_edge([1.0, 1.0], [1.0, 1.0], [1.0, 2.0]), 1.0);
    }

    #[test]
    fn ring_contains_uses_even_odd() {
        let notch = [[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [2.0, 1.0], [0.0, 4.0]];
        assert!(ring_contains(&notch, [1.0, 1.0]));
        assert!(!ring_contains(&notch, [2.0, 3.0]));
        assert!(!ring_contains(&notch, [5.0, 1.0]));
    }

    #[test]
    fn is_left_orientation() {
        assert!(is_left([0.0, 0.0], [1.0, 0.0], [0.5, 1.0]) > 0.0);
        assert!(is_left([0.0, 0.0], [1.0, 0.0], [0.5, -1.0]) < 0.0);
    }
}
