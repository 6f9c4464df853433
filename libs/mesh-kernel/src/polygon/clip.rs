//! # 2D Clipping
//!
//! The 2D boolean engine is a collaborator behind the [`Clipper`] trait.
//! The kernel projects 3D polygons into a 2D frame, hands the rings to the
//! clipper and lifts the result back. [`GeoClipper`] is the default
//! implementation, backed by `geo`'s `BooleanOps`.

use geo::{BooleanOps, Coord, LineString, MultiPolygon};

use crate::planar::Point2;

/// A closed 2D ring without a repeated closing point.
pub type Ring2 = Vec<Point2>;

/// A 2D region: one exterior ring plus optional holes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Region2 {
    /// Outer boundary.
    pub exterior: Ring2,
    /// Inner boundaries.
    pub holes: Vec<Ring2>,
}

impl Region2 {
    /// A region without holes.
    pub fn simple(exterior: Ring2) -> Self {
        Self {
            exterior,
            holes: Vec::new(),
        }
    }
}

/// Boolean operation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipOp {
    /// Area covered by both operands.
    Intersection,
    /// Area of the subject not covered by the clip.
    Difference,
    /// Area covered by either operand.
    Union,
}

impl ClipOp {
    /// Name used in errors and logs.
    pub fn name(&self) -> &'static str {
        match self {
            ClipOp::Intersection => "intersect",
            ClipOp::Difference => "subtract",
            ClipOp::Union => "add",
        }
    }
}

/// 2D polygon clipping service.
///
/// Implementations receive rings in any orientation and may return rings
/// in any orientation; the kernel normalizes winding itself.
pub trait Clipper {
    /// Combines `subject` and `clip` according to `op`.
    fn clip(&self, subject: &Region2, clip: &Region2, op: ClipOp) -> Vec<Region2>;
}

// =============================================================================
// GEO BACKEND
// =============================================================================

/// [`Clipper`] backed by the `geo` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoClipper;

impl Clipper for GeoClipper {
    fn clip(&self, subject: &Region2, clip: &Region2, op: ClipOp) -> Vec<Region2> {
        let subject = to_geo(subject);
        let clip = to_geo(clip);

        let result: MultiPolygon<f64> = match op {
            ClipOp::Intersection => subject.intersection(&clip),
            ClipOp::Difference => subject.difference(&clip),
            ClipOp::Union => subject.union(&clip),
        };

        result.0.iter().map(from_geo).collect()
    }
}

fn to_geo(region: &Region2) -> geo::Polygon<f64> {
    let ring = |points: &Ring2| {
        LineString::from(
            points
                .iter()
                .map(|&[x, y]| Coord { x, y })
                .collect::<Vec<_>>(),
        )
    };
    geo::Polygon::new(ring(&region.exterior), region.holes.iter().map(ring).collect())
}

fn from_geo(polygon: &geo::Polygon<f64>) -> Region2 {
    Region2 {
        exterior: open_ring(polygon.exterior()),
        holes: polygon.interiors().iter().map(open_ring).collect(),
    }
}

/// `geo` rings repeat the first coordinate at the end.
fn open_ring(line: &LineString<f64>) -> Ring2 {
    let mut ring: Ring2 = line.coords().map(|c| [c.x, c.y]).collect();
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    ring
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planar::signed_area2;
    use approx::assert_relative_eq;

    fn square(min: f64, max: f64) -> Region2 {
        Region2::simple(vec![[min, min], [max, min], [max, max], [min, max]])
    }

    fn total_area(regions: &[Region2]) -> f64 {
        regions
            .iter()
            .map(|r| {
                signed_area2(&r.exterior).abs() / 2.0
                    - r.holes.iter().map(|h| signed_area2(h).abs() / 2.0).sum::<f64>()
            })
            .sum()
    }

    #[test]
    fn intersection_of_overlapping_squares() {
        let result = GeoClipper.clip(&square(0.0, 2.0), &square(1.0, 3.0), ClipOp::Intersection);
        assert_eq!(result.len(), 1);
        assert_relative_eq!(total_area(&result), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn union_of_overlapping_squares() {
        let result = GeoClipper.clip(&square(0.0, 2.0), &square(1.0, 3.0), ClipOp::Union);
        assert_eq!(result.len(), 1);
        assert_relative_eq!(total_area(&result), 7.0, epsilon = 1e-6);
    }

    #[test]
    fn difference_with_enclosed_square_has_a_hole() {
        let result = GeoClipper.clip(&square(0.0, 4.0), &square(1.0, 2.0), ClipOp::Difference);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].holes.len(), 1);
        assert_relative_eq!(total_area(&result), 15.0, epsilon = 1e-6);
    }

    #[test]
    fn returned_rings_are_open() {
        let result = GeoClipper.clip(&square(0.0, 2.0), &square(1.0, 3.0), ClipOp::Intersection);
        let ring = &result[0].exterior;
        assert_ne!(ring.first(), ring.last());
    }

    #[test]
    fn disjoint_intersection_is_empty() {
        let result = GeoClipper.clip(&square(0.0, 1.0), &square(5.0, 6.0), ClipOp::Intersection);
        assert!(result.is_empty());
    }

    #[test]
    fn op_names() {
        assert_eq!(ClipOp::Intersection.name(), "intersect");
        assert_eq!(ClipOp::Difference.name(), "subtract");
        assert_eq!(ClipOp::Union.name(), "add");
    }
}
