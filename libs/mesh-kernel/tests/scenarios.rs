//! End-to-end geometry scenarios through the public API.

use approx::assert_relative_eq;
use mesh_kernel::{
    GeometryError, LineIntersection, Mesh, Polygon, Segment, Tolerance, Triangle, TriangleIntersection, Vector,
};

fn tol() -> Tolerance {
    Tolerance::default()
}

fn v(x: f64, y: f64, z: f64) -> Vector {
    Vector::new(x, y, z)
}

fn tri(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> Triangle {
    Triangle::new(Vector::from(a), Vector::from(b), Vector::from(c))
}

fn tetrahedron(offset: Vector) -> Mesh {
    let vertices = [
        v(0.0, 0.0, 0.0) + offset,
        v(1.0, 0.0, 0.0) + offset,
        v(0.0, 1.0, 0.0) + offset,
        v(0.0, 0.0, 1.0) + offset,
    ];
    Mesh::from_indexed(&vertices, &[[0, 2, 1], [0, 1, 3], [1, 2, 3], [0, 3, 2]]).unwrap()
}

#[test]
fn segments_sharing_an_endpoint() {
    let first = Segment::new(v(1.0, 1.0, 1.0), v(2.0, 2.0, 2.0));
    let second = Segment::new(v(1.0, 1.0, 1.0), v(3.0, 4.0, 5.0));
    match first.intersect(&second, tol()) {
        Some(LineIntersection::Point(p)) => assert!(p.approx_eq(v(1.0, 1.0, 1.0), tol())),
        other => panic!("expected a point, got {other:?}"),
    }
}

#[test]
fn triangles_jutting_through_each_other() {
    let first = tri([1.0, 0.0, 0.0], [5.0, 5.0, 5.0], [-2.0, 4.0, 4.0]);
    let second = tri([4.5, -2.0, 4.0], [-2.5, 6.0, 0.0], [-0.5, 10.0, 4.0]);

    let expected = Segment::new(v(1.0, 2.0, 2.0), v(2.0, 4.0, 4.0));
    for result in [first.intersect(&second, tol()), second.intersect(&first, tol())] {
        match result.unwrap() {
            Some(TriangleIntersection::Segment(s)) => assert!(s.approx_eq(&expected, tol())),
            other => panic!("expected a segment, got {other:?}"),
        }
    }
}

#[test]
fn coplanar_triangles_overlapping_at_a_corner() {
    let first = tri([1.0, 1.0, 1.0], [5.0, 1.0, 1.0], [2.0, 4.0, 1.0]);
    let second = tri([1.0, 2.0, 1.0], [5.0, 4.0, 1.0], [1.0, 5.0, 1.0]);

    let expected = tri([3.0, 3.0, 1.0], [2.0, 4.0, 1.0], [1.4, 2.2, 1.0]);
    match first.intersect(&second, tol()).unwrap() {
        Some(TriangleIntersection::Triangle(t)) => assert!(t.approx_eq(&expected, tol())),
        other => panic!("expected a triangle, got {other:?}"),
    }
}

#[test]
fn polygon_booleans_need_a_shared_plane() {
    let square = |z: f64| {
        Polygon::new(vec![v(0.0, 0.0, z), v(1.0, 0.0, z), v(1.0, 1.0, z), v(0.0, 1.0, z)])
    };
    let tilted = Polygon::new(vec![v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(1.0, 1.0, 1.0)]);

    for other in [square(1.0), tilted] {
        assert!(matches!(
            square(0.0).intersect(&other, tol()),
            Err(GeometryError::NonCoplanar { .. })
        ));
    }
}

#[test]
fn subtracting_an_enclosed_polygon_yields_two_pieces() {
    let outer = Polygon::new(vec![v(0.0, 0.0, 2.0), v(6.0, 0.0, 2.0), v(6.0, 6.0, 2.0), v(0.0, 6.0, 2.0)]);
    let inner = Polygon::new(vec![v(2.0, 2.0, 2.0), v(4.0, 2.0, 2.0), v(3.0, 4.0, 2.0)]);

    let pieces = outer.subtract(&inner, tol()).unwrap();
    assert_eq!(pieces.len(), 2);
    let area: f64 = pieces.iter().map(Polygon::area).sum();
    assert_relative_eq!(area, 36.0 - 2.0, epsilon = 1e-9);
    assert!(pieces.iter().flat_map(|p| p.vertices()).all(|p| p.z() == 2.0));
}

#[test]
fn subtracting_a_polygon_that_touches_the_boundary() {
    let outer = Polygon::new(vec![v(0.0, 0.0, 0.0), v(6.0, 0.0, 0.0), v(6.0, 6.0, 0.0), v(0.0, 6.0, 0.0)]);
    let notch = Polygon::new(vec![v(3.0, 0.0, 0.0), v(4.0, 2.0, 0.0), v(2.0, 2.0, 0.0)]);

    let pieces = outer.subtract(&notch, tol()).unwrap();
    assert_eq!(pieces.len(), 3);
    let area: f64 = pieces.iter().map(Polygon::area).sum();
    assert_relative_eq!(area, 34.0, epsilon = 1e-9);
    for piece in &pieces {
        let vertices = piece.vertices();
        for (i, p) in vertices.iter().enumerate() {
            assert!(vertices[i + 1..].iter().all(|q| !p.approx_eq(*q, tol())), "pinched piece {piece:?}");
        }
        assert!(piece.normal().unwrap().z() > 0.0);
    }
}

#[test]
fn cutting_a_tetrahedron_preserves_area() {
    let mesh = tetrahedron(Vector::ZERO);
    let cut = mesh.cut(v(0.0, 0.0, 1.0), 0.5, tol());

    assert_relative_eq!(
        cut.above.surface_area() + cut.below.surface_area(),
        mesh.surface_area(),
        epsilon = 1e-9
    );
    assert!(cut.above.vertices().iter().all(|p| p.z() >= 0.5 - 1e-9));
    assert!(cut.below.vertices().iter().all(|p| p.z() <= 0.5 + 1e-9));
    assert!(cut.above.is_contiguous(tol()));
}

#[test]
fn splitting_two_tetrahedra() {
    let faces: Mesh = tetrahedron(Vector::ZERO)
        .into_iter()
        .chain(tetrahedron(v(5.0, 0.0, 0.0)))
        .collect();
    assert!(!faces.is_contiguous(tol()));

    let parts = faces.split(tol());
    assert_eq!(parts.len(), 2);
    assert!(parts.iter().all(|p| p.len() == 4 && p.is_contiguous(tol())));

    let bbox = parts[1].bounding_box().unwrap();
    assert!(bbox.min.approx_eq(v(5.0, 0.0, 0.0), tol()));
}
