use super::*;
use crate::polygon::tesselate::IdentityTesselator;
use approx::assert_relative_eq;

fn tol() -> Tolerance {
    Tolerance::default()
}

fn v(x: f64, y: f64, z: f64) -> Vector {
    Vector::new(x, y, z)
}

/// Unit square in z = 0 as two triangles sharing the diagonal.
fn unit_square() -> Mesh {
    let vertices = [v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0), v(1.0, 1.0, 0.0)];
    Mesh::from_indexed(&vertices, &[[0, 1, 2], [1, 3, 2]]).unwrap()
}

fn triangle_at(x: f64) -> Triangle {
    Triangle::new(v(x, 0.0, 0.0), v(x + 1.0, 0.0, 0.0), v(x, 1.0, 0.0))
}

#[test]
fn test_from_indexed() {
    let mesh = unit_square();
    assert_eq!(mesh.len(), 2);
    assert!(!mesh.is_empty());
    assert!(mesh.faces()[1].vertices()[1].approx_eq(v(1.0, 1.0, 0.0), tol()));
}

#[test]
fn test_from_indexed_rejects_bad_index() {
    let vertices = [v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0)];
    let err = Mesh::from_indexed(&vertices, &[[0, 1, 3]]).unwrap_err();
    assert_eq!(err, GeometryError::IndexOutOfRange { index: 3, len: 3 });
}

#[test]
fn test_to_indexed_welds_shared_vertices() {
    let (vertices, indices) = unit_square().to_indexed(tol());
    assert_eq!(vertices.len(), 4);
    assert_eq!(indices, vec![[0, 1, 2], [1, 3, 2]]);

    let rebuilt = Mesh::from_indexed(&vertices, &indices).unwrap();
    assert_relative_eq!(rebuilt.surface_area(), 1.0);
}

#[test]
fn test_vertices_keep_duplicates() {
    assert_eq!(unit_square().vertices().len(), 6);
    assert!(Mesh::default().vertices().is_empty());
}

#[test]
fn test_bounding_box() {
    let mesh: Mesh = vec![triangle_at(0.0), triangle_at(3.0)].into_iter().collect();
    let bbox = mesh.bounding_box().unwrap();
    assert!(bbox.min.approx_eq(v(0.0, 0.0, 0.0), tol()));
    assert!(bbox.max.approx_eq(v(4.0, 1.0, 0.0), tol()));
    assert!(bbox.size().approx_eq(v(4.0, 1.0, 0.0), tol()));
    assert!(bbox.center().approx_eq(v(2.0, 0.5, 0.0), tol()));

    assert!(Mesh::default().bounding_box().is_none());
}

#[test]
fn test_surface_area() {
    assert_relative_eq!(unit_square().surface_area(), 1.0);
}

// =============================================================================
// Cut
// =============================================================================

#[test]
fn test_cut_keeps_triangles_and_area() {
    let cut = unit_square().cut(v(1.0, 0.0, 0.0), 0.5, tol());

    assert_eq!(cut.above.len(), 3);
    assert_eq!(cut.below.len(), 3);
    assert_relative_eq!(cut.above.surface_area(), 0.5, epsilon = 1e-12);
    assert_relative_eq!(cut.below.surface_area(), 0.5, epsilon = 1e-12);

    let above = cut.above.bounding_box().unwrap();
    assert!(above.min.x() >= 0.5 - 1e-12);
    let below = cut.below.bounding_box().unwrap();
    assert!(below.max.x() <= 0.5 + 1e-12);
}

#[test]
fn test_cut_with_identity_tesselator_still_triangulates() {
    let cut = unit_square().cut_with(v(1.0, 0.0, 0.0), 0.5, &IdentityTesselator, tol());
    assert_eq!(cut.above.len(), 3);
    assert_eq!(cut.below.len(), 3);
}

#[test]
fn test_cut_missing_the_mesh() {
    let cut = unit_square().cut(v(0.0, 0.0, 1.0), -1.0, tol());
    assert_eq!(cut.above.len(), 2);
    assert!(cut.below.is_empty());
}

#[test]
fn test_cut_in_plane_duplicates_faces() {
    let cut = unit_square().cut(v(0.0, 0.0, 1.0), 0.0, tol());
    assert_eq!(cut.above.len(), 2);
    assert_eq!(cut.below.len(), 2);
}

// =============================================================================
// Split
// =============================================================================

#[test]
fn test_split_separates_islands() {
    let mesh = Mesh::new(vec![triangle_at(0.0), triangle_at(5.0), triangle_at(10.0)]);
    let parts = mesh.split(tol());
    assert_eq!(parts.len(), 3);
    assert!(parts.iter().all(|p| p.len() == 1));
    assert!(!mesh.is_contiguous(tol()));
}

#[test]
fn test_split_follows_chains() {
    // 0 touches 1, 1 touches 2; 3 is alone.
    let mesh = Mesh::new(vec![
        triangle_at(0.0),
        triangle_at(20.0),
        triangle_at(1.0),
        triangle_at(2.0),
    ]);
    let parts = mesh.split(tol());
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].len(), 3);
    assert_eq!(parts[1].len(), 1);

    // Relative order inside a part is preserved.
    let xs: Vec<f64> = parts[0].iter().map(|t| t.vertices()[0].x()).collect();
    assert_eq!(xs, vec![0.0, 1.0, 2.0]);
}

#[test]
fn test_split_uses_tolerant_vertex_equality() {
    let nudged = Triangle::new(v(1.0 + 5e-9, 0.0, 0.0), v(2.0, 0.0, 0.0), v(1.0, 1.0, 0.0));
    let mesh = Mesh::new(vec![triangle_at(0.0), nudged]);
    assert!(mesh.is_contiguous(tol()));
}

#[test]
fn test_empty_and_single_meshes_are_contiguous() {
    assert!(Mesh::default().is_contiguous(tol()));
    assert!(Mesh::new(vec![triangle_at(0.0)]).is_contiguous(tol()));
    assert!(unit_square().is_contiguous(tol()));
}

#[test]
fn test_iteration() {
    let mesh = unit_square();
    assert_eq!((&mesh).into_iter().count(), 2);
    let owned: Vec<Triangle> = mesh.into_iter().collect();
    assert_eq!(owned.len(), 2);
}
