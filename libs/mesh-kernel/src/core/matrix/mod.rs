//! 3×3 matrix built from column vectors.
//!
//! Only the determinant is needed: orientation of vertex triples and the
//! determinant ratios of the line-line closest-point solve.

use glam::DMat3;

use super::vector::Vector;

/// A 3×3 matrix whose columns are the given vectors.
///
/// # Examples
/// ```
/// use mesh_kernel::{Matrix3, Vector};
/// let m = Matrix3::from_columns(
///     Vector::new(1.0, 0.0, 0.0),
///     Vector::new(0.0, 2.0, 0.0),
///     Vector::new(0.0, 0.0, 3.0),
/// );
/// assert_eq!(m.determinant(), 6.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Matrix3(DMat3);

impl Matrix3 {
    /// Builds the matrix `[a b c]` from three columns.
    pub fn from_columns(a: Vector, b: Vector, c: Vector) -> Self {
        Self(DMat3::from_cols(a.as_dvec3(), b.as_dvec3(), c.as_dvec3()))
    }

    /// Column by index.
    pub fn column(&self, index: usize) -> Vector {
        Vector::from(self.0.col(index))
    }

    /// Determinant by cofactor expansion along the first column.
    pub fn determinant(&self) -> f64 {
        let [a, b, c] = [self.0.x_axis, self.0.y_axis, self.0.z_axis];
        a.x * (b.y * c.z - c.y * b.z) - b.x * (a.y * c.z - c.y * a.z)
            + c.x * (a.y * b.z - b.y * a.z)
    }
}

/// Shorthand for `Matrix3::from_columns(a, b, c).determinant()`.
#[inline]
pub fn det3(a: Vector, b: Vector, c: Vector) -> f64 {
    Matrix3::from_columns(a, b, c).determinant()
}
