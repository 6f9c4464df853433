//! 3D vector over `glam::DVec3` with tolerance-based equality.
//!
//! `Vector` deliberately does not implement `PartialEq`: exact float equality
//! is almost never what geometry code wants. Use [`Vector::approx_eq`] with
//! the kernel [`Tolerance`].

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use glam::DVec3;

use crate::context::Tolerance;

/// Immutable 3D vector / point.
///
/// # Examples
/// ```
/// use mesh_kernel::{Tolerance, Vector};
/// let a = Vector::new(1.0, 0.0, 0.0);
/// let b = Vector::new(0.0, 1.0, 0.0);
/// let tol = Tolerance::default();
/// assert!(a.cross(b).approx_eq(Vector::new(0.0, 0.0, 1.0), tol));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector(DVec3);

impl Vector {
    /// The origin.
    pub const ZERO: Vector = Vector(DVec3::ZERO);

    /// Creates a vector from its coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// X coordinate.
    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    /// Y coordinate.
    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Z coordinate.
    #[inline]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Coordinate by axis index (0 = x, 1 = y, 2 = z).
    ///
    /// Indices above 2 wrap around.
    #[inline]
    pub fn axis(&self, index: usize) -> f64 {
        match index % 3 {
            0 => self.0.x,
            1 => self.0.y,
            _ => self.0.z,
        }
    }

    /// Coordinates as an array.
    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        self.0.to_array()
    }

    /// The underlying `glam` vector.
    #[inline]
    pub fn as_dvec3(&self) -> DVec3 {
        self.0
    }

    /// Cross product.
    #[inline]
    pub fn cross(self, other: Vector) -> Vector {
        Vector(self.0.cross(other.0))
    }

    /// Dot product.
    ///
    /// Subject to cancellation for large, nearly orthogonal inputs; callers
    /// compare the result against ε.
    #[inline]
    pub fn dot(self, other: Vector) -> f64 {
        self.0.dot(other.0)
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f64 {
        self.0.length()
    }

    /// Squared Euclidean length.
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.0.length_squared()
    }

    /// Unit vector in the same direction.
    ///
    /// Produces non-finite components for the zero vector; use
    /// [`Vector::try_unit`] when the input may be degenerate.
    #[inline]
    pub fn unit(self) -> Vector {
        Vector(self.0 / self.0.length())
    }

    /// Unit vector, or `None` when the length is within tolerance of zero.
    pub fn try_unit(self, tol: Tolerance) -> Option<Vector> {
        let length = self.length();
        if tol.is_zero(length) {
            None
        } else {
            Some(Vector(self.0 / length))
        }
    }

    /// Linear interpolation (`t = 0` gives `self`, `t = 1` gives `other`).
    #[inline]
    pub fn lerp(self, other: Vector, t: f64) -> Vector {
        Vector(self.0.lerp(other.0, t))
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Vector) -> Vector {
        Vector(self.0.min(other.0))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Vector) -> Vector {
        Vector(self.0.max(other.0))
    }

    /// Index of the component with the largest magnitude.
    ///
    /// Ties resolve to the lowest axis.
    pub fn dominant_axis(self) -> usize {
        let abs = self.0.abs();
        if abs.x >= abs.y && abs.x >= abs.z {
            0
        } else if abs.y >= abs.z {
            1
        } else {
            2
        }
    }

    /// True when every component is finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Tolerance-based equality: every per-axis difference is strictly
    /// less than ε.
    pub fn approx_eq(self, other: Vector, tol: Tolerance) -> bool {
        tol.eq(self.0.x, other.0.x) && tol.eq(self.0.y, other.0.y) && tol.eq(self.0.z, other.0.z)
    }
}

impl From<DVec3> for Vector {
    fn from(value: DVec3) -> Self {
        Self(value)
    }
}

impl From<Vector> for DVec3 {
    fn from(value: Vector) -> Self {
        value.0
    }
}

impl From<[f64; 3]> for Vector {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Vector {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector(self.0 + rhs.0)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector(self.0 - rhs.0)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector(-self.0)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        Vector(self.0 * rhs)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Vector {
        Vector(self.0 / rhs)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}

#[cfg(test)]
mod tests;
