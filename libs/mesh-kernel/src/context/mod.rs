//! Kernel tolerance built on the shared `config` crate.
//!
//! Every predicate in the kernel takes a [`Tolerance`] argument instead of
//! reading a global epsilon, so two kernels configured differently can live
//! in the same process. Mixing values computed under different tolerances is
//! not supported.

use config::constants::{GlobalConfig, DEFAULT_EPSILON};

use crate::error::GeometryResult;

/// Absolute tolerance used for every equality, sign and planarity test.
///
/// # Examples
/// ```
/// use mesh_kernel::Tolerance;
/// let tol = Tolerance::default();
/// assert!(tol.is_zero(5.0e-9));
/// assert!(!tol.is_zero(1.0e-8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    epsilon: f64,
}

impl Tolerance {
    /// Creates a tolerance after validating it through [`GlobalConfig`].
    ///
    /// # Examples
    /// ```
    /// use mesh_kernel::Tolerance;
    /// assert!(Tolerance::new(1.0e-6).is_ok());
    /// assert!(Tolerance::new(0.0).is_err());
    /// ```
    pub fn new(epsilon: f64) -> GeometryResult<Self> {
        Ok(Self::from_config(&GlobalConfig::new(epsilon)?))
    }

    /// Creates a tolerance from an already validated configuration snapshot.
    pub fn from_config(config: &GlobalConfig) -> Self {
        Self {
            epsilon: config.tolerance,
        }
    }

    /// The raw epsilon value.
    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// `|value| < ε`.
    #[inline]
    pub fn is_zero(&self, value: f64) -> bool {
        value.abs() < self.epsilon
    }

    /// `|a - b| < ε`.
    #[inline]
    pub fn eq(&self, a: f64, b: f64) -> bool {
        self.is_zero(a - b)
    }

    /// Snaps values within ε of zero to exactly zero.
    #[inline]
    pub fn snap(&self, value: f64) -> f64 {
        if self.is_zero(value) {
            0.0
        } else {
            value
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}
