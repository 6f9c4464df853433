//! Centralized configuration values shared across the geometry workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

/// Default absolute tolerance used by every geometric predicate.
///
/// Two coordinates closer than this value are treated as equal, and a signed
/// distance smaller than this value is treated as "on the plane".
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_EPSILON;
/// assert_eq!(DEFAULT_EPSILON, 1.0e-8);
/// ```
pub const DEFAULT_EPSILON: f64 = 1.0e-8;

/// Largest tolerance accepted by [`GlobalConfig::new`].
///
/// Tolerances at or above one unit would merge entire features of ordinary
/// models and are rejected.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_EPSILON, MAX_EPSILON};
/// assert!(DEFAULT_EPSILON < MAX_EPSILON);
/// ```
pub const MAX_EPSILON: f64 = 1.0;

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// The snapshot is built once at the composition root and handed to the
/// geometry kernel; nothing reads it through global state.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Numeric tolerance propagated into geometry kernels.
    pub tolerance: f64,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6).expect("valid config");
    /// assert_eq!(cfg.tolerance, 1.0e-6);
    /// ```
    pub fn new(tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if tolerance >= MAX_EPSILON {
            return Err(ConfigError::ToleranceTooLarge(tolerance));
        }
        Ok(Self { tolerance })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_EPSILON,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when tolerance is not smaller than [`MAX_EPSILON`].
    ToleranceTooLarge(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive and finite: {value}")
            }
            ConfigError::ToleranceTooLarge(value) => {
                write!(f, "tolerance must be < {MAX_EPSILON}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
