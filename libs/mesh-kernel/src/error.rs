//! # Error Types
//!
//! Error types for kernel operations. All errors are explicit and provide
//! clear debugging information.
//!
//! ## Error Policy
//!
//! - NO fallback mechanisms when operations fail
//! - Parallel or skew lines are ordinary outcomes, not errors
//! - Errors include context for debugging

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during geometry operations.
///
/// ## Example
///
/// ```rust
/// use mesh_kernel::{GeometryError, Polygon, Tolerance, Vector};
///
/// let floor = Polygon::new(vec![
///     Vector::new(0.0, 0.0, 0.0),
///     Vector::new(1.0, 0.0, 0.0),
///     Vector::new(0.0, 1.0, 0.0),
/// ]);
/// let wall = Polygon::new(vec![
///     Vector::new(0.0, 0.0, 0.0),
///     Vector::new(1.0, 0.0, 0.0),
///     Vector::new(0.0, 0.0, 1.0),
/// ]);
///
/// match floor.intersect(&wall, Tolerance::default()) {
///     Err(GeometryError::NonCoplanar { operation }) => assert_eq!(operation, "intersect"),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Boolean operands do not share a plane within tolerance.
    ///
    /// No partial result is produced.
    #[error("Polygon {operation} requires coplanar operands")]
    NonCoplanar {
        /// Name of the boolean operation (intersect, subtract, add)
        operation: &'static str,
    },

    /// A boolean result contains more holes than the splitter handles.
    #[error("Unsupported topology: result has {holes} holes (at most 1 is supported)")]
    TooManyHoles {
        /// Number of inner rings reported by the clipper
        holes: usize,
    },

    /// A single hole could not be cut out of its exterior ring.
    #[error("Unsupported topology: {0}")]
    UnsupportedTopology(String),

    /// A triangle was requested from a vertex list of the wrong length.
    #[error("Malformed triangle: expected 3 vertices, got {vertices}")]
    MalformedTriangle {
        /// Number of vertices supplied
        vertices: usize,
    },

    /// An indexed mesh references a vertex that does not exist.
    #[error("Vertex index {index} out of range for {len} vertices")]
    IndexOutOfRange {
        /// Offending index
        index: u32,
        /// Number of available vertices
        len: usize,
    },

    /// Invalid tolerance configuration.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl GeometryError {
    /// Creates an unsupported topology error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::UnsupportedTopology(message.into())
    }

    /// Returns true for both unsupported-topology variants.
    pub fn is_unsupported_topology(&self) -> bool {
        matches!(self, Self::TooManyHoles { .. } | Self::UnsupportedTopology(_))
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for kernel operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let err = GeometryError::NonCoplanar { operation: "subtract" };
        assert!(err.to_string().contains("subtract"));

        let err = GeometryError::TooManyHoles { holes: 2 };
        assert!(err.to_string().contains("2 holes"));
        assert!(err.is_unsupported_topology());

        let err = GeometryError::MalformedTriangle { vertices: 4 };
        assert!(err.to_string().contains("got 4"));
        assert!(!err.is_unsupported_topology());
    }

    #[test]
    fn test_config_error_converts() {
        let err: GeometryError = ConfigError::InvalidTolerance(0.0).into();
        assert!(matches!(err, GeometryError::Config(_)));
    }

    /// Errors can cross thread boundaries.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeometryError>();
    }
}
