//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane and positive.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let cfg = GlobalConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// ```
#[test]
fn default_constants_are_valid() {
    let cfg = GlobalConfig::default();
    assert_eq!(cfg.tolerance, DEFAULT_EPSILON);
    assert!(cfg.tolerance < MAX_EPSILON);
}

/// Validates the builder rejects invalid values.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// assert!(GlobalConfig::new(0.0).is_err());
/// ```
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(0.0).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        GlobalConfig::new(-1.0e-9).unwrap_err(),
        ConfigError::InvalidTolerance(-1.0e-9)
    );
    assert_eq!(
        GlobalConfig::new(2.0).unwrap_err(),
        ConfigError::ToleranceTooLarge(2.0)
    );
    assert!(matches!(
        GlobalConfig::new(f64::NAN),
        Err(ConfigError::InvalidTolerance(_))
    ));
}

#[test]
fn new_accepts_small_tolerance() {
    let cfg = GlobalConfig::new(1.0e-12).unwrap();
    assert_eq!(cfg.tolerance, 1.0e-12);
}

#[test]
fn error_display_names_the_value() {
    let message = ConfigError::InvalidTolerance(-3.0).to_string();
    assert!(message.contains("-3"));
}
