//! # Config Crate
//!
//! Centralized configuration constants for the geometry workspace.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GlobalConfig, DEFAULT_EPSILON};
//!
//! let cfg = GlobalConfig::new(DEFAULT_EPSILON).expect("valid tolerance");
//! let value: f64 = 1e-9;
//! assert!(value.abs() < cfg.tolerance);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Snapshots**: `GlobalConfig` rejects unusable tolerances
//! - **No Global State**: configuration is passed by value to the kernel

pub mod constants;
