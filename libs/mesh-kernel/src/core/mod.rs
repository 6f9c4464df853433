//! Leaf value types of the kernel.
//!
//! Vectors, 3×3 determinants and segments; none of these depend on the
//! polygon, triangle or mesh layers.

pub mod matrix;
pub mod segment;
pub mod vector;
