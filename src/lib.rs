//! matprod: dense matrix product kernels over row-major storage
//!
//! This crate provides the Kronecker (tensor), Hadamard (element-wise),
//! scalar, and general matrix products over a simple owned dense matrix
//! type, plus shape-checked construction helpers (constant, identity,
//! uniform-random). Vectors are ordinary one-row or one-column matrices;
//! there is no separate vector type.

pub mod core;
pub mod error;
pub mod matrix;
pub mod product;
pub mod utils;

// Re-exports for convenience
pub use crate::core::*;
pub use error::*;
pub use matrix::*;
pub use product::*;
pub use utils::*;
