//! Core trait seams shared by the product kernels.

pub mod traits;
pub use traits::*;
