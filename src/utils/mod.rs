//! Shared helpers behind the product kernels.

pub mod shape;
pub use shape::{inner_dim, same_shape};
