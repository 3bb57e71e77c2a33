//! General matrix multiplication.
//!
//! One routine covers the whole multiplication family: vector×vector,
//! vector×matrix, and matrix×vector are `matmul` applied to `1×N` / `N×1`
//! operands. The running accumulator is a function-local `f64` seeded at
//! `0.0`, so every result cell is float-valued regardless of the operand
//! element kind.

use num_traits::ToPrimitive;

use crate::core::traits::{MatShape, MatrixGet};
use crate::error::MatError;
use crate::matrix::dense::DenseMat;
use crate::utils::shape::inner_dim;

/// General matrix product with float accumulation.
///
/// Requires `a.ncols() == b.nrows()`; fails with
/// [`MatError::DimensionMismatch`] carrying both extents otherwise. The
/// result has shape `[a.nrows() × b.ncols()]` and cell `(i, j)` holds
/// `Σ_k a[i][k] * b[k][j]`.
///
/// The result element type is always `f64`, integer operands included: the
/// accumulator starts from a float zero, so every product cell is promoted.
/// A `[1×J]·[J×1]` product returns a `1×1` matrix holding one float, never a
/// bare scalar.
pub fn matmul<T, A, B>(a: &A, b: &B) -> Result<DenseMat<f64>, MatError>
where
    T: Copy + ToPrimitive,
    A: MatShape + MatrixGet<T>,
    B: MatShape + MatrixGet<T>,
{
    inner_dim(a, b)?;
    let (m, n) = (a.nrows(), b.ncols());
    let inner = a.ncols();

    let mut data = Vec::with_capacity(m * n);
    for i in 0..m {
        for j in 0..n {
            let mut acc = 0.0f64;
            for k in 0..inner {
                let left = a.get(i, k).to_f64().unwrap_or(0.0);
                let right = b.get(k, j).to_f64().unwrap_or(0.0);
                acc += left * right;
            }
            data.push(acc);
        }
    }

    Ok(DenseMat::from_raw_unchecked(m, n, data))
}
