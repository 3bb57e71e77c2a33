//! Hadamard (element-wise) product.

use num_traits::Num;

use crate::core::traits::{MatShape, MatrixGet};
use crate::error::MatError;
use crate::matrix::dense::DenseMat;
use crate::utils::shape::same_shape;

/// Element-wise product of two equal-shaped matrices.
///
/// Computes `c[i][j] = a[i][j] * b[i][j]` for every cell. There is no
/// accumulation; the element kind is preserved, so integer operands produce
/// an integer result.
///
/// Fails with [`MatError::DimensionMismatch`] naming the disagreeing axis
/// ("rows" or "cols") and both extents when the shapes differ.
pub fn hadamard<T, A, B>(a: &A, b: &B) -> Result<DenseMat<T>, MatError>
where
    T: Copy + Num,
    A: MatShape + MatrixGet<T>,
    B: MatShape + MatrixGet<T>,
{
    same_shape(a, b)?;
    let (m, n) = (a.nrows(), a.ncols());
    let mut data = Vec::with_capacity(m * n);
    for i in 0..m {
        for j in 0..n {
            data.push(a.get(i, j) * b.get(i, j));
        }
    }
    DenseMat::from_raw(m, n, data)
}
