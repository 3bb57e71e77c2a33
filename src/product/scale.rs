//! Scalar multiplication.

use num_traits::Num;

use crate::core::traits::{MatShape, MatrixGet};
use crate::matrix::dense::DenseMat;

/// Scalar multiple of a matrix: `c[i][j] = s * m[i][j]`.
///
/// Covers scalar×vector and scalar×matrix alike, since vectors are ordinary
/// one-row or one-column matrices. The scalar is unconstrained, so the
/// operation is infallible; the element kind is preserved.
pub fn scale<T, M>(s: T, m: &M) -> DenseMat<T>
where
    T: Copy + Num,
    M: MatShape + MatrixGet<T>,
{
    let (rows, cols) = (m.nrows(), m.ncols());
    let mut data = Vec::with_capacity(rows * cols);
    for i in 0..rows {
        for j in 0..cols {
            data.push(s * m.get(i, j));
        }
    }
    DenseMat::from_raw_unchecked(rows, cols, data)
}
