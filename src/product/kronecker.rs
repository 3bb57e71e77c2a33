//! Kronecker (tensor) product.
//!
//! The Kronecker product of `a: [G×H]` and `b: [J×K]` is the
//! `[(G·J)×(H·K)]` block matrix whose block at block-row `g`, block-column
//! `h` is `a[g][h] * b`. Any two matrices are compatible operands, so the
//! operation is infallible.

use num_traits::Num;

use crate::core::traits::{MatShape, MatrixGet};
use crate::matrix::dense::DenseMat;

/// Block-structured product of two matrices.
///
/// Result cell `(g·J + j, h·K + k)` holds `a[g][h] * b[j][k]`. The element
/// kind is preserved: integer operands produce an integer result.
pub fn kronecker<T, A, B>(a: &A, b: &B) -> DenseMat<T>
where
    T: Copy + Num,
    A: MatShape + MatrixGet<T>,
    B: MatShape + MatrixGet<T>,
{
    let (g_rows, h_cols) = (a.nrows(), a.ncols());
    let (j_rows, k_cols) = (b.nrows(), b.ncols());

    // Walk the result row-major: output row g*J + j is, over h, the
    // concatenation of a[g][h] * (row j of b).
    let mut data = Vec::with_capacity(g_rows * j_rows * h_cols * k_cols);
    for g in 0..g_rows {
        for j in 0..j_rows {
            for h in 0..h_cols {
                let left = a.get(g, h);
                for k in 0..k_cols {
                    data.push(left * b.get(j, k));
                }
            }
        }
    }

    DenseMat::from_raw_unchecked(g_rows * j_rows, h_cols * k_cols, data)
}
