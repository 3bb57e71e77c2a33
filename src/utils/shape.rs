//! Dimension-compatibility checks shared across operations.
//!
//! Both the element-wise and the general-multiplication kernels route their
//! preconditions through here, so shape failures carry identical payloads no
//! matter which operation raised them.

use crate::core::traits::MatShape;
use crate::error::MatError;

/// Require equal row and column counts (element-wise operations).
///
/// Reports the first axis that disagrees, rows before columns.
pub fn same_shape<A, B>(a: &A, b: &B) -> Result<(), MatError>
where
    A: MatShape + ?Sized,
    B: MatShape + ?Sized,
{
    if a.nrows() != b.nrows() {
        return Err(MatError::DimensionMismatch {
            axis: "rows",
            left: a.nrows(),
            right: b.nrows(),
        });
    }
    if a.ncols() != b.ncols() {
        return Err(MatError::DimensionMismatch {
            axis: "cols",
            left: a.ncols(),
            right: b.ncols(),
        });
    }
    Ok(())
}

/// Require the left operand's column count to equal the right operand's row
/// count (general multiplication).
///
/// The error carries both extents so the caller can tell which operand is
/// malformed.
pub fn inner_dim<A, B>(a: &A, b: &B) -> Result<(), MatError>
where
    A: MatShape + ?Sized,
    B: MatShape + ?Sized,
{
    if a.ncols() != b.nrows() {
        return Err(MatError::DimensionMismatch {
            axis: "inner",
            left: a.ncols(),
            right: b.nrows(),
        });
    }
    Ok(())
}

/// Require at least one row and one column.
pub(crate) fn nonzero_shape(nrows: usize, ncols: usize) -> Result<(), MatError> {
    if nrows == 0 || ncols == 0 {
        return Err(MatError::InvalidShape {
            rows: nrows,
            cols: ncols,
        });
    }
    Ok(())
}
