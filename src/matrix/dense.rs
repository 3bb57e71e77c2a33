//! Owned dense matrix storage.
//!
//! This module provides the `DenseMat<T>` type: row-major contiguous storage
//! behind raw and row-wise constructors, plus the `MatShape`/`MatrixGet`
//! trait impls the product kernels are generic over. Vectors are `DenseMat`
//! values with a single row or a single column.

use crate::core::traits::{MatShape, MatrixGet};
use crate::error::MatError;
use crate::utils::shape::nonzero_shape;

/// Owned dense matrix with row-major contiguous storage.
///
/// Invariants: at least one row and one column, and `data.len() == nrows *
/// ncols`. Every public constructor enforces both, so any `DenseMat` handed
/// to a caller is fully populated and never mutated again by this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMat<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

impl<T: Copy> DenseMat<T> {
    /// Construct from raw row-major storage.
    ///
    /// Fails with `InvalidShape` on a zero dimension, or with
    /// `DimensionMismatch` if `data.len() != nrows * ncols`.
    pub fn from_raw(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self, MatError> {
        nonzero_shape(nrows, ncols)?;
        if data.len() != nrows * ncols {
            return Err(MatError::DimensionMismatch {
                axis: "storage length",
                left: nrows * ncols,
                right: data.len(),
            });
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Construct from an ordered sequence of rows.
    ///
    /// Every row must match the length of the first; ragged input fails with
    /// `DimensionMismatch` reporting the expected and offending lengths.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        nonzero_shape(nrows, ncols)?;
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in &rows {
            if row.len() != ncols {
                return Err(MatError::DimensionMismatch {
                    axis: "row length",
                    left: ncols,
                    right: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { data, nrows, ncols })
    }

    /// A `[1×N]` row vector over the given cells.
    pub fn row_vector(cells: &[T]) -> Result<Self, MatError> {
        Self::from_raw(1, cells.len(), cells.to_vec())
    }

    /// A `[N×1]` column vector over the given cells.
    pub fn column_vector(cells: &[T]) -> Result<Self, MatError> {
        Self::from_raw(cells.len(), 1, cells.to_vec())
    }

    /// Construct without validating; shape must already satisfy the type's
    /// invariants.
    pub(crate) fn from_raw_unchecked(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), nrows * ncols);
        Self { data, nrows, ncols }
    }

    /// Element at row `i`, column `j`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        assert!(j < self.ncols, "column index {j} out of bounds ({} cols)", self.ncols);
        self.data[i * self.ncols + j]
    }

    /// Overwrite the element at row `i`, column `j`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        assert!(j < self.ncols, "column index {j} out of bounds ({} cols)", self.ncols);
        self.data[i * self.ncols + j] = value;
    }

    /// Row `i` as a slice.
    ///
    /// # Panics
    /// Panics if `i` is out of bounds.
    pub fn row(&self, i: usize) -> &[T] {
        let start = i * self.ncols;
        &self.data[start..start + self.ncols]
    }

    /// Iterator over the rows, in order.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks(self.ncols)
    }

    /// The single cell of a `1×1` matrix, or `None` for any other shape.
    pub fn as_scalar(&self) -> Option<T> {
        if self.nrows == 1 && self.ncols == 1 {
            Some(self.data[0])
        } else {
            None
        }
    }
}

impl<T> DenseMat<T> {
    /// Shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// True for a one-row or one-column matrix.
    pub fn is_vector(&self) -> bool {
        self.nrows == 1 || self.ncols == 1
    }

    /// Underlying row-major storage.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> MatShape for DenseMat<T> {
    fn nrows(&self) -> usize {
        self.nrows
    }
    fn ncols(&self) -> usize {
        self.ncols
    }
}

impl<T: Copy> MatrixGet<T> for DenseMat<T> {
    fn get(&self, i: usize, j: usize) -> T {
        DenseMat::get(self, i, j)
    }
}
