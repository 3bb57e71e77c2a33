//! Core linear-algebra traits for matprod.

/// Shape of a 2-D operand.
pub trait MatShape {
    /// Number of rows.
    fn nrows(&self) -> usize;
    /// Number of columns.
    fn ncols(&self) -> usize;
}

/// Uniform element access into a dense 2-D operand.
pub trait MatrixGet<T> {
    /// Element at row `i`, column `j`.
    fn get(&self, i: usize, j: usize) -> T;
}
