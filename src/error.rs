use thiserror::Error;

// Unified error type for matprod

#[derive(Error, Debug)]
pub enum MatError {
    /// Operand shapes are incompatible for the requested operation.
    ///
    /// `axis` names the dimension that disagreed ("rows", "cols", "inner",
    /// "row length", "storage length"); `left` and `right` are the two
    /// conflicting extents.
    #[error("dimension mismatch on {axis}: {left} vs {right}")]
    DimensionMismatch {
        axis: &'static str,
        left: usize,
        right: usize,
    },
    /// A construction routine was asked for a matrix with no rows or no
    /// columns.
    #[error("invalid shape {rows}x{cols}: rows and cols must each be at least 1")]
    InvalidShape { rows: usize, cols: usize },
    /// Uniform-random bounds where the lower bound is not below the upper.
    #[error("invalid range: min {min} is not below max {max}")]
    InvalidRange { min: String, max: String },
}
