//! Construction helpers for `DenseMat`.
//!
//! Factory constructors for placeholder, constant-valued, identity, and
//! uniform-random matrices. Every factory validates the requested shape
//! before allocating, so a zero row or column count fails with
//! `InvalidShape` instead of producing a degenerate matrix.

use num_traits::Num;
use rand::Rng;
use rand::distributions::uniform::SampleUniform;

use crate::error::MatError;
use crate::matrix::dense::DenseMat;
use crate::utils::shape::nonzero_shape;

impl<T: Copy + Num> DenseMat<T> {
    /// Placeholder-initialized matrix of the given shape.
    ///
    /// The cells hold `T::zero()` as an explicit sentinel; callers are
    /// expected to overwrite them. Fails with `InvalidShape` if `nrows` or
    /// `ncols` is zero.
    pub fn zeros(nrows: usize, ncols: usize) -> Result<Self, MatError> {
        Self::constant(nrows, ncols, T::zero())
    }

    /// Matrix with every cell equal to `value`.
    ///
    /// Fails with `InvalidShape` if `nrows` or `ncols` is zero.
    pub fn constant(nrows: usize, ncols: usize, value: T) -> Result<Self, MatError> {
        nonzero_shape(nrows, ncols)?;
        Ok(Self::from_raw_unchecked(
            nrows,
            ncols,
            vec![value; nrows * ncols],
        ))
    }

    /// `dim × dim` identity matrix: ones on the diagonal, zeros elsewhere.
    ///
    /// Fails with `InvalidShape` if `dim` is zero.
    pub fn identity(dim: usize) -> Result<Self, MatError> {
        let mut m = Self::constant(dim, dim, T::zero())?;
        for i in 0..dim {
            m.set(i, i, T::one());
        }
        Ok(m)
    }
}

impl<T> DenseMat<T>
where
    T: Copy + Num + SampleUniform + PartialOrd + std::fmt::Display,
{
    /// Matrix with every cell drawn independently and uniformly from
    /// `[min, max)`, using the thread-local generator.
    ///
    /// Fails with `InvalidRange` if `min >= max`, or with `InvalidShape` on
    /// a zero dimension.
    pub fn random(nrows: usize, ncols: usize, min: T, max: T) -> Result<Self, MatError> {
        Self::random_with(&mut rand::thread_rng(), nrows, ncols, min, max)
    }

    /// Like [`DenseMat::random`], drawing from a caller-supplied generator.
    ///
    /// Seeding policy stays with the caller; pass a seeded `StdRng` for
    /// reproducible matrices.
    pub fn random_with<R: Rng + ?Sized>(
        rng: &mut R,
        nrows: usize,
        ncols: usize,
        min: T,
        max: T,
    ) -> Result<Self, MatError> {
        nonzero_shape(nrows, ncols)?;
        if min >= max {
            return Err(MatError::InvalidRange {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        let data = (0..nrows * ncols)
            .map(|_| rng.gen_range(min..max))
            .collect();
        Ok(Self::from_raw_unchecked(nrows, ncols, data))
    }
}
