//! Tests for the product family: Kronecker, Hadamard, scalar, and general
//! multiplication.
//!
//! These tests verify the concrete reference results plus the algebraic laws
//! the kernels are expected to satisfy (block structure of the Kronecker
//! product, identity as a multiplicative unit, linearity of scaling, and
//! associativity of multiplication within floating-point tolerance), using
//! fixed and random data.

use approx::assert_abs_diff_eq;
use matprod::{DenseMat, MatError, hadamard, kronecker, matmul, scale};
use rand::Rng;

/// Reference Kronecker product of two fixed integer matrices.
#[test]
fn kronecker_reference_case() {
    let a = DenseMat::from_rows(vec![vec![1, 2], vec![2, -1]]).unwrap();
    let b = DenseMat::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    let c = kronecker(&a, &b);
    assert_eq!(
        c,
        DenseMat::from_rows(vec![
            vec![1, 2, 2, 4],
            vec![3, 4, 6, 8],
            vec![2, 4, -1, -2],
            vec![6, 8, -3, -4],
        ])
        .unwrap()
    );
}

/// Kronecker shape and per-cell law for arbitrary (random) operands.
#[test]
fn kronecker_block_law_random() {
    let mut rng = rand::thread_rng();
    let a = DenseMat::random_with(&mut rng, 3, 2, -5.0, 5.0).unwrap();
    let b = DenseMat::random_with(&mut rng, 2, 4, -5.0, 5.0).unwrap();
    let c = kronecker(&a, &b);

    let (g_rows, h_cols) = a.shape();
    let (j_rows, k_cols) = b.shape();
    assert_eq!(c.shape(), (g_rows * j_rows, h_cols * k_cols));
    for g in 0..g_rows {
        for h in 0..h_cols {
            for j in 0..j_rows {
                for k in 0..k_cols {
                    assert_abs_diff_eq!(
                        c.get(g * j_rows + j, h * k_cols + k),
                        a.get(g, h) * b.get(j, k),
                        epsilon = 1e-12
                    );
                }
            }
        }
    }
}

/// Reference Hadamard product, and the cell law on random data.
#[test]
fn hadamard_reference_and_cell_law() {
    let a = DenseMat::from_rows(vec![vec![1, 2], vec![2, -1]]).unwrap();
    let b = DenseMat::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    assert_eq!(
        hadamard(&a, &b).unwrap(),
        DenseMat::from_rows(vec![vec![1, 4], vec![6, -4]]).unwrap()
    );

    let mut rng = rand::thread_rng();
    let x = DenseMat::random_with(&mut rng, 4, 3, -2.0, 2.0).unwrap();
    let y = DenseMat::random_with(&mut rng, 4, 3, -2.0, 2.0).unwrap();
    let z = hadamard(&x, &y).unwrap();
    for i in 0..4 {
        for j in 0..3 {
            assert_abs_diff_eq!(z.get(i, j), x.get(i, j) * y.get(i, j), epsilon = 1e-12);
        }
    }
}

/// Mismatched Hadamard operands fail with the disagreeing axis.
#[test]
fn hadamard_mismatch_is_recoverable() {
    let a = DenseMat::constant(2, 3, 1.0).unwrap();
    let b = DenseMat::constant(2, 4, 1.0).unwrap();
    // The call fails locally; nothing aborts and the caller keeps going.
    match hadamard(&a, &b) {
        Err(MatError::DimensionMismatch { axis, left, right }) => {
            assert_eq!(axis, "cols");
            assert_eq!((left, right), (3, 4));
        }
        other => panic!("expected a dimension mismatch, got {other:?}"),
    }
    assert!(hadamard(&a, &a.clone()).is_ok());
}

/// Multiplying by the identity returns the operand, float-promoted.
#[test]
fn identity_is_a_multiplicative_unit() {
    let m = DenseMat::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
    let i3: DenseMat<i32> = DenseMat::identity(3).unwrap();

    let expected = DenseMat::from_rows(vec![
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
        vec![7.0, 8.0, 9.0],
    ])
    .unwrap();
    assert_eq!(matmul(&m, &i3).unwrap(), expected);
    assert_eq!(matmul(&i3, &m).unwrap(), expected);
}

/// Reference matrix×vector and vector×vector products.
#[test]
fn vector_products_via_the_general_routine() {
    let m = DenseMat::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
    let v = DenseMat::column_vector(&[1, 2]).unwrap();
    assert_eq!(matmul(&m, &v).unwrap().as_slice(), &[5.0, 11.0, 17.0]);

    let r = DenseMat::row_vector(&[1, 2, 3]).unwrap();
    let c = DenseMat::column_vector(&[1, 2, 3]).unwrap();
    let p = matmul(&r, &c).unwrap();
    assert_eq!(p.shape(), (1, 1));
    assert_eq!(p.as_scalar(), Some(14.0));
}

/// Multiplication is associative for compatible shapes, within tolerance.
#[test]
fn matmul_is_associative() {
    let mut rng = rand::thread_rng();
    let a = DenseMat::random_with(&mut rng, 3, 4, -1.0, 1.0).unwrap();
    let b = DenseMat::random_with(&mut rng, 4, 2, -1.0, 1.0).unwrap();
    let c = DenseMat::random_with(&mut rng, 2, 5, -1.0, 1.0).unwrap();

    let left = matmul(&matmul(&a, &b).unwrap(), &c).unwrap();
    let right = matmul(&a, &matmul(&b, &c).unwrap()).unwrap();

    assert_eq!(left.shape(), (3, 5));
    for i in 0..3 {
        for j in 0..5 {
            assert_abs_diff_eq!(left.get(i, j), right.get(i, j), epsilon = 1e-10);
        }
    }
}

/// Scaling is linear in the scalar: `(s1 + s2) * M == s1*M + s2*M`,
/// cell-wise.
#[test]
fn scale_is_linear_in_the_scalar() {
    let mut rng = rand::thread_rng();
    let m = DenseMat::random_with(&mut rng, 3, 3, -10.0, 10.0).unwrap();
    let (s1, s2) = (rng.gen_range(-4.0..4.0), rng.gen_range(-4.0..4.0));

    let combined = scale(s1 + s2, &m);
    let split1 = scale(s1, &m);
    let split2 = scale(s2, &m);
    for i in 0..3 {
        for j in 0..3 {
            assert_abs_diff_eq!(
                combined.get(i, j),
                split1.get(i, j) + split2.get(i, j),
                epsilon = 1e-12
            );
        }
    }
}

/// Integer element kinds survive Hadamard, Kronecker, and scaling, while
/// general multiplication always promotes to float.
#[test]
fn element_kind_rules() {
    let a = DenseMat::from_rows(vec![vec![2i64, 3], vec![5, 7]]).unwrap();
    let b = DenseMat::from_rows(vec![vec![1i64, 0], vec![0, 1]]).unwrap();

    let had: DenseMat<i64> = hadamard(&a, &b).unwrap();
    assert_eq!(had.as_slice(), &[2, 0, 0, 7]);

    let kron: DenseMat<i64> = kronecker(&a, &b);
    assert_eq!(kron.shape(), (4, 4));

    let scaled: DenseMat<i64> = scale(-1, &a);
    assert_eq!(scaled.get(1, 1), -7);

    let product: DenseMat<f64> = matmul(&a, &b).unwrap();
    assert_eq!(product.get(0, 0), 2.0);
}
