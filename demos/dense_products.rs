use matprod::{DenseMat, MatError, hadamard, kronecker, matmul, scale};

fn main() -> Result<(), MatError> {
    let a = DenseMat::from_rows(vec![vec![1, 2], vec![2, -1]])?;
    let b = DenseMat::from_rows(vec![vec![1, 2], vec![3, 4]])?;

    println!("a (x) b = {:?}", kronecker(&a, &b));
    println!("a (.) b = {:?}", hadamard(&a, &b)?);
    println!("3 * a   = {:?}", scale(3, &a));

    // The whole multiplication family goes through one routine; vectors are
    // one-row or one-column matrices, and results are always float-valued.
    let m = DenseMat::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]])?;
    let v = DenseMat::column_vector(&[1, 2])?;
    println!("m * v   = {:?}", matmul(&m, &v)?);

    let r = DenseMat::row_vector(&[1, 2, 3])?;
    let c = DenseMat::column_vector(&[1, 2, 3])?;
    println!("r * c   = {:?}", matmul(&r, &c)?);

    // Shape failures are ordinary recoverable errors.
    match matmul(&m, &m) {
        Ok(_) => unreachable!(),
        Err(err) => println!("3x2 * 3x2 fails: {err}"),
    }

    let noise = DenseMat::random(2, 2, -1.0, 1.0)?;
    println!("noise   = {:?}", noise);

    Ok(())
}
