//! Exact rational matrix algebra walkthrough.
//!
//! Builds a few small matrices, reduces them while printing every
//! recorded row operation, and checks the derived operations.
//!
//! Run with: cargo run --example demo

use ratmat::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let a = Matrix::from_integer_rows(&[&[7, 4, -2], &[3, 8, 6], &[10, 12, 5]])?;
    println!("A =\n{a}");
    println!("det(A) = {}", a.det()?);

    let inv = a.inverse()?;
    println!("inv(A) =\n{inv}");
    println!("A * inv(A) =\n{}", a.dot(&inv)?);

    let singular = Matrix::from_integer_rows(&[&[2, 2, -2], &[-2, 1, -7], &[-2, -1, -1]])?;
    println!("B =\n{singular}");
    println!("det(B) = {}", singular.det()?);
    match singular.inverse() {
        Ok(_) => println!("B is invertible"),
        Err(e) => println!("inv(B) failed: {e}"),
    }

    let wide = Matrix::from_integer_rows(&[
        &[0, 0, -2, 0, 7, 12],
        &[2, 4, -10, 6, 12, 28],
        &[2, 4, -5, 6, -5, -1],
    ])?;
    println!("C =\n{wide}");

    println!("reducing C step by step:");
    let run = wide.gauss_jordan_observed(&mut |op, working| {
        println!("{op}");
        println!("{working}");
    });
    println!("rank(C) = {}", run.rank());
    println!("rref(C) =\n{}", run.matrix());

    Ok(())
}
