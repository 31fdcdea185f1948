//! Exact modular linear algebra over integer matrices.
//!
//! Purpose
//! - Provide the determinant, adjugate and modular inverse needed to key
//!   and unkey the block cipher, with every invertibility decision made on
//!   an exact integer determinant. There is no floating-point path.
//!
//! Model
//! - Matrices are `nalgebra::DMatrix<i64>` with entries already reduced
//!   modulo the working modulus. The Bareiss elimination accumulates in
//!   `i128`; by Hadamard's bound that stays exact up to dimension 18 for
//!   entries below 30, comfortably past the block sizes in play.

mod key;

pub use key::derive_key;

use std::fmt;

use nalgebra::{DMatrix, DVector};

/// Errors surfaced by the modular inversion path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// The determinant shares a factor with the modulus.
    NotInvertible { det: i64, modulus: i64 },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::NotInvertible { det, modulus } => write!(
                f,
                "matrix not invertible: determinant {det} shares a factor with modulus {modulus}"
            ),
        }
    }
}

impl std::error::Error for MatrixError {}

/// Fraction-free (Bareiss) determinant.
///
/// At step `k` each remaining entry becomes
/// `(a[i][j] * pivot - a[i][k] * a[k][j]) / prev_pivot`, and the division
/// is exact by construction. A zero pivot triggers a sign-flipping row
/// swap; a fully zero column yields determinant 0.
pub fn determinant(m: &DMatrix<i64>) -> i128 {
    debug_assert_eq!(m.nrows(), m.ncols());
    let n = m.nrows();
    if n == 0 {
        return 1;
    }
    let mut a: Vec<Vec<i128>> = (0..n)
        .map(|i| (0..n).map(|j| i128::from(m[(i, j)])).collect())
        .collect();
    let mut prev: i128 = 1;
    let mut sign: i128 = 1;
    for k in 0..n - 1 {
        if a[k][k] == 0 {
            match (k + 1..n).find(|&r| a[r][k] != 0) {
                Some(r) => {
                    a.swap(k, r);
                    sign = -sign;
                }
                None => return 0,
            }
        }
        let pivot = a[k][k];
        for i in k + 1..n {
            for j in k + 1..n {
                a[i][j] = (a[i][j] * pivot - a[i][k] * a[k][j]) / prev;
            }
        }
        prev = pivot;
    }
    sign * a[n - 1][n - 1]
}

/// Extended Euclid: returns `(g, x, y)` with `a*x + b*y = g`.
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_s, mut s) = (1i64, 0i64);
    let (mut old_t, mut t) = (0i64, 1i64);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
        (old_t, t) = (t, old_t - q * t);
    }
    (old_r, old_s, old_t)
}

pub fn gcd(a: i64, b: i64) -> i64 {
    extended_gcd(a.abs(), b.abs()).0
}

/// `x` with `a*x = 1 (mod modulus)`, or `None` when `gcd(a, modulus) != 1`.
pub fn modular_inverse(a: i64, modulus: i64) -> Option<i64> {
    let a = a.rem_euclid(modulus);
    let (g, x, _) = extended_gcd(a, modulus);
    if g != 1 {
        return None;
    }
    Some(x.rem_euclid(modulus))
}

/// `m` with `row` and `col` removed.
pub fn minor(m: &DMatrix<i64>, row: usize, col: usize) -> DMatrix<i64> {
    m.clone().remove_row(row).remove_column(col)
}

/// Transpose of the cofactor matrix, entries reduced to `[0, modulus)`.
pub fn adjugate_mod(m: &DMatrix<i64>, modulus: i64) -> DMatrix<i64> {
    let n = m.nrows();
    let mut adj = DMatrix::<i64>::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            let det = determinant(&minor(m, i, j));
            let cofactor = if (i + j) % 2 == 0 { det } else { -det };
            adj[(j, i)] = cofactor.rem_euclid(i128::from(modulus)) as i64;
        }
    }
    adj
}

/// Modular matrix inverse via adjugate and determinant inverse.
pub fn inverse_mod(m: &DMatrix<i64>, modulus: i64) -> Result<DMatrix<i64>, MatrixError> {
    let det = determinant(m).rem_euclid(i128::from(modulus)) as i64;
    match modular_inverse(det, modulus) {
        None => Err(MatrixError::NotInvertible { det, modulus }),
        Some(det_inv) => {
            let adj = adjugate_mod(m, modulus);
            Ok(adj.map(|entry| (entry * det_inv).rem_euclid(modulus)))
        }
    }
}

/// Matrix-vector product with every component reduced to `[0, modulus)`.
pub fn matvec_mod(m: &DMatrix<i64>, v: &DVector<i64>, modulus: i64) -> DVector<i64> {
    (m * v).map(|entry| entry.rem_euclid(modulus))
}

#[cfg(test)]
mod tests;
