//! Deterministic key-matrix derivation from a total self-map.

use nalgebra::DMatrix;

use crate::func::SelfMap;

use super::{determinant, gcd};

/// Derive an invertible `n x n` key matrix mod `modulus` from `f`.
///
/// Candidate entry `[i][j] = (f(i)*(j+1) + (f(j)+1)) mod modulus`, so the
/// key depends on the whole function rather than a diagonal of it. When
/// the candidate fails the exact invertibility test, fall back to a
/// diagonal matrix: start each entry at `(3*(f(i)+1) + 1) mod modulus` and
/// step upward (wrapping) until coprime with the modulus. Units exist for
/// every modulus, so the scan terminates and derivation never fails.
pub fn derive_key(f: &SelfMap, modulus: i64) -> DMatrix<i64> {
    let n = f.n();
    let candidate = DMatrix::from_fn(n, n, |i, j| {
        let fi = f[i] as i64;
        let fj = f[j] as i64;
        (fi * (j as i64 + 1) + (fj + 1)).rem_euclid(modulus)
    });
    let det = determinant(&candidate).rem_euclid(i128::from(modulus)) as i64;
    if gcd(det, modulus) == 1 {
        return candidate;
    }

    let mut key = DMatrix::<i64>::identity(n, n);
    for i in 0..n {
        let mut v = (3 * (f[i] as i64 + 1) + 1).rem_euclid(modulus);
        while gcd(v, modulus) != 1 {
            v = (v + 1).rem_euclid(modulus);
        }
        key[(i, i)] = v;
    }
    key
}
