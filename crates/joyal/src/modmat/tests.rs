use proptest::prelude::*;

use nalgebra::{DMatrix, DVector};

use super::*;
use crate::sample::{self_map, ReplayToken, SampleCfg};

fn m2(entries: [i64; 4]) -> DMatrix<i64> {
    DMatrix::from_row_slice(2, 2, &entries)
}

#[test]
fn determinant_small_matrices() {
    assert_eq!(determinant(&m2([1, 2, 3, 4])), -2);
    assert_eq!(
        determinant(&DMatrix::from_row_slice(
            3,
            3,
            &[2, 0, 1, 1, 3, 2, 0, 1, 4]
        )),
        21
    );
    // Upper triangular: product of the diagonal.
    assert_eq!(
        determinant(&DMatrix::from_row_slice(
            3,
            3,
            &[1, 2, 3, 0, 1, 4, 0, 0, 1]
        )),
        1
    );
    assert_eq!(determinant(&DMatrix::<i64>::zeros(0, 0)), 1);
    assert_eq!(determinant(&DMatrix::from_row_slice(1, 1, &[-7])), -7);
}

#[test]
fn determinant_zero_pivot_and_singular() {
    // Leading zero forces a row swap, flipping the sign.
    assert_eq!(determinant(&m2([0, 1, 1, 0])), -1);
    assert_eq!(determinant(&m2([1, 2, 2, 4])), 0);
    // Whole first column zero: no pivot available.
    assert_eq!(determinant(&m2([0, 1, 0, 2])), 0);
}

#[test]
fn extended_gcd_bezout_identity() {
    for (a, b) in [(240i64, 46i64), (17, 30), (0, 5), (12, 0), (1, 1)] {
        let (g, x, y) = extended_gcd(a, b);
        assert_eq!(a * x + b * y, g);
    }
    assert_eq!(extended_gcd(240, 46).0, 2);
    assert_eq!(gcd(30, 12), 6);
    assert_eq!(gcd(-30, 12), 6);
}

#[test]
fn modular_inverse_units_and_non_units() {
    assert_eq!(modular_inverse(7, 30), Some(13));
    assert_eq!(modular_inverse(29, 30), Some(29));
    assert_eq!(modular_inverse(37, 30), Some(13));
    assert_eq!(modular_inverse(6, 30), None);
    assert_eq!(modular_inverse(0, 30), None);
}

#[test]
fn minor_removes_row_and_column() {
    let m = DMatrix::from_row_slice(3, 3, &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(minor(&m, 1, 0), m2([2, 3, 8, 9]));
    assert_eq!(minor(&m, 0, 2), m2([4, 5, 7, 8]));
}

#[test]
fn adjugate_of_two_by_two() {
    // adj([[a, b], [c, d]]) = [[d, -b], [-c, a]], entries reduced mod 30.
    let adj = adjugate_mod(&m2([3, 5, 2, 7]), 30);
    assert_eq!(adj, m2([7, 25, 28, 3]));
}

#[test]
fn inverse_mod_composes_to_identity() {
    let m = m2([3, 5, 2, 7]); // det 11, a unit mod 30
    let inv = inverse_mod(&m, 30).unwrap();
    let product = (&m * &inv).map(|x| x.rem_euclid(30));
    assert_eq!(product, DMatrix::<i64>::identity(2, 2));

    let singular = m2([2, 4, 1, 2]);
    assert!(matches!(
        inverse_mod(&singular, 30),
        Err(MatrixError::NotInvertible { .. })
    ));
}

#[test]
fn matvec_reduces_components() {
    let m = m2([1, 2, 3, 4]);
    let v = DVector::from_column_slice(&[10, 20]);
    assert_eq!(
        matvec_mod(&m, &v, 30),
        DVector::from_column_slice(&[20, 20])
    );
}

#[test]
fn derive_key_fallback_for_constant_function() {
    // Constant maps give identical candidate rows, so the diagonal
    // fallback engages: 3*(0+1)+1 = 4 steps up to the unit 7.
    let f = crate::func::SelfMap::from_values(vec![0, 0]).unwrap();
    let key = derive_key(&f, 30);
    assert_eq!(key, m2([7, 0, 0, 7]));
}

#[test]
fn derive_key_reference_function_round_trips() {
    let f =
        crate::func::SelfMap::from_values(vec![0, 1, 2, 5, 5, 5, 6, 7, 8]).unwrap();
    let key = derive_key(&f, 30);
    let det = determinant(&key).rem_euclid(30) as i64;
    assert_eq!(gcd(det, 30), 1);
    let inv = inverse_mod(&key, 30).unwrap();
    let product = (&key * &inv).map(|x| x.rem_euclid(30));
    assert_eq!(product, DMatrix::<i64>::identity(9, 9));
}

proptest! {
    #[test]
    fn derived_keys_are_always_invertible(n in 1usize..9, seed in any::<u64>()) {
        let f = self_map(&SampleCfg { n }, ReplayToken { seed, index: 2 }).unwrap();
        let key = derive_key(&f, 30);
        let det = determinant(&key).rem_euclid(30) as i64;
        prop_assert_eq!(gcd(det, 30), 1);
        let inv = inverse_mod(&key, 30).unwrap();
        let product = (&key * &inv).map(|x| x.rem_euclid(30));
        prop_assert_eq!(product, DMatrix::<i64>::identity(n, n));
    }
}
