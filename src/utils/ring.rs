// Copyright © 2024 Niklas Siemer
//
// This file is part of fe-rs.
//
// fe-rs is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains helpers to treat length-`n` coefficient vectors as
//! elements of the ring `R_q = Z_q[x]/(x^n + 1)` and to multiply them there.
//! The product equals the schoolbook negacyclic convolution
//! `c_k = Σ_{i+j ≡ k mod n} ± a_i * b_j` reduced mod `q`, with a sign flip
//! for every wrap past degree `n`.

use qfall_math::{
    error::MathError,
    integer::{PolyOverZ, Z},
    integer_mod_q::{MatZq, Modulus, ModulusPolynomialRingZq, PolyOverZq, PolynomialRingZq},
    traits::{GetCoefficient, GetEntry, GetNumColumns, GetNumRows, SetCoefficient, SetEntry},
};
use std::fmt::Display;

/// Outputs a [`ModulusPolynomialRingZq`] of the form `X^n + 1 mod modulus`.
///
/// Parameters:
/// - `n`: specifies the degree of the modulus polynomial
/// - `modulus`: specifies the modulus of the modulus polynomial
///
/// Returns a [`ModulusPolynomialRingZq`] of the form `X^n + 1 mod modulus` or
/// a [`MathError`] if `n < 0` or `n` does not fit into an [`i64`].
///
/// # Examples
/// ```
/// use fe_rs::utils::ring::new_anticyclic;
///
/// let poly_mod = new_anticyclic(8, 17);
/// ```
///
/// # Panics ...
/// - if the `modulus` is not larger than `1`.
pub fn new_anticyclic(
    n: impl TryInto<i64> + Display,
    modulus: impl Into<Modulus>,
) -> Result<ModulusPolynomialRingZq, MathError> {
    let mut poly = PolyOverZq::from((1, modulus));
    poly.set_coeff(n, 1)?;
    Ok(ModulusPolynomialRingZq::from(&poly))
}

/// Collects the entries of a row or column vector as the coefficients of an
/// integer polynomial, lowest degree first.
///
/// Parameters:
/// - `vec`: specifies the coefficient vector, a `1 x n` or `n x 1` [`MatZq`]
///
/// Returns a [`PolyOverZ`] with the canonical representatives of `vec` as
/// coefficients.
///
/// # Panics ...
/// - if `vec` is neither a row nor a column vector.
pub(crate) fn poly_from_vec(vec: &MatZq) -> PolyOverZ {
    assert!(
        vec.get_num_rows() == 1 || vec.get_num_columns() == 1,
        "The coefficient vector must be a row or column vector."
    );

    let mut poly = PolyOverZ::default();
    if vec.get_num_rows() == 1 {
        for i in 0..vec.get_num_columns() {
            let entry: Z = vec.get_entry(0, i).unwrap();
            poly.set_coeff(i, &entry).unwrap();
        }
    } else {
        for i in 0..vec.get_num_rows() {
            let entry: Z = vec.get_entry(i, 0).unwrap();
            poly.set_coeff(i, &entry).unwrap();
        }
    }
    poly
}

/// Multiplies two coefficient vectors as elements of
/// `R_q = Z_q[x]/(x^n + 1)`, i.e. computes their negacyclic convolution
/// mod `q`. The output inherits the orientation and modulus of `a`.
///
/// Parameters:
/// - `a`: specifies the left factor, a `1 x n` or `n x 1` [`MatZq`]
/// - `b`: specifies the right factor, a `1 x n` or `n x 1` [`MatZq`]
/// - `modulus`: specifies the ring modulus `X^n + 1 mod q`
///
/// Returns a [`MatZq`] of the same shape as `a` holding the product's
/// coefficients.
///
/// # Examples
/// ```
/// use fe_rs::utils::ring::{mul_in_ring, new_anticyclic};
/// use qfall_math::integer_mod_q::MatZq;
/// use std::str::FromStr;
///
/// let modulus = new_anticyclic(4, 17).unwrap();
/// let a = MatZq::from_str("[[1, 0, 0, 1]] mod 17").unwrap();
/// let b = MatZq::from_str("[[0, 1, 0, 0]] mod 17").unwrap();
///
/// let c = mul_in_ring(&a, &b, &modulus);
/// assert_eq!(MatZq::from_str("[[16, 1, 0, 0]] mod 17").unwrap(), c);
/// ```
///
/// # Panics ...
/// - if `a` or `b` is neither a row nor a column vector.
pub fn mul_in_ring(a: &MatZq, b: &MatZq, modulus: &ModulusPolynomialRingZq) -> MatZq {
    let left = PolynomialRingZq::from((&poly_from_vec(a), modulus));
    let right = PolynomialRingZq::from((&poly_from_vec(b), modulus));

    vec_from_ring(&(&left * &right), a)
}

/// Writes the coefficients of a ring element back into a vector of the same
/// shape and modulus as `shape`. Coefficients above the element's degree
/// remain zero.
fn vec_from_ring(poly: &PolynomialRingZq, shape: &MatZq) -> MatZq {
    let mut out = MatZq::new(shape.get_num_rows(), shape.get_num_columns(), shape.get_mod());
    for i in 0..=poly.get_degree() {
        let coeff: Z = poly.get_coeff(i).unwrap();
        if shape.get_num_rows() == 1 {
            out.set_entry(0, i, &coeff).unwrap();
        } else {
            out.set_entry(i, 0, &coeff).unwrap();
        }
    }
    out
}

#[cfg(test)]
mod test_new_anticyclic {
    use super::new_anticyclic;
    use qfall_math::{integer::Z, integer_mod_q::PolyOverZq, traits::GetCoefficient};

    /// Ensure that the modulus polynomial is `X^n + 1` with the requested
    /// degree and modulus.
    #[test]
    fn correct_polynomial() {
        for degree in [1, 4, 16, 64] {
            let poly_mod = new_anticyclic(degree, 17).unwrap();
            let poly_zq = PolyOverZq::from(&poly_mod);

            assert_eq!(degree, poly_mod.get_degree());
            assert_eq!(Z::from(17), poly_mod.get_q());
            assert_eq!(Z::ONE, poly_zq.get_coeff(degree).unwrap());
            assert_eq!(Z::ONE, poly_zq.get_coeff(0).unwrap());
        }
    }

    /// Ensure that an invalid degree results in an error.
    #[test]
    fn invalid_degree() {
        assert!(new_anticyclic(-1, 17).is_err());
    }
}

#[cfg(test)]
mod test_mul_in_ring {
    use super::{mul_in_ring, new_anticyclic};
    use qfall_math::integer_mod_q::MatZq;
    use std::str::FromStr;

    /// Ensure that products wrapping past degree `n` re-enter negated,
    /// e.g. `(x^3 + 1) * x = x + x^4 = x - 1 mod x^4 + 1`.
    #[test]
    fn wrap_around_sign_flip() {
        let modulus = new_anticyclic(4, 17).unwrap();
        let a = MatZq::from_str("[[1, 0, 0, 1]] mod 17").unwrap();
        let b = MatZq::from_str("[[0, 1, 0, 0]] mod 17").unwrap();

        let c = mul_in_ring(&a, &b, &modulus);

        assert_eq!(MatZq::from_str("[[16, 1, 0, 0]] mod 17").unwrap(), c);
    }

    /// Ensure that the product matches a schoolbook negacyclic convolution
    /// on a dense example: (1 + 2x + 3x² + 4x³)² mod (x⁴ + 1, 101).
    #[test]
    fn matches_schoolbook() {
        let modulus = new_anticyclic(4, 101).unwrap();
        let a = MatZq::from_str("[[1, 2, 3, 4]] mod 101").unwrap();

        let c = mul_in_ring(&a, &a, &modulus);

        // schoolbook: c_0 = 1 - 25 = -24, c_1 = 4 - 24 = -20,
        // c_2 = 10 - 16 = -6, c_3 = 20
        assert_eq!(
            MatZq::from_str("[[77, 81, 95, 20]] mod 101").unwrap(),
            c
        );
    }

    /// Ensure that multiplying with the identity `1` is the identity map and
    /// that column vectors keep their orientation.
    #[test]
    fn one_is_neutral() {
        use qfall_math::traits::{GetNumColumns, GetNumRows};

        let modulus = new_anticyclic(4, 17).unwrap();
        let a = MatZq::from_str("[[3],[1],[4],[2]] mod 17").unwrap();
        let one = MatZq::from_str("[[1],[0],[0],[0]] mod 17").unwrap();

        let c = mul_in_ring(&a, &one, &modulus);

        assert_eq!(4, c.get_num_rows());
        assert_eq!(1, c.get_num_columns());
        assert_eq!(a, c);
    }

    /// Ensure that the product of vectors with different orientations is
    /// well-defined and follows the left factor.
    #[test]
    fn mixed_orientation() {
        let modulus = new_anticyclic(2, 17).unwrap();
        let row = MatZq::from_str("[[1, 1]] mod 17").unwrap();
        let col = MatZq::from_str("[[1],[1]] mod 17").unwrap();

        // (1 + x)² = 1 + 2x + x² = 2x mod x² + 1
        let c = mul_in_ring(&row, &col, &modulus);

        assert_eq!(MatZq::from_str("[[0, 2]] mod 17").unwrap(), c);
    }
}
