// Copyright © 2024 Niklas Siemer
//
// This file is part of fe-rs.
//
// fe-rs is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains an implementation of the inner-product functional
//! encryption scheme of [\[2\]](<../../index.html#:~:text=[2]>) over the
//! polynomial ring `R_q = Z_q[x]/(x^n + 1)`.
//!
//! A ciphertext encrypts an `l x n` integer matrix `X` row-wise; a
//! functional key derived for a query vector `y` lets the decryptor learn
//! exactly the inner products `X^t * y` over the integers and nothing else
//! about `X`. Parameters are selected automatically from the requested
//! bit-security: the ring degree grows until a primal BKZ attack estimate
//! deems the instance safe.

use crate::error::CryptoError;
use crate::sample::distribution::discrete_gauss::ConvolutionSampler;
use crate::utils::ring::{mul_in_ring, new_anticyclic};
use qfall_math::{
    integer::{MatZ, Z},
    integer_mod_q::{MatZq, Modulus, ModulusPolynomialRingZq},
    rational::Q,
    traits::{Concatenate, GetEntry, GetNumColumns, GetNumRows, Pow, SetEntry},
};
use serde::{Deserialize, Serialize};
use std::f64::consts::{E, PI};
use std::str::FromStr;

/// The secret key: an `l x n` integer matrix whose rows are polynomials with
/// coefficients sampled from `D_{Z,σ_1}`.
pub type RingLweSecretKey = MatZ;
/// The public key: an `l x n` matrix over `Z_q` with rows
/// `(a * S_i + E_i) mod q` computed in the ring.
pub type RingLwePublicKey = MatZq;
/// A functional key for a query `y`: the length-`n` vector `(S^t * y) mod q`.
pub type RingLweDerivedKey = MatZq;
/// A ciphertext: an `(l+1) x n` matrix over `Z_q`; the first `l` rows carry
/// the masked message, the last row the common randomness.
pub type RingLweCiphertext = MatZq;

/// The public parameters of a [`RingLwe`] instance.
///
/// Attributes:
/// - `l`: the length of the data vectors for the inner product
/// - `n`: the ring degree, a power of two
/// - `sigma1`, `sigma2`, `sigma3`: the widths of the discrete Gaussian
///   distributions for key, randomness, and noise sampling
/// - `bound_x`: the coordinate bound for plaintext matrices
/// - `bound_y`: the coordinate bound for query vectors
/// - `p`: the plaintext modulus `2 * l * bound_x * bound_y`
/// - `q`: the ciphertext modulus
/// - `a`: the common random polynomial, a uniform vector in `Z_q^n`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingLweParams {
    pub l: i64,
    pub n: i64,
    pub sigma1: Q,
    pub sigma2: Q,
    pub sigma3: Q,
    pub bound_x: Z,
    pub bound_y: Z,
    pub p: Z,
    pub q: Modulus,
    pub a: MatZq,
}

/// An instance of the ring-LWE inner-product functional encryption scheme.
///
/// # Examples
/// ```
/// use fe_rs::construction::inner_product::RingLwe;
/// use qfall_math::integer::{MatZ, Z};
/// use qfall_math::traits::{GetEntry, SetEntry};
///
/// let scheme = RingLwe::new(8, 2, 100, 100).unwrap();
/// let sk = scheme.generate_secret_key();
/// let pk = scheme.generate_public_key(&sk).unwrap();
///
/// // encrypt X with X[0][0] = 7, X[1][0] = -3 and query with y = (2, 5)
/// let mut x = MatZ::new(2, scheme.params().n);
/// x.set_entry(0, 0, 7).unwrap();
/// x.set_entry(1, 0, -3).unwrap();
/// let mut y = MatZ::new(2, 1);
/// y.set_entry(0, 0, 2).unwrap();
/// y.set_entry(1, 0, 5).unwrap();
///
/// let cipher = scheme.encrypt(&x, &pk).unwrap();
/// let sk_y = scheme.derive_key(&y, &sk).unwrap();
/// let products = scheme.decrypt(&cipher, &sk_y, &y).unwrap();
///
/// // the first coordinate holds 7 * 2 - 3 * 5 = -1
/// let entry: Z = products.get_entry(0, 0).unwrap();
/// assert_eq!(Z::from(-1), entry);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingLwe {
    params: RingLweParams,
    ring_mod: ModulusPolynomialRingZq,
}

impl RingLwe {
    /// Searches public parameters providing `sec` bits of security for
    /// vector length `l` and coordinate bounds `bound_x`, `bound_y`, and
    /// instantiates the scheme with them.
    ///
    /// The ring degree is tried along `n = 2^6, ..., 2^19`. For each
    /// candidate the Gaussian widths and the modulus `q` are derived from
    /// the correctness analysis, and a primal BKZ attack estimate is run:
    /// for every block size `b` in `[50, sec/0.265]` and every sub-lattice
    /// dimension `m` in `[max(1, b-n), 3n)` the predicted short-vector
    /// length must stay above the Gaussian heuristic. The first safe `n`
    /// wins.
    ///
    /// Parameters:
    /// - `sec`: specifies the requested bit-security
    /// - `l`: specifies the length of the data vectors
    /// - `bound_x`: specifies the coordinate bound for plaintext matrices
    /// - `bound_y`: specifies the coordinate bound for query vectors
    ///
    /// Returns a [`RingLwe`] instance or a [`CryptoError`] of type
    /// [`ParameterSearchFailure`](CryptoError::ParameterSearchFailure) if
    /// the inputs are degenerate or no ring degree in the search range is
    /// safe.
    ///
    /// # Examples
    /// ```
    /// use fe_rs::construction::inner_product::RingLwe;
    ///
    /// let scheme = RingLwe::new(8, 4, 1000, 1000).unwrap();
    /// assert_eq!(64, scheme.params().n);
    /// ```
    pub fn new(
        sec: i64,
        l: i64,
        bound_x: impl Into<Z>,
        bound_y: impl Into<Z>,
    ) -> Result<Self, CryptoError> {
        let bound_x: Z = bound_x.into();
        let bound_y: Z = bound_y.into();
        if sec < 1 || l < 1 || bound_x < Z::ONE || bound_y < Z::ONE {
            return Err(CryptoError::ParameterSearchFailure(String::from(
                "The security parameter, vector length, and bounds must be positive.",
            )));
        }

        let p = Z::from(2 * l) * &bound_x * &bound_y;

        let kappa = Q::from(sec);
        let kappa_sqrt = kappa.sqrt();
        let sigma1 = Q::from(4 * l).sqrt() * Q::from(&bound_x);

        for pow in 6..20 {
            let n: i64 = 1 << pow;

            let sigma2 = Q::from(Z::from(2 * (l + 2)) * Z::from(n).pow(2).unwrap()).sqrt()
                * &sigma1
                * &kappa_sqrt;
            let sigma3 = Q::from(2).sqrt() * &sigma2;

            let q_f = (Q::from(2 * n) * &kappa * &sigma1 * &sigma2 + &kappa_sqrt * &sigma3)
                * Q::from(&bound_y)
                * Q::from(2 * l);
            let q = q_f.floor() * &p;

            if Self::attack_estimate_safe(sec, n, &q) {
                let q = Modulus::try_from(&q).unwrap();
                let a = MatZq::sample_uniform(1, n, &q);
                let ring_mod = new_anticyclic(n, &q).unwrap();

                return Ok(Self {
                    params: RingLweParams {
                        l,
                        n,
                        sigma1,
                        sigma2,
                        sigma3,
                        bound_x,
                        bound_y,
                        p,
                        q,
                        a,
                    },
                    ring_mod,
                });
            }
        }

        Err(CryptoError::ParameterSearchFailure(format!(
            "No safe ring degree up to 2^19 exists for sec = {sec}, l = {l}."
        )))
    }

    /// Runs the primal BKZ cost model for noise width `σ = 1`: the instance
    /// counts as broken if for some block size `b` and sub-lattice dimension
    /// `m` the projected short-vector length `δ^{2b-d-1} * q^{m/d}` with
    /// `d = n + m` exceeds the Gaussian heuristic `σ * sqrt(b)`.
    fn attack_estimate_safe(sec: i64, n: i64, q: &Z) -> bool {
        let q_f64 = f64::from_str(&q.to_string()).unwrap();
        let max_block_size = sec as f64 / 0.265;

        let mut b = 50.0;
        while b <= max_block_size {
            let delta =
                ((PI * b).powf(1.0 / b) * b / (2.0 * PI * E)).powf(1.0 / (2.0 * b - 2.0));
            let left = b.sqrt();

            let m_start = 1.0f64.max(b - n as f64) as i64;
            for m in m_start..3 * n {
                let d = (n + m) as f64;
                let right = delta.powf(2.0 * b - d - 1.0) * q_f64.powf(m as f64 / d);
                if left < right {
                    return false;
                }
            }
            b += 1.0;
        }
        true
    }

    /// Returns the public parameters of this instance.
    pub fn params(&self) -> &RingLweParams {
        &self.params
    }

    /// Generates a secret key: an `l x n` matrix with entries sampled from
    /// the discrete Gaussian distribution of width `σ_1`.
    ///
    /// # Examples
    /// ```
    /// use fe_rs::construction::inner_product::RingLwe;
    ///
    /// let scheme = RingLwe::new(8, 2, 100, 100).unwrap();
    /// let sk = scheme.generate_secret_key();
    /// ```
    pub fn generate_secret_key(&self) -> RingLweSecretKey {
        let sampler = ConvolutionSampler::new(&self.params.sigma1);
        sampler.sample_mat(self.params.l, self.params.n, &mut rand::thread_rng())
    }

    /// Generates the public key matching a secret key `sk`: row `i` is
    /// `(a * sk_i + e_i) mod q` with multiplication in the ring and noise
    /// `e_i` from the same distribution as the secret key.
    ///
    /// Parameters:
    /// - `sk`: specifies the secret key, an `l x n` integer matrix
    ///
    /// Returns the public key or a [`CryptoError`] of type
    /// [`MalformedKey`](CryptoError::MalformedKey) if `sk` has the wrong
    /// shape.
    ///
    /// # Examples
    /// ```
    /// use fe_rs::construction::inner_product::RingLwe;
    ///
    /// let scheme = RingLwe::new(8, 2, 100, 100).unwrap();
    /// let sk = scheme.generate_secret_key();
    /// let pk = scheme.generate_public_key(&sk).unwrap();
    /// ```
    pub fn generate_public_key(
        &self,
        sk: &RingLweSecretKey,
    ) -> Result<RingLwePublicKey, CryptoError> {
        self.check_dims(sk, self.params.l, self.params.n)
            .map_err(|_| {
                CryptoError::MalformedKey(String::from(
                    "The secret key does not match the scheme dimensions.",
                ))
            })?;

        let mut rng = rand::thread_rng();
        let sampler = ConvolutionSampler::new(&self.params.sigma1);
        let noise = sampler.sample_mat(self.params.l, self.params.n, &mut rng);

        let mut pk: Option<MatZq> = None;
        for i in 0..self.params.l {
            let sk_i = MatZq::from((&sk.get_row(i).unwrap(), &self.params.q));
            let noise_i = MatZq::from((&noise.get_row(i).unwrap(), &self.params.q));
            let row = mul_in_ring(&self.params.a, &sk_i, &self.ring_mod) + noise_i;

            pk = Some(match pk {
                None => row,
                Some(pk) => pk.concat_vertical(&row).unwrap(),
            });
        }
        Ok(pk.unwrap())
    }

    /// Derives a functional key for a query vector `y` as the linear
    /// combination `(sk^t * y) mod q` of the secret key rows.
    ///
    /// Parameters:
    /// - `y`: specifies the query vector, an `l x 1` integer matrix with
    ///   coordinates bounded by `bound_y`
    /// - `sk`: specifies the secret key
    ///
    /// Returns the derived key or a [`CryptoError`] of type
    /// [`BoundExceeded`](CryptoError::BoundExceeded),
    /// [`DimMismatch`](CryptoError::DimMismatch), or
    /// [`MalformedKey`](CryptoError::MalformedKey) if the inputs violate
    /// their contracts.
    ///
    /// # Examples
    /// ```
    /// use fe_rs::construction::inner_product::RingLwe;
    /// use qfall_math::integer::MatZ;
    /// use std::str::FromStr;
    ///
    /// let scheme = RingLwe::new(8, 2, 100, 100).unwrap();
    /// let sk = scheme.generate_secret_key();
    ///
    /// let y = MatZ::from_str("[[2],[5]]").unwrap();
    /// let sk_y = scheme.derive_key(&y, &sk).unwrap();
    /// ```
    pub fn derive_key(
        &self,
        y: &MatZ,
        sk: &RingLweSecretKey,
    ) -> Result<RingLweDerivedKey, CryptoError> {
        self.check_bound(y, &self.params.bound_y)?;
        self.check_dims(y, self.params.l, 1)?;
        self.check_dims(sk, self.params.l, self.params.n)
            .map_err(|_| {
                CryptoError::MalformedKey(String::from(
                    "The secret key does not match the scheme dimensions.",
                ))
            })?;

        let sk_y = sk.transpose() * y;
        Ok(MatZq::from((&sk_y, &self.params.q)))
    }

    /// Encrypts an `l x n` integer matrix `x` row-wise: row `i` of the
    /// ciphertext is `(pk_i * r + e_i + t_i) mod q` with fresh randomness
    /// `r` from `D_{Z,σ_2}^n`, noise from `D_{Z,σ_3}`, and the centered
    /// message `t_i = ⌊x_i * q/p⌋ mod q`; the last row is
    /// `(a * r + e) mod q`.
    ///
    /// Parameters:
    /// - `x`: specifies the plaintext matrix with coordinates bounded by
    ///   `bound_x`
    /// - `pk`: specifies the public key
    ///
    /// Returns the `(l+1) x n` ciphertext or a [`CryptoError`] of type
    /// [`BoundExceeded`](CryptoError::BoundExceeded),
    /// [`DimMismatch`](CryptoError::DimMismatch), or
    /// [`MalformedKey`](CryptoError::MalformedKey) if the inputs violate
    /// their contracts.
    ///
    /// # Examples
    /// ```
    /// use fe_rs::construction::inner_product::RingLwe;
    /// use qfall_math::integer::MatZ;
    ///
    /// let scheme = RingLwe::new(8, 2, 100, 100).unwrap();
    /// let sk = scheme.generate_secret_key();
    /// let pk = scheme.generate_public_key(&sk).unwrap();
    ///
    /// let x = MatZ::new(2, scheme.params().n);
    /// let cipher = scheme.encrypt(&x, &pk).unwrap();
    /// ```
    pub fn encrypt(
        &self,
        x: &MatZ,
        pk: &RingLwePublicKey,
    ) -> Result<RingLweCiphertext, CryptoError> {
        self.check_bound(x, &self.params.bound_x)?;
        self.check_dims(x, self.params.l, self.params.n)?;
        if pk.get_num_rows() != self.params.l || pk.get_num_columns() != self.params.n {
            return Err(CryptoError::MalformedKey(String::from(
                "The public key does not match the scheme dimensions.",
            )));
        }

        let mut rng = rand::thread_rng();
        let sampler_2 = ConvolutionSampler::new(&self.params.sigma2);
        let sampler_3 = ConvolutionSampler::new(&self.params.sigma3);

        let r = MatZq::from((
            &sampler_2.sample_mat(1, self.params.n, &mut rng),
            &self.params.q,
        ));
        let noise = sampler_3.sample_mat(self.params.l, self.params.n, &mut rng);
        let centered = self.center(x);

        let mut cipher: Option<MatZq> = None;
        for i in 0..self.params.l {
            let pk_i = pk.get_row(i).unwrap();
            let noise_i = MatZq::from((&noise.get_row(i).unwrap(), &self.params.q));
            let centered_i = centered.get_row(i).unwrap();
            let row = mul_in_ring(&pk_i, &r, &self.ring_mod) + noise_i + centered_i;

            cipher = Some(match cipher {
                None => row,
                Some(cipher) => cipher.concat_vertical(&row).unwrap(),
            });
        }

        // last row: the common randomness a * r + e
        let e = MatZq::from((
            &sampler_2.sample_mat(1, self.params.n, &mut rng),
            &self.params.q,
        ));
        let last = mul_in_ring(&self.params.a, &r, &self.ring_mod) + e;

        Ok(cipher.unwrap().concat_vertical(&last).unwrap())
    }

    /// Decrypts the inner products of the encrypted matrix with a query
    /// vector `y`: computes `(c_0^t * y - c_1 * sk_y) mod q` with the second
    /// product in the ring, center-lifts every coordinate into
    /// `(-q/2, q/2]`, and rounds `⌊(d_i * p + ⌊q/2⌋)/q⌋`.
    ///
    /// Parameters:
    /// - `cipher`: specifies the `(l+1) x n` ciphertext
    /// - `sk_y`: specifies the functional key derived for `y`
    /// - `y`: specifies the query vector with coordinates bounded by
    ///   `bound_y`
    ///
    /// Returns the length-`n` integer vector `x^t * y` or a [`CryptoError`]
    /// of type [`BoundExceeded`](CryptoError::BoundExceeded),
    /// [`DimMismatch`](CryptoError::DimMismatch),
    /// [`MalformedKey`](CryptoError::MalformedKey), or
    /// [`MalformedCipher`](CryptoError::MalformedCipher) if the inputs
    /// violate their contracts.
    ///
    /// # Examples
    /// ```
    /// use fe_rs::construction::inner_product::RingLwe;
    /// use qfall_math::integer::MatZ;
    /// use std::str::FromStr;
    ///
    /// let scheme = RingLwe::new(8, 2, 100, 100).unwrap();
    /// let sk = scheme.generate_secret_key();
    /// let pk = scheme.generate_public_key(&sk).unwrap();
    /// let x = MatZ::new(2, scheme.params().n);
    /// let y = MatZ::from_str("[[2],[5]]").unwrap();
    ///
    /// let cipher = scheme.encrypt(&x, &pk).unwrap();
    /// let sk_y = scheme.derive_key(&y, &sk).unwrap();
    /// let products = scheme.decrypt(&cipher, &sk_y, &y).unwrap();
    /// ```
    pub fn decrypt(
        &self,
        cipher: &RingLweCiphertext,
        sk_y: &RingLweDerivedKey,
        y: &MatZ,
    ) -> Result<MatZ, CryptoError> {
        self.check_bound(y, &self.params.bound_y)?;
        self.check_dims(y, self.params.l, 1)?;
        if sk_y.get_num_rows() != self.params.n || sk_y.get_num_columns() != 1 {
            return Err(CryptoError::MalformedKey(String::from(
                "The derived key must be a column vector of the ring degree.",
            )));
        }
        if cipher.get_num_rows() != self.params.l + 1
            || cipher.get_num_columns() != self.params.n
        {
            return Err(CryptoError::MalformedCipher(String::from(
                "The ciphertext does not match the scheme dimensions.",
            )));
        }

        // first block transposed times y, minus the ring product c_1 * sk_y
        let c_0 = cipher
            .get_submatrix(0, self.params.l - 1, 0, self.params.n - 1)
            .unwrap();
        let c_1 = cipher.get_row(self.params.l).unwrap();

        let products = c_0.transpose() * MatZq::from((y, &self.params.q));
        let masked = products - mul_in_ring(sk_y, &c_1, &self.ring_mod);

        // center-lift and round to the nearest multiple of q/p
        let q = Z::from(&self.params.q);
        let half_q = q.div_floor(&Z::from(2));
        let mut out = MatZ::new(self.params.n, 1);
        for i in 0..self.params.n {
            let mut entry: Z = masked.get_entry(i, 0).unwrap();
            if entry > half_q {
                entry = entry - &q;
            }
            let rounded = (entry * &self.params.p + &half_q).div_floor(&q);
            out.set_entry(i, 0, rounded).unwrap();
        }
        Ok(out)
    }

    /// Computes the centering `t(x) = ⌊x * q/p⌋ mod q` elementwise. The
    /// floor keeps the rounding offset in [`RingLwe::decrypt`] one-sided.
    fn center(&self, x: &MatZ) -> MatZq {
        let q = Z::from(&self.params.q);
        let mut centered = MatZq::new(x.get_num_rows(), x.get_num_columns(), &self.params.q);
        for i in 0..x.get_num_rows() {
            for j in 0..x.get_num_columns() {
                let entry: Z = x.get_entry(i, j).unwrap();
                centered
                    .set_entry(i, j, (entry * &q).div_floor(&self.params.p))
                    .unwrap();
            }
        }
        centered
    }

    /// Checks that all entries of `mat` are bounded by `bound` in absolute
    /// value.
    fn check_bound(&self, mat: &MatZ, bound: &Z) -> Result<(), CryptoError> {
        for i in 0..mat.get_num_rows() {
            for j in 0..mat.get_num_columns() {
                let entry: Z = mat.get_entry(i, j).unwrap();
                if entry.abs() > *bound {
                    return Err(CryptoError::BoundExceeded(format!(
                        "The entry at position ({i}, {j}) exceeds the bound {bound}."
                    )));
                }
            }
        }
        Ok(())
    }

    /// Checks that `mat` has the given shape.
    fn check_dims(&self, mat: &MatZ, rows: i64, cols: i64) -> Result<(), CryptoError> {
        if mat.get_num_rows() != rows || mat.get_num_columns() != cols {
            return Err(CryptoError::DimMismatch(format!(
                "Expected a {rows} x {cols} matrix, got {} x {}.",
                mat.get_num_rows(),
                mat.get_num_columns()
            )));
        }
        Ok(())
    }
}



#[cfg(test)]
mod test_serialization {
    use super::{MatZ, RingLwe};
    use std::str::FromStr;

    /// Ensure that a scheme instance survives a serde round trip and the
    /// deserialized instance still decrypts ciphertexts of the original.
    #[test]
    fn serde_cycle() {
        let scheme = RingLwe::new(8, 2, 10, 10).unwrap();
        let sk = scheme.generate_secret_key();
        let pk = scheme.generate_public_key(&sk).unwrap();
        let y = MatZ::from_str("[[1],[2]]").unwrap();
        let cipher = scheme.encrypt(&MatZ::new(2, scheme.params().n), &pk).unwrap();
        let sk_y = scheme.derive_key(&y, &sk).unwrap();

        let serialized = serde_json::to_string(&scheme).unwrap();
        let deserialized: RingLwe = serde_json::from_str(&serialized).unwrap();

        let products = deserialized.decrypt(&cipher, &sk_y, &y).unwrap();
        assert_eq!(MatZ::new(deserialized.params().n, 1), products);
    }
}

#[cfg(test)]
mod test_contracts {
    use super::{CryptoError, MatZ, RingLwe};
    use qfall_math::traits::SetEntry;
    use std::str::FromStr;

    /// Ensure that a plaintext entry just past the bound is rejected while
    /// the bound itself is accepted.
    #[test]
    fn plaintext_bound() {
        let scheme = RingLwe::new(8, 2, 10, 10).unwrap();
        let sk = scheme.generate_secret_key();
        let pk = scheme.generate_public_key(&sk).unwrap();

        let mut at_bound = MatZ::new(2, scheme.params().n);
        at_bound.set_entry(0, 0, 10).unwrap();
        at_bound.set_entry(1, 0, -10).unwrap();
        assert!(scheme.encrypt(&at_bound, &pk).is_ok());

        let mut beyond = MatZ::new(2, scheme.params().n);
        beyond.set_entry(0, 0, 11).unwrap();
        assert!(matches!(
            scheme.encrypt(&beyond, &pk),
            Err(CryptoError::BoundExceeded(_))
        ));
    }

    /// Ensure that query vectors violating their bound are rejected in both
    /// key derivation and decryption.
    #[test]
    fn query_bound() {
        let scheme = RingLwe::new(8, 2, 10, 10).unwrap();
        let sk = scheme.generate_secret_key();

        let y = MatZ::from_str("[[11],[0]]").unwrap();
        assert!(matches!(
            scheme.derive_key(&y, &sk),
            Err(CryptoError::BoundExceeded(_))
        ));
    }

    /// Ensure that mis-shaped inputs surface as dimension errors.
    #[test]
    fn shapes() {
        let scheme = RingLwe::new(8, 2, 10, 10).unwrap();
        let sk = scheme.generate_secret_key();
        let pk = scheme.generate_public_key(&sk).unwrap();
        let y = MatZ::from_str("[[1],[2]]").unwrap();
        let sk_y = scheme.derive_key(&y, &sk).unwrap();

        // wrong number of query coordinates
        let y_short = MatZ::from_str("[[1]]").unwrap();
        assert!(matches!(
            scheme.derive_key(&y_short, &sk),
            Err(CryptoError::DimMismatch(_))
        ));

        // wrong plaintext shape
        let x_short = MatZ::new(1, scheme.params().n);
        assert!(matches!(
            scheme.encrypt(&x_short, &pk),
            Err(CryptoError::DimMismatch(_))
        ));

        // wrong secret key shape
        let sk_short = MatZ::new(1, scheme.params().n);
        assert!(matches!(
            scheme.derive_key(&y, &sk_short),
            Err(CryptoError::MalformedKey(_))
        ));

        // ciphertext with a missing row
        let x = MatZ::new(2, scheme.params().n);
        let cipher = scheme.encrypt(&x, &pk).unwrap();
        let truncated = cipher
            .get_submatrix(0, 1, 0, scheme.params().n - 1)
            .unwrap();
        assert!(matches!(
            scheme.decrypt(&truncated, &sk_y, &y),
            Err(CryptoError::MalformedCipher(_))
        ));
    }
}
