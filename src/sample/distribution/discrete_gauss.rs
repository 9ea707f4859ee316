// Copyright © 2024 Marvin Beckmann
//
// This file is part of fe-rs.
//
// fe-rs is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the discrete Gaussian sampler over the integers used
//! by the ring-LWE scheme. It combines a cumulative-distribution-table (CDT)
//! base sampler of fixed width [`sigma_cdt`] with a convolution step that
//! stretches base samples to arbitrary larger widths.

use qfall_math::{integer::MatZ, integer::Z, rational::Q, traits::SetEntry};
use rand::{CryptoRng, RngCore};
use std::str::FromStr;

/// Cumulative tail probabilities `P(X > i)` for `i = 0, ..., 8` of the
/// half-Gaussian with standard deviation [`sigma_cdt`], scaled to 126 bit.
/// The head of the table carries the halved weight of `0`, so that appending
/// a uniform sign yields the centered distribution without rejection.
///
/// For this choice of sigma `ρ(x) = exp(-x²/(2σ²)) = 2^(-x²)`, which makes
/// the entries exactly computable; the mass beyond the table is < 2^(-81).
const CDT_TABLE: [u128; 9] = [
    45111401470162057982092423054006003761,
    5152211210089500098341194250069954658,
    157312427580430362872290649577948521,
    1221840627021933638887412062573329,
    2382916448430285501449269484460,
    1163107466411764367310904208,
    141967894247894126354120,
    4332417142603748584,
    33053530520966,
];

/// Number of random bits consumed per table lookup.
const CDT_PRECISION: u32 = 126;

/// Returns the standard deviation `sqrt(1/(2 ln 2))` of the CDT base sampler
/// as a rational approximation with 38 decimal digits.
///
/// # Examples
/// ```
/// use fe_rs::sample::distribution::discrete_gauss::sigma_cdt;
/// use qfall_math::rational::Q;
///
/// assert!(sigma_cdt() < Q::from(1));
/// assert!(sigma_cdt() > Q::from((4, 5)));
/// ```
pub fn sigma_cdt() -> Q {
    Q::from_str(
        "84932180028801904272150283410288961971/100000000000000000000000000000000000000",
    )
    .unwrap()
}

/// Samples an integer according to the discrete Gaussian distribution with
/// standard deviation [`sigma_cdt`] by a table lookup on 126 uniformly random
/// bits followed by a uniform sign.
///
/// Parameters:
/// - `rng`: specifies the cryptographic randomness source
///
/// Returns a sample in `[-9, 9]`; the probability mass outside this interval
/// is statistically negligible and truncated by the table.
///
/// # Examples
/// ```
/// use fe_rs::sample::distribution::discrete_gauss::sample_cdt;
///
/// let sample = sample_cdt(&mut rand::thread_rng());
/// assert!(sample.abs() <= 9);
/// ```
pub fn sample_cdt<R: RngCore + CryptoRng>(rng: &mut R) -> i64 {
    let mask = (1u64 << (CDT_PRECISION / 2)) - 1;
    let random = (((rng.next_u64() & mask) as u128) << (CDT_PRECISION / 2))
        | (rng.next_u64() & mask) as u128;

    let mut magnitude = 0;
    for tail in CDT_TABLE {
        if random < tail {
            magnitude += 1;
        }
    }

    if rng.next_u64() & 1 == 1 {
        -magnitude
    } else {
        magnitude
    }
}

/// A sampler for the discrete Gaussian distribution `D_{Z,σ}` for widths
/// `σ >= ` [`sigma_cdt`]. A sample is assembled as `ℓ * x_1 + x_2` from two
/// base samples `x_1, x_2` of the CDT sampler, where `ℓ = ⌊σ/σ_CDT⌋`.
/// The result has standard deviation `σ_CDT * sqrt(1 + ℓ²)` and approximates
/// `D_{Z,σ}` for `ℓ >= 2`.
///
/// Attributes:
/// - `ell`: the integer convolution width `⌊σ/σ_CDT⌋`
///
/// # Examples
/// ```
/// use fe_rs::sample::distribution::discrete_gauss::ConvolutionSampler;
/// use qfall_math::rational::Q;
///
/// let sampler = ConvolutionSampler::new(&Q::from(20));
/// let mat = sampler.sample_mat(4, 16, &mut rand::thread_rng());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvolutionSampler {
    ell: Z,
}

impl ConvolutionSampler {
    /// Instantiates a sampler for standard deviation `sigma` by fixing the
    /// convolution width `ℓ = ⌊σ/σ_CDT⌋`. For `sigma` below [`sigma_cdt`]
    /// the sampler degenerates to the plain CDT sampler.
    ///
    /// Parameters:
    /// - `sigma`: specifies the targeted standard deviation
    ///
    /// Returns a [`ConvolutionSampler`] with fixed convolution width.
    ///
    /// # Examples
    /// ```
    /// use fe_rs::sample::distribution::discrete_gauss::ConvolutionSampler;
    /// use qfall_math::rational::Q;
    ///
    /// let sampler = ConvolutionSampler::new(&Q::from(100));
    /// ```
    pub fn new(sigma: &Q) -> Self {
        let ell = (sigma / sigma_cdt()).floor();
        Self { ell }
    }

    /// Returns the convolution width `ℓ` of this sampler.
    pub fn ell(&self) -> &Z {
        &self.ell
    }

    /// Samples an integer from the convolved distribution as `ℓ * x_1 + x_2`
    /// with two independent CDT base samples `x_1, x_2`.
    ///
    /// Parameters:
    /// - `rng`: specifies the cryptographic randomness source
    ///
    /// Returns a [`Z`] sample.
    ///
    /// # Examples
    /// ```
    /// use fe_rs::sample::distribution::discrete_gauss::ConvolutionSampler;
    /// use qfall_math::rational::Q;
    ///
    /// let sampler = ConvolutionSampler::new(&Q::from(10));
    /// let sample = sampler.sample(&mut rand::thread_rng());
    /// ```
    pub fn sample<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Z {
        let x_1 = sample_cdt(rng);
        let x_2 = sample_cdt(rng);

        &self.ell * Z::from(x_1) + Z::from(x_2)
    }

    /// Samples a matrix with independent entries from the convolved
    /// distribution.
    ///
    /// Parameters:
    /// - `num_rows`: specifies the number of rows of the output
    /// - `num_cols`: specifies the number of columns of the output
    /// - `rng`: specifies the cryptographic randomness source
    ///
    /// Returns a [`MatZ`] with independently sampled entries.
    ///
    /// # Examples
    /// ```
    /// use fe_rs::sample::distribution::discrete_gauss::ConvolutionSampler;
    /// use qfall_math::rational::Q;
    ///
    /// let sampler = ConvolutionSampler::new(&Q::from(10));
    /// let mat = sampler.sample_mat(2, 8, &mut rand::thread_rng());
    /// ```
    ///
    /// # Panics ...
    /// - if the number of rows or columns is not positive.
    pub fn sample_mat<R: RngCore + CryptoRng>(
        &self,
        num_rows: i64,
        num_cols: i64,
        rng: &mut R,
    ) -> MatZ {
        let mut mat = MatZ::new(num_rows, num_cols);
        for i in 0..num_rows {
            for j in 0..num_cols {
                mat.set_entry(i, j, self.sample(rng)).unwrap();
            }
        }
        mat
    }
}

#[cfg(test)]
mod test_sample_cdt {
    use super::sample_cdt;

    /// Ensure that base samples stay within the support of the table and
    /// that both signs occur.
    #[test]
    fn support_and_signs() {
        let mut rng = rand::thread_rng();
        let mut seen_negative = false;
        let mut seen_positive = false;

        for _ in 0..1000 {
            let sample = sample_cdt(&mut rng);

            assert!(sample.abs() <= 9);
            seen_negative |= sample < 0;
            seen_positive |= sample > 0;
        }

        assert!(seen_negative);
        assert!(seen_positive);
    }

    /// Ensure that the empirical standard deviation is close to `sigma_cdt`,
    /// i.e. in a generous window around `0.849`.
    #[test]
    fn base_width() {
        let mut rng = rand::thread_rng();
        let samples: Vec<i64> = (0..10_000).map(|_| sample_cdt(&mut rng)).collect();

        let mean = samples.iter().sum::<i64>() as f64 / samples.len() as f64;
        let var = samples
            .iter()
            .map(|sample| (*sample as f64 - mean).powi(2))
            .sum::<f64>()
            / samples.len() as f64;

        assert!(mean.abs() < 0.1);
        assert!(var.sqrt() > 0.7 && var.sqrt() < 1.0);
    }
}

#[cfg(test)]
mod test_convolution_sampler {
    use super::{ConvolutionSampler, Z};
    use qfall_math::rational::Q;

    /// Ensure that the convolution width is computed as `⌊σ/σ_CDT⌋`.
    #[test]
    fn width_floored() {
        assert_eq!(&Z::from(2), ConvolutionSampler::new(&Q::from(2)).ell());
        assert_eq!(&Z::from(11), ConvolutionSampler::new(&Q::from(10)).ell());
        assert_eq!(&Z::from(117), ConvolutionSampler::new(&Q::from(100)).ell());
    }

    /// Ensure that small widths degenerate to the base sampler.
    #[test]
    fn degenerate_width() {
        let sampler = ConvolutionSampler::new(&Q::from((1, 2)));

        assert_eq!(&Z::ZERO, sampler.ell());
        for _ in 0..100 {
            let sample = sampler.sample(&mut rand::thread_rng());
            assert!(Z::from(-9) <= sample && sample <= Z::from(9));
        }
    }

    /// Ensure that samples respect the tail cut `|ℓ * x_1 + x_2| <= 9(ℓ+1)`.
    #[test]
    fn tail_cut() {
        let sampler = ConvolutionSampler::new(&Q::from(50));
        let bound = Z::from(9) * (sampler.ell() + Z::ONE);
        let lower = Z::from(-1) * &bound;

        for _ in 0..1000 {
            let sample = sampler.sample(&mut rand::thread_rng());
            assert!(sample <= bound);
            assert!(lower <= sample);
        }
    }

    /// Ensure that the empirical standard deviation tracks the requested one;
    /// the window is generous as this is a statistical assertion.
    #[test]
    fn convolved_width() {
        let sampler = ConvolutionSampler::new(&Q::from(100));
        let mut rng = rand::thread_rng();

        let samples: Vec<i64> = (0..10_000)
            .map(|_| i64::try_from(&sampler.sample(&mut rng)).unwrap())
            .collect();
        let mean = samples.iter().sum::<i64>() as f64 / samples.len() as f64;
        let var = samples
            .iter()
            .map(|sample| (*sample as f64 - mean).powi(2))
            .sum::<f64>()
            / samples.len() as f64;

        assert!(mean.abs() < 10.0);
        assert!(var.sqrt() > 85.0 && var.sqrt() < 115.0);
    }

    /// Ensure that matrix sampling fills a matrix of the requested shape.
    #[test]
    fn matrix_dimensions() {
        use qfall_math::traits::{GetNumColumns, GetNumRows};

        let sampler = ConvolutionSampler::new(&Q::from(10));
        let mat = sampler.sample_mat(3, 7, &mut rand::thread_rng());

        assert_eq!(3, mat.get_num_rows());
        assert_eq!(7, mat.get_num_columns());
    }
}
