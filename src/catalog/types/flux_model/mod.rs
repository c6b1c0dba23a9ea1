// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Flux-density models of calibrators.


use vec1::Vec1;

use crate::{catalog::FluxDomainError, constants::MHZ_PER_GHZ};

#[derive(Clone, Debug, PartialEq, strum_macros::IntoStaticStr)]
pub enum FluxModel {
    /// A single flux density measurement, extrapolated with a power law.
    ///
    /// $S_\nu = S_0 (\nu / \nu_0)^{\alpha}$
    #[strum(serialize = "single-point")]
    SinglePoint {
        /// The reference frequency (nu_0) \[MHz\]
        freq_mhz: f64,
        /// The flux density at the reference frequency (S_0) \[Jy\]
        flux_jy: f64,
        /// Spectral index (alpha)
        spectral_index: f64,
    },

    /// A polynomial in log-flux vs. log-frequency, with frequencies in GHz.
    ///
    /// $\log_{10} S = \sum_i a_i (\log_{10} \nu_{GHz})^i$
    #[strum(serialize = "polynomial")]
    Polynomial {
        /// a0..aN
        coeffs: Vec1<f64>,
    },
}

impl FluxModel {
    /// Make a polynomial model from a list of coefficients ordered a0..aN.
    /// At least one coefficient is required.
    pub fn polynomial(coeffs: Vec<f64>) -> Result<FluxModel, FluxDomainError> {
        Vec1::try_from_vec(coeffs)
            .map(|coeffs| FluxModel::Polynomial { coeffs })
            .map_err(|_| FluxDomainError::NoCoefficients)
    }

    /// Estimate the flux density \[Jy\] at a frequency \[MHz\].
    ///
    /// Single-point models evaluated exactly at their reference frequency
    /// return exactly their reference flux density.
    pub fn estimate_at_freq(&self, freq_mhz: f64) -> Result<f64, FluxDomainError> {
        check_freq(freq_mhz)?;

        match self {
            FluxModel::SinglePoint {
                freq_mhz: ref_freq_mhz,
                flux_jy,
                spectral_index,
            } => {
                if freq_mhz == *ref_freq_mhz {
                    return Ok(*flux_jy);
                }
                Ok(flux_jy * calc_flux_ratio(freq_mhz, *ref_freq_mhz, *spectral_index))
            }

            FluxModel::Polynomial { coeffs } => {
                let x = (freq_mhz / MHZ_PER_GHZ).log10();
                Ok(10_f64.powf(eval_polynomial(coeffs, x)))
            }
        }
    }

    /// The local spectral index (the slope of log-flux vs. log-frequency) at a
    /// frequency \[MHz\]. For single-point models, this is always the stored
    /// spectral index.
    pub fn spectral_index_at(&self, freq_mhz: f64) -> Result<f64, FluxDomainError> {
        check_freq(freq_mhz)?;

        match self {
            FluxModel::SinglePoint { spectral_index, .. } => Ok(*spectral_index),

            FluxModel::Polynomial { coeffs } => {
                let x = (freq_mhz / MHZ_PER_GHZ).log10();
                let derivative: Vec<f64> = coeffs
                    .iter()
                    .enumerate()
                    .skip(1)
                    .map(|(i, a)| i as f64 * a)
                    .collect();
                Ok(eval_polynomial(&derivative, x))
            }
        }
    }

    /// How many decades a frequency \[MHz\] is from this model's reference
    /// frequency. Polynomial models have no reference frequency.
    pub fn extrapolation_decades(&self, freq_mhz: f64) -> Option<f64> {
        match self {
            FluxModel::SinglePoint {
                freq_mhz: ref_freq_mhz,
                ..
            } => Some((freq_mhz / ref_freq_mhz).log10().abs()),
            FluxModel::Polynomial { .. } => None,
        }
    }

    pub fn is_single_point(&self) -> bool {
        matches!(self, FluxModel::SinglePoint { .. })
    }

    pub fn is_polynomial(&self) -> bool {
        matches!(self, FluxModel::Polynomial { .. })
    }
}

fn check_freq(freq_mhz: f64) -> Result<(), FluxDomainError> {
    if !freq_mhz.is_finite() {
        return Err(FluxDomainError::NonFiniteFrequency(freq_mhz));
    }
    if freq_mhz <= 0.0 {
        return Err(FluxDomainError::NonPositiveFrequency(freq_mhz));
    }
    Ok(())
}

/// Given a spectral index, determine the flux-density ratio of two frequencies.
pub(crate) fn calc_flux_ratio(desired_freq: f64, cat_freq: f64, spec_index: f64) -> f64 {
    (desired_freq / cat_freq).powf(spec_index)
}

/// Evaluate a0 + a1 x + a2 x^2 + ... with Horner's method. An empty slice
/// evaluates to 0.
pub(crate) fn eval_polynomial(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, a| acc * x + a)
}
