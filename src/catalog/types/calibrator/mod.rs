// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Structures to describe flux calibrators.


use indexmap::IndexSet;
use log::warn;

use super::FluxModel;
use crate::{
    catalog::FluxDomainError, constants::DEFAULT_EXTRAPOLATION_WARNING_DECADES, radec::RADec,
};

/// A single named calibrator from a catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct CalibratorRecord {
    /// The canonical name of the calibrator.
    pub name: String,

    /// The position of the calibrator.
    pub radec: RADec,

    /// How to get a flux density out of this calibrator.
    pub flux_model: FluxModel,

    /// Alternative names, in the order they were listed.
    pub aliases: IndexSet<String>,
}

impl CalibratorRecord {
    /// Estimate the flux density \[Jy\] of this calibrator at a frequency
    /// \[MHz\]. A warning is logged if a single-point model is extrapolated
    /// more than [`DEFAULT_EXTRAPOLATION_WARNING_DECADES`] from its
    /// reference frequency.
    pub fn flux_at(&self, freq_mhz: f64) -> Result<f64, FluxDomainError> {
        self.flux_at_with_warning(freq_mhz, DEFAULT_EXTRAPOLATION_WARNING_DECADES)
    }

    /// As [`CalibratorRecord::flux_at`], but with a custom extrapolation
    /// warning threshold \[decades\].
    pub fn flux_at_with_warning(
        &self,
        freq_mhz: f64,
        warning_decades: f64,
    ) -> Result<f64, FluxDomainError> {
        let fd = self.flux_model.estimate_at_freq(freq_mhz)?;

        if let Some(decades) = self.flux_model.extrapolation_decades(freq_mhz) {
            if decades > warning_decades {
                warn!(
                    "Calibrator {}: extrapolating its power law {decades:.2} decades to {freq_mhz} MHz; the flux density may be unreliable",
                    self.name
                );
            }
        }

        Ok(fd)
    }

    /// All of the alternative names of this calibrator.
    pub fn aliases(&self) -> &IndexSet<String> {
        &self.aliases
    }

    /// The canonical name followed by all aliases.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(|s| s.as_str()))
    }
}
