// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::sexagesimal::{degrees_to_sexagesimal_colon_dms, degrees_to_sexagesimal_colon_hms};

/// A struct containing a Right Ascension and Declination. All units are in
/// degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RADec {
    /// Right ascension \[degrees\]
    pub ra: f64,
    /// Declination \[degrees\]
    pub dec: f64,
}

impl RADec {
    /// Make a new `RADec` struct from values in degrees.
    pub fn new_degrees(ra: f64, dec: f64) -> Self {
        Self { ra, dec }
    }

    /// Calculate the angular distance between two sets of coordinates
    /// \[degrees\].
    ///
    /// Uses the Vincenty formula, which is well conditioned for both tiny and
    /// antipodal separations.
    pub fn separation(&self, b: &Self) -> f64 {
        let (s_dec_a, c_dec_a) = self.dec.to_radians().sin_cos();
        let (s_dec_b, c_dec_b) = b.dec.to_radians().sin_cos();
        let (s_dra, c_dra) = (b.ra - self.ra).to_radians().sin_cos();

        let x = c_dec_b * s_dra;
        let y = c_dec_a * s_dec_b - s_dec_a * c_dec_b * c_dra;
        let numerator = x.hypot(y);
        let denominator = s_dec_a * s_dec_b + c_dec_a * c_dec_b * c_dra;
        numerator.atan2(denominator).to_degrees()
    }
}

impl std::fmt::Display for RADec {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "({}, {})",
            degrees_to_sexagesimal_colon_hms(self.ra),
            degrees_to_sexagesimal_colon_dms(self.dec)
        )
    }
}

#[cfg(test)]
impl approx::AbsDiffEq for RADec {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.ra, &other.ra, epsilon)
            && f64::abs_diff_eq(&self.dec, &other.dec, epsilon)
    }
}
