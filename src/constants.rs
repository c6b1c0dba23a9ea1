// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All constants *must* be double precision.
 */

/// Polynomial flux models take their frequencies in GHz, but catalog and
/// query frequencies are in MHz.
pub const MHZ_PER_GHZ: f64 = 1000.0;

/// Degrees of right ascension per hour of right ascension.
pub const DEG_PER_HOUR: f64 = 15.0;

/// When a single-point (power-law) flux model is extrapolated more than this
/// many decades away from its reference frequency, a warning is emitted.
pub const DEFAULT_EXTRAPOLATION_WARNING_DECADES: f64 = 1.0;

/// The marker starting a single-point (Format 1) catalog record.
pub const SINGLE_POINT_MARKER: char = '%';

/// The marker starting a polynomial (Format 2) catalog record.
pub const POLYNOMIAL_MARKER: char = '&';

/// The keyword starting an alias line. Matched case-insensitively.
pub const ALIAS_KEYWORD: &str = "aka";

/// The marker starting a comment line.
pub const COMMENT_MARKER: char = '#';
