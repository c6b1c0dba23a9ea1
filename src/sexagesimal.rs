// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Code for handling conversion to and from colon-delimited sexagesimal.

Catalogs write right ascensions as "hours:minutes:seconds" and declinations
as "degrees:minutes:seconds" with an optional leading sign. Everything is
normalised to decimal degrees.
 */

use thiserror::Error;

use crate::constants::DEG_PER_HOUR;

/// Convert a sexagesimal-formatted string delimited by colons to a float
/// \[degrees\]. The input is assumed to be in "degrees minutes seconds".
///
/// The sign is read from the text, so "-00:30:00" is correctly negative.
///
/// # Examples
///
/// ```
/// # use mwa_fluxcal::sexagesimal::*;
/// # use approx::*;
/// # fn main() -> Result<(), SexagesimalError> {
/// let f = sexagesimal_colon_str_to_degrees("-22:58:52.56")?;
/// assert_abs_diff_eq!(f, -22.981267, epsilon = 1e-6);
/// # Ok(())
/// # }
/// ```
pub fn sexagesimal_colon_str_to_degrees(s: &str) -> Result<f64, SexagesimalError> {
    let (negative, d, m, sec) = split_colon_str(s)?;
    let num = sexagesimal_dms_to_degrees(d, m, sec);
    Ok(if negative { -num } else { num })
}

/// Convert a sexagesimal-formatted string delimited by colons to a float
/// \[degrees\]. The input is assumed to be in "hours minutes seconds".
///
/// # Examples
///
/// ```
/// # use mwa_fluxcal::sexagesimal::*;
/// # use approx::*;
/// # fn main() -> Result<(), SexagesimalError> {
/// let f = sexagesimal_colon_str_hours_to_degrees("01:37:41.3")?;
/// assert_abs_diff_eq!(f, 24.422083, epsilon = 1e-6);
/// # Ok(())
/// # }
/// ```
pub fn sexagesimal_colon_str_hours_to_degrees(s: &str) -> Result<f64, SexagesimalError> {
    let (negative, h, m, sec) = split_colon_str(s)?;
    let num = sexagesimal_hms_to_degrees(h, m, sec);
    Ok(if negative { -num } else { num })
}

/// Combine unsigned degrees, minutes and seconds into decimal degrees.
pub fn sexagesimal_dms_to_degrees(d: f64, m: f64, s: f64) -> f64 {
    d + m / 60.0 + s / 3600.0
}

/// Combine unsigned hours, minutes and seconds into decimal degrees.
pub fn sexagesimal_hms_to_degrees(h: f64, m: f64, s: f64) -> f64 {
    DEG_PER_HOUR * sexagesimal_dms_to_degrees(h, m, s)
}

fn split_colon_str(s: &str) -> Result<(bool, f64, f64, f64), SexagesimalError> {
    let trimmed = s.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let fields: Vec<&str> = unsigned.split(':').collect();
    if fields.len() != 3 {
        return Err(SexagesimalError::WrongFieldCount(s.to_string()));
    }

    let mut values = [0.0; 3];
    for (value, (field, name)) in values
        .iter_mut()
        .zip(fields.iter().zip(["whole", "minutes", "seconds"]))
    {
        // A sign is only valid at the very start of the string.
        if field.starts_with(['+', '-']) {
            return Err(SexagesimalError::MisplacedSign(s.to_string()));
        }
        *value = field
            .parse::<f64>()
            .map_err(|err| SexagesimalError::ParseFloat {
                string: s.to_string(),
                err,
            })?;
        if !value.is_finite() {
            return Err(SexagesimalError::OutOfRange {
                field: name,
                value: *value,
                string: s.to_string(),
            });
        }
    }

    let [whole, m, sec] = values;
    for (field, value) in [("minutes", m), ("seconds", sec)] {
        if !(0.0..60.0).contains(&value) {
            return Err(SexagesimalError::OutOfRange {
                field,
                value,
                string: s.to_string(),
            });
        }
    }

    Ok((negative, whole, m, sec))
}

/// Convert a number in degrees to a colon-delimited sexagesimal string in
/// "degrees minutes seconds". A sign is always written.
///
/// # Examples
///
/// ```
/// # use mwa_fluxcal::sexagesimal::*;
/// let dms = degrees_to_sexagesimal_colon_dms(-22.981266666666667);
/// assert_eq!(dms, "-22:58:52.5600");
/// ```
pub fn degrees_to_sexagesimal_colon_dms(f: f64) -> String {
    let (whole, min, sec, frac) = split_into_fields(f.abs());
    format!(
        "{sign}{whole:02}:{min:02}:{sec:02}.{frac:04}",
        sign = if f < 0.0 { "-" } else { "+" },
    )
}

/// Convert a number in degrees to a colon-delimited sexagesimal string in
/// "hours minutes seconds".
///
/// # Examples
///
/// ```
/// # use mwa_fluxcal::sexagesimal::*;
/// let hms = degrees_to_sexagesimal_colon_hms(24.422083333333333);
/// assert_eq!(hms, "01:37:41.3000");
/// ```
pub fn degrees_to_sexagesimal_colon_hms(f: f64) -> String {
    let (whole, min, sec, frac) = split_into_fields(f.abs() / DEG_PER_HOUR);
    // Rounding just below 24h must wrap to 0h, not print as "24".
    let whole = whole % 24;
    format!(
        "{sign}{whole:02}:{min:02}:{sec:02}.{frac:04}",
        sign = if f < 0.0 { "-" } else { "" },
    )
}

/// Split a non-negative value into whole units, minutes, seconds and 1e-4
/// fractions of a second. Rounding happens once on the total, so seconds
/// never print as "60".
fn split_into_fields(f: f64) -> (u64, u64, u64, u64) {
    // The 4 in 1e4 gives that many decimal places.
    let total = (f * 3600.0 * 1e4).round() as u64;
    let frac = total % 10_000;
    let total_sec = total / 10_000;
    (total_sec / 3600, (total_sec / 60) % 60, total_sec % 60, frac)
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SexagesimalError {
    /// Three numbers (fields) are expected; this error is used when the number
    /// of fields is not three.
    #[error("Did not get three colon-separated sexagesimal fields: {0}")]
    WrongFieldCount(String),

    #[error("Sexagesimal string {0} has a sign somewhere other than its start")]
    MisplacedSign(String),

    #[error("Sexagesimal string {string} has an invalid {field} value {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        string: String,
    },

    #[error("Could not read sexagesimal string {string}: {err}")]
    ParseFloat {
        string: String,
        err: std::num::ParseFloatError,
    },
}
