// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parsing of flux-calibrator catalogs.
//!
//! Two kinds of record are understood, each on a single line:
//!
//! ```text
//! % NAME RA(H:M:S) DEC(D:M:S) FREQ_MHZ FLUX_JY SPECTRAL_INDEX
//! & NAME RA(H:M:S) DEC(D:M:S) A0 [A1 ...]
//! ```
//!
//! Any number of `aka NAME` lines may follow a record to give it aliases.
//! Blank lines and lines starting with `#` are ignored.

use std::{fs::File, io::BufReader, path::Path};

use log::{debug, trace, warn};

use super::{error::ReadCatalogError, Catalog, FluxModel};
use crate::{
    config::NameMatching,
    constants::{ALIAS_KEYWORD, COMMENT_MARKER, POLYNOMIAL_MARKER, SINGLE_POINT_MARKER},
    radec::RADec,
    sexagesimal::{sexagesimal_colon_str_hours_to_degrees, sexagesimal_colon_str_to_degrees},
};

/// Where we are in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// No calibrator has been read yet, so an alias has nothing to attach to.
    ExpectingRecord,

    /// Alias lines are added to the calibrator at this index of the catalog.
    AccumulatingAliases { index: usize },
}

/// Given the path to a calibrator catalog file, return a [`Catalog`].
pub fn read_catalog_file<P: AsRef<Path>>(
    path: P,
    name_matching: NameMatching,
) -> Result<Catalog, ReadCatalogError> {
    fn inner(path: &Path, name_matching: NameMatching) -> Result<Catalog, ReadCatalogError> {
        debug!("Attempting to read calibrator catalog {}", path.display());
        let mut f = BufReader::new(File::open(path)?);
        parse_catalog(&mut f, name_matching)
    }
    inner(path.as_ref(), name_matching)
}

/// Parse a string containing a calibrator catalog into a [`Catalog`].
pub fn parse_catalog_str(
    text: &str,
    name_matching: NameMatching,
) -> Result<Catalog, ReadCatalogError> {
    parse_catalog(&mut text.as_bytes(), name_matching)
}

/// Parse a buffer containing a calibrator catalog into a [`Catalog`].
///
/// Nothing is returned unless every line of the buffer is valid.
pub fn parse_catalog<T: std::io::BufRead>(
    buf: &mut T,
    name_matching: NameMatching,
) -> Result<Catalog, ReadCatalogError> {
    let mut line = String::new();
    let mut line_num: u32 = 0;
    let mut state = ParseState::ExpectingRecord;
    let mut catalog = Catalog::new(name_matching);

    loop {
        match buf.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => (),
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                return Err(ReadCatalogError::InvalidUtf8 {
                    line_num: line_num + 1,
                })
            }
            Err(e) => return Err(e.into()),
        }
        line_num += 1;
        let trimmed = line.trim();

        // Handle lines that aren't intended to parsed (comments and blank
        // lines).
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER) {
            line.clear();
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix(SINGLE_POINT_MARKER) {
            let (name, radec, flux_model) = parse_single_point(rest, line_num, trimmed)?;
            trace!("Line {line_num}: single-point calibrator {name}");
            let index = catalog
                .insert_record(name, radec, flux_model)
                .map_err(|err| ReadCatalogError::DuplicateName { line_num, err })?;
            state = ParseState::AccumulatingAliases { index };
        } else if let Some(rest) = trimmed.strip_prefix(POLYNOMIAL_MARKER) {
            let (name, radec, flux_model) = parse_polynomial(rest, line_num, trimmed)?;
            trace!("Line {line_num}: polynomial calibrator {name}");
            let index = catalog
                .insert_record(name, radec, flux_model)
                .map_err(|err| ReadCatalogError::DuplicateName { line_num, err })?;
            state = ParseState::AccumulatingAliases { index };
        } else {
            let mut items = trimmed.split_ascii_whitespace();
            match items.next() {
                Some(keyword) if keyword.eq_ignore_ascii_case(ALIAS_KEYWORD) => {
                    let alias = match items.next() {
                        Some(a) => a.to_string(),
                        None => {
                            return Err(ReadCatalogError::IncompleteAlias {
                                line_num,
                                line: trimmed.to_string(),
                            })
                        }
                    };
                    if items.next().is_some() {
                        warn!("Catalog line {line_num}: Ignoring trailing contents after alias {alias}");
                    }

                    match state {
                        ParseState::ExpectingRecord => {
                            return Err(ReadCatalogError::OrphanAlias { line_num, alias })
                        }

                        ParseState::AccumulatingAliases { index } => {
                            let added = catalog
                                .add_alias(index, alias.clone())
                                .map_err(|err| ReadCatalogError::DuplicateName { line_num, err })?;
                            if added {
                                trace!("Line {line_num}: alias {alias}");
                            } else {
                                warn!("Catalog line {line_num}: Alias {alias} is already a name of the same calibrator; ignoring it");
                            }
                        }
                    }
                }

                _ => {
                    return Err(ReadCatalogError::UnrecognisedLine {
                        line_num,
                        line: trimmed.to_string(),
                    })
                }
            }
        }

        line.clear(); // clear to reuse the buffer line.
    }

    if catalog.is_empty() {
        warn!("Calibrator catalog contained no calibrators");
    } else {
        let counts = catalog.get_counts();
        debug!(
            "Read {} calibrators ({} single-point, {} polynomial) with {} aliases",
            catalog.len(),
            counts.num_single_points,
            counts.num_polynomials,
            counts.num_aliases
        );
    }

    Ok(catalog)
}

fn parse_float(string: &str, line_num: u32) -> Result<f64, ReadCatalogError> {
    match string.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(f),
        _ => Err(ReadCatalogError::ParseFloat {
            line_num,
            string: string.to_string(),
        }),
    }
}

/// Read the name and position common to both record kinds.
fn parse_name_and_position<'a, I: Iterator<Item = &'a str>>(
    items: &mut I,
    line_num: u32,
    malformed: &dyn Fn() -> ReadCatalogError,
) -> Result<(String, RADec), ReadCatalogError> {
    let name = items.next().ok_or_else(malformed)?.to_string();
    let ra_str = items.next().ok_or_else(malformed)?;
    let dec_str = items.next().ok_or_else(malformed)?;

    let ra = sexagesimal_colon_str_hours_to_degrees(ra_str)
        .map_err(|err| ReadCatalogError::Sexagesimal { line_num, err })?;
    let dec = sexagesimal_colon_str_to_degrees(dec_str)
        .map_err(|err| ReadCatalogError::Sexagesimal { line_num, err })?;

    // Validation.
    if !(0.0..360.0).contains(&ra) {
        return Err(ReadCatalogError::InvalidRa { line_num, ra });
    }
    if !(-90.0..=90.0).contains(&dec) {
        return Err(ReadCatalogError::InvalidDec { line_num, dec });
    }

    Ok((name, RADec::new_degrees(ra, dec)))
}

/// Parse the contents of a single-point line after its marker.
fn parse_single_point(
    rest: &str,
    line_num: u32,
    line: &str,
) -> Result<(String, RADec, FluxModel), ReadCatalogError> {
    let malformed = || ReadCatalogError::MalformedRecord {
        line_num,
        kind: "single-point",
        expected: "NAME RA DEC FREQ_MHZ FLUX_JY SPECTRAL_INDEX",
        line: line.to_string(),
    };

    let mut items = rest.split_ascii_whitespace();
    let (name, radec) = parse_name_and_position(&mut items, line_num, &malformed)?;
    let freq_mhz = parse_float(items.next().ok_or_else(malformed)?, line_num)?;
    let flux_jy = parse_float(items.next().ok_or_else(malformed)?, line_num)?;
    let spectral_index = parse_float(items.next().ok_or_else(malformed)?, line_num)?;
    if items.next().is_some() {
        warn!("Catalog line {line_num}: Ignoring trailing contents after spectral index");
    }

    if freq_mhz <= 0.0 {
        return Err(ReadCatalogError::MalformedRecord {
            line_num,
            kind: "single-point",
            expected: "a positive reference frequency",
            line: line.to_string(),
        });
    }

    Ok((
        name,
        radec,
        FluxModel::SinglePoint {
            freq_mhz,
            flux_jy,
            spectral_index,
        },
    ))
}

/// Parse the contents of a polynomial line after its marker.
fn parse_polynomial(
    rest: &str,
    line_num: u32,
    line: &str,
) -> Result<(String, RADec, FluxModel), ReadCatalogError> {
    let malformed = || ReadCatalogError::MalformedRecord {
        line_num,
        kind: "polynomial",
        expected: "NAME RA DEC A0 [A1 ...]",
        line: line.to_string(),
    };

    let mut items = rest.split_ascii_whitespace();
    let (name, radec) = parse_name_and_position(&mut items, line_num, &malformed)?;
    let coeffs = items
        .map(|s| parse_float(s, line_num))
        .collect::<Result<Vec<f64>, _>>()?;
    let flux_model = FluxModel::polynomial(coeffs).map_err(|_| malformed())?;

    Ok((name, radec, flux_model))
}
