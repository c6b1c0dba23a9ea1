// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::sexagesimal::SexagesimalError;

/// Errors associated with reading in a calibrator catalog. Any of these
/// aborts the whole read.
#[derive(Error, Debug)]
pub enum ReadCatalogError {
    #[error("Catalog line {line_num}: Malformed {kind} record; expected {expected}, but got '{line}'")]
    MalformedRecord {
        line_num: u32,
        kind: &'static str,
        expected: &'static str,
        line: String,
    },

    #[error("Catalog line {line_num}: Error converting string {string} to a float")]
    ParseFloat { line_num: u32, string: String },

    #[error("Catalog line {line_num}: {err}")]
    Sexagesimal {
        line_num: u32,
        err: SexagesimalError,
    },

    #[error("Catalog line {line_num}: RA {ra}° is out of range (0° <= RA < 360°)")]
    InvalidRa { line_num: u32, ra: f64 },

    #[error("Catalog line {line_num}: Dec {dec}° is out of range (-90° <= Dec <= 90°)")]
    InvalidDec { line_num: u32, dec: f64 },

    #[error("Catalog line {line_num}: Found alias '{alias}' before any calibrator")]
    OrphanAlias { line_num: u32, alias: String },

    #[error("Catalog line {line_num}: Alias line has no name: '{line}'")]
    IncompleteAlias { line_num: u32, line: String },

    #[error("Catalog line {line_num}: {err}")]
    DuplicateName {
        line_num: u32,
        err: DuplicateNameError,
    },

    #[error("Catalog line {line_num}: Unrecognised line '{line}'")]
    UnrecognisedLine { line_num: u32, line: String },

    #[error("Catalog line {line_num}: Line is not valid UTF-8")]
    InvalidUtf8 { line_num: u32 },

    #[error(transparent)]
    IO(#[from] std::io::Error),
}

impl ReadCatalogError {
    /// The catalog line responsible for this error, if there is one.
    pub fn line_num(&self) -> Option<u32> {
        match self {
            ReadCatalogError::MalformedRecord { line_num, .. }
            | ReadCatalogError::ParseFloat { line_num, .. }
            | ReadCatalogError::Sexagesimal { line_num, .. }
            | ReadCatalogError::InvalidRa { line_num, .. }
            | ReadCatalogError::InvalidDec { line_num, .. }
            | ReadCatalogError::OrphanAlias { line_num, .. }
            | ReadCatalogError::IncompleteAlias { line_num, .. }
            | ReadCatalogError::DuplicateName { line_num, .. }
            | ReadCatalogError::UnrecognisedLine { line_num, .. }
            | ReadCatalogError::InvalidUtf8 { line_num } => Some(*line_num),
            ReadCatalogError::IO(_) => None,
        }
    }
}

/// A name or alias that is already used by a calibrator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("The name '{name}' is already used by calibrator '{existing}'")]
pub struct DuplicateNameError {
    pub name: String,
    /// The canonical name of the calibrator already using the name.
    pub existing: String,
}

/// Errors associated with finding a calibrator in a catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Calibrator '{name}' is not in the catalog")]
    NotFound { name: String },
}

/// Errors associated with estimating flux densities.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum FluxDomainError {
    #[error("Cannot estimate a flux density at {0} MHz; the frequency must be positive")]
    NonPositiveFrequency(f64),

    #[error("Cannot estimate a flux density at {0} MHz; the frequency must be finite")]
    NonFiniteFrequency(f64),

    #[error("A polynomial flux model needs at least one coefficient")]
    NoCoefficients,
}

/// Errors associated with writing out a calibrator catalog.
#[derive(Error, Debug)]
pub enum WriteCatalogError {
    #[error("Calibrator '{calibrator}': the name '{name}' contains whitespace, which can't be written")]
    NameWithWhitespace { calibrator: String, name: String },

    #[error("Calibrator '{calibrator}' has an empty name or alias, which can't be written")]
    EmptyName { calibrator: String },

    /// An IO error.
    #[error(transparent)]
    IO(#[from] std::io::Error),
}
