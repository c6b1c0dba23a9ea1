// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Settings controlling how catalogs are read and queried.
//!
//! Settings may be written in a toml or json file, e.g.
//!
//! ```toml
//! name_matching = "case-sensitive"
//! extrapolation_warning_decades = 0.5
//! ```

use std::{fs::File, io::Read, path::Path, str::FromStr};

use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::constants::DEFAULT_EXTRAPOLATION_WARNING_DECADES;

/// How calibrator names and aliases are compared.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumIter,
    strum_macros::EnumString,
)]
#[serde(rename_all = "kebab-case")]
pub enum NameMatching {
    /// "3C48" and "3c48" are the same calibrator.
    #[default]
    #[strum(serialize = "case-insensitive")]
    CaseInsensitive,

    #[strum(serialize = "case-sensitive")]
    CaseSensitive,
}

impl NameMatching {
    /// The key used to compare a name. Surrounding whitespace never matters.
    pub(crate) fn key(self, name: &str) -> String {
        let name = name.trim();
        match self {
            NameMatching::CaseInsensitive => name.to_ascii_lowercase(),
            NameMatching::CaseSensitive => name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// How calibrator names and aliases are compared.
    pub name_matching: NameMatching,

    /// Warn when a single-point flux model is extrapolated further than this
    /// from its reference frequency \[decades\].
    pub extrapolation_warning_decades: f64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            name_matching: NameMatching::default(),
            extrapolation_warning_decades: DEFAULT_EXTRAPOLATION_WARNING_DECADES,
        }
    }
}

#[derive(Debug, strum_macros::Display, strum_macros::EnumIter, strum_macros::EnumString)]
enum ConfigFileType {
    #[strum(serialize = "toml")]
    Toml,
    #[strum(serialize = "json")]
    Json,
}

lazy_static::lazy_static! {
    static ref CONFIG_FILE_TYPES_COMMA_SEPARATED: String = ConfigFileType::iter().join(", ");

    static ref NAME_MATCHING_COMMA_SEPARATED: String = NameMatching::iter().join(", ");
}

impl CatalogConfig {
    /// Read settings from a toml or json file. The type is decided by the
    /// file's extension. Unspecified settings take their default values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<CatalogConfig, ConfigError> {
        fn inner(path: &Path) -> Result<CatalogConfig, ConfigError> {
            debug!("Attempting to parse catalog config file {}", path.display());

            let file_type = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.to_lowercase())
                .and_then(|e| ConfigFileType::from_str(&e).ok());

            let mut contents = String::new();
            let config: CatalogConfig = match file_type {
                Some(ConfigFileType::Toml) => {
                    debug!("Parsing toml file...");
                    File::open(path)?.read_to_string(&mut contents)?;
                    toml::from_str(&contents).map_err(|e| ConfigError::TomlDecode {
                        file: path.display().to_string(),
                        err: e.to_string(),
                    })?
                }

                Some(ConfigFileType::Json) => {
                    debug!("Parsing json file...");
                    File::open(path)?.read_to_string(&mut contents)?;
                    serde_json::from_str(&contents).map_err(|e| ConfigError::JsonDecode {
                        file: path.display().to_string(),
                        err: e.to_string(),
                    })?
                }

                None => {
                    return Err(ConfigError::UnrecognisedFileExt(
                        path.display().to_string(),
                    ))
                }
            };

            config.validate()?;
            Ok(config)
        }
        inner(path.as_ref())
    }

    /// Complain about settings that can't be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let decades = self.extrapolation_warning_decades;
        if !decades.is_finite() || decades <= 0.0 {
            return Err(ConfigError::InvalidExtrapolationDecades(decades));
        }
        Ok(())
    }
}

/// Errors associated with catalog settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file '{0}' doesn't have a recognised file extension! Valid extensions are: {}", *CONFIG_FILE_TYPES_COMMA_SEPARATED)]
    UnrecognisedFileExt(String),

    #[error("Couldn't decode toml structure from {file}:\n{err}\nValid name matching values are: {}", *NAME_MATCHING_COMMA_SEPARATED)]
    TomlDecode { file: String, err: String },

    #[error("Couldn't decode json structure from {file}:\n{err}\nValid name matching values are: {}", *NAME_MATCHING_COMMA_SEPARATED)]
    JsonDecode { file: String, err: String },

    #[error("The extrapolation warning threshold must be a positive number of decades, but got {0}")]
    InvalidExtrapolationDecades(f64),

    #[error("IO error when trying to read config file: {0}")]
    IO(#[from] std::io::Error),
}
