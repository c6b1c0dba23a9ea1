// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! All errors that can come out of this crate.

use thiserror::Error;

use crate::{
    catalog::{FluxDomainError, LookupError, ReadCatalogError, WriteCatalogError},
    config::ConfigError,
};

#[derive(Error, Debug)]
pub enum FluxcalError {
    #[error(transparent)]
    ReadCatalog(#[from] ReadCatalogError),

    #[error(transparent)]
    WriteCatalog(#[from] WriteCatalogError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    FluxDomain(#[from] FluxDomainError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
