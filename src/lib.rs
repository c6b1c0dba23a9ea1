// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Reading and querying catalogs of radio flux-density calibrators.

A catalog lists calibrators with positions and either a single flux density
with a spectral index, or a polynomial in log-flux vs. log-frequency. Read a
catalog into a [`CatalogStore`], then ask it for a calibrator's flux density
at a frequency by any of its names.
 */

pub mod catalog;
pub mod config;
pub mod constants;
mod error;
pub mod radec;
pub mod sexagesimal;
mod store;

// Re-exports.
pub use catalog::{
    CalibratorRecord, Catalog, FluxDomainError, FluxModel, LookupError, ReadCatalogError,
};
pub use config::{CatalogConfig, NameMatching};
pub use error::FluxcalError;
pub use radec::RADec;
pub use store::CatalogStore;
