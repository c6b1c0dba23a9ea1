// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code for flux-calibrator catalogs.

mod error;
mod read;
mod types;
mod write;

pub use error::*;
pub use read::{parse_catalog, parse_catalog_str, read_catalog_file};
pub use types::*;
pub use write::{write_catalog, write_catalog_file};
