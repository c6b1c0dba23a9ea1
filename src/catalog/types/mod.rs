// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calibrator catalog types.

mod calibrator;
mod calibrator_list;
mod flux_model;

pub use calibrator::*;
pub use calibrator_list::*;
pub use flux_model::*;
