// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests.
//!
//! Some help for laying out these tests was taken from:
//! https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

mod catalog_file;
mod reload;

use std::path::PathBuf;

/// The catalog in the repo's test files.
fn get_test_catalog() -> PathBuf {
    let pb = PathBuf::from("test_files/fluxcal.cfg");
    assert!(
        pb.exists(),
        "Could not find {}, which is required for this test",
        pb.display()
    );
    pb
}

/// Show library logs when a test fails.
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
