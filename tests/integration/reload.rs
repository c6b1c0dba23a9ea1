// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::{fs, io::Write};

use tempfile::{Builder, NamedTempFile};

use crate::{get_test_catalog, init_logger};
use mwa_fluxcal::{CatalogConfig, CatalogStore, NameMatching, ReadCatalogError};

#[test]
fn reload_from_file() {
    init_logger();
    let store = CatalogStore::load("& Only 00:00:00 +00:00:00 1.0\n").unwrap();
    let before = store.snapshot();

    let result = store.reload_from_file(get_test_catalog());
    assert!(result.is_ok(), "{}", result.unwrap_err());
    assert_eq!(before.len(), 1);
    assert_eq!(store.snapshot().len(), 9);
    assert!(store.resolve("Only").is_err());
}

#[test]
fn broken_reload_is_not_applied() {
    init_logger();
    let store = CatalogStore::from_file(get_test_catalog(), CatalogConfig::default()).unwrap();

    // Break the catalog by giving 3C48 an alias that already belongs to
    // Pictor A.
    let mut contents = fs::read_to_string(get_test_catalog()).unwrap();
    contents.push_str("& 3C49 01:41:09.16 +13:53:28.0 1.0\naka PicA\n");
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f.flush().unwrap();

    let result = store.reload_from_file(f.path());
    match result {
        Err(e @ ReadCatalogError::DuplicateName { .. }) => {
            let last_line = contents.lines().count() as u32;
            assert_eq!(e.line_num(), Some(last_line));
        }
        other => panic!("Expected a duplicate name error, got {other:?}"),
    }
    assert_eq!(store.snapshot().len(), 9);
    assert!(store.resolve("3C49").is_err());
}

#[test]
fn config_file_drives_name_matching() {
    init_logger();
    let mut f = Builder::new().suffix(".toml").tempfile().unwrap();
    f.write_all(b"name_matching = \"case-sensitive\"\n").unwrap();
    f.flush().unwrap();

    let config = CatalogConfig::from_file(f.path()).unwrap();
    assert_eq!(config.name_matching, NameMatching::CaseSensitive);
    let store = CatalogStore::from_file(get_test_catalog(), config).unwrap();
    assert!(store.resolve("CygA").is_ok());
    assert!(store.resolve("cyga").is_err());
}
