// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;
use tempfile::TempDir;

use crate::{get_test_catalog, init_logger};
use mwa_fluxcal::{
    catalog::{read_catalog_file, write_catalog_file},
    CatalogConfig, CatalogStore, FluxModel, FluxcalError, NameMatching, RADec,
};

fn store() -> CatalogStore {
    init_logger();
    let result = CatalogStore::from_file(get_test_catalog(), CatalogConfig::default());
    assert!(result.is_ok(), "{}", result.unwrap_err());
    result.unwrap()
}

#[test]
fn read_test_catalog() {
    let store = store();
    let catalog = store.snapshot();
    assert_eq!(catalog.len(), 9);

    let counts = catalog.get_counts();
    assert_eq!(counts.num_polynomials, 6);
    assert_eq!(counts.num_single_points, 3);
    assert_eq!(counts.num_aliases, 14);
}

#[test]
fn aliases_resolve_to_the_same_calibrator() {
    let store = store();
    assert_eq!(store.resolve("CygA").unwrap(), store.resolve("3C405").unwrap());
    assert_eq!(store.resolve("cyga").unwrap().name, "3C405");
    assert_eq!(store.resolve("PictorA").unwrap().name, "PicA");
    assert_eq!(store.resolve("1934-638").unwrap().name, "J1939-63");

    let aliases = store.aliases_of("3C286").unwrap();
    assert!(aliases.contains("J1331+3030"));
    assert!(aliases.contains("1328+307"));
    assert_eq!(aliases.len(), 2);
}

#[test]
fn flux_densities() {
    let store = store();

    // At 1 GHz, only a0 matters.
    assert_abs_diff_eq!(store.flux_at("3C48", 1000.0).unwrap(), 21.15, epsilon = 0.01);
    assert_abs_diff_eq!(
        store.flux_at("3C286", 1000.0).unwrap(),
        10_f64.powf(1.2481),
        epsilon = 1e-10
    );

    // At the reference frequency, the catalog value comes back.
    assert_eq!(store.flux_at("B1934-638", 1400.0).unwrap(), 14.9);

    // Power-law extrapolation.
    assert_abs_diff_eq!(
        store.flux_at("HydraA", 150.0).unwrap(),
        43.1 * (150.0_f64 / 1400.0).powf(-0.91),
        epsilon = 1e-10
    );

    // Calibrators get brighter at lower frequencies.
    for name in ["3C48", "3C147", "3C286", "CygA", "PicA", "HydraA"] {
        let low = store.flux_at(name, 150.0).unwrap();
        let high = store.flux_at(name, 1400.0).unwrap();
        assert!(low > high, "{name}: {low} <= {high}");
    }
}

#[test]
fn domain_and_lookup_errors() {
    let store = store();
    for name in ["3C48", "HydraA"] {
        for freq in [0.0, -150.0] {
            assert!(matches!(
                store.flux_at(name, freq),
                Err(FluxcalError::FluxDomain(_))
            ));
        }
    }
    assert!(matches!(
        store.flux_at("VirA", 150.0),
        Err(FluxcalError::Lookup(_))
    ));
}

#[test]
fn nearest_to_a_pointing() {
    let store = store();
    let catalog = store.snapshot();

    // A pointing near PKS 1934-638.
    let pointing = RADec::new_degrees(294.85, -63.5);
    let result = catalog.nearest(&pointing, 2.0);
    assert!(result.is_some());
    let (record, sep) = result.unwrap();
    assert_eq!(record.name, "J1939-63");
    assert!(sep < 2.0);

    // Nothing near the north celestial pole.
    assert!(catalog
        .nearest(&RADec::new_degrees(0.0, 89.0), 5.0)
        .is_none());
}

#[test]
fn write_and_reread() {
    let store = store();
    let catalog = store.snapshot();

    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("normalised.cfg");
    let result = write_catalog_file(&path, &catalog);
    assert!(result.is_ok(), "{}", result.unwrap_err());

    let result = read_catalog_file(&path, NameMatching::CaseInsensitive);
    assert!(result.is_ok(), "{}", result.unwrap_err());
    let reread = result.unwrap();
    assert_eq!(reread.len(), catalog.len());
    for (a, b) in catalog.iter().zip(reread.iter()) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.aliases, b.aliases);
        assert_eq!(a.flux_model, b.flux_model);
        assert_abs_diff_eq!(a.radec.ra, b.radec.ra, epsilon = 1e-6);
        assert_abs_diff_eq!(a.radec.dec, b.radec.dec, epsilon = 1e-6);
    }
    assert!(matches!(
        reread.resolve("J0408-65").unwrap().flux_model,
        FluxModel::SinglePoint { .. }
    ));
}
