// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A shareable handle on the active calibrator catalog.
//!
//! Readers take a snapshot ([`Arc<Catalog>`]) and query it without any
//! locking. Reloading reads a whole new catalog before swapping it in, so
//! readers only ever see a complete catalog, and a failed reload leaves the
//! previous catalog in place.

use std::{
    path::Path,
    sync::{Arc, RwLock},
};

use indexmap::IndexSet;
use log::{debug, info};

use crate::{
    catalog::{
        parse_catalog_str, read_catalog_file, CalibratorRecord, Catalog, LookupError,
        ReadCatalogError,
    },
    config::{CatalogConfig, ConfigError},
    error::FluxcalError,
};

#[derive(Debug)]
pub struct CatalogStore {
    active: RwLock<Arc<Catalog>>,
    config: CatalogConfig,
}

impl CatalogStore {
    /// Read a catalog from text with the default settings.
    pub fn load(text: &str) -> Result<CatalogStore, ReadCatalogError> {
        let config = CatalogConfig::default();
        let catalog = parse_catalog_str(text, config.name_matching)?;
        Ok(Self::new(catalog, config))
    }

    /// Read a catalog from text.
    pub fn load_with_config(
        text: &str,
        config: CatalogConfig,
    ) -> Result<CatalogStore, FluxcalError> {
        config.validate()?;
        let catalog = parse_catalog_str(text, config.name_matching)?;
        Ok(Self::new(catalog, config))
    }

    /// Read a catalog file.
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        config: CatalogConfig,
    ) -> Result<CatalogStore, FluxcalError> {
        config.validate()?;
        let catalog = read_catalog_file(path, config.name_matching)?;
        Ok(Self::new(catalog, config))
    }

    /// Wrap an existing catalog. The catalog's name matching takes precedence
    /// over the one in `config`, and is used for all later reloads.
    pub fn from_catalog(
        catalog: Catalog,
        config: CatalogConfig,
    ) -> Result<CatalogStore, ConfigError> {
        config.validate()?;
        Ok(Self::new(catalog, config))
    }

    fn new(catalog: Catalog, mut config: CatalogConfig) -> CatalogStore {
        if config.name_matching != catalog.name_matching() {
            debug!(
                "Catalog uses {} name matching; ignoring configured {}",
                catalog.name_matching(),
                config.name_matching
            );
            config.name_matching = catalog.name_matching();
        }
        log_loaded(&catalog, "Loaded");
        CatalogStore {
            active: RwLock::new(Arc::new(catalog)),
            config,
        }
    }

    /// Get the active catalog. The returned catalog is unaffected by any
    /// later reloads.
    pub fn snapshot(&self) -> Arc<Catalog> {
        // A poisoned lock still holds a complete catalog; the lock only
        // guards swapping the pointer.
        match self.active.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Replace the active catalog with one read from text. If reading fails,
    /// the active catalog is untouched.
    pub fn reload(&self, text: &str) -> Result<(), ReadCatalogError> {
        let catalog = parse_catalog_str(text, self.config.name_matching)?;
        self.swap(catalog);
        Ok(())
    }

    /// Replace the active catalog with one read from a file. If reading
    /// fails, the active catalog is untouched.
    pub fn reload_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ReadCatalogError> {
        let catalog = read_catalog_file(path, self.config.name_matching)?;
        self.swap(catalog);
        Ok(())
    }

    fn swap(&self, catalog: Catalog) {
        log_loaded(&catalog, "Reloaded");
        let new = Arc::new(catalog);
        match self.active.write() {
            Ok(mut guard) => *guard = new,
            Err(poisoned) => *poisoned.into_inner() = new,
        }
    }

    /// Find a calibrator by any of its names in the active catalog.
    pub fn resolve(&self, name: &str) -> Result<CalibratorRecord, LookupError> {
        self.snapshot().resolve(name).cloned()
    }

    /// Get all of the aliases of a calibrator in the active catalog.
    pub fn aliases_of(&self, name: &str) -> Result<IndexSet<String>, LookupError> {
        self.snapshot().aliases_of(name).cloned()
    }

    /// Estimate the flux density \[Jy\] of a calibrator in the active catalog
    /// at a frequency \[MHz\].
    pub fn flux_at(&self, name: &str, freq_mhz: f64) -> Result<f64, FluxcalError> {
        let catalog = self.snapshot();
        let record = catalog.resolve(name)?;
        let fd = record.flux_at_with_warning(freq_mhz, self.config.extrapolation_warning_decades)?;
        Ok(fd)
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }
}

fn log_loaded(catalog: &Catalog, verb: &str) {
    let counts = catalog.get_counts();
    info!(
        "{verb} calibrator catalog: {} calibrators ({} single-point, {} polynomial), {} aliases",
        catalog.len(),
        counts.num_single_points,
        counts.num_polynomials,
        counts.num_aliases
    );
}
