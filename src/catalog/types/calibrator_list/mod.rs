// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code surrounding the [`IndexMap`] used to contain all calibrators and the
//! index used to find them by name or alias.


use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};

use super::{CalibratorRecord, FluxModel};
use crate::{
    catalog::{DuplicateNameError, LookupError},
    config::NameMatching,
    radec::RADec,
};

/// An [`IndexMap`] of canonical calibrator names for keys and
/// [`CalibratorRecord`]s for values, plus an index of every name and alias.
///
/// Once built, a [`Catalog`] is never modified; a new catalog is read to
/// replace it instead.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: IndexMap<String, CalibratorRecord>,

    /// Every canonical name and alias, folded with `name_matching`, pointing
    /// at the index of its record.
    names: HashMap<String, usize>,

    name_matching: NameMatching,
}

impl Catalog {
    /// Create an empty [`Catalog`].
    pub(crate) fn new(name_matching: NameMatching) -> Self {
        Self {
            name_matching,
            ..Self::default()
        }
    }

    /// Build a [`Catalog`] from fully-formed records. Names and aliases must
    /// be unique across all records under `name_matching`. Aliases repeating
    /// a name of their own record are dropped.
    pub fn from_records<I: IntoIterator<Item = CalibratorRecord>>(
        records: I,
        name_matching: NameMatching,
    ) -> Result<Catalog, DuplicateNameError> {
        let mut catalog = Catalog::new(name_matching);
        for record in records {
            let CalibratorRecord {
                name,
                radec,
                flux_model,
                aliases,
            } = record;
            let index = catalog.insert_record(name, radec, flux_model)?;
            for alias in aliases {
                catalog.add_alias(index, alias)?;
            }
        }
        Ok(catalog)
    }

    /// Add a new record without any aliases, returning its index.
    pub(crate) fn insert_record(
        &mut self,
        name: String,
        radec: RADec,
        flux_model: FluxModel,
    ) -> Result<usize, DuplicateNameError> {
        let key = self.name_matching.key(&name);
        if let Some(&existing) = self.names.get(&key) {
            return Err(DuplicateNameError {
                name,
                existing: self.name_at(existing),
            });
        }

        let (index, _) = self.records.insert_full(
            name.clone(),
            CalibratorRecord {
                name,
                radec,
                flux_model,
                aliases: IndexSet::new(),
            },
        );
        self.names.insert(key, index);
        Ok(index)
    }

    /// Add an alias to the record at `index`. `Ok(false)` is returned if the
    /// alias is already a name of that same record.
    pub(crate) fn add_alias(
        &mut self,
        index: usize,
        alias: String,
    ) -> Result<bool, DuplicateNameError> {
        let key = self.name_matching.key(&alias);
        match self.names.get(&key).copied() {
            Some(existing) if existing == index => Ok(false),
            Some(existing) => Err(DuplicateNameError {
                name: alias,
                existing: self.name_at(existing),
            }),
            None => {
                self.names.insert(key, index);
                // The index was handed out by `insert_record`.
                if let Some((_, record)) = self.records.get_index_mut(index) {
                    record.aliases.insert(alias);
                }
                Ok(true)
            }
        }
    }

    fn name_at(&self, index: usize) -> String {
        self.records
            .get_index(index)
            .map(|(name, _)| name.clone())
            .unwrap_or_default()
    }

    /// Find a calibrator by its canonical name or any of its aliases.
    pub fn get(&self, name: &str) -> Option<&CalibratorRecord> {
        self.names
            .get(&self.name_matching.key(name))
            .and_then(|&index| self.records.get_index(index))
            .map(|(_, record)| record)
    }

    /// Find a calibrator by its canonical name or any of its aliases, or
    /// complain that it isn't in the catalog.
    pub fn resolve(&self, name: &str) -> Result<&CalibratorRecord, LookupError> {
        self.get(name).ok_or_else(|| LookupError::NotFound {
            name: name.to_string(),
        })
    }

    /// Get the canonical name of a calibrator given any of its names.
    pub fn canonical_name(&self, name: &str) -> Result<&str, LookupError> {
        self.resolve(name).map(|record| record.name.as_str())
    }

    /// Get all of the aliases of a calibrator given any of its names.
    pub fn aliases_of(&self, name: &str) -> Result<&IndexSet<String>, LookupError> {
        self.resolve(name).map(|record| record.aliases())
    }

    /// Find the calibrator closest to `radec` that is no further than
    /// `max_separation_deg` away. The separation \[degrees\] is also returned.
    pub fn nearest(
        &self,
        radec: &RADec,
        max_separation_deg: f64,
    ) -> Option<(&CalibratorRecord, f64)> {
        self.records
            .values()
            .map(|record| (record, record.radec.separation(radec)))
            .filter(|(_, sep)| *sep <= max_separation_deg)
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
    }

    /// Iterate over all calibrators in the order they were read.
    pub fn iter(&self) -> impl Iterator<Item = &CalibratorRecord> {
        self.records.values()
    }

    /// The number of calibrators (not counting aliases).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn name_matching(&self) -> NameMatching {
        self.name_matching
    }

    /// Get counts of each of the flux-model types and aliases.
    pub fn get_counts(&self) -> CatalogCounts {
        let mut counts = CatalogCounts::default();
        for record in self.iter() {
            match record.flux_model {
                FluxModel::SinglePoint { .. } => counts.num_single_points += 1,
                FluxModel::Polynomial { .. } => counts.num_polynomials += 1,
            }
            counts.num_aliases += record.aliases.len();
        }
        counts
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CalibratorRecord;
    type IntoIter = indexmap::map::Values<'a, String, CalibratorRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CatalogCounts {
    pub num_single_points: usize,
    pub num_polynomials: usize,
    pub num_aliases: usize,
}
