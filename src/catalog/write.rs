// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Writing flux-calibrator catalogs.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use itertools::Itertools;
use log::debug;

use super::{error::WriteCatalogError, Catalog, FluxModel};
use crate::{
    constants::{ALIAS_KEYWORD, POLYNOMIAL_MARKER, SINGLE_POINT_MARKER},
    sexagesimal::{degrees_to_sexagesimal_colon_dms, degrees_to_sexagesimal_colon_hms},
};

/// Write a [`Catalog`] to a file, which can be read back in with
/// [`crate::catalog::read_catalog_file`].
pub fn write_catalog_file<P: AsRef<Path>>(
    path: P,
    catalog: &Catalog,
) -> Result<(), WriteCatalogError> {
    fn inner(path: &Path, catalog: &Catalog) -> Result<(), WriteCatalogError> {
        debug!("Writing calibrator catalog to {}", path.display());
        let mut f = BufWriter::new(File::create(path)?);
        write_catalog(&mut f, catalog)?;
        f.flush()?;
        Ok(())
    }
    inner(path.as_ref(), catalog)
}

/// Write a [`Catalog`] to a buffer. Right ascensions are written as
/// "hours:minutes:seconds" and declinations as "degrees:minutes:seconds",
/// each to 1e-4 seconds.
pub fn write_catalog<T: Write>(buf: &mut T, catalog: &Catalog) -> Result<(), WriteCatalogError> {
    let counts = catalog.get_counts();
    writeln!(
        buf,
        "# {} calibrators: {} single-point, {} polynomial",
        catalog.len(),
        counts.num_single_points,
        counts.num_polynomials
    )?;

    for record in catalog.iter() {
        for name in record.names() {
            check_name(&record.name, name)?;
        }

        let ra = degrees_to_sexagesimal_colon_hms(record.radec.ra);
        let dec = degrees_to_sexagesimal_colon_dms(record.radec.dec);
        match &record.flux_model {
            FluxModel::SinglePoint {
                freq_mhz,
                flux_jy,
                spectral_index,
            } => writeln!(
                buf,
                "{SINGLE_POINT_MARKER} {} {ra} {dec} {freq_mhz} {flux_jy} {spectral_index}",
                record.name
            )?,

            FluxModel::Polynomial { coeffs } => writeln!(
                buf,
                "{POLYNOMIAL_MARKER} {} {ra} {dec} {}",
                record.name,
                coeffs.iter().join(" ")
            )?,
        }

        for alias in record.aliases() {
            writeln!(buf, "{ALIAS_KEYWORD} {alias}")?;
        }
    }

    Ok(())
}

/// Names are whitespace-delimited in catalogs, so they can't be empty or
/// contain whitespace.
fn check_name(calibrator: &str, name: &str) -> Result<(), WriteCatalogError> {
    if name.is_empty() {
        return Err(WriteCatalogError::EmptyName {
            calibrator: calibrator.to_string(),
        });
    }
    if name.contains(char::is_whitespace) {
        return Err(WriteCatalogError::NameWithWhitespace {
            calibrator: calibrator.to_string(),
            name: name.to_string(),
        });
    }
    Ok(())
}
