use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::api::LibraryIndex;
use crate::config::{LibraryConfig, StoreFormat};
use crate::error::Result;
use crate::library::CrossSectionSource;
use crate::library::binary_format::LibraryMmap;

//=====================================================================
// File-backed cross section library.
//
// Only the location is kept between calls. Every lookup opens the
// file read-only, reads what it needs and releases the handle before
// returning, on success and on error alike.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct XsLibrary {
    path: PathBuf,
    format: StoreFormat,
}

impl XsLibrary {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self::from_config(&LibraryConfig::new(path))
    }

    pub fn from_config(config: &LibraryConfig) -> Self {
        Self {
            path: config.library_path.clone(),
            format: config.format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> StoreFormat {
        self.format
    }
}

impl CrossSectionSource for XsLibrary {
    fn get_xs(&self, z_list: &[usize], mt_list: &[usize]) -> Result<LibraryIndex> {
        tracing::debug!(path = %self.path.display(), ?z_list, ?mt_list, "reading cross sections");
        let data = match self.format {
            StoreFormat::Binary => LibraryMmap::open(&self.path)?.get_xs(z_list, mt_list)?,
            StoreFormat::Hdf5 => hdf5_backend::get_xs(&self.path, z_list, mt_list)?,
        };
        let num_tables: usize = data.values().map(|tables| tables.len()).sum();
        tracing::debug!(elements = data.len(), tables = num_tables, "read cross sections");
        Ok(data)
    }

    fn get_MT(&self, z_list: &[usize]) -> Result<BTreeMap<usize, Vec<usize>>> {
        match self.format {
            StoreFormat::Binary => Ok(LibraryMmap::open(&self.path)?.get_MT(z_list)),
            StoreFormat::Hdf5 => hdf5_backend::get_MT(&self.path, z_list),
        }
    }
}

#[cfg(feature = "hdf5")]
use crate::library::hdf5_format as hdf5_backend;

#[cfg(not(feature = "hdf5"))]
mod hdf5_backend {
    use std::collections::BTreeMap;
    use std::path::Path;

    use crate::api::LibraryIndex;
    use crate::error::{Result, XsError};

    const REASON: &str = "HDF5 libraries require the `hdf5` feature";

    pub fn get_xs(path: &Path, _z_list: &[usize], _mt_list: &[usize]) -> Result<LibraryIndex> {
        Err(XsError::store_unavailable(path, REASON))
    }

    pub fn get_MT(path: &Path, _z_list: &[usize]) -> Result<BTreeMap<usize, Vec<usize>>> {
        Err(XsError::store_unavailable(path, REASON))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::XsError;
    use crate::utils::testing::get_test_library;

    #[test]
    fn test_get_xs() {
        let library = get_test_library();
        let index = library.get_xs(&[1, 8], &[501, 522]).unwrap();

        assert_eq!(index.len(), 2);
        let hydrogen = &index[&1][&501];
        assert_eq!(hydrogen.energy(), &[1.0e4, 1.0e6]);
        assert_eq!(hydrogen.xs(), &[10.0, 1.0]);
        assert!(index[&8].contains_key(&522));
    }

    #[test]
    fn test_get_xs_skips_missing_mt() {
        let library = get_test_library();
        // Oxygen has no pair production table in the test library
        let index = library.get_xs(&[8], &[501, 516]).unwrap();
        assert_eq!(index[&8].keys().copied().collect::<Vec<_>>(), vec![501]);
    }

    #[test]
    fn test_get_xs_nonexistent_z() {
        let library = get_test_library();
        let index = library.get_xs(&[999999], &[501]).unwrap();
        assert!(index.get(&999999).is_none());
        assert!(index.is_empty());
    }

    #[test]
    fn test_get_MT() {
        let library = get_test_library();
        let mts = library.get_MT(&[1, 8, 999999]).unwrap();
        assert_eq!(mts.len(), 2);
        assert_eq!(mts[&1], vec![501, 522]);
        assert_eq!(mts[&8], vec![501, 502, 504, 522]);
    }

    #[test]
    fn test_missing_store_is_fatal() {
        let library = XsLibrary::new("/nonexistent/photoatomic_xs.xsl");
        assert!(matches!(library.get_xs(&[1], &[501]), Err(XsError::StoreUnavailable { .. })));
        assert!(matches!(library.get_MT(&[1]), Err(XsError::StoreUnavailable { .. })));
    }

    #[cfg(not(feature = "hdf5"))]
    #[test]
    fn test_hdf5_requires_feature() {
        let library = XsLibrary::new("photoatomic_xs.h5");
        assert_eq!(library.format(), StoreFormat::Hdf5);
        assert!(matches!(library.get_xs(&[1], &[501]), Err(XsError::StoreUnavailable { .. })));
    }

    // This test should only be run locally against a real library
    // turn this on with `cargo test --features local`
    #[cfg(feature = "local")]
    #[test]
    fn test_local_library() {
        let library = XsLibrary::from_config(&LibraryConfig::from_env());
        let mts = library.get_MT(&[1, 8, 82]).unwrap();
        assert!(mts.values().all(|mts| mts.contains(&crate::constants::MT_TOTAL)));
        let index = library.get_xs(&[82], &[crate::constants::MT_TOTAL]).unwrap();
        assert!(index[&82][&crate::constants::MT_TOTAL].len() >= 2);
    }
}
