use std::collections::BTreeMap;

use crate::api::LibraryIndex;
use crate::error::Result;

//=====================================================================
// Anything that can answer cross section lookups by (Z, MT).
//
// Lookups are lenient: a Z that is not in the source produces no
// entry, and an MT that is not available for a present Z is left out
// of that Z's map. Only a broken source is an error.
//=====================================================================
pub trait CrossSectionSource {
    // Tables for every requested (Z, MT) pair that exists
    fn get_xs(&self, z_list: &[usize], mt_list: &[usize]) -> Result<LibraryIndex>;

    // The MT numbers available for each requested Z that exists
    fn get_MT(&self, z_list: &[usize]) -> Result<BTreeMap<usize, Vec<usize>>>;
}

//=====================================================================
// A source held entirely in memory. Owned by the caller, useful for
// synthetic data or for tables assembled from several libraries.
//=====================================================================
#[derive(Debug, Clone, Default)]
pub struct InMemoryLibrary {
    data: LibraryIndex,
}

impl InMemoryLibrary {
    pub fn new(data: LibraryIndex) -> Self {
        Self { data }
    }

    pub fn insert(&mut self, table: crate::api::CrossSectionTable) -> &mut Self {
        self.data.entry(table.z()).or_default().insert(table.mt(), table);
        self
    }
}

impl CrossSectionSource for InMemoryLibrary {
    fn get_xs(&self, z_list: &[usize], mt_list: &[usize]) -> Result<LibraryIndex> {
        let mut data = LibraryIndex::new();
        for &z in z_list {
            let Some(available) = self.data.get(&z) else { continue };
            let tables = data.entry(z).or_default();
            for &mt in mt_list {
                if let Some(table) = available.get(&mt) {
                    tables.insert(mt, table.clone());
                }
            }
        }
        Ok(data)
    }

    fn get_MT(&self, z_list: &[usize]) -> Result<BTreeMap<usize, Vec<usize>>> {
        Ok(z_list
            .iter()
            .filter_map(|&z| self.data.get(&z).map(|tables| (z, tables.keys().copied().collect())))
            .collect())
    }
}
