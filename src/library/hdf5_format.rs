// HDF5 photoatomic libraries: one group per element named by the decimal
// Z, holding an integer `MT` dataset and one sub-group per reaction with
// `energy` and `xs` datasets.

use std::collections::BTreeMap;
use std::path::Path;

use hdf5::{File, Group};

use crate::api::{CrossSectionTable, LibraryIndex};
use crate::error::{Result, XsError};

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| XsError::store_unavailable(path, e))
}

fn element_group(path: &Path, file: &File, z: usize) -> Result<Option<Group>> {
    let name = z.to_string();
    if !file.link_exists(&name) {
        return Ok(None);
    }
    Ok(Some(file.group(&name).map_err(|e| XsError::store_unavailable(path, e))?))
}

fn read_f64_dataset(group: &Group, name: &str) -> std::result::Result<Vec<f64>, hdf5::Error> {
    group.dataset(name)?.read_raw::<f64>()
}

pub fn get_xs(path: &Path, z_list: &[usize], mt_list: &[usize]) -> Result<LibraryIndex> {
    let file = open(path)?;
    let mut data = LibraryIndex::new();

    for &z in z_list {
        // Skip missing elements
        let Some(group) = element_group(path, &file, z)? else { continue };
        let tables = data.entry(z).or_default();

        for &mt in mt_list {
            let name = mt.to_string();
            // Skip missing reactions
            if !group.link_exists(&name) {
                continue;
            }
            let reaction = group.group(&name).map_err(|e| XsError::store_unavailable(path, e))?;
            let energy = read_f64_dataset(&reaction, "energy").map_err(|e| XsError::store_unavailable(path, e))?;
            let xs = read_f64_dataset(&reaction, "xs").map_err(|e| XsError::store_unavailable(path, e))?;
            let table = CrossSectionTable::new(z, mt, energy, xs).map_err(|e| XsError::store_unavailable(path, e))?;
            tables.insert(mt, table);
        }
    }
    Ok(data)
}

pub fn get_MT(path: &Path, z_list: &[usize]) -> Result<BTreeMap<usize, Vec<usize>>> {
    let file = open(path)?;
    let mut mt_map = BTreeMap::new();

    for &z in z_list {
        // Skip missing elements instead of raising
        let Some(group) = element_group(path, &file, z)? else { continue };
        let mts = group
            .dataset("MT")
            .and_then(|dataset| dataset.read_raw::<i64>())
            .map_err(|e| XsError::store_unavailable(path, e))?;
        let mts = mts
            .into_iter()
            .map(|mt| usize::try_from(mt).map_err(|_| XsError::store_unavailable(path, format!("negative MT {} for Z={}", mt, z))))
            .collect::<Result<Vec<_>>>()?;
        mt_map.insert(z, mts);
    }
    Ok(mt_map)
}
