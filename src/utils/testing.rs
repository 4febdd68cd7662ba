//=====================================================================
// Utility functions to aid in accelerating testing
//=====================================================================

use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;

use lazy_static::lazy_static;
use tempfile::TempDir;

use crate::library::{LibraryWriter, XsLibrary};
use crate::material::{FractionType, Isotope, Material};

// The test library is written once into a temporary directory and
// shared by all tests. The directory lives as long as the process.
lazy_static! {
    pub static ref TEST_LIBRARY: Mutex<Option<(TempDir, PathBuf)>> = Mutex::new(None);
}

// A small photoatomic library:
//    - Z=1:  MT 501, 522
//    - Z=8:  MT 501, 502, 504, 522
//    - Z=26: MT 501, 522 (with a K edge, and a zero photoelectric value)
fn build_test_library() -> LibraryWriter {
    let mut writer = LibraryWriter::new();
    let decades = vec![1.0e3, 1.0e4, 1.0e5, 1.0e6];
    let edge = vec![1.0e3, 7.112e3, 7.112e3, 1.0e5, 1.0e6];

    writer
        .add_table(1, 501, vec![1.0e4, 1.0e6], vec![10.0, 1.0]).unwrap()
        .add_table(1, 522, decades.clone(), vec![5.0, 5.0e-3, 5.0e-6, 5.0e-9]).unwrap()
        .add_table(8, 501, decades.clone(), vec![1.1e5, 1.5e2, 2.6, 1.2]).unwrap()
        .add_table(8, 502, vec![1.0e3, 1.0e5, 1.0e6], vec![30.0, 0.15, 1.6e-3]).unwrap()
        .add_table(8, 504, vec![1.0e3, 1.0e5, 1.0e6], vec![1.5, 3.5, 2.2]).unwrap()
        .add_table(8, 522, decades.clone(), vec![1.1e5, 140.0, 0.06, 5.0e-4]).unwrap()
        .add_table(26, 501, edge.clone(), vec![8.5e5, 4.6e3, 3.5e4, 34.0, 6.2]).unwrap()
        .add_table(26, 522, edge[..4].to_vec(), vec![8.4e5, 4.4e3, 3.4e4, 0.0]).unwrap();
    writer
}

pub fn get_test_library() -> XsLibrary {
    let mut library = TEST_LIBRARY.lock().unwrap();

    // Only write the library if it has not been written yet
    if library.is_none() {
        let start = Instant::now();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photoatomic_xs.xsl");
        build_test_library().write(&path).unwrap();
        println!("⚛️  Time to write test library ⚛️ : {:?}", start.elapsed());
        *library = Some((dir, path));
    }
    // Otherwise, reuse the library already on disk
    XsLibrary::new(library.as_ref().unwrap().1.clone())
}

pub fn hydrogen() -> Material {
    let mut material = Material::new(FractionType::Atomic);
    material.set_name("hydrogen");
    material.add_isotope(Isotope::new("H1", 1, 1.008).unwrap(), 1.0).unwrap();
    material.set_density(1.0).unwrap();
    material
}

pub fn water() -> Material {
    let mut material = Material::new(FractionType::Atomic);
    material.set_name("water");
    material.add_isotope(Isotope::new("H1", 1, 1.008).unwrap(), 2.0).unwrap();
    material.add_isotope(Isotope::new("O16", 8, 15.995).unwrap(), 1.0).unwrap();
    material.set_density(1.0).unwrap();
    material
}

pub fn iron() -> Material {
    let mut material = Material::new(FractionType::Mass);
    material.set_name("iron");
    material.add_isotope(Isotope::new("Fe56", 26, 55.845).unwrap(), 1.0).unwrap();
    material.set_density(7.874).unwrap();
    material
}
