use std::collections::BTreeMap;
use std::ops::Deref;

use crate::error::Result;
use crate::interpolation::InterpolationTable;
use crate::utils::reaction_type_from_MT;

//=====================================================================
// A tabulated photoatomic cross section for one element (Z) and one
// reaction (MT). Energies are in eV, values in barns.
//
// The table is immutable once built and derefs to its underlying
// InterpolationTable for interpolation.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct CrossSectionTable {
    z: usize,
    mt: usize,
    table: InterpolationTable,
}

// Nested Z -> MT -> table mapping returned by a library lookup
pub type LibraryIndex = BTreeMap<usize, BTreeMap<usize, CrossSectionTable>>;

impl Deref for CrossSectionTable {
    type Target = InterpolationTable;
    fn deref(&self) -> &Self::Target {
        &self.table
    }
}

impl CrossSectionTable {
    pub fn new(z: usize, mt: usize, energy: Vec<f64>, xs: Vec<f64>) -> Result<Self> {
        let table = InterpolationTable::from_x_and_y(Self::label_for(z, mt), energy, xs)?;
        Ok(Self { z, mt, table })
    }

    pub fn label_for(z: usize, mt: usize) -> String {
        format!("Z{}_MT{}", z, mt)
    }

    pub fn z(&self) -> usize {
        self.z
    }

    pub fn mt(&self) -> usize {
        self.mt
    }

    pub fn energy(&self) -> &[f64] {
        self.table.x()
    }

    pub fn xs(&self) -> &[f64] {
        self.table.y()
    }
}

impl std::fmt::Display for CrossSectionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CrossSection(Z={} MT={} {}, {} points)",
            self.z,
            self.mt,
            reaction_type_from_MT(self.mt),
            self.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::XsError;
    use crate::interpolation::InterpolationMethod;

    #[test]
    fn test_cross_section_creation() {
        let energies = vec![1.0e3, 1.0e4, 1.0e5];
        let sigmas = vec![30.0, 3.0, 0.3];
        let xs = CrossSectionTable::new(8, 502, energies.clone(), sigmas.clone()).unwrap();
        assert_eq!(xs.z(), 8);
        assert_eq!(xs.mt(), 502);
        assert_eq!(xs.energy(), energies.as_slice());
        assert_eq!(xs.xs(), sigmas.as_slice());
        assert_eq!(xs.name(), "Z8_MT502");
    }

    #[test]
    fn test_cross_section_interpolation() {
        let xs = CrossSectionTable::new(1, 501, vec![1.0, 2.0, 3.0], vec![0.1, 0.2, 0.3]).unwrap();

        assert_abs_diff_eq!(xs.interpolate(1.5, InterpolationMethod::LinLin).unwrap(), 0.15, epsilon = 1e-12);
        assert_abs_diff_eq!(xs.interpolate(2.5, InterpolationMethod::LinLin).unwrap(), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_cross_section_length_mismatch() {
        match CrossSectionTable::new(1, 501, vec![1.0, 2.0, 3.0], vec![0.1, 0.2]) {
            Err(XsError::InvalidTable { table, .. }) => assert_eq!(table, "Z1_MT501"),
            other => panic!("expected InvalidTable, got {:?}", other),
        }
    }

    #[test]
    fn test_display() {
        let xs = CrossSectionTable::new(1, 522, vec![1.0, 2.0], vec![2.0, 1.0]).unwrap();
        assert_eq!(format!("{}", xs), "CrossSection(Z=1 MT=522 Photoelectric absorption, 2 points)");
    }
}
