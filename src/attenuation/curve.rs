use std::ops::Index;

//=====================================================================
// An attenuation curve: one coefficient per energy of the grid that
// produced it, together with the (Z, MT) pairs that were requested
// but are not in the library and therefore contributed nothing.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct AttenuationCurve {
    energy: Vec<f64>,
    values: Vec<f64>,
    missing: Vec<MissingTable>,
}

// A requested reaction that the library does not have for an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MissingTable {
    pub z: usize,
    pub mt: usize,
}

impl AttenuationCurve {
    pub(crate) fn new(energy: Vec<f64>, values: Vec<f64>, missing: Vec<MissingTable>) -> Self {
        debug_assert_eq!(energy.len(), values.len());
        Self { energy, values, missing }
    }

    // Energy grid, eV
    pub fn energy(&self) -> &[f64] {
        &self.energy
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    pub fn missing(&self) -> &[MissingTable] {
        &self.missing
    }

    // True when every requested table was found in the library
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // (energy, value) pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.energy.iter().copied().zip(self.values.iter().copied())
    }

    // Multiply every value by `factor`, keeping the grid and coverage
    pub fn scaled(mut self, factor: f64) -> Self {
        for value in &mut self.values {
            *value *= factor;
        }
        self
    }
}

impl Index<usize> for AttenuationCurve {
    type Output = f64;
    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl std::fmt::Display for AttenuationCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AttenuationCurve({} energies", self.len())?;
        if !self.missing.is_empty() {
            write!(f, ", {} missing tables", self.missing.len())?;
        }
        write!(f, ")")
    }
}
