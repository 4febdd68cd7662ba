use crate::error::{Result, XsError};

//=====================================================================
// An isotope (or a natural element treated as one) in a material.
// Cross sections are looked up by its atomic number; its atomic mass
// (g/mol) converts per-atom cross sections to per-gram quantities.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct Isotope {
    pub name: String,
    pub z: usize,
    pub atomic_mass: f64,
}

impl Isotope {
    pub fn new(name: impl Into<String>, z: usize, atomic_mass: f64) -> Result<Self> {
        let name = name.into();
        if z == 0 {
            return Err(XsError::InvalidMaterial(format!("{}: atomic number must be at least 1", name)));
        }
        if !(atomic_mass > 0.0) || !atomic_mass.is_finite() {
            return Err(XsError::InvalidMaterial(format!(
                "{}: atomic mass must be positive and finite, got {}",
                name, atomic_mass
            )));
        }
        Ok(Self { name, z, atomic_mass })
    }
}

impl std::fmt::Display for Isotope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (Z={}, {} g/mol)", self.name, self.z, self.atomic_mass)
    }
}
