use std::collections::BTreeSet;

use strum_macros::{Display, EnumString};

use crate::error::{Result, XsError};
use crate::material::Isotope;

// How the fractions of a material's components are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum FractionType {
    #[strum(serialize = "atomic")]
    Atomic,
    #[strum(serialize = "mass")]
    Mass,
}

// One isotope of a material and its fraction.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub isotope: Isotope,
    pub fraction: f64,
}

//=====================================================================
// A material: isotopes with fractions of a single FractionType, and an
// optional density in g/cm³. Components keep the order they were added
// in. Adding an isotope whose name is already present replaces its
// fraction.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    name: Option<String>,
    components: Vec<Component>,
    fraction_type: FractionType,
    density: Option<f64>,
}

impl Material {
    // Create an empty material whose fractions are of `fraction_type`.
    pub fn new(fraction_type: FractionType) -> Self {
        Self {
            name: None,
            components: Vec::new(),
            fraction_type,
            density: None,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    // Add an isotope, or replace the fraction of one with the same name.
    pub fn add_isotope(&mut self, isotope: Isotope, fraction: f64) -> Result<()> {
        if !(fraction >= 0.0) || !fraction.is_finite() {
            return Err(XsError::InvalidMaterial(format!(
                "fraction of {} must be non-negative and finite, got {}",
                isotope.name, fraction
            )));
        }
        match self.components.iter_mut().find(|c| c.isotope.name == isotope.name) {
            Some(component) => {
                component.isotope = isotope;
                component.fraction = fraction;
            }
            None => self.components.push(Component { isotope, fraction }),
        }
        Ok(())
    }

    // Set the density in g/cm³.
    pub fn set_density(&mut self, density: f64) -> Result<()> {
        if !(density > 0.0) || !density.is_finite() {
            return Err(XsError::InvalidMaterial(format!(
                "density must be positive and finite, got {}",
                density
            )));
        }
        self.density = Some(density);
        Ok(())
    }

    // Density in g/cm³, if one has been set.
    pub fn density(&self) -> Option<f64> {
        self.density
    }

    pub fn fraction_type(&self) -> FractionType {
        self.fraction_type
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    // The distinct atomic numbers present, in ascending order.
    pub fn atomic_numbers(&self) -> Vec<usize> {
        self.components
            .iter()
            .map(|c| c.isotope.z)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    // Return a copy of this material with its fractions re-expressed as
    // `kind` and normalised to sum to one. Converting to the current kind
    // only normalises, so the operation is idempotent.
    pub fn update_fraction_type(&self, kind: FractionType) -> Result<Material> {
        let weights: Vec<f64> = self
            .components
            .iter()
            .map(|c| match (self.fraction_type, kind) {
                (FractionType::Mass, FractionType::Atomic) => c.fraction / c.isotope.atomic_mass,
                (FractionType::Atomic, FractionType::Mass) => c.fraction * c.isotope.atomic_mass,
                _ => c.fraction,
            })
            .collect();

        let total: f64 = weights.iter().sum();
        if !self.components.is_empty() && !(total > 0.0) {
            return Err(XsError::InvalidMaterial(
                "fractions sum to zero, cannot normalise".to_string(),
            ));
        }

        let components = self
            .components
            .iter()
            .zip(weights)
            .map(|(c, weight)| Component {
                isotope: c.isotope.clone(),
                fraction: weight / total,
            })
            .collect();

        Ok(Material {
            name: self.name.clone(),
            components,
            fraction_type: kind,
            density: self.density,
        })
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Material({}, {} isotopes, {} fractions)",
            self.name.as_deref().unwrap_or("unnamed"),
            self.components.len(),
            self.fraction_type
        )
    }
}
