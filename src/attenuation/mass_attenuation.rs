use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::api::LibraryIndex;
use crate::attenuation::{AttenuationCurve, MissingTable};
use crate::constants::{AVOGADRO, BARN_CM2, MT_TOTAL};
use crate::error::{Result, XsError};
use crate::interpolation::InterpolationMethod;
use crate::library::CrossSectionSource;
use crate::material::{FractionType, Material};

//=====================================================================
// Options for an attenuation calculation: which reactions to sum and
// how to interpolate them. Defaults to the total photon interaction
// cross section (MT 501) with log-log interpolation.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct AttenuationOptions {
    pub mt_list: Vec<usize>,
    pub method: InterpolationMethod,
}

impl Default for AttenuationOptions {
    fn default() -> Self {
        Self {
            mt_list: vec![MT_TOTAL],
            method: InterpolationMethod::LogLog,
        }
    }
}

impl AttenuationOptions {
    pub fn new(mt_list: impl Into<Vec<usize>>, method: &str) -> Result<Self> {
        Ok(Self {
            mt_list: mt_list.into(),
            method: InterpolationMethod::parse(method)?,
        })
    }
}

// Mass attenuation coefficient of a material, cm^2/g, on `energy_grid` (eV).
//
// The cross sections of every requested reaction are summed per element
// and weighted by the atomic fraction of each isotope. Reactions the
// library does not have contribute zero and are listed in the result's
// `missing()`. Any interpolation error aborts the whole calculation.
pub fn mass_attenuation<S: CrossSectionSource + ?Sized>(
    source: &S,
    material: &Material,
    energy_grid: &[f64],
    options: &AttenuationOptions,
) -> Result<AttenuationCurve> {
    let z_list = material.atomic_numbers();
    tracing::debug!(
        elements = z_list.len(),
        energies = energy_grid.len(),
        mt_list = ?options.mt_list,
        method = %options.method,
        "computing mass attenuation"
    );

    let tables = source.get_xs(&z_list, &options.mt_list)?;
    let (element_xs, missing) = element_cross_sections(&tables, &z_list, energy_grid, options)?;
    for table in &missing {
        tracing::warn!(z = table.z, mt = table.mt, "cross section not in library, treated as zero");
    }

    // Weighting is by number of atoms
    let material_atomic = material.update_fraction_type(FractionType::Atomic)?;

    let mut mu_over_rho = vec![0.0; energy_grid.len()];
    for component in material_atomic.components() {
        let Some(mu_el) = element_xs.get(&component.isotope.z) else { continue };
        // barn/atom -> cm^2/g
        let scale = AVOGADRO * BARN_CM2 / component.isotope.atomic_mass;
        for (mu, xs) in mu_over_rho.iter_mut().zip(mu_el) {
            *mu += component.fraction * xs * scale;
        }
    }

    Ok(AttenuationCurve::new(energy_grid.to_vec(), mu_over_rho, missing))
}

// Linear attenuation coefficient (macroscopic cross section) of a material,
// cm^-1: the mass attenuation coefficient times the material density.
pub fn attenuation_coeff<S: CrossSectionSource + ?Sized>(
    source: &S,
    material: &Material,
    energy_grid: &[f64],
    options: &AttenuationOptions,
) -> Result<AttenuationCurve> {
    let density = material.density().ok_or_else(|| {
        XsError::InvalidMaterial("a density is required for the attenuation coefficient".to_string())
    })?;
    Ok(mass_attenuation(source, material, energy_grid, options)?.scaled(density))
}

// Interpolate every requested reaction of every element onto the grid and
// sum over reactions, giving one cross section curve (barns) per Z.
fn element_cross_sections(
    tables: &LibraryIndex,
    z_list: &[usize],
    energy_grid: &[f64],
    options: &AttenuationOptions,
) -> Result<(BTreeMap<usize, Vec<f64>>, Vec<MissingTable>)> {
    let per_element = z_list
        .par_iter()
        .map(|&z| -> Result<(usize, Vec<f64>, Vec<MissingTable>)> {
            let mut xs_sum = vec![0.0; energy_grid.len()];
            let mut missing = Vec::new();
            for &mt in &options.mt_list {
                match tables.get(&z).and_then(|reactions| reactions.get(&mt)) {
                    Some(table) => {
                        let values = table.interpolate_onto(energy_grid, options.method)?;
                        for (sum, value) in xs_sum.iter_mut().zip(values) {
                            *sum += value;
                        }
                    }
                    None => missing.push(MissingTable { z, mt }),
                }
            }
            Ok((z, xs_sum, missing))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut element_xs = BTreeMap::new();
    let mut missing = Vec::new();
    for (z, xs_sum, element_missing) in per_element {
        element_xs.insert(z, xs_sum);
        missing.extend(element_missing);
    }
    Ok((element_xs, missing))
}
