#![allow(non_snake_case)]

//! Photon mass-attenuation and attenuation coefficients of materials,
//! computed from per-element photoatomic cross section libraries.

mod api;
mod attenuation;
mod config;
mod error;
mod interpolation;
mod library;
mod material;
mod utils;

pub mod constants;

pub use api::{CrossSectionTable, LibraryIndex};
pub use attenuation::{AttenuationCurve, AttenuationOptions, MissingTable, attenuation_coeff, mass_attenuation};
pub use config::{DEFAULT_LIBRARY_PATH, LIBRARY_PATH_ENV, LibraryConfig, StoreFormat};
pub use error::{Result, XsError};
pub use interpolation::{InterpolationMethod, InterpolationTable, interp_xs};
pub use library::{CrossSectionSource, GroupEntry, InMemoryLibrary, LibraryMmap, LibraryWriter, TableEntry, XsLibrary};
pub use material::{Component, FractionType, Isotope, Material};
pub use utils::reaction_type_from_MT;
