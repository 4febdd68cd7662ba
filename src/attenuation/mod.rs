mod curve;
mod mass_attenuation;

pub use curve::{AttenuationCurve, MissingTable};
pub use mass_attenuation::{AttenuationOptions, attenuation_coeff, mass_attenuation};
