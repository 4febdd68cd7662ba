mod composition;
mod isotope;

pub use composition::{Component, FractionType, Material};
pub use isotope::Isotope;
