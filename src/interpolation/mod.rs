mod interpolation_method;
mod interpolation_table;

pub use interpolation_method::InterpolationMethod;
pub use interpolation_table::InterpolationTable;

use crate::error::Result;

// Interpolate a tabulated cross section onto `energy` with the method named
// by `method` ("log-log" or "linear-linear"). An unknown method fails before
// any computation is done.
pub fn interp_xs(table: &InterpolationTable, energy: &[f64], method: &str) -> Result<Vec<f64>> {
    let method = InterpolationMethod::parse(method)?;
    table.interpolate_onto(energy, method)
}
