use crate::error::{Result, XsError};
use crate::interpolation::InterpolationMethod;

//=====================================================================
// A single-region 1-D interpolation table.
//
// x values are expected to be increasing (repeated points are allowed,
// photoatomic data repeats the energy at absorption edges). The table
// never extrapolates: querying outside [min(x), max(x)] is an error.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationTable {
    name: String,
    x: Vec<f64>,
    y: Vec<f64>,
}

impl InterpolationTable {
    pub fn from_x_and_y(name: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        let name = name.into();
        if x.len() != y.len() {
            return Err(XsError::InvalidTable {
                reason: format!("x ({}) and y ({}) vectors must be of the same length", x.len(), y.len()),
                table: name,
            });
        }
        if x.len() < 2 {
            return Err(XsError::InvalidTable {
                reason: format!("at least 2 points are required, got {}", x.len()),
                table: name,
            });
        }
        Ok(Self { name, x, y })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    // Smallest and largest tabulated x
    pub fn bounds(&self) -> (f64, f64) {
        self.x
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| (lo.min(x), hi.max(x)))
    }

    // Interpolate a single value from the table
    pub fn interpolate(&self, x_val: f64, method: InterpolationMethod) -> Result<f64> {
        self.check_method_domain(method)?;
        self.check_in_bounds(x_val, self.bounds())?;
        Ok(self.interpolate_unchecked(x_val, method))
    }

    // Interpolate the table onto a new grid. Every query is validated
    // before anything is evaluated, so an error never leaves partial output.
    pub fn interpolate_onto(&self, x_vals: &[f64], method: InterpolationMethod) -> Result<Vec<f64>> {
        self.check_method_domain(method)?;
        let bounds = self.bounds();
        for &x_val in x_vals {
            self.check_in_bounds(x_val, bounds)?;
        }
        Ok(x_vals
            .iter()
            .map(|&x_val| self.interpolate_unchecked(x_val, method))
            .collect())
    }

    // ln() of a non-positive value is undefined, so log-log needs strictly positive data
    fn check_method_domain(&self, method: InterpolationMethod) -> Result<()> {
        if method != InterpolationMethod::LogLog {
            return Ok(());
        }
        let non_positive = self
            .x
            .iter()
            .chain(self.y.iter())
            .enumerate()
            .find(|(_, value)| !(**value > 0.0));
        match non_positive {
            Some((i, &value)) => Err(XsError::NonPositiveValue {
                table: self.name.clone(),
                index: i % self.x.len(),
                value,
            }),
            None => Ok(()),
        }
    }

    fn check_in_bounds(&self, x_val: f64, (min, max): (f64, f64)) -> Result<()> {
        // NaN fails both comparisons and is rejected here as well
        if min <= x_val && x_val <= max {
            Ok(())
        } else {
            Err(XsError::OutOfRangeEnergy {
                table: self.name.clone(),
                energy: x_val,
                min,
                max,
            })
        }
    }

    fn interpolate_unchecked(&self, x_val: f64, method: InterpolationMethod) -> f64 {
        // Index of the first point with x >= x_val
        let idx = self.x.partition_point(|&x| x < x_val);

        // We are exactly on a data point, return the tabulated value
        if idx < self.x.len() && self.x[idx] == x_val {
            return self.y[idx];
        }

        // Otherwise x_val lies strictly inside the bin [idx - 1, idx]
        let idx = idx.clamp(1, self.x.len() - 1);
        let x0 = self.x[idx - 1];
        let x1 = self.x[idx];
        let y0 = self.y[idx - 1];
        let y1 = self.y[idx];

        match method {
            InterpolationMethod::LinLin => y0 + (y1 - y0) * (x_val - x0) / (x1 - x0),
            InterpolationMethod::LogLog => y0 * ((x_val / x0).ln() * (y1 / y0).ln() / (x1 / x0).ln()).exp(),
        }
    }
}

impl std::fmt::Display for InterpolationTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InterpolationTable({}, {} points)", self.name, self.len())
    }
}
