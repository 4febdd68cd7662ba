use std::path::{Path, PathBuf};

use thiserror::Error;

//=====================================================================
// Errors produced while reading cross section libraries, interpolating
// tables and aggregating attenuation curves.
//
// A Z or (Z, MT) key that is absent from a library is not an error,
// those lookups are skipped. Everything below is a hard failure.
//=====================================================================
#[derive(Debug, Error)]
pub enum XsError {
    #[error("Invalid interpolation method '{0}', expected 'log-log' or 'linear-linear'")]
    InvalidMethod(String),

    #[error("Energy {energy} eV is outside the tabulated range [{min}, {max}] eV of {table}")]
    OutOfRangeEnergy {
        table: String,
        energy: f64,
        min: f64,
        max: f64,
    },

    #[error("{table} has a non-positive value ({value}) at index {index}, log-log interpolation is undefined")]
    NonPositiveValue {
        table: String,
        index: usize,
        value: f64,
    },

    #[error("Cross section library {path:?} is unavailable: {reason}")]
    StoreUnavailable { path: PathBuf, reason: String },

    #[error("Invalid table {table}: {reason}")]
    InvalidTable { table: String, reason: String },

    #[error("Invalid material: {0}")]
    InvalidMaterial(String),
}

pub type Result<T> = std::result::Result<T, XsError>;

impl XsError {
    pub(crate) fn store_unavailable<P: AsRef<Path>>(path: P, reason: impl ToString) -> Self {
        XsError::StoreUnavailable {
            path: path.as_ref().to_path_buf(),
            reason: reason.to_string(),
        }
    }
}
