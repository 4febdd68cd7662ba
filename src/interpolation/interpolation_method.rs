use strum_macros::{Display, EnumIter, EnumString};

use crate::error::{Result, XsError};

//=====================================================================
// Interpolation methods supported for tabulated cross sections.
//
// The string forms are the ones accepted by `interp_xs` and
// `AttenuationOptions::new`; anything else is an InvalidMethod error.
//=====================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
pub enum InterpolationMethod {
    // Linear in ln(E) / ln(xs), the usual treatment for photoatomic data
    #[default]
    #[strum(serialize = "log-log")]
    LogLog,
    #[strum(serialize = "linear-linear")]
    LinLin,
}

impl InterpolationMethod {
    pub fn parse(method: &str) -> Result<Self> {
        method
            .parse::<Self>()
            .map_err(|_| XsError::InvalidMethod(method.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", InterpolationMethod::LogLog), "log-log");
        assert_eq!(format!("{}", InterpolationMethod::LinLin), "linear-linear");
    }

    #[test]
    fn test_parse_round_trips_display() {
        for method in InterpolationMethod::iter() {
            assert_eq!(InterpolationMethod::parse(&method.to_string()).unwrap(), method);
        }
    }

    #[test]
    fn test_default_is_log_log() {
        assert_eq!(InterpolationMethod::default(), InterpolationMethod::LogLog);
    }

    #[test]
    fn test_reject_unknown_methods() {
        for bad in ["cubic", "Log-Log", "loglog", "", "linear"] {
            match InterpolationMethod::parse(bad) {
                Err(XsError::InvalidMethod(name)) => assert_eq!(name, bad),
                other => panic!("expected InvalidMethod for '{}', got {:?}", bad, other),
            }
        }
    }
}
