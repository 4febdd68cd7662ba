// Configuration for locating the photoatomic cross section library
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use strum_macros::Display;

// Environment variable holding the library path
pub const LIBRARY_PATH_ENV: &str = "ATOMXS_LIBRARY";

// Library shipped alongside the crate, used when the environment variable is not set
pub const DEFAULT_LIBRARY_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/library/photoatomic_xs.xsl");

// On-disk format of a cross section library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StoreFormat {
    // Memory-mapped XSL binary library
    #[strum(serialize = "xsl")]
    Binary,
    // HDF5 library, readable when the `hdf5` feature is enabled
    #[strum(serialize = "hdf5")]
    Hdf5,
}

impl StoreFormat {
    // Infer the format from a file extension; anything that is not `.h5` /
    // `.hdf5` is treated as an XSL binary library.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("h5") || ext.eq_ignore_ascii_case("hdf5") => StoreFormat::Hdf5,
            _ => StoreFormat::Binary,
        }
    }
}

// Where the cross section library lives and how to read it.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryConfig {
    pub library_path: PathBuf,
    pub format: StoreFormat,
}

impl LibraryConfig {
    // Configuration for an explicit library path, format inferred from the extension.
    pub fn new<P: Into<PathBuf>>(library_path: P) -> Self {
        let library_path = library_path.into();
        let format = StoreFormat::from_path(&library_path);
        Self { library_path, format }
    }

    // Read the library path from `ATOMXS_LIBRARY`, falling back to the
    // library bundled with the crate.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var_os(LIBRARY_PATH_ENV))
    }

    fn from_env_value(value: Option<OsString>) -> Self {
        match value {
            Some(path) if !path.is_empty() => Self::new(path),
            _ => Self::new(DEFAULT_LIBRARY_PATH),
        }
    }

    // Override the inferred format.
    pub fn with_format(mut self, format: StoreFormat) -> Self {
        self.format = format;
        self
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(StoreFormat::from_path("data/photoatomic_xs.h5"), StoreFormat::Hdf5);
        assert_eq!(StoreFormat::from_path("data/photoatomic_xs.HDF5"), StoreFormat::Hdf5);
        assert_eq!(StoreFormat::from_path("data/photoatomic_xs.xsl"), StoreFormat::Binary);
        assert_eq!(StoreFormat::from_path("data/photoatomic_xs"), StoreFormat::Binary);
    }

    #[test]
    fn test_env_value_overrides_default() {
        let config = LibraryConfig::from_env_value(Some(OsString::from("/tmp/eprdata14.h5")));
        assert_eq!(config.library_path, PathBuf::from("/tmp/eprdata14.h5"));
        assert_eq!(config.format, StoreFormat::Hdf5);
    }

    #[test]
    fn test_default_library_path() {
        for value in [None, Some(OsString::new())] {
            let config = LibraryConfig::from_env_value(value);
            assert_eq!(config.library_path, PathBuf::from(DEFAULT_LIBRARY_PATH));
            assert_eq!(config.format, StoreFormat::Binary);
        }
    }

    #[test]
    fn test_with_format() {
        let config = LibraryConfig::new("photoatomic.dat").with_format(StoreFormat::Hdf5);
        assert_eq!(config.format, StoreFormat::Hdf5);
        assert_eq!(format!("{}", config.format), "hdf5");
    }
}
