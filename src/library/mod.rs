mod binary_format;
#[cfg(feature = "hdf5")]
mod hdf5_format;
mod source;
mod xs_library;

pub use binary_format::{GroupEntry, LibraryMmap, LibraryWriter, TableEntry};
pub use source::{CrossSectionSource, InMemoryLibrary};
pub use xs_library::XsLibrary;
