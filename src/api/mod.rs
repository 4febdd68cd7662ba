mod cross_section;

pub use cross_section::{CrossSectionTable, LibraryIndex};
