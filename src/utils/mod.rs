mod helper_functions;
#[cfg(test)]
pub mod testing;

pub use helper_functions::{parse_group_key, reaction_type_from_MT};
