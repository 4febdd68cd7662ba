use crate::constants::*;

//====================================================================
// Assorted helper functions.
//====================================================================

// Human-readable name of a photoatomic reaction
pub fn reaction_type_from_MT(mt: usize) -> &'static str {
    match mt {
        MT_TOTAL => "Total photon interaction",
        MT_COHERENT => "Coherent scattering",
        MT_INCOHERENT => "Incoherent scattering",
        MT_PAIR_ELECTRON => "Pair production, electron field",
        MT_PAIR_TOTAL => "Pair production, total",
        MT_PAIR_NUCLEAR => "Pair production, nuclear field",
        MT_PHOTOELECTRIC => "Photoelectric absorption",
        MT_HEATING => "Heating",
        MT_SUBSHELL_FIRST..=MT_SUBSHELL_LAST => "Photoelectric subshell",
        _ => "Unknown reaction",
    }
}

// Parse a decimal group name ("26", padded or not) into an integer key
#[inline]
pub fn parse_group_key(name: &str) -> Option<usize> {
    name.trim().parse::<usize>().ok()
}
