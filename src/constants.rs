//=====================================================================
// Physical constants and photoatomic MT numbers.
//=====================================================================

// Avogadro's number, 1/mol (CODATA 2018, exact)
pub const AVOGADRO: f64 = 6.02214076e23;

// One barn in cm^2
pub const BARN_CM2: f64 = 1e-24;

// Photoatomic reaction identifiers (ENDF MF=23)
pub const MT_TOTAL: usize = 501;
pub const MT_COHERENT: usize = 502;
pub const MT_INCOHERENT: usize = 504;
pub const MT_PAIR_ELECTRON: usize = 515;
pub const MT_PAIR_TOTAL: usize = 516;
pub const MT_PAIR_NUCLEAR: usize = 517;
pub const MT_PHOTOELECTRIC: usize = 522;
pub const MT_HEATING: usize = 525;
pub const MT_SUBSHELL_FIRST: usize = 534;
pub const MT_SUBSHELL_LAST: usize = 572;
