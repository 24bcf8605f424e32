//! Constants for the ziggurat tables and the bit-level sampling protocol

/// Number of entries addressed by the low byte of a random word.
pub const ZIGGURAT_TABLE_SIZE: usize = 256;

/// 2^63 as a double; the scale between table entries and real coordinates.
pub const TWO_POW_63: f64 = 9223372036854775808.0;
/// 2^64 as a double.
pub const TWO_POW_64: f64 = 18446744073709551616.0;
/// 2^63 as an unsigned word. Used as the value `1` of a 63-bit uniform.
pub const TWO_POW_63_WORD: u64 = 1 << 63;
/// Mask producing a non-negative 63-bit value from a word.
pub const MAX_INT64: u64 = 0x7fff_ffff_ffff_ffff;
/// Converts the upper 53 bits of a word to a double in [0, 1).
pub const DOUBLE_MULTIPLIER: f64 = 1.0 / 9007199254740992.0;

// Marsaglia-Tsang normal distribution, 128 strips
pub const ZIGGURAT_NOR_128_R: f64 = 3.442619855899;
pub const NOR_128_SECTION_AREA: f64 = 9.91256303526217e-3;

// Marsaglia-Tsang normal distribution, 256 strips
pub const ZIGGURAT_NOR_R: f64 = 3.6541528853610088;
pub const NOR_SECTION_AREA: f64 = 0.00492867323399;

// Marsaglia-Tsang exponential distribution, 256 strips
pub const ZIGGURAT_EXP_R: f64 = 7.69711747013104972;
pub const EXP_SECTION_AREA: f64 = 0.0039496598225815571993;

// McFarland modified ziggurat, beginning of the tail
pub const MODIFIED_NOR_X_0: f64 = 3.6360066255009455861;
pub const MODIFIED_EXP_X_0: f64 = 7.569274694148063;
