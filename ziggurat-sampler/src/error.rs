//! Error types for table construction and variant selection.

use thiserror::Error;

/// Failure to build a set of ziggurat tables.
///
/// These are configuration errors: they are reported once, when a table set
/// is built, and never by the sampling path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    /// The layer count must be a power of two so that the index is a bit mask.
    #[error("layer count {0} is not a power of two of at least 2")]
    LayerCount(usize),

    /// A byte map cannot address more than 256 layers.
    #[error("byte alias map cannot address {layers} layers")]
    ByteMapOverflow { layers: usize },

    /// A construction parameter was non-finite or out of range.
    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// The tail start does not bound a base rectangle of the required area.
    #[error("tail start {x_0} gives base area {area}, expected {expected}")]
    TailMismatch { x_0: f64, area: f64, expected: f64 },

    /// The layer recurrence produced a non-finite or non-decreasing width.
    #[error("layer recurrence degenerated at layer {layer}")]
    Degenerate { layer: usize },

    /// An alias weight was negative or not finite.
    #[error("alias weight at index {index} is {weight}")]
    InvalidWeight { index: usize, weight: f64 },

    /// The alias weights sum to zero.
    #[error("alias weights have no mass")]
    ZeroMass,

    /// A precomputed table does not have the length its companions imply.
    #[error("{name} has {len} entries, expected {expected}")]
    Length {
        name: &'static str,
        len: usize,
        expected: usize,
    },

    /// An alias map entry points outside the table.
    #[error("alias map entry {index} targets slot {target}")]
    AliasTarget { index: usize, target: usize },
}

/// Unknown name passed to [`Variant::from_str`](crate::Variant).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown ziggurat variant: {0}")]
pub struct ParseVariantError(pub String);
