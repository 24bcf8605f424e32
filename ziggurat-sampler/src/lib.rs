//! # Ziggurat: Fast Normal and Exponential Variates
//!
//! Table-driven rejection samplers that turn a stream of uniform 64-bit words
//! into standard normal and standard exponential variates. Two families share
//! one front end:
//!
//! - Marsaglia and Tsang's ziggurat, with 128 or 256 equal-area strips;
//! - McFarland's modified ziggurat, whose rectangles lie entirely under the
//!   curve and whose overhangs are chosen by an alias table.
//!
//! ## Performance
//!
//! Nearly every sample costs one word, one table lookup and one multiply:
//! 253 of the 256 low-byte values take the fast path of the modified normal
//! sampler, 252 of the modified exponential. Overhangs are resolved by
//! rejection with precomputed bounds that settle most candidates without
//! evaluating the density.
//!
//! ## Reproducibility
//!
//! The output is a pure function of the words drawn from the
//! [`UniformSource`]. The modified variants run on McFarland's published
//! tables, compiled into the crate, so their streams match other
//! implementations built on the same constants. Tables are set up on first
//! use and shared by every sampler in the process.
//!
//! ```
//! use ziggurat_sampler::{Variant, ZigguratSampler};
//!
//! let mut a = ZigguratSampler::seeded(Variant::ModGaussian, 7);
//! let mut b = ZigguratSampler::seeded(Variant::ModGaussian, 7);
//! assert_eq!(a.sample(), b.sample());
//! ```

pub mod constants;
pub mod error;
pub mod kernel;
pub mod sampler;
pub mod source;
pub mod tables;
pub mod variant;

pub use error::{ParseVariantError, TableError};
pub use kernel::Kernel;
pub use sampler::{ContinuousSampler, Overhangs, ZigguratSampler};
pub use source::UniformSource;
pub use tables::{AliasTable, ClassicTables, MapLayout, ModifiedTables};
pub use variant::Variant;
