//! The uniform bit source consumed by every sampler.

use crate::constants::DOUBLE_MULTIPLIER;

/// A stream of independent, uniformly distributed 64-bit words.
///
/// Every sampler draws only through this trait, so the same sequence of
/// words always produces the same sequence of variates.
pub trait UniformSource {
    fn next_word(&mut self) -> u64;

    /// Uniform double in `[0, 1)` from the upper 53 bits of one word.
    #[inline]
    fn next_unit(&mut self) -> f64 {
        (self.next_word() >> 11) as f64 * DOUBLE_MULTIPLIER
    }
}

impl<R: rand::RngCore + ?Sized> UniformSource for R {
    #[inline]
    fn next_word(&mut self) -> u64 {
        self.next_u64()
    }
}
