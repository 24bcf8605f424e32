//! The sampling front end shared by every variant.

mod classic;
mod modified;

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    source::UniformSource,
    tables::{self, ClassicTables, ModifiedTables},
    variant::Variant,
};

/// How samples landing in an overhang are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overhangs {
    /// Triangle reflection with precomputed early-accept and early-reject
    /// bounds.
    Optimized,
    /// Plain rejection against the overhang's bounding box.
    Simple,
}

/// A source of continuous variates.
pub trait ContinuousSampler {
    fn sample(&mut self) -> f64;

    /// Overwrite `out` with consecutive samples.
    fn fill(&mut self, out: &mut [f64]) {
        for v in out.iter_mut() {
            *v = self.sample();
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Engine {
    ClassicGaussian(&'static ClassicTables),
    ClassicExponential(&'static ClassicTables),
    ModifiedGaussian {
        normal: &'static ModifiedTables,
        tail: &'static ModifiedTables,
        overhangs: Overhangs,
    },
    ModifiedExponential {
        tables: &'static ModifiedTables,
        overhangs: Overhangs,
    },
}

impl Engine {
    fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Gaussian128 => Engine::ClassicGaussian(&tables::GAUSSIAN_128),
            Variant::Gaussian256 => Engine::ClassicGaussian(&tables::GAUSSIAN_256),
            Variant::Exponential => Engine::ClassicExponential(&tables::EXPONENTIAL),
            Variant::ModGaussian => Engine::ModifiedGaussian {
                normal: &tables::MOD_GAUSSIAN,
                tail: &tables::MOD_EXPONENTIAL,
                overhangs: Overhangs::Optimized,
            },
            Variant::ModGaussianSimpleOverhangs => Engine::ModifiedGaussian {
                normal: &tables::MOD_GAUSSIAN,
                tail: &tables::MOD_EXPONENTIAL,
                overhangs: Overhangs::Simple,
            },
            Variant::ModGaussianIntMap => Engine::ModifiedGaussian {
                normal: &tables::MOD_GAUSSIAN_INT_MAP,
                tail: &tables::MOD_EXPONENTIAL_INT_MAP,
                overhangs: Overhangs::Optimized,
            },
            Variant::ModExponential => Engine::ModifiedExponential {
                tables: &tables::MOD_EXPONENTIAL,
                overhangs: Overhangs::Optimized,
            },
            Variant::ModExponentialSimpleOverhangs => Engine::ModifiedExponential {
                tables: &tables::MOD_EXPONENTIAL,
                overhangs: Overhangs::Simple,
            },
            Variant::ModExponentialIntMap => Engine::ModifiedExponential {
                tables: &tables::MOD_EXPONENTIAL_INT_MAP,
                overhangs: Overhangs::Optimized,
            },
        }
    }
}

/// Ziggurat sampler for one [`Variant`], drawing words from `S`.
///
/// The tables are process-wide and built on first use; the sampler itself
/// only holds its source and a few references.
#[derive(Debug, Clone)]
pub struct ZigguratSampler<S> {
    rng: S,
    variant: Variant,
    engine: Engine,
}

impl<S: UniformSource> ZigguratSampler<S> {
    pub fn new(rng: S, variant: Variant) -> Self {
        Self {
            rng,
            variant,
            engine: Engine::for_variant(variant),
        }
    }

    /// Draw one variate.
    #[inline]
    pub fn sample(&mut self) -> f64 {
        let src = &mut self.rng;
        match self.engine {
            Engine::ClassicGaussian(t) => classic::gaussian(src, t),
            Engine::ClassicExponential(t) => classic::exponential(src, t),
            Engine::ModifiedGaussian {
                normal,
                tail,
                overhangs,
            } => modified::gaussian(src, normal, tail, overhangs),
            Engine::ModifiedExponential { tables, overhangs } => {
                modified::exponential(src, tables, overhangs)
            }
        }
    }

    /// Overwrite `out` with consecutive samples.
    pub fn fill(&mut self, out: &mut [f64]) {
        for v in out.iter_mut() {
            *v = self.sample();
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Same variant and tables, drawing from another source.
    pub fn with_source<T: UniformSource>(&self, rng: T) -> ZigguratSampler<T> {
        ZigguratSampler {
            rng,
            variant: self.variant,
            engine: self.engine,
        }
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.rng
    }

    pub fn into_source(self) -> S {
        self.rng
    }
}

impl ZigguratSampler<StdRng> {
    /// Sampler over a [`StdRng`] seeded from `seed`.
    pub fn seeded(variant: Variant, seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed), variant)
    }
}

impl Default for ZigguratSampler<StdRng> {
    fn default() -> Self {
        Self::seeded(Variant::ModGaussian, 17)
    }
}

impl<S: UniformSource> ContinuousSampler for ZigguratSampler<S> {
    #[inline]
    fn sample(&mut self) -> f64 {
        ZigguratSampler::sample(self)
    }

    fn fill(&mut self, out: &mut [f64]) {
        ZigguratSampler::fill(self, out)
    }
}
