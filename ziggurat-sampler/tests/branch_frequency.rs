mod common;

use common::CountingSource;
use rand::{SeedableRng, rngs::StdRng};
use ziggurat_sampler::{Variant, ZigguratSampler, tables};

const SAMPLES: usize = 100_000;

/// Fraction of samples that consumed exactly one word.
fn single_word_fraction(variant: Variant, seed: u64) -> f64 {
    let mut rng = ZigguratSampler::new(CountingSource::new(StdRng::seed_from_u64(seed)), variant);
    let mut single = 0usize;
    for _ in 0..SAMPLES {
        let before = rng.source_mut().count;
        rng.sample();
        if rng.source_mut().count - before == 1 {
            single += 1;
        }
    }
    single as f64 / SAMPLES as f64
}

#[test]
fn test_low_byte_sweep() {
    // Every low byte is equally likely, so this is the exact fast-path rate
    let fast = |i_max: usize| (0..256usize).filter(|&i| i < i_max).count() as f64 / 256.0;
    assert_eq!(fast(tables::MOD_GAUSSIAN.i_max()), 0.98828125);
    assert_eq!(fast(tables::MOD_EXPONENTIAL.i_max()), 0.984375);
}

#[test]
fn test_modified_fast_path_dominates() {
    let gaussian = single_word_fraction(Variant::ModGaussian, 1);
    assert!(gaussian >= 0.985, "ModGaussian fast path {}", gaussian);
    let exponential = single_word_fraction(Variant::ModExponential, 2);
    assert!(exponential >= 0.98, "ModExponential fast path {}", exponential);
}

#[test]
fn test_classic_fast_path_rates() {
    for (variant, expected) in [
        (Variant::Gaussian128, 0.97244),
        (Variant::Gaussian256, 0.98508),
        (Variant::Exponential, 0.97778),
    ] {
        let rate = single_word_fraction(variant, 3);
        assert!(
            (rate - expected).abs() < 0.003,
            "{}: fast path {} expected {}",
            variant,
            rate,
            expected
        );
    }
}

#[test]
fn test_word_cost_per_sample() {
    // The slow paths are rare enough that the average stays close to one word
    for variant in Variant::ALL {
        let mut rng = ZigguratSampler::new(CountingSource::new(StdRng::seed_from_u64(4)), variant);
        for _ in 0..SAMPLES {
            rng.sample();
        }
        let per_sample = rng.into_source().count as f64 / SAMPLES as f64;
        assert!(per_sample < 1.1, "{}: {} words per sample", variant, per_sample);
    }
}
