mod common;

use common::*;
use rand::{SeedableRng, rngs::StdRng};
use ziggurat_sampler::{Kernel, Variant, ZigguratSampler, tables};

const TRIALS: usize = 50;
const SAMPLES: usize = 10_000;
const MAX_FAILURES: usize = 3;

fn chi_square_failures(variant: Variant, seed: u64) -> usize {
    let mut rng = ZigguratSampler::seeded(variant, seed);
    let mut samples = vec![0.0; SAMPLES];
    let (edges, crit, cdf) = match variant.kernel() {
        Kernel::Gaussian => (normal_edges(), CHI2_25_CRIT, normal_cdf as fn(f64) -> f64),
        Kernel::Exponential => (exponential_edges(), CHI2_20_CRIT, exponential_cdf as fn(f64) -> f64),
    };
    (0..TRIALS)
        .filter(|_| {
            rng.fill(&mut samples);
            chi_square(&samples, &edges, cdf) > crit
        })
        .count()
}

#[test]
fn test_chi_square_every_variant() {
    for (seed, variant) in Variant::ALL.into_iter().enumerate() {
        let failures = chi_square_failures(variant, 1000 + seed as u64);
        assert!(
            failures <= MAX_FAILURES,
            "{}: {} of {} trials failed at the 1% level",
            variant,
            failures,
            TRIALS
        );
    }
}

#[test]
fn test_mixed_sources_are_still_normal() {
    // One sampler handed several independent sources in turn
    let base = ZigguratSampler::seeded(Variant::ModGaussian, 0);
    let mut samples = Vec::with_capacity(SAMPLES);
    for seed in 0..10 {
        let mut rng = base.with_source(StdRng::seed_from_u64(seed));
        for _ in 0..SAMPLES / 10 {
            samples.push(rng.sample());
        }
    }
    let stat = chi_square(&samples, &normal_edges(), normal_cdf);
    assert!(stat < 2.0 * CHI2_25_CRIT, "chi-square {}", stat);
}

#[test]
fn test_modified_tail_frequency() {
    // P(|Z| > x_0) = 2.77e-4 for the normal, e^-x_0 = 5.16e-4 for the exponential
    let n = 1_000_000;
    for (variant, x_0) in [
        (Variant::ModGaussian, tables::MOD_GAUSSIAN.x_0()),
        (Variant::ModExponential, tables::MOD_EXPONENTIAL.x_0()),
    ] {
        let kernel = variant.kernel();
        let p = kernel.tail_mass(x_0) / kernel.mass();
        let mut rng = ZigguratSampler::seeded(variant, 99);
        let hits = (0..n).filter(|_| rng.sample().abs() > x_0).count() as f64;
        let expected = n as f64 * p;
        let sd = (expected * (1.0 - p)).sqrt();
        assert!(
            (hits - expected).abs() < 5.0 * sd,
            "{}: {} tail samples, expected {:.1}",
            variant,
            hits,
            expected
        );
    }
}

#[test]
fn test_signs_are_balanced() {
    let n = 200_000;
    for variant in Variant::ALL.into_iter().filter(|v| v.is_symmetric()) {
        let mut rng = ZigguratSampler::seeded(variant, 5);
        let positive = (0..n).filter(|_| rng.sample() > 0.0).count() as f64;
        // 5 standard deviations of a fair coin
        let sd = (n as f64 * 0.25).sqrt();
        assert!(
            (positive - n as f64 / 2.0).abs() < 5.0 * sd,
            "{}: {} positive of {}",
            variant,
            positive,
            n
        );
    }
}
