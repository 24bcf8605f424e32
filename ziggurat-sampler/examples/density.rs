//! Histogram a large batch of variates against the exact mass of each bin.
//!
//! Prints `x observed expected` per bin, ready for plotting. Set `RUST_LOG=debug`
//! to see the tables being built.

use clap::{Parser, builder::RangedU64ValueParser};
use std::f64::consts::FRAC_1_SQRT_2;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use ziggurat_sampler::{Kernel, Variant, ZigguratSampler};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Sampler to run
    #[arg(short, long, default_value_t = Variant::ModGaussian)]
    variant: Variant,

    /// Number of variates to draw
    #[arg(
        short,
        long,
        default_value_t = 10_000_000,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    samples: usize,

    /// Number of histogram bins
    #[arg(
        short,
        long,
        default_value_t = 100,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    bins: usize,

    /// Seed for the uniform source
    #[arg(long, default_value_t = 17)]
    seed: u64,
}

/// Cumulative distribution of the standard variate drawn by `kernel`.
fn cdf(kernel: Kernel, x: f64) -> f64 {
    match kernel {
        Kernel::Gaussian => 0.5 * libm::erfc(-x * FRAC_1_SQRT_2),
        Kernel::Exponential if x <= 0.0 => 0.0,
        Kernel::Exponential => -libm::expm1(-x),
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let kernel = args.variant.kernel();
    let mut rng = ZigguratSampler::seeded(args.variant, args.seed);

    let mut variate = vec![0.0f64; args.samples];
    rng.fill(&mut variate);

    let (minv, maxv) = variate
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let binwidth = (maxv - minv) / args.bins as f64;
    tracing::info!(variant = %args.variant, samples = args.samples, minv, maxv, "sampled");

    let mut bin = vec![0usize; args.bins];
    for &v in &variate {
        let j = ((v - minv) / binwidth).floor() as usize;
        // guard against the max edge
        bin[j.min(args.bins - 1)] += 1;
    }

    let n = args.samples as f64;
    for (i, &count) in bin.iter().enumerate() {
        let lo = minv + binwidth * i as f64;
        let expected = n * (cdf(kernel, lo + binwidth) - cdf(kernel, lo));
        println!("{} {} {:.1}", lo + 0.5 * binwidth, count, expected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_histogram() {
        assert!(Args::try_parse_from(["density", "--bins", "0"]).is_err());
        assert!(Args::try_parse_from(["density", "--samples", "0"]).is_err());
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["density", "--bins", "1"]).unwrap();
        assert_eq!(args.bins, 1);
        assert_eq!(args.samples, 10_000_000);
        assert_eq!(args.variant, Variant::ModGaussian);
    }
}
