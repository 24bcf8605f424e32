#![allow(dead_code)]

use rand::RngCore;

/// Replays a fixed list of words, then zeros forever.
pub struct SequenceSource {
    words: Vec<u64>,
    pos: usize,
}

impl SequenceSource {
    pub fn new(words: &[u64]) -> Self {
        Self {
            words: words.to_vec(),
            pos: 0,
        }
    }

    /// Words handed out so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }
}

impl RngCore for SequenceSource {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        let w = self.words.get(self.pos).copied().unwrap_or(0);
        self.pos += 1;
        w
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// Counts the words drawn from the wrapped generator.
pub struct CountingSource<R> {
    inner: R,
    pub count: u64,
}

impl<R> CountingSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, count: 0 }
    }
}

impl<R: RngCore> RngCore for CountingSource<R> {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.count += 1;
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// Standard normal distribution function.
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * libm::erfc(-x * std::f64::consts::FRAC_1_SQRT_2)
}

/// Standard exponential distribution function.
pub fn exponential_cdf(x: f64) -> f64 {
    if x <= 0.0 { 0.0 } else { -libm::expm1(-x) }
}

/// Pearson's statistic for `samples` binned at `edges` (ascending), with
/// open-ended first and last bins.
pub fn chi_square(samples: &[f64], edges: &[f64], cdf: impl Fn(f64) -> f64) -> f64 {
    let mut observed = vec![0u64; edges.len() + 1];
    for &s in samples {
        let k = edges.partition_point(|&e| e <= s);
        observed[k] += 1;
    }

    let mut bounds = vec![0.0];
    bounds.extend(edges.iter().map(|&e| cdf(e)));
    bounds.push(1.0);

    let n = samples.len() as f64;
    observed
        .iter()
        .zip(bounds.windows(2))
        .map(|(&o, p)| {
            let expected = n * (p[1] - p[0]);
            let d = o as f64 - expected;
            d * d / expected
        })
        .sum()
}

/// Bin edges `-3, -2.75, ..., 3`: 26 bins, 25 degrees of freedom.
pub fn normal_edges() -> Vec<f64> {
    (0..25).map(|k| -3.0 + 0.25 * k as f64).collect()
}

/// Bin edges `0.25, 0.5, ..., 5`: 21 bins, 20 degrees of freedom.
pub fn exponential_edges() -> Vec<f64> {
    (1..=20).map(|k| 0.25 * k as f64).collect()
}

/// 99th percentile of chi-square with 25 degrees of freedom.
pub const CHI2_25_CRIT: f64 = 44.314;
/// 99th percentile of chi-square with 20 degrees of freedom.
pub const CHI2_20_CRIT: f64 = 37.566;
