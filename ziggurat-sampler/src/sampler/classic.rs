//! Marsaglia and Tsang's ziggurat.

use crate::{constants::DOUBLE_MULTIPLIER, source::UniformSource, tables::ClassicTables};

/// Uniform double in `(0, 1]`, safe to pass to `ln`.
#[inline]
fn nonzero_unit<S: UniformSource + ?Sized>(src: &mut S) -> f64 {
    ((src.next_word() >> 11) + 1) as f64 * DOUBLE_MULTIPLIER
}

/// One standard normal variate.
pub(crate) fn gaussian<S: UniformSource + ?Sized>(src: &mut S, t: &ClassicTables) -> f64 {
    let (k, w, f) = (t.k(), t.w(), t.f());
    loop {
        let j = src.next_word() as i64;
        let i = (j as usize) & t.mask();

        // Most of the time we return here on the first try
        if j.unsigned_abs() < k[i] {
            return j as f64 * w[i];
        }

        if i == 0 {
            // Tail: x = -ln(u_1)/r, y = -ln(u_2) until 2y >= x^2
            let x = loop {
                let y = -nonzero_unit(src).ln();
                let x = -nonzero_unit(src).ln() * t.one_over_r();
                if y + y >= x * x {
                    break x;
                }
            };
            let out = t.r() + x;
            return if j > 0 { out } else { -out };
        }

        let x = j as f64 * w[i];
        if f[i] + src.next_unit() * (f[i - 1] - f[i]) < t.kernel().pdf(x) {
            return x;
        }
    }
}

/// One standard exponential variate.
pub(crate) fn exponential<S: UniformSource + ?Sized>(src: &mut S, t: &ClassicTables) -> f64 {
    let (k, w, f) = (t.k(), t.w(), t.f());
    loop {
        let j = src.next_word() >> 1;
        let i = (j as usize) & t.mask();

        if j < k[i] {
            return j as f64 * w[i];
        }

        if i == 0 {
            return t.r() - nonzero_unit(src).ln();
        }

        let x = j as f64 * w[i];
        if f[i] + src.next_unit() * (f[i - 1] - f[i]) < t.kernel().pdf(x) {
            return x;
        }
    }
}
