//! McFarland's modified ziggurat.
//!
//! The low byte of the first word picks a layer. Below `i_max` the whole
//! word is the position inside a rectangle and the sample is returned after
//! one multiply. Otherwise a second word drives the alias table, which picks
//! the tail or one overhang in proportion to its exact area, and the
//! overhang is sampled by rejection inside its bounding box.

use crate::{
    constants::{MAX_INT64, TWO_POW_63_WORD},
    sampler::Overhangs,
    source::UniformSource,
    tables::ModifiedTables,
};

/// Uniform integer in `[0, 2^63)`.
#[inline]
fn r63<S: UniformSource + ?Sized>(src: &mut S) -> i64 {
    (src.next_word() & MAX_INT64) as i64
}

/// One standard exponential variate.
pub(crate) fn exponential<S: UniformSource + ?Sized>(
    src: &mut S,
    t: &ModifiedTables,
    overhangs: Overhangs,
) -> f64 {
    // The tail beyond x_0 is itself exponential, so each tail hit shifts a
    // fresh sample by x_0.
    let mut tail_hits = 0u32;
    let x = loop {
        let w = src.next_word();
        let i = (w as usize) & t.index_mask();
        if i < t.i_max() {
            break t.x()[i] * (w & MAX_INT64) as f64;
        }
        let j = t.alias().select(src.next_word());
        debug_assert!(j <= t.i_max(), "alias selected empty slot {}", j);
        if j == 0 {
            tail_hits += 1;
            continue;
        }
        break match overhangs {
            Overhangs::Optimized => exponential_overhang(src, t, j),
            Overhangs::Simple => exponential_overhang_simple(src, t, j),
        };
    };
    (0..tail_hits).fold(x, |acc, _| t.x_0() + acc)
}

/// Convex overhang: sample the lower-left triangle by reflection. Points
/// further than `min_ie` below the diagonal are always under the curve.
fn exponential_overhang<S: UniformSource + ?Sized>(src: &mut S, t: &ModifiedTables, j: usize) -> f64 {
    let kernel = t.kernel();
    loop {
        let mut ux = r63(src);
        let mut dist = r63(src) - ux;
        if dist < 0 {
            dist = -dist;
            ux -= dist;
        }
        let x = t.overhang_x(j, ux);
        if dist >= t.min_ie() {
            return x;
        }
        if t.overhang_y(j, TWO_POW_63_WORD - (ux + dist) as u64) <= kernel.pdf(x) {
            return x;
        }
    }
}

fn exponential_overhang_simple<S: UniformSource + ?Sized>(src: &mut S, t: &ModifiedTables, j: usize) -> f64 {
    let kernel = t.kernel();
    loop {
        let x = t.overhang_x(j, r63(src));
        if t.overhang_y(j, r63(src) as u64) <= kernel.pdf(x) {
            return x;
        }
    }
}

/// One standard normal variate.
///
/// `tail` holds the exponential tables used to sample beyond `x_0`.
pub(crate) fn gaussian<S: UniformSource + ?Sized>(
    src: &mut S,
    t: &ModifiedTables,
    tail: &ModifiedTables,
    overhangs: Overhangs,
) -> f64 {
    let w = src.next_word();
    let i = (w as usize) & t.index_mask();
    if i < t.i_max() {
        return t.x()[i] * (w as i64) as f64;
    }

    // Bits 0..8 chose the layer; bit 8 becomes the sign and the low 63 bits
    // the first abscissa.
    let u1 = (w & MAX_INT64) as i64;
    let sign = ((w >> 7) & 2) as f64 - 1.0;
    let j = t.alias().select(src.next_word());
    debug_assert!(j <= t.i_max(), "alias selected empty slot {}", j);

    let x = if j == 0 {
        gaussian_tail(src, t, tail)
    } else {
        match overhangs {
            Overhangs::Optimized => gaussian_overhang(src, t, j, u1),
            Overhangs::Simple => gaussian_box(src, t, j, u1),
        }
    };
    sign * x
}

/// Marsaglia's tail method driven by exponential variates.
fn gaussian_tail<S: UniformSource + ?Sized>(src: &mut S, t: &ModifiedTables, tail: &ModifiedTables) -> f64 {
    let x = loop {
        let x = t.one_over_x_0() * exponential(src, tail, Overhangs::Optimized);
        if exponential(src, tail, Overhangs::Optimized) >= 0.5 * x * x {
            break x;
        }
    };
    t.x_0() + x
}

fn gaussian_overhang<S: UniformSource + ?Sized>(src: &mut S, t: &ModifiedTables, j: usize, mut u1: i64) -> f64 {
    let kernel = t.kernel();
    let ji = t.j_inflection().unwrap_or(usize::MAX);

    if j > ji {
        // Concave: everything below the diagonal is accepted outright, and
        // nothing further than max_ie above it can be.
        loop {
            let x = t.overhang_x(j, u1);
            let dist = r63(src) - u1;
            if dist >= 0 {
                return x;
            }
            if dist >= t.max_ie()
                && t.overhang_y(j, TWO_POW_63_WORD - (u1 + dist) as u64) < kernel.pdf(x)
            {
                return x;
            }
            u1 = r63(src);
        }
    } else if j < ji {
        // Convex: reflect into the lower-left triangle.
        loop {
            let mut dist = r63(src) - u1;
            if dist < 0 {
                dist = -dist;
                u1 -= dist;
            }
            let x = t.overhang_x(j, u1);
            if dist > t.min_ie()
                || t.overhang_y(j, TWO_POW_63_WORD - (u1 + dist) as u64) < kernel.pdf(x)
            {
                return x;
            }
            u1 = r63(src);
        }
    } else {
        gaussian_box(src, t, j, u1)
    }
}

/// Rejection against the whole bounding box of overhang `j`.
fn gaussian_box<S: UniformSource + ?Sized>(src: &mut S, t: &ModifiedTables, j: usize, mut u1: i64) -> f64 {
    let kernel = t.kernel();
    loop {
        let x = t.overhang_x(j, u1);
        if t.overhang_y(j, r63(src) as u64) < kernel.pdf(x) {
            return x;
        }
        u1 = r63(src);
    }
}
