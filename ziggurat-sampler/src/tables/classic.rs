//! Marsaglia and Tsang ziggurat tables.
//!
//! Strip 0 is the base strip (rectangle plus tail) and strip `N - 1` the
//! widest rectangle; the narrowest strip, capped by `f(0)`, is strip 1. Every
//! strip, overhang included, has area `v`. Widths are scaled by `2^-63` so a
//! random integer multiplies straight onto the layer.

use crate::{constants::TWO_POW_63, error::TableError, kernel::Kernel};

/// Fast-accept thresholds, widths and density values of a classic ziggurat.
#[derive(Debug, Clone)]
pub struct ClassicTables {
    kernel: Kernel,
    r: f64,
    one_over_r: f64,
    v: f64,
    last: usize,
    k: Box<[u64]>,
    w: Box<[f64]>,
    f: Box<[f64]>,
}

impl ClassicTables {
    /// Run the strip recurrence for `n` strips of area `v` with the tail
    /// starting at `r`.
    pub fn build(kernel: Kernel, n: usize, r: f64, v: f64) -> Result<Self, TableError> {
        if n < 2 || !n.is_power_of_two() {
            return Err(TableError::LayerCount(n));
        }
        if !r.is_finite() || r <= 0.0 {
            return Err(TableError::InvalidParameter { name: "r", value: r });
        }
        if !v.is_finite() || v <= 0.0 {
            return Err(TableError::InvalidParameter { name: "v", value: v });
        }

        let last = n - 1;
        let one_over_max = 1.0 / TWO_POW_63;
        let mut k = vec![0u64; n];
        let mut w = vec![0.0f64; n];
        let mut f = vec![0.0f64; n];

        let mut d = r;
        let mut t = d;
        let mut fd = kernel.pdf(d);
        // Pseudo-width of the base strip
        let q = v / fd;

        k[0] = ((d / q) * TWO_POW_63) as u64;
        k[1] = 0;
        w[0] = q * one_over_max;
        w[last] = d * one_over_max;
        f[0] = 1.0;
        f[last] = fd;

        for i in (1..last).rev() {
            d = kernel.inverse_pdf(v / d + fd);
            if !d.is_finite() || d <= 0.0 || d >= t {
                return Err(TableError::Degenerate { layer: i });
            }
            fd = kernel.pdf(d);

            k[i + 1] = ((d / t) * TWO_POW_63) as u64;
            t = d;

            f[i] = fd;
            w[i] = d * one_over_max;
        }

        tracing::debug!(
            ?kernel,
            layers = n,
            r,
            v,
            top_width = w[1] * TWO_POW_63,
            "built classic ziggurat tables"
        );

        Ok(Self {
            kernel,
            r,
            one_over_r: 1.0 / r,
            v,
            last,
            k: k.into_boxed_slice(),
            w: w.into_boxed_slice(),
            f: f.into_boxed_slice(),
        })
    }

    #[inline]
    pub fn kernel(&self) -> Kernel {
        self.kernel
    }

    /// Start of the tail.
    #[inline]
    pub fn r(&self) -> f64 {
        self.r
    }

    #[inline]
    pub fn one_over_r(&self) -> f64 {
        self.one_over_r
    }

    /// Area of every strip.
    #[inline]
    pub fn v(&self) -> f64 {
        self.v
    }

    /// Mask selecting a strip from the low bits of a word.
    #[inline]
    pub fn mask(&self) -> usize {
        self.last
    }

    /// Fast-accept thresholds on the 63-bit magnitude.
    #[inline]
    pub fn k(&self) -> &[u64] {
        &self.k
    }

    /// Strip widths scaled by `2^-63`.
    #[inline]
    pub fn w(&self) -> &[f64] {
        &self.w
    }

    /// Kernel value at each strip's outer edge.
    #[inline]
    pub fn f(&self) -> &[f64] {
        &self.f
    }

    /// Strip boundaries from the tail start inward, ending at 0.
    pub fn boundaries(&self) -> Vec<f64> {
        let mut xs: Vec<f64> = (1..=self.last)
            .rev()
            .map(|i| self.w[i] * TWO_POW_63)
            .collect();
        xs.push(0.0);
        xs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use approx::assert_relative_eq;

    fn published() -> [(Kernel, usize, f64, f64); 3] {
        [
            (Kernel::Gaussian, 128, ZIGGURAT_NOR_128_R, NOR_128_SECTION_AREA),
            (Kernel::Gaussian, 256, ZIGGURAT_NOR_R, NOR_SECTION_AREA),
            (Kernel::Exponential, 256, ZIGGURAT_EXP_R, EXP_SECTION_AREA),
        ]
    }

    #[test]
    fn test_boundaries_monotone() {
        for (kernel, n, r, v) in published() {
            let t = ClassicTables::build(kernel, n, r, v).unwrap();
            let xs = t.boundaries();
            assert_eq!(xs.len(), n);
            assert_eq!(xs[0], r);
            assert_eq!(xs[n - 1], 0.0);
            for pair in xs.windows(2) {
                assert!(pair[0] > pair[1], "boundaries not decreasing: {:?}", pair);
            }
            let ys: Vec<f64> = xs.iter().map(|&x| kernel.pdf(x)).collect();
            for pair in ys.windows(2) {
                assert!(pair[0] < pair[1]);
            }
        }
    }

    #[test]
    fn test_mask_addresses_every_strip() {
        for (kernel, n, r, v) in published() {
            let t = ClassicTables::build(kernel, n, r, v).unwrap();
            assert_eq!(t.mask(), n - 1);
            assert_eq!(t.k().len(), n);
            assert_eq!(t.w().len(), n);
            assert_eq!(t.f().len(), n);
        }
    }

    #[test]
    fn test_base_and_top_strip_areas() {
        for (kernel, n, r, v) in published() {
            let t = ClassicTables::build(kernel, n, r, v).unwrap();
            let base = r * kernel.pdf(r) + kernel.tail_mass(r);
            assert_relative_eq!(base, v, max_relative = 1e-9);
            let top_width = t.w()[1] * TWO_POW_63;
            let top = top_width * (1.0 - t.f()[1]);
            assert_relative_eq!(top, v, max_relative = 1e-8);
        }
    }

    #[test]
    fn test_every_strip_has_area_v() {
        for (kernel, n, r, v) in published() {
            let t = ClassicTables::build(kernel, n, r, v).unwrap();
            let xs = t.boundaries();
            // strip below boundary i is bounded by f(x_i) and f(x_{i+1})
            for i in 0..n - 1 {
                let area = xs[i] * (kernel.pdf(xs[i + 1]) - kernel.pdf(xs[i]));
                assert_relative_eq!(area, v, max_relative = 1e-8);
            }
        }
    }

    #[test]
    fn test_fast_path_fraction() {
        // Mean of k / 2^63 is the chance of accepting without a second word
        let expected = [0.97244, 0.98508, 0.97778];
        for ((kernel, n, r, v), want) in published().into_iter().zip(expected) {
            let t = ClassicTables::build(kernel, n, r, v).unwrap();
            let frac = t.k().iter().map(|&k| k as f64).sum::<f64>() / n as f64 / TWO_POW_63;
            assert!((frac - want).abs() < 1e-4, "{:?}/{}: {}", kernel, n, frac);
        }
    }

    #[test]
    fn test_rejects_bad_parameters() {
        assert_eq!(
            ClassicTables::build(Kernel::Gaussian, 100, ZIGGURAT_NOR_R, NOR_SECTION_AREA).unwrap_err(),
            TableError::LayerCount(100)
        );
        assert!(matches!(
            ClassicTables::build(Kernel::Exponential, 256, f64::NAN, EXP_SECTION_AREA),
            Err(TableError::InvalidParameter { name: "r", .. })
        ));
        // Strip area far too large for 256 strips
        assert!(matches!(
            ClassicTables::build(Kernel::Gaussian, 256, ZIGGURAT_NOR_R, 0.1),
            Err(TableError::Degenerate { .. })
        ));
    }
}
