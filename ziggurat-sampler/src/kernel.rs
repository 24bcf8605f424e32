//! Unnormalized target densities.
//!
//! Both kernels are monotone decreasing on `[0, inf)` with `f(0) = 1`, which
//! is all the table generators rely on.

use std::f64::consts::{FRAC_PI_2, SQRT_2};

/// Density kernel sampled by a ziggurat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kernel {
    /// `e^(-x^2 / 2)` on the half line; the sign is added by the sampler.
    Gaussian,
    /// `e^(-x)`.
    Exponential,
}

impl Kernel {
    /// Kernel value at `x`.
    #[inline]
    pub fn pdf(self, x: f64) -> f64 {
        match self {
            Kernel::Gaussian => (-0.5 * x * x).exp(),
            Kernel::Exponential => (-x).exp(),
        }
    }

    /// Abscissa at which the kernel equals `y`, for `y` in `(0, 1]`.
    #[inline]
    pub fn inverse_pdf(self, y: f64) -> f64 {
        match self {
            Kernel::Gaussian => (-2.0 * y.ln()).sqrt(),
            Kernel::Exponential => -y.ln(),
        }
    }

    /// Area under the kernel on `[0, inf)`.
    pub fn mass(self) -> f64 {
        match self {
            Kernel::Gaussian => FRAC_PI_2.sqrt(),
            Kernel::Exponential => 1.0,
        }
    }

    /// Area under the kernel on `[x, inf)`.
    pub fn tail_mass(self, x: f64) -> f64 {
        match self {
            Kernel::Gaussian => FRAC_PI_2.sqrt() * libm::erfc(x / SQRT_2),
            Kernel::Exponential => (-x).exp(),
        }
    }

    /// Area under the kernel on `[a, b]`, `0 <= a <= b`.
    pub fn area(self, a: f64, b: f64) -> f64 {
        match self {
            // erfc keeps its precision in the tail, erf near the origin
            Kernel::Gaussian if a > 1.0 => {
                FRAC_PI_2.sqrt() * (libm::erfc(a / SQRT_2) - libm::erfc(b / SQRT_2))
            }
            Kernel::Gaussian => FRAC_PI_2.sqrt() * (libm::erf(b / SQRT_2) - libm::erf(a / SQRT_2)),
            Kernel::Exponential => (-a).exp() - (-b).exp(),
        }
    }

    /// Point where the kernel changes from concave to convex, if any.
    pub fn inflection(self) -> Option<f64> {
        match self {
            Kernel::Gaussian => Some(1.0),
            Kernel::Exponential => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_inverse_round_trip() {
        for kernel in [Kernel::Gaussian, Kernel::Exponential] {
            for &x in &[0.1, 0.5, 1.0, 2.5, 3.6] {
                assert_relative_eq!(kernel.inverse_pdf(kernel.pdf(x)), x, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_areas_sum_to_mass() {
        for kernel in [Kernel::Gaussian, Kernel::Exponential] {
            let total = kernel.area(0.0, 0.7) + kernel.area(0.7, 2.0) + kernel.tail_mass(2.0);
            assert_relative_eq!(total, kernel.mass(), max_relative = 1e-14);
        }
    }

    #[test]
    fn test_gaussian_tail_mass() {
        // P(Z > 1.96) = 0.0249979
        let p = Kernel::Gaussian.tail_mass(1.96) / Kernel::Gaussian.mass() / 2.0;
        assert_relative_eq!(p, 0.024997895148220435, max_relative = 1e-12);
    }
}
