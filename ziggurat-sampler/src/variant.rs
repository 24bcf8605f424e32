//! Named algorithm configurations.

use std::{fmt, str::FromStr};

use crate::{error::ParseVariantError, kernel::Kernel};

/// Which ziggurat, which tables and which overhang strategy a sampler uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Marsaglia and Tsang, 128 strips.
    Gaussian128,
    /// Marsaglia and Tsang, 256 strips.
    Gaussian256,
    /// Marsaglia and Tsang exponential, 256 strips.
    Exponential,
    ModGaussian,
    ModGaussianSimpleOverhangs,
    ModGaussianIntMap,
    ModExponential,
    ModExponentialSimpleOverhangs,
    ModExponentialIntMap,
}

impl Variant {
    pub const ALL: [Variant; 9] = [
        Variant::Gaussian128,
        Variant::Gaussian256,
        Variant::Exponential,
        Variant::ModGaussian,
        Variant::ModGaussianSimpleOverhangs,
        Variant::ModGaussianIntMap,
        Variant::ModExponential,
        Variant::ModExponentialSimpleOverhangs,
        Variant::ModExponentialIntMap,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Gaussian128 => "Gaussian128",
            Variant::Gaussian256 => "Gaussian256",
            Variant::Exponential => "Exponential",
            Variant::ModGaussian => "ModGaussian",
            Variant::ModGaussianSimpleOverhangs => "ModGaussianSimpleOverhangs",
            Variant::ModGaussianIntMap => "ModGaussianIntMap",
            Variant::ModExponential => "ModExponential",
            Variant::ModExponentialSimpleOverhangs => "ModExponentialSimpleOverhangs",
            Variant::ModExponentialIntMap => "ModExponentialIntMap",
        }
    }

    /// Density sampled by this variant.
    pub fn kernel(self) -> Kernel {
        match self {
            Variant::Gaussian128
            | Variant::Gaussian256
            | Variant::ModGaussian
            | Variant::ModGaussianSimpleOverhangs
            | Variant::ModGaussianIntMap => Kernel::Gaussian,
            Variant::Exponential
            | Variant::ModExponential
            | Variant::ModExponentialSimpleOverhangs
            | Variant::ModExponentialIntMap => Kernel::Exponential,
        }
    }

    /// True for McFarland's modified ziggurat.
    pub fn is_modified(self) -> bool {
        !matches!(
            self,
            Variant::Gaussian128 | Variant::Gaussian256 | Variant::Exponential
        )
    }

    /// True if samples take both signs.
    pub fn is_symmetric(self) -> bool {
        self.kernel() == Kernel::Gaussian
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseVariantError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for v in Variant::ALL {
            assert_eq!(v.to_string().parse::<Variant>().unwrap(), v);
        }
        assert_eq!("modgaussian".parse::<Variant>().unwrap(), Variant::ModGaussian);
    }

    #[test]
    fn test_unknown_name() {
        let err = "Gaussian512".parse::<Variant>().unwrap_err();
        assert_eq!(err.to_string(), "unknown ziggurat variant: Gaussian512");
    }

    #[test]
    fn test_families() {
        assert_eq!(Variant::ALL.iter().filter(|v| v.is_modified()).count(), 6);
        assert_eq!(Variant::ALL.iter().filter(|v| v.is_symmetric()).count(), 5);
    }
}
