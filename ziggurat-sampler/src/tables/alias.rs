//! Walker alias tables for layer selection.
//!
//! Thresholds are stored as signed words so a single signed comparison of the
//! random word decides between the drawn slot and its alias:
//! the slot is kept iff `word as i64 < ipmf[slot]`.

use crate::{
    constants::{TWO_POW_63, TWO_POW_64},
    error::TableError,
};

/// Storage for the alias remap targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapLayout {
    /// One byte per entry; at most 256 entries.
    Byte,
    /// One `u32` per entry.
    Int,
}

#[derive(Debug, Clone)]
enum AliasMap {
    Byte(Box<[u8]>),
    Int(Box<[u32]>),
}

impl AliasMap {
    #[inline]
    fn get(&self, i: usize) -> usize {
        match self {
            AliasMap::Byte(map) => map[i] as usize,
            AliasMap::Int(map) => map[i] as usize,
        }
    }
}

/// Alias inverse-PMF and remap tables over a power-of-two number of slots.
#[derive(Debug, Clone)]
pub struct AliasTable {
    mask: usize,
    ipmf: Box<[i64]>,
    map: AliasMap,
}

impl AliasTable {
    /// Build the table for the discrete distribution proportional to `weights`.
    pub fn build(weights: &[f64], layout: MapLayout) -> Result<Self, TableError> {
        let n = weights.len();
        if n < 2 || !n.is_power_of_two() {
            return Err(TableError::LayerCount(n));
        }
        if layout == MapLayout::Byte && n > 256 {
            return Err(TableError::ByteMapOverflow { layers: n });
        }
        if let Some((index, &weight)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(TableError::InvalidWeight { index, weight });
        }
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return Err(TableError::ZeroMass);
        }

        // Scaled so that the average slot holds exactly 1
        let scale = n as f64 / total;
        let mut p: Vec<f64> = weights.iter().map(|w| w * scale).collect();
        let mut keep = vec![1.0f64; n];
        let mut map: Vec<usize> = (0..n).collect();

        // Slot 0 sits at the bottom of the large stack, so it is drained last
        // and keeps its own index whenever it starts out large.
        let (mut small, mut large): (Vec<usize>, Vec<usize>) = (0..n).partition(|&j| p[j] < 1.0);
        while let (Some(&s), Some(&l)) = (small.last(), large.last()) {
            small.pop();
            keep[s] = p[s];
            map[s] = l;
            p[l] -= 1.0 - p[s];
            if p[l] < 1.0 {
                large.pop();
                small.push(l);
            }
        }
        // Whatever remains holds (up to rounding) exactly 1 and keeps itself.

        let ipmf = keep.iter().map(|&k| threshold(k)).collect();
        let map = match layout {
            MapLayout::Byte => AliasMap::Byte(map.iter().map(|&j| j as u8).collect()),
            MapLayout::Int => AliasMap::Int(map.iter().map(|&j| j as u32).collect()),
        };

        Ok(Self {
            mask: n - 1,
            ipmf,
            map,
        })
    }

    /// Wrap precomputed thresholds and alias targets.
    ///
    /// Every target must address a slot of the table; the thresholds are
    /// taken as they are.
    pub fn from_parts<T: Copy + Into<u32>>(
        ipmf: &[i64],
        map: &[T],
        layout: MapLayout,
    ) -> Result<Self, TableError> {
        let n = ipmf.len();
        if n < 2 || !n.is_power_of_two() {
            return Err(TableError::LayerCount(n));
        }
        if layout == MapLayout::Byte && n > 256 {
            return Err(TableError::ByteMapOverflow { layers: n });
        }
        if map.len() != n {
            return Err(TableError::Length {
                name: "alias map",
                len: map.len(),
                expected: n,
            });
        }
        let map: Vec<usize> = map.iter().map(|&j| Into::<u32>::into(j) as usize).collect();
        if let Some((index, &target)) = map.iter().enumerate().find(|(_, j)| **j >= n) {
            return Err(TableError::AliasTarget { index, target });
        }

        let map = match layout {
            MapLayout::Byte => AliasMap::Byte(map.iter().map(|&j| j as u8).collect()),
            MapLayout::Int => AliasMap::Int(map.iter().map(|&j| j as u32).collect()),
        };
        Ok(Self {
            mask: n - 1,
            ipmf: ipmf.into(),
            map,
        })
    }

    /// Select a slot from one uniformly distributed word.
    ///
    /// The low bits pick a slot; the whole word, read as signed, is compared
    /// against the slot's threshold to decide whether to take the alias.
    #[inline]
    pub fn select(&self, w: u64) -> usize {
        let j = (w as usize) & self.mask;
        if (w as i64) >= self.ipmf[j] {
            self.map.get(j)
        } else {
            j
        }
    }

    /// Number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.ipmf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ipmf.is_empty()
    }

    /// Signed keep thresholds.
    pub fn ipmf(&self) -> &[i64] {
        &self.ipmf
    }

    /// Alias target of slot `i`.
    pub fn alias(&self, i: usize) -> usize {
        self.map.get(i)
    }

    pub fn layout(&self) -> MapLayout {
        match self.map {
            AliasMap::Byte(_) => MapLayout::Byte,
            AliasMap::Int(_) => MapLayout::Int,
        }
    }

    /// Probability of each outcome implied by the stored thresholds.
    pub fn probabilities(&self) -> Vec<f64> {
        let n = self.len();
        let mut p = vec![0.0; n];
        for (j, &t) in self.ipmf.iter().enumerate() {
            let keep = (t as f64 + TWO_POW_63) / TWO_POW_64;
            p[j] += keep / n as f64;
            p[self.map.get(j)] += (1.0 - keep) / n as f64;
        }
        p
    }
}

/// Signed threshold `p * 2^64 - 2^63`; the cast saturates at both ends.
#[inline]
fn threshold(keep: f64) -> i64 {
    (keep * TWO_POW_64 - TWO_POW_63) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_weights_never_alias() {
        let table = AliasTable::build(&[1.0; 8], MapLayout::Byte).unwrap();
        for j in 0..8 {
            assert_eq!(table.ipmf()[j], i64::MAX);
        }
        for w in [0u64, 5, u64::MAX, 0x8000_0000_0000_0003] {
            assert_eq!(table.select(w), (w & 7) as usize);
        }
    }

    #[test]
    fn test_zero_weight_always_aliases() {
        let table = AliasTable::build(&[3.0, 1.0, 0.0, 0.0], MapLayout::Int).unwrap();
        assert_eq!(table.ipmf()[2], i64::MIN);
        assert_eq!(table.ipmf()[3], i64::MIN);
        for w in [2u64, 3, u64::MAX - 1, u64::MAX] {
            let j = table.select(w);
            assert!(j < 2, "zero-weight slot {} selected", j);
        }
    }

    #[test]
    fn test_probabilities_match_weights() {
        let weights = [6.0, 0.5, 0.25, 2.0, 0.0, 1.0, 0.125, 0.125];
        let total: f64 = weights.iter().sum();
        let table = AliasTable::build(&weights, MapLayout::Byte).unwrap();
        for (p, w) in table.probabilities().iter().zip(weights.iter()) {
            assert!((p - w / total).abs() < 1e-15, "{} != {}", p, w / total);
        }
    }

    #[test]
    fn test_large_first_slot_keeps_itself() {
        let table = AliasTable::build(&[10.0, 1.0, 0.5, 0.2, 3.0, 0.1, 0.1, 0.1], MapLayout::Byte)
            .unwrap();
        assert_eq!(table.ipmf()[0], i64::MAX);
        assert_eq!(table.select(0), 0);
    }

    #[test]
    fn test_layouts_agree() {
        let weights: Vec<f64> = (0..64).map(|i| ((i * 37) % 11) as f64).collect();
        let byte = AliasTable::build(&weights, MapLayout::Byte).unwrap();
        let int = AliasTable::build(&weights, MapLayout::Int).unwrap();
        assert_eq!(byte.layout(), MapLayout::Byte);
        assert_eq!(int.layout(), MapLayout::Int);
        assert_eq!(byte.ipmf(), int.ipmf());
        for j in 0..64 {
            assert_eq!(byte.alias(j), int.alias(j));
        }
    }

    #[test]
    fn test_from_parts_keeps_thresholds_and_targets() {
        let ipmf = [i64::MAX, i64::MIN, 0, i64::MIN];
        let map = [0u8, 0, 3, 2];
        for layout in [MapLayout::Byte, MapLayout::Int] {
            let table = AliasTable::from_parts(&ipmf, &map, layout).unwrap();
            assert_eq!(table.layout(), layout);
            assert_eq!(table.ipmf(), &ipmf[..]);
            assert_eq!(table.select(1), 0);
            // Slot 2 keeps itself below the zero threshold
            assert_eq!(table.select(0x8000_0000_0000_0002), 2);
            assert_eq!(table.select(2), 3);
            let p = table.probabilities();
            assert_eq!(p, vec![0.5, 0.0, 0.375, 0.125]);
        }
    }

    #[test]
    fn test_from_parts_rejects_bad_tables() {
        assert_eq!(
            AliasTable::from_parts(&[0; 4], &[0u8; 3], MapLayout::Int).unwrap_err(),
            TableError::Length {
                name: "alias map",
                len: 3,
                expected: 4
            }
        );
        assert_eq!(
            AliasTable::from_parts(&[0; 4], &[0u8, 1, 4, 2], MapLayout::Byte).unwrap_err(),
            TableError::AliasTarget { index: 2, target: 4 }
        );
        assert_eq!(
            AliasTable::from_parts(&[0; 3], &[0u8; 3], MapLayout::Int).unwrap_err(),
            TableError::LayerCount(3)
        );
        assert_eq!(
            AliasTable::from_parts(&[0; 512], &[0u32; 512], MapLayout::Byte).unwrap_err(),
            TableError::ByteMapOverflow { layers: 512 }
        );
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(
            AliasTable::build(&[1.0; 6], MapLayout::Int).unwrap_err(),
            TableError::LayerCount(6)
        );
        assert_eq!(
            AliasTable::build(&[1.0; 512], MapLayout::Byte).unwrap_err(),
            TableError::ByteMapOverflow { layers: 512 }
        );
        assert_eq!(
            AliasTable::build(&[1.0, -1.0], MapLayout::Int).unwrap_err(),
            TableError::InvalidWeight {
                index: 1,
                weight: -1.0
            }
        );
        assert_eq!(
            AliasTable::build(&[0.0; 4], MapLayout::Int).unwrap_err(),
            TableError::ZeroMass
        );
    }
}
