//! McFarland's modified ziggurat tables.
//!
//! Layer `i` is the rectangle `[0, x_i] x [y_{i-1}, y_i]` with `y_{-1} = 0`,
//! so every rectangle lies entirely under the curve and has area
//! `mass / N`. Rectangles are generated from the tail start inward until the
//! next one no longer fits below `f(0)`. What is left over (the tail and the
//! wedge-shaped overhangs between consecutive rectangles) is picked by an
//! alias table weighted by exact area.
//!
//! Abscissae and ordinates are stored scaled by `2^-63`; index `i_max` holds
//! the apex `(0, f(0))`. The process-wide tables wrap McFarland's published
//! arrays; [`ModifiedTables::build`] regenerates them from the tail start.

use crate::{
    constants::TWO_POW_63,
    error::TableError,
    kernel::Kernel,
    tables::alias::{AliasTable, MapLayout},
};

const GOLDEN_ITERATIONS: usize = 120;
const BISECT_ITERATIONS: usize = 200;
/// Allowed relative error between `x_0 f(x_0)` and the layer area.
const TAIL_TOLERANCE: f64 = 1e-9;

/// Layer tables, alias selector and overhang bounds of a modified ziggurat.
#[derive(Debug, Clone)]
pub struct ModifiedTables {
    kernel: Kernel,
    x_0: f64,
    one_over_x_0: f64,
    index_mask: usize,
    i_max: usize,
    j_inflection: Option<usize>,
    min_ie: i64,
    max_ie: i64,
    x: Box<[f64]>,
    y: Box<[f64]>,
    alias: AliasTable,
}

impl ModifiedTables {
    /// Generate the tables for `n` layers with the tail starting at `x_0`.
    ///
    /// `x_0` must satisfy `x_0 f(x_0) = mass / n`; it is checked rather than
    /// solved for.
    pub fn build(kernel: Kernel, n: usize, x_0: f64, layout: MapLayout) -> Result<Self, TableError> {
        if n < 2 || !n.is_power_of_two() {
            return Err(TableError::LayerCount(n));
        }
        let area = check_tail(kernel, n, x_0)?;

        let mut xs = vec![x_0];
        let mut ys = vec![kernel.pdf(x_0)];
        while let Some(next) = next_layer(kernel, xs[xs.len() - 1], ys[ys.len() - 1], area) {
            let layer = xs.len();
            if layer >= n || !(next > 0.0 && next < xs[layer - 1]) {
                return Err(TableError::Degenerate { layer });
            }
            xs.push(next);
            ys.push(kernel.pdf(next));
        }
        // The apex needs a slot of its own in the selector.
        if xs.len() >= n {
            return Err(TableError::Degenerate { layer: xs.len() });
        }
        xs.push(0.0);
        ys.push(kernel.pdf(0.0));

        let mut weights = vec![0.0; n];
        weights[0] = kernel.tail_mass(x_0);
        for j in 1..xs.len() {
            let overhang = kernel.area(xs[j], xs[j - 1]) - (xs[j - 1] - xs[j]) * ys[j - 1];
            weights[j] = overhang.max(0.0);
        }
        let alias = AliasTable::build(&weights, layout)?;

        Ok(Self::assemble(kernel, x_0, &xs, &ys, alias))
    }

    /// Wrap precomputed layer and alias tables in McFarland's scaled layout:
    /// `x` and `y` hold the layers scaled by `2^-63` down to the apex, `ipmf`
    /// and `map` the alias selector over `ipmf.len()` slots.
    ///
    /// The layers and the selector are used exactly as given. The inflection
    /// layer and the deviation bounds are derived from the layers, the same
    /// way [`build`](Self::build) derives them: the inflection layer is the
    /// overhang that straddles the inflection point (204 for the published
    /// normal table, which lists 205), and `min_ie` of a kernel without an
    /// inflection point covers the outermost overhang too.
    pub fn from_published<T: Copy + Into<u32>>(
        kernel: Kernel,
        x_0: f64,
        x: &[f64],
        y: &[f64],
        ipmf: &[i64],
        map: &[T],
        layout: MapLayout,
    ) -> Result<Self, TableError> {
        let alias = AliasTable::from_parts(ipmf, map, layout)?;
        let n = alias.len();
        check_tail(kernel, n, x_0)?;
        if y.len() != x.len() {
            return Err(TableError::Length {
                name: "y",
                len: y.len(),
                expected: x.len(),
            });
        }
        if x.len() < 2 || x.len() > n {
            return Err(TableError::Length {
                name: "x",
                len: x.len(),
                expected: n,
            });
        }

        let xs: Vec<f64> = x.iter().map(|x| x * TWO_POW_63).collect();
        let ys: Vec<f64> = y.iter().map(|y| y * TWO_POW_63).collect();
        if ((xs[0] - x_0) / x_0).abs() > TAIL_TOLERANCE {
            return Err(TableError::InvalidParameter { name: "x_0", value: x_0 });
        }
        for j in 1..xs.len() {
            if !(xs[j] < xs[j - 1] && ys[j] > ys[j - 1]) {
                return Err(TableError::Degenerate { layer: j });
            }
        }
        if xs[xs.len() - 1] != 0.0 {
            return Err(TableError::Degenerate { layer: xs.len() - 1 });
        }

        Ok(Self::assemble(kernel, x_0, &xs, &ys, alias))
    }

    /// Derive the inflection layer and the overhang bounds from layers in
    /// real coordinates and scale them for storage.
    fn assemble(kernel: Kernel, x_0: f64, xs: &[f64], ys: &[f64], alias: AliasTable) -> Self {
        let n = alias.len();
        let i_max = xs.len() - 1;
        let j_inflection = kernel
            .inflection()
            .and_then(|p| (1..xs.len()).find(|&j| xs[j] <= p && p < xs[j - 1]));

        // Largest excursion of the curve below the chord over the convex
        // overhangs, and above it over the concave ones.
        let mut below = 0.0f64;
        let mut above = 0.0f64;
        for j in 1..xs.len() {
            match j_inflection {
                Some(ji) if j == ji => {}
                Some(ji) if j > ji => above = above.max(chord_deviation(kernel, xs, ys, j, 1.0)),
                _ => below = below.max(chord_deviation(kernel, xs, ys, j, -1.0)),
            }
        }
        let min_ie = (below * TWO_POW_63) as i64;
        let max_ie = -((above * TWO_POW_63) as i64);

        tracing::debug!(
            ?kernel,
            layers = n,
            x_0,
            i_max,
            ?j_inflection,
            min_ie,
            max_ie,
            "built modified ziggurat tables"
        );

        Self {
            kernel,
            x_0,
            one_over_x_0: 1.0 / x_0,
            index_mask: n - 1,
            i_max,
            j_inflection,
            min_ie,
            max_ie,
            x: xs.iter().map(|x| x / TWO_POW_63).collect(),
            y: ys.iter().map(|y| y / TWO_POW_63).collect(),
            alias,
        }
    }

    #[inline]
    pub fn kernel(&self) -> Kernel {
        self.kernel
    }

    /// Start of the tail.
    #[inline]
    pub fn x_0(&self) -> f64 {
        self.x_0
    }

    #[inline]
    pub fn one_over_x_0(&self) -> f64 {
        self.one_over_x_0
    }

    /// Mask selecting a layer from the low bits of a word.
    #[inline]
    pub fn index_mask(&self) -> usize {
        self.index_mask
    }

    /// Number of full rectangles; indices below this take the fast path.
    #[inline]
    pub fn i_max(&self) -> usize {
        self.i_max
    }

    /// Overhang containing the inflection point, for kernels that have one.
    #[inline]
    pub fn j_inflection(&self) -> Option<usize> {
        self.j_inflection
    }

    /// Vertical distance, in 63-bit units, beyond which a point in a convex
    /// overhang is certainly under the curve.
    #[inline]
    pub fn min_ie(&self) -> i64 {
        self.min_ie
    }

    /// Negated vertical distance, in 63-bit units, beyond which a point in a
    /// concave overhang is certainly above the curve.
    #[inline]
    pub fn max_ie(&self) -> i64 {
        self.max_ie
    }

    /// Layer abscissae scaled by `2^-63`, ending with the apex at 0.
    #[inline]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Kernel values at [`x`](Self::x), scaled by `2^-63`.
    #[inline]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    #[inline]
    pub fn alias(&self) -> &AliasTable {
        &self.alias
    }

    /// Abscissa in overhang `j` at 63-bit fraction `u` from its inner edge.
    #[inline]
    pub fn overhang_x(&self, j: usize, u: i64) -> f64 {
        self.x[j] * TWO_POW_63 + (self.x[j - 1] - self.x[j]) * u as f64
    }

    /// Ordinate in overhang `j` at 63-bit fraction `u` from its lower edge.
    #[inline]
    pub fn overhang_y(&self, j: usize, u: u64) -> f64 {
        self.y[j - 1] * TWO_POW_63 + (self.y[j] - self.y[j - 1]) * u as f64
    }
}

/// Check that `x_0` bounds a base rectangle of area `mass / n` and return
/// that area.
fn check_tail(kernel: Kernel, n: usize, x_0: f64) -> Result<f64, TableError> {
    if !x_0.is_finite() || x_0 <= 0.0 {
        return Err(TableError::InvalidParameter { name: "x_0", value: x_0 });
    }
    let area = kernel.mass() / n as f64;
    let base = x_0 * kernel.pdf(x_0);
    if ((base - area) / area).abs() > TAIL_TOLERANCE {
        return Err(TableError::TailMismatch {
            x_0,
            area: base,
            expected: area,
        });
    }
    Ok(area)
}

/// Width of the next rectangle above height `y_prev`, or `None` when no
/// rectangle of the required area fits under the curve.
fn next_layer(kernel: Kernel, x_prev: f64, y_prev: f64, area: f64) -> Option<f64> {
    let excess = |x: f64| x * (kernel.pdf(x) - y_prev) - area;
    let peak = golden_section_max(excess, 0.0, x_prev);
    if excess(peak) < 0.0 {
        return None;
    }
    // The widest root lies between the peak and the previous layer.
    let (mut lo, mut hi) = (peak, x_prev);
    for _ in 0..BISECT_ITERATIONS {
        let mid = 0.5 * (lo + hi);
        if mid <= lo || mid >= hi {
            break;
        }
        if excess(mid) >= 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Some(lo)
}

/// Largest signed gap between the curve and the falling diagonal of
/// overhang `j`, in units of the overhang height. `sign` is `1.0` to measure
/// the curve above the diagonal and `-1.0` below it.
fn chord_deviation(kernel: Kernel, xs: &[f64], ys: &[f64], j: usize, sign: f64) -> f64 {
    let (x_in, x_out) = (xs[j], xs[j - 1]);
    let (y_lo, y_hi) = (ys[j - 1], ys[j]);
    let gap = |u: f64| {
        let uy = (kernel.pdf(x_in + (x_out - x_in) * u) - y_lo) / (y_hi - y_lo);
        sign * (uy - (1.0 - u))
    };
    gap(golden_section_max(gap, 0.0, 1.0))
}

/// Argmax of a unimodal function on `[a, b]`.
fn golden_section_max(g: impl Fn(f64) -> f64, mut a: f64, mut b: f64) -> f64 {
    let inv_phi = (5.0f64.sqrt() - 1.0) / 2.0;
    let mut c = b - inv_phi * (b - a);
    let mut d = a + inv_phi * (b - a);
    for _ in 0..GOLDEN_ITERATIONS {
        if g(c) > g(d) {
            b = d;
        } else {
            a = c;
        }
        c = b - inv_phi * (b - a);
        d = a + inv_phi * (b - a);
    }
    0.5 * (a + b)
}
