//! Array rounding to a preferred-number sequence

use ndarray::{Array, ArrayBase, Data, Dimension};
use tracing::debug;

use super::policy::{bin_edges, BinPolicy};
use crate::constants::UNDERFLOW_FLOOR;
use crate::sequence::pns_covering;
use crate::series::Series;

/// Options for [`round_to_series`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundOptions {
    /// Bin-edge policy (default: harmonic)
    pub policy: BinPolicy,
}

impl RoundOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: BinPolicy) -> Self {
        Self { policy }
    }
}

/// Result of rounding an array
#[derive(Debug, Clone)]
pub struct Rounded<D: Dimension> {
    /// Rounded values, same shape as the input. NaN where the input was undefined.
    pub values: Array<f64, D>,
    /// Position of each rounded value within `pns`. `None` where undefined.
    pub index: Array<Option<usize>, D>,
    /// Smallest contiguous run of the sequence that contains every result
    pub pns: Vec<f64>,
    /// Bin edges separating the entries of `pns` (`pns.len() - 1` entries)
    pub edges: Vec<f64>,
}

impl<D: Dimension> Rounded<D> {
    /// Number of defined (finite, positive) results
    pub fn n_defined(&self) -> usize {
        self.index.iter().filter(|i| i.is_some()).count()
    }
}

/// Whether `x` can be rounded: finite and strictly positive.
#[inline]
pub fn is_defined(x: f64) -> bool {
    x.is_finite() && x > 0.0
}

/// Round every element of `x` to the nearest value of `series`.
///
/// Non-positive, infinite and NaN elements produce NaN values and `None`
/// indices and take no part in building the sequence. The sequence is
/// extrapolated over the decades spanned by the defined elements, then
/// trimmed to the window the results actually use.
pub fn round_to_series<S, D>(
    x: &ArrayBase<S, D>,
    series: Series,
    options: &RoundOptions,
) -> Rounded<D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let policy = options.policy;

    let (min, max) = x
        .iter()
        .copied()
        .filter(|&v| is_defined(v))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if min > max {
        return Rounded {
            values: Array::from_elem(x.raw_dim(), f64::NAN),
            index: Array::from_elem(x.raw_dim(), None),
            pns: Vec::new(),
            edges: Vec::new(),
        };
    }

    // Subnormal inputs still get a non-empty sequence to round into.
    let (pns, edges) = bin_edges(
        &pns_covering(series, min.max(UNDERFLOW_FLOOR), max),
        policy,
    );

    debug!(
        series = %series,
        policy = %policy,
        min,
        max,
        pns_len = pns.len(),
        "built preferred-number sequence"
    );

    let bins: Array<Option<usize>, D> = x.map(|&v| {
        if is_defined(v) {
            Some(policy.bin_index(&edges, v))
        } else {
            None
        }
    });

    let used = bins.iter().flatten().copied();
    let lo = used.clone().min().unwrap_or(0);
    let hi = used.max().unwrap_or(0);

    Rounded {
        values: bins.mapv(|i| i.map_or(f64::NAN, |i| pns[i])),
        index: bins.mapv(|i| i.map(|i| i - lo)),
        pns: pns[lo..=hi].to_vec(),
        edges: edges[lo..hi].to_vec(),
    }
}

/// Round with the default harmonic policy.
pub fn round63<S, D>(x: &ArrayBase<S, D>, series: Series) -> Rounded<D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    round_to_series(x, series, &RoundOptions::default())
}

/// Round a single value. `None` if `x` is not finite and positive.
pub fn round_value(x: f64, series: Series, policy: BinPolicy) -> Option<f64> {
    if !is_defined(x) {
        return None;
    }
    let arr = ndarray::arr0(x);
    let rounded = round_to_series(&arr, series, &RoundOptions::with_policy(policy));
    rounded.values.first().copied()
}
