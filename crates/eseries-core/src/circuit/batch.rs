//! Batch search tier
//!
//! Materializes the full outer sum of the transformed window values across
//! `nmc` axes, then reduces once per target over the entries whose index
//! tuple is non-decreasing.

use ndarray::{Array1, ArrayD, Axis, Dimension};
use tracing::debug;

use super::iterative::IterativeSearch;
use super::rule::{log_abs_error, CombinationRule};
use super::strategy::{CombinationSearch, SearchTier, Selection};
use crate::constants::BATCH_ELEMENT_LIMIT;
use crate::rounding::is_defined;

/// Materialized search over the `n^nmc` outer-sum array.
///
/// Above [`BATCH_ELEMENT_LIMIT`] elements the array is never built and the
/// search runs through [`IterativeSearch`] instead, with the same result.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchSearch;

/// Outer sum of `values` with itself over `nmc` axes.
///
/// Entry `[i0, i1, .., ik]` is `((values[i0] + values[i1]) + ..) + values[ik]`,
/// accumulated left to right like the iterative tier.
pub fn outer_sum(values: &Array1<f64>, nmc: usize) -> ArrayD<f64> {
    let mut sums = values.clone().into_dyn();
    for _ in 1..nmc {
        let ndim = sums.ndim();
        let lhs = sums.insert_axis(Axis(ndim));
        // values broadcast along the new trailing axis
        sums = &lhs + values;
    }
    sums
}

fn is_non_decreasing(idx: &[usize]) -> bool {
    idx.windows(2).all(|w| w[0] <= w[1])
}

/// Index tuple of row-major position `flat` in an `n^nmc` array
pub(crate) fn unravel(mut flat: usize, n: usize, nmc: usize) -> Vec<usize> {
    let mut idx = vec![0; nmc];
    for slot in idx.iter_mut().rev() {
        *slot = flat % n;
        flat /= n;
    }
    idx
}

/// Position of the smallest finite error; the first one wins a tie.
///
/// Infinite and NaN errors (overflowed combinations) are never selected.
fn argmin_first(errors: &Array1<f64>) -> Option<usize> {
    errors
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (k, &e)| match best {
            _ if !e.is_finite() => best,
            Some((_, b)) if !(e < b) => best,
            _ => Some((k, e)),
        })
        .map(|(k, _)| k)
}

impl CombinationSearch for BatchSearch {
    fn tier(&self) -> SearchTier {
        SearchTier::Batch
    }

    fn search(
        &self,
        window: &[f64],
        nmc: usize,
        rule: CombinationRule,
        targets: &[f64],
    ) -> Vec<Option<Selection>> {
        if window.is_empty() || nmc == 0 || !targets.iter().any(|&t| is_defined(t)) {
            return vec![None; targets.len()];
        }

        let n = window.len();
        if SearchTier::select(n, nmc) != SearchTier::Batch {
            debug!(
                window_len = n,
                nmc,
                limit = BATCH_ELEMENT_LIMIT,
                "outer sum over limit, enumerating iteratively"
            );
            return IterativeSearch.search(window, nmc, rule, targets);
        }

        let transformed: Array1<f64> = window.iter().map(|&v| rule.transform(v)).collect();
        let combined = outer_sum(&transformed, nmc).mapv_into(|s| rule.combine(s));

        // indexed_iter walks in row-major order, which on the non-decreasing
        // tuples is the lexicographic order of the iterative tier
        let (positions, values): (Vec<usize>, Vec<f64>) = combined
            .indexed_iter()
            .enumerate()
            .filter(|(_, (idx, _))| is_non_decreasing(idx.slice()))
            .map(|(flat, (_, &v))| (flat, v))
            .unzip();
        let values = Array1::from(values);

        targets
            .iter()
            .map(|&target| {
                if !is_defined(target) {
                    return None;
                }
                let errors = values.mapv(|v| log_abs_error(v, target));
                argmin_first(&errors).map(|k| Selection {
                    indices: unravel(positions[k], n, nmc),
                    equivalent: values[k],
                    error: errors[k],
                })
            })
            .collect()
    }
}
