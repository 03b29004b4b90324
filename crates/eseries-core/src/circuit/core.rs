//! Equivalent-circuit search entry points

use ndarray::{Array, Array2, ArrayBase, Data, Dimension};
use tracing::{debug, trace};

use super::rule::CombinationRule;
use super::strategy::{combination_count, SearchTier, Selection, TierSelection};
use crate::error::{ESeriesError, Result};
use crate::sequence::pns_within;
use crate::series::Series;

/// Options for [`equivalent_circuit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOptions {
    /// Combination rule (default: parallel)
    pub rule: CombinationRule,
    /// Tier selection (default: by memory estimate)
    pub tier: TierSelection,
}

impl SearchOptions {
    pub fn new(rule: CombinationRule) -> Self {
        Self {
            rule,
            tier: TierSelection::Auto,
        }
    }

    pub fn with_tier(mut self, tier: SearchTier) -> Self {
        self.tier = TierSelection::Force(tier);
        self
    }
}

/// Result of an equivalent-circuit search
#[derive(Debug, Clone)]
pub struct EquivalentCircuit<D: Dimension> {
    /// Component values, one row per target in logical (row-major) order.
    /// Each row is ascending. NaN rows for undefined targets.
    pub components: Array2<f64>,
    /// Indices of the components into `window`, aligned with `components`
    pub indices: Array2<Option<usize>>,
    /// Combined value per target, same shape as the targets
    pub equivalent: Array<f64, D>,
    /// `|ln(equivalent / target)|` per target
    pub error: Array<f64, D>,
    /// Every series value within the requested range, ascending
    pub window: Vec<f64>,
    /// Tier that performed the search
    pub tier: SearchTier,
}

impl<D: Dimension> EquivalentCircuit<D> {
    /// Number of components per combination
    pub fn nmc(&self) -> usize {
        self.components.ncols()
    }

    /// Components selected for the target at logical position `k`
    pub fn row(&self, k: usize) -> Option<Vec<f64>> {
        let row = self.components.row(k);
        if row.iter().any(|v| v.is_nan()) {
            None
        } else {
            Some(row.to_vec())
        }
    }
}

/// Check that `min..=max` is a usable component range: both bounds finite,
/// positive and ordered.
pub fn validate_range(min: f64, max: f64) -> Result<()> {
    let ok = min.is_finite() && max.is_finite() && min > 0.0 && min <= max;
    if ok {
        Ok(())
    } else {
        Err(ESeriesError::InvalidRange { min, max })
    }
}

/// Find, for each target, the multiset of `nmc` series values within
/// `range` whose combined value is closest to it.
///
/// Closeness is the absolute difference of natural logarithms. Ties go to
/// the multiset whose ascending index tuple is lexicographically first.
/// Targets that are not finite and positive produce NaN / `None` outputs.
///
/// # Errors
/// [`ESeriesError::InvalidRange`] if the bounds are not positive, finite and
/// ordered, [`ESeriesError::InvalidComponentCount`] if `nmc` is zero,
/// [`ESeriesError::EmptyWindow`] if no series value lies in the range and
/// [`ESeriesError::BatchTooLarge`] if the batch tier is forced on a problem
/// over the element limit.
pub fn equivalent_circuit<S, D>(
    targets: &ArrayBase<S, D>,
    series: Series,
    range: (f64, f64),
    nmc: usize,
    options: &SearchOptions,
) -> Result<EquivalentCircuit<D>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let (min, max) = range;
    validate_range(min, max)?;
    if nmc == 0 {
        return Err(ESeriesError::InvalidComponentCount(nmc));
    }

    let window = pns_within(series, min, max);
    if window.is_empty() {
        return Err(ESeriesError::EmptyWindow {
            series: series.to_string(),
            min,
            max,
        });
    }

    let tier = options.tier.resolve(window.len(), nmc)?;
    debug!(
        series = %series,
        rule = %options.rule,
        window_len = window.len(),
        nmc,
        estimate = ?SearchTier::estimate(window.len(), nmc),
        multisets = ?combination_count(window.len(), nmc),
        tier = %tier,
        "equivalent-circuit search"
    );

    let flat: Vec<f64> = targets.iter().copied().collect();
    let selections = tier.strategy().search(&window, nmc, options.rule, &flat);

    let mut components = Array2::from_elem((flat.len(), nmc), f64::NAN);
    let mut indices = Array2::from_elem((flat.len(), nmc), None);
    for (k, selection) in selections.iter().enumerate() {
        let Some(Selection { indices: idx, .. }) = selection else {
            continue;
        };
        for (j, &i) in idx.iter().enumerate() {
            components[[k, j]] = window[i];
            indices[[k, j]] = Some(i);
        }
        trace!(target_value = flat[k], components = ?idx, "selected");
    }

    let mut equivalent = Array::from_elem(targets.raw_dim(), f64::NAN);
    let mut error = Array::from_elem(targets.raw_dim(), f64::NAN);
    for ((eq, err), selection) in equivalent
        .iter_mut()
        .zip(error.iter_mut())
        .zip(&selections)
    {
        if let Some(sel) = selection {
            *eq = sel.equivalent;
            *err = sel.error;
        }
    }

    Ok(EquivalentCircuit {
        components,
        indices,
        equivalent,
        error,
        window,
        tier,
    })
}

/// Search with a boolean combination flag: `true` for the reciprocal
/// (parallel) rule, `false` for the direct sum.
pub fn num2circuit<S, D>(
    targets: &ArrayBase<S, D>,
    series: Series,
    range: (f64, f64),
    nmc: usize,
    parallel: bool,
) -> Result<EquivalentCircuit<D>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    equivalent_circuit(
        targets,
        series,
        range,
        nmc,
        &SearchOptions::new(CombinationRule::from(parallel)),
    )
}
