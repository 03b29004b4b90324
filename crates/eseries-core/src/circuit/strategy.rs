//! Search strategies and tier selection
//!
//! Two interchangeable implementations of the same search sit behind
//! [`CombinationSearch`]. They differ only in memory use and speed; for the
//! same inputs they select the same multiset.

use std::fmt;
use std::str::FromStr;

use super::batch::BatchSearch;
use super::iterative::IterativeSearch;
use super::rule::CombinationRule;
use crate::constants::BATCH_ELEMENT_LIMIT;
use crate::error::{match_prefix, ESeriesError};

/// Best multiset found for one target
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Non-decreasing indices into the search window
    pub indices: Vec<usize>,
    /// Combined value of the selected components
    pub equivalent: f64,
    /// `|ln(equivalent / target)|`
    pub error: f64,
}

/// A search over all multisets of `nmc` window values.
///
/// Implementations return one entry per target, `None` for targets that are
/// not finite and positive. Among multisets with equal error the one that
/// comes first in lexicographic order of its (non-decreasing) index tuple
/// wins.
pub trait CombinationSearch {
    fn tier(&self) -> SearchTier;

    fn search(
        &self,
        window: &[f64],
        nmc: usize,
        rule: CombinationRule,
        targets: &[f64],
    ) -> Vec<Option<Selection>>;
}

/// Search implementation tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchTier {
    /// Counter-based enumeration, constant memory
    Iterative,
    /// Materialized outer sum over all index tuples
    Batch,
}

impl SearchTier {
    /// Elements the batch tier would materialize: `n ^ nmc`.
    /// `None` if that does not fit in `usize`.
    pub fn estimate(n: usize, nmc: usize) -> Option<usize> {
        let exp = u32::try_from(nmc).ok()?;
        n.checked_pow(exp)
    }

    /// Tier for a window of `n` values and `nmc` components
    pub fn select(n: usize, nmc: usize) -> Self {
        match Self::estimate(n, nmc) {
            Some(elements) if elements <= BATCH_ELEMENT_LIMIT => SearchTier::Batch,
            _ => SearchTier::Iterative,
        }
    }

    pub fn strategy(self) -> &'static dyn CombinationSearch {
        match self {
            SearchTier::Iterative => &IterativeSearch,
            SearchTier::Batch => &BatchSearch,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SearchTier::Iterative => "iterative",
            SearchTier::Batch => "batch",
        }
    }
}

impl fmt::Display for SearchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the tier is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TierSelection {
    /// By memory estimate against [`BATCH_ELEMENT_LIMIT`]
    #[default]
    Auto,
    /// Always use the given tier
    Force(SearchTier),
}

const TIER_NAMES: &[(&str, TierSelection)] = &[
    ("auto", TierSelection::Auto),
    ("iterative", TierSelection::Force(SearchTier::Iterative)),
    ("batch", TierSelection::Force(SearchTier::Batch)),
];

impl TierSelection {
    /// Tier for a window of `n` values and `nmc` components.
    ///
    /// # Errors
    /// [`ESeriesError::BatchTooLarge`] if the batch tier is forced but
    /// `n^nmc` exceeds [`BATCH_ELEMENT_LIMIT`].
    pub fn resolve(self, n: usize, nmc: usize) -> Result<SearchTier, ESeriesError> {
        match self {
            TierSelection::Auto => Ok(SearchTier::select(n, nmc)),
            TierSelection::Force(SearchTier::Batch)
                if SearchTier::select(n, nmc) != SearchTier::Batch =>
            {
                Err(ESeriesError::BatchTooLarge { window_len: n, nmc })
            }
            TierSelection::Force(tier) => Ok(tier),
        }
    }
}

impl FromStr for TierSelection {
    type Err = ESeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_prefix(s, TIER_NAMES).map_err(|e| {
            e.unwrap_or_else(|| ESeriesError::UnknownTier(s.to_string()))
        })
    }
}

/// Number of multisets of size `k` over `n` values: `C(n + k - 1, k)`
pub fn combination_count(n: usize, k: usize) -> Option<usize> {
    if n == 0 {
        return Some(usize::from(k == 0));
    }
    let mut count: usize = 1;
    for i in 1..=k {
        // count * (n + i - 1) is always divisible by i
        count = count.checked_mul(n + i - 1)? / i;
    }
    Some(count)
}
