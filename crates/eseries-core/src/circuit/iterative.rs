//! Iterative search tier
//!
//! Walks every non-decreasing index tuple with a counter-and-carry scheme and
//! keeps a running best per target. Nothing proportional to the number of
//! multisets is ever allocated.

use super::rule::{log_abs_error, CombinationRule};
use super::strategy::{CombinationSearch, SearchTier, Selection};
use crate::rounding::is_defined;

/// Constant-memory enumeration of all multisets
#[derive(Debug, Clone, Copy, Default)]
pub struct IterativeSearch;

/// Advance `counter` to the next non-decreasing tuple over `0..n`.
///
/// The rightmost position that can still grow is incremented and every
/// position after it is reset to the same value. Returns `false` once the
/// last tuple `[n-1, ..., n-1]` has been passed.
pub(crate) fn advance(counter: &mut [usize], n: usize) -> bool {
    let Some(pos) = counter.iter().rposition(|&i| i + 1 < n) else {
        return false;
    };
    let next = counter[pos] + 1;
    counter[pos..].iter_mut().for_each(|c| *c = next);
    true
}

impl CombinationSearch for IterativeSearch {
    fn tier(&self) -> SearchTier {
        SearchTier::Iterative
    }

    fn search(
        &self,
        window: &[f64],
        nmc: usize,
        rule: CombinationRule,
        targets: &[f64],
    ) -> Vec<Option<Selection>> {
        let mut best: Vec<Option<Selection>> = vec![None; targets.len()];
        let n = window.len();
        if n == 0 || nmc == 0 || !targets.iter().any(|&t| is_defined(t)) {
            return best;
        }

        let transformed: Vec<f64> = window.iter().map(|&v| rule.transform(v)).collect();
        let mut best_error = vec![f64::INFINITY; targets.len()];
        let mut counter = vec![0usize; nmc];

        loop {
            let sum = counter.iter().fold(0.0, |acc, &i| acc + transformed[i]);
            let value = rule.combine(sum);

            for (k, &target) in targets.iter().enumerate() {
                if !is_defined(target) {
                    continue;
                }
                let error = log_abs_error(value, target);
                // strict: the earliest tuple keeps a tie and overflowed
                // (infinite) errors are never recorded
                if error < best_error[k] {
                    best_error[k] = error;
                    best[k] = Some(Selection {
                        indices: counter.clone(),
                        equivalent: value,
                        error,
                    });
                }
            }

            if !advance(&mut counter, n) {
                break;
            }
        }

        best
    }
}
