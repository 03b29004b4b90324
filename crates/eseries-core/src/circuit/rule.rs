//! Combination rules for multiple components

use std::fmt;
use std::str::FromStr;

use crate::error::{match_prefix, ESeriesError};

/// How the values of several components combine into one equivalent value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CombinationRule {
    /// Reciprocal sum: `1 / (1/a + 1/b + ...)`.
    /// Resistors or inductors in parallel, capacitors in series.
    #[default]
    Parallel,
    /// Direct sum: `a + b + ...`.
    /// Resistors or inductors in series, capacitors in parallel.
    Series,
}

const RULE_NAMES: &[(&str, CombinationRule)] = &[
    ("parallel", CombinationRule::Parallel),
    ("reciprocal", CombinationRule::Parallel),
    ("series", CombinationRule::Series),
    ("sum", CombinationRule::Series),
];

impl CombinationRule {
    /// Map a component value into the domain where values add
    #[inline]
    pub fn transform(self, value: f64) -> f64 {
        match self {
            CombinationRule::Parallel => value.recip(),
            CombinationRule::Series => value,
        }
    }

    /// Map an accumulated sum back to an equivalent value
    #[inline]
    pub fn combine(self, sum: f64) -> f64 {
        match self {
            CombinationRule::Parallel => sum.recip(),
            CombinationRule::Series => sum,
        }
    }

    /// Equivalent value of `values` under this rule
    pub fn equivalent(self, values: &[f64]) -> f64 {
        let sum = values
            .iter()
            .fold(0.0, |acc, &v| acc + self.transform(v));
        self.combine(sum)
    }

    pub fn name(self) -> &'static str {
        match self {
            CombinationRule::Parallel => "parallel",
            CombinationRule::Series => "series",
        }
    }
}

impl From<bool> for CombinationRule {
    /// `true` selects the reciprocal (parallel) rule
    fn from(parallel: bool) -> Self {
        if parallel {
            CombinationRule::Parallel
        } else {
            CombinationRule::Series
        }
    }
}

impl fmt::Display for CombinationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CombinationRule {
    type Err = ESeriesError;

    /// Accepts rule names by unambiguous prefix and boolean-like flags
    /// (`"true"`/`"1"` for parallel, `"false"`/`"0"` for series).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" => return Ok(CombinationRule::Parallel),
            "false" | "0" | "no" => return Ok(CombinationRule::Series),
            _ => {}
        }
        match_prefix(s, RULE_NAMES)
            .map_err(|e| e.unwrap_or_else(|| ESeriesError::UnknownRule(s.to_string())))
    }
}

/// Error metric between an equivalent value and its target: `|ln(value / target)|`.
///
/// Relative errors of the same size weigh the same at every order of magnitude.
#[inline]
pub fn log_abs_error(value: f64, target: f64) -> f64 {
    (value.ln() - target.ln()).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parallel_equivalent() {
        let r = CombinationRule::Parallel.equivalent(&[100.0, 100.0]);
        assert_relative_eq!(r, 50.0, epsilon = 1e-12);
        let r = CombinationRule::Parallel.equivalent(&[10.0, 15.0]);
        assert_relative_eq!(r, 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_series_equivalent() {
        let r = CombinationRule::Series.equivalent(&[100.0, 22.0, 1.0]);
        assert_relative_eq!(r, 123.0, epsilon = 1e-12);
    }

    #[test]
    fn test_single_component() {
        assert_relative_eq!(CombinationRule::Parallel.equivalent(&[4.7]), 4.7, epsilon = 1e-12);
        assert_eq!(CombinationRule::Series.equivalent(&[4.7]), 4.7);
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(CombinationRule::from(true), CombinationRule::Parallel);
        assert_eq!(CombinationRule::from(false), CombinationRule::Series);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("par".parse::<CombinationRule>(), Ok(CombinationRule::Parallel));
        assert_eq!("S".parse::<CombinationRule>(), Ok(CombinationRule::Series));
        assert_eq!("true".parse::<CombinationRule>(), Ok(CombinationRule::Parallel));
        assert_eq!("0".parse::<CombinationRule>(), Ok(CombinationRule::Series));
        assert!(matches!(
            "bridge".parse::<CombinationRule>(),
            Err(ESeriesError::UnknownRule(_))
        ));
    }

    #[test]
    fn test_log_abs_error_symmetric() {
        let (up, down) = (log_abs_error(200.0, 100.0), log_abs_error(50.0, 100.0));
        assert_relative_eq!(up, down, epsilon = 1e-12);
        assert_eq!(log_abs_error(3.3, 3.3), 0.0);
    }
}
