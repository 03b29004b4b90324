//! Error types
//!
//! Every failure is an invalid argument detected before any computation
//! starts. Individual non-positive or non-finite array elements are not
//! errors: they come back as NaN values and `None` indices.

use thiserror::Error;

/// Errors returned by the rounder and the equivalent-circuit search
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ESeriesError {
    #[error("Unknown series: {0}. Use one of E3, E6, E12, E24, E48, E96, E192")]
    UnknownSeries(String),

    #[error("Unknown rounding policy: {0}. Use 'harmonic', 'arithmetic', 'up' or 'down'")]
    UnknownPolicy(String),

    #[error("Unknown combination rule: {0}. Use 'parallel' or 'series'")]
    UnknownRule(String),

    #[error("Unknown search tier: {0}. Use 'auto', 'iterative' or 'batch'")]
    UnknownTier(String),

    #[error("Ambiguous abbreviation '{name}': matches {}", .candidates.join(", "))]
    AmbiguousName {
        name: String,
        candidates: Vec<&'static str>,
    },

    #[error("Invalid value range [{min}, {max}]: bounds must be positive, finite and ordered")]
    InvalidRange { min: f64, max: f64 },

    #[error("No {series} values lie within [{min}, {max}]")]
    EmptyWindow { series: String, min: f64, max: f64 },

    #[error("Invalid component count {0}: at least one component is required")]
    InvalidComponentCount(usize),

    #[error(
        "Batch search over {window_len} values with {nmc} components exceeds the {} element limit. Use the 'auto' or 'iterative' tier",
        crate::constants::BATCH_ELEMENT_LIMIT
    )]
    BatchTooLarge { window_len: usize, nmc: usize },

    #[error("Invalid value notation: {0}")]
    InvalidNotation(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ESeriesError>;

/// Resolve `name` against `options` by case-insensitive unambiguous prefix.
///
/// An exact match always wins over longer candidates sharing the prefix,
/// and aliases of the same value never make a prefix ambiguous.
pub(crate) fn match_prefix<T: Copy + PartialEq>(
    name: &str,
    options: &[(&'static str, T)],
) -> std::result::Result<T, Option<ESeriesError>> {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return Err(None);
    }

    if let Some(&(_, value)) = options.iter().find(|(label, _)| *label == needle) {
        return Ok(value);
    }

    let hits: Vec<&(&'static str, T)> = options
        .iter()
        .filter(|(label, _)| label.starts_with(&needle))
        .collect();

    match hits.as_slice() {
        [] => Err(None),
        [(_, first), rest @ ..] if rest.iter().all(|(_, v)| v == first) => Ok(*first),
        many => Err(Some(ESeriesError::AmbiguousName {
            name: name.to_string(),
            candidates: many.iter().map(|(label, _)| *label).collect(),
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTIONS: &[(&str, u8)] = &[("harmonic", 1), ("arithmetic", 2), ("up", 3)];

    #[test]
    fn test_prefix_unique() {
        assert_eq!(match_prefix("h", OPTIONS), Ok(1));
        assert_eq!(match_prefix("ARITH", OPTIONS), Ok(2));
        assert_eq!(match_prefix("up", OPTIONS), Ok(3));
    }

    #[test]
    fn test_prefix_unknown() {
        assert_eq!(match_prefix("x", OPTIONS), Err(None));
        assert_eq!(match_prefix("", OPTIONS), Err(None));
    }

    #[test]
    fn test_prefix_aliases() {
        let opts: &[(&str, u8)] = &[("series", 1), ("sum", 1), ("parallel", 2)];
        assert_eq!(match_prefix("s", opts), Ok(1));
    }

    #[test]
    fn test_prefix_ambiguous() {
        let opts: &[(&str, u8)] = &[("series", 1), ("serial", 2)];
        match match_prefix("ser", opts) {
            Err(Some(ESeriesError::AmbiguousName { candidates, .. })) => {
                assert_eq!(candidates, vec!["series", "serial"]);
            }
            other => panic!("expected ambiguity, got {:?}", other),
        }
    }
}
