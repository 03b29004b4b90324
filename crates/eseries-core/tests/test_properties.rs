//! Property-based tests using proptest
//!
//! Membership, idempotence, direction and monotonicity of rounding, and
//! agreement of the two search tiers on random inputs.

mod common;

use eseries_core::circuit::{equivalent_circuit, CombinationRule, SearchOptions, SearchTier};
use eseries_core::rounding::{round_to_series, round_value, BinPolicy, RoundOptions};
use eseries_core::Series;
use ndarray::Array1;
use proptest::prelude::*;

fn series_strategy() -> impl Strategy<Value = Series> {
    prop::sample::select(Series::ALL.to_vec())
}

fn policy_strategy() -> impl Strategy<Value = BinPolicy> {
    prop::sample::select(vec![
        BinPolicy::Harmonic,
        BinPolicy::Arithmetic,
        BinPolicy::Up,
        BinPolicy::Down,
    ])
}

/// Positive values spread log-uniformly over many decades
fn value_strategy() -> impl Strategy<Value = f64> {
    (-12.0f64..12.0).prop_map(|e| 10f64.powf(e))
}

/// Membership read off the shortest decimal form of `v`: its significant
/// digits, padded to hundredths, must be a mantissa of the series.
fn is_member(series: Series, v: f64) -> bool {
    let text = format!("{:e}", v);
    let Some((mantissa, _)) = text.split_once('e') else {
        return false;
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    if digits.len() > 3 {
        return false;
    }
    format!("{:0<3}", digits)
        .parse::<u16>()
        .map_or(false, |m| series.contains_mantissa(m))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Every result is a mantissa of the series scaled by a power of ten
    #[test]
    fn prop_result_in_series(x in value_strategy(), series in series_strategy(), policy in policy_strategy()) {
        let y = round_value(x, series, policy).unwrap();
        prop_assert!(is_member(series, y), "{} -> {} not in {}", x, y, series);
    }

    /// Membership also holds far outside the exactly representable decades
    #[test]
    fn prop_result_in_series_far_decades(
        e in prop_oneof![-300.0f64..-23.0, 24.0f64..307.0],
        series in series_strategy(),
        policy in policy_strategy(),
    ) {
        let x = 10f64.powf(e);
        let y = round_value(x, series, policy).unwrap();
        prop_assert!(is_member(series, y), "{} -> {} not in {}", x, y, series);
    }

    /// Rounding a rounded value changes nothing
    #[test]
    fn prop_idempotent(x in value_strategy(), series in series_strategy(), policy in policy_strategy()) {
        let once = round_value(x, series, policy).unwrap();
        let twice = round_value(once, series, policy).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Up never decreases, down never increases
    #[test]
    fn prop_direction(x in value_strategy(), series in series_strategy()) {
        prop_assert!(round_value(x, series, BinPolicy::Up).unwrap() >= x);
        prop_assert!(round_value(x, series, BinPolicy::Down).unwrap() <= x);
    }

    /// Nearest-style policies stay within one series step of the input
    #[test]
    fn prop_nearest_within_step(x in value_strategy(), series in series_strategy()) {
        let down = round_value(x, series, BinPolicy::Down).unwrap();
        let up = round_value(x, series, BinPolicy::Up).unwrap();
        for policy in [BinPolicy::Harmonic, BinPolicy::Arithmetic] {
            let y = round_value(x, series, policy).unwrap();
            prop_assert!(y == down || y == up);
        }
    }

    /// x1 < x2 implies round(x1) <= round(x2)
    #[test]
    fn prop_monotonic(a in value_strategy(), b in value_strategy(), series in series_strategy(), policy in policy_strategy()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let x = Array1::from(vec![lo, hi]);
        let r = round_to_series(&x, series, &RoundOptions::with_policy(policy));
        prop_assert!(r.values[0] <= r.values[1]);

        // also when rounded in separate calls
        let y_lo = round_value(lo, series, policy).unwrap();
        let y_hi = round_value(hi, series, policy).unwrap();
        prop_assert!(y_lo <= y_hi);
    }

    /// Undefined elements never produce a number
    #[test]
    fn prop_undefined_marker(x in prop_oneof![
        Just(0.0),
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        (-1e12f64..0.0),
    ], series in series_strategy(), policy in policy_strategy()) {
        let arr = Array1::from(vec![x, 1.0]);
        let r = round_to_series(&arr, series, &RoundOptions::with_policy(policy));
        prop_assert!(r.values[0].is_nan());
        prop_assert!(r.index[0].is_none());
        prop_assert_eq!(r.values[1], 1.0);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(40))]

    /// Both tiers pick the same multiset
    #[test]
    fn prop_tiers_agree(
        targets in prop::collection::vec(0.1f64..1e4, 1..8),
        nmc in 1usize..=3,
        parallel in any::<bool>(),
        series in prop::sample::select(vec![Series::E3, Series::E6, Series::E12]),
    ) {
        common::init_tracing();
        let targets = Array1::from(targets);
        let base = SearchOptions::new(CombinationRule::from(parallel));
        let it = equivalent_circuit(&targets, series, (1.0, 1000.0), nmc, &base.with_tier(SearchTier::Iterative)).unwrap();
        let bt = equivalent_circuit(&targets, series, (1.0, 1000.0), nmc, &base.with_tier(SearchTier::Batch)).unwrap();
        prop_assert_eq!(it.indices, bt.indices);
    }
}
