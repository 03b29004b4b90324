//! Preferred-Number Rounding Tests
//!
//! Worked examples, policy semantics and output windows of the rounder.

mod common;

use approx::assert_relative_eq;
use eseries_core::rounding::{round63, round_to_series, round_value, BinPolicy, RoundOptions};
use eseries_core::sequence::decade_value;
use eseries_core::Series;
use ndarray::{array, Array1, Array3};

const POLICIES: [BinPolicy; 4] = [
    BinPolicy::Harmonic,
    BinPolicy::Arithmetic,
    BinPolicy::Up,
    BinPolicy::Down,
];

// ============================================================================
// Worked examples
// ============================================================================

#[test]
fn test_round_500_e12() {
    common::init_tracing();
    let r = round63(&array![500.0], Series::E12);
    assert_eq!(r.values[0], 470.0);
    assert_eq!(r.pns, vec![470.0]);
    assert_eq!(r.index[0], Some(0));
}

#[test]
fn test_round_e6_default_policy() {
    let x = array![5.0, 42.0, 18.0, 100.0];
    let r = round63(&x, Series::E6);
    assert_eq!(r.values, array![4.7, 47.0, 22.0, 100.0]);
}

#[test]
fn test_round_e6_up() {
    let x = array![5.0, 42.0, 18.0, 100.0];
    let r = round_to_series(&x, Series::E6, &RoundOptions::with_policy(BinPolicy::Up));
    assert_eq!(r.values, array![6.8, 47.0, 22.0, 100.0]);
}

#[test]
fn test_round_e6_down() {
    let x = array![5.0, 42.0, 18.0, 100.0];
    let r = round_to_series(&x, Series::E6, &RoundOptions::with_policy(BinPolicy::Down));
    assert_eq!(r.values, array![4.7, 33.0, 15.0, 100.0]);
}

#[test]
fn test_policy_from_abbreviation() {
    let x = array![5.0, 42.0, 18.0, 100.0];
    let policy: BinPolicy = "u".parse().unwrap();
    let r = round_to_series(&x, Series::E6, &RoundOptions::with_policy(policy));
    assert_eq!(r.values[0], 6.8);
}

// ============================================================================
// Windows and indices
// ============================================================================

#[test]
fn test_index_into_window() {
    let x = array![1.0, 3.0, 95.0, 0.2];
    let r = round63(&x, Series::E24);
    for (v, i) in r.values.iter().zip(r.index.iter()) {
        assert_eq!(r.pns[i.unwrap()], *v);
    }
    assert_eq!(r.pns.first().copied(), Some(0.2));
    assert_eq!(r.pns.last().copied(), Some(91.0));
    assert_eq!(r.edges.len() + 1, r.pns.len());
}

#[test]
fn test_window_is_contiguous_sequence() {
    let x = array![1.0, 1000.0];
    let r = round63(&x, Series::E12);
    // three full decades plus 1000
    assert_eq!(r.pns.len(), 37);
    assert!(r.pns.windows(2).all(|w| w[0] < w[1]));
    assert!(r.edges.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_up_down_edges_are_sequence_values() {
    let x = array![2.0, 30.0];
    let up = round_to_series(&x, Series::E6, &RoundOptions::with_policy(BinPolicy::Up));
    assert_eq!(&up.edges[..], &up.pns[..up.pns.len() - 1]);

    let down = round_to_series(&x, Series::E6, &RoundOptions::with_policy(BinPolicy::Down));
    assert_eq!(&down.edges[..], &down.pns[1..]);
}

#[test]
fn test_multidimensional_input() {
    let x = Array3::from_shape_fn((2, 3, 4), |(i, j, k)| 1.0 + (i * 12 + j * 4 + k) as f64 * 7.3);
    let r = round63(&x, Series::E48);
    assert_eq!(r.values.shape(), x.shape());
    assert_eq!(r.index.shape(), x.shape());
    for (v, xin) in r.values.iter().zip(x.iter()) {
        assert_relative_eq!(*v, *xin, max_relative = 0.03);
    }
}

// ============================================================================
// Undefined elements
// ============================================================================

#[test]
fn test_undefined_do_not_widen_sequence() {
    let x = array![1e-30, 10.0];
    let y = array![-1e-30, 10.0];
    let wide = round63(&x, Series::E12);
    let narrow = round63(&y, Series::E12);
    assert!(wide.pns.len() > narrow.pns.len());
    assert_eq!(narrow.pns, vec![10.0]);
    assert!(narrow.values[0].is_nan());
}

#[test]
fn test_every_policy_masks_undefined() {
    let x = array![0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY];
    for policy in POLICIES {
        let r = round_to_series(&x, Series::E96, &RoundOptions::with_policy(policy));
        assert!(r.values.iter().all(|v| v.is_nan()));
        assert!(r.index.iter().all(Option::is_none));
    }
}

// ============================================================================
// Series membership over many decades
// ============================================================================

#[test]
fn test_results_are_series_members() {
    let x: Array1<f64> = Array1::geomspace(1e-6, 1e9, 400).unwrap();
    for series in Series::ALL {
        for policy in POLICIES {
            let r = round_to_series(&x, series, &RoundOptions::with_policy(policy));
            for &v in r.values.iter() {
                let decade = v.log10().floor() as i32;
                let hit = series
                    .mantissas()
                    .iter()
                    .any(|&m| decade_value(m, decade) == v || decade_value(m, decade + 1) == v);
                assert!(hit, "{} not in {} ({})", v, series, policy);
            }
        }
    }
}

#[test]
fn test_far_decade_members_round_to_themselves() {
    let literals = [
        1e308, 1.8e307, 3.3e40, 9.1e22, 4.7e-25, 8.2e-30, 1.5e-300, 2.2e-307,
    ];
    for &x in &literals {
        for policy in POLICIES {
            assert_eq!(round_value(x, Series::E24, policy), Some(x), "{} ({})", x, policy);
        }
    }
    assert_eq!(round_value(1e308, Series::E12, BinPolicy::Harmonic), Some(1e308));
    assert_eq!(round_value(4.7e-25, Series::E12, BinPolicy::Harmonic), Some(4.7e-25));
}

#[test]
fn test_round_value_matches_array() {
    for &x in &[0.9, 7.0, 15.5, 123.0, 6.5e4] {
        for policy in POLICIES {
            let arr = round_to_series(&array![x], Series::E24, &RoundOptions::with_policy(policy));
            assert_eq!(round_value(x, Series::E24, policy), Some(arr.values[0]));
        }
    }
}
