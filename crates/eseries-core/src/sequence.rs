//! Preferred-number sequences
//!
//! A preferred-number sequence (PNS) is an E-series extrapolated across a
//! range of decades. Sequences are rebuilt on every call from the fixed
//! per-decade mantissas; nothing is cached.

use crate::constants::{MANTISSA_SCALE_EXP, UNDERFLOW_FLOOR, WINDOW_REL_TOL};
use crate::series::Series;

/// Largest power of ten that is exactly representable as an `f64`.
const EXACT_POW10_MAX: i32 = 22;

/// Value of a mantissa (in hundredths) placed in `decade`.
///
/// `decade_value(470, 0)` is 4.7 and `decade_value(470, 1)` is 47. The
/// result is always the nearest `f64` to the decimal value, so it compares
/// equal to the literal (`4.7e-25`, `1e308`). Values past `f64::MAX` come
/// back infinite and values below the subnormal range come back as zero.
pub fn decade_value(mantissa: u16, decade: i32) -> f64 {
    let m = f64::from(mantissa);
    let exp = decade - MANTISSA_SCALE_EXP;

    if (0..=EXACT_POW10_MAX).contains(&exp) {
        m * 10f64.powi(exp)
    } else if (-EXACT_POW10_MAX..0).contains(&exp) {
        m / 10f64.powi(-exp)
    } else {
        // no exact power of ten; decimal parsing is correctly rounded
        format!("{}e{}", mantissa, exp)
            .parse()
            .unwrap_or_else(|_| m * 10f64.powi(exp))
    }
}

/// Sequence for decades `lo..=hi`, strictly increasing.
///
/// Entries that overflow to infinity or fall below [`UNDERFLOW_FLOOR`] are
/// left out.
pub fn pns_for_decades(series: Series, lo: i32, hi: i32) -> Vec<f64> {
    if hi < lo {
        return Vec::new();
    }

    let mantissas = series.mantissas();
    let mut pns = Vec::with_capacity(mantissas.len() * (hi - lo + 1) as usize);

    for decade in lo..=hi {
        pns.extend(
            mantissas
                .iter()
                .map(|&m| decade_value(m, decade))
                .filter(|v| v.is_finite() && *v >= UNDERFLOW_FLOOR),
        );
    }

    pns
}

/// Decade of `x`: `floor(log10(x))`
#[inline]
pub fn decade_floor(x: f64) -> i32 {
    x.log10().floor() as i32
}

/// `ceil(log10(x))`
#[inline]
pub fn decade_ceil(x: f64) -> i32 {
    x.log10().ceil() as i32
}

/// Sequence covering every value in `[min, max]` with at least one
/// neighbour on either side.
///
/// One extra decade is prepended below `min`, so both the nearest value and
/// the next-lower value exist for every input in range.
pub fn pns_covering(series: Series, min: f64, max: f64) -> Vec<f64> {
    let lo = decade_floor(min) - 1;
    let hi = decade_ceil(max);
    pns_for_decades(series, lo, hi)
}

/// Every sequence value `v` with `min <= v <= max`.
///
/// The bounds are widened by a small relative slack so that a bound written
/// as a decimal literal (`1000.0`) includes the computed value it names.
pub fn pns_within(series: Series, min: f64, max: f64) -> Vec<f64> {
    let lower = min * (1.0 - WINDOW_REL_TOL);
    let upper = max * (1.0 + WINDOW_REL_TOL);

    pns_for_decades(series, decade_floor(min), decade_ceil(max))
        .into_iter()
        .filter(|&v| v >= lower && v <= upper)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decade_value_exact() {
        assert_eq!(decade_value(470, 0), 4.7);
        assert_eq!(decade_value(470, 1), 47.0);
        assert_eq!(decade_value(470, 2), 470.0);
        assert_eq!(decade_value(470, -1), 0.47);
        assert_eq!(decade_value(100, 3), 1000.0);
        assert_eq!(decade_value(330, -9), 3.3e-9);
    }

    #[test]
    fn test_decade_value_far_decades() {
        assert_eq!(decade_value(100, 308), 1e308);
        assert_eq!(decade_value(470, -25), 4.7e-25);
        assert_eq!(decade_value(820, -30), 8.2e-30);
        assert_eq!(decade_value(330, 40), 3.3e40);
        assert_eq!(decade_value(150, -300), 1.5e-300);
        assert_eq!(decade_value(976, 200), 9.76e200);
        assert!(decade_value(220, 308).is_infinite());
        assert_eq!(decade_value(100, -330), 0.0);
    }

    #[test]
    fn test_pns_for_decades() {
        let pns = pns_for_decades(Series::E3, 0, 1);
        assert_eq!(pns, vec![1.0, 2.2, 4.7, 10.0, 22.0, 47.0]);
    }

    #[test]
    fn test_pns_strictly_increasing() {
        for series in Series::ALL {
            let pns = pns_for_decades(series, -3, 6);
            assert_eq!(pns.len(), series.len() * 10);
            assert!(pns.windows(2).all(|w| w[0] < w[1]), "{}", series);
        }
    }

    #[test]
    fn test_pns_drops_non_finite() {
        let pns = pns_for_decades(Series::E6, 307, 309);
        assert!(pns.iter().all(|v| v.is_finite()));
        assert!(pns.len() < 3 * 6);

        let tiny = pns_for_decades(Series::E6, -310, -307);
        assert!(tiny.iter().all(|&v| v >= UNDERFLOW_FLOOR));
    }

    #[test]
    fn test_pns_covering_has_neighbours() {
        let pns = pns_covering(Series::E6, 5.0, 100.0);
        assert!(pns.first().copied().unwrap() < 5.0);
        assert!(pns.last().copied().unwrap() > 100.0);
        assert!(pns.contains(&4.7));
        assert!(pns.contains(&100.0));
    }

    #[test]
    fn test_pns_within_inclusive() {
        let window = pns_within(Series::E12, 10.0, 1000.0);
        assert_eq!(window.first().copied(), Some(10.0));
        assert_eq!(window.last().copied(), Some(1000.0));
        // two full decades plus the upper bound itself
        assert_eq!(window.len(), 25);
    }

    #[test]
    fn test_pns_within_partial_decade() {
        let window = pns_within(Series::E6, 2.0, 5.0);
        assert_eq!(window, vec![2.2, 3.3, 4.7]);
    }

    #[test]
    fn test_pns_empty_range() {
        assert!(pns_for_decades(Series::E12, 2, 1).is_empty());
        assert!(pns_within(Series::E3, 2.3, 4.6).is_empty());
    }
}
