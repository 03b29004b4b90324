//! Numerical constants for preferred-number calculations
//!
//! Provides the thresholds shared by the rounder and the equivalent-circuit
//! search.

/// Smallest value a preferred-number sequence may contain.
/// Sequence entries and bin edges below this are discarded so that
/// edge arithmetic never runs through subnormal numbers.
pub const UNDERFLOW_FLOOR: f64 = f64::MIN_POSITIVE;

/// Largest number of elements the batch search tier may materialize
/// (`window_len ^ component_count`). Above this the iterative tier is used.
pub const BATCH_ELEMENT_LIMIT: usize = 1 << 22;

/// Relative slack applied when testing a sequence value against a
/// user-supplied `[min, max]` window.
pub const WINDOW_REL_TOL: f64 = 1e-9;

/// Mantissas are stored in hundredths (`470` is 4.7).
pub const MANTISSA_SCALE_EXP: i32 = 2;
