//! Equivalent-circuit search
//!
//! Finds the combination of `nmc` preferred values (repetition allowed,
//! order irrelevant) whose parallel or series combination best approximates
//! a target value.
//!
//! Two search tiers implement [`CombinationSearch`]: an iterative
//! enumeration with constant memory, and a batch tier that materializes the
//! outer sum of all index tuples. The tier is chosen from the `n^nmc`
//! element estimate before dispatch unless forced through
//! [`SearchOptions`]; both return the same selections.
//!
//! # Example
//! ```
//! use eseries_core::circuit::num2circuit;
//! use eseries_core::Series;
//! use ndarray::array;
//!
//! // three E12 resistors in parallel, each between 10 and 1000 ohms
//! let r = num2circuit(&array![123.0], Series::E12, (10.0, 1000.0), 3, true).unwrap();
//! assert!(r.error[0] < 0.01);
//! ```

mod batch;
mod core;
mod iterative;
mod rule;
mod strategy;

pub use self::core::{
    equivalent_circuit, num2circuit, validate_range, EquivalentCircuit, SearchOptions,
};
pub use batch::{outer_sum, BatchSearch};
pub use iterative::IterativeSearch;
pub use rule::{log_abs_error, CombinationRule};
pub use strategy::{combination_count, CombinationSearch, SearchTier, Selection, TierSelection};
