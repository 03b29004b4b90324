//! Preferred-number rounding
//!
//! Rounds arbitrary positive real values to the nearest value of an E-series
//! under a selectable bin-edge policy.
//!
//! # Example
//! ```
//! use eseries_core::rounding::{round_to_series, BinPolicy, RoundOptions};
//! use eseries_core::Series;
//! use ndarray::array;
//!
//! let x = array![5.0, 42.0, 18.0, 100.0];
//! let up = round_to_series(&x, Series::E6, &RoundOptions::with_policy(BinPolicy::Up));
//! assert_eq!(up.values.to_vec(), vec![6.8, 47.0, 22.0, 100.0]);
//! ```

mod core;
mod policy;

pub use self::core::{is_defined, round63, round_to_series, round_value, RoundOptions, Rounded};
pub use policy::{bin_edges, BinPolicy};
