//! eseries-core: IEC 60063 preferred-number library
//!
//! Rounds arbitrary values to standardized component values (E3 to E192)
//! and searches combinations of standard parts that approximate a value
//! that is not in the series.
//!
//! ## Modules
//!
//! - `series` - E-series tables and metadata
//! - `sequence` - Decade-extrapolated preferred-number sequences
//! - `rounding` - Rounding to a series under a bin-edge policy
//! - `circuit` - Equivalent-circuit search (parallel / series combinations)
//! - `notation` - RKM codes and SI notation for component values
//! - `render` - Plain-text presentation of results

pub mod circuit;
pub mod constants;
pub mod error;
pub mod notation;
pub mod render;
pub mod rounding;
pub mod sequence;
pub mod series;

pub use circuit::{
    equivalent_circuit, num2circuit, CombinationRule, EquivalentCircuit, SearchOptions,
};
pub use error::{ESeriesError, Result};
pub use rounding::{round63, round_to_series, BinPolicy, RoundOptions, Rounded};
pub use series::Series;
