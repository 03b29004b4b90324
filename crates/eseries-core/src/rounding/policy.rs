//! Bin-edge policies
//!
//! A policy decides where the boundary between two adjacent sequence
//! values lies, and therefore which value an arbitrary input rounds to.

use std::fmt;
use std::str::FromStr;

use crate::constants::UNDERFLOW_FLOOR;
use crate::error::{match_prefix, ESeriesError};

/// Bin-edge policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BinPolicy {
    /// Edge at the harmonic mean `2ab/(a+b)`. Gives bins of roughly equal
    /// percentage tolerance on either side of each preferred value.
    #[default]
    Harmonic,
    /// Edge at the arithmetic mean `(a+b)/2`
    Arithmetic,
    /// Always round to the next-higher value (ceiling)
    Up,
    /// Always round to the next-lower value (floor)
    Down,
}

const POLICY_NAMES: &[(&str, BinPolicy)] = &[
    ("harmonic", BinPolicy::Harmonic),
    ("arithmetic", BinPolicy::Arithmetic),
    ("up", BinPolicy::Up),
    ("down", BinPolicy::Down),
];

impl BinPolicy {
    /// Boundary between adjacent sequence values `a < b`
    ///
    /// Both means are evaluated in a form that cannot overflow for values
    /// near `f64::MAX`.
    #[inline]
    pub fn edge(self, a: f64, b: f64) -> f64 {
        match self {
            BinPolicy::Harmonic => 2.0 / (a.recip() + b.recip()),
            BinPolicy::Arithmetic => a + (b - a) / 2.0,
            BinPolicy::Up => a,
            BinPolicy::Down => b,
        }
    }

    /// Index of the bin `x` falls into, given ascending `edges`.
    ///
    /// Bins are closed below (`x` on an edge goes to the upper value),
    /// except for [`BinPolicy::Up`] where they are closed above. The latter
    /// is the same as binning `-x` against the negated, reversed edges.
    #[inline]
    pub fn bin_index(self, edges: &[f64], x: f64) -> usize {
        match self {
            BinPolicy::Up => edges.partition_point(|&e| e < x),
            BinPolicy::Harmonic | BinPolicy::Arithmetic | BinPolicy::Down => {
                edges.partition_point(|&e| e <= x)
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BinPolicy::Harmonic => "harmonic",
            BinPolicy::Arithmetic => "arithmetic",
            BinPolicy::Up => "up",
            BinPolicy::Down => "down",
        }
    }
}

impl fmt::Display for BinPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BinPolicy {
    type Err = ESeriesError;

    /// Case-insensitive, accepts any unambiguous prefix (`"h"`, `"arith"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_prefix(s, POLICY_NAMES)
            .map_err(|e| e.unwrap_or_else(|| ESeriesError::UnknownPolicy(s.to_string())))
    }
}

/// Edges between adjacent entries of `pns`, trimmed of underflow.
///
/// Returns the (possibly shortened) sequence together with its edges so that
/// `edges.len() == pns.len() - 1` always holds. Edges below
/// [`UNDERFLOW_FLOOR`] are dropped along with the sequence entries below them.
pub fn bin_edges(pns: &[f64], policy: BinPolicy) -> (Vec<f64>, Vec<f64>) {
    let edges: Vec<f64> = pns
        .windows(2)
        .map(|w| policy.edge(w[0], w[1]))
        .collect();

    let skip = edges.iter().take_while(|&&e| e < UNDERFLOW_FLOOR).count();

    (pns[skip..].to_vec(), edges[skip..].to_vec())
}
