//! IEC 60063 preferred-number series
//!
//! Each series defines a fixed, ordered set of mantissas in [1, 10) that
//! repeats in every decade. Mantissas are stored as integers in hundredths
//! so that decade scaling can be done exactly.

use std::fmt;
use std::str::FromStr;

use crate::error::ESeriesError;

const E3: [u16; 3] = [100, 220, 470];

const E6: [u16; 6] = [100, 150, 220, 330, 470, 680];

const E12: [u16; 12] = [100, 120, 150, 180, 220, 270, 330, 390, 470, 560, 680, 820];

const E24: [u16; 24] = [
    100, 110, 120, 130, 150, 160, 180, 200, 220, 240, 270, 300, 330, 360, 390, 430, 470, 510, 560,
    620, 680, 750, 820, 910,
];

const E48: [u16; 48] = [
    100, 105, 110, 115, 121, 127, 133, 140, 147, 154, 162, 169, 178, 187, 196, 205, 215, 226, 237,
    249, 261, 274, 287, 301, 316, 332, 348, 365, 383, 402, 422, 442, 464, 487, 511, 536, 562, 590,
    619, 649, 681, 715, 750, 787, 825, 866, 909, 953,
];

const E96: [u16; 96] = [
    100, 102, 105, 107, 110, 113, 115, 118, 121, 124, 127, 130, 133, 137, 140, 143, 147, 150, 154,
    158, 162, 165, 169, 174, 178, 182, 187, 191, 196, 200, 205, 210, 215, 221, 226, 232, 237, 243,
    249, 255, 261, 267, 274, 280, 287, 294, 301, 309, 316, 324, 332, 340, 348, 357, 365, 374, 383,
    392, 402, 412, 422, 432, 442, 453, 464, 475, 487, 499, 511, 523, 536, 549, 562, 576, 590, 604,
    619, 634, 649, 665, 681, 698, 715, 732, 750, 768, 787, 806, 825, 845, 866, 887, 909, 931, 953,
    976,
];

// 920 (not 919) is the standardized value at position 185.
const E192: [u16; 192] = [
    100, 101, 102, 104, 105, 106, 107, 109, 110, 111, 113, 114, 115, 117, 118, 120, 121, 123, 124,
    126, 127, 129, 130, 132, 133, 135, 137, 138, 140, 142, 143, 145, 147, 149, 150, 152, 154, 156,
    158, 160, 162, 164, 165, 167, 169, 172, 174, 176, 178, 180, 182, 184, 187, 189, 191, 193, 196,
    198, 200, 203, 205, 208, 210, 213, 215, 218, 221, 223, 226, 229, 232, 234, 237, 240, 243, 246,
    249, 252, 255, 258, 261, 264, 267, 271, 274, 277, 280, 284, 287, 291, 294, 298, 301, 305, 309,
    312, 316, 320, 324, 328, 332, 336, 340, 344, 348, 352, 357, 361, 365, 370, 374, 379, 383, 388,
    392, 397, 402, 407, 412, 417, 422, 427, 432, 437, 442, 448, 453, 459, 464, 470, 475, 481, 487,
    493, 499, 505, 511, 517, 523, 530, 536, 542, 549, 556, 562, 569, 576, 583, 590, 597, 604, 612,
    619, 626, 634, 642, 649, 657, 665, 673, 681, 690, 698, 706, 715, 723, 732, 741, 750, 759, 768,
    777, 787, 796, 806, 816, 825, 835, 845, 856, 866, 876, 887, 898, 909, 920, 931, 942, 953, 965,
    976, 988,
];

/// Preferred-number series identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Series {
    E3,
    E6,
    #[default]
    E12,
    E24,
    E48,
    E96,
    E192,
}

impl Series {
    /// All series, coarsest first
    pub const ALL: [Series; 7] = [
        Series::E3,
        Series::E6,
        Series::E12,
        Series::E24,
        Series::E48,
        Series::E96,
        Series::E192,
    ];

    /// Mantissas of one decade in hundredths, ascending (`470` is 4.7)
    pub fn mantissas(self) -> &'static [u16] {
        match self {
            Series::E3 => &E3,
            Series::E6 => &E6,
            Series::E12 => &E12,
            Series::E24 => &E24,
            Series::E48 => &E48,
            Series::E96 => &E96,
            Series::E192 => &E192,
        }
    }

    /// Mantissas of one decade as values in [1, 10)
    pub fn base_values(self) -> Vec<f64> {
        self.mantissas().iter().map(|&m| f64::from(m) / 100.0).collect()
    }

    /// Number of values per decade
    #[inline]
    pub fn len(self) -> usize {
        self.mantissas().len()
    }

    /// Series name as printed on datasheets
    pub fn name(self) -> &'static str {
        match self {
            Series::E3 => "E3",
            Series::E6 => "E6",
            Series::E12 => "E12",
            Series::E24 => "E24",
            Series::E48 => "E48",
            Series::E96 => "E96",
            Series::E192 => "E192",
        }
    }

    /// Nominal component tolerance associated with the series, as a fraction
    pub fn tolerance(self) -> f64 {
        match self {
            Series::E3 => 0.40,
            Series::E6 => 0.20,
            Series::E12 => 0.10,
            Series::E24 => 0.05,
            Series::E48 => 0.02,
            Series::E96 => 0.01,
            Series::E192 => 0.005,
        }
    }

    /// Whether `mantissa` (in hundredths) is a member of this series
    pub fn contains_mantissa(self, mantissa: u16) -> bool {
        self.mantissas().binary_search(&mantissa).is_ok()
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Series {
    type Err = ESeriesError;

    /// Parse `"E12"`, `"e12"` or `"12"`. Series names are never abbreviated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('E')
            .or_else(|| trimmed.strip_prefix('e'))
            .unwrap_or(trimmed);

        match digits.parse::<u16>() {
            Ok(3) => Ok(Series::E3),
            Ok(6) => Ok(Series::E6),
            Ok(12) => Ok(Series::E12),
            Ok(24) => Ok(Series::E24),
            Ok(48) => Ok(Series::E48),
            Ok(96) => Ok(Series::E96),
            Ok(192) => Ok(Series::E192),
            _ => Err(ESeriesError::UnknownSeries(s.to_string())),
        }
    }
}
