//! Component value notation
//!
//! RKM codes (IEC 60062) as printed on schematics and parts lists, where the
//! multiplier letter replaces the decimal point (`4K7`, `R47`, `2n2`), and
//! plain SI engineering notation (`4.7 kΩ`).

use crate::error::{ESeriesError, Result};
use crate::rounding::is_defined;

/// Kind of component, selects the RKM multiplier letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quantity {
    #[default]
    Resistance,
    Capacitance,
    Inductance,
}

const RESISTANCE_SCALES: &[(f64, &str)] = &[(1e9, "G"), (1e6, "M"), (1e3, "K"), (1.0, "R")];

const CAPACITANCE_SCALES: &[(f64, &str)] = &[
    (1.0, "F"),
    (1e-3, "m"),
    (1e-6, "u"),
    (1e-9, "n"),
    (1e-12, "p"),
];

const INDUCTANCE_SCALES: &[(f64, &str)] = &[
    (1.0, "H"),
    (1e-3, "m"),
    (1e-6, "u"),
    (1e-9, "n"),
];

const SI_PREFIXES: &[(i32, &str)] = &[
    (-15, "f"),
    (-12, "p"),
    (-9, "n"),
    (-6, "µ"),
    (-3, "m"),
    (0, ""),
    (3, "k"),
    (6, "M"),
    (9, "G"),
    (12, "T"),
];

impl Quantity {
    fn scales(self) -> &'static [(f64, &'static str)] {
        match self {
            Quantity::Resistance => RESISTANCE_SCALES,
            Quantity::Capacitance => CAPACITANCE_SCALES,
            Quantity::Inductance => INDUCTANCE_SCALES,
        }
    }

    /// SI unit symbol
    pub fn unit(self) -> &'static str {
        match self {
            Quantity::Resistance => "Ω",
            Quantity::Capacitance => "F",
            Quantity::Inductance => "H",
        }
    }
}

/// `x` with at most `digits` significant digits, trailing zeros removed
fn format_significant(x: f64, digits: i32) -> String {
    let magnitude = x.abs().log10().floor() as i32;
    let decimals = (digits - 1 - magnitude).max(0) as usize;
    let text = format!("{:.*}", decimals, x);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

/// RKM code of `value`, three significant digits at most.
///
/// `None` if `value` is not finite and positive.
///
/// ```
/// use eseries_core::notation::{format_rkm, Quantity};
/// assert_eq!(format_rkm(4700.0, Quantity::Resistance).as_deref(), Some("4K7"));
/// assert_eq!(format_rkm(0.47, Quantity::Resistance).as_deref(), Some("R47"));
/// assert_eq!(format_rkm(2.2e-9, Quantity::Capacitance).as_deref(), Some("2n2"));
/// ```
pub fn format_rkm(value: f64, quantity: Quantity) -> Option<String> {
    if !is_defined(value) {
        return None;
    }

    let scales = quantity.scales();
    let &(scale, letter) = scales
        .iter()
        .find(|(s, _)| value >= s * (1.0 - 1e-9))
        .or_else(|| scales.last())?;

    let text = format_significant(value / scale, 3);
    Some(match text.split_once('.') {
        Some(("0", frac)) => format!("{}{}", letter, frac),
        Some((int, frac)) => format!("{}{}{}", int, letter, frac),
        None => format!("{}{}", text, letter),
    })
}

/// Value of an RKM code such as `4K7`, `R47`, `100n` or `2u2`.
///
/// Multiplier letters are case-sensitive where it matters (`m` milli,
/// `M` mega); `k`/`K` and `u`/`µ` are both accepted.
pub fn parse_rkm(code: &str) -> Result<f64> {
    let code = code.trim();
    let invalid = || ESeriesError::InvalidNotation(code.to_string());

    let (pos, letter) = code
        .char_indices()
        .find(|(_, c)| c.is_alphabetic())
        .ok_or_else(invalid)?;

    let scale = match letter {
        'R' | 'r' | 'F' | 'H' => 1.0,
        'K' | 'k' => 1e3,
        'M' => 1e6,
        'G' => 1e9,
        'm' => 1e-3,
        'u' | 'µ' => 1e-6,
        'n' => 1e-9,
        'p' => 1e-12,
        _ => return Err(invalid()),
    };

    let int = &code[..pos];
    let frac = &code[pos + letter.len_utf8()..];
    if (int.is_empty() && frac.is_empty())
        || !int.chars().chain(frac.chars()).all(|c| c.is_ascii_digit())
    {
        return Err(invalid());
    }

    let digits = format!(
        "{}.{}",
        if int.is_empty() { "0" } else { int },
        if frac.is_empty() { "0" } else { frac }
    );
    let mantissa: f64 = digits.parse().map_err(|_| invalid())?;
    Ok(mantissa * scale)
}

/// Engineering notation with an SI prefix, e.g. `4.7 kΩ` or `100 nF`.
pub fn format_si(value: f64, unit: &str) -> Option<String> {
    if !is_defined(value) {
        return None;
    }

    let exp3 = (value.log10() / 3.0).floor() as i32 * 3;
    let (exp, prefix) = SI_PREFIXES
        .iter()
        .copied()
        .min_by_key(|(e, _)| (e - exp3).abs())?;

    let scaled = value / 10f64.powi(exp);
    Some(format!("{} {}{}", format_significant(scaled, 3), prefix, unit))
}
