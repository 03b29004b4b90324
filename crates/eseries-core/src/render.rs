//! Presentation of results
//!
//! The library holds no presentation state. Callers inject a [`Renderer`];
//! [`TextRenderer`] writes plain-text tables to any `io::Write`.

use std::io::{self, Write};

use ndarray::Ix1;

use crate::circuit::EquivalentCircuit;
use crate::notation::{format_rkm, Quantity};
use crate::rounding::Rounded;

/// Sink for rounding and search results
pub trait Renderer {
    fn render_rounding(&mut self, input: &[f64], result: &Rounded<Ix1>) -> io::Result<()>;

    fn render_circuit(
        &mut self,
        targets: &[f64],
        result: &EquivalentCircuit<Ix1>,
    ) -> io::Result<()>;
}

/// Aligned plain-text tables
pub struct TextRenderer<W: Write> {
    out: W,
    quantity: Quantity,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            quantity: Quantity::Resistance,
        }
    }

    /// Label values with the RKM letters of `quantity`
    pub fn with_quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn code(&self, value: f64) -> String {
        format_rkm(value, self.quantity).unwrap_or_else(|| "-".to_string())
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render_rounding(&mut self, input: &[f64], result: &Rounded<Ix1>) -> io::Result<()> {
        writeln!(self.out, "{:>14}  {:>14}  {:>8}  {:>5}", "input", "rounded", "code", "index")?;
        for (k, &x) in input.iter().enumerate() {
            let value = result.values.get(k).copied().unwrap_or(f64::NAN);
            let index = result
                .index
                .get(k)
                .copied()
                .flatten()
                .map_or_else(|| "-".to_string(), |i| i.to_string());
            writeln!(
                self.out,
                "{:>14.6e}  {:>14.6e}  {:>8}  {:>5}",
                x,
                value,
                self.code(value),
                index
            )?;
        }
        writeln!(
            self.out,
            "sequence: {} values, {} edges",
            result.pns.len(),
            result.edges.len()
        )
    }

    fn render_circuit(
        &mut self,
        targets: &[f64],
        result: &EquivalentCircuit<Ix1>,
    ) -> io::Result<()> {
        writeln!(
            self.out,
            "{:>14}  {:>14}  {:>10}  components ({} tier)",
            "target", "equivalent", "error", result.tier
        )?;
        for (k, &target) in targets.iter().enumerate() {
            let parts = match result.row(k) {
                Some(row) => row
                    .iter()
                    .map(|&v| self.code(v))
                    .collect::<Vec<_>>()
                    .join(" "),
                None => "-".to_string(),
            };
            writeln!(
                self.out,
                "{:>14.6e}  {:>14.6e}  {:>10.3e}  {}",
                target,
                result.equivalent.get(k).copied().unwrap_or(f64::NAN),
                result.error.get(k).copied().unwrap_or(f64::NAN),
                parts
            )?;
        }
        writeln!(self.out, "window: {} values", result.window.len())
    }
}
