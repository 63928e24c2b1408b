use crate::output::OutputWriter;
use crate::tco::TcoResult;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Table};
use std::io::Write;

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, result: &TcoResult) -> anyhow::Result<()> {
        let summary = &result.summary;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", "═══════════════════════════════════════════".cyan())?;
        writeln!(self.writer, "{}", "       TOTAL COST OF OWNERSHIP".bold().cyan())?;
        writeln!(self.writer, "{}", "═══════════════════════════════════════════".cyan())?;
        writeln!(
            self.writer,
            "Horizon: {} years at {} miles/year",
            summary.time_period_years, summary.miles_per_year
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_cost_table(&mut self, result: &TcoResult) -> anyhow::Result<()> {
        let totals = &result.total_costs;
        let mut table = Table::new();
        table.load_preset(UTF8_FULL).set_header(vec!["Component", "Cost"]);

        let rows = [
            ("Immediate cost burden", totals.immediate_cost_burden),
            ("Projected routine maintenance", totals.projected_routine_maintenance),
            ("Expected unscheduled repairs", totals.expected_unscheduled_repairs),
            ("Depreciation", totals.depreciation),
            ("Total", totals.total),
        ];
        for (label, amount) in rows {
            table.add_row(vec![
                Cell::new(label),
                Cell::new(format_money(amount)).set_alignment(CellAlignment::Right),
            ]);
        }

        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, result: &TcoResult) -> anyhow::Result<()> {
        let summary = &result.summary;
        writeln!(self.writer, "{}", "Deal Summary".bold())?;
        writeln!(self.writer, "───────────────────────────────────────────")?;

        let lines = [
            ("Purchase price", summary.purchase_price),
            ("Current value", summary.current_value),
            ("Expected sale price", summary.expected_sale_price),
            ("Value minus purchase and ICB", summary.current_value_minus_purchase_and_icb),
            ("Total loss", summary.total_loss),
            ("Adjusted value", Some(summary.adjusted_value)),
        ];
        for (label, amount) in lines {
            let shown = amount.map_or_else(|| "n/a".to_string(), format_money);
            writeln!(self.writer, "  {:<30} {:>12}", label, shown)?;
        }

        let score = summary.condition_score;
        let colored_score = match score {
            80..=100 => score.to_string().green(),
            50..=79 => score.to_string().yellow(),
            _ => score.to_string().red(),
        };
        writeln!(self.writer, "  {:<30} {:>12}", "Condition score", colored_score)?;
        Ok(())
    }

    fn write_factors(&mut self, result: &TcoResult) -> anyhow::Result<()> {
        if result.condition_score.factors.is_empty() {
            return Ok(());
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", "Condition Factors".bold())?;
        for factor in &result.condition_score.factors {
            writeln!(
                self.writer,
                "  {:+6.0}  {}: {}",
                factor.impact, factor.factor, factor.detail
            )?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_result(&mut self, result: &TcoResult) -> anyhow::Result<()> {
        self.write_header(result)?;
        self.write_cost_table(result)?;
        self.write_summary(result)?;
        self.write_factors(result)?;
        Ok(())
    }
}

/// Pure function: `-1234.5` -> `"-$1,234.50"`
pub fn format_money(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_string();

    let grouped = dollars
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",");

    format!("{}${}.{:02}", sign, grouped, cents % 100)
}
