//! Report
//!
//! Terminal rendering of a calculation.

use std::io;

use humanize_duration::{Truncate, prelude::DurationExt};
use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::calculation::Calculation;

/// Errors that can occur when writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Tickets sold at one price level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelBreakdown {
    /// Price of the level
    pub price: u64,

    /// Tickets sold at this price
    pub tickets: usize,

    /// Revenue from this level
    pub subtotal: u64,
}

/// Printable summary of one calculation.
#[derive(Debug)]
pub struct Report<'a> {
    calculation: &'a Calculation,
}

impl<'a> Report<'a> {
    /// Creates a report for the calculation.
    pub fn new(calculation: &'a Calculation) -> Self {
        Report { calculation }
    }

    /// Groups the used prices by level, in sale order.
    ///
    /// Empty when the strategy does not report the prices it used.
    pub fn breakdown(&self) -> SmallVec<[LevelBreakdown; 9]> {
        self.calculation
            .solution
            .used_prices()
            .chunk_by(|a, b| a == b)
            .filter_map(|chunk| {
                let price = *chunk.first()?;
                let tickets = chunk.len();
                let count = u64::try_from(tickets).ok()?;

                Some(LevelBreakdown {
                    price,
                    tickets,
                    subtotal: price.saturating_mul(count),
                })
            })
            .collect()
    }

    /// Writes the summary table, and the per-level breakdown when available.
    ///
    /// # Errors
    ///
    /// Returns a [`ReportError`] if writing to `out` fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReportError> {
        writeln!(out, "\n{}", self.summary_table())?;

        let breakdown = self.breakdown();

        if !breakdown.is_empty() {
            writeln!(out, "{}", breakdown_table(&breakdown))?;
        }

        Ok(())
    }

    fn summary_table(&self) -> String {
        let calculation = self.calculation;
        let request = &calculation.request;
        let strategy = request.strategy;

        let prices = request
            .prices
            .sorted_desc()
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        let mut builder = Builder::default();

        builder.push_record(["Revenue".to_string(), group_thousands(calculation.revenue())]);
        builder.push_record(["Prices".to_string(), prices]);
        builder.push_record(["Tickets".to_string(), request.quota.get().to_string()]);
        builder.push_record(["Strategy".to_string(), strategy.label().to_string()]);
        builder.push_record([
            "Time".to_string(),
            format!(
                "{} ({:.4}s)",
                calculation.elapsed.human(Truncate::Nano),
                calculation.elapsed.as_secs_f64()
            ),
        ]);
        builder.push_record([
            "Time Complexity".to_string(),
            strategy.time_complexity().to_string(),
        ]);
        builder.push_record([
            "Space Complexity".to_string(),
            strategy.space_complexity().to_string(),
        ]);
        builder.push_record(["Steps".to_string(), numbered_steps(strategy.steps())]);

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::first(), Color::BOLD);
        table.modify(Rows::first(), Color::FG_GREEN);

        table.to_string()
    }
}

fn breakdown_table(breakdown: &[LevelBreakdown]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Price", "Tickets", "Subtotal"]);

    for level in breakdown {
        builder.push_record([
            group_thousands(level.price),
            level.tickets.to_string(),
            group_thousands(level.subtotal),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(0..3), Alignment::right());

    table.to_string()
}

/// One step per line, numbered from 1.
fn numbered_steps(steps: &[&str]) -> String {
    steps
        .iter()
        .enumerate()
        .map(|(idx, step)| format!("{}. {step}", idx + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats `1234567` as `1,234,567`.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        calculation::CalculationRequest, prices::PriceList, quota::TicketQuota,
        solvers::Strategy,
    };

    use super::*;

    fn calculation(prices: &[u64], quota: usize, strategy: Strategy) -> TestResult<Calculation> {
        Ok(CalculationRequest::new(
            PriceList::new(prices.to_vec())?,
            TicketQuota::new(quota)?,
            strategy,
        )
        .run())
    }

    #[test]
    fn group_thousands_inserts_commas() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn numbered_steps_one_per_line() {
        assert_eq!(numbered_steps(&["Sort", "Solve"]), "1. Sort\n2. Solve");
        assert_eq!(numbered_steps(&[]), "");
    }

    #[test]
    fn summary_lists_strategy_steps() -> TestResult {
        let calculation = calculation(&[4, 2], 2, Strategy::Greedy)?;

        let mut out = Vec::new();
        Report::new(&calculation).write_to(&mut out)?;

        let text = String::from_utf8(out)?;

        assert!(text.contains("Steps"));

        for (idx, step) in Strategy::Greedy.steps().iter().enumerate() {
            assert!(text.contains(&format!("{}. {step}", idx + 1)), "missing step {step:?}");
        }

        Ok(())
    }

    #[test]
    fn breakdown_groups_levels() -> TestResult {
        let calculation = calculation(&[10, 20, 30, 40], 5, Strategy::Greedy)?;

        let breakdown = Report::new(&calculation).breakdown();

        assert_eq!(
            breakdown.as_slice(),
            &[
                LevelBreakdown {
                    price: 40,
                    tickets: 1,
                    subtotal: 40
                },
                LevelBreakdown {
                    price: 30,
                    tickets: 1,
                    subtotal: 30
                },
                LevelBreakdown {
                    price: 20,
                    tickets: 3,
                    subtotal: 60
                },
            ]
        );

        Ok(())
    }

    #[test]
    fn brute_force_report_has_no_breakdown() -> TestResult {
        let calculation = calculation(&[5, 8], 3, Strategy::BruteForce)?;
        let report = Report::new(&calculation);

        assert!(report.breakdown().is_empty());

        let mut out = Vec::new();
        report.write_to(&mut out)?;

        let text = String::from_utf8(out)?;

        assert!(text.contains("Brute Force"));
        assert!(!text.contains("Subtotal"));

        Ok(())
    }

    #[test]
    fn report_lists_summary_and_breakdown() -> TestResult {
        let calculation = calculation(&[1500, 200], 2, Strategy::DynamicProgramming)?;

        let mut out = Vec::new();
        Report::new(&calculation).write_to(&mut out)?;

        let text = String::from_utf8(out)?;

        assert!(text.contains("3,000"));
        assert!(text.contains("1500, 200"));
        assert!(text.contains("Dynamic Programming"));
        assert!(text.contains("O(n*k)"));
        assert!(text.contains("Subtotal"));

        Ok(())
    }
}
