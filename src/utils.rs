//! Utils

use clap::Parser;

use crate::{
    calculation::{CalculationRequest, InputError},
    solvers::Strategy,
};

/// Arguments for the revenue example program
#[derive(Debug, Parser)]
#[command(name = "revenue", about = "Maximise ticket revenue", long_about = None)]
pub struct RevenueArgs {
    /// Ticket prices, comma or space separated
    #[arg(short, long, env = "MARQUEE_PRICES", default_value = "10,20,30,40")]
    pub prices: String,

    /// Exact number of tickets to sell
    #[arg(short, long, env = "MARQUEE_TICKETS", default_value = "5")]
    pub tickets: String,

    /// Strategy to solve with
    #[arg(short, long, env = "MARQUEE_STRATEGY", value_enum, default_value_t = Strategy::DynamicProgramming)]
    pub strategy: Strategy,

    /// Solve with every strategy and compare
    #[arg(short, long)]
    pub compare: bool,

    /// Write the session history as YAML to this file
    #[arg(short, long)]
    pub export: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl RevenueArgs {
    /// Load arguments from the command line and environment, reading a `.env`
    /// file first if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments cannot be parsed.
    pub fn load() -> Result<Self, clap::Error> {
        // A missing .env file is fine.
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Validates the price and ticket arguments into a request.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if the prices or ticket count are invalid.
    pub fn request(&self) -> Result<CalculationRequest, InputError> {
        let entries: Vec<&str> = self
            .prices
            .split(|c: char| c == ',' || c.is_whitespace())
            .collect();

        CalculationRequest::parse(entries.as_slice(), &self.tickets, self.strategy)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_flags() -> TestResult {
        let args = RevenueArgs::try_parse_from([
            "revenue",
            "--prices",
            "5, 9",
            "--tickets",
            "3",
            "--strategy",
            "greedy",
            "--compare",
        ])?;

        assert_eq!(args.strategy, Strategy::Greedy);
        assert!(args.compare);

        let request = args.request()?;

        assert_eq!(request.prices.as_slice(), &[5, 9]);
        assert_eq!(request.quota.get(), 3);

        Ok(())
    }

    #[test]
    fn strategy_accepts_names_and_aliases() -> TestResult {
        for (name, expected) in [
            ("brute_force", Strategy::BruteForce),
            ("brute-force", Strategy::BruteForce),
            ("dynamic", Strategy::DynamicProgramming),
            ("dp", Strategy::DynamicProgramming),
        ] {
            let args = RevenueArgs::try_parse_from(["revenue", "-s", name])?;

            assert_eq!(args.strategy, expected);
        }

        Ok(())
    }

    #[test]
    fn invalid_tickets_surface_as_input_error() -> TestResult {
        let args = RevenueArgs::try_parse_from(["revenue", "-t", "0"])?;

        assert!(matches!(args.request(), Err(InputError::Quota(_))));

        Ok(())
    }
}
