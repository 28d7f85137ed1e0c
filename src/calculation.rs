//! Calculations
//!
//! A calculation is one validated request solved with one strategy, together
//! with how long the solve took.

use std::time::{Duration, Instant};

use jiff::Timestamp;
use thiserror::Error;
use tracing::{info, info_span, warn};

use crate::{
    history::HistoryRecord,
    prices::{PriceList, PriceListError},
    quota::{QuotaError, TicketQuota},
    solvers::{Solution, Strategy, solve},
};

/// Errors raised while validating calculation input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// The price entries were invalid.
    #[error(transparent)]
    Prices(#[from] PriceListError),

    /// The ticket quota was invalid.
    #[error(transparent)]
    Quota(#[from] QuotaError),
}

/// A validated request for a revenue calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationRequest {
    /// Available prices
    pub prices: PriceList,

    /// Exact number of tickets to sell
    pub quota: TicketQuota,

    /// Strategy to solve with
    pub strategy: Strategy,
}

impl CalculationRequest {
    /// Creates a request from already validated parts.
    pub fn new(prices: PriceList, quota: TicketQuota, strategy: Strategy) -> Self {
        CalculationRequest {
            prices,
            quota,
            strategy,
        }
    }

    /// Validates raw form input.
    ///
    /// Price entries are checked first, then the ticket count.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] describing the first invalid field.
    pub fn parse<S: AsRef<str>>(
        price_entries: &[S],
        tickets: &str,
        strategy: Strategy,
    ) -> Result<Self, InputError> {
        let parsed = PriceList::parse_entries(price_entries)
            .map_err(InputError::from)
            .and_then(|prices| Ok((prices, TicketQuota::parse(tickets)?)));

        match parsed {
            Ok((prices, quota)) => Ok(Self::new(prices, quota, strategy)),
            Err(err) => {
                warn!(%err, "rejected calculation input");
                Err(err)
            }
        }
    }

    /// Solves the request and times the solve.
    pub fn run(self) -> Calculation {
        let span = info_span!(
            "calculation",
            strategy = self.strategy.name(),
            quota = self.quota.get()
        );
        let _entered = span.enter();

        let start = Instant::now();
        let solution = solve(self.strategy, &self.prices, self.quota.get());
        let elapsed = start.elapsed();

        info!(
            revenue = solution.revenue,
            ?elapsed,
            "calculation finished"
        );

        Calculation {
            request: self,
            solution,
            elapsed,
        }
    }
}

/// Outcome of a calculation.
#[derive(Debug, Clone)]
pub struct Calculation {
    /// The request that was solved
    pub request: CalculationRequest,

    /// The solver's answer
    pub solution: Solution,

    /// Wall time spent in the solver
    pub elapsed: Duration,
}

impl Calculation {
    /// Total revenue.
    pub fn revenue(&self) -> u64 {
        self.solution.revenue
    }

    /// Builds the history record for this calculation.
    pub fn to_record(&self, timestamp: Timestamp) -> HistoryRecord {
        HistoryRecord {
            timestamp,
            prices: self.request.prices.to_text(),
            quota: self.request.quota.get(),
            revenue: self.solution.revenue,
            strategy: self.request.strategy,
            elapsed_seconds: self.elapsed.as_secs_f64(),
        }
    }
}

/// Solves one input with every strategy, in [`Strategy::ALL`] order.
pub fn compare_strategies(prices: &PriceList, quota: TicketQuota) -> Vec<Calculation> {
    Strategy::ALL
        .into_iter()
        .map(|strategy| CalculationRequest::new(prices.clone(), quota, strategy).run())
        .collect()
}
