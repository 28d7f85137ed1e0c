//! Solvers for ticket revenue
//!
//! Three interchangeable strategies share one input contract: a slice of
//! prices and the exact number of tickets to sell. Every solver is a pure
//! function; working tables live only for the duration of one call.

use std::{fmt, str::FromStr};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod brute_force;
pub mod dynamic;
pub mod greedy;

pub use brute_force::{BruteForceSolver, solve_brute_force};
pub use dynamic::{DynamicProgrammingSolver, solve_dynamic_programming};
pub use greedy::{GreedySolver, STEEP_DROP_RATIO, solve_greedy};

/// Error returned when a strategy name is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown strategy {0:?} (expected brute_force, dynamic or greedy)")]
pub struct UnknownStrategy(
    /// The unrecognised name
    pub String,
);

/// Revenue maximisation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Strategy {
    /// Exhaustive search with a call-scoped memo table. Revenue only.
    #[serde(rename = "brute_force")]
    #[value(name = "brute_force", alias = "brute-force")]
    BruteForce,

    /// Tabulated dynamic programming with path reconstruction.
    #[serde(rename = "dynamic")]
    #[value(name = "dynamic", alias = "dp")]
    DynamicProgramming,

    /// Fast heuristic; a lower bound on the optimum.
    #[serde(rename = "greedy")]
    #[value(name = "greedy")]
    Greedy,
}

impl Strategy {
    /// Every strategy, in presentation order.
    pub const ALL: [Strategy; 3] = [
        Strategy::BruteForce,
        Strategy::DynamicProgramming,
        Strategy::Greedy,
    ];

    /// Stable machine name, as stored in history records.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::BruteForce => "brute_force",
            Strategy::DynamicProgramming => "dynamic",
            Strategy::Greedy => "greedy",
        }
    }

    /// Human readable name.
    pub fn label(self) -> &'static str {
        match self {
            Strategy::BruteForce => "Brute Force",
            Strategy::DynamicProgramming => "Dynamic Programming",
            Strategy::Greedy => "Optimized Greedy",
        }
    }

    /// Time complexity in terms of `n` prices and `k` tickets.
    pub fn time_complexity(self) -> &'static str {
        match self {
            Strategy::BruteForce | Strategy::DynamicProgramming => "O(n*k)",
            Strategy::Greedy => "O(n log n + k)",
        }
    }

    /// Working space in terms of `n` prices and `k` tickets.
    pub fn space_complexity(self) -> &'static str {
        match self {
            Strategy::BruteForce | Strategy::DynamicProgramming => "O(n*k)",
            Strategy::Greedy => "O(n + k)",
        }
    }

    /// Outline of how the strategy works.
    pub fn steps(self) -> &'static [&'static str] {
        match self {
            Strategy::BruteForce => &[
                "Sort prices in descending order",
                "Recursively either sell at the current price or move to the next one",
                "Memoize (tickets left, price level) states within the call",
                "Return the maximum revenue found",
            ],
            Strategy::DynamicProgramming => &[
                "Sort prices in descending order",
                "Fill a (prices + 1) x (tickets + 1) revenue table",
                "Mark the cells where selling at the current price wins",
                "Walk the marks back from the last cell to recover the prices used",
            ],
            Strategy::Greedy => &[
                "Sort prices in descending order",
                "Sell one ticket at the current price",
                "Stay at this price while the next one is more than 1.5x lower",
                "Otherwise move to the next price; the last price takes any remainder",
            ],
        }
    }

    /// Whether the strategy reports the prices it used.
    pub fn provides_witness(self) -> bool {
        !matches!(self, Strategy::BruteForce)
    }

    /// Whether the strategy is guaranteed to find the optimum.
    pub fn is_exact(self) -> bool {
        !matches!(self, Strategy::Greedy)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s.trim())
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

/// Outcome of a single solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Total revenue of the selection
    pub revenue: u64,

    /// Prices sold, highest first; `None` for strategies that do not
    /// reconstruct a selection
    pub used_prices: Option<Vec<u64>>,
}

impl Solution {
    /// The degenerate result: no revenue and no tickets.
    pub fn empty(strategy: Strategy) -> Self {
        Solution {
            revenue: 0,
            used_prices: strategy.provides_witness().then(Vec::new),
        }
    }

    /// Prices sold, or an empty slice when no selection was reconstructed.
    pub fn used_prices(&self) -> &[u64] {
        self.used_prices.as_deref().unwrap_or_default()
    }
}

/// Trait for solving a ticket revenue problem.
pub trait Solver {
    /// Strategy implemented by this solver.
    const STRATEGY: Strategy;

    /// Solve for the given prices and exact ticket quota.
    ///
    /// Empty prices, a zero quota or a zero price yield [`Solution::empty`].
    fn solve(prices: &[u64], quota: usize) -> Solution;
}

/// Solves with the requested strategy.
pub fn solve(strategy: Strategy, prices: &[u64], quota: usize) -> Solution {
    let solution = match strategy {
        Strategy::BruteForce => BruteForceSolver::solve(prices, quota),
        Strategy::DynamicProgramming => DynamicProgrammingSolver::solve(prices, quota),
        Strategy::Greedy => GreedySolver::solve(prices, quota),
    };

    debug!(
        strategy = strategy.name(),
        prices = prices.len(),
        quota,
        revenue = solution.revenue,
        "solved"
    );

    solution
}
