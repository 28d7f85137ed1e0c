//! Brute-force solver
//!
//! Explores every legal sale sequence from state `(tickets left, level)`:
//! either sell one more ticket at the current level and stay there, or leave
//! the level for good. Results are memoised per call, which collapses the
//! search to one visit per state. Kept as a correctness oracle for small
//! quotas.
//!
//! Leaving a level is walked with a loop rather than a recursive call, so the
//! recursion depth is bounded by the quota, not by the number of prices.

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::{
    constraint::PriceLevels,
    solvers::{Solution, Solver, Strategy},
};

/// Exhaustive memoised search. Reports revenue only.
#[derive(Debug)]
pub struct BruteForceSolver;

impl Solver for BruteForceSolver {
    const STRATEGY: Strategy = Strategy::BruteForce;

    fn solve(prices: &[u64], quota: usize) -> Solution {
        Solution {
            revenue: solve_brute_force(prices, quota),
            used_prices: None,
        }
    }
}

/// Maximum revenue for selling exactly `quota` tickets.
///
/// Returns `0` for degenerate requests.
pub fn solve_brute_force(prices: &[u64], quota: usize) -> u64 {
    let Some(levels) = PriceLevels::for_request(prices, quota) else {
        return 0;
    };

    let mut search = Search::new(&levels);
    let best = search.best(quota, 0);

    trace!(states = search.memo.len(), "brute force search finished");

    // Only unreachable when there are no levels at all, which the degenerate
    // check already excludes.
    best.unwrap_or(0)
}

/// One top-level search; the memo is dropped with it.
struct Search<'a> {
    levels: &'a PriceLevels,

    /// `None` marks a state from which the quota cannot be met.
    memo: FxHashMap<(usize, usize), Option<u64>>,
}

impl<'a> Search<'a> {
    fn new(levels: &'a PriceLevels) -> Self {
        Search {
            levels,
            memo: FxHashMap::default(),
        }
    }

    fn best(&mut self, remaining: usize, level: usize) -> Option<u64> {
        if remaining == 0 {
            return Some(0);
        }

        // Nearest level at or below `level` already solved for `remaining`.
        let mut solved = level;
        while solved < self.levels.len() && !self.memo.contains_key(&(remaining, solved)) {
            solved += 1;
        }

        // Past the cheapest level there is nothing left to sell at.
        let mut carry = self.memo.get(&(remaining, solved)).copied().flatten();

        // Fill from the cheapest unsolved level upwards: the best from `idx`
        // either stays on `idx` or is the best from `idx + 1` (leave).
        for idx in (level..solved).rev() {
            let Some(price) = self.levels.price(idx) else {
                continue;
            };

            let stay = self
                .best(remaining - 1, idx)
                .map(|rest| rest.saturating_add(price));

            // `None` orders below every `Some`, so unreachable branches lose.
            carry = stay.max(carry);

            self.memo.insert((remaining, idx), carry);
        }

        carry
    }
}
