//! Greedy solver
//!
//! Sells one ticket at a time starting from the highest price. After each
//! sale it stays on the current price while the next price is a steep drop
//! (more than [`STEEP_DROP_RATIO`] lower), otherwise it moves down one level.
//! The cheapest level absorbs any remaining tickets.
//!
//! This is a heuristic: its revenue never exceeds the exact solvers' and is
//! frequently below it.

use tracing::trace;

use crate::{
    constraint::PriceLevels,
    solvers::{Solution, Solver, Strategy},
};

/// Ratio above which the drop to the next price counts as steep.
pub const STEEP_DROP_RATIO: f64 = 1.5;

/// Heuristic solver using the steep-drop rule.
#[derive(Debug)]
pub struct GreedySolver;

impl Solver for GreedySolver {
    const STRATEGY: Strategy = Strategy::Greedy;

    fn solve(prices: &[u64], quota: usize) -> Solution {
        solve_greedy(prices, quota)
    }
}

/// Approximate revenue for selling exactly `quota` tickets, with the prices
/// used (highest first).
pub fn solve_greedy(prices: &[u64], quota: usize) -> Solution {
    let Some(levels) = PriceLevels::for_request(prices, quota) else {
        return Solution::empty(Strategy::Greedy);
    };

    let mut used_prices = Vec::with_capacity(quota);
    let mut revenue = 0_u64;
    let mut level = 0;

    while used_prices.len() < quota {
        let Some(price) = levels.price(level) else {
            break;
        };

        revenue = revenue.saturating_add(price);
        used_prices.push(price);

        match levels.price(level + 1) {
            Some(next) if !is_steep_drop(price, next) => level += 1,
            // Steep drop, or already on the cheapest level.
            _ => {}
        }
    }

    trace!(final_level = level, "greedy walk finished");

    Solution {
        revenue,
        used_prices: Some(used_prices),
    }
}

/// `current > next * 1.5`, in exact integer arithmetic.
fn is_steep_drop(current: u64, next: u64) -> bool {
    u128::from(current) * 2 > u128::from(next) * 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_requests_are_empty() {
        assert_eq!(solve_greedy(&[], 5), Solution::empty(Strategy::Greedy));
        assert_eq!(
            solve_greedy(&[10, 20], 0),
            Solution::empty(Strategy::Greedy)
        );
    }

    #[test]
    fn steep_drop_threshold() {
        assert!(is_steep_drop(31, 20));
        assert!(!is_steep_drop(30, 20));
        assert!(!is_steep_drop(20, 20));
        assert!(is_steep_drop(20, 0));
    }

    #[test]
    fn steep_drop_matches_ratio() {
        let (current, next) = (40_u32, 26_u32);

        assert_eq!(
            is_steep_drop(current.into(), next.into()),
            f64::from(current) > f64::from(next) * STEEP_DROP_RATIO
        );
    }

    #[test]
    fn single_level_fills_quota() {
        let solution = solve_greedy(&[5], 3);

        assert_eq!(solution.revenue, 15);
        assert_eq!(solution.used_prices(), &[5, 5, 5]);
    }

    #[test]
    fn gentle_drops_walk_down() {
        let solution = solve_greedy(&[10, 20, 30, 40], 5);

        assert_eq!(solution.used_prices(), &[40, 30, 20, 20, 20]);
        assert_eq!(solution.revenue, 130);
    }

    #[test]
    fn steep_drop_stays_on_current_price() {
        let solution = solve_greedy(&[100, 50], 3);

        assert_eq!(solution.used_prices(), &[100, 100, 100]);
        assert_eq!(solution.revenue, 300);
    }

    #[test]
    fn cheapest_level_absorbs_remainder() {
        let solution = solve_greedy(&[12, 11, 10], 6);

        assert_eq!(solution.used_prices(), &[12, 11, 10, 10, 10, 10]);
        assert_eq!(solution.revenue, 63);
    }

    #[test]
    fn one_ticket() {
        let solution = solve_greedy(&[100, 50], 1);

        assert_eq!(solution.revenue, 100);
        assert_eq!(solution.used_prices(), &[100]);
    }
}
