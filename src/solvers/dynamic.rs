//! Dynamic programming solver
//!
//! `revenue[i][j]` is the best revenue from selling exactly `j` tickets using
//! only the first `i` price levels (highest first):
//!
//! ```text
//! revenue[i][j] = max(revenue[i - 1][j], price[i - 1] + revenue[i][j - 1])
//! ```
//!
//! The left term drops level `i`, the right term sells one more ticket at
//! level `i` and stays on it. `reused[i][j]` records where the right term
//! strictly won; walking those marks back from the last cell recovers one
//! optimal selection.

use tracing::trace;

use crate::{
    constraint::PriceLevels,
    solvers::{Solution, Solver, Strategy},
};

/// Tabulated exact solver with selection reconstruction.
#[derive(Debug)]
pub struct DynamicProgrammingSolver;

impl Solver for DynamicProgrammingSolver {
    const STRATEGY: Strategy = Strategy::DynamicProgramming;

    fn solve(prices: &[u64], quota: usize) -> Solution {
        solve_dynamic_programming(prices, quota)
    }
}

/// Maximum revenue for selling exactly `quota` tickets, with the prices used
/// (highest first).
pub fn solve_dynamic_programming(prices: &[u64], quota: usize) -> Solution {
    let Some(levels) = PriceLevels::for_request(prices, quota) else {
        return Solution::empty(Strategy::DynamicProgramming);
    };

    let tables = Tables::fill(&levels, quota);
    let revenue = tables.revenue(levels.len(), quota);
    let used_prices = tables.witness(&levels, quota);

    trace!(
        rows = levels.len() + 1,
        columns = quota + 1,
        "dynamic programming tables filled"
    );

    Solution {
        revenue,
        used_prices: Some(used_prices),
    }
}

/// Revenue and path tables, `(levels + 1) x (quota + 1)`.
#[derive(Debug)]
struct Tables {
    revenue: Vec<Vec<u64>>,
    reused: Vec<Vec<bool>>,
}

impl Tables {
    fn fill(levels: &[u64], quota: usize) -> Self {
        let mut revenue = Vec::with_capacity(levels.len() + 1);
        let mut reused = Vec::with_capacity(levels.len() + 1);

        let mut above = vec![0; quota + 1];

        revenue.push(above.clone());
        reused.push(vec![false; quota + 1]);

        for &price in levels {
            let (row, marks) = fill_row(&above, price);

            above.clone_from(&row);
            revenue.push(row);
            reused.push(marks);
        }

        Tables { revenue, reused }
    }

    fn revenue(&self, level: usize, tickets: usize) -> u64 {
        self.revenue
            .get(level)
            .and_then(|row| row.get(tickets))
            .copied()
            .unwrap_or(0)
    }

    fn reused(&self, level: usize, tickets: usize) -> bool {
        self.reused
            .get(level)
            .and_then(|row| row.get(tickets))
            .copied()
            .unwrap_or(false)
    }

    /// Walks from the bottom-right cell: a mark sells one ticket at that
    /// level and stays on the row, no mark moves up a level.
    fn witness(&self, levels: &PriceLevels, quota: usize) -> Vec<u64> {
        let mut used = Vec::with_capacity(quota);
        let mut level = levels.len();
        let mut tickets = quota;

        while tickets > 0 {
            // Row 0 has no prices; only a degenerate request could get here.
            let Some(price) = level.checked_sub(1).and_then(|idx| levels.price(idx)) else {
                break;
            };

            if self.reused(level, tickets) {
                used.push(price);
                tickets -= 1;
            } else {
                level -= 1;
            }
        }

        // Collected cheapest level first; present them in sale order.
        used.reverse();
        used
    }
}

/// Computes one table row from the row above it.
fn fill_row(above: &[u64], price: u64) -> (Vec<u64>, Vec<bool>) {
    let mut row: Vec<u64> = Vec::with_capacity(above.len());
    let mut marks = Vec::with_capacity(above.len());

    row.push(0);
    marks.push(false);

    for &skip in above.iter().skip(1) {
        let stay = row.last().copied().unwrap_or(0).saturating_add(price);

        // Ties keep the level dropped.
        if stay > skip {
            row.push(stay);
            marks.push(true);
        } else {
            row.push(skip);
            marks.push(false);
        }
    }

    (row, marks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_requests_are_empty() {
        assert_eq!(
            solve_dynamic_programming(&[], 5),
            Solution {
                revenue: 0,
                used_prices: Some(vec![])
            }
        );
        assert_eq!(
            solve_dynamic_programming(&[10, 20], 0),
            Solution {
                revenue: 0,
                used_prices: Some(vec![])
            }
        );
    }

    #[test]
    fn single_level() {
        let solution = solve_dynamic_programming(&[5], 3);

        assert_eq!(solution.revenue, 15);
        assert_eq!(solution.used_prices(), &[5, 5, 5]);
    }

    #[test]
    fn one_ticket_takes_the_highest_price() {
        let solution = solve_dynamic_programming(&[100, 50], 1);

        assert_eq!(solution.revenue, 100);
        assert_eq!(solution.used_prices(), &[100]);
    }

    #[test]
    fn reuses_the_top_level() {
        let solution = solve_dynamic_programming(&[10, 20, 30, 40], 5);

        assert_eq!(solution.revenue, 200);
        assert_eq!(solution.used_prices(), &[40, 40, 40, 40, 40]);
    }

    #[test]
    fn fill_row_prefers_dropping_on_ties() {
        let (row, marks) = fill_row(&[0, 40, 80], 40);

        assert_eq!(row, vec![0, 40, 80]);
        assert_eq!(marks, vec![false, false, false]);
    }

    #[test]
    fn fill_row_marks_strict_improvements() {
        let (row, marks) = fill_row(&[0, 0, 0], 7);

        assert_eq!(row, vec![0, 7, 14]);
        assert_eq!(marks, vec![false, true, true]);
    }

    #[test]
    fn tables_have_expected_shape() {
        let Some(levels) = PriceLevels::for_request(&[3, 9, 4], 4) else {
            panic!("expected price levels");
        };

        let tables = Tables::fill(&levels, 4);

        assert_eq!(tables.revenue.len(), 4);
        assert!(tables.revenue.iter().all(|row| row.len() == 5));
        assert!(tables.reused.iter().all(|row| row.len() == 5));
        assert_eq!(tables.revenue(3, 4), 36);
        assert_eq!(tables.revenue(0, 4), 0);
    }

    #[test]
    fn duplicate_top_prices_come_from_first_row() {
        let solution = solve_dynamic_programming(&[40, 10, 40], 3);

        assert_eq!(solution.revenue, 120);
        assert_eq!(solution.used_prices(), &[40, 40, 40]);
    }

    #[test]
    fn witness_sums_to_revenue() {
        let solution = solve_dynamic_programming(&[13, 2, 8, 21, 5], 9);

        assert_eq!(solution.used_prices().len(), 9);
        assert_eq!(solution.used_prices().iter().sum::<u64>(), solution.revenue);
    }
}
