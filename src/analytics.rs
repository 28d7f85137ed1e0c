//! Analytics
//!
//! Summary figures for a calculation: how the entered prices are
//! distributed, and how the achieved revenue compares to simple bounds.

use num_traits::ToPrimitive;
use smallvec::SmallVec;

/// One distinct price and how often it was entered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceShare {
    /// The price
    pub price: u64,

    /// Number of entries with this price
    pub count: usize,

    /// Fraction of all entries, between 0 and 1
    pub share: f64,
}

/// Revenue analytics for one calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueAnalytics {
    /// Distinct prices, highest first
    pub distribution: SmallVec<[PriceShare; 9]>,

    /// Mean of the entered prices
    pub average_price: f64,

    /// Highest entered price
    pub highest_price: u64,

    /// Revenue the solver achieved
    pub revenue: u64,

    /// Highest price times the number of entered prices
    pub maximum_potential: u64,
}

impl RevenueAnalytics {
    /// Computes analytics for the entered prices and achieved revenue.
    ///
    /// Empty `prices` give zero for every figure.
    pub fn new(prices: &[u64], revenue: u64) -> Self {
        let mut sorted = prices.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));

        let total_entries = sorted.len().to_f64().unwrap_or(0.0);
        let mut distribution: SmallVec<[PriceShare; 9]> = SmallVec::new();

        for chunk in sorted.chunk_by(|a, b| a == b) {
            let Some(&price) = chunk.first() else {
                continue;
            };

            let count = chunk.len();

            distribution.push(PriceShare {
                price,
                count,
                share: count.to_f64().unwrap_or(0.0) / total_entries,
            });
        }

        let highest_price = sorted.first().copied().unwrap_or(0);

        let average_price = if sorted.is_empty() {
            0.0
        } else {
            let sum: u128 = sorted.iter().copied().map(u128::from).sum();
            sum.to_f64().unwrap_or(0.0) / total_entries
        };

        let entries = u64::try_from(sorted.len()).unwrap_or(u64::MAX);

        RevenueAnalytics {
            distribution,
            average_price,
            highest_price,
            revenue,
            maximum_potential: highest_price.saturating_mul(entries),
        }
    }
}
