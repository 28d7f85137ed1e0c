//! Price ordering constraint
//!
//! Tickets are sold walking down the price levels from the highest price.
//! A level may be sold any number of times, but once the walk moves past a
//! level it can never come back to it. Any legal sale sequence is therefore
//! non-increasing in price.

use std::ops::Deref;

/// The price levels a solver walks through: a sorted (highest first) copy of
/// the caller's prices, duplicates included.
///
/// Index `0` is always the highest price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceLevels {
    levels: Vec<u64>,
}

impl PriceLevels {
    /// Builds the price levels for a solve, or `None` when the request is
    /// degenerate (see [`is_degenerate`]).
    ///
    /// The input slice is never modified.
    pub fn for_request(prices: &[u64], quota: usize) -> Option<Self> {
        if is_degenerate(prices, quota) {
            return None;
        }

        let mut levels = prices.to_vec();
        levels.sort_unstable_by(|a, b| b.cmp(a));

        Some(PriceLevels { levels })
    }

    /// Price at the given level, if it exists.
    pub fn price(&self, level: usize) -> Option<u64> {
        self.levels.get(level).copied()
    }

    /// The highest price.
    pub fn highest(&self) -> Option<u64> {
        self.levels.first().copied()
    }
}

impl Deref for PriceLevels {
    type Target = [u64];

    fn deref(&self) -> &Self::Target {
        &self.levels
    }
}

/// Returns true when a request has the trivial answer of zero revenue and no
/// tickets: no prices, a zero quota, or a zero price slipped past validation.
pub fn is_degenerate(prices: &[u64], quota: usize) -> bool {
    quota == 0 || prices.is_empty() || prices.contains(&0)
}

/// Returns true if the sale sequence never goes back up in price.
pub fn is_non_increasing(used_prices: &[u64]) -> bool {
    used_prices.windows(2).all(|pair| match pair {
        [earlier, later] => earlier >= later,
        _ => true,
    })
}

/// Checks that `used_prices` is a legal, complete sale sequence for the
/// request: exactly `quota` tickets, every price drawn from `prices`, and no
/// level revisited after a cheaper one was sold.
///
/// A degenerate request only accepts an empty sequence.
pub fn is_valid_witness(prices: &[u64], quota: usize, used_prices: &[u64]) -> bool {
    if is_degenerate(prices, quota) {
        return used_prices.is_empty();
    }

    used_prices.len() == quota
        && used_prices.iter().all(|price| prices.contains(price))
        && is_non_increasing(used_prices)
}
