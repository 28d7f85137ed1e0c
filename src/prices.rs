//! Prices

use std::ops::Deref;

use thiserror::Error;

/// Errors raised while building a [`PriceList`] from user input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceListError {
    /// No prices were provided.
    #[error("Please enter at least one price")]
    Empty,

    /// A price was zero or negative (entry index).
    #[error("Prices must be positive numbers (entry {index})")]
    NonPositive {
        /// Index of the offending entry
        index: usize,
    },

    /// A price entry could not be parsed as an integer.
    #[error("Please enter valid numbers for prices (entry {index}: {value:?})")]
    Invalid {
        /// Index of the offending entry
        index: usize,

        /// The raw entry text
        value: String,
    },
}

/// Validated list of available ticket prices.
///
/// Duplicates are kept and counted. Every price is strictly positive and the
/// list is never empty. The order given by the caller is preserved; solvers
/// work on their own sorted copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceList {
    prices: Vec<u64>,
}

impl PriceList {
    /// Creates a new price list.
    ///
    /// # Errors
    ///
    /// - [`PriceListError::Empty`]: no prices were given.
    /// - [`PriceListError::NonPositive`]: one of the prices is zero.
    pub fn new(prices: impl Into<Vec<u64>>) -> Result<Self, PriceListError> {
        let prices = prices.into();

        if prices.is_empty() {
            return Err(PriceListError::Empty);
        }

        if let Some(index) = prices.iter().position(|&price| price == 0) {
            return Err(PriceListError::NonPositive { index });
        }

        Ok(PriceList { prices })
    }

    /// Parses a list of text entries, one price per entry.
    ///
    /// Blank entries are skipped, so a form with unused fields parses cleanly.
    ///
    /// # Errors
    ///
    /// Returns a [`PriceListError`] for the first entry that is not a positive
    /// integer, or [`PriceListError::Empty`] if every entry was blank.
    pub fn parse_entries<S: AsRef<str>>(entries: &[S]) -> Result<Self, PriceListError> {
        let mut prices = Vec::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            let value = entry.as_ref().trim();

            if value.is_empty() {
                continue;
            }

            let price: i128 = value.parse().map_err(|_err| PriceListError::Invalid {
                index,
                value: value.to_string(),
            })?;

            if price <= 0 {
                return Err(PriceListError::NonPositive { index });
            }

            let price = u64::try_from(price).map_err(|_err| PriceListError::Invalid {
                index,
                value: value.to_string(),
            })?;

            prices.push(price);
        }

        Self::new(prices)
    }

    /// Parses a comma and/or whitespace separated list of prices.
    ///
    /// # Errors
    ///
    /// See [`PriceList::parse_entries`].
    pub fn parse(text: &str) -> Result<Self, PriceListError> {
        let entries: Vec<&str> = text
            .split(|c: char| c == ',' || c.is_whitespace())
            .collect();

        Self::parse_entries(entries.as_slice())
    }

    /// Returns a copy of the prices, sorted highest first.
    pub fn sorted_desc(&self) -> Vec<u64> {
        let mut sorted = self.prices.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted
    }

    /// Renders the prices in entry order as `"10,20,30"`.
    pub fn to_text(&self) -> String {
        self.prices
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Returns the prices as a slice, in entry order.
    pub fn as_slice(&self) -> &[u64] {
        &self.prices
    }
}

impl Deref for PriceList {
    type Target = [u64];

    fn deref(&self) -> &Self::Target {
        &self.prices
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_price_list() -> TestResult {
        let prices = PriceList::new([10, 20, 20])?;

        assert_eq!(prices.as_slice(), &[10, 20, 20]);

        Ok(())
    }

    #[test]
    fn new_rejects_empty() {
        assert_eq!(PriceList::new(Vec::new()), Err(PriceListError::Empty));
    }

    #[test]
    fn new_rejects_zero_price() {
        assert_eq!(
            PriceList::new([10, 0, 5]),
            Err(PriceListError::NonPositive { index: 1 })
        );
    }

    #[test]
    fn parse_entries_skips_blank_fields() -> TestResult {
        let prices = PriceList::parse_entries(&["40", "  ", "", " 15 "])?;

        assert_eq!(prices.as_slice(), &[40, 15]);

        Ok(())
    }

    #[test]
    fn parse_entries_rejects_negative() {
        assert_eq!(
            PriceList::parse_entries(&["10", "-3"]),
            Err(PriceListError::NonPositive { index: 1 })
        );
    }

    #[test]
    fn parse_entries_rejects_garbage() {
        assert_eq!(
            PriceList::parse_entries(&["ten"]),
            Err(PriceListError::Invalid {
                index: 0,
                value: "ten".to_string()
            })
        );
    }

    #[test]
    fn parse_entries_all_blank_is_empty() {
        assert_eq!(
            PriceList::parse_entries(&["", " "]),
            Err(PriceListError::Empty)
        );
    }

    #[test]
    fn parse_accepts_commas_and_spaces() -> TestResult {
        let prices = PriceList::parse("10, 20 30,,40")?;

        assert_eq!(prices.as_slice(), &[10, 20, 30, 40]);

        Ok(())
    }

    #[test]
    fn sorted_desc_keeps_entry_order() -> TestResult {
        let prices = PriceList::new([10, 40, 20])?;

        assert_eq!(prices.sorted_desc(), vec![40, 20, 10]);
        assert_eq!(prices.as_slice(), &[10, 40, 20]);

        Ok(())
    }

    #[test]
    fn to_text_joins_with_commas() -> TestResult {
        let prices = PriceList::new([5, 10])?;

        assert_eq!(prices.to_text(), "5,10");

        Ok(())
    }

    #[test]
    fn price_list_derefs_to_slice() -> TestResult {
        let prices = PriceList::new([7, 3])?;

        assert_eq!(prices.len(), 2);
        assert_eq!(prices.iter().sum::<u64>(), 10);

        Ok(())
    }
}
