//! Ticket quota

use std::ops::Deref;

use thiserror::Error;

/// Largest number of tickets a single calculation may request.
pub const MAX_TICKETS: usize = 1000;

/// Errors raised while building a [`TicketQuota`] from user input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuotaError {
    /// The quota was zero or negative.
    #[error("Number of tickets must be positive")]
    NotPositive,

    /// The quota exceeded [`MAX_TICKETS`].
    #[error("Maximum number of tickets is {maximum} (requested {requested})")]
    AboveMaximum {
        /// Number of tickets requested
        requested: usize,

        /// Policy maximum
        maximum: usize,
    },

    /// The quota text was not an integer.
    #[error("Please enter a valid number of tickets ({0:?})")]
    Invalid(String),
}

/// Exact number of tickets that must be sold, between 1 and [`MAX_TICKETS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TicketQuota {
    tickets: usize,
}

impl TicketQuota {
    /// Creates a new quota.
    ///
    /// # Errors
    ///
    /// - [`QuotaError::NotPositive`]: `tickets` is zero.
    /// - [`QuotaError::AboveMaximum`]: `tickets` is larger than [`MAX_TICKETS`].
    pub fn new(tickets: usize) -> Result<Self, QuotaError> {
        if tickets == 0 {
            return Err(QuotaError::NotPositive);
        }

        if tickets > MAX_TICKETS {
            return Err(QuotaError::AboveMaximum {
                requested: tickets,
                maximum: MAX_TICKETS,
            });
        }

        Ok(TicketQuota { tickets })
    }

    /// Parses a quota from text.
    ///
    /// # Errors
    ///
    /// Returns [`QuotaError::Invalid`] for non-numeric text, otherwise the
    /// errors of [`TicketQuota::new`].
    pub fn parse(text: &str) -> Result<Self, QuotaError> {
        let value = text.trim();

        let tickets: i128 = value
            .parse()
            .map_err(|_err| QuotaError::Invalid(value.to_string()))?;

        if tickets <= 0 {
            return Err(QuotaError::NotPositive);
        }

        let tickets = usize::try_from(tickets).unwrap_or(usize::MAX);

        Self::new(tickets)
    }

    /// Number of tickets.
    pub fn get(self) -> usize {
        self.tickets
    }
}

impl Deref for TicketQuota {
    type Target = usize;

    fn deref(&self) -> &Self::Target {
        &self.tickets
    }
}
