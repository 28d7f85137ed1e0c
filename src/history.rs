//! Calculation history
//!
//! Results are stored as flat records. The store itself is a collaborator
//! behind [`HistoryStore`]; [`MemoryHistory`] keeps records in process.

use std::{cmp::Reverse, fs::File, io, path::Path};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::solvers::Strategy;

/// Default number of records returned by a history listing.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// History Errors
#[derive(Debug, Error)]
pub enum HistoryError {
    /// There is nothing to export.
    #[error("No records to export")]
    NoRecords,

    /// IO error while creating or opening an export file
    #[error("Failed to access history export: {0}")]
    Io(#[from] io::Error),

    /// YAML (de)serialisation error
    #[error("Failed to encode history: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// One saved calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// When the calculation was saved
    pub timestamp: Timestamp,

    /// Prices as entered, comma separated
    pub prices: String,

    /// Tickets requested
    pub quota: usize,

    /// Revenue found
    pub revenue: u64,

    /// Strategy used
    pub strategy: Strategy,

    /// Time spent solving, in seconds
    pub elapsed_seconds: f64,
}

/// Storage for calculation history.
pub trait HistoryStore {
    /// Saves a record.
    fn save(&mut self, record: HistoryRecord);

    /// Returns up to `limit` records, newest first.
    fn recent(&self, limit: usize) -> Vec<HistoryRecord>;

    /// Deletes every record.
    fn clear(&mut self);
}

/// In-memory history store.
#[derive(Debug, Default, Clone)]
pub struct MemoryHistory {
    records: Vec<HistoryRecord>,
}

impl MemoryHistory {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl HistoryStore for MemoryHistory {
    fn save(&mut self, record: HistoryRecord) {
        self.records.push(record);
    }

    fn recent(&self, limit: usize) -> Vec<HistoryRecord> {
        let mut records: Vec<_> = self.records.iter().rev().cloned().collect();

        // Stable, so equal timestamps keep the latest insertion first.
        records.sort_by_key(|record| Reverse(record.timestamp));
        records.truncate(limit);

        records
    }

    fn clear(&mut self) {
        self.records.clear();
    }
}

/// Writes records as a YAML sequence.
///
/// # Errors
///
/// - [`HistoryError::NoRecords`]: `records` is empty.
/// - [`HistoryError::Yaml`]: the records could not be written.
pub fn export_yaml(records: &[HistoryRecord], writer: impl io::Write) -> Result<(), HistoryError> {
    if records.is_empty() {
        return Err(HistoryError::NoRecords);
    }

    serde_norway::to_writer(writer, records)?;

    Ok(())
}

/// Reads records previously written by [`export_yaml`].
///
/// # Errors
///
/// Returns [`HistoryError::Yaml`] if the input is not a valid export.
pub fn import_yaml(reader: impl io::Read) -> Result<Vec<HistoryRecord>, HistoryError> {
    Ok(serde_norway::from_reader(reader)?)
}

/// Writes records to a YAML file at `path`, replacing any existing file.
///
/// # Errors
///
/// - [`HistoryError::NoRecords`]: `records` is empty; no file is created.
/// - [`HistoryError::Io`]: the file could not be created.
/// - [`HistoryError::Yaml`]: the records could not be written.
pub fn export_yaml_file(
    records: &[HistoryRecord],
    path: impl AsRef<Path>,
) -> Result<(), HistoryError> {
    if records.is_empty() {
        return Err(HistoryError::NoRecords);
    }

    export_yaml(records, File::create(path)?)
}

/// Reads records from a YAML file written by [`export_yaml_file`].
///
/// # Errors
///
/// - [`HistoryError::Io`]: the file could not be opened.
/// - [`HistoryError::Yaml`]: the file is not a valid export.
pub fn import_yaml_file(path: impl AsRef<Path>) -> Result<Vec<HistoryRecord>, HistoryError> {
    import_yaml(File::open(path)?)
}
