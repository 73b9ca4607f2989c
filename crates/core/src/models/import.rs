use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use super::bet::Bet;

/// A single decoded spreadsheet cell.
///
/// The spreadsheet codec (external) produces these; the import normalizer is
/// the only code that looks inside them. `Timestamp` carries the full instant
/// so the normalizer can pick the calendar day in the *reporting* timezone —
/// taking the UTC day instead can shift a row by one day.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
    Empty,
}

/// One untyped row decoded from an imported spreadsheet: a mapping of column
/// header to cell value. Column headers correspond 1:1 to `Bet` field names.
///
/// Rows never become `Bet`s except through `ImportService::normalize`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: HashMap<String, CellValue>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mainly for tests and codec adapters.
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: CellValue) -> Self {
        self.cells.insert(column.into(), value);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: CellValue) {
        self.cells.insert(column.into(), value);
    }

    /// Look up a cell; `Empty` cells read as absent.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        match self.cells.get(column) {
            Some(CellValue::Empty) | None => None,
            Some(v) => Some(v),
        }
    }
}

/// Why an imported row was not accepted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RejectReason {
    #[error("missing required field '{0}'")]
    MissingField(String),

    #[error("field '{0}' is not a finite number")]
    NotANumber(String),

    #[error("field 'stake' must be greater than zero")]
    NonPositiveStake,

    #[error("field 'odds' must not be negative")]
    NegativeOdds,

    #[error("field 'date' is not a recognizable date: {0}")]
    BadDate(String),
}

/// A rejected row: its zero-based position in the decoded sheet plus the
/// first problem found with it.
#[derive(Debug, Clone, PartialEq)]
pub struct RowRejection {
    pub row: usize,
    pub reason: RejectReason,
}

/// Outcome of normalizing a batch of spreadsheet rows.
///
/// Accepted bets carry fresh unique ids; rejected rows are reported with
/// reasons so the frontend can tell the user what to fix. Normalization does
/// no I/O — inserting the accepted bets is the caller's job, as one batch.
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub accepted: Vec<Bet>,
    pub rejected: Vec<RowRejection>,
}

impl ImportReport {
    #[must_use]
    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }
}

/// Result of a facade-level bulk import: the ids now in the ledger plus the
/// rows the normalizer turned away. The committed batch is all-or-nothing;
/// rejections are per-row reports and never abort the batch.
#[derive(Debug, Clone, Default)]
pub struct ImportSummary {
    pub imported: Vec<uuid::Uuid>,
    pub rejected: Vec<RowRejection>,
}

/// A flat, spreadsheet-facing view of a bet. `id` is deliberately excluded —
/// exported rows are data, not database references, and re-importing them
/// mints new ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    pub date: NaiveDate,
    pub sport: String,
    pub details: String,
    pub stake: f64,
    pub odds: f64,
    pub result: String,
    pub notes: String,
}
