use chrono::{FixedOffset, NaiveDate};
use uuid::Uuid;

use crate::models::bet::{Bet, BetResult};
use crate::models::import::{CellValue, ExportRow, ImportReport, RawRow, RejectReason};

/// The one boundary where untyped spreadsheet rows become validated bets.
///
/// A row is accepted only if `date`, `sport`, and `details` are present and
/// non-empty and `stake`/`odds` parse as finite numbers. Non-positive stakes
/// and negative odds are rejected with a reason, never clamped. `result`
/// defaults to Pending when absent or unrecognized; `notes` defaults to
/// empty. Every accepted row gets a fresh v4 id, so ids are unique within a
/// batch of any size and against every existing record.
///
/// Normalization performs no I/O and knows nothing about the persistence
/// backend — inserting the accepted bets is the caller's responsibility, as
/// one logical batch.
pub struct ImportService;

impl ImportService {
    pub fn new() -> Self {
        Self
    }

    /// Normalize decoded rows into accepted bets plus per-row rejections.
    ///
    /// `reporting_tz` is the ledger's fixed reporting offset: timestamp cells
    /// are converted to the calendar day in that zone, not the UTC day, so a
    /// late-evening entry doesn't land on the wrong date.
    pub fn normalize(&self, rows: &[RawRow], reporting_tz: FixedOffset) -> ImportReport {
        let mut report = ImportReport::default();

        for (idx, row) in rows.iter().enumerate() {
            match self.normalize_row(row, reporting_tz) {
                Ok(bet) => report.accepted.push(bet),
                Err(reason) => {
                    log::warn!("import: rejecting row {idx}: {reason}");
                    report.rejected.push(crate::models::import::RowRejection {
                        row: idx,
                        reason,
                    });
                }
            }
        }

        log::debug!(
            "import: normalized {} rows — {} accepted, {} rejected",
            rows.len(),
            report.accepted.len(),
            report.rejected.len()
        );
        report
    }

    /// Flatten bets into spreadsheet-facing rows. Ids are excluded — a
    /// re-import of these rows mints fresh ids.
    pub fn flatten(&self, bets: &[Bet]) -> Vec<ExportRow> {
        bets.iter()
            .map(|b| ExportRow {
                date: b.date,
                sport: b.sport.clone(),
                details: b.details.clone(),
                stake: b.stake,
                odds: b.odds,
                result: b.result.to_string(),
                notes: b.notes.clone(),
            })
            .collect()
    }

    fn normalize_row(&self, row: &RawRow, tz: FixedOffset) -> Result<Bet, RejectReason> {
        let date = self.read_date(row, tz)?;
        let sport = self.read_text(row, "sport")?;
        let details = self.read_text(row, "details")?;

        let stake = self.read_number(row, "stake")?;
        if stake <= 0.0 {
            return Err(RejectReason::NonPositiveStake);
        }
        let odds = self.read_number(row, "odds")?;
        if odds < 0.0 {
            return Err(RejectReason::NegativeOdds);
        }

        let result = match row.get("result") {
            Some(CellValue::Text(s)) => BetResult::parse(s).unwrap_or(BetResult::Pending),
            _ => BetResult::Pending,
        };
        let notes = match row.get("notes") {
            Some(CellValue::Text(s)) => s.clone(),
            _ => String::new(),
        };

        Ok(Bet {
            id: Uuid::new_v4(),
            date,
            sport,
            details,
            stake,
            odds,
            result,
            notes,
        })
    }

    fn read_date(&self, row: &RawRow, tz: FixedOffset) -> Result<NaiveDate, RejectReason> {
        match row.get("date") {
            Some(CellValue::Date(d)) => Ok(*d),
            // Calendar day in the reporting zone, never the UTC day.
            Some(CellValue::Timestamp(ts)) => Ok(ts.with_timezone(&tz).date_naive()),
            Some(CellValue::Text(s)) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
                .map_err(|_| RejectReason::BadDate(s.clone())),
            Some(CellValue::Number(n)) => Err(RejectReason::BadDate(n.to_string())),
            _ => Err(RejectReason::MissingField("date".into())),
        }
    }

    fn read_text(&self, row: &RawRow, column: &str) -> Result<String, RejectReason> {
        match row.get(column) {
            Some(CellValue::Text(s)) if !s.trim().is_empty() => Ok(s.trim().to_string()),
            Some(CellValue::Number(n)) => Ok(n.to_string()),
            _ => Err(RejectReason::MissingField(column.into())),
        }
    }

    fn read_number(&self, row: &RawRow, column: &str) -> Result<f64, RejectReason> {
        let value = match row.get(column) {
            Some(CellValue::Number(n)) => *n,
            Some(CellValue::Text(s)) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| RejectReason::NotANumber(column.into()))?,
            _ => return Err(RejectReason::MissingField(column.into())),
        };
        if !value.is_finite() {
            return Err(RejectReason::NotANumber(column.into()));
        }
        Ok(value)
    }
}

impl Default for ImportService {
    fn default() -> Self {
        Self::new()
    }
}
