pub mod errors;
pub mod models;
pub mod services;
pub mod storage;
pub mod store;

use chrono::{FixedOffset, NaiveDate, Offset, Utc};
use uuid::Uuid;

use models::{
    bet::{Bet, BetDraft, SortCriteria},
    chart::CurvePoint,
    import::{ExportRow, ImportSummary, RawRow},
    ledger::Ledger,
    period::Period,
    settings::Settings,
    stats::LedgerStats,
};
use services::{
    chart_service::ChartService, filter_service::FilterService, import_service::ImportService,
    ledger_service::LedgerService, sort_service::SortService, stats_service::StatsService,
};
use storage::manager::StorageManager;

use errors::CoreError;

/// Main entry point for the Bet Ledger core library.
///
/// Owns the in-memory bet collection (the session's mirror of the durable
/// store) and the stateless services that operate on it. Every view — the
/// filtered list, the sorted list, the stats tiles, and the profit chart —
/// is recomputed in full from the current collection on demand; at personal-
/// ledger volumes there is no stale-recompute bookkeeping to get wrong.
#[must_use]
pub struct BetLedger {
    ledger: Ledger,
    ledger_service: LedgerService,
    filter_service: FilterService,
    sort_service: SortService,
    stats_service: StatsService,
    chart_service: ChartService,
    import_service: ImportService,
    /// Tracks whether any mutation has occurred since the last save/load.
    dirty: bool,
}

impl std::fmt::Debug for BetLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BetLedger")
            .field("bets", &self.ledger.bets.len())
            .field("settings", &self.ledger.settings)
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl BetLedger {
    /// Create a brand new empty ledger with default settings.
    pub fn create_new() -> Self {
        Self::build(Ledger::default())
    }

    /// Load an existing ledger from encrypted bytes (password required).
    /// Use this for WASM / Tauri where the frontend handles file I/O.
    pub fn load_from_bytes(encrypted: &[u8], password: &str) -> Result<Self, CoreError> {
        let ledger = StorageManager::load_from_bytes(encrypted, password)?;
        Ok(Self::build(ledger))
    }

    /// Save the current ledger to encrypted bytes.
    /// Clears the unsaved-changes flag on success.
    pub fn save_to_bytes(&mut self, password: &str) -> Result<Vec<u8>, CoreError> {
        let bytes = StorageManager::save_to_bytes(&self.ledger, password)?;
        self.dirty = false;
        Ok(bytes)
    }

    /// Load from an encrypted file on disk (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str, password: &str) -> Result<Self, CoreError> {
        let ledger = StorageManager::load_from_file(path, password)?;
        Ok(Self::build(ledger))
    }

    /// Save to an encrypted file on disk (native only, not WASM).
    /// Clears the unsaved-changes flag on success.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(&mut self, path: &str, password: &str) -> Result<(), CoreError> {
        StorageManager::save_to_file(&self.ledger, path, password)?;
        self.dirty = false;
        Ok(())
    }

    // ── Reporting Calendar ──────────────────────────────────────────

    /// The ledger's fixed reporting timezone.
    #[must_use]
    pub fn reporting_tz(&self) -> FixedOffset {
        match FixedOffset::east_opt(self.ledger.settings.utc_offset_minutes * 60) {
            Some(tz) => tz,
            // A corrupt stored offset degrades to UTC rather than failing.
            None => Utc.fix(),
        }
    }

    /// The current day in the reporting calendar — the anchor for every
    /// named period. Deliberately not the host machine's local date.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.reporting_tz()).date_naive()
    }

    // ── Bet Management ──────────────────────────────────────────────

    /// Record a new bet. Returns its freshly assigned id.
    pub fn add_bet(&mut self, draft: BetDraft) -> Result<Uuid, CoreError> {
        let bet = Bet::new(draft);
        let id = bet.id;
        self.ledger_service.add_bet(&mut self.ledger, bet)?;
        self.dirty = true;
        Ok(id)
    }

    /// Edit an existing bet: every field except the id is replaced.
    pub fn update_bet(&mut self, bet_id: Uuid, draft: BetDraft) -> Result<(), CoreError> {
        self.ledger_service.update_bet(&mut self.ledger, bet_id, draft)?;
        self.dirty = true;
        Ok(())
    }

    /// Delete a bet by its id.
    pub fn remove_bet(&mut self, bet_id: Uuid) -> Result<(), CoreError> {
        self.ledger_service.remove_bet(&mut self.ledger, bet_id)?;
        self.dirty = true;
        Ok(())
    }

    /// Get a single bet by its id.
    #[must_use]
    pub fn get_bet(&self, bet_id: Uuid) -> Option<&Bet> {
        self.ledger.bets.iter().find(|b| b.id == bet_id)
    }

    /// Every bet in the ledger, oldest first (storage order).
    #[must_use]
    pub fn bets(&self) -> &[Bet] {
        &self.ledger.bets
    }

    /// Total number of bets.
    #[must_use]
    pub fn bet_count(&self) -> usize {
        self.ledger.bets.len()
    }

    // ── Views: Filter / Sort / Stats / Chart ────────────────────────

    /// Bets inside a reporting period, in storage order (for the stats tiles
    /// and the chart — the list view applies a sort on top).
    #[must_use]
    pub fn bets_for_period(&self, period: &Period) -> Vec<&Bet> {
        self.filter_service
            .bets_in_period(&self.ledger.bets, period, self.today())
    }

    /// The list view: period-filtered and ordered by the chosen criterion.
    #[must_use]
    pub fn bets_sorted(&self, period: &Period, criteria: &SortCriteria) -> Vec<&Bet> {
        let filtered = self.bets_for_period(period);
        self.sort_service.sorted(&filtered, criteria)
    }

    /// Aggregate profitability metrics over a reporting period.
    #[must_use]
    pub fn stats(&self, period: &Period) -> LedgerStats {
        let filtered = self.bets_for_period(period);
        self.stats_service.aggregate(&filtered)
    }

    /// The cumulative profit/loss series over a reporting period,
    /// always chronological regardless of the list view's sort.
    #[must_use]
    pub fn profit_curve(&self, period: &Period) -> Vec<CurvePoint> {
        let filtered = self.bets_for_period(period);
        self.chart_service.profit_curve(&filtered)
    }

    // ── Import / Export ─────────────────────────────────────────────

    /// Bulk-import decoded spreadsheet rows.
    ///
    /// Rows the normalizer turns away are reported per-row and never block
    /// the rest. The accepted rows are committed all-or-nothing: they are
    /// admitted into a temporary copy of the ledger first, and only if every
    /// one passes validation does the copy replace the live collection.
    pub fn import_rows(&mut self, rows: &[RawRow]) -> Result<ImportSummary, CoreError> {
        let report = self.import_service.normalize(rows, self.reporting_tz());

        // Phase 1: validate the whole batch against a temporary ledger.
        let mut temp = self.ledger.clone();
        let mut imported = Vec::with_capacity(report.accepted.len());
        for bet in &report.accepted {
            self.ledger_service.add_bet(&mut temp, bet.clone())?;
            imported.push(bet.id);
        }

        // Phase 2: all valid — commit.
        if !imported.is_empty() {
            self.ledger = temp;
            self.dirty = true;
        }
        Ok(ImportSummary {
            imported,
            rejected: report.rejected,
        })
    }

    /// Flat spreadsheet-facing rows for every bet (ids excluded).
    /// The spreadsheet codec encodes these outside the core.
    #[must_use]
    pub fn flat_export(&self) -> Vec<ExportRow> {
        self.import_service.flatten(&self.ledger.bets)
    }

    /// Export all bets as a JSON string.
    pub fn export_bets_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.ledger.bets)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize bets to JSON: {e}")))
    }

    // ── Backend Sync ────────────────────────────────────────────────

    /// Replace the in-memory collection with a backend snapshot.
    ///
    /// This is how a `store::traits::Subscription` feeds the mirror: the sync
    /// layer forwards each full-collection snapshot here, and every view is
    /// recomputed from the new state on the next call. Does not mark the
    /// ledger dirty — the backend already owns this data.
    pub fn apply_snapshot(&mut self, mut bets: Vec<Bet>) {
        bets.sort_by_key(|b| b.date);
        self.ledger.bets = bets;
    }

    // ── Settings ────────────────────────────────────────────────────

    /// Set the display currency (e.g., "PHP", "USD").
    /// Currency code must be a 3-letter alphabetic string.
    pub fn set_currency(&mut self, currency: String) -> Result<(), CoreError> {
        let trimmed = currency.trim().to_uppercase();
        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::ValidationError(format!(
                "Invalid currency code '{currency}': must be exactly 3 ASCII letters (e.g., USD, PHP)"
            )));
        }
        self.ledger.settings.currency = trimmed;
        self.dirty = true;
        Ok(())
    }

    /// Set the fixed reporting timezone as minutes east of UTC.
    /// Accepts offsets between -14h and +14h.
    pub fn set_reporting_offset(&mut self, minutes: i32) -> Result<(), CoreError> {
        if !(-14 * 60..=14 * 60).contains(&minutes) {
            return Err(CoreError::ValidationError(format!(
                "Reporting offset {minutes} minutes is outside -840..=840"
            )));
        }
        self.ledger.settings.utc_offset_minutes = minutes;
        self.dirty = true;
        Ok(())
    }

    /// Get current settings.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.ledger.settings
    }

    /// Returns `true` if the ledger has been modified since the last save or load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(ledger: Ledger) -> Self {
        Self {
            ledger,
            ledger_service: LedgerService::new(),
            filter_service: FilterService::new(),
            sort_service: SortService::new(),
            stats_service: StatsService::new(),
            chart_service: ChartService::new(),
            import_service: ImportService::new(),
            dirty: false,
        }
    }
}
