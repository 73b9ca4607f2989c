use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BetResult {
    /// The bet came in — payout is stake × odds
    Won,
    /// The bet lost — the full stake is gone
    Lost,
    /// Not yet settled
    Pending,
    /// Cancelled / pushed — stake returned, no profit or loss
    Void,
}

impl BetResult {
    /// Parse a free-text result label (case-insensitive).
    /// Returns `None` for anything that is not one of the four outcomes.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "won" => Some(BetResult::Won),
            "lost" => Some(BetResult::Lost),
            "pending" => Some(BetResult::Pending),
            "void" => Some(BetResult::Void),
            _ => None,
        }
    }

    /// A settled bet has a realized outcome (Won or Lost).
    /// Pending and Void bets are excluded from ROI and accuracy.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        matches!(self, BetResult::Won | BetResult::Lost)
    }

    /// Fixed display priority for result-ordered listings:
    /// Won < Lost < Pending < Void.
    #[must_use]
    pub fn rank(&self) -> u8 {
        match self {
            BetResult::Won => 0,
            BetResult::Lost => 1,
            BetResult::Pending => 2,
            BetResult::Void => 3,
        }
    }
}

impl std::fmt::Display for BetResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BetResult::Won => write!(f, "Won"),
            BetResult::Lost => write!(f, "Lost"),
            BetResult::Pending => write!(f, "Pending"),
            BetResult::Void => write!(f, "Void"),
        }
    }
}

/// Sort order for bet listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortCriteria {
    /// Newest date first (default for display)
    DateDesc,
    /// Oldest date first
    DateAsc,
    /// Largest stake first
    StakeDesc,
    /// Smallest stake first
    StakeAsc,
    /// Longest odds first
    OddsDesc,
    /// Shortest odds first
    OddsAsc,
    /// By outcome: Won, Lost, Pending, Void
    Result,
    /// Biggest profit first
    ProfitDesc,
}

impl Default for SortCriteria {
    fn default() -> Self {
        SortCriteria::DateDesc
    }
}

/// A single wagered-outcome record tracked by the ledger.
///
/// Profit/loss is never stored — it is always derived from
/// `(stake, odds, result)` via [`Bet::profit_loss`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bet {
    /// Unique identifier, assigned at creation and never reassigned
    pub id: Uuid,

    /// Date the bet was placed (no time component — daily granularity,
    /// in the ledger's fixed reporting calendar)
    pub date: NaiveDate,

    /// Free-text sport / category label (e.g., "NBA", "Tennis")
    pub sport: String,

    /// Free-text description of the wager
    pub details: String,

    /// Amount wagered (always positive)
    pub stake: f64,

    /// Decimal ("European") odds: payout = stake × odds
    pub odds: f64,

    /// Current outcome
    pub result: BetResult,

    /// Optional free-text notes
    #[serde(default)]
    pub notes: String,
}

impl Bet {
    /// Create a bet from its field set with a fresh unique id.
    pub fn new(draft: BetDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: draft.date,
            sport: draft.sport,
            details: draft.details,
            stake: draft.stake,
            odds: draft.odds,
            result: draft.result,
            notes: draft.notes,
        }
    }

    /// Net profit or loss of this bet.
    ///
    /// - `Won` → `stake × odds − stake`
    /// - `Lost` → `−stake`
    /// - `Pending` / `Void` → `0`
    ///
    /// No rounding is applied here; round to 2 decimals at display time only,
    /// so aggregations never compound rounding error.
    #[must_use]
    pub fn profit_loss(&self) -> f64 {
        match self.result {
            BetResult::Won => self.stake * self.odds - self.stake,
            BetResult::Lost => -self.stake,
            BetResult::Pending | BetResult::Void => 0.0,
        }
    }
}

/// The id-less field set of a bet, used for creating a new record and for
/// editing an existing one (an edit replaces every field except `id`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetDraft {
    pub date: NaiveDate,
    pub sport: String,
    pub details: String,
    pub stake: f64,
    pub odds: f64,
    pub result: BetResult,
    #[serde(default)]
    pub notes: String,
}
