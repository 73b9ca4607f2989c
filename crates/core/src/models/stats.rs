use serde::{Deserialize, Serialize};

/// Aggregate profitability metrics over a (usually period-filtered) set of
/// bets. Produced by `StatsService::aggregate`; consumed by the summary
/// tiles of the frontend.
///
/// Ratios are percentages. All values are exact sums — apply two-decimal
/// rounding at presentation time only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerStats {
    /// Sum of all stakes in the set
    pub turnover: f64,

    /// Sum of profit/loss over the set (realized outcomes only —
    /// Pending and Void contribute 0)
    pub net_profit: f64,

    /// Net profit over settled turnover, as a percentage.
    /// Defined as 0 when nothing is settled (never NaN, never an error).
    pub roi_pct: f64,

    /// Share of settled bets that were won, as a percentage.
    /// Defined as 0 when nothing is settled.
    pub accuracy_pct: f64,

    /// Total number of bets in the set (Void included)
    pub total_bets: usize,

    /// Turnover divided by total bets, 0 for an empty set
    pub avg_stake: f64,

    /// Count of won bets
    pub won: usize,

    /// Count of lost bets
    pub lost: usize,

    /// Count of pending bets
    pub pending: usize,
}

impl LedgerStats {
    /// The all-zero summary of an empty set.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            turnover: 0.0,
            net_profit: 0.0,
            roi_pct: 0.0,
            accuracy_pct: 0.0,
            total_bets: 0,
            avg_stake: 0.0,
            won: 0,
            lost: 0,
            pending: 0,
        }
    }
}
