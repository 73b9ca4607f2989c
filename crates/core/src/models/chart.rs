use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single point on the cumulative profit/loss chart.
///
/// The core computes the series — the frontend only renders it. One point is
/// emitted per realized bet in chronological order, so several bets on the
/// same day produce several points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Date of the bet behind this point
    pub date: NaiveDate,

    /// Cumulative profit/loss up to and including this bet
    pub running_total: f64,
}
