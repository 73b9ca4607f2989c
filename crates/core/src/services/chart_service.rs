use crate::models::bet::{Bet, BetResult};
use crate::models::chart::CurvePoint;

/// Builds the chronological cumulative profit/loss series for the chart.
///
/// The chart always runs oldest-to-newest regardless of the list view's sort
/// criterion, and shows realized outcomes only: Pending bets are excluded
/// entirely, while Void bets contribute 0 but keep their place in the
/// timeline. Calling this twice on the same input yields the same series —
/// the input is never mutated.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    pub fn profit_curve(&self, bets: &[&Bet]) -> Vec<CurvePoint> {
        let mut realized: Vec<&Bet> = bets
            .iter()
            .copied()
            .filter(|b| b.result != BetResult::Pending)
            .collect();
        // Stable sort: same-day bets keep their incoming order and each
        // produces its own point.
        realized.sort_by_key(|b| b.date);

        let mut curve = Vec::with_capacity(realized.len());
        let mut running_total = 0.0;
        for bet in realized {
            running_total += bet.profit_loss();
            curve.push(CurvePoint {
                date: bet.date,
                running_total,
            });
        }
        curve
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
