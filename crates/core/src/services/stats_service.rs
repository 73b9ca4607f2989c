use crate::models::bet::{Bet, BetResult};
use crate::models::stats::LedgerStats;

/// Reduces a (filtered, unsorted) set of bets into the summary metrics shown
/// on the dashboard tiles.
///
/// "Settled" means Won or Lost — Pending and Void bets count toward turnover
/// and the total, but not toward ROI or accuracy. Every ratio has an explicit
/// zero-guard: an empty denominator yields 0, never NaN and never an error.
pub struct StatsService;

impl StatsService {
    pub fn new() -> Self {
        Self
    }

    pub fn aggregate(&self, bets: &[&Bet]) -> LedgerStats {
        if bets.is_empty() {
            return LedgerStats::empty();
        }

        let mut turnover = 0.0;
        let mut net_profit = 0.0;
        let mut settled_turnover = 0.0;
        let mut won = 0usize;
        let mut lost = 0usize;
        let mut pending = 0usize;

        for bet in bets {
            turnover += bet.stake;
            net_profit += bet.profit_loss();
            if bet.result.is_settled() {
                settled_turnover += bet.stake;
            }
            match bet.result {
                BetResult::Won => won += 1,
                BetResult::Lost => lost += 1,
                BetResult::Pending => pending += 1,
                BetResult::Void => {}
            }
        }

        let total_bets = bets.len();
        let settled = won + lost;

        let roi_pct = if settled_turnover > 0.0 {
            net_profit / settled_turnover * 100.0
        } else {
            0.0
        };
        let accuracy_pct = if settled > 0 {
            won as f64 / settled as f64 * 100.0
        } else {
            0.0
        };
        let avg_stake = if total_bets > 0 {
            turnover / total_bets as f64
        } else {
            0.0
        };

        LedgerStats {
            turnover,
            net_profit,
            roi_pct,
            accuracy_pct,
            total_bets,
            avg_stake,
            won,
            lost,
            pending,
        }
    }
}

impl Default for StatsService {
    fn default() -> Self {
        Self::new()
    }
}
