use std::cmp::Ordering;

use crate::models::bet::{Bet, SortCriteria};

/// Orders a bet listing by a chosen criterion.
///
/// Always returns an ordered copy — the underlying collection is never
/// mutated, and sorting never changes which records are present. Ties keep
/// their incoming relative order (`sort_by` is stable).
pub struct SortService;

impl SortService {
    pub fn new() -> Self {
        Self
    }

    pub fn sorted<'a>(&self, bets: &[&'a Bet], criteria: &SortCriteria) -> Vec<&'a Bet> {
        let mut ordered = bets.to_vec();
        match criteria {
            SortCriteria::DateDesc => ordered.sort_by(|a, b| b.date.cmp(&a.date)),
            SortCriteria::DateAsc => ordered.sort_by(|a, b| a.date.cmp(&b.date)),
            SortCriteria::StakeDesc => ordered.sort_by(|a, b| Self::cmp_f64(b.stake, a.stake)),
            SortCriteria::StakeAsc => ordered.sort_by(|a, b| Self::cmp_f64(a.stake, b.stake)),
            SortCriteria::OddsDesc => ordered.sort_by(|a, b| Self::cmp_f64(b.odds, a.odds)),
            SortCriteria::OddsAsc => ordered.sort_by(|a, b| Self::cmp_f64(a.odds, b.odds)),
            SortCriteria::Result => ordered.sort_by_key(|b| b.result.rank()),
            SortCriteria::ProfitDesc => {
                ordered.sort_by(|a, b| Self::cmp_f64(b.profit_loss(), a.profit_loss()))
            }
        }
        ordered
    }

    fn cmp_f64(a: f64, b: f64) -> Ordering {
        a.partial_cmp(&b).unwrap_or(Ordering::Equal)
    }
}

impl Default for SortService {
    fn default() -> Self {
        Self::new()
    }
}
