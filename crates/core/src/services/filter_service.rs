use chrono::NaiveDate;

use crate::models::bet::Bet;
use crate::models::period::Period;

/// Selects the subset of bets falling inside a reporting period.
///
/// Takes the collection snapshot and "today" as explicit arguments rather
/// than reading shared state or the wall clock, so a call is a pure function
/// of its inputs. Filtering is idempotent and never reorders records.
pub struct FilterService;

impl FilterService {
    pub fn new() -> Self {
        Self
    }

    /// Bets whose day-granularity date lies within the period's inclusive
    /// `[start, end]` range anchored on `today`. `Period::All` (and a custom
    /// period missing a bound) returns every record.
    pub fn bets_in_period<'a>(
        &self,
        bets: &'a [Bet],
        period: &Period,
        today: NaiveDate,
    ) -> Vec<&'a Bet> {
        match period.resolve(today) {
            Some((start, end)) => bets
                .iter()
                .filter(|b| b.date >= start && b.date <= end)
                .collect(),
            None => bets.iter().collect(),
        }
    }
}

impl Default for FilterService {
    fn default() -> Self {
        Self::new()
    }
}
