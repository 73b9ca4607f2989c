use chrono::{Datelike, Duration, NaiveDate};

/// A named reporting period for filtering bet listings, statistics,
/// and the profit chart.
///
/// Every named period is anchored on "today" in the ledger's fixed
/// reporting calendar — never the host machine's local timezone — so the
/// same collection filters identically wherever the code runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Period {
    /// No filtering — every record
    All,
    /// The current day only
    Today,
    /// The previous day only
    Yesterday,
    /// The current day and the six days before it (7 inclusive days)
    Last7Days,
    /// First of the current month through today
    ThisMonth,
    /// January 1 of the current year through today
    ThisYear,
    /// Explicit bounds. If either bound is missing the period degrades to
    /// `All` — a deliberate fallback, not an error.
    Custom {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

impl Period {
    /// Resolve this period to an inclusive `[start, end]` day range,
    /// anchored on `today`. `None` means "do not filter".
    #[must_use]
    pub fn resolve(&self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            Period::All => None,
            Period::Today => Some((today, today)),
            Period::Yesterday => {
                let y = today - Duration::days(1);
                Some((y, y))
            }
            Period::Last7Days => Some((today - Duration::days(6), today)),
            Period::ThisMonth => {
                // Day 1 exists in every month; fall back to today just in case.
                let first = today.with_day(1).unwrap_or(today);
                Some((first, today))
            }
            Period::ThisYear => {
                let jan1 = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
                Some((jan1, today))
            }
            Period::Custom { start, end } => match (start, end) {
                (Some(s), Some(e)) => Some((*s, *e)),
                _ => None,
            },
        }
    }

    /// Whether a bet placed on `date` falls inside this period as seen
    /// from `today`. Both ends of the range are inclusive.
    #[must_use]
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self.resolve(today) {
            Some((start, end)) => date >= start && date <= end,
            None => true,
        }
    }
}

impl Default for Period {
    fn default() -> Self {
        Period::All
    }
}
