// ═══════════════════════════════════════════════════════════════════
// Model Tests — Bet, BetResult, Period, Settings, Ledger
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;

use bet_ledger_core::models::bet::{Bet, BetDraft, BetResult, SortCriteria};
use bet_ledger_core::models::ledger::Ledger;
use bet_ledger_core::models::period::Period;
use bet_ledger_core::models::settings::{Settings, DEFAULT_UTC_OFFSET_MINUTES};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn draft(stake: f64, odds: f64, result: BetResult) -> BetDraft {
    BetDraft {
        date: date(2025, 6, 1),
        sport: "NBA".into(),
        details: "Lakers ML".into(),
        stake,
        odds,
        result,
        notes: String::new(),
    }
}

// ═══════════════════════════════════════════════════════════════════
// Profit / Loss
// ═══════════════════════════════════════════════════════════════════

mod profit_loss {
    use super::*;

    #[test]
    fn won_pays_stake_times_odds_minus_stake() {
        let bet = Bet::new(draft(100.0, 2.5, BetResult::Won));
        assert_eq!(bet.profit_loss(), 150.0);
    }

    #[test]
    fn lost_loses_the_full_stake() {
        let bet = Bet::new(draft(100.0, 2.5, BetResult::Lost));
        assert_eq!(bet.profit_loss(), -100.0);
    }

    #[test]
    fn pending_and_void_are_zero_regardless_of_stake_and_odds() {
        let pending = Bet::new(draft(9999.0, 50.0, BetResult::Pending));
        let void = Bet::new(draft(9999.0, 50.0, BetResult::Void));
        assert_eq!(pending.profit_loss(), 0.0);
        assert_eq!(void.profit_loss(), 0.0);
    }

    #[test]
    fn no_internal_rounding() {
        // 10.01 × 1.91 − 10.01 keeps full precision; rounding is display-only.
        let bet = Bet::new(draft(10.01, 1.91, BetResult::Won));
        let expected = 10.01_f64 * 1.91 - 10.01;
        assert_eq!(bet.profit_loss(), expected);
    }
}

// ═══════════════════════════════════════════════════════════════════
// BetResult
// ═══════════════════════════════════════════════════════════════════

mod bet_result {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(BetResult::parse("won"), Some(BetResult::Won));
        assert_eq!(BetResult::parse("WON"), Some(BetResult::Won));
        assert_eq!(BetResult::parse(" Lost "), Some(BetResult::Lost));
        assert_eq!(BetResult::parse("pending"), Some(BetResult::Pending));
        assert_eq!(BetResult::parse("Void"), Some(BetResult::Void));
    }

    #[test]
    fn parse_rejects_unknown_labels() {
        assert_eq!(BetResult::parse("win"), None);
        assert_eq!(BetResult::parse(""), None);
        assert_eq!(BetResult::parse("cancelled"), None);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for r in [
            BetResult::Won,
            BetResult::Lost,
            BetResult::Pending,
            BetResult::Void,
        ] {
            assert_eq!(BetResult::parse(&r.to_string()), Some(r));
        }
    }

    #[test]
    fn settled_means_won_or_lost() {
        assert!(BetResult::Won.is_settled());
        assert!(BetResult::Lost.is_settled());
        assert!(!BetResult::Pending.is_settled());
        assert!(!BetResult::Void.is_settled());
    }

    #[test]
    fn rank_orders_won_lost_pending_void() {
        assert!(BetResult::Won.rank() < BetResult::Lost.rank());
        assert!(BetResult::Lost.rank() < BetResult::Pending.rank());
        assert!(BetResult::Pending.rank() < BetResult::Void.rank());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Bet
// ═══════════════════════════════════════════════════════════════════

mod bet {
    use super::*;

    #[test]
    fn new_assigns_unique_ids() {
        let a = Bet::new(draft(10.0, 2.0, BetResult::Pending));
        let b = Bet::new(draft(10.0, 2.0, BetResult::Pending));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn serde_round_trip() {
        let bet = Bet::new(draft(25.5, 1.8, BetResult::Won));
        let json = serde_json::to_string(&bet).unwrap();
        let back: Bet = serde_json::from_str(&json).unwrap();
        assert_eq!(bet, back);
    }

    #[test]
    fn missing_notes_field_defaults_to_empty() {
        let bet = Bet::new(draft(25.5, 1.8, BetResult::Won));
        let mut value = serde_json::to_value(&bet).unwrap();
        value.as_object_mut().unwrap().remove("notes");
        let back: Bet = serde_json::from_value(value).unwrap();
        assert_eq!(back.notes, "");
    }

    #[test]
    fn default_sort_criteria_is_date_desc() {
        assert_eq!(SortCriteria::default(), SortCriteria::DateDesc);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Period resolution
// ═══════════════════════════════════════════════════════════════════

mod period {
    use super::*;

    // A Tuesday mid-month, so every named period has room on both sides.
    fn anchor() -> NaiveDate {
        date(2025, 6, 17)
    }

    #[test]
    fn all_resolves_to_no_range() {
        assert_eq!(Period::All.resolve(anchor()), None);
    }

    #[test]
    fn today_is_a_single_day() {
        assert_eq!(Period::Today.resolve(anchor()), Some((anchor(), anchor())));
    }

    #[test]
    fn yesterday_is_the_previous_single_day() {
        let y = date(2025, 6, 16);
        assert_eq!(Period::Yesterday.resolve(anchor()), Some((y, y)));
    }

    #[test]
    fn last_7_days_spans_seven_inclusive_days() {
        let (start, end) = Period::Last7Days.resolve(anchor()).unwrap();
        assert_eq!(start, date(2025, 6, 11));
        assert_eq!(end, anchor());
        assert_eq!((end - start).num_days() + 1, 7);
    }

    #[test]
    fn this_month_starts_on_the_first() {
        assert_eq!(
            Period::ThisMonth.resolve(anchor()),
            Some((date(2025, 6, 1), anchor()))
        );
    }

    #[test]
    fn this_year_starts_on_january_first() {
        assert_eq!(
            Period::ThisYear.resolve(anchor()),
            Some((date(2025, 1, 1), anchor()))
        );
    }

    #[test]
    fn custom_with_both_bounds_uses_them() {
        let p = Period::Custom {
            start: Some(date(2025, 3, 1)),
            end: Some(date(2025, 3, 31)),
        };
        assert_eq!(
            p.resolve(anchor()),
            Some((date(2025, 3, 1), date(2025, 3, 31)))
        );
    }

    #[test]
    fn custom_with_a_missing_bound_degrades_to_all() {
        let no_end = Period::Custom {
            start: Some(date(2025, 3, 1)),
            end: None,
        };
        let no_start = Period::Custom {
            start: None,
            end: Some(date(2025, 3, 31)),
        };
        assert_eq!(no_end.resolve(anchor()), None);
        assert_eq!(no_start.resolve(anchor()), None);
    }

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let p = Period::Last7Days;
        assert!(p.contains(date(2025, 6, 11), anchor()));
        assert!(p.contains(anchor(), anchor()));
        assert!(!p.contains(date(2025, 6, 10), anchor()));
        assert!(!p.contains(date(2025, 6, 18), anchor()));
    }

    #[test]
    fn yesterday_crosses_month_boundaries() {
        let first = date(2025, 7, 1);
        assert_eq!(
            Period::Yesterday.resolve(first),
            Some((date(2025, 6, 30), date(2025, 6, 30)))
        );
    }

    #[test]
    fn default_period_is_all() {
        assert_eq!(Period::default(), Period::All);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Settings & Ledger
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn defaults_match_the_original_app() {
        let s = Settings::default();
        assert_eq!(s.currency, "PHP");
        assert_eq!(s.utc_offset_minutes, DEFAULT_UTC_OFFSET_MINUTES);
        assert_eq!(DEFAULT_UTC_OFFSET_MINUTES, 480);
    }

    #[test]
    fn ledger_default_is_empty() {
        let ledger = Ledger::default();
        assert!(ledger.bets.is_empty());
        assert_eq!(ledger.settings, Settings::default());
    }
}
