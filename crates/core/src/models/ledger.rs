use serde::{Deserialize, Serialize};

use super::bet::Bet;
use super::settings::Settings;

/// The main data container. Everything in here gets serialized, encrypted,
/// and saved to the portable .blgr file.
///
/// `bets` is kept sorted by date ascending (insertion maintains the order),
/// which the chart relies on and the list views re-sort as needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    /// All bets in the ledger
    pub bets: Vec<Bet>,

    /// User settings (display currency, reporting timezone)
    pub settings: Settings,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            bets: Vec::new(),
            settings: Settings::default(),
        }
    }
}
