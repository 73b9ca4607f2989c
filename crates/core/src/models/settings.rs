use serde::{Deserialize, Serialize};

/// Reporting offset of the original ledger: UTC+8 (Manila), in minutes.
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 8 * 60;

/// User-configurable settings, stored inside the ledger file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Display currency code (e.g., "PHP", "USD"). Presentation only —
    /// the core never converts amounts between currencies.
    pub currency: String,

    /// Fixed reporting timezone as minutes east of UTC. All "today"
    /// anchored periods use this calendar, not the host's local zone,
    /// so filters don't drift when client and backend disagree on zones.
    pub utc_offset_minutes: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "PHP".to_string(),
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
        }
    }
}
