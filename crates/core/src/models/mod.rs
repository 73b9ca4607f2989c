pub mod bet;
pub mod chart;
pub mod import;
pub mod ledger;
pub mod period;
pub mod settings;
pub mod stats;
