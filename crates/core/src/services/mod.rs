pub mod chart_service;
pub mod filter_service;
pub mod import_service;
pub mod ledger_service;
pub mod sort_service;
pub mod stats_service;
