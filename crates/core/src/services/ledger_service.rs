use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::bet::{Bet, BetDraft};
use crate::models::ledger::Ledger;

/// Manages the bet collection: validated create, edit, and delete.
///
/// Pure business logic — no I/O, no backend calls. Easy to test.
pub struct LedgerService;

impl LedgerService {
    pub fn new() -> Self {
        Self
    }

    /// Add a new bet to the ledger.
    /// Validates the record before admitting it.
    pub fn add_bet(&self, ledger: &mut Ledger, bet: Bet) -> Result<(), CoreError> {
        self.validate_bet(&bet)?;
        if ledger.bets.iter().any(|b| b.id == bet.id) {
            return Err(CoreError::ValidationError(format!(
                "Duplicate bet id {}",
                bet.id
            )));
        }
        Self::binary_insert(&mut ledger.bets, bet);
        Ok(())
    }

    /// Remove a bet by its id. Returns the removed record.
    pub fn remove_bet(&self, ledger: &mut Ledger, bet_id: Uuid) -> Result<Bet, CoreError> {
        let idx = ledger
            .bets
            .iter()
            .position(|b| b.id == bet_id)
            .ok_or_else(|| CoreError::BetNotFound(bet_id.to_string()))?;
        Ok(ledger.bets.remove(idx))
    }

    /// Replace every field of an existing bet except its id.
    /// Validates the new state before committing; on failure the ledger
    /// is left exactly as it was.
    pub fn update_bet(
        &self,
        ledger: &mut Ledger,
        bet_id: Uuid,
        draft: BetDraft,
    ) -> Result<(), CoreError> {
        let idx = ledger
            .bets
            .iter()
            .position(|b| b.id == bet_id)
            .ok_or_else(|| CoreError::BetNotFound(bet_id.to_string()))?;

        let updated = Bet {
            id: bet_id,
            date: draft.date,
            sport: draft.sport,
            details: draft.details,
            stake: draft.stake,
            odds: draft.odds,
            result: draft.result,
            notes: draft.notes,
        };
        self.validate_bet(&updated)?;

        // The date may have changed — re-insert to keep ascending order.
        ledger.bets.remove(idx);
        Self::binary_insert(&mut ledger.bets, updated);
        Ok(())
    }

    /// Validate a record before it enters the collection.
    ///
    /// Rules:
    /// - sport and details must be non-empty
    /// - stake must be a finite number > 0
    /// - odds must be a finite number ≥ 0
    pub fn validate_bet(&self, bet: &Bet) -> Result<(), CoreError> {
        if bet.sport.trim().is_empty() {
            return Err(CoreError::ValidationError("Sport must not be empty".into()));
        }
        if bet.details.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Details must not be empty".into(),
            ));
        }
        if !bet.stake.is_finite() || bet.stake <= 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Stake must be a positive amount, got {}",
                bet.stake
            )));
        }
        if !bet.odds.is_finite() || bet.odds < 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Odds must be a non-negative decimal multiplier, got {}",
                bet.odds
            )));
        }
        Ok(())
    }

    /// Binary insert into a date-sorted Vec<Bet> in O(log n).
    fn binary_insert(bets: &mut Vec<Bet>, bet: Bet) {
        let pos = bets
            .binary_search_by_key(&bet.date, |b| b.date)
            .unwrap_or_else(|pos| pos);
        bets.insert(pos, bet);
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}
