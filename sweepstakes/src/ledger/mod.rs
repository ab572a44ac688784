use common::errors::OrAbort;
use common::events;
use common::types::RoundId;
use near_sdk::json_types::U64;
use near_sdk::{env, log, near_bindgen, AccountId};

use crate::errors::LedgerError;
use crate::interfaces::ledger::EntryLedger;
use crate::{Contract, ContractContract};
use self::round::Round;

pub mod round;

/// Largest batch `commit_batch` accepts.
pub const ENTRIES_PER_BATCH: usize = 1000;

impl Contract {
    pub(crate) fn internal_commit_batch(
        &mut self,
        caller: &AccountId,
        round_id: RoundId,
        expected_batch_index: u64,
        entries: &[U64],
    ) -> Result<u64, LedgerError> {
        self.gate.assert_can_mutate(caller)?;

        let mut round = self.rounds.get(&round_id).unwrap_or_default();
        let batch_index = round.commit_batch(round_id, expected_batch_index, entries)?;
        self.rounds.insert(&round_id, &round);

        events::batch_committed(round_id, batch_index, entries);
        Ok(batch_index)
    }

    pub(crate) fn internal_lock_entries(&mut self, caller: &AccountId, round_id: RoundId) -> Result<u64, LedgerError> {
        self.gate.assert_can_mutate(caller)?;

        let mut round = self.rounds.get(&round_id).unwrap_or_default();
        let total_entries = round.lock(round_id)?;
        self.rounds.insert(&round_id, &round);

        events::entries_locked(round_id, total_entries);
        Ok(total_entries)
    }
}

#[near_bindgen]
impl EntryLedger for Contract {
    fn commit_batch(&mut self, round_id: U64, expected_batch_index: U64, entries: Vec<U64>) -> U64 {
        let batch_index = self
            .internal_commit_batch(&env::predecessor_account_id(), round_id.0, expected_batch_index.0, &entries)
            .or_abort();

        log!("Round {} batch {} committed with {} entries", round_id.0, batch_index, entries.len());
        U64(batch_index)
    }

    fn lock_entries(&mut self, round_id: U64) {
        let total_entries = self
            .internal_lock_entries(&env::predecessor_account_id(), round_id.0)
            .or_abort();

        log!("Round {} locked with {} entries", round_id.0, total_entries);
    }

    fn get_round_stats(&self, round_id: U64) -> Round {
        self.rounds.get(&round_id.0).unwrap_or_default()
    }
}
