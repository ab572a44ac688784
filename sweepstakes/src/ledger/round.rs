use common::types::RoundId;
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::json_types::U64;
use near_sdk::serde::{Deserialize, Serialize};

use crate::errors::LedgerError;
use super::ENTRIES_PER_BATCH;

/// Counters of a round. Entry payloads are only ever written to the audit log.
#[derive(BorshDeserialize, BorshSerialize, Serialize, Deserialize)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(crate = "near_sdk::serde")]
pub struct Round {
    pub entry_count: u64,
    pub batch_count: u64,
    pub locked: bool,
}

impl Round {
    pub fn assert_not_locked(&self, round_id: RoundId) -> Result<(), LedgerError> {
        if self.locked {
            return Err(LedgerError::AlreadyLocked(round_id));
        }

        Ok(())
    }

    /// Applies a batch to the counters and returns the index it was assigned.
    /// Nothing changes unless every check passes.
    pub fn commit_batch(&mut self, round_id: RoundId, expected_batch_index: u64, entries: &[U64]) -> Result<u64, LedgerError> {
        self.assert_not_locked(round_id)?;
        validate_batch(entries)?;

        if expected_batch_index != self.batch_count {
            return Err(LedgerError::BatchIndexMismatch {
                expected: expected_batch_index,
                actual: self.batch_count,
            });
        }

        let batch_index = self.batch_count;
        self.batch_count += 1;
        self.entry_count += entries.len() as u64;

        Ok(batch_index)
    }

    /// Locks the round and returns its final entry count.
    pub fn lock(&mut self, round_id: RoundId) -> Result<u64, LedgerError> {
        self.assert_not_locked(round_id)?;

        self.locked = true;
        Ok(self.entry_count)
    }
}

pub fn validate_batch(entries: &[U64]) -> Result<(), LedgerError> {
    if entries.is_empty() || entries.len() > ENTRIES_PER_BATCH {
        return Err(LedgerError::InvalidBatchSize {
            size: entries.len(),
            max: ENTRIES_PER_BATCH,
        });
    }

    match entries.iter().position(|entry| entry.0 == 0) {
        Some(index) => Err(LedgerError::InvalidEntry(index)),
        None => Ok(()),
    }
}
