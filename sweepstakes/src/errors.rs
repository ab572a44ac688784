use common::gate::GateError;
use common::types::{RequestId, RoundId};
use near_sdk::AccountId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("AlreadyLocked: entries of round {0} are locked")]
    AlreadyLocked(RoundId),
    #[error("InvalidBatchSize: a batch holds 1 to {max} entries, got {size}")]
    InvalidBatchSize { size: usize, max: usize },
    #[error("InvalidEntry: entry at index {0} is zero")]
    InvalidEntry(usize),
    #[error("BatchIndexMismatch: expected batch index {expected}, current batch index is {actual}")]
    BatchIndexMismatch { expected: u64, actual: u64 },
    #[error(transparent)]
    Gate(#[from] GateError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrawError {
    #[error("RoundAlreadyDrawn: round {0} already has winning numbers")]
    RoundAlreadyDrawn(RoundId),
    #[error("DrawAlreadyInProgress: round {0} is waiting for randomness")]
    DrawAlreadyInProgress(RoundId),
    #[error("DrawNotFound: round {0} has no fulfilled draw")]
    DrawNotFound(RoundId),
    #[error("InvalidGameFormat: cannot pick {pick_count} numbers from 1..={max_range}")]
    InvalidGameFormat { pick_count: u8, max_range: u8 },
    #[error("InvalidRandomnessConfig: {0}")]
    InvalidRandomnessConfig(&'static str),
    #[error("DrawNotPending: round {0} has no pending draw")]
    DrawNotPending(RoundId),
    #[error("DrawNotTimedOut: draw requested at {requested_at} can be cancelled from {timeout_at}")]
    DrawNotTimedOut { requested_at: u64, timeout_at: u64 },
    #[error(transparent)]
    Gate(#[from] GateError),
    #[error("IntegrityFault: {0}")]
    IntegrityFault(#[from] IntegrityFault),
}

/// Broken expectations on the fulfillment path. They point at a miswired or compromised
/// randomness provider and are never part of normal operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntegrityFault {
    #[error("{caller} is not the randomness provider {provider_id}")]
    UnexpectedCaller { caller: AccountId, provider_id: AccountId },
    #[error("request {0} is unknown or was cancelled")]
    UnknownRequest(RequestId),
    #[error("request {request_id} for round {round_id} is already fulfilled")]
    AlreadyFulfilled { round_id: RoundId, request_id: RequestId },
    #[error("round {round_id} waits for request {expected}, got {actual}")]
    RequestMismatch { round_id: RoundId, expected: RequestId, actual: RequestId },
    #[error("request {0} was fulfilled without random words")]
    MissingRandomWords(RequestId),
}
