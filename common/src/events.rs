//! Audit log records.
//!
//! Every state transition of the ledger and the draw coordinator is written as a NEP-297 event
//! (`EVENT_JSON:` log line). Full entry payloads exist only here, never in contract state, so
//! the event stream is the system of record for anyone replaying a round.

use near_sdk::json_types::{Base64VecU8, U64};
use near_sdk::serde::Serialize;
use near_sdk::serde_json::json;
use near_sdk::{log, AccountId};

use crate::entry_codec::pack_entries;
use crate::types::{GameFormat, RequestId, RoundId};

pub const EVENT_STANDARD: &str = "sweepstakes";
pub const EVENT_VERSION: &str = "1.0.0";

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct BatchCommitted {
    round_id: U64,
    batch_index: U64,
    entry_count: u64,
    entries: Base64VecU8,
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct EntriesLocked {
    round_id: U64,
    total_entries: u64,
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct DrawEvent {
    round_id: U64,
    request_id: U64,
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct DrawFulfilled<'a> {
    round_id: U64,
    request_id: U64,
    winning_numbers: &'a [u8],
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct OperatorEvent<'a> {
    account_id: &'a AccountId,
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct OperatorTransferred<'a> {
    previous_operator_id: &'a AccountId,
    new_operator_id: &'a AccountId,
}

fn log_event<T: Serialize>(event: &str, data: T) {
    let event = json!({
        "standard": EVENT_STANDARD,
        "version": EVENT_VERSION,
        "event": event,
        "data": [data]
    });

    log!("EVENT_JSON:{}", event.to_string());
}

pub fn batch_committed(round_id: RoundId, batch_index: u64, entries: &[U64]) {
    log_event(
        "batch_committed",
        BatchCommitted {
            round_id: round_id.into(),
            batch_index: batch_index.into(),
            entry_count: entries.len() as u64,
            entries: pack_entries(&entries.iter().map(|entry| entry.0).collect::<Vec<u64>>()).into(),
        },
    );
}

pub fn entries_locked(round_id: RoundId, total_entries: u64) {
    log_event("entries_locked", EntriesLocked { round_id: round_id.into(), total_entries });
}

pub fn draw_requested(round_id: RoundId, request_id: RequestId) {
    log_event("draw_requested", DrawEvent { round_id: round_id.into(), request_id: request_id.into() });
}

pub fn draw_request_failed(round_id: RoundId, request_id: RequestId) {
    log_event("draw_request_failed", DrawEvent { round_id: round_id.into(), request_id: request_id.into() });
}

pub fn draw_fulfilled(round_id: RoundId, request_id: RequestId, winning_numbers: &[u8]) {
    log_event(
        "draw_fulfilled",
        DrawFulfilled {
            round_id: round_id.into(),
            request_id: request_id.into(),
            winning_numbers,
        },
    );
}

pub fn draw_cancelled(round_id: RoundId, request_id: RequestId) {
    log_event("draw_cancelled", DrawEvent { round_id: round_id.into(), request_id: request_id.into() });
}

pub fn game_format_updated(format: &GameFormat) {
    log_event("game_format_updated", format);
}

pub fn randomness_config_updated<T: Serialize>(config: &T) {
    log_event("randomness_config_updated", config);
}

pub fn paused(account_id: &AccountId) {
    log_event("paused", OperatorEvent { account_id });
}

pub fn unpaused(account_id: &AccountId) {
    log_event("unpaused", OperatorEvent { account_id });
}

pub fn operator_transferred(previous_operator_id: &AccountId, new_operator_id: &AccountId) {
    log_event(
        "operator_transferred",
        OperatorTransferred {
            previous_operator_id,
            new_operator_id,
        },
    );
}
