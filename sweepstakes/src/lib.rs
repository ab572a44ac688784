use common::errors::OrAbort;
use common::gate::CapabilityGate;
use common::impl_capability_gate;
use common::types::{GameFormat, RequestId, RoundId};
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::collections::{LookupMap, LookupSet};
use near_sdk::json_types::U64;
use near_sdk::{env, ext_contract, near_bindgen, AccountId, PanicOnDefault};
use draw::config::{validate_game_format, RandomnessConfig};
use interfaces::draw::DrawRecord;
use ledger::round::Round;
use utils::storage_keys::StorageKeys;

pub mod external;
pub use crate::external::*;

mod draw;
mod errors;
mod interfaces;
mod ledger;
mod utils;

#[cfg(test)]
mod test_utils;

/// Entry ledger and draw coordinator behind one operator and one pause switch.
#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
pub struct Contract {
    gate: CapabilityGate,
    rounds: LookupMap<RoundId, Round>,
    game_format: GameFormat,
    randomness_config: RandomnessConfig,
    draws: LookupMap<RoundId, DrawRecord>,
    // rounds waiting for the provider
    pending_rounds: LookupSet<RoundId>,
    request_rounds: LookupMap<RequestId, RoundId>,
    last_request_id: RequestId,
}

#[near_bindgen]
impl Contract {
    #[init]
    pub fn new(operator_id: AccountId, game_format: GameFormat, randomness_config: RandomnessConfig) -> Self {
        assert!(!env::state_exists(), "Already initialized");
        validate_game_format(&game_format).or_abort();
        randomness_config.validate().or_abort();

        Self {
            gate: CapabilityGate::new(operator_id),
            rounds: LookupMap::new(StorageKeys::Rounds),
            game_format,
            randomness_config,
            draws: LookupMap::new(StorageKeys::Draws),
            pending_rounds: LookupSet::new(StorageKeys::PendingRounds),
            request_rounds: LookupMap::new(StorageKeys::RequestRounds),
            last_request_id: 0,
        }
    }
}

impl_capability_gate!(Contract, gate);

#[cfg(test)]
pub mod tests {
    use common::gate::GateError;
    use common::types::U256;

    use super::*;
    use crate::draw::config::DRAW_TIMEOUT;
    use crate::errors::{DrawError, LedgerError};
    use crate::interfaces::draw::DrawRequester;
    use crate::interfaces::ledger::EntryLedger;
    use crate::test_utils::tests::*;

    #[test]
    fn test_one_pause_stops_ledger_and_draws() {
        let mut emulator = Emulator::new();
        emulator.contract.pause();

        assert_eq!(
            emulator.contract.internal_commit_batch(&operator(), 1, 0, &[U64(101)]),
            Err(LedgerError::Gate(GateError::Paused))
        );
        assert_eq!(
            emulator.contract.internal_lock_entries(&operator(), 1),
            Err(LedgerError::Gate(GateError::Paused))
        );
        assert_eq!(
            emulator.contract.internal_request_draw(&operator(), 1),
            Err(DrawError::Gate(GateError::Paused))
        );

        emulator.contract.unpause();
        assert_eq!(emulator.contract.commit_batch(U64(1), U64(0), vec![U64(101)]), U64(0));
        emulator.contract.lock_entries(U64(1));
        assert_eq!(emulator.contract.request_draw(U64(1)), U64(1));
    }

    #[test]
    fn test_paused_round_still_settles_and_recovers() {
        let mut emulator = Emulator::new();
        let first = emulator.contract.request_draw(U64(1));
        emulator.contract.request_draw(U64(2));
        emulator.contract.pause();

        emulator.set_predecessor(provider());
        emulator.contract.fulfill_random_words(first, vec![U256::from(7u64)]);
        assert!(!emulator.contract.is_draw_pending(U64(1)));

        emulator.set_predecessor(operator());
        emulator.skip_time(DRAW_TIMEOUT);
        emulator.contract.cancel_draw(U64(2));
        assert!(!emulator.contract.is_draw_pending(U64(2)));
    }

    #[test]
    fn test_transferred_operator_runs_whole_round() {
        let mut emulator = Emulator::new();
        emulator.contract.transfer_operator(alice());
        assert_eq!(emulator.contract.get_operator(), alice());

        assert!(matches!(
            emulator.contract.internal_commit_batch(&operator(), 1, 0, &[U64(101)]),
            Err(LedgerError::Gate(GateError::Unauthorized { .. }))
        ));
        assert!(matches!(
            emulator.contract.internal_request_draw(&operator(), 1),
            Err(DrawError::Gate(GateError::Unauthorized { .. }))
        ));

        emulator.set_predecessor(alice());
        emulator.contract.commit_batch(U64(1), U64(0), vec![U64(101)]);
        emulator.contract.lock_entries(U64(1));
        assert_eq!(emulator.contract.request_draw(U64(1)), U64(1));
        emulator.contract.pause();
        assert!(emulator.contract.is_paused());
    }

    #[test]
    #[should_panic(expected = "Unauthorized")]
    fn test_pause_by_stranger_panics() {
        let mut emulator = Emulator::new();
        emulator.set_predecessor(alice());
        emulator.contract.pause();
    }
}
