pub mod ledger {
    use near_sdk::json_types::U64;

    use crate::ledger::round::Round;

    pub trait EntryLedger {
        /// Appends a batch to the round and returns its index. `expected_batch_index` must equal
        /// the number of batches already committed, which turns a retransmitted batch into a
        /// `BatchIndexMismatch` instead of a second copy.
        fn commit_batch(&mut self, round_id: U64, expected_batch_index: U64, entries: Vec<U64>) -> U64;
        /// Freezes the round's entries for good.
        fn lock_entries(&mut self, round_id: U64);
        fn get_round_stats(&self, round_id: U64) -> Round;
    }
}

pub mod draw {
    use common::types::{GameFormat, WinningNumbers};
    use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
    use near_sdk::json_types::U64;
    use near_sdk::serde::{Serialize, Deserialize};

    use crate::draw::config::RandomnessConfig;

    /// Draw of a round. The game format is copied in at request time so later format
    /// changes never reach a pending or finished draw.
    #[derive(Clone, Debug, PartialEq)]
    #[derive(BorshDeserialize, BorshSerialize)]
    #[derive(Serialize, Deserialize)]
    #[serde(crate = "near_sdk::serde")]
    pub struct DrawRecord {
        pub round_id: U64,
        pub request_id: U64,
        pub winning_numbers: WinningNumbers,
        pub fulfilled: bool,
        pub requested_at: U64,
        pub fulfilled_at: U64,
        pub pick_count: u8,
        pub max_range: u8,
    }

    // `U64` in this near-sdk version derives neither `Eq` nor `Default`.
    impl Eq for DrawRecord {}

    impl Default for DrawRecord {
        fn default() -> Self {
            Self {
                round_id: U64(0),
                request_id: U64(0),
                winning_numbers: WinningNumbers::default(),
                fulfilled: false,
                requested_at: U64(0),
                fulfilled_at: U64(0),
                pick_count: 0,
                max_range: 0,
            }
        }
    }

    impl DrawRecord {
        pub fn game_format(&self) -> GameFormat {
            GameFormat::new(self.pick_count, self.max_range)
        }
    }

    pub trait DrawRequester {
        /// Asks the provider for randomness and returns the request id. The draw stays pending
        /// until the provider calls `fulfill_random_words` or the draw is cancelled.
        fn request_draw(&mut self, round_id: U64) -> U64;
        /// Drops a pending draw that outlived `DRAW_TIMEOUT` so the round can be drawn again.
        fn cancel_draw(&mut self, round_id: U64);
        fn is_draw_pending(&self, round_id: U64) -> bool;
    }

    pub trait DrawRegister {
        fn get_draw(&self, round_id: U64) -> DrawRecord;
        fn get_winning_numbers(&self, round_id: U64) -> WinningNumbers;
        fn get_round_for_request(&self, request_id: U64) -> Option<U64>;
    }

    pub trait DrawConfigurator {
        fn set_game_format(&mut self, pick_count: u8, max_range: u8);
        fn set_randomness_config(&mut self, config: RandomnessConfig);
        fn get_game_format(&self) -> GameFormat;
        fn get_randomness_config(&self) -> RandomnessConfig;
    }
}
