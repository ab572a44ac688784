pub mod storage_keys{
    use near_sdk::BorshStorageKey;
    use near_sdk::borsh::{self, BorshSerialize};

    #[derive(BorshStorageKey, BorshSerialize)]
    pub enum StorageKeys {
        Rounds,
        Draws,
        PendingRounds,
        RequestRounds,
    }
}

pub mod gas{
    use near_sdk::Gas;

    pub const REQUEST_RANDOM_WORDS: Gas = Gas(Gas::ONE_TERA.0 * 20);
    pub const ON_RANDOM_WORDS_REQUESTED: Gas = Gas(Gas::ONE_TERA.0 * 10);
}
