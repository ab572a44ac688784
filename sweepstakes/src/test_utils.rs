use near_sdk::AccountId;

pub fn operator() -> AccountId {
    AccountId::new_unchecked("operator".to_string())
}

pub fn provider() -> AccountId {
    AccountId::new_unchecked("vrf-provider".to_string())
}

pub fn alice() -> AccountId {
    AccountId::new_unchecked("alice".to_string())
}

pub fn sweepstakes() -> AccountId {
    AccountId::new_unchecked("sweepstakes".to_string())
}

#[cfg(test)]
pub mod tests {
    use common::types::GameFormat;
    use near_sdk::test_utils::VMContextBuilder;
    use near_sdk::{testing_env, AccountId, VMContext};

    use crate::draw::config::RandomnessConfig;
    use crate::*;

    pub use super::*;

    pub const ONE_BLOCK_TS: u64 = 1_000_000_000;

    pub fn randomness_config() -> RandomnessConfig {
        RandomnessConfig {
            provider_id: provider(),
            key_hash: "0x787d74caea10b2b357790d5b5247c2f63d1d91572a9846f780606e4d953677ae".to_string(),
            subscription_id: 1,
            request_confirmations: 3,
            callback_gas_limit: 200_000,
            native_payment: false,
        }
    }

    pub struct Emulator {
        pub contract: Contract,
        pub predecessor: AccountId,
        pub block_index: u64,
        pub block_timestamp: u64,
        pub context: VMContext,
    }

    impl Emulator {
        pub fn new() -> Self {
            let context = VMContextBuilder::new()
                .current_account_id(sweepstakes())
                .predecessor_account_id(operator())
                .build();
            testing_env!(context.clone());
            let contract = Contract::new(operator(), GameFormat::new(6, 45), randomness_config());
            Emulator {
                contract,
                predecessor: operator(),
                block_index: 0,
                block_timestamp: 0,
                context,
            }
        }

        pub fn update_context(&mut self) {
            self.context = VMContextBuilder::new()
                .current_account_id(sweepstakes())
                .signer_account_id(self.predecessor.clone())
                .predecessor_account_id(self.predecessor.clone())
                .block_index(self.block_index)
                .block_timestamp(self.block_timestamp)
                .build();
            testing_env!(self.context.clone());
        }

        pub fn set_predecessor(&mut self, account_id: AccountId) {
            self.predecessor = account_id;
            self.update_context();
        }

        /// Moves to the next block; logs of the previous receipt are dropped.
        pub fn next_block(&mut self) {
            self.skip_time(ONE_BLOCK_TS);
        }

        pub fn skip_time(&mut self, nanos: u64) {
            self.block_index += 1;
            self.block_timestamp += nanos;
            self.update_context();
        }
    }
}
