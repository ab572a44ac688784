use common::types::{GameFormat, RequestId};
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::json_types::U64;
use near_sdk::serde::{Deserialize, Serialize};
use near_sdk::AccountId;

use crate::errors::DrawError;

/// A pending draw can be cancelled once this much time (ns) has passed since its request.
pub const DRAW_TIMEOUT: u64 = 60 * 60 * 1_000_000_000;
/// Random words asked for per request; only the first one seeds the expansion.
pub const NUM_WORDS: u32 = 1;

/// How the coordinator talks to the randomness provider.
#[derive(BorshDeserialize, BorshSerialize, Serialize, Deserialize)]
#[derive(Clone, Debug, PartialEq, Eq)]
#[serde(crate = "near_sdk::serde")]
pub struct RandomnessConfig {
    /// Account of the provider; the only account allowed to fulfill requests.
    pub provider_id: AccountId,
    pub key_hash: String,
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u64,
    /// Pay the provider in the native token instead of the subscription token.
    pub native_payment: bool,
}

impl RandomnessConfig {
    pub fn validate(&self) -> Result<(), DrawError> {
        if self.key_hash.is_empty() {
            return Err(DrawError::InvalidRandomnessConfig("key_hash is empty"));
        }
        if self.callback_gas_limit == 0 {
            return Err(DrawError::InvalidRandomnessConfig("callback_gas_limit is zero"));
        }

        Ok(())
    }

    pub fn to_request(&self, request_id: RequestId) -> RandomWordsRequest {
        RandomWordsRequest {
            request_id: U64(request_id),
            key_hash: self.key_hash.clone(),
            subscription_id: self.subscription_id,
            request_confirmations: self.request_confirmations,
            callback_gas_limit: self.callback_gas_limit,
            num_words: NUM_WORDS,
            native_payment: self.native_payment,
        }
    }
}

/// Outbound request; the provider answers with `fulfill_random_words(request_id, random_words)`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct RandomWordsRequest {
    pub request_id: U64,
    pub key_hash: String,
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u64,
    pub num_words: u32,
    pub native_payment: bool,
}

// `U64` in this near-sdk version does not derive `Eq`.
impl Eq for RandomWordsRequest {}

pub fn validate_game_format(format: &GameFormat) -> Result<(), DrawError> {
    if !format.is_valid() {
        return Err(DrawError::InvalidGameFormat {
            pick_count: format.pick_count,
            max_range: format.max_range,
        });
    }

    Ok(())
}
