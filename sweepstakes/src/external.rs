use crate::*;
use crate::draw::config::RandomWordsRequest;

// Callback
#[ext_contract(this_contract)]
pub trait ExtSelf {
    fn on_random_words_requested(&mut self, round_id: U64, request_id: U64) -> bool;
}

#[ext_contract(ext_randomness_provider)]
pub trait RandomnessProvider {
    /// Registers a request; the provider later calls back `fulfill_random_words` on the sender.
    fn request_random_words(&mut self, request: RandomWordsRequest);
}
