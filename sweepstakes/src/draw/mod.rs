use common::errors::OrAbort;
use common::events;
use common::expander::expand_for_format;
use common::types::{GameFormat, RandomWord, RequestId, RoundId, WinningNumbers};
use near_sdk::json_types::U64;
use near_sdk::{env, log, near_bindgen, AccountId, PromiseResult};

use crate::errors::{DrawError, IntegrityFault};
use crate::external::{ext_randomness_provider, this_contract};
use crate::interfaces::draw::{DrawConfigurator, DrawRecord, DrawRegister, DrawRequester};
use crate::utils::gas;
use crate::{Contract, ContractContract};
use self::config::{validate_game_format, RandomnessConfig, DRAW_TIMEOUT};

pub mod config;

#[near_bindgen]
impl Contract {
    /// Entry point for the randomness provider. Anything unexpected here is an integrity fault:
    /// it is logged with an `INTEGRITY_FAULT` prefix for alerting and the receipt fails.
    pub fn fulfill_random_words(&mut self, request_id: U64, random_words: Vec<RandomWord>) -> WinningNumbers {
        match self.internal_fulfill_random_words(&env::predecessor_account_id(), request_id.0, &random_words) {
            Ok(draw) => {
                log!("Round {} drawn: {:?}", draw.round_id.0, draw.winning_numbers);
                draw.winning_numbers
            }
            Err(fault) => {
                log!("INTEGRITY_FAULT: {}", fault);
                env::panic_str(&DrawError::from(fault).to_string())
            }
        }
    }

    #[private]
    pub fn on_random_words_requested(&mut self, round_id: U64, request_id: U64) -> bool {
        let submitted = matches!(env::promise_result(0), PromiseResult::Successful(_));
        self.handle_request_outcome(round_id.0, request_id.0, submitted)
    }
}

impl Contract {
    pub(crate) fn internal_request_draw(&mut self, caller: &AccountId, round_id: RoundId) -> Result<DrawRecord, DrawError> {
        self.gate.assert_can_mutate(caller)?;

        if self.draws.get(&round_id).map_or(false, |draw| draw.fulfilled) {
            return Err(DrawError::RoundAlreadyDrawn(round_id));
        }
        if self.pending_rounds.contains(&round_id) {
            return Err(DrawError::DrawAlreadyInProgress(round_id));
        }

        let request_id = self.last_request_id + 1;
        let draw = DrawRecord {
            round_id: U64(round_id),
            request_id: U64(request_id),
            winning_numbers: WinningNumbers::new(),
            fulfilled: false,
            requested_at: U64(env::block_timestamp()),
            fulfilled_at: U64(0),
            pick_count: self.game_format.pick_count,
            max_range: self.game_format.max_range,
        };

        self.last_request_id = request_id;
        self.draws.insert(&round_id, &draw);
        self.request_rounds.insert(&request_id, &round_id);
        self.pending_rounds.insert(&round_id);

        events::draw_requested(round_id, request_id);
        Ok(draw)
    }

    pub(crate) fn internal_fulfill_random_words(
        &mut self,
        caller: &AccountId,
        request_id: RequestId,
        random_words: &[RandomWord],
    ) -> Result<DrawRecord, IntegrityFault> {
        if caller != &self.randomness_config.provider_id {
            return Err(IntegrityFault::UnexpectedCaller {
                caller: caller.clone(),
                provider_id: self.randomness_config.provider_id.clone(),
            });
        }

        let round_id = self
            .request_rounds
            .get(&request_id)
            .ok_or(IntegrityFault::UnknownRequest(request_id))?;
        let mut draw = self
            .draws
            .get(&round_id)
            .ok_or(IntegrityFault::UnknownRequest(request_id))?;

        if draw.fulfilled {
            return Err(IntegrityFault::AlreadyFulfilled { round_id, request_id });
        }
        if draw.request_id.0 != request_id {
            return Err(IntegrityFault::RequestMismatch {
                round_id,
                expected: draw.request_id.0,
                actual: request_id,
            });
        }
        let seed = *random_words
            .first()
            .ok_or(IntegrityFault::MissingRandomWords(request_id))?;

        draw.winning_numbers = expand_for_format(seed, &draw.game_format());
        draw.fulfilled = true;
        draw.fulfilled_at = U64(env::block_timestamp());

        self.draws.insert(&round_id, &draw);
        self.pending_rounds.remove(&round_id);

        events::draw_fulfilled(round_id, request_id, &draw.winning_numbers);
        Ok(draw)
    }

    /// Cancellation stays available while paused, it is the recovery path for a provider that
    /// never answers.
    pub(crate) fn internal_cancel_draw(&mut self, caller: &AccountId, round_id: RoundId) -> Result<DrawRecord, DrawError> {
        self.gate.assert_operator(caller)?;

        if !self.pending_rounds.contains(&round_id) {
            return Err(DrawError::DrawNotPending(round_id));
        }
        let draw = match self.draws.get(&round_id) {
            Some(draw) if !draw.fulfilled => draw,
            _ => return Err(DrawError::DrawNotPending(round_id)),
        };

        let timeout_at = draw.requested_at.0 + DRAW_TIMEOUT;
        if env::block_timestamp() < timeout_at {
            return Err(DrawError::DrawNotTimedOut {
                requested_at: draw.requested_at.0,
                timeout_at,
            });
        }

        self.pending_rounds.remove(&round_id);
        self.draws.remove(&round_id);
        self.request_rounds.remove(&draw.request_id.0);

        events::draw_cancelled(round_id, draw.request_id.0);
        Ok(draw)
    }

    pub(crate) fn internal_set_game_format(&mut self, caller: &AccountId, format: GameFormat) -> Result<(), DrawError> {
        self.gate.assert_can_mutate(caller)?;
        validate_game_format(&format)?;

        self.game_format = format;
        events::game_format_updated(&format);
        Ok(())
    }

    pub(crate) fn internal_set_randomness_config(&mut self, caller: &AccountId, config: RandomnessConfig) -> Result<(), DrawError> {
        self.gate.assert_can_mutate(caller)?;
        config.validate()?;

        events::randomness_config_updated(&config);
        self.randomness_config = config;
        Ok(())
    }

    pub(crate) fn internal_get_winning_numbers(&self, round_id: RoundId) -> Result<WinningNumbers, DrawError> {
        match self.draws.get(&round_id) {
            Some(draw) if draw.fulfilled => Ok(draw.winning_numbers),
            _ => Err(DrawError::DrawNotFound(round_id)),
        }
    }

    fn handle_request_outcome(&self, round_id: RoundId, request_id: RequestId, submitted: bool) -> bool {
        if !submitted {
            log!(
                "Randomness request {} for round {} was not accepted by {}",
                request_id,
                round_id,
                self.randomness_config.provider_id
            );
            events::draw_request_failed(round_id, request_id);
        }

        submitted
    }
}

#[near_bindgen]
impl DrawRequester for Contract {
    fn request_draw(&mut self, round_id: U64) -> U64 {
        let draw = self
            .internal_request_draw(&env::predecessor_account_id(), round_id.0)
            .or_abort();

        ext_randomness_provider::request_random_words(
            self.randomness_config.to_request(draw.request_id.0),
            self.randomness_config.provider_id.clone(),
            0,
            gas::REQUEST_RANDOM_WORDS,
        )
        .then(this_contract::on_random_words_requested(
            round_id,
            draw.request_id,
            env::current_account_id(),
            0,
            gas::ON_RANDOM_WORDS_REQUESTED,
        ));

        log!(
            "Round {} requested randomness {} for {} picks out of {}",
            round_id.0,
            draw.request_id.0,
            draw.pick_count,
            draw.max_range
        );
        draw.request_id
    }

    fn cancel_draw(&mut self, round_id: U64) {
        let draw = self
            .internal_cancel_draw(&env::predecessor_account_id(), round_id.0)
            .or_abort();

        log!("Round {} draw with request {} cancelled", round_id.0, draw.request_id.0);
    }

    fn is_draw_pending(&self, round_id: U64) -> bool {
        self.pending_rounds.contains(&round_id.0)
    }
}

#[near_bindgen]
impl DrawRegister for Contract {
    fn get_draw(&self, round_id: U64) -> DrawRecord {
        self.draws.get(&round_id.0).unwrap_or_default()
    }

    fn get_winning_numbers(&self, round_id: U64) -> WinningNumbers {
        self.internal_get_winning_numbers(round_id.0).or_abort()
    }

    fn get_round_for_request(&self, request_id: U64) -> Option<U64> {
        self.request_rounds.get(&request_id.0).map(U64)
    }
}

#[near_bindgen]
impl DrawConfigurator for Contract {
    fn set_game_format(&mut self, pick_count: u8, max_range: u8) {
        self.internal_set_game_format(&env::predecessor_account_id(), GameFormat::new(pick_count, max_range))
            .or_abort();
    }

    fn set_randomness_config(&mut self, config: RandomnessConfig) {
        self.internal_set_randomness_config(&env::predecessor_account_id(), config)
            .or_abort();
    }

    fn get_game_format(&self) -> GameFormat {
        self.game_format
    }

    fn get_randomness_config(&self) -> RandomnessConfig {
        self.randomness_config.clone()
    }
}
