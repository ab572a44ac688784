use borsh::{BorshDeserialize, BorshSerialize};
use near_sdk::AccountId;
use thiserror::Error;

use crate::events;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GateError {
    #[error("Unauthorized: {caller} is not the operator {operator_id}")]
    Unauthorized { caller: AccountId, operator_id: AccountId },
    #[error("Paused: operations are suspended")]
    Paused,
    #[error("NotPaused: operations are not suspended")]
    NotPaused,
}

/// Single-operator authorization plus an emergency pause switch.
///
/// The operator role moves with `transfer_operator` and is never renounced: without an operator
/// no round could be locked, drawn or recovered.
#[derive(BorshDeserialize, BorshSerialize)]
pub struct CapabilityGate {
    operator_id: AccountId,
    paused: bool,
}

impl CapabilityGate {
    pub fn new(operator_id: AccountId) -> Self {
        Self { operator_id, paused: false }
    }

    pub fn operator_id(&self) -> &AccountId {
        &self.operator_id
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn assert_operator(&self, caller: &AccountId) -> Result<(), GateError> {
        if caller != &self.operator_id {
            return Err(GateError::Unauthorized {
                caller: caller.clone(),
                operator_id: self.operator_id.clone(),
            });
        }

        Ok(())
    }

    pub fn assert_not_paused(&self) -> Result<(), GateError> {
        if self.paused {
            return Err(GateError::Paused);
        }

        Ok(())
    }

    /// Gate for routine mutating operations: operator only, and not while paused.
    pub fn assert_can_mutate(&self, caller: &AccountId) -> Result<(), GateError> {
        self.assert_operator(caller)?;
        self.assert_not_paused()
    }

    pub fn pause(&mut self, caller: &AccountId) -> Result<(), GateError> {
        self.assert_operator(caller)?;
        self.assert_not_paused()?;

        self.paused = true;
        events::paused(caller);
        Ok(())
    }

    pub fn unpause(&mut self, caller: &AccountId) -> Result<(), GateError> {
        self.assert_operator(caller)?;
        if !self.paused {
            return Err(GateError::NotPaused);
        }

        self.paused = false;
        events::unpaused(caller);
        Ok(())
    }

    pub fn transfer_operator(&mut self, caller: &AccountId, new_operator_id: AccountId) -> Result<(), GateError> {
        self.assert_operator(caller)?;

        events::operator_transferred(&self.operator_id, &new_operator_id);
        self.operator_id = new_operator_id;
        Ok(())
    }
}

/// Exposes the gate of a contract as `pause`, `unpause`, `transfer_operator`, `get_operator`
/// and `is_paused` entry points.
#[macro_export]
macro_rules! impl_capability_gate {
    ($contract: ident, $gate: ident) => {
        #[near_sdk::near_bindgen]
        impl $contract {
            pub fn pause(&mut self) {
                let caller = near_sdk::env::predecessor_account_id();
                $crate::errors::OrAbort::or_abort(self.$gate.pause(&caller));
            }

            pub fn unpause(&mut self) {
                let caller = near_sdk::env::predecessor_account_id();
                $crate::errors::OrAbort::or_abort(self.$gate.unpause(&caller));
            }

            pub fn transfer_operator(&mut self, new_operator_id: near_sdk::AccountId) {
                let caller = near_sdk::env::predecessor_account_id();
                $crate::errors::OrAbort::or_abort(self.$gate.transfer_operator(&caller, new_operator_id));
            }

            pub fn get_operator(&self) -> near_sdk::AccountId {
                self.$gate.operator_id().clone()
            }

            pub fn is_paused(&self) -> bool {
                self.$gate.is_paused()
            }
        }
    };
}
