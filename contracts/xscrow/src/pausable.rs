//! Circuit breaker: Active <-> Paused.
//!
//! Ledger-mutating entry points run only while Active; migration runs only
//! while Paused. Pausing never touches ledger state.

use soroban_sdk::{Address, Env};
use xscrow_common::ContractError;

use crate::access::require_owner;
use crate::events::{emit_paused, emit_unpaused};
use crate::types::DataKey;

pub fn is_paused(e: &Env) -> bool {
    e.storage().instance().get(&DataKey::Paused).unwrap_or(false)
}

pub fn require_not_paused(e: &Env) -> Result<(), ContractError> {
    if is_paused(e) {
        return Err(ContractError::ContractPaused);
    }
    Ok(())
}

pub fn require_paused(e: &Env) -> Result<(), ContractError> {
    if !is_paused(e) {
        return Err(ContractError::NotPaused);
    }
    Ok(())
}

pub fn pause(e: &Env, owner: &Address) -> Result<(), ContractError> {
    require_owner(e, owner)?;
    require_not_paused(e)?;
    e.storage().instance().set(&DataKey::Paused, &true);
    emit_paused(e, owner);
    Ok(())
}

pub fn unpause(e: &Env, owner: &Address) -> Result<(), ContractError> {
    require_owner(e, owner)?;
    require_paused(e)?;
    e.storage().instance().set(&DataKey::Paused, &false);
    emit_unpaused(e, owner);
    Ok(())
}
