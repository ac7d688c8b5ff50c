//! Owner and oracle gates.
//!
//! Each check authenticates the caller first, then compares it with the
//! stored identity.

use soroban_sdk::{Address, Env};
use xscrow_common::ContractError;

use crate::types::DataKey;

pub fn owner(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(ContractError::NotInitialized)
}

pub fn oracle(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Oracle)
        .ok_or(ContractError::NotInitialized)
}

pub fn require_owner(e: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    if owner(e)? != *caller {
        return Err(ContractError::NotOwner);
    }
    Ok(())
}

pub fn require_oracle(e: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    if oracle(e)? != *caller {
        return Err(ContractError::NotOracle);
    }
    Ok(())
}

/// Rejects the escrow's own address, the null sink for routed value.
pub fn require_non_null(e: &Env, address: &Address) -> Result<(), ContractError> {
    if *address == e.current_contract_address() {
        return Err(ContractError::ZeroAddress);
    }
    Ok(())
}
