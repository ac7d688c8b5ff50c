//! Contract configuration: one-shot initialization, owner setters and the
//! read accessors backing them. All values live in `instance()` storage.

use soroban_sdk::{Address, Env, String};
use xscrow_common::ContractError;

use crate::access::{require_non_null, require_owner};
use crate::events::{
    emit_address_updated, emit_bound_updated, emit_deposit_fee_updated, emit_initialized,
    emit_ownership_transferred,
};
use crate::fees::validate_fee;
use crate::types::DataKey;

/// Constructor arguments for [`initialize`].
pub struct InitParams {
    pub owner: Address,
    pub token: Address,
    pub lender_treasury: Address,
    pub vendor_treasury: Address,
    pub identifier: String,
    pub oracle: Address,
    pub minimum_deposit_amount: i128,
    pub maximum_deposit_amount: i128,
}

pub fn initialize(e: &Env, params: InitParams) -> Result<(), ContractError> {
    let storage = e.storage().instance();
    if storage.has(&DataKey::Owner) {
        return Err(ContractError::AlreadyInitialized);
    }
    for address in [
        &params.token,
        &params.lender_treasury,
        &params.vendor_treasury,
        &params.oracle,
    ] {
        require_non_null(e, address)?;
    }
    require_positive(params.minimum_deposit_amount)?;
    require_positive(params.maximum_deposit_amount)?;

    storage.set(&DataKey::Owner, &params.owner);
    storage.set(&DataKey::Token, &params.token);
    storage.set(&DataKey::LenderTreasury, &params.lender_treasury);
    storage.set(&DataKey::VendorTreasury, &params.vendor_treasury);
    storage.set(&DataKey::Identifier, &params.identifier);
    storage.set(&DataKey::Oracle, &params.oracle);
    storage.set(&DataKey::DepositFee, &0_u32);
    storage.set(&DataKey::MinimumDeposit, &params.minimum_deposit_amount);
    storage.set(&DataKey::MaximumDeposit, &params.maximum_deposit_amount);
    storage.set(&DataKey::Paused, &false);
    storage.set(&DataKey::Migrated, &false);

    emit_initialized(e, &params.owner, &params.identifier);
    Ok(())
}

// ── Accessors ──────────────────────────────────────────────────────────────

fn required<V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>>(
    e: &Env,
    key: &DataKey,
) -> Result<V, ContractError> {
    e.storage()
        .instance()
        .get(key)
        .ok_or(ContractError::NotInitialized)
}

pub fn identifier(e: &Env) -> Result<String, ContractError> {
    required(e, &DataKey::Identifier)
}

pub fn lender_treasury(e: &Env) -> Result<Address, ContractError> {
    required(e, &DataKey::LenderTreasury)
}

pub fn vendor_treasury(e: &Env) -> Result<Address, ContractError> {
    required(e, &DataKey::VendorTreasury)
}

pub fn deposit_fee(e: &Env) -> Result<u32, ContractError> {
    required(e, &DataKey::DepositFee)
}

pub fn minimum_deposit_amount(e: &Env) -> Result<i128, ContractError> {
    required(e, &DataKey::MinimumDeposit)
}

pub fn maximum_deposit_amount(e: &Env) -> Result<i128, ContractError> {
    required(e, &DataKey::MaximumDeposit)
}

/// `None` until [`update_successor`] has been called.
pub fn successor(e: &Env) -> Option<Address> {
    e.storage().instance().get(&DataKey::Successor)
}

pub fn migrated(e: &Env) -> bool {
    e.storage().instance().get(&DataKey::Migrated).unwrap_or(false)
}

// ── Owner setters ──────────────────────────────────────────────────────────

fn set_address(
    e: &Env,
    owner: &Address,
    key: DataKey,
    event: &str,
    value: &Address,
) -> Result<(), ContractError> {
    require_owner(e, owner)?;
    require_non_null(e, value)?;
    e.storage().instance().set(&key, value);
    emit_address_updated(e, event, value);
    Ok(())
}

pub fn update_lender_treasury(e: &Env, owner: &Address, value: &Address) -> Result<(), ContractError> {
    set_address(e, owner, DataKey::LenderTreasury, "lender_treasury_updated", value)
}

pub fn update_vendor_treasury(e: &Env, owner: &Address, value: &Address) -> Result<(), ContractError> {
    set_address(e, owner, DataKey::VendorTreasury, "vendor_treasury_updated", value)
}

pub fn update_oracle(e: &Env, owner: &Address, value: &Address) -> Result<(), ContractError> {
    set_address(e, owner, DataKey::Oracle, "oracle_updated", value)
}

pub fn update_successor(e: &Env, owner: &Address, value: &Address) -> Result<(), ContractError> {
    set_address(e, owner, DataKey::Successor, "successor_updated", value)
}

pub fn update_deposit_fee(e: &Env, owner: &Address, percent: u32) -> Result<(), ContractError> {
    require_owner(e, owner)?;
    validate_fee(percent)?;
    e.storage().instance().set(&DataKey::DepositFee, &percent);
    emit_deposit_fee_updated(e, percent);
    Ok(())
}

pub fn update_minimum_deposit_amount(
    e: &Env,
    owner: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    require_owner(e, owner)?;
    require_positive(amount)?;
    e.storage().instance().set(&DataKey::MinimumDeposit, &amount);
    emit_bound_updated(e, "min_deposit_updated", amount);
    Ok(())
}

pub fn update_maximum_deposit_amount(
    e: &Env,
    owner: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    require_owner(e, owner)?;
    require_positive(amount)?;
    e.storage().instance().set(&DataKey::MaximumDeposit, &amount);
    emit_bound_updated(e, "max_deposit_updated", amount);
    Ok(())
}

pub fn transfer_ownership(e: &Env, owner: &Address, new_owner: &Address) -> Result<(), ContractError> {
    require_owner(e, owner)?;
    require_non_null(e, new_owner)?;
    e.storage().instance().set(&DataKey::Owner, new_owner);
    emit_ownership_transferred(e, owner, new_owner);
    Ok(())
}

fn require_positive(amount: i128) -> Result<(), ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    Ok(())
}
