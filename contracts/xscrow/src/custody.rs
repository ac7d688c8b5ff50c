//! Token custody for the escrow.
//! Centralizes the settled-asset client and the transfers into and out of
//! the contract's own balance.

use soroban_sdk::token::TokenClient;
use soroban_sdk::{Address, Env};
use xscrow_common::ContractError;

use crate::types::DataKey;

/// @notice Returns the settled asset address.
/// @dev Fails with `NotInitialized` before `initialize`.
pub fn token(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(ContractError::NotInitialized)
}

fn token_client(e: &Env) -> Result<TokenClient<'_>, ContractError> {
    let token = token(e)?;
    Ok(TokenClient::new(e, &token))
}

/// @notice Pulls `amount` from `from` into the escrow.
/// @dev Requires a prior allowance for the escrow as spender.
pub fn transfer_in(e: &Env, from: &Address, amount: i128) -> Result<(), ContractError> {
    if amount < 0 {
        return Err(ContractError::InvalidAmount);
    }
    if amount == 0 {
        return Ok(());
    }

    let contract = e.current_contract_address();
    match token_client(e)?.try_transfer_from(&contract, from, &contract, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContractError::TransferFailed),
    }
}

/// @notice Sends `amount` held by the escrow to `recipient`.
/// @dev Used for withdrawals, fee routing, executed deposits and migration.
pub fn transfer_out(e: &Env, recipient: &Address, amount: i128) -> Result<(), ContractError> {
    if amount < 0 {
        return Err(ContractError::InvalidAmount);
    }
    if amount == 0 {
        return Ok(());
    }

    let contract = e.current_contract_address();
    match token_client(e)?.try_transfer(&contract, recipient, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContractError::TransferFailed),
    }
}

/// @notice Current token balance held by the escrow.
pub fn balance(e: &Env) -> Result<i128, ContractError> {
    Ok(token_client(e)?.balance(&e.current_contract_address()))
}
