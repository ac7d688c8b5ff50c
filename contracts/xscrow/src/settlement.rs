//! Oracle request/fulfill protocol.
//!
//! A request entry point validates the payee's balance, stores a
//! [`PendingRequest`] under a fresh id and hands the id to the oracle. The
//! oracle answers through [`fulfill`], which consumes the pending request
//! exactly once and settles it according to the verdict.
//!
//! The `*_of` entry points let the oracle settle directly, without a prior
//! request. They follow the same balance and event rules.
//!
//! ## Stale requests
//! Other transactions may run between request and fulfill. If the payee's
//! balance no longer covers the request when the verdict arrives, the
//! request is consumed, nothing moves, and `request_voided` is emitted.

use soroban_sdk::{Address, Env};
use xscrow_common::{ContractError, RequestKind, VerificationOracleClient};

use crate::access::{oracle, require_oracle, require_owner};
use crate::config::lender_treasury;
use crate::custody::transfer_out;
use crate::events::{
    emit_deposit_executed, emit_deposit_execution_not_allowed, emit_request_voided,
    emit_verification_requested, emit_withdraw_not_allowed, emit_withdraw_successful,
};
use crate::ledger;
use crate::math::inc_u64;
use crate::pausable::require_not_paused;
use crate::types::{DataKey, PendingRequest};

const BUMP_THRESHOLD: u32 = 17_280;
const BUMP_TARGET: u32 = 518_400;

// ── Requests ───────────────────────────────────────────────────────────────

pub fn request_withdraw(e: &Env, payee: &Address) -> Result<u64, ContractError> {
    require_not_paused(e)?;
    payee.require_auth();
    if ledger::balance_of(e, payee) == 0 {
        return Err(ContractError::InsufficientBalance);
    }
    submit(e, payee, RequestKind::FullWithdraw)
}

pub fn request_partial_withdraw(
    e: &Env,
    payee: &Address,
    amount: i128,
) -> Result<u64, ContractError> {
    require_not_paused(e)?;
    payee.require_auth();
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    let balance = ledger::balance_of(e, payee);
    if balance == 0 || amount > balance {
        return Err(ContractError::InsufficientBalance);
    }
    submit(e, payee, RequestKind::PartialWithdraw(amount))
}

/// Owner-only: ask the oracle whether `payee`'s escrow may be released to the
/// lender treasury.
pub fn request_execute_deposit_of(
    e: &Env,
    owner: &Address,
    payee: &Address,
) -> Result<u64, ContractError> {
    require_not_paused(e)?;
    require_owner(e, owner)?;
    if ledger::balance_of(e, payee) == 0 {
        return Err(ContractError::InsufficientBalance);
    }
    submit(e, payee, RequestKind::ExecuteDeposit)
}

fn submit(e: &Env, payee: &Address, kind: RequestKind) -> Result<u64, ContractError> {
    let request_id = next_request_id(e)?;
    let key = DataKey::PendingRequest(request_id);
    let pending = PendingRequest {
        kind: kind.clone(),
        payee: payee.clone(),
        requested_at: e.ledger().timestamp(),
    };
    e.storage().persistent().set(&key, &pending);
    e.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);

    let client = VerificationOracleClient::new(e, &oracle(e)?);
    match client.try_submit_request(&e.current_contract_address(), &request_id, &kind, payee) {
        Ok(Ok(())) => {}
        _ => return Err(ContractError::OracleRequestFailed),
    }

    emit_verification_requested(e, payee, request_id, &kind);
    Ok(request_id)
}

fn next_request_id(e: &Env) -> Result<u64, ContractError> {
    let last: u64 = e
        .storage()
        .instance()
        .get(&DataKey::RequestNonce)
        .unwrap_or(0);
    let next = inc_u64(last)?;
    e.storage().instance().set(&DataKey::RequestNonce, &next);
    Ok(next)
}

pub fn pending_request(e: &Env, request_id: u64) -> Option<PendingRequest> {
    e.storage()
        .persistent()
        .get(&DataKey::PendingRequest(request_id))
}

// ── Fulfillment ────────────────────────────────────────────────────────────

/// Oracle callback for a request issued by this contract.
pub fn fulfill(
    e: &Env,
    caller: &Address,
    request_id: u64,
    verdict: bool,
) -> Result<(), ContractError> {
    require_not_paused(e)?;
    require_oracle(e, caller)?;

    let key = DataKey::PendingRequest(request_id);
    let pending: PendingRequest = e
        .storage()
        .persistent()
        .get(&key)
        .ok_or(ContractError::UnknownRequest)?;
    e.storage().persistent().remove(&key);

    let balance = ledger::balance_of(e, &pending.payee);
    let covered = match pending.kind {
        RequestKind::PartialWithdraw(amount) => balance > 0 && amount <= balance,
        RequestKind::FullWithdraw | RequestKind::ExecuteDeposit => balance > 0,
    };
    if !covered {
        emit_request_voided(e, &pending.payee, request_id);
        return Ok(());
    }

    match pending.kind {
        RequestKind::FullWithdraw => settle_withdraw(e, &pending.payee, verdict),
        RequestKind::PartialWithdraw(amount) => {
            settle_partial_withdraw(e, &pending.payee, amount, verdict)
        }
        RequestKind::ExecuteDeposit => settle_execution(e, &pending.payee, verdict),
    }
}

pub fn withdraw_of(
    e: &Env,
    caller: &Address,
    payee: &Address,
    verdict: bool,
) -> Result<(), ContractError> {
    require_not_paused(e)?;
    require_oracle(e, caller)?;
    if ledger::balance_of(e, payee) == 0 {
        return Err(ContractError::InsufficientBalance);
    }
    settle_withdraw(e, payee, verdict)
}

pub fn partial_withdraw_of(
    e: &Env,
    caller: &Address,
    payee: &Address,
    amount: i128,
    verdict: bool,
) -> Result<(), ContractError> {
    require_not_paused(e)?;
    require_oracle(e, caller)?;
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    let balance = ledger::balance_of(e, payee);
    if balance == 0 || amount > balance {
        return Err(ContractError::InsufficientBalance);
    }
    settle_partial_withdraw(e, payee, amount, verdict)
}

pub fn execute_deposit_of(
    e: &Env,
    caller: &Address,
    payee: &Address,
    verdict: bool,
) -> Result<(), ContractError> {
    require_not_paused(e)?;
    require_oracle(e, caller)?;
    if ledger::balance_of(e, payee) == 0 {
        return Err(ContractError::InsufficientBalance);
    }
    settle_execution(e, payee, verdict)
}

// ── Settlement rules ───────────────────────────────────────────────────────
//
// Callers guarantee the payee's balance covers the operation.

fn settle_withdraw(e: &Env, payee: &Address, verdict: bool) -> Result<(), ContractError> {
    if !verdict {
        emit_withdraw_not_allowed(e, payee, ledger::balance_of(e, payee));
        return Ok(());
    }
    let amount = ledger::clear(e, payee);
    transfer_out(e, payee, amount)?;
    emit_withdraw_successful(e, payee, amount);
    Ok(())
}

fn settle_partial_withdraw(
    e: &Env,
    payee: &Address,
    amount: i128,
    verdict: bool,
) -> Result<(), ContractError> {
    if !verdict {
        emit_withdraw_not_allowed(e, payee, amount);
        return Ok(());
    }
    ledger::debit(e, payee, amount)?;
    transfer_out(e, payee, amount)?;
    emit_withdraw_successful(e, payee, amount);
    Ok(())
}

fn settle_execution(e: &Env, payee: &Address, verdict: bool) -> Result<(), ContractError> {
    if !verdict {
        emit_deposit_execution_not_allowed(e, payee, ledger::balance_of(e, payee));
        return Ok(());
    }
    let treasury = lender_treasury(e)?;
    let amount = ledger::clear(e, payee);
    transfer_out(e, &treasury, amount)?;
    emit_deposit_executed(e, payee, amount);
    Ok(())
}
