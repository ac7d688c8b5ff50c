use soroban_sdk::{Address, Env, String, Symbol};
use xscrow_common::RequestKind;

/// Emitted when value is credited to a payee.
///
/// # Topics
/// * `Symbol` - "deposit"
/// * `Address` - The payee credited
///
/// # Data
/// * `i128` - Net amount credited (after fee)
/// * `Address` - The sponsor who funded the deposit
pub fn emit_deposit(e: &Env, payee: &Address, net: i128, sponsor: &Address) {
    let topics = (Symbol::new(e, "deposit"), payee.clone());
    e.events().publish(topics, (net, sponsor.clone()));
}

/// Emitted when a payee's escrow is released to the lender treasury.
///
/// # Topics
/// * `Symbol` - "deposit_executed"
/// * `Address` - The payee whose balance was executed
///
/// # Data
/// * `i128` - Amount released
pub fn emit_deposit_executed(e: &Env, payee: &Address, amount: i128) {
    let topics = (Symbol::new(e, "deposit_executed"), payee.clone());
    e.events().publish(topics, amount);
}

/// Emitted when the oracle refuses a deposit execution.
///
/// # Topics
/// * `Symbol` - "deposit_execution_not_allowed"
/// * `Address` - The payee
///
/// # Data
/// * `i128` - Amount left in escrow
pub fn emit_deposit_execution_not_allowed(e: &Env, payee: &Address, amount: i128) {
    let topics = (
        Symbol::new(e, "deposit_execution_not_allowed"),
        payee.clone(),
    );
    e.events().publish(topics, amount);
}

/// Emitted when a full or partial withdrawal is paid out.
///
/// # Topics
/// * `Symbol` - "withdraw_successful"
/// * `Address` - The payee
///
/// # Data
/// * `i128` - Amount transferred to the payee
pub fn emit_withdraw_successful(e: &Env, payee: &Address, amount: i128) {
    let topics = (Symbol::new(e, "withdraw_successful"), payee.clone());
    e.events().publish(topics, amount);
}

/// Emitted when the oracle refuses a full or partial withdrawal.
///
/// # Topics
/// * `Symbol` - "withdraw_not_allowed"
/// * `Address` - The payee
///
/// # Data
/// * `i128` - Amount that was requested
pub fn emit_withdraw_not_allowed(e: &Env, payee: &Address, amount: i128) {
    let topics = (Symbol::new(e, "withdraw_not_allowed"), payee.clone());
    e.events().publish(topics, amount);
}

/// Emitted when a verification request is handed to the oracle.
///
/// # Topics
/// * `Symbol` - "verification_requested"
/// * `Address` - The payee
///
/// # Data
/// * `u64` - Request id
/// * `RequestKind` - Operation awaiting the verdict
pub fn emit_verification_requested(e: &Env, payee: &Address, request_id: u64, kind: &RequestKind) {
    let topics = (Symbol::new(e, "verification_requested"), payee.clone());
    e.events().publish(topics, (request_id, kind.clone()));
}

/// Emitted when a pending request is consumed without effect because the
/// payee's balance no longer covers it.
pub fn emit_request_voided(e: &Env, payee: &Address, request_id: u64) {
    let topics = (Symbol::new(e, "request_voided"), payee.clone());
    e.events().publish(topics, request_id);
}

pub fn emit_payee_migrated(e: &Env, payee: &Address, amount: i128, successor: &Address) {
    let topics = (Symbol::new(e, "payee_migrated"), payee.clone());
    e.events().publish(topics, (amount, successor.clone()));
}

/// Emitted once by `migrate_all`.
///
/// # Data
/// * `Address` - The successor contract
/// * `i128` - Custodial balance moved
pub fn emit_xscrow_migrated(e: &Env, successor: &Address, amount: i128) {
    e.events().publish(
        (Symbol::new(e, "xscrow_migrated"),),
        (successor.clone(), amount),
    );
}

pub fn emit_paused(e: &Env, owner: &Address) {
    e.events().publish((Symbol::new(e, "paused"),), owner.clone());
}

pub fn emit_unpaused(e: &Env, owner: &Address) {
    e.events().publish((Symbol::new(e, "unpaused"),), owner.clone());
}

pub fn emit_initialized(e: &Env, owner: &Address, identifier: &String) {
    e.events().publish(
        (Symbol::new(e, "initialized"), owner.clone()),
        identifier.clone(),
    );
}

pub fn emit_ownership_transferred(e: &Env, previous: &Address, owner: &Address) {
    e.events().publish(
        (Symbol::new(e, "ownership_transferred"),),
        (previous.clone(), owner.clone()),
    );
}

/// Emitted by every address setter; `name` is the configuration event name,
/// e.g. "oracle_updated".
pub fn emit_address_updated(e: &Env, name: &str, value: &Address) {
    e.events().publish((Symbol::new(e, name),), value.clone());
}

pub fn emit_deposit_fee_updated(e: &Env, percent: u32) {
    e.events()
        .publish((Symbol::new(e, "deposit_fee_updated"),), percent);
}

/// Emitted by the deposit bound setters with "min_deposit_updated" or
/// "max_deposit_updated".
pub fn emit_bound_updated(e: &Env, name: &str, amount: i128) {
    e.events().publish((Symbol::new(e, name),), amount);
}
