//! Per-payee deposit records.
//!
//! ## Invariants
//! - A stored record always has `amount > 0` and
//!   `0 < created_at <= updated_at`. A zero balance is represented by the
//!   absence of a record, which reads back as [`DepositRecord::empty`].
//! - A payee is in the key set iff it has a stored record.

use soroban_sdk::{Address, Env};
use xscrow_common::ContractError;

use crate::key_set;
use crate::math::{add_i128, sub_i128};
use crate::types::{DataKey, DepositRecord};

const BUMP_THRESHOLD: u32 = 17_280;
const BUMP_TARGET: u32 = 518_400;

/// Returns the record for `payee`, or the zero record.
pub fn record(e: &Env, payee: &Address) -> DepositRecord {
    let key = DataKey::Warranty(payee.clone());
    let storage = e.storage().persistent();
    match storage.get::<_, DepositRecord>(&key) {
        Some(record) => {
            storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
            record
        }
        None => DepositRecord::empty(),
    }
}

pub fn balance_of(e: &Env, payee: &Address) -> i128 {
    record(e, payee).amount
}

/// Adds `net` to the payee's balance, creating the record on first credit.
pub fn credit(e: &Env, payee: &Address, net: i128) -> Result<DepositRecord, ContractError> {
    if net <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    let now = e.ledger().timestamp();
    let mut record = record(e, payee);
    if record.is_empty() {
        record.created_at = now;
        key_set::insert(e, payee);
    }
    record.amount = add_i128(record.amount, net)?;
    record.updated_at = now;
    save(e, payee, &record);
    Ok(record)
}

/// Removes `amount` from the payee's balance. Timestamps are kept unless the
/// balance reaches zero, in which case the record is cleared.
pub fn debit(e: &Env, payee: &Address, amount: i128) -> Result<DepositRecord, ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    let mut record = record(e, payee);
    if record.is_empty() || amount > record.amount {
        return Err(ContractError::InsufficientBalance);
    }
    record.amount = sub_i128(record.amount, amount)?;
    if record.is_empty() {
        clear(e, payee);
        return Ok(DepositRecord::empty());
    }
    save(e, payee, &record);
    Ok(record)
}

/// Zeroes the payee's record and returns the amount it held.
pub fn clear(e: &Env, payee: &Address) -> i128 {
    let amount = balance_of(e, payee);
    e.storage()
        .persistent()
        .remove(&DataKey::Warranty(payee.clone()));
    key_set::remove(e, payee);
    amount
}

fn save(e: &Env, payee: &Address, record: &DepositRecord) {
    let key = DataKey::Warranty(payee.clone());
    e.storage().persistent().set(&key, record);
    e.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}
