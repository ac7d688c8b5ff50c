//! Pause-gated transfer of residual escrow to the successor contract.

use soroban_sdk::{Address, Env};
use xscrow_common::ContractError;

use crate::access::require_owner;
use crate::config::{migrated, successor};
use crate::custody::{balance, transfer_out};
use crate::events::{emit_payee_migrated, emit_xscrow_migrated};
use crate::key_set;
use crate::ledger;
use crate::pausable::require_paused;
use crate::types::DataKey;

fn require_migration_target(e: &Env, owner: &Address) -> Result<Address, ContractError> {
    require_owner(e, owner)?;
    require_paused(e)?;
    successor(e).ok_or(ContractError::ZeroAddress)
}

/// Moves one payee's balance to the successor. Zero balance is a no-op.
pub fn migrate(e: &Env, owner: &Address, payee: &Address) -> Result<i128, ContractError> {
    let target = require_migration_target(e, owner)?;

    let amount = ledger::clear(e, payee);
    if amount == 0 {
        return Ok(0);
    }
    transfer_out(e, &target, amount)?;
    emit_payee_migrated(e, payee, amount, &target);
    Ok(amount)
}

/// Zeroes every record, moves the whole custodial balance to the successor
/// in one transfer and sets the terminal `migrated` flag. Once migrated,
/// further calls return `Ok(0)` without effect.
///
/// The flag does not block deposits after an `unpause`. Balances credited
/// after the sweep are moved with `migrate`, one payee at a time.
pub fn migrate_all(e: &Env, owner: &Address) -> Result<i128, ContractError> {
    let target = require_migration_target(e, owner)?;
    if migrated(e) {
        return Ok(0);
    }

    for payee in key_set::snapshot(e).iter() {
        ledger::clear(e, &payee);
    }

    let amount = balance(e)?;
    transfer_out(e, &target, amount)?;

    e.storage().instance().set(&DataKey::Migrated, &true);
    emit_xscrow_migrated(e, &target, amount);
    Ok(amount)
}
