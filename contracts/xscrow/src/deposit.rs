//! Deposit pipeline: validate, take custody, route the fee, credit the payee.

use soroban_sdk::{Address, Env};
use xscrow_common::ContractError;

use crate::config::{
    deposit_fee, maximum_deposit_amount, minimum_deposit_amount, vendor_treasury,
};
use crate::custody::{transfer_in, transfer_out};
use crate::events::emit_deposit;
use crate::fees::split_deposit;
use crate::ledger;
use crate::pausable::require_not_paused;

/// Rejects amounts outside `(0, ∞) ∩ [minimum, maximum]`.
pub fn validate_amount(e: &Env, gross: i128) -> Result<(), ContractError> {
    if gross <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    if gross < minimum_deposit_amount(e)? {
        return Err(ContractError::BelowMinimum);
    }
    if gross > maximum_deposit_amount(e)? {
        return Err(ContractError::AboveMaximum);
    }
    Ok(())
}

/// `sponsor` funds `gross`; `payee` is credited the net of the deposit fee.
/// Returns the net amount credited.
pub fn deposit_to(
    e: &Env,
    sponsor: &Address,
    payee: &Address,
    gross: i128,
) -> Result<i128, ContractError> {
    require_not_paused(e)?;
    sponsor.require_auth();
    validate_amount(e, gross)?;

    let (fee, net) = split_deposit(gross, deposit_fee(e)?)?;

    transfer_in(e, sponsor, gross)?;
    transfer_out(e, &vendor_treasury(e)?, fee)?;

    // A 100% fee leaves nothing to escrow; the record stays untouched.
    if net > 0 {
        ledger::credit(e, payee, net)?;
    }

    emit_deposit(e, payee, net, sponsor);
    Ok(net)
}
