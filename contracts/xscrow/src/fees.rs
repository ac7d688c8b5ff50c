//! Deposit fee policy.
//!
//! The fee is an integer percentage of the gross deposit, rounded down, and
//! is routed to the vendor treasury at deposit time.

use xscrow_common::ContractError;

use crate::math::{percent_of, sub_i128};

/// Largest accepted deposit fee, in percent.
pub const MAX_DEPOSIT_FEE_PERCENT: u32 = 100;

pub fn validate_fee(percent: u32) -> Result<(), ContractError> {
    if percent > MAX_DEPOSIT_FEE_PERCENT {
        return Err(ContractError::FeeOutOfBounds);
    }
    Ok(())
}

/// Split a gross deposit into `(fee, net)` where
/// `fee = floor(gross * percent / 100)` and `net = gross - fee`.
pub fn split_deposit(gross: i128, percent: u32) -> Result<(i128, i128), ContractError> {
    validate_fee(percent)?;
    let fee = percent_of(gross, percent)?;
    Ok((fee, sub_i128(gross, fee)?))
}
