//! Overflow-safe arithmetic helpers for ledger and fee calculations.
//!
//! Every helper returns `ContractError::Overflow`/`Underflow` instead of
//! wrapping, so callers can propagate with `?`.

use xscrow_common::ContractError;

/// Checked `i128` addition.
#[inline]
pub fn add_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_add(b).ok_or(ContractError::Overflow)
}

/// Checked `i128` subtraction.
#[inline]
pub fn sub_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_sub(b).ok_or(ContractError::Underflow)
}

/// Checked `i128` multiplication.
#[inline]
pub fn mul_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_mul(b).ok_or(ContractError::Overflow)
}

/// Checked `u64` increment used for request ids.
#[inline]
pub fn inc_u64(a: u64) -> Result<u64, ContractError> {
    a.checked_add(1).ok_or(ContractError::Overflow)
}

/// `floor(amount * percent / 100)` for non-negative `amount`.
#[inline]
pub fn percent_of(amount: i128, percent: u32) -> Result<i128, ContractError> {
    Ok(mul_i128(amount, percent as i128)? / 100)
}
