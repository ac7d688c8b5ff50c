//! Xscrow Contract
//!
//! Holds deposited tokens on behalf of payees and releases them only after a
//! round trip through an external trust oracle.
//!
//! ## Flows
//!
//! - **Deposit**: a sponsor funds a payee's record; a percentage fee goes to
//!   the vendor treasury, the net amount stays in escrow.
//! - **Withdraw / partial withdraw**: the payee requests, the oracle answers
//!   with a verdict, the escrow pays the payee only on `true`.
//! - **Execute deposit**: the owner requests, and on a `true` verdict the
//!   payee's escrow is released to the lender treasury.
//! - **Migration**: while paused, the owner moves residual escrow to a
//!   successor contract, per payee or all at once.
//!
//! ## Key design decisions
//!
//! - **Single balance table**: a payee without a stored record has a zero
//!   balance and zero timestamps; records are deleted the moment they reach
//!   zero.
//! - **Errors roll back**: every entry point returns `Result`; an `Err`
//!   discards all storage writes and token movements of the call.
//! - **Checks-Effects-Interactions**: ledger updates precede outbound
//!   transfers.

#![no_std]

mod access;
mod config;
mod custody;
mod deposit;
mod events;
mod fees;
mod key_set;
mod ledger;
mod math;
mod migration;
mod pausable;
mod settlement;
pub mod types;

pub use types::{DataKey, DepositRecord, PendingRequest};
pub use xscrow_common::{ContractError, RequestKind};

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};
use xscrow_common::Settlement;


#[cfg(test)]
mod test_events;
#[cfg(test)]
mod test_migration;

#[contract]
pub struct Xscrow;

#[contractimpl]
impl Xscrow {
    // ── Setup ──────────────────────────────────────────────────────────────

    /// One-time initialization. The deposit fee starts at 0%.
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        e: Env,
        owner: Address,
        token: Address,
        lender_treasury: Address,
        vendor_treasury: Address,
        identifier: String,
        oracle: Address,
        minimum_deposit_amount: i128,
        maximum_deposit_amount: i128,
    ) -> Result<(), ContractError> {
        config::initialize(
            &e,
            config::InitParams {
                owner,
                token,
                lender_treasury,
                vendor_treasury,
                identifier,
                oracle,
                minimum_deposit_amount,
                maximum_deposit_amount,
            },
        )
    }

    // ── Deposits ───────────────────────────────────────────────────────────

    /// `payee` funds its own record. Returns the net amount credited.
    pub fn deposit(e: Env, payee: Address, amount: i128) -> Result<i128, ContractError> {
        deposit::deposit_to(&e, &payee, &payee, amount)
    }

    /// `sponsor` funds `payee`'s record. Returns the net amount credited.
    pub fn deposit_to(
        e: Env,
        sponsor: Address,
        payee: Address,
        amount: i128,
    ) -> Result<i128, ContractError> {
        deposit::deposit_to(&e, &sponsor, &payee, amount)
    }

    // ── Oracle-gated releases ──────────────────────────────────────────────

    /// Ask the oracle to approve withdrawing the caller's whole balance.
    /// Returns the request id.
    pub fn request_withdraw(e: Env, payee: Address) -> Result<u64, ContractError> {
        settlement::request_withdraw(&e, &payee)
    }

    /// Ask the oracle to approve withdrawing `amount`. The amount is fixed now
    /// and not re-read at fulfillment.
    pub fn request_partial_withdraw(
        e: Env,
        payee: Address,
        amount: i128,
    ) -> Result<u64, ContractError> {
        settlement::request_partial_withdraw(&e, &payee, amount)
    }

    /// Owner-only: ask the oracle to approve releasing `payee`'s escrow to the
    /// lender treasury.
    pub fn request_execute_deposit_of(
        e: Env,
        owner: Address,
        payee: Address,
    ) -> Result<u64, ContractError> {
        settlement::request_execute_deposit_of(&e, &owner, &payee)
    }

    // ── Lifecycle ──────────────────────────────────────────────────────────

    pub fn pause(e: Env, owner: Address) -> Result<(), ContractError> {
        pausable::pause(&e, &owner)
    }

    pub fn unpause(e: Env, owner: Address) -> Result<(), ContractError> {
        pausable::unpause(&e, &owner)
    }

    // ── Migration ──────────────────────────────────────────────────────────

    /// Move one payee's balance to the successor. Returns the amount moved.
    pub fn migrate(e: Env, owner: Address, payee: Address) -> Result<i128, ContractError> {
        migration::migrate(&e, &owner, &payee)
    }

    /// Move the whole custodial balance to the successor and mark the escrow
    /// migrated. Returns the amount moved.
    pub fn migrate_all(e: Env, owner: Address) -> Result<i128, ContractError> {
        migration::migrate_all(&e, &owner)
    }

    // ── Configuration ──────────────────────────────────────────────────────

    pub fn update_lender_treasury(
        e: Env,
        owner: Address,
        lender_treasury: Address,
    ) -> Result<(), ContractError> {
        config::update_lender_treasury(&e, &owner, &lender_treasury)
    }

    pub fn update_vendor_treasury(
        e: Env,
        owner: Address,
        vendor_treasury: Address,
    ) -> Result<(), ContractError> {
        config::update_vendor_treasury(&e, &owner, &vendor_treasury)
    }

    pub fn update_oracle(e: Env, owner: Address, oracle: Address) -> Result<(), ContractError> {
        config::update_oracle(&e, &owner, &oracle)
    }

    /// Deposit fee in whole percent, 0-100.
    pub fn update_deposit_fee(e: Env, owner: Address, percent: u32) -> Result<(), ContractError> {
        config::update_deposit_fee(&e, &owner, percent)
    }

    pub fn update_minimum_deposit_amount(
        e: Env,
        owner: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        config::update_minimum_deposit_amount(&e, &owner, amount)
    }

    pub fn update_maximum_deposit_amount(
        e: Env,
        owner: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        config::update_maximum_deposit_amount(&e, &owner, amount)
    }

    pub fn update_successor(
        e: Env,
        owner: Address,
        successor: Address,
    ) -> Result<(), ContractError> {
        config::update_successor(&e, &owner, &successor)
    }

    pub fn transfer_ownership(
        e: Env,
        owner: Address,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        config::transfer_ownership(&e, &owner, &new_owner)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn owner(e: Env) -> Result<Address, ContractError> {
        access::owner(&e)
    }

    pub fn token(e: Env) -> Result<Address, ContractError> {
        custody::token(&e)
    }

    pub fn identifier(e: Env) -> Result<String, ContractError> {
        config::identifier(&e)
    }

    pub fn oracle(e: Env) -> Result<Address, ContractError> {
        access::oracle(&e)
    }

    pub fn lender_treasury(e: Env) -> Result<Address, ContractError> {
        config::lender_treasury(&e)
    }

    pub fn vendor_treasury(e: Env) -> Result<Address, ContractError> {
        config::vendor_treasury(&e)
    }

    pub fn deposit_fee(e: Env) -> Result<u32, ContractError> {
        config::deposit_fee(&e)
    }

    pub fn minimum_deposit_amount(e: Env) -> Result<i128, ContractError> {
        config::minimum_deposit_amount(&e)
    }

    pub fn maximum_deposit_amount(e: Env) -> Result<i128, ContractError> {
        config::maximum_deposit_amount(&e)
    }

    pub fn successor(e: Env) -> Option<Address> {
        config::successor(&e)
    }

    pub fn paused(e: Env) -> bool {
        pausable::is_paused(&e)
    }

    pub fn migrated(e: Env) -> bool {
        config::migrated(&e)
    }

    pub fn balance_of(e: Env, payee: Address) -> i128 {
        ledger::balance_of(&e, &payee)
    }

    /// The payee's deposit record; the zero record if it holds nothing.
    pub fn warranty(e: Env, payee: Address) -> DepositRecord {
        ledger::record(&e, &payee)
    }

    pub fn pending_request(e: Env, request_id: u64) -> Option<PendingRequest> {
        settlement::pending_request(&e, request_id)
    }

    /// Payees currently holding a non-zero balance.
    pub fn payees(e: Env) -> Vec<Address> {
        key_set::snapshot(&e)
    }
}

#[contractimpl]
impl Settlement for Xscrow {
    /// Oracle callback: settle the pending request `request_id`.
    fn fulfill(
        env: Env,
        oracle: Address,
        request_id: u64,
        verdict: bool,
    ) -> Result<(), ContractError> {
        settlement::fulfill(&env, &oracle, request_id, verdict)
    }

    /// Oracle-driven full withdrawal without a prior request.
    fn withdraw_of(
        env: Env,
        oracle: Address,
        payee: Address,
        verdict: bool,
    ) -> Result<(), ContractError> {
        settlement::withdraw_of(&env, &oracle, &payee, verdict)
    }

    /// Oracle-driven partial withdrawal without a prior request.
    fn partial_withdraw_of(
        env: Env,
        oracle: Address,
        payee: Address,
        amount: i128,
        verdict: bool,
    ) -> Result<(), ContractError> {
        settlement::partial_withdraw_of(&env, &oracle, &payee, amount, verdict)
    }

    /// Oracle-driven deposit execution without a prior request.
    fn execute_deposit_of(
        env: Env,
        oracle: Address,
        payee: Address,
        verdict: bool,
    ) -> Result<(), ContractError> {
        settlement::execute_deposit_of(&env, &oracle, &payee, verdict)
    }
}
