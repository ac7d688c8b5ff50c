//! Cross-contract surface between the escrow and its trust oracle.
//!
//! The escrow submits a verification request through [`VerificationOracle`];
//! the oracle later answers through [`Settlement::fulfill`] with the same
//! request id and a boolean verdict.

use soroban_sdk::{contractclient, contracttype, Address, Env};

use crate::ContractError;

/// Operation an oracle verdict will settle.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RequestKind {
    /// Release the payee's whole balance back to the payee.
    FullWithdraw,
    /// Release a fixed amount, captured at request time, to the payee.
    PartialWithdraw(i128),
    /// Release the payee's whole balance to the lender treasury.
    ExecuteDeposit,
}

/// Implemented by the oracle contract.
#[contractclient(name = "VerificationOracleClient")]
pub trait VerificationOracle {
    /// Record a verification request issued by `requester` (the escrow).
    fn submit_request(
        env: Env,
        requester: Address,
        request_id: u64,
        kind: RequestKind,
        payee: Address,
    ) -> Result<(), ContractError>;
}

/// Implemented by the escrow contract. Every entry point is oracle-only.
#[contractclient(name = "SettlementClient")]
pub trait Settlement {
    /// Deliver the verdict for a previously submitted request.
    fn fulfill(env: Env, oracle: Address, request_id: u64, verdict: bool)
        -> Result<(), ContractError>;

    /// Settle a full withdrawal for `payee` without a prior request.
    fn withdraw_of(env: Env, oracle: Address, payee: Address, verdict: bool)
        -> Result<(), ContractError>;

    /// Settle a withdrawal of `amount` for `payee` without a prior request.
    fn partial_withdraw_of(
        env: Env,
        oracle: Address,
        payee: Address,
        amount: i128,
        verdict: bool,
    ) -> Result<(), ContractError>;

    /// Release `payee`'s escrow to the lender treasury without a prior
    /// request.
    fn execute_deposit_of(env: Env, oracle: Address, payee: Address, verdict: bool)
        -> Result<(), ContractError>;
}
