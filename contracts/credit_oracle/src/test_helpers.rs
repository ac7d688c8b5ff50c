//! Shared test helpers for credit_oracle tests.

#![cfg(test)]

use crate::{CreditOracle, CreditOracleClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, String};
use xscrow_common::{ContractError, RequestKind, Settlement};

pub const API_URL: &str = "https://anurl.com";
pub const EXECUTION_API_URL: &str = "https://an-execution-url.com";

#[contracttype]
enum MockKey {
    Reject,
    Last,
    LastDirect,
}

fn record_direct(
    env: &Env,
    oracle: Address,
    kind: RequestKind,
    payee: Address,
    verdict: bool,
) -> Result<(), ContractError> {
    oracle.require_auth();
    if env.storage().instance().get(&MockKey::Reject).unwrap_or(false) {
        return Err(ContractError::ContractPaused);
    }
    env.storage()
        .instance()
        .set(&MockKey::LastDirect, &(oracle, kind, payee, verdict));
    Ok(())
}

/// Stand-in escrow that records the last verdict it received, per path.
#[contract]
pub struct MockEscrow;

#[contractimpl]
impl MockEscrow {
    pub fn set_reject(e: Env, reject: bool) {
        e.storage().instance().set(&MockKey::Reject, &reject);
    }

    pub fn last_verdict(e: Env) -> Option<(Address, u64, bool)> {
        e.storage().instance().get(&MockKey::Last)
    }

    pub fn last_direct(e: Env) -> Option<(Address, RequestKind, Address, bool)> {
        e.storage().instance().get(&MockKey::LastDirect)
    }
}

#[contractimpl]
impl Settlement for MockEscrow {
    fn fulfill(
        env: Env,
        oracle: Address,
        request_id: u64,
        verdict: bool,
    ) -> Result<(), ContractError> {
        oracle.require_auth();
        if env.storage().instance().get(&MockKey::Reject).unwrap_or(false) {
            return Err(ContractError::ContractPaused);
        }
        env.storage()
            .instance()
            .set(&MockKey::Last, &(oracle, request_id, verdict));
        Ok(())
    }

    fn withdraw_of(
        env: Env,
        oracle: Address,
        payee: Address,
        verdict: bool,
    ) -> Result<(), ContractError> {
        record_direct(&env, oracle, RequestKind::FullWithdraw, payee, verdict)
    }

    fn partial_withdraw_of(
        env: Env,
        oracle: Address,
        payee: Address,
        amount: i128,
        verdict: bool,
    ) -> Result<(), ContractError> {
        record_direct(
            &env,
            oracle,
            RequestKind::PartialWithdraw(amount),
            payee,
            verdict,
        )
    }

    fn execute_deposit_of(
        env: Env,
        oracle: Address,
        payee: Address,
        verdict: bool,
    ) -> Result<(), ContractError> {
        record_direct(&env, oracle, RequestKind::ExecuteDeposit, payee, verdict)
    }
}

/// Deploys the oracle and a mock escrow registered with it.
/// Returns `(client, admin, operator, escrow_id, escrow_client)`.
pub fn setup(
    e: &Env,
) -> (
    CreditOracleClient<'_>,
    Address,
    Address,
    Address,
    MockEscrowClient<'_>,
) {
    e.mock_all_auths();

    let contract_id = e.register(CreditOracle, ());
    let client = CreditOracleClient::new(e, &contract_id);
    let admin = Address::generate(e);
    let operator = Address::generate(e);

    client.initialize(
        &admin,
        &operator,
        &String::from_str(e, API_URL),
        &String::from_str(e, EXECUTION_API_URL),
    );

    let escrow_id = e.register(MockEscrow, ());
    let escrow = MockEscrowClient::new(e, &escrow_id);
    client.update_escrow(&admin, &escrow_id);

    (client, admin, operator, escrow_id, escrow)
}
