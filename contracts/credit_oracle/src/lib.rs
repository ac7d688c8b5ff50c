//! Credit Oracle Contract
//!
//! Trust oracle collaborator for the Xscrow escrow. The escrow submits a
//! verification request per withdrawal or deposit execution; an off-chain
//! operator watches the `verification_requested` events, queries the API
//! URL carried in the event, and answers with `fulfill_request`. The verdict
//! is forwarded to the escrow's `fulfill` entry point.
//!
//! The operator can also settle a payee directly, without a prior request,
//! through the `settle_*_of` relays. They call the escrow's `*_of` entry
//! points with this contract as the authorizing oracle.
//!
//! ## Key design decisions
//!
//! - **Single escrow**: only the configured escrow may submit requests.
//! - **Single-use ids**: a request is removed when its verdict is delivered.
//! - **All-or-nothing**: if the escrow rejects the verdict, the whole call
//!   fails and the request stays pending.

#![no_std]

mod types;

pub use types::{DataKey, OracleRequest};

use soroban_sdk::{contract, contractimpl, Address, Env, String, Symbol};
use xscrow_common::{ContractError, RequestKind, SettlementClient, VerificationOracle};

#[cfg(test)]
mod test_helpers;


const BUMP_THRESHOLD: u32 = 17_280;
const BUMP_TARGET: u32 = 518_400;

// ─── Helpers ───────────────────────────────────────────────────────────────

fn require_admin(e: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    let stored: Address = e
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(ContractError::NotInitialized)?;
    if stored != *caller {
        return Err(ContractError::NotOwner);
    }
    Ok(())
}

fn require_operator(e: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    let stored: Address = e
        .storage()
        .instance()
        .get(&DataKey::Operator)
        .ok_or(ContractError::NotInitialized)?;
    if stored != *caller {
        return Err(ContractError::NotOperator);
    }
    Ok(())
}

/// The contract's own address stands in for the null address.
fn require_non_null(e: &Env, address: &Address) -> Result<(), ContractError> {
    if *address == e.current_contract_address() {
        return Err(ContractError::ZeroAddress);
    }
    Ok(())
}

/// Flattens a `try_` call into the escrow. Contract errors pass through.
fn settled<A, B>(
    result: Result<Result<(), A>, Result<ContractError, B>>,
) -> Result<(), ContractError> {
    match result {
        Ok(Ok(())) => Ok(()),
        Err(Ok(err)) => Err(err),
        _ => Err(ContractError::SettlementFailed),
    }
}

/// Forward a direct verdict for `payee` to the registered escrow.
fn relay(
    e: &Env,
    operator: &Address,
    kind: RequestKind,
    payee: &Address,
    verdict: bool,
) -> Result<(), ContractError> {
    require_operator(e, operator)?;
    let escrow_id: Address = e
        .storage()
        .instance()
        .get(&DataKey::Escrow)
        .ok_or(ContractError::NotEscrow)?;

    let escrow = SettlementClient::new(e, &escrow_id);
    let oracle = e.current_contract_address();
    let result = match &kind {
        RequestKind::FullWithdraw => escrow.try_withdraw_of(&oracle, payee, &verdict),
        RequestKind::PartialWithdraw(amount) => {
            escrow.try_partial_withdraw_of(&oracle, payee, amount, &verdict)
        }
        RequestKind::ExecuteDeposit => escrow.try_execute_deposit_of(&oracle, payee, &verdict),
    };
    settled(result)?;

    e.events().publish(
        (Symbol::new(e, "verdict_relayed"), payee.clone()),
        (kind, verdict),
    );
    Ok(())
}

fn get_string(e: &Env, key: &DataKey) -> Result<String, ContractError> {
    e.storage()
        .instance()
        .get(key)
        .ok_or(ContractError::NotInitialized)
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct CreditOracle;

#[contractimpl]
impl CreditOracle {
    // ── Admin setup ────────────────────────────────────────────────────────

    /// One-time initialization.
    pub fn initialize(
        e: Env,
        admin: Address,
        operator: Address,
        api_url: String,
        execution_api_url: String,
    ) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Admin) {
            return Err(ContractError::AlreadyInitialized);
        }
        require_non_null(&e, &admin)?;
        require_non_null(&e, &operator)?;
        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::Operator, &operator);
        e.storage().instance().set(&DataKey::ApiUrl, &api_url);
        e.storage()
            .instance()
            .set(&DataKey::ExecutionApiUrl, &execution_api_url);
        Ok(())
    }

    /// Register the escrow allowed to submit requests.
    pub fn update_escrow(e: Env, admin: Address, escrow: Address) -> Result<(), ContractError> {
        require_admin(&e, &admin)?;
        require_non_null(&e, &escrow)?;
        e.storage().instance().set(&DataKey::Escrow, &escrow);
        e.events()
            .publish((Symbol::new(&e, "escrow_updated"),), escrow);
        Ok(())
    }

    pub fn update_operator(e: Env, admin: Address, operator: Address) -> Result<(), ContractError> {
        require_admin(&e, &admin)?;
        require_non_null(&e, &operator)?;
        e.storage().instance().set(&DataKey::Operator, &operator);
        e.events()
            .publish((Symbol::new(&e, "operator_updated"),), operator);
        Ok(())
    }

    pub fn update_api_url(e: Env, admin: Address, api_url: String) -> Result<(), ContractError> {
        require_admin(&e, &admin)?;
        e.storage().instance().set(&DataKey::ApiUrl, &api_url);
        Ok(())
    }

    pub fn update_execution_api_url(
        e: Env,
        admin: Address,
        execution_api_url: String,
    ) -> Result<(), ContractError> {
        require_admin(&e, &admin)?;
        e.storage()
            .instance()
            .set(&DataKey::ExecutionApiUrl, &execution_api_url);
        Ok(())
    }

    // ── Verdicts ───────────────────────────────────────────────────────────

    /// Deliver the operator's verdict for `request_id` to the escrow that
    /// submitted it.
    pub fn fulfill_request(
        e: Env,
        operator: Address,
        request_id: u64,
        verdict: bool,
    ) -> Result<(), ContractError> {
        require_operator(&e, &operator)?;

        let key = DataKey::Request(request_id);
        let request: OracleRequest = e
            .storage()
            .persistent()
            .get(&key)
            .ok_or(ContractError::UnknownRequest)?;
        e.storage().persistent().remove(&key);

        let escrow = SettlementClient::new(&e, &request.escrow);
        settled(escrow.try_fulfill(&e.current_contract_address(), &request_id, &verdict))?;

        e.events()
            .publish((Symbol::new(&e, "request_fulfilled"), request_id), verdict);
        Ok(())
    }

    /// Settle a full withdrawal for `payee` on the registered escrow.
    pub fn settle_withdraw_of(
        e: Env,
        operator: Address,
        payee: Address,
        verdict: bool,
    ) -> Result<(), ContractError> {
        relay(&e, &operator, RequestKind::FullWithdraw, &payee, verdict)
    }

    /// Settle a withdrawal of `amount` for `payee` on the registered escrow.
    pub fn settle_partial_withdraw_of(
        e: Env,
        operator: Address,
        payee: Address,
        amount: i128,
        verdict: bool,
    ) -> Result<(), ContractError> {
        relay(
            &e,
            &operator,
            RequestKind::PartialWithdraw(amount),
            &payee,
            verdict,
        )
    }

    /// Release `payee`'s escrow to the lender treasury on the registered
    /// escrow.
    pub fn settle_execute_deposit_of(
        e: Env,
        operator: Address,
        payee: Address,
        verdict: bool,
    ) -> Result<(), ContractError> {
        relay(&e, &operator, RequestKind::ExecuteDeposit, &payee, verdict)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn admin(e: Env) -> Result<Address, ContractError> {
        e.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn operator(e: Env) -> Result<Address, ContractError> {
        e.storage()
            .instance()
            .get(&DataKey::Operator)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn escrow(e: Env) -> Option<Address> {
        e.storage().instance().get(&DataKey::Escrow)
    }

    pub fn api_url(e: Env) -> Result<String, ContractError> {
        get_string(&e, &DataKey::ApiUrl)
    }

    pub fn execution_api_url(e: Env) -> Result<String, ContractError> {
        get_string(&e, &DataKey::ExecutionApiUrl)
    }

    pub fn pending_request(e: Env, request_id: u64) -> Option<OracleRequest> {
        e.storage().persistent().get(&DataKey::Request(request_id))
    }
}

#[contractimpl]
impl VerificationOracle for CreditOracle {
    /// Record a request from the registered escrow and announce it to the
    /// operator together with the endpoint matching its kind.
    fn submit_request(
        env: Env,
        requester: Address,
        request_id: u64,
        kind: RequestKind,
        payee: Address,
    ) -> Result<(), ContractError> {
        requester.require_auth();
        let escrow: Address = env
            .storage()
            .instance()
            .get(&DataKey::Escrow)
            .ok_or(ContractError::NotEscrow)?;
        if escrow != requester {
            return Err(ContractError::NotEscrow);
        }

        let key = DataKey::Request(request_id);
        if env.storage().persistent().has(&key) {
            return Err(ContractError::OracleRequestFailed);
        }

        let url = match kind {
            RequestKind::ExecuteDeposit => get_string(&env, &DataKey::ExecutionApiUrl)?,
            RequestKind::FullWithdraw | RequestKind::PartialWithdraw(_) => {
                get_string(&env, &DataKey::ApiUrl)?
            }
        };

        let request = OracleRequest {
            escrow: escrow.clone(),
            kind: kind.clone(),
            payee: payee.clone(),
            requested_at: env.ledger().timestamp(),
        };
        env.storage().persistent().set(&key, &request);
        env.storage()
            .persistent()
            .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);

        env.events().publish(
            (Symbol::new(&env, "verification_requested"), request_id),
            (escrow, payee, kind, url),
        );
        Ok(())
    }
}
