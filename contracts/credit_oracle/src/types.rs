use soroban_sdk::{contracttype, Address};
use xscrow_common::RequestKind;

// ─── Request state ─────────────────────────────────────────────────────────

/// A verification request waiting for the operator's verdict.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OracleRequest {
    /// Escrow that submitted the request and receives the verdict.
    pub escrow: Address,
    pub kind: RequestKind,
    pub payee: Address,
    /// Ledger timestamp at submission.
    pub requested_at: u64,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
pub enum DataKey {
    /// Oracle admin address.
    Admin,
    /// Address allowed to deliver verdicts.
    Operator,
    /// Escrow allowed to submit requests.
    Escrow,
    /// Endpoint queried for withdrawal verdicts.
    ApiUrl,
    /// Endpoint queried for deposit-execution verdicts.
    ExecutionApiUrl,
    /// Pending request by id.
    Request(u64),
}
