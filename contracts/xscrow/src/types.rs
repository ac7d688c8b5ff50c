use soroban_sdk::{contracttype, Address};
use xscrow_common::RequestKind;

// ─── Ledger state ──────────────────────────────────────────────────────────

/// Escrowed balance held for one payee (the "warranty").
///
/// A payee without a stored record reads as the zero record: `amount == 0`
/// and both timestamps at the `0` sentinel.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositRecord {
    /// Net escrowed amount (after the deposit fee).
    pub amount: i128,
    /// Ledger timestamp of the first deposit into this record.
    pub created_at: u64,
    /// Ledger timestamp of the most recent deposit into this record.
    pub updated_at: u64,
}

impl DepositRecord {
    pub fn empty() -> Self {
        DepositRecord {
            amount: 0,
            created_at: 0,
            updated_at: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.amount == 0
    }
}

// ─── Oracle correlation ────────────────────────────────────────────────────

/// A verification request waiting for its oracle verdict.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingRequest {
    pub kind: RequestKind,
    pub payee: Address,
    pub requested_at: u64,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Contract owner address.
    Owner,
    /// Settled asset (token contract) address.
    Token,
    /// Deployment label.
    Identifier,
    /// Address allowed to deliver verdicts.
    Oracle,
    /// Receiver of executed deposits.
    LenderTreasury,
    /// Receiver of deposit fees.
    VendorTreasury,
    /// Deposit fee, integer percent 0-100.
    DepositFee,
    /// Inclusive lower bound of a single deposit.
    MinimumDeposit,
    /// Inclusive upper bound of a single deposit.
    MaximumDeposit,
    /// Migration target.
    Successor,
    Paused,
    /// Set once by `migrate_all`, never cleared.
    Migrated,
    /// Last issued request id.
    RequestNonce,
    /// Per-payee deposit record. Stored in `persistent()`.
    Warranty(Address),
    /// Request id -> PendingRequest. Stored in `persistent()`.
    PendingRequest(u64),
    /// Number of payees with a non-zero balance.
    PayeeCount,
    /// Dense slot -> payee. Stored in `persistent()`.
    PayeeAt(u32),
    /// Payee -> dense slot. Stored in `persistent()`.
    PayeeSlot(Address),
}
