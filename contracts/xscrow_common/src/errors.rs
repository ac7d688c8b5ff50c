use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups errors by domain for monitoring, alerting, and dashboards.
/// @dev    Off-chain consumers should switch on this value first, then on the
///         specific `ContractError` code for fine-grained handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup and initialization errors (codes 1-99).
    Initialization,
    /// Caller identity and permission errors (codes 100-199).
    Authorization,
    /// Pause state mismatches (codes 200-299).
    Lifecycle,
    /// Rejected input values (codes 300-399).
    Validation,
    /// Ledger balance preconditions (codes 400-499).
    Ledger,
    /// Oracle request/fulfill correlation errors (codes 500-599).
    Oracle,
    /// Asset custody failures (codes 600-699).
    Custody,
    /// Safe-math errors (codes 700-799).
    Arithmetic,
}

/// @title  ContractError
/// @notice Canonical error enum shared by the escrow and the credit oracle.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///
/// Error Code Layout:
///   1  -  99  : Initialization
///   100 - 199 : Authorization
///   200 - 299 : Lifecycle
///   300 - 399 : Validation
///   400 - 499 : Ledger
///   500 - 599 : Oracle
///   600 - 699 : Custody
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ContractError {
    // --- Initialization (1-99) ---
    /// Contract has not been initialized yet.
    NotInitialized = 1,

    /// Contract has already been initialized and cannot be re-initialized.
    AlreadyInitialized = 2,

    // --- Authorization (100-199) ---
    /// Caller is not the contract owner.
    NotOwner = 100,

    /// Caller is not the configured oracle.
    NotOracle = 101,

    /// Caller is not the oracle operator allowed to deliver verdicts.
    NotOperator = 102,

    /// Caller is not the escrow allowed to submit verification requests.
    NotEscrow = 103,

    // --- Lifecycle (200-299) ---
    /// Operation requires the Active state but the contract is paused.
    ContractPaused = 200,

    /// Operation requires the Paused state but the contract is active.
    NotPaused = 201,

    // --- Validation (300-399) ---
    /// Address is unset or refers to the escrow itself.
    ZeroAddress = 300,

    /// Deposit fee percentage is outside 0-100.
    FeeOutOfBounds = 301,

    /// Deposit is below the configured minimum.
    BelowMinimum = 302,

    /// Deposit is above the configured maximum.
    AboveMaximum = 303,

    /// Amount must be strictly positive.
    InvalidAmount = 304,

    // --- Ledger (400-499) ---
    /// Payee balance is zero or smaller than the requested amount.
    InsufficientBalance = 400,

    // --- Oracle (500-599) ---
    /// No pending verification request exists for the given id.
    UnknownRequest = 500,

    /// The oracle rejected or failed to record a verification request.
    OracleRequestFailed = 501,

    /// The escrow could not be reached while forwarding a verdict.
    SettlementFailed = 502,

    // --- Custody (600-699) ---
    /// A token transfer into or out of custody failed.
    TransferFailed = 600,

    // --- Arithmetic (700-799) ---
    /// Integer overflow detected during a checked arithmetic operation.
    Overflow = 700,

    /// Integer underflow detected during a checked arithmetic operation.
    Underflow = 701,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every ContractError variant.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for ContractError {
    fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized | ContractError::AlreadyInitialized => {
                ErrorCategory::Initialization
            }

            ContractError::NotOwner
            | ContractError::NotOracle
            | ContractError::NotOperator
            | ContractError::NotEscrow => ErrorCategory::Authorization,

            ContractError::ContractPaused | ContractError::NotPaused => ErrorCategory::Lifecycle,

            ContractError::ZeroAddress
            | ContractError::FeeOutOfBounds
            | ContractError::BelowMinimum
            | ContractError::AboveMaximum
            | ContractError::InvalidAmount => ErrorCategory::Validation,

            ContractError::InsufficientBalance => ErrorCategory::Ledger,

            ContractError::UnknownRequest
            | ContractError::OracleRequestFailed
            | ContractError::SettlementFailed => ErrorCategory::Oracle,

            ContractError::TransferFailed => ErrorCategory::Custody,

            ContractError::Overflow | ContractError::Underflow => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract has already been initialized",
            ContractError::NotOwner => "Caller is not the owner",
            ContractError::NotOracle => "Caller is not the oracle",
            ContractError::NotOperator => "Caller is not the oracle operator",
            ContractError::NotEscrow => "Caller is not the registered escrow",
            ContractError::ContractPaused => "Contract is paused",
            ContractError::NotPaused => "Contract is not paused",
            ContractError::ZeroAddress => "Address can not be zero",
            ContractError::FeeOutOfBounds => "Fee value out-of-bounds",
            ContractError::BelowMinimum => "Insufficient deposit amount",
            ContractError::AboveMaximum => "Exceeded maximum deposit amount",
            ContractError::InvalidAmount => "Amount must be > 0",
            ContractError::InsufficientBalance => "Not enough balance",
            ContractError::UnknownRequest => "No pending request for the given id",
            ContractError::OracleRequestFailed => "Oracle did not accept the verification request",
            ContractError::SettlementFailed => "Escrow did not accept the verdict",
            ContractError::TransferFailed => "Token transfer failed",
            ContractError::Overflow => "Integer overflow in checked arithmetic",
            ContractError::Underflow => "Integer underflow in checked arithmetic",
        }
    }
}
