#![no_std]

pub mod errors;
pub mod oracle;

pub use errors::{ContractError, ErrorCategory, ErrorExt};
pub use oracle::{
    RequestKind, Settlement, SettlementClient, VerificationOracle, VerificationOracleClient,
};
