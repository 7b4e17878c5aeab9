use alloy_primitives::TxHash;
use lucite_sdk::{LedgerError, PinError};
use thiserror::Error;

pub type BatchMintResult<T> = Result<T, BatchMintError>;

/// Errors that halt a batch mint run.
///
/// Tokens minted before the failing record stay minted; re-running the same
/// input resumes at the failing record.
#[derive(Error, Debug)]
pub enum BatchMintError {
    #[error("Ownership check for token {token_id} failed: {source}")]
    OwnershipQuery { token_id: u64, source: LedgerError },

    #[error("Pinning metadata for token {token_id} failed: {source}")]
    PinningFailed { token_id: u64, source: PinError },

    #[error("Mint of token {token_id} rejected: {source}")]
    MintRejected { token_id: u64, source: LedgerError },

    #[error("Mint of token {token_id} ({tx_hash}) was not confirmed: {source}")]
    ConfirmationFailed {
        token_id: u64,
        tx_hash: TxHash,
        source: LedgerError,
    },
}

impl BatchMintError {
    /// Token id of the record the run stopped at
    pub fn token_id(&self) -> u64 {
        match self {
            Self::OwnershipQuery { token_id, .. }
            | Self::PinningFailed { token_id, .. }
            | Self::MintRejected { token_id, .. }
            | Self::ConfirmationFailed { token_id, .. } => *token_id,
        }
    }
}
