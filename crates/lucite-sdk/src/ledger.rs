/*!
# Ledger Abstraction

The token contract as seen by the minting pipeline: who owns a token id, and
how to mint one. Implementations translate their transport's conventions into
these types. In particular an unassigned token id is `Ok(None)` from
[`Ledger::owner_of`], never an error.
*/

use alloy_primitives::{Address, TxHash};
use async_trait::async_trait;
use thiserror::Error;

pub type LedgerResult<T> = Result<T, LedgerError>;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Mint rejected: {0}")]
    Rejected(String),

    #[error("Transaction {tx_hash} reverted")]
    Reverted { tx_hash: TxHash },

    #[error("Confirmation failed: {0}")]
    Confirmation(String),
}

/// Confirmed association of token id, recipient and token URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintReceipt {
    pub token_id: u64,
    pub recipient: Address,
    pub token_uri: String,
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
}

/// A submitted mint that has not been confirmed yet
#[async_trait]
pub trait PendingMint: Send {
    fn tx_hash(&self) -> TxHash;

    /// Wait until the ledger has confirmed the mint
    async fn confirm(self) -> LedgerResult<MintReceipt>;
}

/// ERC-721 ledger operations used by the pipeline
#[async_trait]
pub trait Ledger: Send + Sync {
    type Pending: PendingMint;

    /// Current holder of `token_id`, `None` when it has not been minted
    async fn owner_of(&self, token_id: u64) -> LedgerResult<Option<Address>>;

    /// `None` when the token has not been minted
    async fn token_uri(&self, token_id: u64) -> LedgerResult<Option<String>>;

    /// Submit a mint of `token_id` to `to`. Rejected when the caller is not
    /// the minter or the token id is already assigned.
    async fn safe_mint(
        &self,
        to: Address,
        token_id: u64,
        token_uri: &str,
    ) -> LedgerResult<Self::Pending>;
}
