/*!
# Lucite Token Client Implementation

[`Ledger`] implementation over EVM JSON-RPC for the Guild Lucite ERC-721
contract.
*/

use crate::errors::{ClientError, ClientResult};
use alloy::{
    network::{Ethereum, EthereumWallet, ReceiptResponse},
    primitives::{Address, TxHash, U256},
    providers::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    sol,
};
use async_trait::async_trait;
use lucite_sdk::{Ledger, LedgerError, LedgerResult, MintReceipt, PendingMint};
use std::time::Duration;
use tracing::debug;
use url::Url;

sol! {
    #[sol(rpc)]
    interface IGuildLuciteToken {
        function ownerOf(uint256 tokenId) external view returns (address);
        function tokenURI(uint256 tokenId) external view returns (string memory);
        function safeMint(address to, uint256 tokenId, string memory uri) external;
    }
}

/// JSON-RPC error code nodes use for `execution reverted`
const EXECUTION_REVERTED_CODE: i64 = 3;

/// How long and how deep to wait for a mint to land
#[derive(Debug, Clone)]
pub struct ConfirmationConfig {
    pub required_confirmations: u64,
    /// `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for ConfirmationConfig {
    fn default() -> Self {
        Self {
            required_confirmations: 1,
            timeout: None,
        }
    }
}

/// Client for a deployed Guild Lucite contract
pub struct LuciteClient {
    contract: IGuildLuciteToken::IGuildLuciteTokenInstance<DynProvider>,
    minter: Option<Address>,
    confirmation: ConfirmationConfig,
}

impl LuciteClient {
    /// Read-only client, enough for ownership and token URI queries
    pub fn read_only(rpc_url: &str, contract: Address) -> ClientResult<Self> {
        let provider = ProviderBuilder::new()
            .connect_http(parse_rpc_url(rpc_url)?)
            .erased();

        Ok(Self {
            contract: IGuildLuciteToken::new(contract, provider),
            minter: None,
            confirmation: ConfirmationConfig::default(),
        })
    }

    /// Client that signs mints with `private_key` (hex, with or without `0x`)
    pub fn with_signer(rpc_url: &str, contract: Address, private_key: &str) -> ClientResult<Self> {
        let signer: PrivateKeySigner = private_key
            .trim()
            .parse()
            .map_err(|e| ClientError::InvalidConfig(format!("Invalid private key: {}", e)))?;
        let minter = signer.address();

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_http(parse_rpc_url(rpc_url)?)
            .erased();

        Ok(Self {
            contract: IGuildLuciteToken::new(contract, provider),
            minter: Some(minter),
            confirmation: ConfirmationConfig::default(),
        })
    }

    pub fn with_confirmation(mut self, confirmation: ConfirmationConfig) -> Self {
        self.confirmation = confirmation;
        self
    }

    pub fn contract_address(&self) -> Address {
        *self.contract.address()
    }

    /// Account that signs mint transactions, if any
    pub fn minter(&self) -> Option<Address> {
        self.minter
    }

    /// Chain id reported by the node; doubles as a connectivity check
    pub async fn chain_id(&self) -> ClientResult<u64> {
        self.contract
            .provider()
            .get_chain_id()
            .await
            .map_err(|e| ClientError::Rpc(e.to_string()))
    }
}

fn parse_rpc_url(rpc_url: &str) -> ClientResult<Url> {
    rpc_url
        .parse()
        .map_err(|e| ClientError::InvalidConfig(format!("Invalid RPC URL '{}': {}", rpc_url, e)))
}

/// `ownerOf`/`tokenURI` revert for unminted ids. Anything else is a real failure.
fn is_revert(error: &alloy::contract::Error) -> bool {
    match error {
        alloy::contract::Error::TransportError(e) => e
            .as_error_resp()
            .is_some_and(|payload| is_revert_payload(payload.code, &payload.message)),
        _ => false,
    }
}

fn is_revert_payload(code: i64, message: &str) -> bool {
    code == EXECUTION_REVERTED_CODE || message.to_lowercase().contains("revert")
}

#[async_trait]
impl Ledger for LuciteClient {
    type Pending = PendingLuciteMint;

    async fn owner_of(&self, token_id: u64) -> LedgerResult<Option<Address>> {
        match self.contract.ownerOf(U256::from(token_id)).call().await {
            Ok(owner) if owner.is_zero() => Ok(None),
            Ok(owner) => Ok(Some(owner)),
            Err(e) if is_revert(&e) => {
                debug!("ownerOf({}) reverted: {}", token_id, e);
                Ok(None)
            }
            Err(e) => Err(LedgerError::Rpc(e.to_string())),
        }
    }

    async fn token_uri(&self, token_id: u64) -> LedgerResult<Option<String>> {
        match self.contract.tokenURI(U256::from(token_id)).call().await {
            Ok(uri) => Ok(Some(uri)),
            Err(e) if is_revert(&e) => Ok(None),
            Err(e) => Err(LedgerError::Rpc(e.to_string())),
        }
    }

    async fn safe_mint(
        &self,
        to: Address,
        token_id: u64,
        token_uri: &str,
    ) -> LedgerResult<PendingLuciteMint> {
        if self.minter.is_none() {
            return Err(LedgerError::Rejected(
                ClientError::MissingSigner.to_string(),
            ));
        }

        let pending = self
            .contract
            .safeMint(to, U256::from(token_id), token_uri.to_string())
            .send()
            .await
            .map_err(|e| LedgerError::Rejected(e.to_string()))?
            .with_required_confirmations(self.confirmation.required_confirmations)
            .with_timeout(self.confirmation.timeout);

        Ok(PendingLuciteMint {
            inner: pending,
            token_id,
            recipient: to,
            token_uri: token_uri.to_string(),
        })
    }
}

/// A submitted `safeMint` transaction
pub struct PendingLuciteMint {
    inner: PendingTransactionBuilder<Ethereum>,
    token_id: u64,
    recipient: Address,
    token_uri: String,
}

#[async_trait]
impl PendingMint for PendingLuciteMint {
    fn tx_hash(&self) -> TxHash {
        *self.inner.tx_hash()
    }

    async fn confirm(self) -> LedgerResult<MintReceipt> {
        let receipt = self
            .inner
            .get_receipt()
            .await
            .map_err(|e| LedgerError::Confirmation(e.to_string()))?;

        if !receipt.status() {
            return Err(LedgerError::Reverted {
                tx_hash: receipt.transaction_hash,
            });
        }

        Ok(MintReceipt {
            token_id: self.token_id,
            recipient: self.recipient,
            token_uri: self.token_uri,
            tx_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // First default hardhat/anvil account
    const TEST_PRIVATE_KEY: &str =
        "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const TEST_MINTER: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    fn contract() -> Address {
        "0x5FbDB2315678afecb367f032d93F642f64180aa3".parse().unwrap()
    }

    #[test]
    fn test_signer_derives_minter_address() {
        let client =
            LuciteClient::with_signer("http://localhost:8545", contract(), TEST_PRIVATE_KEY)
                .unwrap();

        assert_eq!(client.minter(), Some(TEST_MINTER.parse().unwrap()));
        assert_eq!(client.contract_address(), contract());
    }

    #[test]
    fn test_invalid_private_key_is_rejected() {
        let result = LuciteClient::with_signer("http://localhost:8545", contract(), "not-a-key");
        assert!(matches!(result, Err(ClientError::InvalidConfig(_))));
    }

    #[test]
    fn test_invalid_rpc_url_is_rejected() {
        let result = LuciteClient::read_only("not a url", contract());
        assert!(matches!(result, Err(ClientError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn test_read_only_client_cannot_mint() {
        let client = LuciteClient::read_only("http://localhost:8545", contract()).unwrap();
        assert_eq!(client.minter(), None);

        let result = client
            .safe_mint(contract(), 1, "https://ipfs.io/ipfs/bafk")
            .await;
        assert!(matches!(result, Err(LedgerError::Rejected(_))));
    }

    #[test]
    fn test_revert_payload_detection() {
        assert!(is_revert_payload(3, "execution reverted"));
        assert!(is_revert_payload(
            -32603,
            "Error: VM Exception while processing transaction: reverted with reason string 'ERC721: invalid token ID'"
        ));
        assert!(!is_revert_payload(-32000, "header not found"));
    }
}
