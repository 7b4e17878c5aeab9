use alloy_primitives::{Address, TxHash};
use async_trait::async_trait;
use lucite_sdk::{Ledger, LedgerError, LedgerResult, MintReceipt, PendingMint};
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct LedgerState {
    /// token id -> (owner, token URI); only confirmed mints land here
    tokens: BTreeMap<u64, (Address, String)>,
    /// every `safe_mint` call that was accepted, in order
    mint_submissions: Vec<u64>,
    next_tx: u64,
    reject_mints: HashSet<u64>,
    fail_confirmations: HashSet<u64>,
    unreachable: bool,
}

/// Ledger that keeps ownership in memory.
///
/// Mirrors the contract rules the pipeline depends on: a minted token id
/// cannot be minted again, and ownership only changes once the mint is
/// confirmed. Failures can be injected per token id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    state: Arc<Mutex<LedgerState>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> std::sync::MutexGuard<'_, LedgerState> {
        self.state.lock().expect("ledger state poisoned")
    }

    /// Record a token as minted by an earlier run
    pub fn mark_minted(&self, token_id: u64, owner: Address, token_uri: &str) {
        self.state()
            .tokens
            .insert(token_id, (owner, token_uri.to_string()));
    }

    /// Make `safe_mint` reject this token id, as if the caller lost minting rights
    pub fn reject_mint_of(&self, token_id: u64) {
        self.state().reject_mints.insert(token_id);
    }

    /// Make the confirmation wait for this token id fail
    pub fn fail_confirmation_of(&self, token_id: u64) {
        self.state().fail_confirmations.insert(token_id);
    }

    /// Make every call fail as if the node were down
    pub fn set_unreachable(&self, unreachable: bool) {
        self.state().unreachable = unreachable;
    }

    /// Clear injected failures, keeping minted tokens
    pub fn heal(&self) {
        let mut state = self.state();
        state.reject_mints.clear();
        state.fail_confirmations.clear();
        state.unreachable = false;
    }

    /// Token ids of every accepted `safe_mint`, in submission order
    pub fn mint_submissions(&self) -> Vec<u64> {
        self.state().mint_submissions.clone()
    }

    pub fn owner(&self, token_id: u64) -> Option<Address> {
        self.state().tokens.get(&token_id).map(|(owner, _)| *owner)
    }

    pub fn uri(&self, token_id: u64) -> Option<String> {
        self.state().tokens.get(&token_id).map(|(_, uri)| uri.clone())
    }

    pub fn minted_count(&self) -> usize {
        self.state().tokens.len()
    }
}

#[async_trait]
impl Ledger for InMemoryLedger {
    type Pending = InMemoryPendingMint;

    async fn owner_of(&self, token_id: u64) -> LedgerResult<Option<Address>> {
        let state = self.state();
        if state.unreachable {
            return Err(LedgerError::Rpc("connection refused".to_string()));
        }
        Ok(state.tokens.get(&token_id).map(|(owner, _)| *owner))
    }

    async fn token_uri(&self, token_id: u64) -> LedgerResult<Option<String>> {
        let state = self.state();
        if state.unreachable {
            return Err(LedgerError::Rpc("connection refused".to_string()));
        }
        Ok(state.tokens.get(&token_id).map(|(_, uri)| uri.clone()))
    }

    async fn safe_mint(
        &self,
        to: Address,
        token_id: u64,
        token_uri: &str,
    ) -> LedgerResult<InMemoryPendingMint> {
        let mut state = self.state();
        if state.unreachable {
            return Err(LedgerError::Rpc("connection refused".to_string()));
        }
        if state.reject_mints.contains(&token_id) {
            return Err(LedgerError::Rejected(
                "Ownable: caller is not the owner".to_string(),
            ));
        }
        if state.tokens.contains_key(&token_id) {
            return Err(LedgerError::Rejected(
                "ERC721: token already minted".to_string(),
            ));
        }

        state.next_tx += 1;
        state.mint_submissions.push(token_id);

        Ok(InMemoryPendingMint {
            state: Arc::clone(&self.state),
            tx_hash: TxHash::left_padding_from(&state.next_tx.to_be_bytes()),
            token_id,
            recipient: to,
            token_uri: token_uri.to_string(),
        })
    }
}

/// Mint accepted by [`InMemoryLedger`], applied on confirmation
pub struct InMemoryPendingMint {
    state: Arc<Mutex<LedgerState>>,
    tx_hash: TxHash,
    token_id: u64,
    recipient: Address,
    token_uri: String,
}

#[async_trait]
impl PendingMint for InMemoryPendingMint {
    fn tx_hash(&self) -> TxHash {
        self.tx_hash
    }

    async fn confirm(self) -> LedgerResult<MintReceipt> {
        let mut state = self.state.lock().expect("ledger state poisoned");

        if state.fail_confirmations.contains(&self.token_id) {
            return Err(LedgerError::Confirmation("timeout".to_string()));
        }
        if state.tokens.contains_key(&self.token_id) {
            return Err(LedgerError::Reverted {
                tx_hash: self.tx_hash,
            });
        }

        state
            .tokens
            .insert(self.token_id, (self.recipient, self.token_uri.clone()));
        let block_number = state.tokens.len() as u64;

        Ok(MintReceipt {
            token_id: self.token_id,
            recipient: self.recipient,
            token_uri: self.token_uri,
            tx_hash: self.tx_hash,
            block_number: Some(block_number),
        })
    }
}
