use async_trait::async_trait;
use lucite_sdk::{LuciteMetadata, PinError, PinOptions, PinResult, PinnedContent, Pinner};
use std::collections::HashSet;
use std::sync::Mutex;

/// Pinner that hands back a CID derived from the token id and remembers what
/// it was asked to pin.
#[derive(Debug, Default)]
pub struct StaticPinner {
    pinned: Mutex<Vec<(PinOptions, LuciteMetadata)>>,
    failing: Mutex<HashSet<u64>>,
}

impl StaticPinner {
    pub fn new() -> Self {
        Self::default()
    }

    /// CID returned for `token_id`
    pub fn cid_for(token_id: u64) -> String {
        format!("bafkreitestlucite{:08}", token_id)
    }

    /// Make pinning fail for this token id
    pub fn fail_for(&self, token_id: u64) {
        self.failing.lock().expect("pinner poisoned").insert(token_id);
    }

    pub fn heal(&self) {
        self.failing.lock().expect("pinner poisoned").clear();
    }

    /// Every successful pin, in order
    pub fn pinned(&self) -> Vec<(PinOptions, LuciteMetadata)> {
        self.pinned.lock().expect("pinner poisoned").clone()
    }
}

#[async_trait]
impl Pinner for StaticPinner {
    async fn pin_json(
        &self,
        document: &LuciteMetadata,
        options: &PinOptions,
    ) -> PinResult<PinnedContent> {
        if self
            .failing
            .lock()
            .expect("pinner poisoned")
            .contains(&document.token_id)
        {
            return Err(PinError::Api {
                status: 500,
                body: "pinning service unavailable".to_string(),
            });
        }

        self.pinned
            .lock()
            .expect("pinner poisoned")
            .push((options.clone(), document.clone()));

        Ok(PinnedContent {
            ipfs_hash: Self::cid_for(document.token_id),
            pin_size: Some(1024),
            timestamp: None,
        })
    }
}
