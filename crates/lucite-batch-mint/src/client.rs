use crate::{BatchMintConfig, BatchMintError, BatchMintResult};
use alloy_primitives::Address;
use lucite_csvs::InvestorRecord;
use lucite_sdk::{
    Ledger, LuciteMetadata, MetadataTemplate, MintReceipt, PendingMint, PinOptions, Pinner,
};
use tracing::{info, warn};

/// What happened to a single record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Token already had an owner; nothing was submitted
    Skipped { token_id: u64, owner: Address },
    /// Token was minted and confirmed during this run
    Minted(MintReceipt),
    /// Dry run: token is unassigned and this document would be pinned
    Planned { metadata: LuciteMetadata },
}

impl RecordOutcome {
    pub fn token_id(&self) -> u64 {
        match self {
            Self::Skipped { token_id, .. } => *token_id,
            Self::Minted(receipt) => receipt.token_id,
            Self::Planned { metadata } => metadata.token_id,
        }
    }
}

/// Outcomes of a completed run, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchMintSummary {
    pub outcomes: Vec<RecordOutcome>,
}

impl BatchMintSummary {
    pub fn minted_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RecordOutcome::Minted(_)))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RecordOutcome::Skipped { .. }))
            .count()
    }

    pub fn planned_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RecordOutcome::Planned { .. }))
            .count()
    }
}

/// Mints one token per investor record, strictly one record at a time.
///
/// Each record goes through ownership check, metadata generation, pinning,
/// mint submission and confirmation before the next record starts. There is
/// no local progress log: a record whose token already has an owner is
/// skipped, so re-running the same input after a failure picks up where the
/// previous run stopped.
pub struct BatchMintClient<L, P> {
    ledger: L,
    pinner: P,
    template: MetadataTemplate,
    config: BatchMintConfig,
}

impl<L, P> BatchMintClient<L, P>
where
    L: Ledger,
    P: Pinner,
{
    /// Create a new client with the default template and configuration
    pub fn new(ledger: L, pinner: P) -> Self {
        Self {
            ledger,
            pinner,
            template: MetadataTemplate::default(),
            config: BatchMintConfig::default(),
        }
    }

    /// Create a new client with a custom template and configuration
    pub fn with_config(
        ledger: L,
        pinner: P,
        template: MetadataTemplate,
        config: BatchMintConfig,
    ) -> Self {
        Self {
            ledger,
            pinner,
            template,
            config,
        }
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn pinner(&self) -> &P {
        &self.pinner
    }

    /// Mint every record in order, stopping at the first failure. An empty
    /// slice yields an empty summary.
    pub async fn mint_all(&self, records: &[InvestorRecord]) -> BatchMintResult<BatchMintSummary> {
        let mut summary = BatchMintSummary::default();

        for (idx, record) in records.iter().enumerate() {
            info!(
                "Processing investor {} of {} (token {})",
                idx + 1,
                records.len(),
                record.token_id
            );
            let outcome = self.mint_record(record).await?;
            summary.outcomes.push(outcome);
        }

        info!(
            "Batch complete: {} minted, {} skipped, {} planned",
            summary.minted_count(),
            summary.skipped_count(),
            summary.planned_count()
        );
        Ok(summary)
    }

    /// Run the full pipeline for a single record
    pub async fn mint_record(&self, record: &InvestorRecord) -> BatchMintResult<RecordOutcome> {
        let token_id = record.token_id;

        // 1. Existence check
        let owner = self
            .ledger
            .owner_of(token_id)
            .await
            .map_err(|source| BatchMintError::OwnershipQuery { token_id, source })?;

        if let Some(owner) = owner {
            warn!(
                "Lucite token {} already assigned to {}. Skipping to next investor.",
                token_id, owner
            );
            return Ok(RecordOutcome::Skipped { token_id, owner });
        }
        info!("Lucite token {} not yet assigned. Continuing...", token_id);

        // 2. Metadata generation
        let metadata = self.template.generate(record);
        info!("Lucite token {} metadata generated", token_id);

        if self.config.dry_run {
            info!("Dry run: token {} would be minted to {}", token_id, record.address);
            return Ok(RecordOutcome::Planned { metadata });
        }

        // 3. Pinning
        let options = PinOptions::for_token(&self.config.pin_name_prefix, token_id);
        let pinned = self
            .pinner
            .pin_json(&metadata, &options)
            .await
            .map_err(|source| BatchMintError::PinningFailed { token_id, source })?;
        info!(
            "Lucite token {} metadata pinned as {}",
            token_id, pinned.ipfs_hash
        );

        // 4. Mint submission
        let token_uri = self.config.token_uri_gateway.url_for(&pinned.ipfs_hash);
        let pending = self
            .ledger
            .safe_mint(record.address, token_id, &token_uri)
            .await
            .map_err(|source| BatchMintError::MintRejected { token_id, source })?;

        let tx_hash = pending.tx_hash();
        info!(
            "Lucite token {} minted in {}. Waiting for block confirmation...",
            token_id, tx_hash
        );

        // 5. Confirmation wait
        let receipt = pending
            .confirm()
            .await
            .map_err(|source| BatchMintError::ConfirmationFailed {
                token_id,
                tx_hash,
                source,
            })?;
        info!(
            "Lucite token {} delivered to {}!",
            token_id, receipt.recipient
        );

        Ok(RecordOutcome::Minted(receipt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::TxHash;

    fn receipt(token_id: u64) -> MintReceipt {
        MintReceipt {
            token_id,
            recipient: Address::ZERO,
            token_uri: format!("https://ipfs.io/ipfs/cid{}", token_id),
            tx_hash: TxHash::ZERO,
            block_number: Some(1),
        }
    }

    #[test]
    fn test_summary_counts() {
        let summary = BatchMintSummary {
            outcomes: vec![
                RecordOutcome::Skipped {
                    token_id: 1,
                    owner: Address::ZERO,
                },
                RecordOutcome::Minted(receipt(2)),
                RecordOutcome::Minted(receipt(3)),
            ],
        };

        assert_eq!(summary.minted_count(), 2);
        assert_eq!(summary.skipped_count(), 1);
        assert_eq!(summary.planned_count(), 0);
        assert_eq!(
            summary
                .outcomes
                .iter()
                .map(RecordOutcome::token_id)
                .collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }
}
