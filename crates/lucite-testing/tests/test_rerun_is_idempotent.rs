use lucite_batch_mint::{BatchMintClient, RecordOutcome};
use lucite_testing::{
    address, capture_logs, generate_investors, test_investors, InMemoryLedger, StaticPinner,
    INVESTOR_1, INVESTOR_2,
};

/// Running the same input twice against the same ledger mints nothing the
/// second time; every record is skipped with its current owner.
#[tokio::test]
async fn test_rerun_is_idempotent() {
    let investors = test_investors();
    let ledger = InMemoryLedger::new();

    let first = BatchMintClient::new(ledger.clone(), StaticPinner::new());
    first.mint_all(&investors).await.unwrap();
    assert_eq!(ledger.mint_submissions(), vec![1, 2]);

    let (logs, _guard) = capture_logs();
    let second = BatchMintClient::new(ledger.clone(), StaticPinner::new());
    let summary = second.mint_all(&investors).await.unwrap();

    assert_eq!(summary.minted_count(), 0);
    assert_eq!(summary.skipped_count(), 2);
    assert_eq!(ledger.mint_submissions(), vec![1, 2]);
    assert!(second.pinner().pinned().is_empty());

    // Each skip is reported with the token id and its current owner
    assert!(logs.contains(&format!(
        "Lucite token 1 already assigned to {}. Skipping to next investor.",
        address(INVESTOR_1)
    )));
    assert!(logs.contains(&format!(
        "Lucite token 2 already assigned to {}",
        address(INVESTOR_2)
    )));
    assert!(!logs.contains("not yet assigned"));
}

/// Token 1 minted by an earlier run: the new run skips it, names it in the
/// outcome, and only mints token 2.
#[tokio::test]
async fn test_already_minted_token_is_skipped() {
    let ledger = InMemoryLedger::new();
    ledger.mark_minted(1, address(INVESTOR_1), "https://ipfs.io/ipfs/earlier");

    let (logs, _guard) = capture_logs();
    let client = BatchMintClient::new(ledger.clone(), StaticPinner::new());
    let summary = client.mint_all(&test_investors()).await.unwrap();

    assert!(logs.contains("Lucite token 1 already assigned"));
    assert!(logs.contains("Lucite token 2 not yet assigned. Continuing..."));
    assert!(logs.contains("Lucite token 2 delivered to"));
    assert_eq!(
        summary.outcomes[0],
        RecordOutcome::Skipped {
            token_id: 1,
            owner: address(INVESTOR_1),
        }
    );
    assert_eq!(ledger.mint_submissions(), vec![2]);
    // The earlier mint is untouched
    assert_eq!(ledger.uri(1).unwrap(), "https://ipfs.io/ipfs/earlier");
}

#[tokio::test]
async fn test_large_batch_mints_in_input_order() {
    let investors = generate_investors(25);
    let ledger = InMemoryLedger::new();

    let client = BatchMintClient::new(ledger.clone(), StaticPinner::new());
    let summary = client.mint_all(&investors).await.unwrap();

    assert_eq!(summary.minted_count(), 25);
    assert_eq!(ledger.mint_submissions(), (1..=25).collect::<Vec<_>>());
}
