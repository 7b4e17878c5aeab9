use lucite_batch_mint::{BatchMintClient, RecordOutcome};
use lucite_csvs::read_investor_csv;
use lucite_testing::{address, InMemoryLedger, StaticPinner, INVESTOR_1, INVESTOR_2, TEST_MINT_CSV};
use std::io::Write;
use tempfile::NamedTempFile;

/// Fresh ledger, two valid investors: both get minted, in file order, with a
/// token URI pointing at the pinned metadata.
#[tokio::test]
async fn test_mint_from_csv_happy_path() {
    let mut csv_file = NamedTempFile::new().unwrap();
    csv_file.write_all(TEST_MINT_CSV.as_bytes()).unwrap();
    let investors = read_investor_csv(csv_file.path()).unwrap();

    let ledger = InMemoryLedger::new();
    let client = BatchMintClient::new(ledger.clone(), StaticPinner::new());

    let summary = client.mint_all(&investors).await.unwrap();

    assert_eq!(summary.minted_count(), 2);
    assert_eq!(summary.skipped_count(), 0);

    assert_eq!(ledger.owner(1), Some(address(INVESTOR_1)));
    assert_eq!(
        ledger.uri(1).unwrap(),
        format!("https://ipfs.io/ipfs/{}", StaticPinner::cid_for(1))
    );
    assert_eq!(ledger.owner(2), Some(address(INVESTOR_2)));
    assert_eq!(
        ledger.uri(2).unwrap(),
        format!("https://ipfs.io/ipfs/{}", StaticPinner::cid_for(2))
    );

    // One submission per record, in input order
    assert_eq!(ledger.mint_submissions(), vec![1, 2]);

    match &summary.outcomes[0] {
        RecordOutcome::Minted(receipt) => {
            assert_eq!(receipt.token_id, 1);
            assert_eq!(receipt.recipient, address(INVESTOR_1));
        }
        other => panic!("expected token 1 to be minted, got {:?}", other),
    }
}

/// The documents handed to the pinner are the generated metadata, named for
/// the Pinata dashboard.
#[tokio::test]
async fn test_pinned_documents_match_generated_metadata() {
    let investors = lucite_testing::test_investors();
    let client = BatchMintClient::new(InMemoryLedger::new(), StaticPinner::new());

    client.mint_all(&investors).await.unwrap();

    let pinned = client.pinner().pinned();
    assert_eq!(pinned.len(), 2);

    let (options, document) = &pinned[0];
    assert_eq!(options.name, "PreSeed1");
    assert_eq!(options.cid_version, 1);
    assert_eq!(document.name, "Guild Lucite #1");
    assert_eq!(
        document.image,
        "https://ipfs.io/ipfs/QmeTkDQ18hpqU6CKFZbHK7zL1steqdoMfqoasF2QUPU5g4"
    );
    assert_eq!(
        document.animation_url,
        "https://ipfs.io/ipfs/QmdgWKBNYn9q1HU8wiRv1NYxkJEFMRsUaDwNHMH1DqYgEM"
    );
    assert_eq!(pinned[1].1.token_id, 2);
}
