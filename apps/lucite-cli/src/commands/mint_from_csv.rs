use super::parse_address_arg;
use crate::config::MintConfig;
use crate::error::CliResult;
use crate::ChainArgs;
use lucite_batch_mint::{BatchMintClient, BatchMintSummary, RecordOutcome};
use lucite_client::LuciteClient;
use lucite_csvs::read_investor_csv;
use lucite_sdk::PinataClient;
use std::path::PathBuf;

pub async fn execute(
    csv_path: PathBuf,
    chain: ChainArgs,
    private_key: Option<String>,
    pinata_api_key: Option<String>,
    pinata_api_secret: Option<String>,
    config_path: Option<PathBuf>,
    dry_run: bool,
) -> CliResult<()> {
    println!("🎨 Starting Guild Lucite batch mint...");
    if dry_run {
        println!("🔍 DRY RUN: nothing will be pinned or minted");
    }

    let config = MintConfig::load(config_path.as_deref())?;

    // Validate the whole file before any network call
    println!("📄 Reading investors from {}...", csv_path.display());
    let investors = read_investor_csv(&csv_path)?;
    println!("✅ {} investor record(s) validated", investors.len());

    let contract = parse_address_arg("contract", &chain.contract)?;
    // Credentials are only optional for dry runs, which never sign or pin
    let ledger = match private_key.as_deref() {
        Some(key) => LuciteClient::with_signer(&chain.rpc_url, contract, key)?,
        None => LuciteClient::read_only(&chain.rpc_url, contract)?,
    }
    .with_confirmation(config.confirmation());
    let chain_id = ledger.chain_id().await?;
    println!("🔗 Connected to chain {} (contract {})", chain_id, contract);
    if let Some(minter) = ledger.minter() {
        println!("   Minter: {}", minter);
    }

    let pinner = PinataClient::with_api_url(
        config.pinata_api_url.clone(),
        pinata_api_key.unwrap_or_default(),
        pinata_api_secret.unwrap_or_default(),
    )?;
    if !dry_run {
        println!("🔑 Checking Pinata credentials...");
        pinner.test_authentication().await?;
        println!("✅ Pinata credentials accepted");
    }

    let client = BatchMintClient::with_config(
        ledger,
        pinner,
        config.metadata.clone(),
        config.batch_config(dry_run),
    );

    let summary = match client.mint_all(&investors).await {
        Ok(summary) => summary,
        Err(e) => {
            println!("❌ Batch stopped at token {}", e.token_id());
            println!("   Tokens before it stay minted. Re-run with the same file to resume.");
            return Err(e.into());
        }
    };

    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &BatchMintSummary) {
    println!("\n📈 Batch Summary:");
    for outcome in &summary.outcomes {
        match outcome {
            RecordOutcome::Minted(receipt) => println!(
                "   ✅ Token {} → {} ({})",
                receipt.token_id, receipt.recipient, receipt.tx_hash
            ),
            RecordOutcome::Skipped { token_id, owner } => {
                println!("   ⏭️  Token {} already owned by {}", token_id, owner)
            }
            RecordOutcome::Planned { metadata } => {
                println!("   📝 Token {} would be minted as \"{}\"", metadata.token_id, metadata.name)
            }
        }
    }

    if summary.outcomes.is_empty() {
        println!("   No investors to mint");
    }

    println!(
        "\n   Minted: {}  Skipped: {}  Planned: {}",
        summary.minted_count(),
        summary.skipped_count(),
        summary.planned_count()
    );
    if summary.minted_count() > 0 {
        println!("🎉 Lucites delivered!");
    }
}
