use super::parse_address_arg;
use crate::error::CliResult;
use crate::ChainArgs;
use lucite_client::LuciteClient;
use lucite_csvs::read_investor_csv;
use lucite_sdk::Ledger;
use std::path::PathBuf;

pub async fn execute(csv_path: PathBuf, chain: ChainArgs) -> CliResult<()> {
    println!("📊 Checking token status...");

    let investors = read_investor_csv(&csv_path)?;
    let contract = parse_address_arg("contract", &chain.contract)?;
    let client = LuciteClient::read_only(&chain.rpc_url, contract)?;

    let chain_id = client.chain_id().await?;
    println!("🔗 Chain {} - contract {}", chain_id, contract);

    let mut minted = 0;
    let mut mismatched = 0;

    for record in &investors {
        match client.owner_of(record.token_id).await? {
            Some(owner) => {
                minted += 1;
                let uri = client.token_uri(record.token_id).await?.unwrap_or_default();
                if owner == record.address {
                    println!("   ✅ Token {} owned by {}", record.token_id, owner);
                } else {
                    mismatched += 1;
                    println!(
                        "   ⚠️  Token {} owned by {} (expected {})",
                        record.token_id, owner, record.address
                    );
                }
                println!("      URI: {}", uri);
            }
            None => {
                println!(
                    "   ⏳ Token {} not minted yet (→ {})",
                    record.token_id, record.address
                );
            }
        }
    }

    println!(
        "\n📈 {} of {} token(s) minted, {} pending",
        minted,
        investors.len(),
        investors.len() - minted
    );
    if mismatched > 0 {
        println!(
            "⚠️  {} token(s) are owned by an address other than the CSV recipient",
            mismatched
        );
    }

    Ok(())
}
