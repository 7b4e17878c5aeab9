use super::parse_address_arg;
use crate::config::MintConfig;
use crate::error::{CliError, CliResult};
use crate::{ChainArgs, SignerArgs};
use alloy_primitives::Address;
use lucite_client::LuciteClient;
use lucite_sdk::{Ledger, MintReceipt, PendingMint};
use std::path::PathBuf;

pub async fn execute(
    recipient: String,
    token_id: u64,
    token_uri: String,
    chain: ChainArgs,
    signer: SignerArgs,
    config_path: Option<PathBuf>,
) -> CliResult<()> {
    println!("🎨 Minting Lucite token {}...", token_id);

    let config = MintConfig::load(config_path.as_deref())?;
    let recipient = parse_address_arg("recipient", &recipient)?;
    let contract = parse_address_arg("contract", &chain.contract)?;

    let client = LuciteClient::with_signer(&chain.rpc_url, contract, &signer.private_key)?
        .with_confirmation(config.confirmation());

    let receipt = mint_token(&client, recipient, token_id, &token_uri).await?;
    println!("✅ Token {} delivered to {}", receipt.token_id, receipt.recipient);
    if let Some(block) = receipt.block_number {
        println!("   Block: {}", block);
    }
    println!("   URI: {}", receipt.token_uri);

    Ok(())
}

/// Mint a single token, refusing ids that already have an owner
async fn mint_token<L: Ledger>(
    ledger: &L,
    recipient: Address,
    token_id: u64,
    token_uri: &str,
) -> CliResult<MintReceipt> {
    if let Some(owner) = ledger.owner_of(token_id).await? {
        println!("❌ Token {} is already owned by {}", token_id, owner);
        return Err(CliError::AlreadyMinted { token_id, owner });
    }

    let pending = ledger.safe_mint(recipient, token_id, token_uri).await?;
    println!("📤 Submitted {}", pending.tx_hash());
    println!("⏳ Waiting for block confirmation...");

    Ok(pending.confirm().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lucite_testing::{address, InMemoryLedger, INVESTOR_1, INVESTOR_2};

    #[tokio::test]
    async fn test_mint_token_delivers_to_recipient() {
        let ledger = InMemoryLedger::new();

        let receipt = mint_token(&ledger, address(INVESTOR_1), 5, "https://ipfs.io/ipfs/cid5")
            .await
            .unwrap();

        assert_eq!(receipt.token_id, 5);
        assert_eq!(ledger.owner(5), Some(address(INVESTOR_1)));
        assert_eq!(ledger.uri(5).unwrap(), "https://ipfs.io/ipfs/cid5");
    }

    #[tokio::test]
    async fn test_mint_token_fails_when_already_owned() {
        let ledger = InMemoryLedger::new();
        ledger.mark_minted(5, address(INVESTOR_2), "https://ipfs.io/ipfs/earlier");

        let err = mint_token(&ledger, address(INVESTOR_1), 5, "https://ipfs.io/ipfs/cid5")
            .await
            .unwrap_err();

        match err {
            CliError::AlreadyMinted { token_id, owner } => {
                assert_eq!(token_id, 5);
                assert_eq!(owner, address(INVESTOR_2));
            }
            other => panic!("expected AlreadyMinted, got {:?}", other),
        }
        assert!(ledger.mint_submissions().is_empty());
    }
}
