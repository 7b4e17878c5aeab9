/*!
# Guild Lucite Client

This crate talks to a deployed Guild Lucite ERC-721 contract over EVM JSON-RPC
and exposes it as a [`lucite_sdk::Ledger`].

## Purpose

- **Ownership queries**: `ownerOf` reverts for unminted ids; the client turns
  that revert into `Ok(None)` so callers never branch on errors for the
  common case.
- **Minting**: `safeMint` is signed with a local private key and confirmed by
  waiting for the receipt.

## Usage

```rust,no_run
use lucite_client::LuciteClient;
use lucite_sdk::Ledger;

async fn example() -> Result<(), Box<dyn std::error::Error>> {
    let contract = "0x5FbDB2315678afecb367f032d93F642f64180aa3".parse()?;
    let client = LuciteClient::read_only("http://localhost:8545", contract)?;

    match client.owner_of(1).await {
        Ok(Some(owner)) => println!("Token 1 belongs to {}", owner),
        Ok(None) => println!("Token 1 has not been minted"),
        Err(e) => println!("Query failed: {}", e),
    }

    Ok(())
}
```
*/

pub mod client;
pub mod errors;

// Re-export main types for convenience
pub use client::{ConfirmationConfig, LuciteClient, PendingLuciteMint};
pub use errors::{ClientError, ClientResult};
