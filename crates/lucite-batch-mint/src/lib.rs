/*!
# Guild Lucite Batch Minting

Mints one Lucite token per investor record, composing the ledger, the pinning
service and the metadata template into a resumable pipeline.

## Guarantees

- Records are processed strictly in input order, one at a time. A record's
  mint is confirmed before the next record's ownership check starts, so the
  minter account never has two transactions in flight.
- A token that already has an owner is skipped. Re-running the same input is
  always safe and only mints what is missing.
- The first failure stops the run. Nothing is rolled back.

## Quick Start

```rust,no_run
use lucite_batch_mint::BatchMintClient;
use lucite_client::LuciteClient;
use lucite_csvs::read_investor_csv;
use lucite_sdk::PinataClient;

# async fn example() -> Result<(), Box<dyn std::error::Error>> {
let investors = read_investor_csv("investor_minting.csv")?;

let contract = "0x5FbDB2315678afecb367f032d93F642f64180aa3".parse()?;
let ledger = LuciteClient::with_signer("http://localhost:8545", contract, "0x...")?;
let pinner = PinataClient::new("key".to_string(), "secret".to_string())?;

let client = BatchMintClient::new(ledger, pinner);
let summary = client.mint_all(&investors).await?;
println!("Minted {} tokens", summary.minted_count());
# Ok(())
# }
```
*/

mod client;
mod config;
mod error;

pub use client::{BatchMintClient, BatchMintSummary, RecordOutcome};
pub use config::BatchMintConfig;
pub use error::{BatchMintError, BatchMintResult};
