/*!
# Guild Lucite CSV Schema Definitions

This crate provides the **authoritative investor CSV schema** for Lucite minting.

## Schema Files

### Investor CSV (`investor_minting.csv`)
One recipient per row, with columns:
- `tokenId`: Token id to mint (positive integer)
- `address`: Recipient account (hex, `0x` prefix optional, EIP-55 checksummed when mixed-case)
- `imageCid`: IPFS CID of the token image
- `animationCid`: IPFS CID of the token animation

Columns may appear in any order, but no other columns are allowed. Blank rows
are skipped.

## Usage

```rust
use lucite_csvs::{read_investor_csv, CsvResult};

fn example() -> CsvResult<()> {
    let investors = read_investor_csv("investor_minting.csv")?;
    for investor in &investors {
        println!("#{} -> {}", investor.token_id, investor.address);
    }
    Ok(())
}
```
*/

pub mod errors;
pub mod schemas;
pub mod validation;

// Re-export main types for convenience
pub use errors::{CsvError, CsvResult};
pub use schemas::{parse_address, InvestorRecord, InvestorRow, INVESTOR_CSV_HEADERS};
pub use validation::{parse_investor_csv, read_investor_csv, write_investor_csv};
