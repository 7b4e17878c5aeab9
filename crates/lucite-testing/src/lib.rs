//! Test doubles for the Lucite minting pipeline: an in-memory ledger with
//! ERC-721 ownership rules, a pinner with predictable CIDs, investor fixtures
//! and log capture.

mod fixtures;
mod in_memory_ledger;
mod log_capture;
mod static_pinner;

pub use fixtures::*;
pub use in_memory_ledger::{InMemoryLedger, InMemoryPendingMint};
pub use log_capture::{capture_logs, CapturedLogs};
pub use static_pinner::StaticPinner;
