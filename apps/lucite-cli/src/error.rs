use alloy_primitives::Address;
use lucite_batch_mint::BatchMintError;
use lucite_client::ClientError;
use lucite_csvs::CsvError;
use lucite_sdk::{LedgerError, PinError};
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Csv(#[from] CsvError),

    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error("Pinning error: {0}")]
    Pin(#[from] PinError),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Batch mint failed: {0}")]
    BatchMint(#[from] BatchMintError),

    #[error("Token {token_id} is already owned by {owner}")]
    AlreadyMinted { token_id: u64, owner: Address },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
