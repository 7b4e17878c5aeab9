use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;

use error::CliResult;

#[derive(Parser)]
#[command(name = "lucite")]
#[command(about = "Guild Lucite CLI - Pre-Seed investor token issuance")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Connection to the deployed token contract
#[derive(clap::Args, Debug, Clone)]
pub struct ChainArgs {
    /// Address of the deployed Guild Lucite contract
    #[arg(long, env = "MINTING_CONTRACT_ADDRESS")]
    pub contract: String,

    /// EVM JSON-RPC URL
    #[arg(long, env = "RPC_URL", default_value = "http://localhost:8545")]
    pub rpc_url: String,
}

/// Signing key of the contract owner
#[derive(clap::Args, Debug, Clone)]
pub struct SignerArgs {
    /// Hex private key of the minting account
    #[arg(long, env = "MINTER_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Mint one token per investor in a CSV file, skipping tokens already minted
    MintFromCsv {
        /// Investor CSV (tokenId,address,imageCid,animationCid)
        csv: PathBuf,

        #[command(flatten)]
        chain: ChainArgs,

        /// Hex private key of the minting account (optional with --dry-run)
        #[arg(
            long,
            env = "MINTER_PRIVATE_KEY",
            hide_env_values = true,
            required_unless_present = "dry_run"
        )]
        private_key: Option<String>,

        /// Pinata API key (optional with --dry-run)
        #[arg(
            long,
            env = "PINATA_API_KEY",
            hide_env_values = true,
            required_unless_present = "dry_run"
        )]
        pinata_api_key: Option<String>,

        /// Pinata API secret (optional with --dry-run)
        #[arg(
            long,
            env = "PINATA_API_SECRET",
            hide_env_values = true,
            required_unless_present = "dry_run"
        )]
        pinata_api_secret: Option<String>,

        /// Optional YAML configuration (metadata template, gateway, confirmations)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Check ownership and build metadata without pinning or minting
        #[arg(long)]
        dry_run: bool,
    },

    /// Mint a single token with an existing token URI
    Mint {
        /// Recipient address
        #[arg(long)]
        recipient: String,

        /// Token id to mint
        #[arg(long)]
        id: u64,

        /// Token URI to store on chain
        #[arg(long)]
        uri: String,

        #[command(flatten)]
        chain: ChainArgs,

        #[command(flatten)]
        signer: SignerArgs,

        /// Optional YAML configuration (confirmation settings)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Validate an investor CSV without touching the chain
    ValidateCsv {
        /// Investor CSV (tokenId,address,imageCid,animationCid)
        csv: PathBuf,
    },

    /// Show the current owner and token URI of every token in a CSV
    Status {
        /// Investor CSV (tokenId,address,imageCid,animationCid)
        csv: PathBuf,

        #[command(flatten)]
        chain: ChainArgs,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> CliResult<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::MintFromCsv {
            csv,
            chain,
            private_key,
            pinata_api_key,
            pinata_api_secret,
            config,
            dry_run,
        } => {
            commands::mint_from_csv::execute(
                csv,
                chain,
                private_key,
                pinata_api_key,
                pinata_api_secret,
                config,
                dry_run,
            )
            .await
        }

        Commands::Mint {
            recipient,
            id,
            uri,
            chain,
            signer,
            config,
        } => commands::mint::execute(recipient, id, uri, chain, signer, config).await,

        Commands::ValidateCsv { csv } => commands::validate_csv::execute(csv),

        Commands::Status { csv, chain } => commands::status::execute(csv, chain).await,
    }
}
