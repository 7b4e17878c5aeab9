use crate::error::{CliError, CliResult};
use lucite_batch_mint::BatchMintConfig;
use lucite_client::ConfirmationConfig;
use lucite_sdk::{IpfsGateway, MetadataTemplate, DEFAULT_PINATA_API_URL, DEFAULT_PIN_NAME_PREFIX};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Optional YAML configuration for minting runs. Every field has a default,
/// so an empty file (or no file) reproduces the Pre-Seed round setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MintConfig {
    /// Text and gateway used in the generated token metadata
    pub metadata: MetadataTemplate,

    /// Gateway the pinned metadata CID is appended to to form the token URI
    pub token_uri_gateway: IpfsGateway,

    /// Prefix of the pin name shown in the Pinata dashboard
    pub pin_name_prefix: String,

    pub pinata_api_url: String,

    /// Blocks to wait for after a mint is included
    pub required_confirmations: u64,

    /// Give up waiting for a mint after this many seconds. Unset waits forever.
    pub confirmation_timeout_secs: Option<u64>,
}

impl Default for MintConfig {
    fn default() -> Self {
        Self {
            metadata: MetadataTemplate::default(),
            token_uri_gateway: IpfsGateway::default(),
            pin_name_prefix: DEFAULT_PIN_NAME_PREFIX.to_string(),
            pinata_api_url: DEFAULT_PINATA_API_URL.to_string(),
            required_confirmations: 1,
            confirmation_timeout_secs: None,
        }
    }
}

impl MintConfig {
    /// Load from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: MintConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.required_confirmations == 0 {
            return Err(CliError::InvalidConfig(
                "required_confirmations must be at least 1".to_string(),
            ));
        }
        if self.confirmation_timeout_secs == Some(0) {
            return Err(CliError::InvalidConfig(
                "confirmation_timeout_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn batch_config(&self, dry_run: bool) -> BatchMintConfig {
        BatchMintConfig {
            token_uri_gateway: self.token_uri_gateway.clone(),
            pin_name_prefix: self.pin_name_prefix.clone(),
            dry_run,
        }
    }

    pub fn confirmation(&self) -> ConfirmationConfig {
        ConfirmationConfig {
            required_confirmations: self.required_confirmations,
            timeout: self.confirmation_timeout_secs.map(Duration::from_secs),
        }
    }
}
