use lucite_sdk::{IpfsGateway, DEFAULT_PIN_NAME_PREFIX};

/// Configuration for batch mint runs
#[derive(Debug, Clone)]
pub struct BatchMintConfig {
    /// Gateway the pinned metadata CID is appended to to form the token URI
    pub token_uri_gateway: IpfsGateway,

    /// Prefix of the pin name shown in the Pinata dashboard
    pub pin_name_prefix: String,

    /// Check ownership and generate metadata only; nothing is pinned or minted
    pub dry_run: bool,
}

impl Default for BatchMintConfig {
    fn default() -> Self {
        Self {
            token_uri_gateway: IpfsGateway::default(),
            pin_name_prefix: DEFAULT_PIN_NAME_PREFIX.to_string(),
            dry_run: false,
        }
    }
}
