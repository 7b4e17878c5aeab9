/*!
# IPFS Pinning

Pins Lucite metadata documents through Pinata so they stay retrievable from
the public gateways.

Every failure comes back as a [`PinError`]; callers never have to interpret a
missing hash as a failure signal.
*/

use crate::metadata::LuciteMetadata;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error};

/// Pinata REST endpoint
pub const DEFAULT_PINATA_API_URL: &str = "https://api.pinata.cloud";

/// Pin names are `<prefix><tokenId>`
pub const DEFAULT_PIN_NAME_PREFIX: &str = "PreSeed";

/// Pinned documents are addressed with CIDv1 (`bafk...`)
pub const PIN_CID_VERSION: u8 = 1;

/// Default timeout for Pinata requests in seconds
pub const DEFAULT_PINATA_TIMEOUT_SECS: u64 = 60;

pub type PinResult<T> = Result<T, PinError>;

#[derive(Error, Debug)]
pub enum PinError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Pinata returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Pinata response did not include an IpfsHash")]
    MissingHash,
}

/// Per-pin options. The name only shows up in the Pinata dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinOptions {
    pub name: String,
    pub cid_version: u8,
}

impl PinOptions {
    pub fn for_token(name_prefix: &str, token_id: u64) -> Self {
        Self {
            name: format!("{}{}", name_prefix, token_id),
            cid_version: PIN_CID_VERSION,
        }
    }
}

/// A document Pinata has accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinnedContent {
    /// Content identifier of the pinned JSON
    pub ipfs_hash: String,
    pub pin_size: Option<u64>,
    pub timestamp: Option<String>,
}

/// Content-addressed storage that can pin a metadata document
#[async_trait]
pub trait Pinner: Send + Sync {
    async fn pin_json(
        &self,
        document: &LuciteMetadata,
        options: &PinOptions,
    ) -> PinResult<PinnedContent>;
}

// ================================================================================================
// Pinata Client
// ================================================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PinJsonRequest<'a> {
    pinata_content: &'a LuciteMetadata,
    pinata_options: PinataOptions,
    pinata_metadata: PinataMetadata<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PinataOptions {
    cid_version: u8,
}

#[derive(Serialize)]
struct PinataMetadata<'a> {
    name: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PinJsonResponse {
    ipfs_hash: Option<String>,
    pin_size: Option<u64>,
    timestamp: Option<String>,
}

/// Pinata API client authenticated with an API key/secret pair
pub struct PinataClient {
    client: Client,
    api_url: String,
    api_key: String,
    api_secret: String,
}

impl PinataClient {
    /// Create a client against the public Pinata API
    pub fn new(api_key: String, api_secret: String) -> PinResult<Self> {
        Self::with_api_url(DEFAULT_PINATA_API_URL.to_string(), api_key, api_secret)
    }

    /// Create a client against a custom API base URL
    pub fn with_api_url(api_url: String, api_key: String, api_secret: String) -> PinResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_PINATA_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
            api_secret,
        })
    }

    /// Check the key pair before starting a batch
    pub async fn test_authentication(&self) -> PinResult<()> {
        let url = format!("{}/data/testAuthentication", self.api_url);

        let response = self
            .client
            .get(&url)
            .header("pinata_api_key", &self.api_key)
            .header("pinata_secret_api_key", &self.api_secret)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PinError::Api {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        debug!("Pinata credentials accepted");
        Ok(())
    }

    async fn post_pin_json(
        &self,
        document: &LuciteMetadata,
        options: &PinOptions,
    ) -> PinResult<PinnedContent> {
        let url = format!("{}/pinning/pinJSONToIPFS", self.api_url);

        let request = PinJsonRequest {
            pinata_content: document,
            pinata_options: PinataOptions {
                cid_version: options.cid_version,
            },
            pinata_metadata: PinataMetadata {
                name: &options.name,
            },
        };

        let response = self
            .client
            .post(&url)
            .header("pinata_api_key", &self.api_key)
            .header("pinata_secret_api_key", &self.api_secret)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PinError::Api {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let body: PinJsonResponse = response.json().await?;
        let ipfs_hash = body
            .ipfs_hash
            .filter(|hash| !hash.is_empty())
            .ok_or(PinError::MissingHash)?;

        Ok(PinnedContent {
            ipfs_hash,
            pin_size: body.pin_size,
            timestamp: body.timestamp,
        })
    }
}

#[async_trait]
impl Pinner for PinataClient {
    async fn pin_json(
        &self,
        document: &LuciteMetadata,
        options: &PinOptions,
    ) -> PinResult<PinnedContent> {
        match self.post_pin_json(document, options).await {
            Ok(pinned) => {
                debug!("Pinned {} as {}", options.name, pinned.ipfs_hash);
                Ok(pinned)
            }
            Err(e) => {
                error!("Failed to pin {} to Pinata: {}", options.name, e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{Attribute, DEFAULT_DESCRIPTION};
    use serde_json::json;
    use wiremock::{
        matchers::{body_partial_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn test_metadata() -> LuciteMetadata {
        LuciteMetadata {
            attributes: vec![Attribute {
                trait_type: "Round".to_string(),
                value: "Pre-Seed".to_string(),
            }],
            description: DEFAULT_DESCRIPTION.to_string(),
            image: "https://ipfs.io/ipfs/QmUPqNRJepN4nvap3qRHHine68KBkt8aqPF2ukEpirMJEG"
                .to_string(),
            background_color: "5632E4".to_string(),
            name: "Guild Lucite #7357".to_string(),
            animation_url: "https://ipfs.io/ipfs/QmdgWKBNYn9q1HU8wiRv1NYxkJEFMRsUaDwNHMH1DqYgEM"
                .to_string(),
            token_id: 7357,
        }
    }

    fn client_for(server: &MockServer) -> PinataClient {
        PinataClient::with_api_url(server.uri(), "key".to_string(), "secret".to_string()).unwrap()
    }

    #[test]
    fn test_pin_options_for_token() {
        let options = PinOptions::for_token(DEFAULT_PIN_NAME_PREFIX, 7357);
        assert_eq!(options.name, "PreSeed7357");
        assert_eq!(options.cid_version, 1);
    }

    #[tokio::test]
    async fn test_pin_json_returns_hash() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/pinning/pinJSONToIPFS"))
            .and(header("pinata_api_key", "key"))
            .and(header("pinata_secret_api_key", "secret"))
            .and(body_partial_json(json!({
                "pinataOptions": { "cidVersion": 1 },
                "pinataMetadata": { "name": "PreSeed7357" },
                "pinataContent": { "tokenId": 7357, "name": "Guild Lucite #7357" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "IpfsHash": "bafkreigljcxmbfm7mac6d63ic7j74wla6csk2mnvu6gut2mdhsffg42iky",
                "PinSize": 2890,
                "Timestamp": "2022-03-01T10:00:00.000Z"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let pinned = client_for(&server)
            .pin_json(
                &test_metadata(),
                &PinOptions::for_token(DEFAULT_PIN_NAME_PREFIX, 7357),
            )
            .await
            .unwrap();

        assert_eq!(
            pinned.ipfs_hash,
            "bafkreigljcxmbfm7mac6d63ic7j74wla6csk2mnvu6gut2mdhsffg42iky"
        );
        assert_eq!(pinned.pin_size, Some(2890));
    }

    #[tokio::test]
    async fn test_pin_json_surfaces_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/pinning/pinJSONToIPFS"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .pin_json(&test_metadata(), &PinOptions::for_token("PreSeed", 1))
            .await
            .unwrap_err();

        match err {
            PinError::Api { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "Invalid API key");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_pin_json_without_hash_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/pinning/pinJSONToIPFS"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "PinSize": 10 })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .pin_json(&test_metadata(), &PinOptions::for_token("PreSeed", 1))
            .await
            .unwrap_err();

        assert!(matches!(err, PinError::MissingHash));
    }

    #[tokio::test]
    async fn test_authentication() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/testAuthentication"))
            .and(header("pinata_api_key", "key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Congratulations! You are communicating with the Pinata API!"
            })))
            .mount(&server)
            .await;

        client_for(&server).test_authentication().await.unwrap();
    }
}
