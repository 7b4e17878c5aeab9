use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Public gateway every Lucite URL is built against
pub const IPFS_GATEWAY_URL: &str = "https://ipfs.io/ipfs/";

/// Builds `<gateway prefix><cid>` URLs.
///
/// Used both for the media CIDs from the investor CSV and for the CID Pinata
/// hands back, which becomes the token URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IpfsGateway {
    base_url: String,
}

impl IpfsGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, cid: impl Display) -> String {
        format!("{}{}", self.base_url, cid)
    }
}

impl Default for IpfsGateway {
    fn default() -> Self {
        Self::new(IPFS_GATEWAY_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gateway_url() {
        let gateway = IpfsGateway::default();
        assert_eq!(
            gateway.url_for("bafkreiario54qi4fhjnuw2kd67wd2myyn5ihpjbdgbbmlf3xpmloto2c4i"),
            "https://ipfs.io/ipfs/bafkreiario54qi4fhjnuw2kd67wd2myyn5ihpjbdgbbmlf3xpmloto2c4i"
        );
    }
}
