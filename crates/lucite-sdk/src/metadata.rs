/*!
# Lucite Metadata

Builds the ERC-721 metadata document pinned for each investor. Generation is a
pure function of the template and the record: no I/O, no clock, no
randomness.
*/

use crate::gateway::IpfsGateway;
use lucite_csvs::InvestorRecord;
use serde::{Deserialize, Serialize};

/// Default long-form description shown on every Lucite
pub const DEFAULT_DESCRIPTION: &str = r#"Thank you for being part of our journey with Guild!

This Lucite Deal Gift digitally commemorates our journey together. It's a modernization on the old concept of Lucite Deal Gifts, often found within the boardrooms of companies as a trophy of a past deal. At Guild, we're reimagining old dynamics and changing the narrative for the better - in order to elevate communities across geographies. The re-imagination of this old Lucite concept into something new is representative of our exploration of pushing boundaries in ways that are both innovative and relevant. We will continue to seek new opportunities to benefit communities and the people within them.

The artwork was created by digital artist Fabricio Rosa Marques. It is inspired by a "school of fish, as eggs" to represent the knowledge-transfer aspect of communities on Guild as well as the infancy of participation within the Pre-Seed round. Fabricio used various techniques to capture that inspiration within the motion and refraction of this piece.

Marcel Cutts worked on the smart contract itself. He explored various technologies before settling on the Ethereum blockchain and tooling to best accommodate the non-transferability characteristic of this NFT. Being able to restrict transfers on the ERC721 spec where transference is built-in required innovative structuring of various aspects of the delivery of this piece.

This Lucite Deal Gift is issued specifically to wallets associated with authorized individuals. Holders of this Lucite Deal Gift are unable to transfer it to an address other than that associated with the guildhost.eth ENS address. Any transfer from that Guild-controlled address onwards would require an appropriate reason to be provided (e.g. changing of wallet addresses for the same individual). This Lucite Deal Gift is nothing more than a commemorative gift in recognition of a past deal. It is not a security as it is not an asset (it holds no value) and is not tradeable."#;

pub const DEFAULT_NAME_PREFIX: &str = "Guild Lucite #";
pub const DEFAULT_ROUND: &str = "Pre-Seed";
pub const DEFAULT_BACKGROUND_COLOR: &str = "5632E4";

/// Single `{ trait_type, value }` entry of the `attributes` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub trait_type: String,
    pub value: String,
}

/// Metadata document for one token.
///
/// Field order is the JSON field order, which is what gets content-addressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuciteMetadata {
    pub attributes: Vec<Attribute>,
    pub description: String,
    pub image: String,
    pub background_color: String,
    pub name: String,
    pub animation_url: String,
    #[serde(rename = "tokenId")]
    pub token_id: u64,
}

/// Everything in a Lucite document that does not come from the CSV row.
///
/// Loaded once at startup; every field can be overridden from the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataTemplate {
    pub description: String,
    pub name_prefix: String,
    pub round: String,
    pub background_color: String,
    pub gateway: IpfsGateway,
}

impl Default for MetadataTemplate {
    fn default() -> Self {
        Self {
            description: DEFAULT_DESCRIPTION.to_string(),
            name_prefix: DEFAULT_NAME_PREFIX.to_string(),
            round: DEFAULT_ROUND.to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            gateway: IpfsGateway::default(),
        }
    }
}

impl MetadataTemplate {
    pub fn generate(&self, record: &InvestorRecord) -> LuciteMetadata {
        LuciteMetadata {
            attributes: vec![Attribute {
                trait_type: "Round".to_string(),
                value: self.round.clone(),
            }],
            description: self.description.clone(),
            image: self.gateway.url_for(&record.image_cid),
            background_color: self.background_color.clone(),
            name: format!("{}{}", self.name_prefix, record.token_id),
            animation_url: self.gateway.url_for(&record.animation_cid),
            token_id: record.token_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lucite_csvs::InvestorRow;

    fn record(token_id: &str, image: &str, animation: &str) -> InvestorRecord {
        InvestorRow {
            token_id: token_id.to_string(),
            address: "0x7cD5d32aA6531225b8aC02a06e06BB2cC589EED2".to_string(),
            image_cid: image.to_string(),
            animation_cid: animation.to_string(),
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn test_generate_investor_metadata() {
        let template = MetadataTemplate::default();
        let metadata = template.generate(&record(
            "1",
            "Qmehv9WE1EpHMCVead1aRuEMzhBnDoQXZzYThtXhR1kyaH",
            "QmTKE8VTAcy2axUUC2hpuhsvPQZ2tySemeQwFByQ8AzUw3",
        ));

        let expected = LuciteMetadata {
            attributes: vec![Attribute {
                trait_type: "Round".to_string(),
                value: "Pre-Seed".to_string(),
            }],
            description: DEFAULT_DESCRIPTION.to_string(),
            image: "https://ipfs.io/ipfs/Qmehv9WE1EpHMCVead1aRuEMzhBnDoQXZzYThtXhR1kyaH"
                .to_string(),
            background_color: "5632E4".to_string(),
            name: "Guild Lucite #1".to_string(),
            animation_url: "https://ipfs.io/ipfs/QmTKE8VTAcy2axUUC2hpuhsvPQZ2tySemeQwFByQ8AzUw3"
                .to_string(),
            token_id: 1,
        };

        assert_eq!(metadata, expected);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let template = MetadataTemplate::default();
        let investor = record(
            "7",
            "QmeTkDQ18hpqU6CKFZbHK7zL1steqdoMfqoasF2QUPU5g4",
            "QmdgWKBNYn9q1HU8wiRv1NYxkJEFMRsUaDwNHMH1DqYgEM",
        );

        let first = serde_json::to_vec(&template.generate(&investor)).unwrap();
        let second = serde_json::to_vec(&template.generate(&investor)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_records_differ_only_in_per_token_fields() {
        let template = MetadataTemplate::default();
        let a = template.generate(&record(
            "1",
            "QmeTkDQ18hpqU6CKFZbHK7zL1steqdoMfqoasF2QUPU5g4",
            "QmdgWKBNYn9q1HU8wiRv1NYxkJEFMRsUaDwNHMH1DqYgEM",
        ));
        let b = template.generate(&record(
            "2",
            "Qmehv9WE1EpHMCVead1aRuEMzhBnDoQXZzYThtXhR1kyaH",
            "QmTKE8VTAcy2axUUC2hpuhsvPQZ2tySemeQwFByQ8AzUw3",
        ));

        assert_eq!(a.attributes, b.attributes);
        assert_eq!(a.description, b.description);
        assert_eq!(a.background_color, b.background_color);
        assert_ne!(a.token_id, b.token_id);
        assert_ne!(a.name, b.name);
        assert_ne!(a.image, b.image);
        assert_ne!(a.animation_url, b.animation_url);
    }

    #[test]
    fn test_json_field_names() {
        let template = MetadataTemplate::default();
        let metadata = template.generate(&record(
            "44",
            "QmeTkDQ18hpqU6CKFZbHK7zL1steqdoMfqoasF2QUPU5g4",
            "QmdgWKBNYn9q1HU8wiRv1NYxkJEFMRsUaDwNHMH1DqYgEM",
        ));
        let json = serde_json::to_value(&metadata).unwrap();

        assert_eq!(json["tokenId"], 44);
        assert_eq!(json["name"], "Guild Lucite #44");
        assert_eq!(json["attributes"][0]["trait_type"], "Round");
        assert!(json.get("token_id").is_none());
    }

    #[test]
    fn test_template_overrides_from_partial_config() {
        let template: MetadataTemplate =
            serde_json::from_str(r#"{"round": "Seed", "gateway": "https://gw.example/ipfs/"}"#)
                .unwrap();

        assert_eq!(template.round, "Seed");
        assert_eq!(template.description, DEFAULT_DESCRIPTION);
        assert_eq!(template.gateway.url_for("abc"), "https://gw.example/ipfs/abc");
    }
}
