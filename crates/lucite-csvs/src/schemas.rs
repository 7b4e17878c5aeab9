/*!
# CSV Schema Definitions

This module defines the investor CSV schema consumed by `mint-from-csv`.

A row is read as an [`InvestorRow`] (raw strings, exactly as written in the
file) and promoted to an [`InvestorRecord`] once every field has been checked.
*/

use alloy_primitives::Address;
use cid::Cid;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ================================================================================================
// Investor CSV Schema
// ================================================================================================

/// Recognized headers for the investor CSV, in canonical order
pub const INVESTOR_CSV_HEADERS: &[&str] = &["tokenId", "address", "imageCid", "animationCid"];

/// Raw row structure for the investor CSV
///
/// **Purpose**: One recipient per row: which token they get and which media it points at
/// **Consumers**: `mint-from-csv`, `validate-csv` and `status` commands
///
/// Field order matches [`INVESTOR_CSV_HEADERS`], which is the column order
/// [`write_investor_csv`](crate::write_investor_csv) emits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvestorRow {
    /// Token id as a decimal string
    #[serde(rename = "tokenId")]
    pub token_id: String,

    /// Recipient account, `0x`-prefixed hex (EIP-55 checksummed when mixed-case)
    pub address: String,

    /// CID of the still image
    #[serde(rename = "imageCid")]
    pub image_cid: String,

    /// CID of the animation
    #[serde(rename = "animationCid")]
    pub animation_cid: String,
}

/// A validated investor row. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvestorRecord {
    pub token_id: u64,
    pub address: Address,
    pub image_cid: Cid,
    pub animation_cid: Cid,
}

impl InvestorRow {
    /// Run every check on the row. On failure, returns all reasons in check order.
    pub fn validate(&self) -> Result<InvestorRecord, Vec<String>> {
        let mut errors = Vec::new();

        let token_id = match parse_token_id(&self.token_id) {
            Ok(id) => Some(id),
            Err(reason) => {
                errors.push(format!("Invalid token ID: {}", reason));
                None
            }
        };

        let address = parse_address(&self.address);
        if address.is_none() {
            errors.push("Invalid Ethereum Address".to_string());
        }

        let image_cid = match Cid::from_str(&self.image_cid) {
            Ok(cid) => Some(cid),
            Err(e) => {
                errors.push(format!("Invalid image CID: {}", e));
                None
            }
        };

        let animation_cid = match Cid::from_str(&self.animation_cid) {
            Ok(cid) => Some(cid),
            Err(e) => {
                errors.push(format!("Invalid animation CID: {}", e));
                None
            }
        };

        match (token_id, address, image_cid, animation_cid) {
            (Some(token_id), Some(address), Some(image_cid), Some(animation_cid)) => {
                Ok(InvestorRecord {
                    token_id,
                    address,
                    image_cid,
                    animation_cid,
                })
            }
            _ => Err(errors),
        }
    }
}

impl From<&InvestorRecord> for InvestorRow {
    fn from(record: &InvestorRecord) -> Self {
        Self {
            token_id: record.token_id.to_string(),
            address: record.address.to_checksum(None),
            image_cid: record.image_cid.to_string(),
            animation_cid: record.animation_cid.to_string(),
        }
    }
}

// ================================================================================================
// Field Parsers
// ================================================================================================

/// Parse a positive decimal token id
fn parse_token_id(s: &str) -> Result<u64, String> {
    let id = s.trim().parse::<u64>().map_err(|e| e.to_string())?;
    if id == 0 {
        return Err("token id must be positive".to_string());
    }
    Ok(id)
}

/// Parse an account address.
///
/// The `0x` prefix is optional and case-insensitive. All-lowercase and
/// all-uppercase hex are accepted as-is; mixed case must carry a valid EIP-55
/// checksum.
pub fn parse_address(s: &str) -> Option<Address> {
    let hex = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let has_lower = hex.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = hex.chars().any(|c| c.is_ascii_uppercase());
    let prefixed = format!("0x{}", hex);

    if has_lower && has_upper {
        Address::parse_checksummed(&prefixed, None).ok()
    } else {
        Address::from_str(&prefixed).ok()
    }
}

// ================================================================================================
// Tests
// ================================================================================================
