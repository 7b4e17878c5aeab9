pub mod mint;
pub mod mint_from_csv;
pub mod status;
pub mod validate_csv;

use crate::error::{CliError, CliResult};
use alloy_primitives::Address;
use lucite_csvs::parse_address;

/// Parse an address argument with the same rules as the CSV address column
pub(crate) fn parse_address_arg(name: &str, value: &str) -> CliResult<Address> {
    parse_address(value.trim())
        .ok_or_else(|| CliError::InvalidConfig(format!("Invalid {} address: {}", name, value)))
}
