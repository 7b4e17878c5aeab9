mod gateway;
pub mod ledger;
pub mod metadata;
pub mod pinning;

pub use gateway::{IpfsGateway, IPFS_GATEWAY_URL};
pub use ledger::{Ledger, LedgerError, LedgerResult, MintReceipt, PendingMint};
pub use metadata::{Attribute, LuciteMetadata, MetadataTemplate, DEFAULT_DESCRIPTION};
pub use pinning::{
    PinError, PinOptions, PinResult, PinataClient, PinnedContent, Pinner,
    DEFAULT_PINATA_API_URL, DEFAULT_PIN_NAME_PREFIX,
};

// Re-export the CSV record type the SDK operates on
pub use lucite_csvs::InvestorRecord;
