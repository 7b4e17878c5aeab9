use alloy_primitives::Address;
use lucite_csvs::{parse_investor_csv, InvestorRecord};

pub const INVESTOR_1: &str = "0x7cD5d32aA6531225b8aC02a06e06BB2cC589EED2";
pub const INVESTOR_2: &str = "0x1E5F187187A625A4EcdDb24cD54463742dD34024";

/// Two valid investors
pub const TEST_MINT_CSV: &str = "\
tokenId,address,imageCid,animationCid
1,0x7cD5d32aA6531225b8aC02a06e06BB2cC589EED2,QmeTkDQ18hpqU6CKFZbHK7zL1steqdoMfqoasF2QUPU5g4,QmdgWKBNYn9q1HU8wiRv1NYxkJEFMRsUaDwNHMH1DqYgEM
2,0x1E5F187187A625A4EcdDb24cD54463742dD34024,Qmehv9WE1EpHMCVead1aRuEMzhBnDoQXZzYThtXhR1kyaH,QmTKE8VTAcy2axUUC2hpuhsvPQZ2tySemeQwFByQ8AzUw3
";

/// Second row has a bad address and two bad CIDs
pub const TEST_MINT_INVALID_CSV: &str = "\
tokenId,address,imageCid,animationCid
1,0x7cD5d32aA6531225b8aC02a06e06BB2cC589EED2,QmeTkDQ18hpqU6CKFZbHK7zL1steqdoMfqoasF2QUPU5g4,QmdgWKBNYn9q1HU8wiRv1NYxkJEFMRsUaDwNHMH1DqYgEM
2,0x1E5F187187A625A4EcdDb24cdfdfD54463742dD34024,Qmehv9WE1EpHMCVead1aRuEMzhBDoQXZzYThtXhR1kyaH,QmTKE8VTAcy2axUUC2hpuhsvPQZ2tySemeQwFByQ8AzUw32
";

pub fn address(s: &str) -> Address {
    s.parse().expect("invalid test address")
}

pub fn test_investors() -> Vec<InvestorRecord> {
    parse_investor_csv(TEST_MINT_CSV.as_bytes()).expect("test CSV should be valid")
}

/// `count` valid investors with token ids `1..=count`, all sharing the same media
pub fn generate_investors(count: u64) -> Vec<InvestorRecord> {
    let mut csv = String::from("tokenId,address,imageCid,animationCid\n");
    for token_id in 1..=count {
        csv.push_str(&format!(
            "{},{},QmeTkDQ18hpqU6CKFZbHK7zL1steqdoMfqoasF2QUPU5g4,QmdgWKBNYn9q1HU8wiRv1NYxkJEFMRsUaDwNHMH1DqYgEM\n",
            token_id,
            if token_id % 2 == 0 { INVESTOR_2 } else { INVESTOR_1 }
        ));
    }
    parse_investor_csv(csv.as_bytes()).expect("generated CSV should be valid")
}
