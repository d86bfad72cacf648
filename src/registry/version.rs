//! Protocol version each token tag is encoded with downstream

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::{TokenError, TokenType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum TokenVersion {
    V0,
    V1,
    V3,
    V4,
    V5,
    V6,
    V7,
    V8,
    V9,
    V10,
    V11,
    V12,
    /// The tag has no version semantics, exposed as `-1`.
    Undefined,
}

impl TokenVersion {
    pub fn as_i32(&self) -> i32 {
        match self {
            TokenVersion::V0 => 0,
            TokenVersion::V1 => 1,
            TokenVersion::V3 => 3,
            TokenVersion::V4 => 4,
            TokenVersion::V5 => 5,
            TokenVersion::V6 => 6,
            TokenVersion::V7 => 7,
            TokenVersion::V8 => 8,
            TokenVersion::V9 => 9,
            TokenVersion::V10 => 10,
            TokenVersion::V11 => 11,
            TokenVersion::V12 => 12,
            TokenVersion::Undefined => -1,
        }
    }
}

impl TryFrom<i32> for TokenVersion {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        let version = match value {
            0 => TokenVersion::V0,
            1 => TokenVersion::V1,
            3 => TokenVersion::V3,
            4 => TokenVersion::V4,
            5 => TokenVersion::V5,
            6 => TokenVersion::V6,
            7 => TokenVersion::V7,
            8 => TokenVersion::V8,
            9 => TokenVersion::V9,
            10 => TokenVersion::V10,
            11 => TokenVersion::V11,
            12 => TokenVersion::V12,
            -1 => TokenVersion::Undefined,
            other => return Err(format!("unsupported token version {}", other)),
        };
        Ok(version)
    }
}

impl From<TokenVersion> for i32 {
    fn from(version: TokenVersion) -> Self {
        version.as_i32()
    }
}

impl fmt::Display for TokenVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i32())
    }
}

/// Hand-maintained tag -> version table. A new tag must be added here in
/// the same change that adds it to `TokenType::ALL`.
static VERSIONS: Lazy<HashMap<TokenType, TokenVersion>> = Lazy::new(|| {
    use TokenType::*;

    let groups: [(TokenVersion, &[TokenType]); 13] = [
        (
            TokenVersion::V0,
            &[Erc20, Bep2, Bep20, Bep8, Etc20, Poa20, Clo20, Trc10, Trc21, Wan20, Go20, Tt20, Waves, Aptos],
        ),
        (TokenVersion::V1, &[Trc20]),
        (TokenVersion::V3, &[Spl, Kava]),
        (TokenVersion::V4, &[Polygon]),
        (TokenVersion::V5, &[Avalanche, Arbitrum, Fantom, Hrc20, Optimism, Xdai]),
        (TokenVersion::V6, &[Terra]),
        (TokenVersion::V7, &[Celo, Nrc20]),
        (TokenVersion::V8, &[Cw20]),
        (TokenVersion::V9, &[Esdt, Crc20]),
        (TokenVersion::V10, &[Krc20, Stellar]),
        (TokenVersion::V11, &[Ronin, Aurora]),
        (TokenVersion::V12, &[Ton, PolygonZkEvm, ZkSync, Sui]),
        (
            TokenVersion::Undefined,
            &[
                Brc20, Erc721, Erc1155, Eos, Nep5, Vet, Ontology, Theta, Tomo, Poa, Oasis, Algorand,
                KavaErc20, Meter, EvmosErc20, Kip20, Moonbeam, Klaytn, Metis, Moonriver, Boba, Stride,
                Neutron, Fa2,
            ],
        ),
    ];

    groups
        .iter()
        .flat_map(|(version, tags)| tags.iter().map(move |tag| (*tag, *version)))
        .collect()
});

pub fn version_of(tag: TokenType) -> Result<TokenVersion, TokenError> {
    VERSIONS
        .get(&tag)
        .copied()
        .ok_or(TokenError::VersionNotImplemented(tag))
}

/// Version lookup for callers holding the wire string.
pub fn version_of_str(text: &str) -> Result<TokenVersion, TokenError> {
    let tag = TokenType::parse(text)?;
    version_of(tag)
}
