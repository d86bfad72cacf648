//! Token classification tags exposed to other services

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::TokenError;

/// Canonical classification of a non-native token.
///
/// The string form is a cross-service contract: never rename a tag or
/// reuse one for a different chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TokenType {
    Brc20,
    Erc20,
    Erc721,
    Erc1155,
    Bep2,
    Bep8,
    Bep20,
    Trc10,
    Etc20,
    Poa20,
    Trc20,
    Trc21,
    Clo20,
    Go20,
    Wan20,
    Tt20,
    Cw20,
    Kava,
    Spl,
    Polygon,
    Optimism,
    Xdai,
    Avalanche,
    Fantom,
    Hrc20,
    Arbitrum,
    Terra,
    Ronin,
    Eos,
    Nep5,
    Nrc20,
    Vet,
    Ontology,
    Theta,
    Tomo,
    Waves,
    Poa,
    Celo,
    Esdt,
    Oasis,
    Crc20,
    Stellar,
    Krc20,
    Aurora,
    Algorand,
    KavaErc20,
    Meter,
    EvmosErc20,
    Kip20,
    Aptos,
    Moonbeam,
    Klaytn,
    Metis,
    Moonriver,
    Boba,
    Ton,
    PolygonZkEvm,
    ZkSync,
    Sui,
    Stride,
    Neutron,
    Fa2,
}

impl TokenType {
    /// Every supported tag, in the order consumers have always seen them.
    pub const ALL: [TokenType; 62] = [
        TokenType::Brc20,
        TokenType::Erc20,
        TokenType::Erc721,
        TokenType::Erc1155,
        TokenType::Bep2,
        TokenType::Bep8,
        TokenType::Bep20,
        TokenType::Trc10,
        TokenType::Etc20,
        TokenType::Poa20,
        TokenType::Trc20,
        TokenType::Trc21,
        TokenType::Clo20,
        TokenType::Go20,
        TokenType::Wan20,
        TokenType::Tt20,
        TokenType::Cw20,
        TokenType::Kava,
        TokenType::Spl,
        TokenType::Polygon,
        TokenType::Optimism,
        TokenType::Xdai,
        TokenType::Avalanche,
        TokenType::Fantom,
        TokenType::Hrc20,
        TokenType::Arbitrum,
        TokenType::Terra,
        TokenType::Ronin,
        TokenType::Eos,
        TokenType::Nep5,
        TokenType::Nrc20,
        TokenType::Vet,
        TokenType::Ontology,
        TokenType::Theta,
        TokenType::Tomo,
        TokenType::Waves,
        TokenType::Poa,
        TokenType::Celo,
        TokenType::Esdt,
        TokenType::Oasis,
        TokenType::Crc20,
        TokenType::Stellar,
        TokenType::Krc20,
        TokenType::Aurora,
        TokenType::Algorand,
        TokenType::KavaErc20,
        TokenType::Meter,
        TokenType::EvmosErc20,
        TokenType::Kip20,
        TokenType::Aptos,
        TokenType::Moonbeam,
        TokenType::Klaytn,
        TokenType::Metis,
        TokenType::Moonriver,
        TokenType::Boba,
        TokenType::Ton,
        TokenType::PolygonZkEvm,
        TokenType::ZkSync,
        TokenType::Sui,
        TokenType::Stride,
        TokenType::Neutron,
        TokenType::Fa2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Brc20 => "BRC20",
            TokenType::Erc20 => "ERC20",
            TokenType::Erc721 => "ERC721",
            TokenType::Erc1155 => "ERC1155",
            TokenType::Bep2 => "BEP2",
            TokenType::Bep8 => "BEP8",
            TokenType::Bep20 => "BEP20",
            TokenType::Trc10 => "TRC10",
            TokenType::Etc20 => "ETC20",
            TokenType::Poa20 => "POA20",
            TokenType::Trc20 => "TRC20",
            TokenType::Trc21 => "TRC21",
            TokenType::Clo20 => "CLO20",
            TokenType::Go20 => "GO20",
            TokenType::Wan20 => "WAN20",
            TokenType::Tt20 => "TT20",
            TokenType::Cw20 => "CW20",
            TokenType::Kava => "KAVA",
            TokenType::Spl => "SPL",
            TokenType::Polygon => "POLYGON",
            TokenType::Optimism => "OPTIMISM",
            TokenType::Xdai => "XDAI",
            TokenType::Avalanche => "AVALANCHE",
            TokenType::Fantom => "FANTOM",
            TokenType::Hrc20 => "HRC20",
            TokenType::Arbitrum => "ARBITRUM",
            TokenType::Terra => "TERRA",
            TokenType::Ronin => "RONIN",
            TokenType::Eos => "EOS",
            TokenType::Nep5 => "NEP5",
            TokenType::Nrc20 => "NRC20",
            TokenType::Vet => "VET",
            TokenType::Ontology => "ONTOLOGY",
            TokenType::Theta => "THETA",
            TokenType::Tomo => "TOMO",
            TokenType::Waves => "WAVES",
            TokenType::Poa => "POA",
            TokenType::Celo => "CELO",
            TokenType::Esdt => "ESDT",
            TokenType::Oasis => "OASIS",
            TokenType::Crc20 => "CRC20",
            TokenType::Stellar => "STELLAR",
            TokenType::Krc20 => "KRC20",
            TokenType::Aurora => "AURORA",
            TokenType::Algorand => "ALGORAND",
            TokenType::KavaErc20 => "KAVAERC20",
            TokenType::Meter => "METER",
            TokenType::EvmosErc20 => "EVMOS_ERC20",
            TokenType::Kip20 => "KIP20",
            TokenType::Aptos => "APTOS",
            TokenType::Moonbeam => "MOONBEAM",
            TokenType::Klaytn => "KLAYTN",
            TokenType::Metis => "METIS",
            TokenType::Moonriver => "MOONRIVER",
            TokenType::Boba => "BOBA",
            TokenType::Ton => "TON",
            TokenType::PolygonZkEvm => "ZKEVM",
            TokenType::ZkSync => "ZKSYNC",
            TokenType::Sui => "SUI",
            TokenType::Stride => "STRIDE",
            TokenType::Neutron => "NEUTRON",
            TokenType::Fa2 => "FA2",
        }
    }

    /// Exact, case-sensitive lookup of a wire tag.
    pub fn parse(text: &str) -> Result<Self, TokenError> {
        Self::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str() == text)
            .ok_or_else(|| TokenError::UnknownTokenType(text.to_string()))
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TokenType {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TokenType {
    type Error = TokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TokenType> for String {
    fn from(tag: TokenType) -> Self {
        tag.as_str().to_string()
    }
}
