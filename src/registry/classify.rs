//! Chain + asset id -> token classification

use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;

use super::coin;
use super::{TokenError, TokenType};

/// How a non-EVM chain picks the tag for one of its assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRule {
    Fixed(TokenType),
    /// Numeric ids are TRC10 assets, anything else a TRC20 contract.
    Tron,
    /// 44-character ids are CW20 contracts, shorter ones native denoms.
    Terra,
}

impl TokenRule {
    pub fn apply(&self, token_id: &str) -> TokenType {
        match self {
            TokenRule::Fixed(tag) => *tag,
            TokenRule::Tron => {
                if token_id.parse::<i64>().is_ok() {
                    TokenType::Trc10
                } else {
                    TokenType::Trc20
                }
            }
            TokenRule::Terra => {
                if token_id.len() == 44 {
                    TokenType::Cw20
                } else {
                    TokenType::Terra
                }
            }
        }
    }
}

/// One tag per EVM chain, independent of the contract address.
static EVM_TOKEN_TYPES: Lazy<HashMap<u32, TokenType>> = Lazy::new(|| {
    HashMap::from([
        (coin::ETHEREUM, TokenType::Erc20),
        (coin::CLASSIC, TokenType::Etc20),
        (coin::POA, TokenType::Poa20),
        (coin::CALLISTO, TokenType::Clo20),
        (coin::WANCHAIN, TokenType::Wan20),
        (coin::THUNDERTOKEN, TokenType::Tt20),
        (coin::GOCHAIN, TokenType::Go20),
        (coin::TOMOCHAIN, TokenType::Trc21),
        (coin::SMARTCHAIN, TokenType::Bep20),
        (coin::POLYGON, TokenType::Polygon),
        (coin::OPTIMISM, TokenType::Optimism),
        (coin::XDAI, TokenType::Xdai),
        (coin::AVALANCHEC, TokenType::Avalanche),
        (coin::FANTOM, TokenType::Fantom),
        (coin::HECO, TokenType::Hrc20),
        (coin::RONIN, TokenType::Ronin),
        (coin::CELO, TokenType::Celo),
        (coin::CRONOS, TokenType::Crc20),
        (coin::KCC, TokenType::Krc20),
        (coin::AURORA, TokenType::Aurora),
        (coin::ARBITRUM, TokenType::Arbitrum),
        (coin::KAVAEVM, TokenType::KavaErc20),
        (coin::METER, TokenType::Meter),
        (coin::EVMOS, TokenType::EvmosErc20),
        (coin::OKC, TokenType::Kip20),
        (coin::MOONBEAM, TokenType::Moonbeam),
        (coin::KLAYTN, TokenType::Klaytn),
        (coin::METIS, TokenType::Metis),
        (coin::MOONRIVER, TokenType::Moonriver),
        (coin::BOBA, TokenType::Boba),
        (coin::POLYGONZKEVM, TokenType::PolygonZkEvm),
        (coin::ZKSYNC, TokenType::ZkSync),
    ])
});

static NATIVE_TOKEN_RULES: Lazy<HashMap<u32, TokenRule>> = Lazy::new(|| {
    HashMap::from([
        (coin::BITCOIN, TokenRule::Fixed(TokenType::Brc20)),
        (coin::TRON, TokenRule::Tron),
        (coin::TERRA, TokenRule::Terra),
        (coin::BINANCE, TokenRule::Fixed(TokenType::Bep2)),
        (coin::WAVES, TokenRule::Fixed(TokenType::Waves)),
        (coin::THETA, TokenRule::Fixed(TokenType::Theta)),
        (coin::ONTOLOGY, TokenRule::Fixed(TokenType::Ontology)),
        (coin::NULS, TokenRule::Fixed(TokenType::Nrc20)),
        (coin::VECHAIN, TokenRule::Fixed(TokenType::Vet)),
        (coin::NEO, TokenRule::Fixed(TokenType::Nep5)),
        (coin::EOS, TokenRule::Fixed(TokenType::Eos)),
        (coin::SOLANA, TokenRule::Fixed(TokenType::Spl)),
        (coin::HARMONY, TokenRule::Fixed(TokenType::Hrc20)),
        (coin::OASIS, TokenRule::Fixed(TokenType::Oasis)),
        (coin::STELLAR, TokenRule::Fixed(TokenType::Stellar)),
        (coin::ALGORAND, TokenRule::Fixed(TokenType::Algorand)),
        (coin::KAVA, TokenRule::Fixed(TokenType::Kava)),
        (coin::ELROND, TokenRule::Fixed(TokenType::Esdt)),
        (coin::APTOS, TokenRule::Fixed(TokenType::Aptos)),
        (coin::TON, TokenRule::Fixed(TokenType::Ton)),
        (coin::SUI, TokenRule::Fixed(TokenType::Sui)),
        (coin::STRIDE, TokenRule::Fixed(TokenType::Stride)),
        (coin::NEUTRON, TokenRule::Fixed(TokenType::Neutron)),
    ])
});

/// Classify a token by chain and on-chain asset id.
///
/// `None` means the chain has no token classification; callers should
/// carry on without tagging the asset.
pub fn classify(coin: u32, token_id: &str) -> Option<TokenType> {
    if let Some(tag) = EVM_TOKEN_TYPES.get(&coin) {
        return Some(*tag);
    }

    match NATIVE_TOKEN_RULES.get(&coin) {
        Some(rule) => Some(rule.apply(token_id)),
        None => {
            debug!("No token classification for coin {}", coin);
            None
        }
    }
}

pub fn evm_token_type(coin: u32) -> Result<TokenType, TokenError> {
    EVM_TOKEN_TYPES
        .get(&coin)
        .copied()
        .ok_or(TokenError::NotEvmCoin(coin))
}

/// Rule used for a non-EVM chain, if it has one.
pub fn native_rule(coin: u32) -> Option<TokenRule> {
    NATIVE_TOKEN_RULES.get(&coin).copied()
}
