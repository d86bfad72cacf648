use serde::{Deserialize, Serialize};

use super::asset::build_asset_id;
use crate::registry::{self, TokenError, TokenType, TokenVersion};

/// A non-native token (ERC-20, TRC-20, BEP-2, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    pub token_id: String,
    pub coin: u32,
    #[serde(rename = "type")]
    pub token_type: TokenType,
}

impl Token {
    /// Build a token, classifying it from its chain and asset id.
    ///
    /// Returns `None` when the chain has no token classification.
    pub fn classified(
        name: impl Into<String>,
        symbol: impl Into<String>,
        decimals: u32,
        token_id: impl Into<String>,
        coin: u32,
    ) -> Option<Self> {
        let token_id = token_id.into();
        let token_type = registry::classify(coin, &token_id)?;

        Some(Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals,
            token_id,
            coin,
            token_type,
        })
    }

    pub fn asset_id(&self) -> String {
        build_asset_id(self.coin, &self.token_id)
    }

    pub fn version(&self) -> Result<TokenVersion, TokenError> {
        registry::version_of(self.token_type)
    }
}
