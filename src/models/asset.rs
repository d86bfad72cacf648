//! Global cross-chain asset keys
//!
//! `c{coin}` names a chain's native asset, `c{coin}_t{token_id}` one of its
//! tokens. Asset lookup services index on this exact string.

use crate::validation::ValidationError;

const COIN_PREFIX: char = 'c';
const TOKEN_SEPARATOR: &str = "_t";

pub fn build_asset_id(coin: u32, token_id: &str) -> String {
    if token_id.is_empty() {
        format!("{}{}", COIN_PREFIX, coin)
    } else {
        format!("{}{}{}{}", COIN_PREFIX, coin, TOKEN_SEPARATOR, token_id)
    }
}

/// Split an asset key back into coin and optional token id.
pub fn parse_asset_id(asset_id: &str) -> Result<(u32, Option<String>), ValidationError> {
    if asset_id.trim().is_empty() {
        return Err(ValidationError::MissingParameter("asset_id".to_string()));
    }

    let rest = asset_id
        .strip_prefix(COIN_PREFIX)
        .ok_or_else(|| ValidationError::InvalidAssetId(asset_id.to_string()))?;

    let (coin_part, token) = match rest.split_once(TOKEN_SEPARATOR) {
        Some((_, "")) => return Err(ValidationError::InvalidAssetId(asset_id.to_string())),
        Some((coin_part, token)) => (coin_part, Some(token.to_string())),
        None => (rest, None),
    };

    // u32 parsing alone would let a leading '+' through
    if coin_part.is_empty() || !coin_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidAssetId(asset_id.to_string()));
    }
    let coin = coin_part
        .parse::<u32>()
        .map_err(|_| ValidationError::InvalidAssetId(asset_id.to_string()))?;

    Ok((coin, token))
}
