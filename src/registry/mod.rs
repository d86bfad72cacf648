pub mod classify;
pub mod coin;
pub mod token_type;
pub mod version;

use thiserror::Error;

pub use classify::{classify, evm_token_type, TokenRule};
pub use token_type::TokenType;
pub use version::{version_of, version_of_str, TokenVersion};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("{0}: unknown token type")]
    UnknownTokenType(String),

    #[error("tokenType {0}: token version not implemented")]
    VersionNotImplemented(TokenType),

    #[error("not evm coin {0}")]
    NotEvmCoin(u32),
}
