pub mod config;
pub mod models;
pub mod registry;
pub mod validation;

#[cfg(test)]
pub mod tests;

// Re-export specific items for convenience
pub use models::{Amount, Direction, Token, Tx, TxKind, TxOutput};
pub use registry::{classify, version_of, TokenError, TokenType, TokenVersion};
pub use validation::{sanitize_memo, validate_amount, ValidationError};
