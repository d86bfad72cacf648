use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::validation::{validate_amount, ValidationError};

/// Decimal-string magnitude as chains report it.
///
/// Kept as text on the wire; some chains report quantities past 64 bits, so
/// arithmetic always goes through `BigDecimal`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(String);

impl Amount {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn zero() -> Self {
        Self("0".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_decimal(&self) -> Result<BigDecimal, ValidationError> {
        validate_amount(&self.0)
    }
}

impl From<BigDecimal> for Amount {
    /// Always plain notation; `Display` would switch to `1E-8` style.
    fn from(value: BigDecimal) -> Self {
        Self(value.to_plain_string())
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
