use bigdecimal::BigDecimal;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid amount: {0:?}. Must be a non-negative decimal number")]
    InvalidAmount(String),

    #[error("Invalid asset id: {0:?}")]
    InvalidAssetId(String),
}

/// Keep a memo only when it is a plain non-negative integer.
///
/// Downstream services match payments on the numeric memo, so anything
/// else is dropped rather than forwarded.
pub fn sanitize_memo(memo: &str) -> String {
    if is_digits(memo) {
        memo.to_string()
    } else {
        String::new()
    }
}

/// Parse a decimal-string magnitude such as `"1000"` or `"0.25"`.
pub fn validate_amount(value: &str) -> Result<BigDecimal, ValidationError> {
    // Check if value is empty
    if value.trim().is_empty() {
        return Err(ValidationError::InvalidAmount(value.to_string()));
    }

    // Only digits with an optional fractional part, no sign or exponent
    let (int_part, frac_part) = match value.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (value, None),
    };
    if !is_digits(int_part) || frac_part.is_some_and(|frac| !is_digits(frac)) {
        return Err(ValidationError::InvalidAmount(value.to_string()));
    }

    BigDecimal::from_str(value).map_err(|_| ValidationError::InvalidAmount(value.to_string()))
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}
