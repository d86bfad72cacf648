//! tests/validation_tests.rs - Memo sanitizing, amounts and asset ids

#[cfg(test)]
mod tests {
    use crate::{
        models::{build_asset_id, parse_asset_id, Amount},
        validation::{sanitize_memo, validate_amount, ValidationError},
    };

    #[test]
    fn test_sanitize_memo() {
        let cases = [
            ("empty_value", "", ""),
            ("string_value", "test", ""),
            ("good_number_value", "1", "1"),
            ("non_number", "non_number", ""),
            ("long_number", "98765432109876543210987654321", "98765432109876543210987654321"),
            ("leading_zero", "007", "007"),
            ("negative", "-1", ""),
            ("plus_sign", "+1", ""),
            ("whitespace", " 1", ""),
            ("decimal", "1.5", ""),
        ];

        for (name, value, expected) in cases {
            assert_eq!(sanitize_memo(value), expected, "case {}", name);
        }
    }

    #[test]
    fn test_validate_amount() {
        assert_eq!(validate_amount("1000").unwrap().to_string(), "1000");
        assert_eq!(validate_amount("0.25").unwrap().to_string(), "0.25");
        assert_eq!(
            validate_amount("58446744073709551620").unwrap().to_string(),
            "58446744073709551620"
        );

        for bad in ["", " ", "1.", ".5", "1.2.3", "-1", "1e18", "0x10", "1 000"] {
            assert_eq!(
                validate_amount(bad),
                Err(ValidationError::InvalidAmount(bad.to_string())),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_amount_decimal_sum() {
        let a = Amount::new("0.5").to_decimal().unwrap();
        let b = Amount::new("1.25").to_decimal().unwrap();
        assert_eq!(Amount::from(a + b), Amount::new("1.75"));
    }

    #[test]
    fn test_build_asset_id() {
        assert_eq!(build_asset_id(60, ""), "c60");
        assert_eq!(
            build_asset_id(60, "0xdAC17F958D2ee523a2206206994597C13D831ec7"),
            "c60_t0xdAC17F958D2ee523a2206206994597C13D831ec7"
        );
        assert_eq!(build_asset_id(714, "BUSD-BD1"), "c714_tBUSD-BD1");
    }

    #[test]
    fn test_parse_asset_id() {
        assert_eq!(parse_asset_id("c60"), Ok((60, None)));
        assert_eq!(
            parse_asset_id("c195_tTR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t"),
            Ok((195, Some("TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t".to_string())))
        );
        assert_eq!(
            parse_asset_id("c501_tSo1_t_odd"),
            Ok((501, Some("So1_t_odd".to_string())))
        );

        assert_eq!(
            parse_asset_id(""),
            Err(ValidationError::MissingParameter("asset_id".to_string()))
        );
        for bad in ["60", "c", "cabc", "c+60", "c60_t", "c60_x1", "c99999999999"] {
            assert_eq!(
                parse_asset_id(bad),
                Err(ValidationError::InvalidAssetId(bad.to_string())),
                "{:?} should be rejected",
                bad
            );
        }
    }
}
