//! tests/registry_tests.rs - Token classification and version tables

#[cfg(test)]
mod tests {
    use crate::{
        models::Token,
        registry::{
            self, classify::native_rule, coin, evm_token_type, version_of, version_of_str,
            TokenError, TokenType, TokenVersion,
        },
    };
    use std::collections::HashSet;

    const TERRA_CW20_CONTRACT: &str = "terra14z56l0fp2lsf86zy3hty2z47ezkhnthtr9yq76";

    #[test]
    fn test_version_implemented_for_every_token_type() {
        for tag in TokenType::ALL {
            assert!(version_of(tag).is_ok(), "No version for token type {}", tag);
        }
    }

    #[test]
    fn test_token_types_are_unique() {
        let names: HashSet<&str> = TokenType::ALL.iter().map(|tag| tag.as_str()).collect();
        assert_eq!(names.len(), TokenType::ALL.len());
    }

    #[test]
    fn test_parse_is_inverse_of_as_str() {
        for tag in TokenType::ALL {
            assert_eq!(TokenType::parse(tag.as_str()), Ok(tag));
            assert_eq!(tag.to_string().parse::<TokenType>(), Ok(tag));
        }
    }

    #[test]
    fn test_parse_unknown_token_type() {
        for text in ["", "erc20", "ERC-20", "SOMETHING", "coin", "ERC20 "] {
            assert_eq!(
                TokenType::parse(text),
                Err(TokenError::UnknownTokenType(text.to_string())),
                "{:?} should not parse",
                text
            );
        }

        let err = TokenType::parse("XYZ").unwrap_err();
        assert_eq!(err.to_string(), "XYZ: unknown token type");
    }

    #[test]
    fn test_wire_names_that_differ_from_variants() {
        assert_eq!(TokenType::PolygonZkEvm.as_str(), "ZKEVM");
        assert_eq!(TokenType::EvmosErc20.as_str(), "EVMOS_ERC20");
        assert_eq!(TokenType::KavaErc20.as_str(), "KAVAERC20");
    }

    #[test]
    fn test_fa2_is_supported() {
        assert_eq!(TokenType::parse("FA2"), Ok(TokenType::Fa2));
        assert_eq!(version_of_str("FA2"), Ok(TokenVersion::Undefined));
    }

    #[test]
    fn test_token_versions() {
        let cases = [
            (TokenType::Erc20, TokenVersion::V0),
            (TokenType::Bep2, TokenVersion::V0),
            (TokenType::Aptos, TokenVersion::V0),
            (TokenType::Trc20, TokenVersion::V1),
            (TokenType::Spl, TokenVersion::V3),
            (TokenType::Kava, TokenVersion::V3),
            (TokenType::Polygon, TokenVersion::V4),
            (TokenType::Arbitrum, TokenVersion::V5),
            (TokenType::Terra, TokenVersion::V6),
            (TokenType::Nrc20, TokenVersion::V7),
            (TokenType::Cw20, TokenVersion::V8),
            (TokenType::Crc20, TokenVersion::V9),
            (TokenType::Stellar, TokenVersion::V10),
            (TokenType::Aurora, TokenVersion::V11),
            (TokenType::PolygonZkEvm, TokenVersion::V12),
            (TokenType::Sui, TokenVersion::V12),
            (TokenType::Brc20, TokenVersion::Undefined),
            (TokenType::Erc721, TokenVersion::Undefined),
            (TokenType::Neutron, TokenVersion::Undefined),
            (TokenType::Fa2, TokenVersion::Undefined),
        ];

        for (tag, expected) in cases {
            assert_eq!(version_of(tag), Ok(expected), "Wrong version for {}", tag);
        }
        assert_eq!(TokenVersion::Undefined.as_i32(), -1);
        assert_eq!(TokenVersion::V12.as_i32(), 12);
    }

    #[test]
    fn test_version_of_str() {
        assert_eq!(version_of_str("TRC20"), Ok(TokenVersion::V1));
        assert_eq!(
            version_of_str("trc20"),
            Err(TokenError::UnknownTokenType("trc20".to_string()))
        );
    }

    #[test]
    fn test_version_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&TokenVersion::V5).unwrap(), "5");
        assert_eq!(serde_json::to_string(&TokenVersion::Undefined).unwrap(), "-1");
        assert_eq!(serde_json::from_str::<TokenVersion>("-1").unwrap(), TokenVersion::Undefined);
        assert!(serde_json::from_str::<TokenVersion>("2").is_err());
    }

    #[test]
    fn test_classify_evm_ignores_token_id() {
        let cases = [
            (coin::ETHEREUM, TokenType::Erc20),
            (coin::SMARTCHAIN, TokenType::Bep20),
            (coin::POLYGON, TokenType::Polygon),
            (coin::HECO, TokenType::Hrc20),
            (coin::EVMOS, TokenType::EvmosErc20),
            (coin::POLYGONZKEVM, TokenType::PolygonZkEvm),
        ];

        for (coin_id, expected) in cases {
            assert_eq!(registry::classify(coin_id, ""), Some(expected));
            assert_eq!(
                registry::classify(coin_id, "0xdAC17F958D2ee523a2206206994597C13D831ec7"),
                Some(expected)
            );
        }
    }

    #[test]
    fn test_classify_tron() {
        assert_eq!(registry::classify(coin::TRON, "1002000"), Some(TokenType::Trc10));
        assert_eq!(
            registry::classify(coin::TRON, "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t"),
            Some(TokenType::Trc20)
        );
        assert_eq!(registry::classify(coin::TRON, ""), Some(TokenType::Trc20));
    }

    #[test]
    fn test_classify_terra() {
        assert_eq!(TERRA_CW20_CONTRACT.len(), 44);
        assert_eq!(registry::classify(coin::TERRA, TERRA_CW20_CONTRACT), Some(TokenType::Cw20));
        assert_eq!(registry::classify(coin::TERRA, "uusd"), Some(TokenType::Terra));
    }

    #[test]
    fn test_classify_fixed_chains() {
        let cases = [
            (coin::BITCOIN, TokenType::Brc20),
            (coin::BINANCE, TokenType::Bep2),
            (coin::SOLANA, TokenType::Spl),
            (coin::HARMONY, TokenType::Hrc20),
            (coin::ELROND, TokenType::Esdt),
            (coin::NULS, TokenType::Nrc20),
            (coin::TON, TokenType::Ton),
            (coin::NEUTRON, TokenType::Neutron),
        ];

        for (coin_id, expected) in cases {
            assert_eq!(registry::classify(coin_id, "any"), Some(expected));
        }
    }

    #[test]
    fn test_classify_unknown_chain_is_not_found() {
        // Litecoin and Cosmos have no token standard
        assert_eq!(registry::classify(2, "token"), None);
        assert_eq!(registry::classify(118, "token"), None);
        assert_eq!(registry::classify(u32::MAX, ""), None);
    }

    #[test]
    fn test_evm_token_type() {
        assert_eq!(evm_token_type(coin::ETHEREUM), Ok(TokenType::Erc20));
        assert_eq!(evm_token_type(coin::TRON), Err(TokenError::NotEvmCoin(coin::TRON)));
    }

    #[test]
    fn test_chain_table_matches_classification() {
        for chain in coin::CHAINS {
            if chain.evm {
                assert!(evm_token_type(chain.id).is_ok(), "EVM chain {} has no token type", chain.handle);
                assert!(coin::is_evm(chain.id));
            } else {
                assert!(native_rule(chain.id).is_some(), "Chain {} has no token rule", chain.handle);
                assert!(evm_token_type(chain.id).is_err());
            }
        }
    }

    #[test]
    fn test_every_classification_has_a_version() {
        for chain in coin::CHAINS {
            for token_id in ["", "123", TERRA_CW20_CONTRACT] {
                if let Some(tag) = registry::classify(chain.id, token_id) {
                    assert!(version_of(tag).is_ok());
                }
            }
        }
    }

    #[test]
    fn test_token_wire_shape() {
        let token = Token::classified("Tether USD", "USDT", 6, "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t", coin::TRON)
            .expect("Tron tokens are classified");

        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Tether USD",
                "symbol": "USDT",
                "decimals": 6,
                "token_id": "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t",
                "coin": 195,
                "type": "TRC20",
            })
        );

        let decoded: Token = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, token);
        assert_eq!(decoded.version(), Ok(TokenVersion::V1));
        assert_eq!(decoded.asset_id(), "c195_tTR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t");
    }

    #[test]
    fn test_token_with_unknown_type_is_rejected() {
        let json = r#"{"name":"x","symbol":"X","decimals":0,"token_id":"x","coin":60,"type":"ERC-20"}"#;
        assert!(serde_json::from_str::<Token>(json).is_err());
    }

    #[test]
    fn test_unclassified_chain_has_no_token() {
        assert!(Token::classified("Litecoin", "LTC", 8, "", 2).is_none());
    }
}
