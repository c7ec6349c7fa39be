//! Unit tests for cipher crate
//! Target: C0 coverage 100%, C1 coverage 80%

#[cfg(test)]
mod pipeline_tests {
    use crate::domain::services::*;

    /// Forward transform (Vigenère then Caesar), the inverse of `decrypt`
    fn encrypt(plain: &str, key: &str, caesar_shift: i64) -> String {
        let key_chars: Vec<char> = key.chars().collect();
        let mut key_index = 0usize;

        let mut vigenere = String::with_capacity(plain.len());
        for c in plain.chars() {
            if c.is_ascii_alphabetic() {
                let p = c.to_ascii_uppercase() as i64 - 'A' as i64;
                let k = key_chars[key_index % key_chars.len()] as i64 - 'A' as i64;
                vigenere.push((b'A' + (p + k).rem_euclid(26) as u8) as char);
                key_index += 1;
            } else {
                vigenere.push(c);
            }
        }

        vigenere
            .chars()
            .map(|c| {
                if c.is_ascii_alphabetic() {
                    let idx = c as i64 - 'A' as i64;
                    (b'A' + (idx + caesar_shift).rem_euclid(26) as u8) as char
                } else {
                    c
                }
            })
            .collect()
    }

    #[test]
    fn test_round_trip() {
        let cases = [
            ("GIRATINA", "GIRATINA", 3),
            ("ETERNA FOREST", "DIALGA", 7),
            ("FLAG{DISTORTION}", "ARCEUS", 0),
            ("SINNOH", "ROTOM", 25),
        ];

        for (plain, key, shift) in cases {
            let encrypted = encrypt(plain, key, shift);
            assert_eq!(
                decrypt(&encrypted, key, shift),
                plain,
                "round trip failed for {plain:?} / {key:?} / {shift}"
            );
        }
    }

    #[test]
    fn test_known_forward_vectors() {
        // Keeps the test transform itself honest
        assert_eq!(encrypt("GIRATINA", "GIRATINA", 3), "PTLDPTDD");
        assert_eq!(encrypt("GIRATINA", "PIKACHU", 3), "YTEDYSKS");
        assert_eq!(encrypt("THIS", "A", 3), "WKLV");
    }

    #[test]
    fn test_non_letters_keep_positions() {
        let cipher = encrypt("FLAG{ETERNA_2025}!", "PALKIA", 5);
        let decrypted = decrypt(&cipher, "PALKIA", 5);
        assert_eq!(decrypted, "FLAG{ETERNA_2025}!");

        for (i, c) in "FLAG{ETERNA_2025}!".chars().enumerate() {
            if !c.is_ascii_alphabetic() {
                assert_eq!(decrypted.chars().nth(i), Some(c));
            }
        }
    }

    #[test]
    fn test_key_cursor_only_advances_on_letters() {
        // "A A" under key "AB": first A uses key A, the space is skipped,
        // second A uses key B
        assert_eq!(decrypt("D D", "AB", 3), "A Z");
    }

    #[test]
    fn test_scenario_wklv() {
        assert_eq!(decrypt("WKLV", "GIRATINA", 3), "NZRS");
    }

    #[test]
    fn test_score_gate() {
        assert!(is_solved("WELCOME TO SINNOH", "CRESSELIA"));
        assert!(!is_solved("WELCOME TO SINNOH", "MEOWTH"));
        assert!(!is_solved("NOTHING HERE", "CRESSELIA"));
    }
}

#[cfg(test)]
mod config_tests {
    use crate::application::config::*;

    #[test]
    fn test_default_config() {
        let config = CipherConfig::default();

        assert_eq!(config.default_caesar_shift, 3);
        assert_eq!(
            config.retry_hint,
            "Try different cipher types and Caesar shifts if unsuccessful."
        );
    }
}

#[cfg(test)]
mod models_tests {
    use crate::presentation::dto::*;

    #[test]
    fn test_decrypt_request_deserialization() {
        let json = r#"{"cipher_text":"WKLV","key":"GIRATINA","caesar_shift":3}"#;
        let request: DecryptRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.cipher_text, "WKLV");
        assert_eq!(request.key, "GIRATINA");
        assert_eq!(request.caesar_shift, Some(3));
        assert!(request.cipher_type.is_none());
    }

    #[test]
    fn test_decrypt_request_defaults() {
        let request: DecryptRequest = serde_json::from_str("{}").unwrap();

        assert_eq!(request.cipher_text, "");
        assert_eq!(request.key, "");
        assert!(request.caesar_shift.is_none());
        assert!(request.cipher_type.is_none());
    }

    #[test]
    fn test_decrypt_request_lenient_shift() {
        let from = |raw: &str| -> DecryptRequest { serde_json::from_str(raw).unwrap() };

        assert_eq!(from(r#"{"caesar_shift":"7"}"#).caesar_shift, Some(7));
        assert_eq!(from(r#"{"caesar_shift":" 7 "}"#).caesar_shift, Some(7));
        assert_eq!(from(r#"{"caesar_shift":3.9}"#).caesar_shift, Some(3));
        assert_eq!(from(r#"{"caesar_shift":-4}"#).caesar_shift, Some(-4));
        assert_eq!(from(r#"{"caesar_shift":"forest"}"#).caesar_shift, None);
        assert_eq!(from(r#"{"caesar_shift":null}"#).caesar_shift, None);
        assert_eq!(from(r#"{"caesar_shift":true}"#).caesar_shift, None);
        assert_eq!(from(r#"{"caesar_shift":[3]}"#).caesar_shift, None);
    }

    #[test]
    fn test_decrypt_response_serialization() {
        let response = DecryptResponse {
            success: true,
            decrypted_message: "NZRS".to_string(),
            congratulations: false,
            complexity_score: "Partial".to_string(),
            hint: "Try again".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""success":true"#));
        assert!(json.contains(r#""decrypted_message":"NZRS""#));
        assert!(json.contains(r#""congratulations":false"#));
        assert!(json.contains(r#""complexity_score":"Partial""#));
        assert!(json.contains(r#""hint":"Try again""#));
    }
}

#[cfg(test)]
mod domain_tests {
    use crate::domain::entities::*;
    use crate::domain::value_objects::*;

    #[test]
    fn test_cipher_key_normalization() {
        let key = CipherKey::new("  giratina  ").unwrap();
        assert_eq!(key.as_str(), "GIRATINA");

        let key = CipherKey::new("Dialga").unwrap();
        assert_eq!(key.into_inner(), "DIALGA");
    }

    #[test]
    fn test_cipher_key_rejects_empty() {
        assert_eq!(CipherKey::new(""), Err(CipherKeyError::Empty));
        assert_eq!(CipherKey::new("   "), Err(CipherKeyError::Empty));
    }

    #[test]
    fn test_caesar_shift_default() {
        assert_eq!(CaesarShift::default().amount(), 3);
        assert_eq!(CaesarShift::new(-12).amount(), -12);
        assert_eq!(i64::from(CaesarShift::new(29)), 29);
    }

    #[test]
    fn test_complexity_labels() {
        assert_eq!(Complexity::High.as_str(), "High");
        assert_eq!(Complexity::Partial.as_str(), "Partial");
    }

    #[test]
    fn test_decryption_complexity() {
        let solved = Decryption::new("GIRATINA".to_string(), true);
        assert_eq!(solved.complexity(), Complexity::High);

        let unsolved = Decryption::new("NZRS".to_string(), false);
        assert_eq!(unsolved.complexity(), Complexity::Partial);
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(CipherError, StatusCode)> = vec![
            (CipherError::MissingInput, StatusCode::BAD_REQUEST),
            (
                CipherError::Decryption("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should return correct status code"
            );
        }
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            CipherError::MissingInput.to_string(),
            "Missing cipher text or key"
        );
        assert_eq!(
            CipherError::Decryption("key table corrupt".into()).to_string(),
            "Decryption failed: key table corrupt"
        );
    }
}
