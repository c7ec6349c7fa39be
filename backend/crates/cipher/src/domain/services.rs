//! Domain Services
//!
//! Pure decryption pipeline and the solve heuristic. Both substitution
//! passes work on the 26-letter Latin alphabet: ASCII letters are mapped
//! to uppercase and rotated, every other character is copied through
//! verbatim.

/// Substrings whose presence marks a decrypted text as meaningful
pub const SUCCESS_INDICATORS: &[&str] = &[
    "FLAG{",
    "CTF{",
    "ETERNA",
    "GHOST",
    "GIRATINA",
    "DISTORTION",
    "WORLD",
    "PLATINUM",
    "SINNOH",
];

/// Keywords accepted as the Vigenère key
pub const VALID_KEYWORDS: &[&str] = &[
    "GIRATINA",
    "DIALGA",
    "PALKIA",
    "ARCEUS",
    "DARKRAI",
    "CRESSELIA",
    "ROTOM",
    "SPIRITOMB",
];

/// Points awarded when the text contains a success indicator
const INDICATOR_POINTS: u32 = 10;
/// Points awarded when the key is on the keyword list
const KEYWORD_POINTS: u32 = 5;
/// Minimum score for an attempt to count as solved
const SOLVE_THRESHOLD: u32 = 15;

/// Undo a uniform Caesar rotation by shifting every letter backward
pub fn caesar_decrypt(text: &str, shift: i64) -> String {
    // Reduce once; per-character arithmetic must not overflow on extreme shifts
    let shift = shift.rem_euclid(26);
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let idx = c.to_ascii_uppercase() as i64 - 'A' as i64;
                let rotated = (idx - shift).rem_euclid(26) as u8;
                (b'A' + rotated) as char
            } else {
                c
            }
        })
        .collect()
}

/// Undo a Vigenère substitution keyed by `key`
///
/// The key cursor advances only on alphabetic ciphertext characters, so
/// non-letters are copied through without consuming a key position. Key
/// characters are indexed relative to 'A' whatever they are; callers
/// normalize the key to uppercase first.
pub fn vigenere_decrypt(text: &str, key: &str) -> String {
    let key_chars: Vec<char> = key.chars().collect();
    if key_chars.is_empty() {
        return text.to_string();
    }

    let mut plaintext = String::with_capacity(text.len());
    let mut key_index = 0usize;
    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            let cipher_idx = c.to_ascii_uppercase() as i64 - 'A' as i64;
            let key_idx = key_chars[key_index % key_chars.len()] as i64 - 'A' as i64;
            let plain = (cipher_idx - key_idx).rem_euclid(26) as u8;
            plaintext.push((b'A' + plain) as char);
            key_index += 1;
        } else {
            plaintext.push(c);
        }
    }
    plaintext
}

/// Run the full pipeline: Caesar pass first, then the Vigenère pass
///
/// Returns an empty string when either input is empty (no error raised).
pub fn decrypt(cipher_text: &str, key: &str, caesar_shift: i64) -> String {
    if cipher_text.is_empty() || key.is_empty() {
        return String::new();
    }

    let caesar_decrypted = caesar_decrypt(cipher_text, caesar_shift);
    vigenere_decrypt(&caesar_decrypted, key)
}

/// Heuristic solve check: 10 points for an indicator substring, 5 for an
/// allow-listed key, solved at 15
///
/// This is a puzzle heuristic, not a cryptographic validator; it never
/// checks that a specific plaintext was recovered.
pub fn is_solved(decrypted_text: &str, key: &str) -> bool {
    let text = decrypted_text.to_uppercase();
    let key = key.to_uppercase();

    let mut score = 0u32;
    if SUCCESS_INDICATORS
        .iter()
        .any(|indicator| text.contains(indicator))
    {
        score += INDICATOR_POINTS;
    }
    if VALID_KEYWORDS.contains(&key.as_str()) {
        score += KEYWORD_POINTS;
    }

    score >= SOLVE_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caesar_decrypt() {
        assert_eq!(caesar_decrypt("WKLV", 3), "THIS");
        assert_eq!(caesar_decrypt("wklv", 3), "THIS");
        // Wraps around 'A'
        assert_eq!(caesar_decrypt("AB", 3), "XY");
        // Equivalent shifts
        assert_eq!(caesar_decrypt("WKLV", 29), caesar_decrypt("WKLV", 3));
        assert_eq!(caesar_decrypt("WKLV", -23), caesar_decrypt("WKLV", 3));
    }

    #[test]
    fn test_caesar_preserves_non_letters() {
        assert_eq!(caesar_decrypt("D1E_F!", 3), "A1B_C!");
        assert_eq!(caesar_decrypt("", 3), "");
    }

    #[test]
    fn test_caesar_extreme_shift_does_not_overflow() {
        let out = caesar_decrypt("ABC", i64::MIN);
        assert_eq!(out.len(), 3);
        let out = caesar_decrypt("ABC", i64::MAX);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_vigenere_decrypt() {
        // T-G, H-I, I-R, S-A relative to 'A'
        assert_eq!(vigenere_decrypt("THIS", "GIRATINA"), "NZRS");
        // Key repeats after its last character
        assert_eq!(vigenere_decrypt("BBBB", "AB"), "BABA");
    }

    #[test]
    fn test_vigenere_key_cursor_skips_non_letters() {
        // The underscore must not consume the 'B' key position
        assert_eq!(vigenere_decrypt("B_B", "AB"), "B_A");
        assert_eq!(vigenere_decrypt("B B!", "AB"), "B A!");
    }

    #[test]
    fn test_decrypt_pipeline() {
        assert_eq!(decrypt("WKLV", "GIRATINA", 3), "NZRS");
        // Non-letters keep their positions through both passes
        assert_eq!(decrypt("EE EE", "AB", 3), "BA BA");
    }

    #[test]
    fn test_decrypt_empty_inputs() {
        assert_eq!(decrypt("", "GIRATINA", 3), "");
        assert_eq!(decrypt("WKLV", "", 3), "");
    }

    #[test]
    fn test_decrypt_deterministic() {
        let a = decrypt("NKOOR_IURP_JLUDWLQD_UHDOP", "GIRATINA", 3);
        let b = decrypt("NKOOR_IURP_JLUDWLQD_UHDOP", "GIRATINA", 3);
        assert_eq!(a, b);
    }

    #[test]
    fn test_is_solved_requires_both_conditions() {
        // Indicator + allow-listed key
        assert!(is_solved("GIRATINA", "GIRATINA"));
        assert!(is_solved("FLAG{XYZ}", "DIALGA"));
        // Indicator only
        assert!(!is_solved("GIRATINA", "PIKACHU"));
        // Key only
        assert!(!is_solved("NZRS", "GIRATINA"));
        // Neither
        assert!(!is_solved("NZRS", "PIKACHU"));
    }

    #[test]
    fn test_is_solved_case_insensitive() {
        assert!(is_solved("welcome to the distortion world", "giratina"));
    }
}
