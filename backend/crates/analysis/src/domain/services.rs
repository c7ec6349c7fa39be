//! Domain Services
//!
//! The canned analysis fixtures. Every value here is fixed puzzle content;
//! nothing is derived from the uploaded audio.

use crate::domain::entities::CipherTexts;

/// Caesar-3 of `HELLO_FROM_GIRATINA_REALM`
pub const PRIMARY_CIPHER: &str = "NKOOR_IURP_JLUDWLQD_UHDOP";
/// Caesar-3 of `CAESAR_CIPHER_WITH_KEYWORD`
pub const SECONDARY_CIPHER: &str = "FDHVDU_FLSKHU_ZLWK_NHBZRUG";
/// Caesar-3 of `TIME_BASED_ENCRYPTION`
pub const TERTIARY_CIPHER: &str = "WLPH_EDVHG_HQFULSWLRQ";
/// Prefix of the hour-keyed quaternary cipher (Caesar-3 of `TIME_SHIFT_`)
pub const QUATERNARY_CIPHER_PREFIX: &str = "WLPH_VKLIW_";

/// Fixed frequency pattern reported for every upload
pub const FREQUENCY_PATTERN: [u8; 4] = [0, 1, 0, 1];

/// Hint strings returned with the analysis report
pub const ANALYSIS_HINT: &str =
    "Multiple layers detected. Analyze ALL spectrograms and consider time-based elements.";
pub const ADVANCED_HINT: &str =
    "Some ciphers use multi-stage decryption. Current time may be relevant.";

/// The hour-keyed quaternary cipher: prefix plus the hour modulo 13,
/// zero-padded to two digits
pub fn quaternary_cipher(hour: u32) -> String {
    format!("{QUATERNARY_CIPHER_PREFIX}{:02}", hour % 13)
}

/// Assemble the full cipher set for a given local hour
pub fn cipher_texts(hour: u32) -> CipherTexts {
    CipherTexts {
        primary: PRIMARY_CIPHER.to_string(),
        secondary: SECONDARY_CIPHER.to_string(),
        tertiary: TERTIARY_CIPHER.to_string(),
        quaternary: quaternary_cipher(hour),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quaternary_cipher_wraps_at_thirteen() {
        assert_eq!(quaternary_cipher(0), "WLPH_VKLIW_00");
        assert_eq!(quaternary_cipher(7), "WLPH_VKLIW_07");
        assert_eq!(quaternary_cipher(12), "WLPH_VKLIW_12");
        assert_eq!(quaternary_cipher(13), "WLPH_VKLIW_00");
        assert_eq!(quaternary_cipher(23), "WLPH_VKLIW_10");
    }

    #[test]
    fn test_cipher_texts_fixed_slots() {
        let ciphers = cipher_texts(5);
        assert_eq!(ciphers.primary, "NKOOR_IURP_JLUDWLQD_UHDOP");
        assert_eq!(ciphers.secondary, "FDHVDU_FLSKHU_ZLWK_NHBZRUG");
        assert_eq!(ciphers.tertiary, "WLPH_EDVHG_HQFULSWLRQ");
        assert_eq!(ciphers.quaternary, "WLPH_VKLIW_05");
    }

    #[test]
    fn test_frequency_pattern() {
        assert_eq!(FREQUENCY_PATTERN, [0, 1, 0, 1]);
    }
}
