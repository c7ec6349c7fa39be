//! Embedded spectrogram placeholders
//!
//! Three fixed PNGs compiled into the binary and handed out base64-encoded
//! for every upload, regardless of the audio content.

use base64::Engine;
use base64::engine::general_purpose;

static PRIMARY_PNG: &[u8] = include_bytes!("../../assets/spectrogram_primary.png");
static HIGH_RES_PNG: &[u8] = include_bytes!("../../assets/spectrogram_high_res.png");
static PHASE_PNG: &[u8] = include_bytes!("../../assets/spectrogram_phase.png");

/// The three spectrogram images of an analysis report, base64-encoded
#[derive(Debug, Clone)]
pub struct SpectrogramSet {
    pub primary: String,
    pub high_res: String,
    pub phase: String,
}

impl SpectrogramSet {
    /// Encode the embedded placeholders
    pub fn encoded() -> Self {
        let encode = |png: &[u8]| general_purpose::STANDARD.encode(png);
        Self {
            primary: encode(PRIMARY_PNG),
            high_res: encode(HIGH_RES_PNG),
            phase: encode(PHASE_PNG),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use base64::engine::general_purpose;

    #[test]
    fn test_encoded_set_round_trips_to_png_bytes() {
        let set = SpectrogramSet::encoded();

        for encoded in [&set.primary, &set.high_res, &set.phase] {
            let bytes = general_purpose::STANDARD.decode(encoded).unwrap();
            // PNG magic number
            assert_eq!(&bytes[..8], &b"\x89PNG\r\n\x1a\n"[..]);
        }
    }
}
