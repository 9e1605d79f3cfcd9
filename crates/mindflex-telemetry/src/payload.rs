//! Wire format: decimal string encoding of a signed 16-bit ADC sample

use mindflex_core::{MindflexError, MindflexResult};

/// Encode a raw ADC sample as its decimal string payload.
pub fn encode_sample(adc: i16) -> String {
    adc.to_string()
}

/// Parse a message payload into a raw ADC sample.
///
/// Surrounding ASCII whitespace is tolerated; anything that does not parse
/// as an i16 (including out-of-range values) is a malformed payload.
pub fn parse_sample(payload: &[u8]) -> MindflexResult<i16> {
    let text = std::str::from_utf8(payload).map_err(|_| MindflexError::MalformedPayload {
        payload: String::from_utf8_lossy(payload).into_owned(),
    })?;

    text.trim()
        .parse::<i16>()
        .map_err(|_| MindflexError::MalformedPayload {
            payload: text.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_is_plain_decimal() {
        assert_eq!(encode_sample(16384), "16384");
        assert_eq!(encode_sample(-32768), "-32768");
        assert_eq!(encode_sample(0), "0");
    }

    #[test]
    fn test_parse_accepts_whitespace() {
        assert_eq!(parse_sample(b" 1234\n").unwrap(), 1234);
        assert_eq!(parse_sample(b"-17").unwrap(), -17);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(matches!(
            parse_sample(b"hello"),
            Err(MindflexError::MalformedPayload { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        // Fits a u16 but not an i16
        assert!(parse_sample(b"40000").is_err());
    }

    #[test]
    fn test_parse_rejects_invalid_utf8() {
        assert!(parse_sample(&[0xff, 0xfe]).is_err());
    }
}
