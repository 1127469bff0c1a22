//! base64url (no padding) for raw bytes and canonical JSON segments.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::DecodeError;

pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Rejects padding, characters outside the URL-safe alphabet and lengths
/// no unpadded encoding can produce.
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    Ok(URL_SAFE_NO_PAD.decode(text)?)
}

/// Serializes in struct declaration order with no whitespace, so the same
/// value always yields the same bytes.
pub fn encode_json<T: Serialize>(value: &T) -> Result<String, DecodeError> {
    let bytes = serde_json::to_vec(value)?;
    Ok(encode(bytes))
}

pub fn decode_json<T: DeserializeOwned>(text: &str) -> Result<T, DecodeError> {
    let bytes = decode(text)?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    #[serde(deny_unknown_fields)]
    struct Sample {
        a: String,
        b: i64,
    }

    #[test]
    fn test_encode_strips_padding_and_uses_url_alphabet() {
        // 0xfb 0xff encodes to "+/8=" in the standard alphabet
        assert_eq!(encode([0xfb, 0xff]), "-_8");
        assert_eq!(encode(b"a"), "YQ");
        assert_eq!(encode(b""), "");
    }

    #[test]
    fn test_decode_inverts_encode() {
        let bytes: Vec<u8> = (0u8..=255).collect();
        assert_eq!(decode(&encode(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn test_decode_rejects_standard_alphabet() {
        assert!(matches!(decode("+/8"), Err(DecodeError::Base64(_))));
    }

    #[test]
    fn test_decode_rejects_padding() {
        assert!(decode("YQ==").is_err());
    }

    #[test]
    fn test_decode_rejects_impossible_length() {
        // 4n + 1 characters never come out of an encoder
        assert!(decode("YWJjZ").is_err());
    }

    #[test]
    fn test_encode_json_is_canonical() {
        let sample = Sample { a: "x".into(), b: 7 };
        let text = encode_json(&sample).unwrap();
        assert_eq!(decode(&text).unwrap(), br#"{"a":"x","b":7}"#);
        assert_eq!(text, encode_json(&sample).unwrap());
    }

    #[test]
    fn test_decode_json_rejects_extra_and_missing_fields() {
        let extra = encode(br#"{"a":"x","b":7,"c":1}"#);
        assert!(matches!(
            decode_json::<Sample>(&extra),
            Err(DecodeError::Json(_))
        ));

        let missing = encode(br#"{"a":"x"}"#);
        assert!(decode_json::<Sample>(&missing).is_err());

        let garbage = encode(b"not json");
        assert!(decode_json::<Sample>(&garbage).is_err());
    }
}
