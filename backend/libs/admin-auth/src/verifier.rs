//! Token verification.
//!
//! Checks run in a fixed order: segment structure, then the signature, and
//! only then the header and claim values. Nothing decoded from the token is
//! looked at before the MAC has been confirmed.

use crate::claims::{Claims, Header, Secret};
use crate::clock::now_unix;
use crate::codec::{decode, decode_json};
use crate::error::{AuthError, Result};
use crate::signer;

pub fn verify_token(token: &str, secret: &Secret) -> Result<Claims> {
    verify_token_at(token, secret, now_unix())
}

/// Verify `token` as if the clock read `now`.
///
/// A token is valid for every second strictly before its `exp`.
pub fn verify_token_at(token: &str, secret: &Secret, now: i64) -> Result<Claims> {
    let (head, body, signature) = split_segments(token)?;

    let signing_input = &token[..head.len() + 1 + body.len()];
    // An undecodable signature still goes through the full comparison.
    let candidate = decode(signature).unwrap_or_default();
    if !signer::verify(signing_input.as_bytes(), secret, &candidate) {
        return Err(AuthError::SignatureMismatch);
    }

    let header: Header = decode_json(head).map_err(|_| AuthError::Malformed)?;
    if !header.is_supported() {
        return Err(AuthError::Malformed);
    }

    let claims: Claims = decode_json(body).map_err(|_| AuthError::Malformed)?;
    if claims.sub.is_empty() {
        return Err(AuthError::Malformed);
    }

    if claims.exp <= now {
        return Err(AuthError::Expired);
    }

    Ok(claims)
}

fn split_segments(token: &str) -> Result<(&str, &str, &str)> {
    let mut parts = token.split('.');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(head), Some(body), Some(sig), None)
            if !head.is_empty() && !body.is_empty() && !sig.is_empty() =>
        {
            Ok((head, body, sig))
        }
        _ => Err(AuthError::Malformed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{encode, encode_json};
    use crate::issuer::create_token_at;
    use crate::signer::sign;

    const NOW: i64 = 1_700_000_000;

    fn secret() -> Secret {
        Secret::new("dev-waitlist-secret").unwrap()
    }

    /// Sign arbitrary header/claims JSON the way the issuer would.
    fn forge(header_json: &str, claims_json: &str) -> String {
        let head = encode(header_json);
        let body = encode(claims_json);
        let input = format!("{head}.{body}");
        let sig = encode(sign(input.as_bytes(), &secret()));
        format!("{input}.{sig}")
    }

    #[test]
    fn test_round_trip() {
        let token = create_token_at("admin", &secret(), 3600, NOW).unwrap();
        let claims = verify_token_at(&token, &secret(), NOW).unwrap();
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.iat, NOW);
        assert_eq!(claims.exp, NOW + 3600);
    }

    #[test]
    fn test_expiry_boundary() {
        let token = create_token_at("admin", &secret(), 3600, NOW).unwrap();
        assert!(verify_token_at(&token, &secret(), NOW + 3599).is_ok());
        assert!(matches!(
            verify_token_at(&token, &secret(), NOW + 3600),
            Err(AuthError::Expired)
        ));
        assert!(matches!(
            verify_token_at(&token, &secret(), NOW + 3601),
            Err(AuthError::Expired)
        ));
    }

    #[test]
    fn test_segment_count() {
        for token in ["", "a", "a.b", "a.b.c.d", "a..c", ".b.c", "a.b.", "..", "..."] {
            assert!(
                matches!(verify_token_at(token, &secret(), NOW), Err(AuthError::Malformed)),
                "{token:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_garbage_signature_segment() {
        let token = create_token_at("admin", &secret(), 3600, NOW).unwrap();
        let (input, _) = token.rsplit_once('.').unwrap();
        let tampered = format!("{input}.!!not-base64!!");
        assert!(matches!(
            verify_token_at(&tampered, &secret(), NOW),
            Err(AuthError::SignatureMismatch)
        ));
    }

    #[test]
    fn test_rejects_other_header() {
        let token = forge(
            r#"{"alg":"none","typ":"JWT"}"#,
            r#"{"sub":"admin","iat":1700000000,"exp":1700003600}"#,
        );
        assert!(matches!(
            verify_token_at(&token, &secret(), NOW),
            Err(AuthError::Malformed)
        ));

        let token = forge(
            r#"{"alg":"HS256","typ":"JWT","kid":"1"}"#,
            r#"{"sub":"admin","iat":1700000000,"exp":1700003600}"#,
        );
        assert!(matches!(
            verify_token_at(&token, &secret(), NOW),
            Err(AuthError::Malformed)
        ));
    }

    #[test]
    fn test_rejects_bad_claims() {
        let header = r#"{"alg":"HS256","typ":"JWT"}"#;
        for claims in [
            r#"{"sub":"","iat":1700000000,"exp":1700003600}"#,
            r#"{"sub":7,"iat":1700000000,"exp":1700003600}"#,
            r#"{"sub":"admin","iat":1700000000,"exp":"soon"}"#,
            r#"{"sub":"admin","iat":1700000000,"exp":1700003600.5}"#,
            r#"{"sub":"admin","iat":1700000000}"#,
            r#"{"sub":"admin","iat":1700000000,"exp":1700003600,"role":"root"}"#,
            "not json",
        ] {
            let token = forge(header, claims);
            assert!(
                matches!(verify_token_at(&token, &secret(), NOW), Err(AuthError::Malformed)),
                "{claims} should be malformed"
            );
        }
    }

    #[test]
    fn test_signature_checked_before_claims() {
        // expired and signed with another key: the key wins
        let other = Secret::new("other").unwrap();
        let token = create_token_at("admin", &other, 1, NOW - 10).unwrap();
        assert!(matches!(
            verify_token_at(&token, &secret(), NOW),
            Err(AuthError::SignatureMismatch)
        ));
    }

    #[test]
    fn test_encode_json_header_matches_forged_header() {
        let head = encode_json(&Header::hs256()).unwrap();
        assert_eq!(head, encode(r#"{"alg":"HS256","typ":"JWT"}"#));
    }
}
