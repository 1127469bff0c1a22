//! Token issuance.

use crate::claims::{Claims, Header, Secret};
use crate::clock::now_unix;
use crate::codec::{encode, encode_json};
use crate::error::{AuthError, Result};
use crate::signer::sign;

/// Issue a token for `subject` that expires `ttl_seconds` from now.
pub fn create_token(subject: &str, secret: &Secret, ttl_seconds: u64) -> Result<String> {
    create_token_at(subject, secret, ttl_seconds, now_unix())
}

/// Issue a token as if the clock read `now`.
///
/// No nonce is mixed in: identical arguments within the same second give
/// identical tokens.
pub fn create_token_at(subject: &str, secret: &Secret, ttl_seconds: u64, now: i64) -> Result<String> {
    if subject.is_empty() {
        return Err(AuthError::EmptySubject);
    }
    if ttl_seconds == 0 {
        return Err(AuthError::InvalidTtl);
    }
    let exp = i64::try_from(ttl_seconds)
        .ok()
        .and_then(|ttl| now.checked_add(ttl))
        .ok_or(AuthError::InvalidTtl)?;

    let claims = Claims {
        sub: subject.to_string(),
        iat: now,
        exp,
    };

    let head = encode_json(&Header::hs256())?;
    let body = encode_json(&claims)?;
    let signing_input = format!("{head}.{body}");
    let signature = encode(sign(signing_input.as_bytes(), secret));

    Ok(format!("{signing_input}.{signature}"))
}
