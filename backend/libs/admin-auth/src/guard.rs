//! Bearer check for the admin-only routes.

use tracing::debug;

use crate::claims::Secret;
use crate::clock::now_unix;
use crate::error::{AuthError, Result};
use crate::verifier::verify_token_at;

/// The only subject allowed through the admin guard.
pub const ADMIN_SUBJECT: &str = "admin";

const BEARER_PREFIX: &str = "Bearer ";

pub fn require_admin_bearer(header: Option<&str>, secret: &Secret) -> Result<()> {
    require_admin_bearer_at(header, secret, now_unix())
}

/// Check an `Authorization` header value as if the clock read `now`.
pub fn require_admin_bearer_at(header: Option<&str>, secret: &Secret, now: i64) -> Result<()> {
    let result = check(header, secret, now);
    if let Err(ref err) = result {
        debug!(reason = %err, "admin bearer rejected");
    }
    result
}

fn check(header: Option<&str>, secret: &Secret, now: i64) -> Result<()> {
    let token = header
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .ok_or(AuthError::MissingCredential)?
        .trim();

    let claims = verify_token_at(token, secret, now)?;
    if claims.sub != ADMIN_SUBJECT {
        return Err(AuthError::InvalidSubject);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issuer::create_token_at;

    const NOW: i64 = 1_700_000_000;

    fn secret() -> Secret {
        Secret::new("dev-waitlist-secret").unwrap()
    }

    #[test]
    fn test_accepts_admin_token() {
        let token = create_token_at(ADMIN_SUBJECT, &secret(), 60, NOW).unwrap();
        let header = format!("Bearer {token}");
        assert!(require_admin_bearer_at(Some(&header), &secret(), NOW).is_ok());
    }

    #[test]
    fn test_trims_token() {
        let token = create_token_at(ADMIN_SUBJECT, &secret(), 60, NOW).unwrap();
        let header = format!("Bearer   {token}  ");
        assert!(require_admin_bearer_at(Some(&header), &secret(), NOW).is_ok());
    }

    #[test]
    fn test_missing_or_wrong_scheme() {
        let token = create_token_at(ADMIN_SUBJECT, &secret(), 60, NOW).unwrap();
        for header in [
            None,
            Some(""),
            Some("Bearer"),
            Some(token.as_str()),
            Some("bearer x.y.z"),
            Some("Basic YWRtaW46YWRtaW4xMjM="),
        ] {
            assert!(matches!(
                require_admin_bearer_at(header, &secret(), NOW),
                Err(AuthError::MissingCredential)
            ));
        }
    }

    #[test]
    fn test_empty_bearer_is_malformed() {
        assert!(matches!(
            require_admin_bearer_at(Some("Bearer   "), &secret(), NOW),
            Err(AuthError::Malformed)
        ));
    }

    #[test]
    fn test_rejects_other_subject() {
        let token = create_token_at("editor", &secret(), 60, NOW).unwrap();
        let header = format!("Bearer {token}");
        assert!(matches!(
            require_admin_bearer_at(Some(&header), &secret(), NOW),
            Err(AuthError::InvalidSubject)
        ));
    }

    #[test]
    fn test_propagates_expiry() {
        let token = create_token_at(ADMIN_SUBJECT, &secret(), 60, NOW).unwrap();
        let header = format!("Bearer {token}");
        assert!(matches!(
            require_admin_bearer_at(Some(&header), &secret(), NOW + 60),
            Err(AuthError::Expired)
        ));
    }
}
