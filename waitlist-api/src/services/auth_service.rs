use admin_auth::{create_token, require_admin_bearer, Secret, ADMIN_SUBJECT};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::config::AdminConfig;
use crate::error::{AppError, Result};

/// Admin login and bearer checks, built once from configuration.
pub struct AuthService {
    username_digest: [u8; 32],
    password_digest: [u8; 32],
    secret: Secret,
    ttl_seconds: u64,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish_non_exhaustive()
    }
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}

impl AuthService {
    pub fn new(config: &AdminConfig) -> anyhow::Result<Self> {
        let secret = Secret::new(config.jwt_secret.as_bytes())?;
        if config.jwt_ttl_seconds == 0 {
            anyhow::bail!("admin token ttl must be greater than zero");
        }

        Ok(Self {
            username_digest: digest(&config.username),
            password_digest: digest(&config.password),
            secret,
            ttl_seconds: config.jwt_ttl_seconds,
        })
    }

    /// Check the configured credentials and mint an admin token.
    ///
    /// Both fields are always compared, over fixed-size digests, and a
    /// mismatch in either gives the same error.
    pub fn login(&self, username: &str, password: &str) -> Result<String> {
        let username_ok = self.username_digest[..].ct_eq(&digest(username)[..]);
        let password_ok = self.password_digest[..].ct_eq(&digest(password)[..]);
        if !bool::from(username_ok & password_ok) {
            tracing::info!("Rejected admin login");
            return Err(AppError::InvalidCredentials);
        }

        let token = create_token(ADMIN_SUBJECT, &self.secret, self.ttl_seconds)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))?;
        tracing::info!("Admin logged in");
        Ok(token)
    }

    /// Verify an `Authorization` header value. Every failure is `Unauthorized`.
    pub fn authorize(&self, header: Option<&str>) -> Result<()> {
        require_admin_bearer(header, &self.secret)?;
        Ok(())
    }
}
