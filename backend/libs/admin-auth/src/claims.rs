use std::fmt;

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::error::{AuthError, Result};

pub(crate) type HmacSha256 = Hmac<Sha256>;

pub const ALGORITHM: &str = "HS256";
pub const TOKEN_TYPE: &str = "JWT";

/// The one header this crate produces and accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Header {
    pub alg: String,
    pub typ: String,
}

impl Header {
    pub fn hs256() -> Self {
        Self {
            alg: ALGORITHM.to_string(),
            typ: TOKEN_TYPE.to_string(),
        }
    }

    pub fn is_supported(&self) -> bool {
        self.alg == ALGORITHM && self.typ == TOKEN_TYPE
    }
}

/// Token payload. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Claims {
    /// Subject (the admin identity)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Shared HMAC key, keyed once at start-up and read-only afterwards.
///
/// Holds the prepared MAC state rather than the raw bytes, so signing never
/// has to handle a key error.
#[derive(Clone)]
pub struct Secret {
    mac: HmacSha256,
}

impl Secret {
    pub fn new(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let bytes = bytes.as_ref();
        if bytes.is_empty() {
            return Err(AuthError::EmptySecret);
        }
        let mac = HmacSha256::new_from_slice(bytes).map_err(|_| AuthError::EmptySecret)?;
        Ok(Self { mac })
    }

    pub(crate) fn mac(&self) -> HmacSha256 {
        self.mac.clone()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}
