//! Bearer tokens for the waitlist admin endpoints.
//!
//! A token is `base64url(header).base64url(claims).base64url(mac)` where the
//! MAC is HMAC-SHA256 over the first two segments joined by `.`. Only the
//! header `{"alg":"HS256","typ":"JWT"}` and the claim set `{sub, iat, exp}`
//! exist; there is no key rotation or revocation list. Changing the secret
//! invalidates every outstanding token.
//!
//! ```
//! use admin_auth::{create_token, require_admin_bearer, Secret, ADMIN_SUBJECT};
//!
//! let secret = Secret::new("dev-waitlist-secret").unwrap();
//! let token = create_token(ADMIN_SUBJECT, &secret, 3600).unwrap();
//! let header = format!("Bearer {token}");
//! assert!(require_admin_bearer(Some(&header), &secret).is_ok());
//! ```

pub mod claims;
pub mod clock;
pub mod codec;
pub mod error;
pub mod guard;
pub mod issuer;
pub mod signer;
pub mod verifier;

pub use claims::{Claims, Header, Secret};
pub use error::{AuthError, DecodeError, Result};
pub use guard::{require_admin_bearer, require_admin_bearer_at, ADMIN_SUBJECT};
pub use issuer::{create_token, create_token_at};
pub use verifier::{verify_token, verify_token_at};
