use thiserror::Error;

/// Failure to turn a token segment back into bytes or a typed value.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid base64url segment: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid JSON segment: {0}")]
    Json(#[from] serde_json::Error),
}

/// Every way issuing or checking an admin token can fail.
///
/// The variants exist for local logic and tests. Anything that answers an
/// HTTP request must collapse them into a single unauthorized outcome.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("malformed token")]
    Malformed,

    #[error("signature mismatch")]
    SignatureMismatch,

    #[error("token expired")]
    Expired,

    #[error("missing bearer credential")]
    MissingCredential,

    #[error("subject is not the admin identity")]
    InvalidSubject,

    #[error("subject must not be empty")]
    EmptySubject,

    #[error("ttl must be a positive number of seconds")]
    InvalidTtl,

    #[error("signing secret must not be empty")]
    EmptySecret,
}

pub type Result<T> = std::result::Result<T, AuthError>;
