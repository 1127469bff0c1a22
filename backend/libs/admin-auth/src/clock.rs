use chrono::Utc;

/// Current wall-clock time as whole seconds since the Unix epoch.
///
/// Expiry checks assume verifiers and issuers share a roughly synchronized
/// clock; skew between hosts shifts the effective TTL.
pub fn now_unix() -> i64 {
    Utc::now().timestamp()
}
