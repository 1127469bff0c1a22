//! HMAC-SHA256 over the token signing input.

use hmac::Mac;
use subtle::ConstantTimeEq;

use crate::claims::Secret;

pub const MAC_LEN: usize = 32;

pub fn sign(message: &[u8], secret: &Secret) -> [u8; MAC_LEN] {
    let mut mac = secret.mac();
    mac.update(message);

    let mut output = [0u8; MAC_LEN];
    output.copy_from_slice(&mac.finalize().into_bytes());
    output
}

/// Constant-time check of `candidate` against the MAC of `message`.
///
/// The candidate is copied into a zero-padded buffer of exactly `MAC_LEN`
/// bytes and both the content and the length comparison are always evaluated,
/// so the work done does not depend on the candidate's length or on where it
/// first differs.
pub fn verify(message: &[u8], secret: &Secret, candidate: &[u8]) -> bool {
    let expected = sign(message, secret);

    let mut normalized = [0u8; MAC_LEN];
    let take = candidate.len().min(MAC_LEN);
    normalized[..take].copy_from_slice(&candidate[..take]);

    let same_len = (candidate.len() as u64).ct_eq(&(MAC_LEN as u64));
    let same_bytes = expected[..].ct_eq(&normalized[..]);

    bool::from(same_len & same_bytes)
}
