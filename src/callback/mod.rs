//! Verification of inbound event-copy callbacks.
//!
//! The platform pushes server-to-server notifications (message copies,
//! login events, …) to a configured endpoint and signs each one with
//! the shared app secret. Callers recompute the checksum over the raw
//! request body and `CurTime` header and compare it against the
//! `CheckSum` the platform supplied.

use sha1::{Digest, Sha1};

#[cfg(test)]
mod mod_tests;

/// Returns whether an inbound callback was signed with `app_secret`.
///
/// The expected value is the lowercase-hex SHA-1 of
/// `app_secret || hex(MD5(body)) || cur_time`. The comparison runs in
/// constant time over the supplied checksum.
///
/// A mismatch is a normal outcome, not a fault: the caller decides
/// whether to reject the request or escalate.
#[must_use]
pub fn is_legal_checksum(app_secret: &str, body: &[u8], cur_time: &str, checksum: &str) -> bool {
    let expected = expected_checksum(app_secret, body, cur_time);
    constant_time_eq(expected.as_bytes(), checksum.as_bytes())
}

/// Computes the checksum the platform is expected to send for `body`.
#[must_use]
pub fn expected_checksum(app_secret: &str, body: &[u8], cur_time: &str) -> String {
    let body_md5 = format!("{:x}", md5::compute(body));

    let mut hasher = Sha1::new();
    hasher.update(app_secret.as_bytes());
    hasher.update(body_md5.as_bytes());
    hasher.update(cur_time.as_bytes());
    hex::encode(hasher.finalize())
}

/// Byte-for-byte comparison without data-dependent early exit.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
