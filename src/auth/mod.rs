//! Request signing for the Yunxin server API.
//!
//! Every outbound request carries a fresh [`RequestSignature`]: a random
//! nonce, the current Unix timestamp, and a SHA-1 checksum proving
//! possession of the app secret without transmitting it.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use sha1::{Digest, Sha1};


/// Alphabet the nonce characters are drawn from, as fixed by the wire
/// protocol.
pub(crate) const NONCE_ALPHABET: &[u8] = b"0123456789abcdefghijklmn";

/// Nonce length in characters (the protocol maximum).
pub(crate) const NONCE_LEN: usize = 128;

/// Credentials for one Yunxin application.
///
/// Immutable for the lifetime of a client instance. The secret is never
/// logged; the `Debug` impl redacts it.
#[derive(Clone)]
pub struct Credentials {
    app_key: String,
    app_secret: String,
}

impl Credentials {
    /// Creates credentials from the key/secret pair assigned by the
    /// platform console.
    #[must_use]
    pub fn new(app_key: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            app_key: app_key.into(),
            app_secret: app_secret.into(),
        }
    }

    /// Returns the application key (sent in the `AppKey` header).
    #[must_use]
    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    pub(crate) fn app_secret(&self) -> &str {
        &self.app_secret
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("app_key", &self.app_key)
            .field("app_secret", &"<redacted>")
            .finish()
    }
}

/// Signing material for a single outbound request.
///
/// Built immediately before dispatch and discarded after the call
/// returns; signatures are never cached or reused across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSignature {
    /// Single-use random token, 128 characters from [`NONCE_ALPHABET`].
    pub nonce: String,
    /// Unix time in whole seconds, rendered as a decimal string.
    pub cur_time: String,
    /// Lowercase-hex SHA-1 of `app_secret || nonce || cur_time`.
    pub checksum: String,
}

impl RequestSignature {
    /// Builds a fresh signature for the given app secret using the
    /// system clock and the thread-local RNG.
    #[must_use]
    pub fn build(app_secret: &str) -> Self {
        let nonce = generate_nonce();
        let cur_time = unix_time_string();
        let checksum = checksum(app_secret, &nonce, &cur_time);
        Self {
            nonce,
            cur_time,
            checksum,
        }
    }
}

/// Computes the request checksum: lowercase-hex SHA-1 over the byte
/// concatenation `app_secret || nonce || cur_time`.
#[must_use]
pub fn checksum(app_secret: &str, nonce: &str, cur_time: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(app_secret.as_bytes());
    hasher.update(nonce.as_bytes());
    hasher.update(cur_time.as_bytes());
    hex::encode(hasher.finalize())
}

/// Draws [`NONCE_LEN`] characters independently and uniformly from
/// [`NONCE_ALPHABET`].
fn generate_nonce() -> String {
    let mut rng = rand::thread_rng();
    (0..NONCE_LEN)
        .map(|_| char::from(NONCE_ALPHABET[rng.gen_range(0..NONCE_ALPHABET.len())]))
        .collect()
}

/// Current Unix time in seconds as a decimal string.
///
/// A pre-epoch system clock (not expected in practice) renders as 0.
fn unix_time_string() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
        .to_string()
}
