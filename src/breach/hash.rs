//! SHA-1 digest split into a public prefix and a private suffix.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};

/// Hex characters sent to the corpus.
pub const PREFIX_LEN: usize = 5;
/// Hex characters kept local.
pub const SUFFIX_LEN: usize = 35;

/// An uppercase hex SHA-1 digest split for a k-anonymity range query.
#[derive(Clone, PartialEq, Eq)]
pub struct HashSplit {
    prefix: String,
    suffix: String,
}

impl HashSplit {
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

// The suffix identifies the password within its range; keep it out of logs.
impl fmt::Debug for HashSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashSplit")
            .field("prefix", &self.prefix)
            .field("suffix", &"[REDACTED]")
            .finish()
    }
}

/// Hashes the UTF-8 bytes of `password` and splits the 40 hex digits 5/35.
pub fn digest_and_split(password: &SecretString) -> HashSplit {
    let digest = Sha1::digest(password.expose_secret().as_bytes());
    let mut hex = hex::encode_upper(digest);
    let suffix = hex.split_off(PREFIX_LEN);
    HashSplit {
        prefix: hex,
        suffix,
    }
}

/// True for exactly five hex digits.
pub fn is_valid_prefix(prefix: &str) -> bool {
    prefix.len() == PREFIX_LEN && prefix.bytes().all(|b| b.is_ascii_hexdigit())
}
