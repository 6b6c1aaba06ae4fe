//! Breach corpus lookups using the k-anonymity range protocol.
//!
//! Only the first five hex digits of the password's SHA-1 digest leave the
//! process. The corpus answers with every known suffix in that range and the
//! match happens locally.

mod hash;
mod range;

#[cfg(feature = "async")]
mod client;
#[cfg(feature = "async")]
mod monitor;

use std::future::Future;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

pub use hash::{HashSplit, PREFIX_LEN, SUFFIX_LEN, digest_and_split, is_valid_prefix};
pub use range::{BreachQueryResult, RangeRecord, find_suffix, parse_range_body, parse_record};

#[cfg(feature = "async")]
pub use client::HttpRangeLookup;
#[cfg(feature = "async")]
pub use monitor::{BreachMonitor, BreachOutcome, BreachOutcomes, InputDisposition};

/// Breach lookup failures. `Transport` and `Status` both mean the corpus
/// could not be consulted; the breach status is then unknown.
#[derive(Error, Debug)]
pub enum BreachError {
    #[cfg(feature = "async")]
    #[error("breach lookup request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("breach corpus answered with status {0}")]
    Status(u16),
    #[error("invalid hash prefix {0:?}")]
    InvalidPrefix(String),
}

/// What the caller may conclude about a password after a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreachStatus {
    Known(BreachQueryResult),
    /// The lookup failed. Neither "breached" nor "safe" may be reported.
    Unknown,
}

impl From<Result<BreachQueryResult, BreachError>> for BreachStatus {
    fn from(result: Result<BreachQueryResult, BreachError>) -> Self {
        match result {
            Ok(found) => BreachStatus::Known(found),
            Err(_) => BreachStatus::Unknown,
        }
    }
}

/// Source of range responses.
///
/// `fetch_range` receives a validated uppercase prefix and returns the raw
/// `SUFFIX:COUNT` body.
pub trait RangeLookup: Send + Sync {
    fn fetch_range(&self, prefix: &str) -> impl Future<Output = Result<String, BreachError>> + Send;
}

/// Passwords shorter than `min_len` characters are never sent for checking.
pub fn should_check(password: &SecretString, min_len: usize) -> bool {
    password.expose_secret().chars().count() >= min_len
}

/// Fetches and parses the range for `prefix`.
pub async fn lookup<L: RangeLookup>(source: &L, prefix: &str) -> Result<Vec<RangeRecord>, BreachError> {
    if !is_valid_prefix(prefix) {
        return Err(BreachError::InvalidPrefix(prefix.to_string()));
    }
    let body = source.fetch_range(&prefix.to_ascii_uppercase()).await?;
    Ok(parse_range_body(&body))
}

/// Hashes `password`, queries its range and checks the suffix locally.
pub async fn check_password<L: RangeLookup>(
    source: &L,
    password: &SecretString,
) -> Result<BreachQueryResult, BreachError> {
    let hash = digest_and_split(password);
    let records = lookup(source, hash.prefix()).await?;
    Ok(find_suffix(&records, hash.suffix()))
}
