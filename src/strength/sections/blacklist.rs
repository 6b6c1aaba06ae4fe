//! Blacklist section - checks if password is in common password list.

use secrecy::{ExposeSecret, SecretString};

use super::{Finding, SectionResult};
use crate::strength::Blacklist;

/// Checks if the password is in the blacklist of common passwords.
pub fn blacklist_section(password: &SecretString, blacklist: &Blacklist) -> SectionResult {
    if blacklist.contains(password.expose_secret()) {
        return Some(Finding::Warning(
            "This is a very common password".to_string(),
        ));
    }
    None
}
