//! Character variety section - checks for uppercase, lowercase, numbers, special chars.

use secrecy::{ExposeSecret, SecretString};

use super::{Finding, SectionResult};

/// Checks if the password contains a variety of character types.
pub fn character_variety_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let has_upper = pwd.chars().any(|c| c.is_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_lowercase());
    let has_digit = pwd.chars().any(|c| c.is_ascii_digit());
    let has_special = pwd.chars().any(|c| !c.is_alphanumeric());

    let missing: Vec<_> = [
        (!has_upper).then_some("uppercase letters"),
        (!has_lower).then_some("lowercase letters"),
        (!has_digit).then_some("numbers"),
        (!has_special).then_some("symbols"),
    ]
    .into_iter()
    .flatten()
    .collect();

    if !missing.is_empty() {
        return Some(Finding::Suggestion(format!("Add {}", missing.join(", "))));
    }
    None
}
