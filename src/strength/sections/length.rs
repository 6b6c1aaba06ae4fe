//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

use super::{Finding, SectionResult};

pub(crate) const MIN_LENGTH: usize = 8;

/// Checks if the password meets minimum length requirements.
pub fn length_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(Finding::Suggestion(format!(
            "Use at least {} characters",
            MIN_LENGTH
        )));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        let pwd = SecretString::new("Short1!".to_string().into());
        assert_eq!(
            length_section(&pwd),
            Some(Finding::Suggestion("Use at least 8 characters".to_string()))
        );
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let pwd = SecretString::new("12345678".to_string().into());
        assert_eq!(length_section(&pwd), None);
    }

    #[test]
    fn test_length_section_counts_characters_not_bytes() {
        let pwd = SecretString::new("ééééééé".to_string().into());
        assert!(length_section(&pwd).is_some());
    }
}
