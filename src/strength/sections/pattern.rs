//! Pattern analysis section - detects repetitive and sequential patterns.

use secrecy::{ExposeSecret, SecretString};

use super::{Finding, SectionResult};

/// Analyzes password for repetitive and sequential patterns.
pub fn pattern_analysis_section(password: &SecretString) -> SectionResult {
    let chars: Vec<char> = password.expose_secret().chars().collect();
    if chars.len() < 3 {
        return None;
    }

    // "aaa" and longer
    let repeated = chars
        .windows(3)
        .any(|w| w[0] == w[1] && w[1] == w[2]);
    if repeated {
        return Some(Finding::Warning(
            "Repeated characters like \"aaa\" are easy to guess".to_string(),
        ));
    }

    // 4+ consecutive code points, ascending or descending
    if chars.len() >= 4 {
        let sequential = chars.windows(4).any(|window| {
            let ascending = window.windows(2).all(|w| w[1] as i64 == w[0] as i64 + 1);
            let descending = window.windows(2).all(|w| w[1] as i64 == w[0] as i64 - 1);
            ascending || descending
        });
        if sequential {
            return Some(Finding::Warning(
                "Sequences like \"abcd\" or \"1234\" are easy to guess".to_string(),
            ));
        }
    }

    None
}
