//! Heuristic strength oracle - runs the evaluation sections and turns
//! their findings into a [`StrengthReport`].

use std::collections::HashSet;

use secrecy::{ExposeSecret, SecretString};

use super::sections::{
    Finding, SectionResult, blacklist_section, character_variety_section, length_section,
    pattern_analysis_section,
};
use super::{Blacklist, StrengthOracle, StrengthReport};

/// Offline attack against a slow hash, guesses per second.
const GUESSES_PER_SECOND: f64 = 1e4;

/// Scores passwords from length, character variety, known patterns and a
/// common-password blacklist.
#[derive(Debug, Clone)]
pub struct HeuristicOracle {
    blacklist: Blacklist,
}

impl Default for HeuristicOracle {
    fn default() -> Self {
        Self::new(Blacklist::builtin())
    }
}

impl HeuristicOracle {
    pub fn new(blacklist: Blacklist) -> Self {
        Self { blacklist }
    }

    fn points(pwd: &str, findings: usize) -> i64 {
        let pwd_len = pwd.chars().count();

        // Length bonus: up to 20 points (0.5 per character, max 20)
        let mut points = (pwd_len as f64 * 0.5).min(20.0) as i64;

        // Character variety: up to 60 points (15 per type)
        let (_, variety_count) = charset(pwd);
        points += (variety_count * 15) as i64;

        if pwd_len > 16 {
            points += 10;
        } else if pwd_len > 12 {
            points += 5;
        }

        let special_count = pwd.chars().filter(|c| !c.is_alphanumeric()).count();
        if special_count >= 2 {
            points += 5;
        }

        let unique_count = pwd.chars().collect::<HashSet<_>>().len();
        if unique_count >= 16 {
            points += 10;
        } else if unique_count >= 12 {
            points += 5;
        }

        points -= findings as i64 * 10;
        points.clamp(0, 100)
    }
}

impl StrengthOracle for HeuristicOracle {
    fn score(&self, password: &SecretString) -> StrengthReport {
        let pwd = password.expose_secret();

        let blacklisted = blacklist_section(password, &self.blacklist);
        let is_blacklisted = blacklisted.is_some();

        let pattern = pattern_analysis_section(password);
        let has_pattern = pattern.is_some();

        let sections: [SectionResult; 4] = [
            blacklisted,
            pattern,
            length_section(password),
            character_variety_section(password),
        ];
        let findings: Vec<Finding> = sections.into_iter().flatten().collect();

        let points = if is_blacklisted {
            0
        } else {
            Self::points(pwd, findings.len())
        };
        let score = match points {
            0..=19 => 0,
            20..=39 => 1,
            40..=59 => 2,
            60..=79 => 3,
            _ => 4,
        };

        let seconds = if is_blacklisted {
            0.0
        } else {
            crack_seconds(pwd, has_pattern)
        };

        let mut warning = None;
        let mut suggestions = Vec::new();
        for finding in findings {
            match finding {
                Finding::Warning(w) if warning.is_none() => warning = Some(w),
                Finding::Warning(w) | Finding::Suggestion(w) => suggestions.push(w),
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(score, "password scored");

        StrengthReport {
            score,
            crack_time_display: display_time(seconds),
            warning,
            suggestions,
        }
    }
}

/// Returns the brute-force alphabet size and how many character classes
/// contribute to it.
fn charset(pwd: &str) -> (u32, usize) {
    let classes = [
        (pwd.chars().any(|c| c.is_lowercase()), 26),
        (pwd.chars().any(|c| c.is_uppercase()), 26),
        (pwd.chars().any(|c| c.is_ascii_digit()), 10),
        (pwd.chars().any(|c| !c.is_alphanumeric()), 33),
    ];
    classes
        .iter()
        .filter(|(present, _)| *present)
        .fold((0, 0), |(size, count), (_, n)| (size + n, count + 1))
}

fn crack_seconds(pwd: &str, has_pattern: bool) -> f64 {
    let (size, _) = charset(pwd);
    let mut len = pwd.chars().count() as i32;
    // Patterned runs add almost nothing to the search space.
    if has_pattern {
        len = (len - 3).max(0);
    }
    let guesses = (size as f64).powi(len) / 2.0;
    guesses / GUESSES_PER_SECOND
}

fn display_time(seconds: f64) -> String {
    const MINUTE: f64 = 60.0;
    const HOUR: f64 = MINUTE * 60.0;
    const DAY: f64 = HOUR * 24.0;
    const MONTH: f64 = DAY * 31.0;
    const YEAR: f64 = MONTH * 12.0;
    const CENTURY: f64 = YEAR * 100.0;
    const UNITS: [(f64, f64, &str); 6] = [
        (1.0, MINUTE, "second"),
        (MINUTE, HOUR, "minute"),
        (HOUR, DAY, "hour"),
        (DAY, MONTH, "day"),
        (MONTH, YEAR, "month"),
        (YEAR, CENTURY, "year"),
    ];

    if seconds < 1.0 {
        return "less than a second".to_string();
    }

    // Rounded amounts that reach the next unit move up to it.
    for (size, next, unit) in UNITS {
        let amount = (seconds / size).round();
        if amount * size < next {
            let amount = amount as u64;
            return if amount == 1 {
                format!("1 {}", unit)
            } else {
                format!("{} {}s", amount, unit)
            };
        }
    }
    "centuries".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(pwd: &str) -> StrengthReport {
        HeuristicOracle::default().score(&SecretString::new(pwd.to_string().into()))
    }

    #[test]
    fn test_weak_short_password() {
        let report = score("abc");
        assert_eq!(report.score, 0);
        assert_eq!(report.crack_time_display, "less than a second");
        assert!(report.has_feedback());
    }

    #[test]
    fn test_medium_password() {
        let report = score("MyPass123!");
        assert!(
            (2..=3).contains(&report.score),
            "expected a middling score, got {}",
            report.score
        );
    }

    #[test]
    fn test_strong_password() {
        let report = score("VeryStrongPassword123!@#");
        assert_eq!(report.score, 4);
        assert_eq!(report.crack_time_display, "centuries");
        assert!(report.warning.is_none());
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_blacklisted_password_warns() {
        let report = score("Password");
        assert_eq!(report.score, 0);
        assert_eq!(report.warning.as_deref(), Some("This is a very common password"));
    }

    #[test]
    fn test_pattern_shortens_crack_time() {
        assert!(crack_seconds("Qz7!Km2@", true) < crack_seconds("Qz7!Km2@", false));

        let report = score("Abcd1234!xyzQ");
        assert!(report.warning.as_deref().is_some_and(|w| w.starts_with("Sequences")));
    }

    #[test]
    fn test_custom_blacklist() {
        let oracle = HeuristicOracle::new(Blacklist::from_words(["Tr0ub4dor&3"]));
        let report = oracle.score(&SecretString::new("tr0ub4dor&3".to_string().into()));
        assert_eq!(report.score, 0);
    }

    #[test]
    fn test_score_bounds_and_display() {
        let inputs = [
            "a",
            "password",
            "MyPass123!",
            "Paris42Rex!",
            "zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz",
            "ñöñ-äscii ✓ 密码",
            "VeryStrongPassword123!@#",
        ];
        for pwd in inputs {
            let report = score(pwd);
            assert!(report.score <= 4, "score out of range for {:?}", pwd);
            assert!(!report.crack_time_display.is_empty());
        }
    }

    #[test]
    fn test_display_time_units() {
        assert_eq!(display_time(0.5), "less than a second");
        assert_eq!(display_time(1.0), "1 second");
        assert_eq!(display_time(150.0), "3 minutes");
        assert_eq!(display_time(3.0 * 3600.0), "3 hours");
        assert_eq!(display_time(1e12), "centuries");
    }

    #[test]
    fn test_display_time_rounds_up_into_next_unit() {
        assert_eq!(display_time(59.4), "59 seconds");
        assert_eq!(display_time(59.6), "1 minute");
        assert_eq!(display_time(3599.0), "1 hour");
        assert_eq!(display_time(86_399.0), "1 day");
        assert_eq!(display_time(31.0 * 86_400.0 - 1.0), "1 month");
        assert_eq!(display_time(3_214_080_000.0 - 1.0), "centuries");
    }
}
