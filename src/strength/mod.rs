//! Strength scoring.
//!
//! The core treats the scorer as an oracle behind [`StrengthOracle`]. A
//! heuristic implementation built from evaluation sections ships with the
//! crate; callers may plug in any other estimator.

mod blacklist;
mod evaluator;
mod sections;

use secrecy::SecretString;

pub use blacklist::{Blacklist, BlacklistError, get_blacklist_path};
pub use evaluator::HeuristicOracle;

/// Guessability estimate for one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    /// Score in `0..=4`.
    pub score: u8,
    /// Human readable crack time, never empty.
    pub crack_time_display: String,
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
}

impl StrengthReport {
    pub fn level(&self) -> StrengthLevel {
        StrengthLevel::from_score(self.score)
    }

    /// True when there is any feedback worth showing.
    pub fn has_feedback(&self) -> bool {
        self.warning.is_some() || !self.suggestions.is_empty()
    }
}

/// Labelled strength buckets, one per score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    /// Scores above 4 saturate to `Strong`.
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => StrengthLevel::VeryWeak,
            1 => StrengthLevel::Weak,
            2 => StrengthLevel::Fair,
            3 => StrengthLevel::Good,
            _ => StrengthLevel::Strong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "Very Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Fair => "Fair",
            StrengthLevel::Good => "Good",
            StrengthLevel::Strong => "Strong",
        }
    }

    /// Fill ratio of a strength meter, `(score + 1) / 5` in percent.
    pub fn meter_percent(self) -> u8 {
        (self as u8 + 1) * 20
    }
}

/// Estimates how hard a password is to guess.
///
/// Implementations must accept any input, including very long or unusual
/// strings, and must not panic. Callers never pass an empty password.
pub trait StrengthOracle: Send + Sync {
    fn score(&self, password: &SecretString) -> StrengthReport;
}
