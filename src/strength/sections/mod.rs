//! Password evaluation sections
//!
//! Each section analyzes a specific aspect of password strength.

mod blacklist;
mod length;
mod pattern;
mod variety;

pub use blacklist::blacklist_section;
pub use length::length_section;
pub use pattern::pattern_analysis_section;
pub use variety::character_variety_section;

/// What a failed section reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// The password is actively guessable; shown as the report warning.
    Warning(String),
    /// Something the user could improve.
    Suggestion(String),
}

/// Result type for section evaluation functions.
/// - `Some(finding)` - Section failed
/// - `None` - Section passed
pub type SectionResult = Option<Finding>;
