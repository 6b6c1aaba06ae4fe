//! Common password list used by the heuristic oracle.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

const BUILTIN: &[&str] = &[
    "123456", "123456789", "12345678", "12345", "1234567", "1234567890", "111111",
    "000000", "123123", "password", "password1", "qwerty", "qwerty123", "abc123",
    "iloveyou", "admin", "welcome", "monkey", "dragon", "letmein", "football",
    "baseball", "sunshine", "princess", "master", "shadow", "superman", "trustno1",
];

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Returns the blacklist file path.
///
/// Priority:
/// 1. Environment variable `PASSGUARD_BLACKLIST_PATH`
/// 2. Default path `./assets/blacklist.txt`
pub fn get_blacklist_path() -> PathBuf {
    std::env::var("PASSGUARD_BLACKLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/blacklist.txt"))
}

/// Case-insensitive set of passwords that must never score well.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    entries: HashSet<String>,
}

impl Blacklist {
    /// A short list of the most common passwords, always available.
    pub fn builtin() -> Self {
        Self::from_words(BUILTIN.iter().copied())
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { entries }
    }

    /// Loads the list from the path given by [`get_blacklist_path`].
    pub fn from_env() -> Result<Self, BlacklistError> {
        Self::from_path(get_blacklist_path())
    }

    /// Loads one password per line from `path`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File is empty
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist initialization FAILED: FileNotFound {:?}", path);
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist initialization FAILED: Empty file {:?}", path);
            return Err(BlacklistError::EmptyFile);
        }

        let blacklist = Self::from_words(content.lines());

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Blacklist initialized: {} passwords from {:?}",
            blacklist.len(),
            path
        );

        Ok(blacklist)
    }

    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
