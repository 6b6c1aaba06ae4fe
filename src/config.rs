//! Runtime configuration.

use std::time::Duration;

use crate::composer::ComposerConfig;
use crate::tokens::YearPolicy;

pub const DEFAULT_BREACH_API_BASE: &str = "https://api.pwnedpasswords.com";

/// Settings shared by the session, the breach client and the monitor.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the range API, without the `/range/` path.
    pub breach_api_base: String,
    pub request_timeout: Duration,
    pub user_agent: String,
    /// Quiet period after the last edit before a breach check runs.
    pub debounce: Duration,
    /// Shorter passwords are never checked against the corpus.
    pub min_breach_check_len: usize,
    pub composer: ComposerConfig,
    pub year_policy: YearPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            breach_api_base: DEFAULT_BREACH_API_BASE.to_string(),
            request_timeout: Duration::from_secs(10),
            user_agent: concat!("passguard/", env!("CARGO_PKG_VERSION")).to_string(),
            debounce: Duration::from_millis(1000),
            min_breach_check_len: 4,
            composer: ComposerConfig::rich(),
            year_policy: YearPolicy::Reverse,
        }
    }
}

impl Config {
    pub fn with_breach_api_base(mut self, base: impl Into<String>) -> Self {
        self.breach_api_base = base.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_min_breach_check_len(mut self, len: usize) -> Self {
        self.min_breach_check_len = len;
        self
    }

    pub fn with_composer(mut self, composer: ComposerConfig) -> Self {
        self.composer = composer;
        self
    }

    pub fn with_year_policy(mut self, policy: YearPolicy) -> Self {
        self.year_policy = policy;
        self
    }
}
