//! Password checking and mnemonic password generation
//!
//! This library scores password strength, checks passwords against a
//! public breach corpus without revealing them, and builds memorable
//! passwords from a short questionnaire.
//!
//! # Features
//!
//! - `async` (default): Enables the HTTP breach client, debounced breach
//!   checks and `Session::check_breach`
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PASSGUARD_BLACKLIST_PATH`: Custom path to the common password list
//!   read by `Blacklist::from_env` (default: `./assets/blacklist.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use passguard::{Config, Effect, HeuristicOracle, Session};
//! use secrecy::SecretString;
//!
//! let mut session = Session::standard(Config::default())
//!     .expect("built-in prompts are valid")
//!     .with_oracle(HeuristicOracle::default());
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! if let Effect::Strength(report) = session.evaluate(&password) {
//!     println!("Score: {} ({})", report.score, report.level().label());
//!     println!("Time to crack: {}", report.crack_time_display);
//! }
//!
//! session.start();
//! session.submit_answer("Alex").unwrap();
//! session.advance().unwrap();
//! // ... answer the remaining prompts, then:
//! if let Ok(Effect::Variants { variants, .. }) = session.generate() {
//!     for v in variants {
//!         println!("{}: {}", v.strategy_label, v.text);
//!     }
//! }
//! ```
//!
//! # Breach checks
//!
//! ```rust,no_run
//! # #[cfg(feature = "async")]
//! # async fn demo() -> Result<(), passguard::BreachError> {
//! use passguard::{BreachMonitor, Config, HttpRangeLookup};
//! use secrecy::SecretString;
//!
//! let config = Config::default();
//! let (mut monitor, mut outcomes) = BreachMonitor::new(HttpRangeLookup::new(&config)?, &config);
//!
//! monitor.on_input(&SecretString::new("hunter2hunter2".to_string().into()));
//! if let Some(outcome) = outcomes.recv().await {
//!     println!("{:?}", outcome.status);
//! }
//! # Ok(())
//! # }
//! ```

// Internal modules
mod breach;
mod composer;
mod config;
mod questionnaire;
mod session;
mod strategies;
mod strength;
mod tokens;

// Public API
pub use breach::{
    BreachError, BreachQueryResult, BreachStatus, HashSplit, PREFIX_LEN, RangeLookup,
    RangeRecord, SUFFIX_LEN, check_password, digest_and_split, find_suffix, is_valid_prefix,
    lookup, parse_range_body, parse_record, should_check,
};
pub use composer::{
    ComposerConfig, ComposerError, PasswordBatch, PasswordVariant, compose, explain,
};
pub use config::{Config, DEFAULT_BREACH_API_BASE};
pub use questionnaire::{
    AnswerSet, Prompt, PromptKind, Questionnaire, QuestionnaireError, classic_prompts,
    standard_prompts,
};
pub use session::{Effect, PromptView, ScoredVariant, Session};
pub use strategies::{Strategy, leet_char};
pub use strength::{
    Blacklist, BlacklistError, HeuristicOracle, StrengthLevel, StrengthOracle, StrengthReport,
    get_blacklist_path,
};
pub use tokens::{Case, TokenExtractor, TokenRule, YearPolicy, capitalize, truncate};

#[cfg(feature = "async")]
pub use breach::{
    BreachMonitor, BreachOutcome, BreachOutcomes, HttpRangeLookup, InputDisposition,
};
