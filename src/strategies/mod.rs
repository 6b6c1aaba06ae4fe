//! Password composition strategies
//!
//! Each strategy turns the same token list into a structurally different
//! password. All of them end with one random symbol.

mod classic;
mod leetspeak;
mod mixed_case;
mod separated;
mod simple;

use rand::Rng;

pub use classic::classic;
pub use leetspeak::{leet_char, leetspeak};
pub use mixed_case::mixed_case;
pub use separated::separated;
pub use simple::simple;

use crate::composer::ComposerConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Shuffled tokens, one symbol.
    Simple,
    /// Tokens in order, one symbol, one two-digit number.
    Classic,
    /// Tokens joined by one random separator, one symbol.
    Separated,
    /// Alternating lower/upper tokens with random digits between them.
    MixedCase,
    /// Tokens in order with leetspeak substitutions.
    Leetspeak,
}

impl Strategy {
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Simple => "Simple",
            Strategy::Classic => "Classic",
            Strategy::Separated => "Separated",
            Strategy::MixedCase => "Mixed Case",
            Strategy::Leetspeak => "Leetspeak",
        }
    }

    pub fn compose<R: Rng + ?Sized>(
        self,
        tokens: &[String],
        config: &ComposerConfig,
        rng: &mut R,
    ) -> String {
        match self {
            Strategy::Simple => simple(tokens, config, rng),
            Strategy::Classic => classic(tokens, config, rng),
            Strategy::Separated => separated(tokens, config, rng),
            Strategy::MixedCase => mixed_case(tokens, config, rng),
            Strategy::Leetspeak => leetspeak(tokens, config, rng),
        }
    }
}

// Alphabets are non-empty, enforced by `ComposerConfig::new`.
fn pick<R: Rng + ?Sized>(alphabet: &[char], rng: &mut R) -> char {
    alphabet[rng.gen_range(0..alphabet.len())]
}

pub(crate) fn random_symbol<R: Rng + ?Sized>(config: &ComposerConfig, rng: &mut R) -> char {
    pick(config.symbols(), rng)
}

pub(crate) fn random_separator<R: Rng + ?Sized>(config: &ComposerConfig, rng: &mut R) -> char {
    pick(config.separators(), rng)
}

/// Bound used when a config without a number range reaches a numbering
/// strategy through [`Strategy::compose`].
const FALLBACK_MAX_NUMBER: u32 = 99;

/// Zero-padded to at least two digits.
pub(crate) fn random_number<R: Rng + ?Sized>(config: &ComposerConfig, rng: &mut R) -> String {
    let max = config.max_number().unwrap_or(FALLBACK_MAX_NUMBER);
    format!("{:02}", rng.gen_range(0..=max))
}

pub(crate) fn random_digit<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(b'0' + rng.gen_range(0..10u8))
}
