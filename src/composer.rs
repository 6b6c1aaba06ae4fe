//! Password composition from extracted tokens.
//!
//! Randomness comes from whatever [`Rng`] the caller passes, the thread RNG
//! by default. The result is a memorable password, not a cryptographically
//! strong secret: most of its content comes from the user's own answers and
//! the random parts (one symbol, a few digits, a separator, an ordering) add
//! only a handful of bits. Check variants with a strength oracle before use.

use rand::Rng;
use thiserror::Error;

use crate::questionnaire::AnswerSet;
use crate::strategies::Strategy;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ComposerError {
    #[error("the symbol alphabet is empty")]
    EmptySymbols,
    #[error("a separated strategy needs at least one separator")]
    EmptySeparators,
    #[error("no composition strategy configured")]
    NoStrategies,
    #[error("the classic strategy needs a number range")]
    MissingNumberRange,
}

/// Alphabets and the list of strategies, one variant per strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerConfig {
    symbols: Vec<char>,
    separators: Vec<char>,
    /// Upper bound of the appended number, for strategies that append one.
    max_number: Option<u32>,
    strategies: Vec<Strategy>,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self::rich()
    }
}

impl ComposerConfig {
    pub fn new(
        symbols: &str,
        separators: &str,
        max_number: Option<u32>,
        strategies: Vec<Strategy>,
    ) -> Result<Self, ComposerError> {
        let symbols: Vec<char> = symbols.chars().collect();
        let separators: Vec<char> = separators.chars().collect();
        if symbols.is_empty() {
            return Err(ComposerError::EmptySymbols);
        }
        if strategies.is_empty() {
            return Err(ComposerError::NoStrategies);
        }
        if separators.is_empty() && strategies.contains(&Strategy::Separated) {
            return Err(ComposerError::EmptySeparators);
        }
        if max_number.is_none() && strategies.contains(&Strategy::Classic) {
            return Err(ComposerError::MissingNumberRange);
        }
        Ok(Self {
            symbols,
            separators,
            max_number,
            strategies,
        })
    }

    /// Four variants over a ten-symbol alphabet.
    pub fn rich() -> Self {
        Self {
            symbols: "!@#$%^&*?+".chars().collect(),
            separators: "_-.".chars().collect(),
            max_number: None,
            strategies: vec![
                Strategy::Simple,
                Strategy::Separated,
                Strategy::MixedCase,
                Strategy::Leetspeak,
            ],
        }
    }

    /// One in-order password with a symbol and a number below 100.
    pub fn classic() -> Self {
        Self {
            symbols: "!@#$%&*".chars().collect(),
            separators: Vec::new(),
            max_number: Some(99),
            strategies: vec![Strategy::Classic],
        }
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn separators(&self) -> &[char] {
        &self.separators
    }

    pub fn max_number(&self) -> Option<u32> {
        self.max_number
    }

    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }
}

/// One generated password and the strategy that built it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordVariant {
    pub text: String,
    pub strategy: Strategy,
}

impl PasswordVariant {
    pub fn strategy_label(&self) -> &'static str {
        self.strategy.label()
    }
}

/// A generation result. Replaced wholesale by the next generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordBatch {
    pub variants: Vec<PasswordVariant>,
    pub explanation: String,
}

/// Builds one variant per configured strategy.
pub fn compose<R: Rng + ?Sized>(
    tokens: &[String],
    config: &ComposerConfig,
    rng: &mut R,
) -> Vec<PasswordVariant> {
    config
        .strategies()
        .iter()
        .map(|&strategy| PasswordVariant {
            text: strategy.compose(tokens, config, rng),
            strategy,
        })
        .collect()
}

const EXPLAINED: [(&str, &str); 6] = [
    ("user_name", "your name"),
    ("favorite_place", "your favorite place"),
    ("pet_name", "your pet's name"),
    ("memorable_word", "your meaningful word"),
    ("hobby", "your hobby"),
    ("superhero", "your superhero"),
];

/// Describes which answers went into a batch.
pub fn explain(answers: &AnswerSet) -> String {
    let parts: Vec<&str> = EXPLAINED
        .iter()
        .filter(|(id, _)| answers.has_answer(id))
        .map(|(_, phrase)| *phrase)
        .collect();
    if parts.is_empty() {
        return "This password combines modified numbers and symbols to create something both secure and memorable for you.".to_string();
    }
    format!(
        "This password combines {}, modified numbers, and symbols to create something both secure and memorable for you.",
        parts.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::leet_char;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn tokens() -> Vec<String> {
        vec!["Paris".into(), "42".into(), "Rex".into()]
    }

    #[test]
    fn test_rich_compose_yields_four_labelled_variants() {
        let config = ComposerConfig::rich();
        let mut rng = StdRng::seed_from_u64(42);
        let variants = compose(&tokens(), &config, &mut rng);

        let labels: Vec<_> = variants.iter().map(|v| v.strategy_label()).collect();
        assert_eq!(labels, ["Simple", "Separated", "Mixed Case", "Leetspeak"]);
        for variant in &variants {
            assert!(!variant.text.is_empty());
            assert!(
                variant.text.chars().any(|c| config.symbols().contains(&c)),
                "no symbol in {}",
                variant.text
            );
        }
    }

    #[test]
    fn test_only_classic_preset_carries_a_number_range() {
        assert_eq!(ComposerConfig::rich().max_number(), None);
        assert!(!ComposerConfig::rich().strategies().contains(&Strategy::Classic));
        assert_eq!(ComposerConfig::classic().max_number(), Some(99));
    }

    #[test]
    fn test_leetspeak_variant_has_no_substitutable_letters() {
        let config = ComposerConfig::rich();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let variants = compose(&tokens(), &config, &mut rng);
            let leet = variants
                .iter()
                .find(|v| v.strategy == Strategy::Leetspeak)
                .unwrap();
            let body: String = leet.text.chars().take(leet.text.chars().count() - 1).collect();
            assert!(!body.chars().any(|c| "aeiostl".contains(c)), "{}", leet.text);
            assert!(body.chars().all(|c| leet_char(c) == c));
        }
    }

    #[test]
    fn test_classic_compose_yields_one_variant() {
        let config = ComposerConfig::classic();
        let variants = compose(&tokens(), &config, &mut StdRng::seed_from_u64(0));
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].strategy, Strategy::Classic);
        assert!(variants[0].text.starts_with("Paris42Rex"));
    }

    #[test]
    fn test_seeded_compose_is_reproducible() {
        let config = ComposerConfig::rich();
        let a = compose(&tokens(), &config, &mut StdRng::seed_from_u64(77));
        let b = compose(&tokens(), &config, &mut StdRng::seed_from_u64(77));
        assert_eq!(a, b);
    }

    #[test]
    fn test_config_validation() {
        assert_eq!(
            ComposerConfig::new("", "_", None, vec![Strategy::Simple]).unwrap_err(),
            ComposerError::EmptySymbols
        );
        assert_eq!(
            ComposerConfig::new("!", "", None, vec![Strategy::Separated]).unwrap_err(),
            ComposerError::EmptySeparators
        );
        assert_eq!(
            ComposerConfig::new("!", "", Some(99), vec![]).unwrap_err(),
            ComposerError::NoStrategies
        );
        assert_eq!(
            ComposerConfig::new("!", "", None, vec![Strategy::Classic]).unwrap_err(),
            ComposerError::MissingNumberRange
        );
        let config = ComposerConfig::new("!", "", Some(9), vec![Strategy::Classic]).unwrap();
        let variants = compose(&tokens(), &config, &mut StdRng::seed_from_u64(3));
        assert!(variants[0].text.starts_with("Paris42Rex!0"));
    }

    #[test]
    fn test_explain_mentions_answered_prompts() {
        let mut answers = AnswerSet::new();
        answers.set("favorite_place", "Paris");
        answers.set("hobby", "Art");
        answers.set("pet_name", " ");
        assert_eq!(
            explain(&answers),
            "This password combines your favorite place, your hobby, modified numbers, and symbols to create something both secure and memorable for you."
        );
        assert!(explain(&AnswerSet::new()).starts_with("This password combines modified numbers"));
    }
}
