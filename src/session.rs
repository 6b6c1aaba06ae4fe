//! Command interface tying the questionnaire, generator, strength oracle and
//! breach check together.
//!
//! Every command returns an [`Effect`] describing what a presentation layer
//! should show. Nothing here renders or prints.

use rand::Rng;
use secrecy::{ExposeSecret, SecretString};

use crate::breach::BreachQueryResult;
use crate::composer::{ComposerConfig, PasswordBatch, compose, explain};
use crate::config::Config;
use crate::questionnaire::{Prompt, Questionnaire, QuestionnaireError, classic_prompts, standard_prompts};
use crate::strength::{StrengthOracle, StrengthReport};
use crate::tokens::TokenExtractor;

#[cfg(feature = "async")]
use crate::breach::{BreachStatus, RangeLookup, check_password, should_check};

/// Snapshot of the questionnaire for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptView {
    pub index: usize,
    pub total: usize,
    pub prompt: Prompt,
    pub answer: Option<String>,
    pub can_retreat: bool,
    pub can_advance: bool,
    pub can_generate: bool,
}

/// A generated variant with its live strength preview, when an oracle is
/// available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredVariant {
    pub text: String,
    pub strategy_label: &'static str,
    pub strength: Option<StrengthReport>,
}

/// What the presentation layer should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Prompt(PromptView),
    Variants {
        variants: Vec<ScoredVariant>,
        explanation: String,
    },
    Strength(StrengthReport),
    /// Empty input or no oracle loaded.
    HideStrength,
    Breach(BreachQueryResult),
    /// Breach status unknown or not checked; show nothing.
    HideBreach,
}

/// Explicit context replacing a global controller: configuration, the
/// prompt list and the single live questionnaire run.
pub struct Session {
    config: Config,
    template: Questionnaire,
    questionnaire: Option<Questionnaire>,
    extractor: TokenExtractor,
    oracle: Option<Box<dyn StrengthOracle>>,
    last_batch: Option<PasswordBatch>,
}

impl Session {
    pub fn new(
        config: Config,
        prompts: Vec<Prompt>,
        extractor: TokenExtractor,
    ) -> Result<Self, QuestionnaireError> {
        let template = Questionnaire::new(prompts)?;
        let extractor = extractor.with_year_policy(config.year_policy);
        Ok(Self {
            config,
            template,
            questionnaire: None,
            extractor,
            oracle: None,
            last_batch: None,
        })
    }

    /// Standard prompts and token rules; variants per `config.composer`.
    pub fn standard(config: Config) -> Result<Self, QuestionnaireError> {
        Self::new(config, standard_prompts(), TokenExtractor::standard())
    }

    /// Classic prompts and token rules with the single-password composer.
    pub fn classic(config: Config) -> Result<Self, QuestionnaireError> {
        let config = config.with_composer(ComposerConfig::classic());
        Self::new(config, classic_prompts(), TokenExtractor::classic())
    }

    pub fn with_oracle(mut self, oracle: impl StrengthOracle + 'static) -> Self {
        self.oracle = Some(Box::new(oracle));
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn has_oracle(&self) -> bool {
        self.oracle.is_some()
    }

    pub fn questionnaire(&self) -> Option<&Questionnaire> {
        self.questionnaire.as_ref()
    }

    pub fn last_batch(&self) -> Option<&PasswordBatch> {
        self.last_batch.as_ref()
    }

    /// Begins a new run, discarding any previous answers.
    pub fn start(&mut self) -> Effect {
        let questionnaire = self.questionnaire.insert(self.template.clone());
        prompt_view(questionnaire)
    }

    fn running(&mut self) -> Result<&mut Questionnaire, QuestionnaireError> {
        self.questionnaire.as_mut().ok_or(QuestionnaireError::NotStarted)
    }

    /// Stores the answer for the current prompt. Choice prompts only accept
    /// one of their options.
    pub fn submit_answer(&mut self, text: &str) -> Result<Effect, QuestionnaireError> {
        let questionnaire = self.running()?;
        questionnaire.answer_current(text)?;
        Ok(prompt_view(questionnaire))
    }

    pub fn select_option(&mut self, choice: &str) -> Result<Effect, QuestionnaireError> {
        let questionnaire = self.running()?;
        questionnaire.select_option(choice)?;
        Ok(prompt_view(questionnaire))
    }

    /// Moves forward when allowed; otherwise re-renders the current prompt.
    pub fn advance(&mut self) -> Result<Effect, QuestionnaireError> {
        let questionnaire = self.running()?;
        questionnaire.next();
        Ok(prompt_view(questionnaire))
    }

    pub fn retreat(&mut self) -> Result<Effect, QuestionnaireError> {
        let questionnaire = self.running()?;
        questionnaire.prev();
        Ok(prompt_view(questionnaire))
    }

    /// Generates a new batch from the current answers.
    pub fn generate(&mut self) -> Result<Effect, QuestionnaireError> {
        self.generate_with(&mut rand::thread_rng())
    }

    pub fn generate_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Effect, QuestionnaireError> {
        let questionnaire = self.questionnaire.as_ref().ok_or(QuestionnaireError::NotStarted)?;
        if !questionnaire.is_complete() {
            return Err(QuestionnaireError::Incomplete);
        }

        let tokens = self
            .extractor
            .extract_all(questionnaire.prompts(), questionnaire.answers(), rng);
        let batch = PasswordBatch {
            variants: compose(&tokens, &self.config.composer, rng),
            explanation: explain(questionnaire.answers()),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            tokens = tokens.len(),
            variants = batch.variants.len(),
            "generated password batch"
        );

        let variants = batch
            .variants
            .iter()
            .map(|variant| ScoredVariant {
                text: variant.text.clone(),
                strategy_label: variant.strategy_label(),
                strength: self.score(&SecretString::new(variant.text.clone().into())),
            })
            .collect();
        let explanation = batch.explanation.clone();
        self.last_batch = Some(batch);

        Ok(Effect::Variants {
            variants,
            explanation,
        })
    }

    fn score(&self, password: &SecretString) -> Option<StrengthReport> {
        self.oracle.as_ref().map(|oracle| oracle.score(password))
    }

    /// Strength preview for a typed password.
    pub fn evaluate(&self, password: &SecretString) -> Effect {
        if password.expose_secret().is_empty() {
            return Effect::HideStrength;
        }
        match self.score(password) {
            Some(report) => Effect::Strength(report),
            None => {
                #[cfg(feature = "tracing")]
                tracing::warn!("strength oracle not loaded, skipping strength display");
                Effect::HideStrength
            }
        }
    }

    /// Immediate, undebounced breach check. Short passwords and failed
    /// lookups both hide the breach section.
    #[cfg(feature = "async")]
    pub async fn check_breach<L: RangeLookup>(&self, lookup: &L, password: &SecretString) -> Effect {
        if !should_check(password, self.config.min_breach_check_len) {
            return Effect::HideBreach;
        }
        BreachStatus::from(check_password(lookup, password).await).into()
    }
}

fn prompt_view(questionnaire: &Questionnaire) -> Effect {
    let prompt = questionnaire.current_prompt();
    Effect::Prompt(PromptView {
        index: questionnaire.current_index(),
        total: questionnaire.prompts().len(),
        prompt: prompt.clone(),
        answer: questionnaire.answers().get(prompt.id()).map(str::to_string),
        can_retreat: questionnaire.can_retreat(),
        can_advance: questionnaire.can_advance(),
        can_generate: questionnaire.is_complete(),
    })
}

#[cfg(feature = "async")]
impl From<BreachStatus> for Effect {
    fn from(status: BreachStatus) -> Self {
        match status {
            BreachStatus::Known(result) => Effect::Breach(result),
            BreachStatus::Unknown => Effect::HideBreach,
        }
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use crate::breach::testing::FakeCorpus;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[tokio::test]
    async fn test_check_breach_effects() {
        let session = Session::standard(Config::default()).unwrap();
        let corpus = FakeCorpus::default();
        corpus.insert("password", 3);

        assert_eq!(
            session.check_breach(&corpus, &secret("password")).await,
            Effect::Breach(BreachQueryResult::breached(3))
        );
        assert_eq!(
            session.check_breach(&corpus, &secret("Paris42Rex!")).await,
            Effect::Breach(BreachQueryResult::not_found())
        );
    }

    #[tokio::test]
    async fn test_short_password_is_never_looked_up() {
        let session = Session::standard(Config::default()).unwrap();
        let corpus = FakeCorpus::default();

        assert_eq!(session.check_breach(&corpus, &secret("abc")).await, Effect::HideBreach);
        assert!(corpus.calls().is_empty());
    }

    #[tokio::test]
    async fn test_failed_lookup_hides_breach() {
        let session = Session::standard(Config::default()).unwrap();
        let corpus = FakeCorpus::failing(429);

        assert_eq!(session.check_breach(&corpus, &secret("password")).await, Effect::HideBreach);
    }
}
