//! Questionnaire prompts, answers and linear navigation.
//!
//! Every prompt requires an answer before moving on; choosing an option
//! records it but never advances by itself.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum QuestionnaireError {
    #[error("a questionnaire needs at least one prompt")]
    EmptyQuestionnaire,
    #[error("duplicate prompt id {0:?}")]
    DuplicatePrompt(String),
    #[error("the questionnaire has not been started")]
    NotStarted,
    #[error("prompt {0:?} does not offer choices")]
    NotSingleChoice(String),
    #[error("{choice:?} is not a choice of prompt {prompt:?}")]
    UnknownChoice { prompt: String, choice: String },
    #[error("the questionnaire is not complete")]
    Incomplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    FreeText,
    SingleChoice,
}

/// One question. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    id: String,
    kind: PromptKind,
    text: String,
    placeholder: Option<String>,
    choices: Vec<String>,
}

impl Prompt {
    pub fn free_text(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: PromptKind::FreeText,
            text: text.into(),
            placeholder: None,
            choices: Vec::new(),
        }
    }

    pub fn single_choice<I, S>(id: impl Into<String>, text: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            kind: PromptKind::SingleChoice,
            text: text.into(),
            placeholder: None,
            choices: choices.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> PromptKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Empty for free-text prompts.
    pub fn choices(&self) -> &[String] {
        &self.choices
    }
}

const HOBBIES: [&str; 8] = [
    "Reading", "Gaming", "Cooking", "Sports", "Music", "Art", "Travel", "Other",
];
const COLORS: [&str; 9] = [
    "Red", "Blue", "Green", "Purple", "Orange", "Yellow", "Pink", "Black", "White",
];
const SUPERHEROES: [&str; 8] = [
    "Spider-Man",
    "Iron Man",
    "Batman",
    "Superman",
    "Wonder Woman",
    "Black Panther",
    "Captain America",
    "Hulk",
];

/// The seven-question set of the single-password generator.
pub fn classic_prompts() -> Vec<Prompt> {
    vec![
        Prompt::free_text("favorite_place", "What's your favorite place or dream destination?")
            .with_placeholder("e.g., Paris, Beach, Mountains..."),
        Prompt::free_text("favorite_number", "Do you have a favorite number or lucky number?")
            .with_placeholder("e.g., 7, 42, 2024..."),
        Prompt::free_text("pet_name", "What's the name of a pet (current or childhood)?")
            .with_placeholder("e.g., Buddy, Whiskers, Rex..."),
        Prompt::single_choice("hobby", "What's one of your favorite hobbies?", HOBBIES),
        Prompt::free_text("birth_year", "What year were you born? (We'll modify it for security)")
            .with_placeholder("e.g., 1990, 1985..."),
        Prompt::single_choice("favorite_color", "What's your favorite color?", COLORS),
        Prompt::free_text("memorable_word", "Think of a word that's meaningful to you")
            .with_placeholder("e.g., Freedom, Adventure, Family..."),
    ]
}

/// The extended question set used with the four-variant generator.
pub fn standard_prompts() -> Vec<Prompt> {
    vec![
        Prompt::free_text("user_name", "What should we call you?")
            .with_placeholder("e.g., Alex, Sam..."),
        Prompt::free_text("favorite_place", "What's your favorite place or dream destination?")
            .with_placeholder("e.g., Paris, Beach, Mountains..."),
        Prompt::free_text("favorite_number", "Do you have a favorite number?")
            .with_placeholder("e.g., 7, 42, 2024..."),
        Prompt::free_text("pet_name", "What's the name of a pet (current or childhood)?")
            .with_placeholder("e.g., Buddy, Whiskers, Rex..."),
        Prompt::single_choice("hobby", "What's one of your favorite hobbies?", HOBBIES),
        Prompt::free_text("birth_year", "What year were you born? (We'll modify it for security)")
            .with_placeholder("e.g., 1990, 1985..."),
        Prompt::single_choice("favorite_color", "What's your favorite color?", COLORS),
        Prompt::single_choice("superhero", "Pick a superhero", SUPERHEROES),
        Prompt::free_text("lucky_number", "Do you have a lucky number?")
            .with_placeholder("e.g., 3, 13, 777..."),
        Prompt::free_text("memorable_word", "Think of a word that's meaningful to you")
            .with_placeholder("e.g., Freedom, Adventure, Family..."),
    ]
}

/// Answers keyed by prompt id. A missing id means "unanswered".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    answers: HashMap<String, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, prompt_id: impl Into<String>, answer: impl Into<String>) {
        self.answers.insert(prompt_id.into(), answer.into());
    }

    pub fn get(&self, prompt_id: &str) -> Option<&str> {
        self.answers.get(prompt_id).map(String::as_str)
    }

    /// True when the stored answer has content after trimming.
    pub fn has_answer(&self, prompt_id: &str) -> bool {
        self.get(prompt_id).is_some_and(|a| !a.trim().is_empty())
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

/// Position within the prompt list plus the answers given so far.
///
/// `current_index` always stays inside `0..prompts.len()`.
#[derive(Debug, Clone)]
pub struct Questionnaire {
    prompts: Arc<[Prompt]>,
    current_index: usize,
    answers: AnswerSet,
}

/// Validates a prompt list for use in a [`Questionnaire`].
pub fn validate_prompts(prompts: &[Prompt]) -> Result<(), QuestionnaireError> {
    if prompts.is_empty() {
        return Err(QuestionnaireError::EmptyQuestionnaire);
    }
    let mut seen = HashSet::new();
    for prompt in prompts {
        if !seen.insert(prompt.id()) {
            return Err(QuestionnaireError::DuplicatePrompt(prompt.id().to_string()));
        }
    }
    Ok(())
}

impl Questionnaire {
    pub fn new(prompts: impl Into<Arc<[Prompt]>>) -> Result<Self, QuestionnaireError> {
        let prompts = prompts.into();
        validate_prompts(&prompts)?;
        Ok(Self {
            prompts,
            current_index: 0,
            answers: AnswerSet::new(),
        })
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_prompt(&self) -> &Prompt {
        &self.prompts[self.current_index]
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index == self.prompts.len() - 1
    }

    pub fn current_answered(&self) -> bool {
        self.answers.has_answer(self.current_prompt().id())
    }

    /// Forward navigation is offered only on an answered, non-final prompt.
    pub fn can_advance(&self) -> bool {
        !self.is_last() && self.current_answered()
    }

    pub fn can_retreat(&self) -> bool {
        !self.is_first()
    }

    /// Last prompt reached and answered.
    pub fn is_complete(&self) -> bool {
        self.is_last() && self.current_answered()
    }

    /// Records the answer for the current prompt, verbatim. Choice prompts
    /// only accept one of their options.
    pub fn answer_current(&mut self, text: &str) -> Result<(), QuestionnaireError> {
        let prompt = self.current_prompt();
        if prompt.kind() == PromptKind::SingleChoice {
            return self.select_option(text);
        }
        let id = prompt.id().to_string();
        self.answers.set(id, text);
        Ok(())
    }

    /// Records one of the current prompt's choices, verbatim.
    pub fn select_option(&mut self, choice: &str) -> Result<(), QuestionnaireError> {
        let prompt = self.current_prompt();
        if prompt.kind() != PromptKind::SingleChoice {
            return Err(QuestionnaireError::NotSingleChoice(prompt.id().to_string()));
        }
        if !prompt.choices().iter().any(|c| c == choice) {
            return Err(QuestionnaireError::UnknownChoice {
                prompt: prompt.id().to_string(),
                choice: choice.to_string(),
            });
        }
        let id = prompt.id().to_string();
        self.answers.set(id, choice);
        Ok(())
    }

    /// Moves one prompt forward. Returns false, without moving, on the last
    /// prompt or when the current prompt is unanswered.
    pub fn next(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.current_index += 1;
        true
    }

    /// Moves one prompt back. Returns false, without moving, on the first.
    pub fn prev(&mut self) -> bool {
        if !self.can_retreat() {
            return false;
        }
        self.current_index -= 1;
        true
    }

    /// Back to the first prompt with no answers.
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.answers.clear();
    }
}
