//! Turning questionnaire answers into short password tokens.

use std::collections::HashMap;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::questionnaire::{AnswerSet, Prompt};

/// How the birth year is obscured before it goes into a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearPolicy {
    /// `"1990"` becomes `"0991"`.
    #[default]
    Reverse,
    /// Characters are randomly permuted.
    Scramble,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Lower,
    Upper,
    Capitalized,
}

impl Case {
    fn apply(self, s: &str) -> String {
        match self {
            Case::Lower => s.to_lowercase(),
            Case::Upper => s.to_uppercase(),
            Case::Capitalized => capitalize(s),
        }
    }
}

/// Transformation applied to one prompt's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRule {
    /// Trim, drop whitespace, keep at most `max_len` characters (all when
    /// `None`), capitalize the first letter and lowercase the rest.
    NameLike { max_len: Option<usize> },
    /// The answer as typed.
    Verbatim,
    /// Year obscured according to the extractor's [`YearPolicy`].
    Year,
    /// The first `len` characters in the given case.
    Prefix { len: usize, case: Case },
    /// Initials of a multi-word option ("Spider-Man" gives "SM"); single
    /// words fall back to a capitalized prefix of `fallback_len`.
    Acronym { fallback_len: usize },
}

/// Uppercase first character, rest lowercase.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// At most `len` characters of `s`, never panicking on short input.
pub fn truncate(s: &str, len: usize) -> &str {
    match s.char_indices().nth(len) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn acronym(s: &str) -> Option<String> {
    let words: Vec<&str> = s
        .split(|c: char| c == '-' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .collect();
    if words.len() < 2 {
        return None;
    }
    Some(
        words
            .iter()
            .filter_map(|w| w.chars().next())
            .flat_map(char::to_uppercase)
            .collect(),
    )
}

/// Per-prompt-id token rules. Prompts without a rule contribute nothing.
#[derive(Debug, Clone)]
pub struct TokenExtractor {
    rules: HashMap<String, TokenRule>,
    year_policy: YearPolicy,
}

impl Default for TokenExtractor {
    fn default() -> Self {
        Self::standard()
    }
}

impl TokenExtractor {
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
            year_policy: YearPolicy::default(),
        }
    }

    /// Rules for [`standard_prompts`](crate::standard_prompts): name-like
    /// answers are shortened to four or five characters.
    pub fn standard() -> Self {
        Self::empty()
            .with_rule("user_name", TokenRule::NameLike { max_len: Some(4) })
            .with_rule("favorite_place", TokenRule::NameLike { max_len: Some(5) })
            .with_rule("pet_name", TokenRule::NameLike { max_len: Some(4) })
            .with_rule("memorable_word", TokenRule::NameLike { max_len: Some(5) })
            .with_rule("favorite_number", TokenRule::Verbatim)
            .with_rule("lucky_number", TokenRule::Verbatim)
            .with_rule("birth_year", TokenRule::Year)
            .with_rule("hobby", TokenRule::Prefix { len: 3, case: Case::Lower })
            .with_rule("favorite_color", TokenRule::Prefix { len: 2, case: Case::Upper })
            .with_rule("superhero", TokenRule::Acronym { fallback_len: 4 })
    }

    /// Rules for [`classic_prompts`](crate::classic_prompts): name-like
    /// answers are kept whole.
    pub fn classic() -> Self {
        Self::standard()
            .with_rule("favorite_place", TokenRule::NameLike { max_len: None })
            .with_rule("pet_name", TokenRule::NameLike { max_len: None })
            .with_rule("memorable_word", TokenRule::NameLike { max_len: None })
    }

    pub fn with_rule(mut self, prompt_id: impl Into<String>, rule: TokenRule) -> Self {
        self.rules.insert(prompt_id.into(), rule);
        self
    }

    pub fn with_year_policy(mut self, policy: YearPolicy) -> Self {
        self.year_policy = policy;
        self
    }

    pub fn year_policy(&self) -> YearPolicy {
        self.year_policy
    }

    pub fn rule(&self, prompt_id: &str) -> Option<TokenRule> {
        self.rules.get(prompt_id).copied()
    }

    /// Token for one answer, using the thread RNG for the scramble policy.
    pub fn extract(&self, prompt_id: &str, raw: &str) -> Option<String> {
        self.extract_with(prompt_id, raw, &mut rand::thread_rng())
    }

    /// Token for one answer. `None` for blank answers and unknown ids.
    pub fn extract_with<R: Rng + ?Sized>(
        &self,
        prompt_id: &str,
        raw: &str,
        rng: &mut R,
    ) -> Option<String> {
        if raw.trim().is_empty() {
            return None;
        }
        let token = match self.rule(prompt_id)? {
            TokenRule::NameLike { max_len } => {
                let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
                let kept = match max_len {
                    Some(len) => truncate(&compact, len),
                    None => compact.as_str(),
                };
                capitalize(kept)
            }
            TokenRule::Verbatim => raw.to_string(),
            TokenRule::Year => {
                let mut digits: Vec<char> = raw.trim().chars().collect();
                match self.year_policy {
                    YearPolicy::Reverse => digits.reverse(),
                    YearPolicy::Scramble => digits.shuffle(rng),
                }
                digits.into_iter().collect()
            }
            TokenRule::Prefix { len, case } => case.apply(truncate(raw.trim(), len)),
            TokenRule::Acronym { fallback_len } => acronym(raw.trim())
                .unwrap_or_else(|| capitalize(truncate(raw.trim(), fallback_len))),
        };
        Some(token)
    }

    /// Tokens for every answered prompt, in prompt order.
    pub fn extract_all<R: Rng + ?Sized>(
        &self,
        prompts: &[Prompt],
        answers: &AnswerSet,
        rng: &mut R,
    ) -> Vec<String> {
        prompts
            .iter()
            .filter_map(|prompt| {
                let raw = answers.get(prompt.id())?;
                self.extract_with(prompt.id(), raw, rng)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::standard_prompts;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn standard(id: &str, raw: &str) -> Option<String> {
        TokenExtractor::standard().extract(id, raw)
    }

    #[test]
    fn test_blank_answers_produce_no_token() {
        let extractor = TokenExtractor::standard();
        for id in ["user_name", "favorite_number", "birth_year", "hobby", "superhero"] {
            assert_eq!(extractor.extract(id, ""), None);
            assert_eq!(extractor.extract(id, "   "), None);
        }
    }

    #[test]
    fn test_unknown_prompt_is_skipped() {
        assert_eq!(standard("shoe_size", "42"), None);
    }

    #[test]
    fn test_name_like_fields() {
        assert_eq!(standard("favorite_place", "  new   york "), Some("Newyo".to_string()));
        assert_eq!(standard("pet_name", "REX"), Some("Rex".to_string()));
        assert_eq!(standard("user_name", "alexandra"), Some("Alex".to_string()));
        assert_eq!(standard("memorable_word", "Freedom"), Some("Freed".to_string()));
        assert_eq!(standard("memorable_word", "ok"), Some("Ok".to_string()));
    }

    #[test]
    fn test_classic_keeps_whole_names() {
        let extractor = TokenExtractor::classic();
        assert_eq!(
            extractor.extract("favorite_place", "new york"),
            Some("Newyork".to_string())
        );
        assert_eq!(extractor.extract("pet_name", "whiskers"), Some("Whiskers".to_string()));
    }

    #[test]
    fn test_numbers_pass_through() {
        assert_eq!(standard("favorite_number", "42"), Some("42".to_string()));
        assert_eq!(standard("lucky_number", "007"), Some("007".to_string()));
    }

    #[test]
    fn test_year_reversed_by_default() {
        assert_eq!(standard("birth_year", "1990"), Some("0991".to_string()));
    }

    #[test]
    fn test_year_scramble_is_a_permutation() {
        let extractor = TokenExtractor::standard().with_year_policy(YearPolicy::Scramble);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let token = extractor.extract_with("birth_year", "1985", &mut rng).unwrap();
            let mut got: Vec<char> = token.chars().collect();
            got.sort_unstable();
            assert_eq!(got, vec!['1', '5', '8', '9']);
        }
    }

    #[test]
    fn test_categorical_fields() {
        assert_eq!(standard("hobby", "Gaming"), Some("gam".to_string()));
        assert_eq!(standard("hobby", "Art"), Some("art".to_string()));
        assert_eq!(standard("favorite_color", "Blue"), Some("BL".to_string()));
        assert_eq!(standard("superhero", "Spider-Man"), Some("SM".to_string()));
        assert_eq!(standard("superhero", "Captain America"), Some("CA".to_string()));
        assert_eq!(standard("superhero", "Batman"), Some("Batm".to_string()));
        assert_eq!(standard("superhero", "Hulk"), Some("Hulk".to_string()));
    }

    #[test]
    fn test_truncate_clamps() {
        assert_eq!(truncate("ab", 5), "ab");
        assert_eq!(truncate("", 3), "");
        assert_eq!(truncate("Zürich", 2), "Zü");
    }

    #[test]
    fn test_extract_all_follows_prompt_order() {
        let mut answers = AnswerSet::new();
        answers.set("memorable_word", "family");
        answers.set("favorite_place", "Paris");
        answers.set("pet_name", "  ");
        answers.set("favorite_number", "42");

        let mut rng = StdRng::seed_from_u64(1);
        let tokens = TokenExtractor::standard().extract_all(&standard_prompts(), &answers, &mut rng);
        assert_eq!(tokens, vec!["Paris", "42", "Famil"]);
    }
}
