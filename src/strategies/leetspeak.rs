//! Leetspeak strategy.

use rand::Rng;

use super::random_symbol;
use crate::composer::ComposerConfig;

/// Substitution for one character, case-insensitive.
pub fn leet_char(c: char) -> char {
    match c.to_ascii_lowercase() {
        'a' => '4',
        'e' => '3',
        'i' | 'l' => '1',
        'o' => '0',
        's' => '5',
        't' => '7',
        _ => c,
    }
}

pub fn leetspeak<R: Rng + ?Sized>(
    tokens: &[String],
    config: &ComposerConfig,
    rng: &mut R,
) -> String {
    let mut password: String = tokens.concat().chars().map(leet_char).collect();
    password.push(random_symbol(config, rng));
    password
}
