//! Simple strategy - shuffled tokens plus a symbol.

use rand::Rng;
use rand::seq::SliceRandom;

use super::random_symbol;
use crate::composer::ComposerConfig;

/// Fisher-Yates shuffles the tokens, concatenates them and appends a symbol.
pub fn simple<R: Rng + ?Sized>(tokens: &[String], config: &ComposerConfig, rng: &mut R) -> String {
    let mut shuffled: Vec<&str> = tokens.iter().map(String::as_str).collect();
    shuffled.shuffle(rng);
    let mut password = shuffled.concat();
    password.push(random_symbol(config, rng));
    password
}
