//! Separated strategy - tokens joined by one random separator.

use rand::Rng;

use super::{random_separator, random_symbol};
use crate::composer::ComposerConfig;

pub fn separated<R: Rng + ?Sized>(
    tokens: &[String],
    config: &ComposerConfig,
    rng: &mut R,
) -> String {
    let separator = random_separator(config, rng).to_string();
    let mut password = tokens.join(&separator);
    password.push(random_symbol(config, rng));
    password
}
