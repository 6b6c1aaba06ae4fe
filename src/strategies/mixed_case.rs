//! Mixed case strategy - alternating case with digits between tokens.

use rand::Rng;

use super::{random_digit, random_symbol};
use crate::composer::ComposerConfig;

/// Even positions lowercase, odd positions uppercase, one random digit
/// between consecutive tokens.
pub fn mixed_case<R: Rng + ?Sized>(
    tokens: &[String],
    config: &ComposerConfig,
    rng: &mut R,
) -> String {
    let mut password = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            password.push(random_digit(rng));
        }
        if i % 2 == 0 {
            password.push_str(&token.to_lowercase());
        } else {
            password.push_str(&token.to_uppercase());
        }
    }
    password.push(random_symbol(config, rng));
    password
}
