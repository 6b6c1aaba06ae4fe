//! Classic strategy - tokens in order, a symbol and a two-digit number.

use rand::Rng;

use super::{random_number, random_symbol};
use crate::composer::ComposerConfig;

pub fn classic<R: Rng + ?Sized>(tokens: &[String], config: &ComposerConfig, rng: &mut R) -> String {
    let mut password = tokens.concat();
    password.push(random_symbol(config, rng));
    password.push_str(&random_number(config, rng));
    password
}
