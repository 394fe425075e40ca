//! Mutation operator.

use super::types::Individual;
use rand::Rng;

/// Bit-flip mutation: each gene is flipped independently with
/// probability `mutation_rate`.
///
/// Always returns a new individual; the input is untouched. A rate of
/// `0.0` returns an unchanged copy, a rate of `1.0` returns the exact
/// complement, and an empty individual stays empty. The rate is clamped
/// to `[0, 1]`.
pub fn bit_flip<R: Rng + ?Sized>(
    individual: &Individual,
    mutation_rate: f64,
    rng: &mut R,
) -> Individual {
    let rate = mutation_rate.clamp(0.0, 1.0);
    let genes = individual
        .genes()
        .iter()
        .map(|&g| if rng.random_bool(rate) { 1 - g } else { g })
        .collect();
    Individual::new(genes)
}
