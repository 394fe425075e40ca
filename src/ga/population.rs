//! Population initialization.

use super::error::GaError;
use super::types::{Individual, Item};
use rand::Rng;

/// Creates a population of `population_size` random individuals, each
/// with one uniformly random gene per catalog item.
///
/// Individuals are generated independently; duplicates are permitted and
/// expected at low item counts.
///
/// # Errors
/// Returns [`GaError::EmptyCatalog`] when `items` is empty — an
/// optimization run cannot proceed on zero items.
pub fn create_population<R: Rng + ?Sized>(
    items: &[Item],
    population_size: usize,
    rng: &mut R,
) -> Result<Vec<Individual>, GaError> {
    if items.is_empty() {
        return Err(GaError::EmptyCatalog);
    }
    Ok((0..population_size)
        .map(|_| Individual::random(items.len(), rng))
        .collect())
}
