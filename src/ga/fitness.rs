//! Fitness evaluation for knapsack solutions.
//!
//! This is the sole arbiter of solution quality: all selection pressure
//! derives from the scalar returned here.

use super::error::GaError;
use super::types::{Individual, Item};

/// Sentinel score for infeasible or worthless solutions.
///
/// Returned when the selected items exceed the capacity, or when the
/// selection carries no value (including an empty selection).
pub const INVALID_SOLUTION_SCORE: u64 = 0;

/// Evaluates an individual against the item catalog and capacity.
///
/// Sums value and weight over every included item. The score is the total
/// value, or [`INVALID_SOLUTION_SCORE`] when the total weight exceeds
/// `capacity` or the total value is zero.
///
/// Deterministic and side-effect free. An empty individual over an empty
/// catalog evaluates to the sentinel — degenerate, but not malformed.
///
/// # Errors
/// Returns [`GaError::InputShape`] when the individual and the catalog
/// have different lengths.
pub fn evaluate(individual: &Individual, items: &[Item], capacity: u64) -> Result<u64, GaError> {
    if individual.len() != items.len() {
        return Err(GaError::InputShape {
            individual: individual.len(),
            items: items.len(),
        });
    }

    let mut total_value = 0u64;
    let mut total_weight = 0u64;
    for (&gene, item) in individual.genes().iter().zip(items) {
        if gene == 1 {
            total_value += item.value;
            total_weight += item.weight;
        }
    }

    if total_weight > capacity || total_value == 0 {
        return Ok(INVALID_SOLUTION_SCORE);
    }
    Ok(total_value)
}

/// Evaluates every individual in a population, in order.
///
/// # Errors
/// Propagates the first [`GaError::InputShape`] encountered.
pub fn evaluate_population(
    population: &[Individual],
    items: &[Item],
    capacity: u64,
) -> Result<Vec<u64>, GaError> {
    population
        .iter()
        .map(|individual| evaluate(individual, items, capacity))
        .collect()
}
