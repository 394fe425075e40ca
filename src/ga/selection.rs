//! Parent selection strategies.
//!
//! Selection chooses parents from the current population with a bias
//! toward higher fitness. Both strategies return a copy of the chosen
//! individual and leave the population and score list untouched.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::error::GaError;
use super::types::Individual;
use rand::seq::index;
use rand::Rng;

/// Strategy for choosing a parent, biased toward higher fitness.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Tournament selection: sample `k` distinct individuals uniformly
    /// without replacement and return the fittest. Ties go to the first
    /// one encountered in sample order.
    ///
    /// Larger `k` means stronger selection pressure. `k` is clamped to
    /// `1..=population_size`.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),

    /// Fitness-proportional (roulette wheel) selection.
    ///
    /// Draws uniformly in `[0, total_fitness)` and walks the population
    /// accumulating scores; individuals with larger scores occupy
    /// proportionally larger intervals.
    ///
    /// # Complexity
    /// O(n) per selection (linear scan)
    Roulette,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(5)
    }
}

impl Selection {
    /// Selects one parent and returns it as a fresh copy.
    ///
    /// # Errors
    /// [`GaError::NonPositiveFitness`] for [`Selection::Roulette`] when
    /// the total fitness is zero.
    ///
    /// # Panics
    /// Panics if `population` is empty or the score list length differs
    /// from the population length.
    pub fn select<R: Rng + ?Sized>(
        &self,
        population: &[Individual],
        fitness_scores: &[u64],
        rng: &mut R,
    ) -> Result<Individual, GaError> {
        assert!(
            !population.is_empty(),
            "cannot select from an empty population"
        );
        assert_eq!(
            population.len(),
            fitness_scores.len(),
            "one fitness score per individual"
        );

        match *self {
            Selection::Tournament(k) => Ok(tournament(population, fitness_scores, k, rng)),
            Selection::Roulette => roulette(population, fitness_scores, rng),
        }
    }
}

/// Tournament selection: best of `k` distinct random entrants.
fn tournament<R: Rng + ?Sized>(
    population: &[Individual],
    scores: &[u64],
    k: usize,
    rng: &mut R,
) -> Individual {
    let n = population.len();
    let k = k.clamp(1, n);

    let mut winner: Option<usize> = None;
    for idx in index::sample(rng, n, k) {
        if winner.map_or(true, |w| scores[idx] > scores[w]) {
            winner = Some(idx);
        }
    }
    population[winner.expect("tournament has at least one entrant")].clone()
}

/// Roulette wheel selection over raw fitness scores.
fn roulette<R: Rng + ?Sized>(
    population: &[Individual],
    scores: &[u64],
    rng: &mut R,
) -> Result<Individual, GaError> {
    let total: u64 = scores.iter().sum();
    if total == 0 {
        return Err(GaError::NonPositiveFitness);
    }

    let pick = rng.random_range(0..total);
    let mut cumulative = 0u64;
    for (individual, &score) in population.iter().zip(scores) {
        cumulative += score;
        if cumulative > pick {
            return Ok(individual.clone());
        }
    }
    unreachable!("cumulative fitness reaches the total")
}
