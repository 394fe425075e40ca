//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::crossover::Crossover;
use super::error::GaError;

/// Configuration for the knapsack genetic algorithm.
///
/// # Defaults
///
/// ```
/// use knapsack_evo::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 200);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use knapsack_evo::ga::{Crossover, GaConfig};
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_tournament_size(3)
///     .with_crossover(Crossover::Uniform(0.5))
///     .with_mutation_rate(0.02);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals per generation. Must be at least 1.
    pub population_size: usize,

    /// Number of generations to evolve. Zero yields an unevolved run:
    /// the best individual of the initial population is returned with
    /// empty history sequences.
    pub generations: usize,

    /// Per-gene flip probability in `[0, 1]`.
    pub mutation_rate: f64,

    /// Competitors per tournament, in `1..=population_size`.
    pub tournament_size: usize,

    /// Individuals carried over unmutated each generation, in
    /// `0..=population_size`.
    pub elitism_size: usize,

    /// Crossover strategy used to breed offspring.
    pub crossover: Crossover,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 200,
            mutation_rate: 0.05,
            tournament_size: 5,
            elitism_size: 5,
            crossover: Crossover::default(),
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the generation count.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the per-gene mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the number of elite individuals carried over unmutated.
    pub fn with_elitism_size(mut self, n: usize) -> Self {
        self.elitism_size = n;
        self
    }

    /// Sets the crossover strategy.
    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`GaError::InvalidConfig`] describing the first parameter
    /// found out of range.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.population_size == 0 {
            return Err(GaError::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }
        if self.tournament_size == 0 || self.tournament_size > self.population_size {
            return Err(GaError::InvalidConfig(format!(
                "tournament_size must be in 1..={}, got {}",
                self.population_size, self.tournament_size
            )));
        }
        if self.elitism_size > self.population_size {
            return Err(GaError::InvalidConfig(format!(
                "elitism_size must be in 0..={}, got {}",
                self.population_size, self.elitism_size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GaError::InvalidConfig(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}
