//! The generational loop.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation →
//! replacement, with elitism, for a fixed number of generations.

use super::config::GaConfig;
use super::error::GaError;
use super::fitness::{evaluate_population, INVALID_SOLUTION_SCORE};
use super::mutation::bit_flip;
use super::population::create_population;
use super::selection::Selection;
use super::types::{Individual, Item};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The best individual seen across all generations.
    pub best_solution: Individual,

    /// Fitness of [`best_solution`](Self::best_solution). Zero when no
    /// individual ever scored above the sentinel.
    pub best_fitness: u64,

    /// Each generation's maximum fitness, in generation order.
    pub best_fitness_history: Vec<u64>,

    /// Each generation's mean fitness, in generation order.
    pub avg_fitness_history: Vec<f64>,

    /// Number of generations executed.
    pub generations: usize,
}

/// Executes the GA evolutionary loop.
///
/// The loop is single-threaded and synchronous: every operator call runs
/// to completion before the next, and the only source of nondeterminism
/// is the random stream, so a fixed seed reproduces a run exactly.
///
/// # Usage
///
/// ```
/// use knapsack_evo::ga::{GaConfig, GaRunner, Item};
///
/// let items = vec![Item::new(6, 3), Item::new(8, 4), Item::new(12, 6)];
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_generations(10)
///     .with_seed(42);
/// let result = GaRunner::run(&items, 10, &config).unwrap();
/// assert_eq!(result.best_fitness_history.len(), 10);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA, seeding the random stream from
    /// [`GaConfig::seed`] (or a random seed when `None`).
    ///
    /// # Errors
    /// [`GaError::InvalidConfig`] for out-of-range parameters and
    /// [`GaError::EmptyCatalog`] for a zero-item catalog. Any operator
    /// precondition failure propagates unchanged and aborts the run.
    pub fn run(items: &[Item], capacity: u64, config: &GaConfig) -> Result<GaResult, GaError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(items, capacity, config, &mut rng)
    }

    /// Runs the GA with an externally supplied random source.
    ///
    /// `config.seed` is ignored here; the caller owns reproducibility.
    ///
    /// # Errors
    /// Same as [`run`](Self::run).
    pub fn run_with_rng<R: Rng + ?Sized>(
        items: &[Item],
        capacity: u64,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult, GaError> {
        Self::run_with_observer(items, capacity, config, rng, |_, _, _| {})
    }

    /// Runs the GA, invoking `observer(generation, best, avg)` once per
    /// generation with that generation's maximum and mean fitness.
    ///
    /// Useful for progress reporting or external communication; the
    /// observer cannot influence the run.
    ///
    /// # Errors
    /// Same as [`run`](Self::run).
    pub fn run_with_observer<R, F>(
        items: &[Item],
        capacity: u64,
        config: &GaConfig,
        rng: &mut R,
        mut observer: F,
    ) -> Result<GaResult, GaError>
    where
        R: Rng + ?Sized,
        F: FnMut(usize, u64, f64),
    {
        config.validate()?;

        let mut population = create_population(items, config.population_size, rng)?;

        let mut best_solution: Option<Individual> = None;
        let mut best_fitness = INVALID_SOLUTION_SCORE;
        let mut best_fitness_history = Vec::with_capacity(config.generations);
        let mut avg_fitness_history = Vec::with_capacity(config.generations);
        let selection = Selection::Tournament(config.tournament_size);

        for generation in 0..config.generations {
            let scores = evaluate_population(&population, items, capacity)?;

            let gen_best_idx = index_of_max(&scores);
            let gen_best = scores[gen_best_idx];
            let gen_avg = scores.iter().sum::<u64>() as f64 / scores.len() as f64;
            best_fitness_history.push(gen_best);
            avg_fitness_history.push(gen_avg);

            // Strict improvement only: on a tie the first-found best
            // stays the incumbent.
            if gen_best > best_fitness {
                best_fitness = gen_best;
                best_solution = Some(population[gen_best_idx].clone());
            }

            observer(generation, gen_best, gen_avg);

            population = breed(&population, &scores, config, &selection, rng)?;
        }

        // Unevolved run (generations = 0) or a run where every individual
        // stayed at the sentinel: report the top-ranked individual of the
        // population at hand.
        let best_solution = match best_solution {
            Some(solution) => solution,
            None => {
                let scores = evaluate_population(&population, items, capacity)?;
                let idx = index_of_max(&scores);
                best_fitness = scores[idx];
                population[idx].clone()
            }
        };

        Ok(GaResult {
            best_solution,
            best_fitness,
            best_fitness_history,
            avg_fitness_history,
            generations: config.generations,
        })
    }
}

/// Builds the next generation: elites first, then offspring from
/// tournament-selected parents.
fn breed<R: Rng + ?Sized>(
    population: &[Individual],
    scores: &[u64],
    config: &GaConfig,
    selection: &Selection,
    rng: &mut R,
) -> Result<Vec<Individual>, GaError> {
    // Stable descending sort: ties keep their original population order.
    let mut ranked: Vec<usize> = (0..population.len()).collect();
    ranked.sort_by(|&a, &b| scores[b].cmp(&scores[a]));

    let mut next_population = Vec::with_capacity(config.population_size + 1);
    next_population.extend(
        ranked
            .iter()
            .take(config.elitism_size)
            .map(|&i| population[i].clone()),
    );

    let total: u64 = scores.iter().sum();
    while next_population.len() < config.population_size {
        // When every individual is equally unviable, pressure-based
        // selection degenerates; fall back to uniform random parents.
        let (parent1, parent2) = if total > 0 {
            (
                selection.select(population, scores, rng)?,
                selection.select(population, scores, rng)?,
            )
        } else {
            (
                population[rng.random_range(0..population.len())].clone(),
                population[rng.random_range(0..population.len())].clone(),
            )
        };

        let (child1, child2) = config.crossover.cross(&parent1, &parent2, rng)?;
        next_population.push(bit_flip(&child1, config.mutation_rate, rng));
        next_population.push(bit_flip(&child2, config.mutation_rate, rng));
    }
    // Appending children in pairs can overfill by one.
    next_population.truncate(config.population_size);

    Ok(next_population)
}

/// Index of the highest score; the first one wins on ties.
fn index_of_max(scores: &[u64]) -> usize {
    let mut best = 0;
    for (i, &score) in scores.iter().enumerate().skip(1) {
        if score > scores[best] {
            best = i;
        }
    }
    best
}
