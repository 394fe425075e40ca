//! Evolutionary 0/1 knapsack solver.
//!
//! Solves the 0/1 knapsack problem — pick a subset of items maximizing
//! total value under a weight capacity — with a population-based genetic
//! algorithm instead of exact search. The algorithm is a heuristic: it
//! converges quickly on good solutions but carries no optimality guarantee.
//!
//! # Core Pieces
//!
//! - [`ga::Item`]: one catalog entry, a `(value, weight)` pair
//! - [`ga::Individual`]: a candidate solution, a fixed-length binary gene vector
//! - [`ga::evaluate`]: fitness = total value, or 0 for infeasible solutions
//! - [`ga::Selection`]: tournament and roulette parent selection
//! - [`ga::Crossover`]: single-point and uniform recombination
//! - [`ga::bit_flip`]: independent per-gene mutation
//! - [`ga::GaRunner`]: the generational loop with elitism
//!
//! # Example
//!
//! ```
//! use knapsack_evo::ga::{GaConfig, GaRunner, Item};
//!
//! let items = vec![
//!     Item::new(6, 3),
//!     Item::new(8, 4),
//!     Item::new(12, 6),
//!     Item::new(10, 5),
//! ];
//! let config = GaConfig::default()
//!     .with_population_size(30)
//!     .with_generations(30)
//!     .with_seed(42);
//!
//! let result = GaRunner::run(&items, 10, &config).unwrap();
//! assert!(result.best_fitness > 0);
//! ```

pub mod ga;

#[cfg(feature = "plot")]
pub mod chart;
