//! Genetic algorithm for the 0/1 knapsack problem.
//!
//! Candidate solutions are fixed-length binary gene vectors, one gene per
//! catalog item (`1` = item included). Fitness is the total value of the
//! selected items, or the sentinel `0` when the selection is overweight or
//! worthless. The [`GaRunner`] drives the generational loop:
//! evaluate → select → crossover → mutate → replace, with elitism.
//!
//! # Key Types
//!
//! - [`GaConfig`]: algorithm parameters (population size, rates, elitism)
//! - [`GaRunner`]: executes the evolutionary loop
//! - [`GaResult`]: best solution found plus per-generation statistics
//! - [`Selection`] / [`Crossover`]: interchangeable operator strategies
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod crossover;
mod error;
mod fitness;
mod mutation;
mod population;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use crossover::Crossover;
pub use error::GaError;
pub use fitness::{evaluate, evaluate_population, INVALID_SOLUTION_SCORE};
pub use mutation::bit_flip;
pub use population::create_population;
pub use runner::{GaResult, GaRunner};
pub use selection::Selection;
pub use types::{Individual, Item};
