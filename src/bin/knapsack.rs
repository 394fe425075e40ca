//! Demo entry point: evolve a knapsack packing over a random item
//! catalog and print the run's progress and result breakdown.
//!
//! Build with `--features plot` to also render the convergence chart
//! to `fitness_history.png`.

use knapsack_evo::ga::{GaConfig, GaRunner, Item};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const NUM_ITEMS: usize = 50;
const KNAPSACK_CAPACITY: u64 = 200;

/// Random catalog: values in 1..=20, weights in 1..=15, capacity
/// proportional to the item count.
fn random_items<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Item> {
    (0..count)
        .map(|_| Item::new(rng.random_range(1..=20), rng.random_range(1..=15)))
        .collect()
}

fn main() {
    let mut rng = StdRng::seed_from_u64(rand::random());
    let items = random_items(NUM_ITEMS, &mut rng);
    let config = GaConfig::default();

    println!("=== Knapsack Optimization with Genetic Algorithm ===");
    println!("Items: {}", items.len());
    println!("Knapsack capacity: {KNAPSACK_CAPACITY}");
    println!("Population size: {}", config.population_size);
    println!("Generations: {}", config.generations);
    println!("Mutation rate: {}", config.mutation_rate);
    println!("{}", "-".repeat(50));

    let generations = config.generations;
    let outcome = GaRunner::run_with_observer(
        &items,
        KNAPSACK_CAPACITY,
        &config,
        &mut rng,
        |generation, best, avg| {
            if generation % 10 == 0 || generation + 1 == generations {
                println!("Generation {generation:3}: Best={best:3}, Avg={avg:6.2}");
            }
        },
    );

    let result = match outcome {
        Ok(result) => result,
        Err(err) => {
            eprintln!("Error during execution: {err}");
            std::process::exit(1);
        }
    };

    println!();
    println!("{}", "=".repeat(50));
    println!("RESULTS");
    println!("{}", "=".repeat(50));
    println!("Best fitness achieved: {}", result.best_fitness);
    println!("Best solution: {:?}", result.best_solution.genes());

    let total_weight: u64 = result
        .best_solution
        .selected()
        .map(|i| items[i].weight)
        .sum();
    println!("Total weight: {total_weight}/{KNAPSACK_CAPACITY}");
    println!(
        "Weight utilization: {:.1}%",
        total_weight as f64 / KNAPSACK_CAPACITY as f64 * 100.0
    );
    println!();
    println!("Selected items:");
    for idx in result.best_solution.selected() {
        println!("  Item {idx}: {}", items[idx]);
    }

    #[cfg(feature = "plot")]
    match knapsack_evo::chart::render_convergence(
        "fitness_history.png",
        &result.best_fitness_history,
        &result.avg_fitness_history,
    ) {
        Ok(()) => println!("\nConvergence chart written to fitness_history.png"),
        Err(err) => eprintln!("Failed to render chart: {err}"),
    }
}
