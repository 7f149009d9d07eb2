//! Elitist truncation replacement.
//!
//! The previous generation and the offspring compete for the same slots:
//! the pool is sorted by fitness (best first) and cut back to the
//! population size. The best individual seen so far always survives.

use super::types::Individual;
use std::cmp::Ordering;

/// Merges `previous` and `offspring` and keeps the `size` fittest.
///
/// The result is sorted best first. Ties keep no particular order.
pub fn elitist_truncation<I: Individual>(
    previous: Vec<I>,
    offspring: Vec<I>,
    size: usize,
) -> Vec<I> {
    let mut pool = previous;
    pool.extend(offspring);
    sort_best_first(&mut pool);
    pool.truncate(size);
    pool
}

/// Sorts a population by descending fitness.
pub fn sort_best_first<I: Individual>(population: &mut [I]) {
    population.sort_by(|a, b| b.fitness().partial_cmp(&a.fitness()).unwrap_or(Ordering::Equal));
}

/// The fittest individual, or `None` for an empty slice.
pub fn find_best<I: Individual>(population: &[I]) -> Option<&I> {
    population
        .iter()
        .max_by(|a, b| a.fitness().partial_cmp(&b.fitness()).unwrap_or(Ordering::Equal))
}

/// Mean fitness, `0.0` for an empty slice.
pub fn mean_fitness<I: Individual>(population: &[I]) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    population.iter().map(|i| i.fitness()).sum::<f64>() / population.len() as f64
}
