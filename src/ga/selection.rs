//! Binary tournament selection.
//!
//! Each tournament draws two distinct individuals uniformly at random and
//! keeps the fitter one. Tournaments are independent, so the same
//! individual can win any number of them.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Individual;
use rand::Rng;

/// Runs one binary tournament and returns the winner's index.
///
/// Ties go to either contestant.
///
/// # Panics
/// Panics if `population` has fewer than two individuals.
pub fn tournament<I: Individual, R: Rng>(population: &[I], rng: &mut R) -> usize {
    let n = population.len();
    assert!(n >= 2, "tournament needs at least two individuals");

    let a = rng.random_range(0..n);
    // Draw from the n - 1 remaining slots so that b != a.
    let mut b = rng.random_range(0..n - 1);
    if b >= a {
        b += 1;
    }

    if population[a].fitness() > population[b].fitness() {
        a
    } else {
        b
    }
}

/// Selects `count` parents by repeated binary tournaments.
///
/// Winners are cloned; `population` is left untouched.
///
/// # Panics
/// Panics if `population` has fewer than two individuals.
pub fn select_parents<I: Individual, R: Rng>(
    population: &[I],
    count: usize,
    rng: &mut R,
) -> Vec<I> {
    (0..count)
        .map(|_| population[tournament(population, rng)].clone())
        .collect()
}
