//! Core trait definitions for the GA engine.
//!
//! The two central traits — [`Individual`] and [`GaProblem`] — define the
//! contract between the generic evolutionary loop and the problem being
//! solved.

use crate::error::GaError;
use rand::Rng;

/// A candidate solution in the GA population.
///
/// Individuals carry their own fitness value. The GA engine calls
/// [`GaProblem::evaluate`] to compute fitness, then stores it via
/// [`set_fitness`](Individual::set_fitness).
///
/// Fitness is **maximized**: higher values are better.
///
/// # Implementing
///
/// ```ignore
/// #[derive(Clone)]
/// struct MySolution {
///     genes: [u8; 16],
///     fitness: f64,
/// }
///
/// impl Individual for MySolution {
///     fn fitness(&self) -> f64 { self.fitness }
///     fn set_fitness(&mut self, f: f64) { self.fitness = f; }
/// }
/// ```
pub trait Individual: Clone {
    /// Returns the cached fitness of this individual.
    fn fitness(&self) -> f64;

    /// Sets the fitness of this individual.
    ///
    /// Called by the GA engine after every change to the genes.
    fn set_fitness(&mut self, fitness: f64);
}

/// Defines a GA optimization problem.
///
/// Covers:
///
/// 1. **Initialization**: How to create an individual for the first generation
/// 2. **Evaluation**: How to compute fitness
/// 3. **Crossover**: How to recombine two parents into two children
/// 4. **Mutation**: How to perturb an individual
/// 5. **Repair**: How to restore problem invariants after crossover/mutation
pub trait GaProblem {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates an individual for the initial population.
    ///
    /// The engine repairs and evaluates it before it joins the population,
    /// so it does not have to satisfy the problem invariants yet.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Builds the initial population of `size` individuals.
    ///
    /// The default implementation calls
    /// [`create_individual`](Self::create_individual) `size` times.
    fn initial_population<R: Rng>(&self, size: usize, rng: &mut R) -> Vec<Self::Individual> {
        (0..size).map(|_| self.create_individual(rng)).collect()
    }

    /// Evaluates an individual and returns its fitness (higher is better).
    fn evaluate(&self, individual: &Self::Individual) -> f64;

    /// Produces two children by recombining two parents.
    ///
    /// Children may violate the problem invariants; [`repair`](Self::repair)
    /// runs before they re-enter the population.
    ///
    /// The default implementation clones both parents (no crossover).
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        _rng: &mut R,
    ) -> (Self::Individual, Self::Individual) {
        (parent1.clone(), parent2.clone())
    }

    /// Mutates an individual in place.
    ///
    /// The default implementation is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}

    /// Restores the problem invariants of an individual in place.
    ///
    /// Called unconditionally for every offspring and every initial
    /// individual. The default implementation is a no-op.
    fn repair<R: Rng>(
        &self,
        _individual: &mut Self::Individual,
        _rng: &mut R,
    ) -> Result<(), GaError> {
        Ok(())
    }
}
