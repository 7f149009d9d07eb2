//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → repair → evaluation, then per generation
//! selection → crossover → mutation/repair → replacement, until the best
//! fitness reaches the target or the generation limit is hit.

use super::config::GaConfig;
use super::replacement::{elitist_truncation, mean_fitness, sort_best_first};
use super::selection::select_parents;
use super::types::{GaProblem, Individual};
use crate::error::{ConfigError, GaError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Still evolving.
    Running,
    /// Best fitness reached [`GaConfig::target_fitness`].
    Converged,
    /// [`GaConfig::max_generations`] ran out before convergence.
    Exhausted,
}

/// Pipeline stage reported to a [`GenerationObserver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Parents chosen by tournament.
    Selection,
    /// Offspring after crossover, before mutation and repair.
    Crossover,
    /// Offspring after mutation, repair, and re-evaluation.
    Mutation,
    /// The next generation after elitist truncation.
    Replacement,
}

/// Fitness summary of one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// Generation index; `0` is the initial population.
    pub generation: usize,
    /// Highest fitness in the population.
    pub best_fitness: f64,
    /// Mean fitness of the population.
    pub mean_fitness: f64,
}

impl GenerationStats {
    fn of<I: Individual>(generation: usize, population: &[I]) -> Self {
        Self {
            generation,
            best_fitness: population
                .iter()
                .map(|i| i.fitness())
                .fold(f64::NEG_INFINITY, f64::max),
            mean_fitness: mean_fitness(population),
        }
    }
}

/// Receives progress from a running GA.
///
/// Both methods default to no-ops. `()` is the observer that ignores
/// everything.
pub trait GenerationObserver<I> {
    /// Called after each stage of a generation with the individuals that
    /// stage produced.
    fn on_stage(&mut self, _generation: usize, _stage: Stage, _individuals: &[I]) {}

    /// Called once per generation (including generation 0) with the
    /// population summary.
    fn on_generation(&mut self, _stats: &GenerationStats) {}
}

impl<I> GenerationObserver<I> for () {}

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The best individual of the final population.
    pub best: I,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: f64,

    /// Terminal state: [`RunState::Converged`] or [`RunState::Exhausted`].
    pub state: RunState,

    /// Number of generations executed after the initial population.
    pub generations: usize,

    /// Final population, best first.
    pub population: Vec<I>,

    /// Best and mean fitness of every generation, starting with generation 0.
    pub history: Vec<GenerationStats>,
}

impl<I: Individual> GaResult<I> {
    /// Whether the run reached the target fitness.
    pub fn converged(&self) -> bool {
        self.state == RunState::Converged
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA on a population built by [`GaProblem::initial_population`].
    ///
    /// # Errors
    /// Returns [`GaError::Config`] if `config` is invalid, or
    /// [`GaError::RepairExhausted`] if an individual cannot be repaired.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Individual>, GaError> {
        Self::run_observed(problem, config, &mut ())
    }

    /// Like [`run`](Self::run), reporting progress to `observer`.
    pub fn run_observed<P, O>(
        problem: &P,
        config: &GaConfig,
        observer: &mut O,
    ) -> Result<GaResult<P::Individual>, GaError>
    where
        P: GaProblem,
        O: GenerationObserver<P::Individual>,
    {
        config.validate()?;
        let mut rng = create_rng(config.seed);

        let population = problem.initial_population(config.population_size, &mut rng);
        evolve(problem, config, population, &mut rng, observer)
    }

    /// Runs the GA starting from a caller-supplied population.
    ///
    /// The population is repaired and re-evaluated before the first
    /// generation.
    ///
    /// # Errors
    /// Returns [`ConfigError::PopulationSizeMismatch`] if `population` does
    /// not hold exactly `config.population_size` individuals, plus the errors
    /// of [`run`](Self::run).
    pub fn run_with_population<P, O>(
        problem: &P,
        config: &GaConfig,
        population: Vec<P::Individual>,
        observer: &mut O,
    ) -> Result<GaResult<P::Individual>, GaError>
    where
        P: GaProblem,
        O: GenerationObserver<P::Individual>,
    {
        config.validate()?;
        if population.len() != config.population_size {
            return Err(ConfigError::PopulationSizeMismatch {
                expected: config.population_size,
                actual: population.len(),
            }
            .into());
        }
        let mut rng = create_rng(config.seed);
        evolve(problem, config, population, &mut rng, observer)
    }
}

/// Seeded or entropy-seeded RNG.
fn create_rng(seed: Option<u64>) -> StdRng {
    StdRng::seed_from_u64(seed.unwrap_or_else(rand::random))
}

fn evolve<P, O, R>(
    problem: &P,
    config: &GaConfig,
    mut population: Vec<P::Individual>,
    rng: &mut R,
    observer: &mut O,
) -> Result<GaResult<P::Individual>, GaError>
where
    P: GaProblem,
    O: GenerationObserver<P::Individual>,
    R: Rng,
{
    for ind in population.iter_mut() {
        problem.repair(ind, rng)?;
        score(problem, ind);
    }
    sort_best_first(&mut population);

    let mut history = Vec::with_capacity(config.max_generations + 1);
    let mut generation = 0;
    let mut state = next_state(config, &report(generation, &population, &mut history, observer));

    while state == RunState::Running {
        generation += 1;
        population = step(problem, config, population, generation, rng, observer)?;
        state = next_state(config, &report(generation, &population, &mut history, observer));
    }

    // Population size is validated to be at least 2 and replacement keeps
    // it constant, so the best-first population is never empty.
    let best = population[0].clone();
    log::info!(
        "GA finished: {:?} after {} generations, best fitness {:.4}",
        state,
        generation,
        best.fitness()
    );

    Ok(GaResult {
        best_fitness: best.fitness(),
        best,
        state,
        generations: generation,
        population,
        history,
    })
}

/// Runs one generation and returns the next population, best first.
fn step<P, O, R>(
    problem: &P,
    config: &GaConfig,
    population: Vec<P::Individual>,
    generation: usize,
    rng: &mut R,
    observer: &mut O,
) -> Result<Vec<P::Individual>, GaError>
where
    P: GaProblem,
    O: GenerationObserver<P::Individual>,
    R: Rng,
{
    // Selection
    let parents = select_parents(&population, config.effective_selection_size(), rng);
    log::trace!("generation {generation}: selected {} parents", parents.len());
    observer.on_stage(generation, Stage::Selection, &parents);

    // Crossover, pair by pair
    let mut offspring = Vec::with_capacity(parents.len());
    for pair in parents.chunks(2) {
        if let [p1, p2] = pair {
            if rng.random_range(0.0..1.0) < config.crossover_rate {
                let (mut c1, mut c2) = problem.crossover(p1, p2, rng);
                score(problem, &mut c1);
                score(problem, &mut c2);
                offspring.push(c1);
                offspring.push(c2);
            } else {
                offspring.push(p1.clone());
                offspring.push(p2.clone());
            }
        } else {
            offspring.extend_from_slice(pair);
        }
    }
    log::trace!("generation {generation}: crossover produced {} offspring", offspring.len());
    observer.on_stage(generation, Stage::Crossover, &offspring);

    // Mutation, then unconditional repair
    for child in offspring.iter_mut() {
        if rng.random_range(0.0..1.0) < config.mutation_rate {
            problem.mutate(child, rng);
        }
        problem.repair(child, rng)?;
        score(problem, child);
    }
    observer.on_stage(generation, Stage::Mutation, &offspring);

    // Replacement
    let next = elitist_truncation(population, offspring, config.population_size);
    observer.on_stage(generation, Stage::Replacement, &next);

    Ok(next)
}

/// Summarizes a generation, logs it, and hands it to the observer.
fn report<I, O>(
    generation: usize,
    population: &[I],
    history: &mut Vec<GenerationStats>,
    observer: &mut O,
) -> GenerationStats
where
    I: Individual,
    O: GenerationObserver<I>,
{
    let stats = GenerationStats::of(generation, population);
    log::debug!(
        "generation {}: best {:.4}, mean {:.4}",
        stats.generation,
        stats.best_fitness,
        stats.mean_fitness
    );
    observer.on_generation(&stats);
    history.push(stats);
    stats
}

fn next_state(config: &GaConfig, stats: &GenerationStats) -> RunState {
    if stats.best_fitness >= config.target_fitness {
        RunState::Converged
    } else if stats.generation >= config.max_generations {
        RunState::Exhausted
    } else {
        RunState::Running
    }
}

fn score<P: GaProblem>(problem: &P, individual: &mut P::Individual) {
    let f = problem.evaluate(individual);
    individual.set_fitness(f);
}

// ============================================================================
// Tests
// ============================================================================
