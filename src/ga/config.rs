//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::ConfigError;

/// Configuration for the Genetic Algorithm.
///
/// Controls population size, operator rates, and termination conditions.
///
/// # Defaults
///
/// ```
/// use u_placement::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 10);
/// assert_eq!(config.max_generations, 200);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_placement::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_crossover_rate(0.9)
///     .with_mutation_rate(0.2)
///     .with_target_fitness(0.99)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Maximum number of generations before the run is exhausted.
    pub max_generations: usize,

    /// Number of parents drawn by tournament selection each generation.
    ///
    /// `None` draws as many parents as there are individuals. Parents are
    /// paired in order; an odd final parent is cloned into the offspring.
    pub selection_size: Option<usize>,

    /// Probability of recombining a pair of parents (0.0–1.0).
    ///
    /// When crossover is not applied, both parents are cloned.
    pub crossover_rate: f64,

    /// Probability of applying mutation to an offspring (0.0–1.0).
    ///
    /// Repair runs regardless of this draw.
    pub mutation_rate: f64,

    /// Best fitness at which the run counts as converged.
    ///
    /// `1.0` requires a conflict-free board. Values slightly below it
    /// (e.g. `0.99`) accept near-optimal results.
    pub target_fitness: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            max_generations: 200,
            selection_size: None,
            crossover_rate: 0.8,
            mutation_rate: 0.1,
            target_fitness: 1.0,
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

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the number of parents selected per generation.
    pub fn with_selection_size(mut self, k: usize) -> Self {
        self.selection_size = Some(k);
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the fitness at which the run stops as converged.
    pub fn with_target_fitness(mut self, fitness: f64) -> Self {
        self.target_fitness = fitness;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of parents selected per generation.
    pub fn effective_selection_size(&self) -> usize {
        self.selection_size.unwrap_or(self.population_size)
    }

    /// Validates the configuration.
    ///
    /// Rates written to the fields directly (or deserialized) bypass the
    /// builder clamp and are checked here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall);
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        if self.effective_selection_size() < 2 {
            return Err(ConfigError::SelectionTooSmall);
        }
        for (name, value) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidRate { name, value });
            }
        }
        if !(self.target_fitness > 0.0 && self.target_fitness <= 1.0) {
            return Err(ConfigError::InvalidTargetFitness(self.target_fitness));
        }
        Ok(())
    }
}
