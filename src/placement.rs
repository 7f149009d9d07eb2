//! Chess piece placement as a GA problem.
//!
//! [`PlacementProblem`] searches for a 4×4 board holding exactly the target
//! number of queens, rooks, bishops, and knights with as few threatened
//! pieces and queen-stacked columns as possible.
//!
//! # Example
//!
//! ```
//! use u_placement::board::PieceCounts;
//! use u_placement::ga::GaConfig;
//! use u_placement::placement::PlacementProblem;
//!
//! let problem = PlacementProblem::new(PieceCounts::new(2, 1, 0, 1)).unwrap();
//! let config = GaConfig::default().with_seed(42);
//! let result = problem.solve(&config).unwrap();
//!
//! assert_eq!(result.best.chromosome().piece_counts(), PieceCounts::new(2, 1, 0, 1));
//! assert!(result.best_fitness > 0.0 && result.best_fitness <= 1.0);
//! ```

use crate::board::{Chromosome, PieceCounts, CELLS};
use crate::error::{ConfigError, GaError};
use crate::fitness::fitness;
use crate::ga::operators::{random_cut_point, single_point_crossover, swap_mutation};
use crate::ga::{GaConfig, GaProblem, GaResult, GaRunner, GenerationObserver, Individual};
use rand::Rng;

/// Where single-point crossover cuts the chromosome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrossoverPoint {
    /// Always cut before this cell (`0..=16`).
    Fixed(usize),
    /// Draw a fresh cut in `1..16` for every pair.
    Random,
}

impl Default for CrossoverPoint {
    /// Cuts the board between rows 1 and 2.
    fn default() -> Self {
        CrossoverPoint::Fixed(CELLS / 2)
    }
}

impl CrossoverPoint {
    fn resolve<R: Rng>(self, rng: &mut R) -> usize {
        match self {
            CrossoverPoint::Fixed(point) => point.min(CELLS),
            CrossoverPoint::Random => random_cut_point(CELLS, rng),
        }
    }
}

/// A board together with its cached fitness.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    chromosome: Chromosome,
    fitness: f64,
}

impl Placement {
    /// Wraps a chromosome and evaluates it.
    pub fn new(chromosome: Chromosome) -> Self {
        Self {
            fitness: fitness(&chromosome),
            chromosome,
        }
    }

    /// The board.
    pub fn chromosome(&self) -> &Chromosome {
        &self.chromosome
    }

    /// Unwraps the board.
    pub fn into_chromosome(self) -> Chromosome {
        self.chromosome
    }
}

impl Individual for Placement {
    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

/// Default number of random draws per single repair placement or removal.
pub const DEFAULT_REPAIR_ATTEMPTS: usize = 10_000;

/// The piece placement problem.
///
/// Initial individuals are copies of the initial board (empty unless set
/// with [`with_initial_board`](Self::with_initial_board)), shuffled and then
/// repaired to the target counts. With
/// [`with_keep_initial_board`](Self::with_keep_initial_board) the first
/// individual keeps the board's layout and is only topped up by repair.
#[derive(Debug, Clone)]
pub struct PlacementProblem {
    targets: PieceCounts,
    initial_board: Chromosome,
    keep_initial_board: bool,
    crossover_point: CrossoverPoint,
    max_repair_attempts: usize,
}

impl PlacementProblem {
    /// Creates a problem for the given piece targets.
    ///
    /// # Errors
    /// Returns [`ConfigError::TooManyPieces`] if the targets exceed 16 cells.
    pub fn new(targets: PieceCounts) -> Result<Self, ConfigError> {
        targets.validate()?;
        Ok(Self {
            targets,
            initial_board: Chromosome::empty(),
            keep_initial_board: false,
            crossover_point: CrossoverPoint::default(),
            max_repair_attempts: DEFAULT_REPAIR_ATTEMPTS,
        })
    }

    /// Uses `board` (possibly with pieces already placed) as the template
    /// every initial individual is shuffled from.
    pub fn with_initial_board(mut self, board: Chromosome) -> Self {
        self.initial_board = board;
        self
    }

    /// Keeps the initial board unshuffled as the first individual.
    pub fn with_keep_initial_board(mut self, keep: bool) -> Self {
        self.keep_initial_board = keep;
        self
    }

    /// Sets the crossover cut.
    pub fn with_crossover_point(mut self, point: CrossoverPoint) -> Self {
        self.crossover_point = point;
        self
    }

    /// Sets the repair attempt bound.
    pub fn with_max_repair_attempts(mut self, attempts: usize) -> Self {
        self.max_repair_attempts = attempts;
        self
    }

    /// Target piece counts.
    pub fn targets(&self) -> &PieceCounts {
        &self.targets
    }

    /// Template board for the initial population.
    pub fn initial_board(&self) -> &Chromosome {
        &self.initial_board
    }

    /// Crossover cut setting.
    pub fn crossover_point(&self) -> CrossoverPoint {
        self.crossover_point
    }

    /// Validates the problem settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.targets.validate()?;
        if let CrossoverPoint::Fixed(point) = self.crossover_point {
            if point > CELLS {
                return Err(ConfigError::InvalidCrossoverPoint(point));
            }
        }
        if self.max_repair_attempts == 0 {
            return Err(ConfigError::ZeroRepairAttempts);
        }
        Ok(())
    }

    /// Validates the problem and runs the GA.
    pub fn solve(&self, config: &GaConfig) -> Result<GaResult<Placement>, GaError> {
        self.solve_observed(config, &mut ())
    }

    /// Like [`solve`](Self::solve), reporting progress to `observer`.
    pub fn solve_observed<O>(
        &self,
        config: &GaConfig,
        observer: &mut O,
    ) -> Result<GaResult<Placement>, GaError>
    where
        O: GenerationObserver<Placement>,
    {
        self.validate()?;
        log::info!(
            "placing {} queens, {} rooks, {} bishops, {} knights \
             (population {}, up to {} generations)",
            self.targets.queens,
            self.targets.rooks,
            self.targets.bishops,
            self.targets.knights,
            config.population_size,
            config.max_generations
        );
        GaRunner::run_observed(self, config, observer)
    }
}

impl GaProblem for PlacementProblem {
    type Individual = Placement;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Placement {
        let mut chromosome = self.initial_board;
        chromosome.shuffle(rng);
        Placement::new(chromosome)
    }

    fn initial_population<R: Rng>(&self, size: usize, rng: &mut R) -> Vec<Placement> {
        let shuffled = size.saturating_sub(usize::from(self.keep_initial_board));
        let mut population = Vec::with_capacity(size);
        if self.keep_initial_board && size > 0 {
            population.push(Placement::new(self.initial_board));
        }
        population.extend((0..shuffled).map(|_| self.create_individual(rng)));
        population
    }

    fn evaluate(&self, individual: &Placement) -> f64 {
        fitness(&individual.chromosome)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &Placement,
        parent2: &Placement,
        rng: &mut R,
    ) -> (Placement, Placement) {
        let point = self.crossover_point.resolve(rng);
        let (a, b) = single_point_crossover(
            parent1.chromosome.cells(),
            parent2.chromosome.cells(),
            point,
        );
        (
            Placement::new(Chromosome::from_cells(a)),
            Placement::new(Chromosome::from_cells(b)),
        )
    }

    fn mutate<R: Rng>(&self, individual: &mut Placement, rng: &mut R) {
        swap_mutation(individual.chromosome.cells_mut(), rng);
    }

    fn repair<R: Rng>(&self, individual: &mut Placement, rng: &mut R) -> Result<(), GaError> {
        individual
            .chromosome
            .repair(&self.targets, self.max_repair_attempts, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;
    use crate::ga::RunState;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn board(s: &str) -> Chromosome {
        s.parse().expect("valid board")
    }

    #[test]
    fn test_new_rejects_too_many_pieces() {
        let err = PlacementProblem::new(PieceCounts::new(4, 4, 4, 5)).unwrap_err();
        assert_eq!(err, ConfigError::TooManyPieces { total: 17 });
    }

    #[test]
    fn test_validate() {
        let problem = PlacementProblem::new(PieceCounts::new(1, 0, 0, 0)).unwrap();
        assert!(problem.validate().is_ok());
        assert_eq!(
            problem
                .clone()
                .with_crossover_point(CrossoverPoint::Fixed(17))
                .validate(),
            Err(ConfigError::InvalidCrossoverPoint(17))
        );
        assert_eq!(
            problem.with_max_repair_attempts(0).validate(),
            Err(ConfigError::ZeroRepairAttempts)
        );
    }

    #[test]
    fn test_create_individual_shuffles_initial_board() {
        let problem = PlacementProblem::new(PieceCounts::new(2, 1, 0, 0))
            .unwrap()
            .with_initial_board(board("QQRE EEEE EEEE EEEE"));
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let ind = problem.create_individual(&mut rng);
            assert_eq!(ind.chromosome().piece_counts(), PieceCounts::new(2, 1, 0, 0));
            assert_eq!(ind.fitness(), fitness(ind.chromosome()));
        }
    }

    #[test]
    fn test_initial_population_keeps_initial_board_first() {
        let initial = board("QEEE EEEE EEEE EEER");
        let problem = PlacementProblem::new(PieceCounts::new(1, 1, 0, 0))
            .unwrap()
            .with_initial_board(initial)
            .with_keep_initial_board(true);
        let mut rng = StdRng::seed_from_u64(9);

        let population = problem.initial_population(10, &mut rng);

        assert_eq!(population.len(), 10);
        assert_eq!(*population[0].chromosome(), initial);
        for ind in &population[1..] {
            assert_eq!(ind.chromosome().piece_counts(), PieceCounts::new(1, 1, 0, 0));
        }
    }

    #[test]
    fn test_initial_population_shuffles_every_slot_by_default() {
        let problem = PlacementProblem::new(PieceCounts::new(1, 0, 0, 0)).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(problem.initial_population(7, &mut rng).len(), 7);
        assert!(problem
            .clone()
            .with_keep_initial_board(true)
            .initial_population(0, &mut rng)
            .is_empty());
    }

    #[test]
    fn test_solve_keeps_initial_layout_when_already_optimal() {
        // Already conflict-free with the target counts: slot 0 converges at once.
        let initial = board("EQEE EEEQ QEEE EEQE");
        let problem = PlacementProblem::new(PieceCounts::new(4, 0, 0, 0))
            .unwrap()
            .with_initial_board(initial)
            .with_keep_initial_board(true);

        let result = problem.solve(&GaConfig::default().with_seed(2)).unwrap();

        assert_eq!(result.state, RunState::Converged);
        assert_eq!(result.generations, 0);
        assert_eq!(result.best_fitness, 1.0);
    }

    #[test]
    fn test_solve_full_board_targets() {
        let targets = PieceCounts::new(4, 4, 4, 4);
        let problem = PlacementProblem::new(targets).unwrap();

        for seed in 0..5 {
            let config = GaConfig::default().with_max_generations(50).with_seed(seed);
            let result = problem.solve(&config).unwrap();
            assert_eq!(result.generations, 50);
            for ind in &result.population {
                assert_eq!(ind.chromosome().piece_counts(), targets);
                assert_eq!(ind.chromosome().empty_count(), 0);
            }
        }
    }

    #[test]
    fn test_fixed_crossover_splits_at_row_boundary() {
        let problem = PlacementProblem::new(PieceCounts::new(4, 0, 0, 0)).unwrap();
        let p1 = Placement::new(board("QQQQ EEEE EEEE EEEE"));
        let p2 = Placement::new(board("EEEE EEEE KKKK BBBB"));
        let mut rng = StdRng::seed_from_u64(0);

        let (c1, c2) = problem.crossover(&p1, &p2, &mut rng);

        assert_eq!(*c1.chromosome(), board("QQQQ EEEE KKKK BBBB"));
        assert_eq!(*c2.chromosome(), Chromosome::empty());
        // Offspring fitness is evaluated from the child, not inherited.
        assert_eq!(c1.fitness(), fitness(c1.chromosome()));
        assert_eq!(c2.fitness(), 1.0);
    }

    #[test]
    fn test_random_crossover_preserves_cells() {
        let problem = PlacementProblem::new(PieceCounts::new(2, 0, 0, 0))
            .unwrap()
            .with_crossover_point(CrossoverPoint::Random);
        let p1 = Placement::new(board("QEEE EEEE EEEE EEEQ"));
        let p2 = Placement::new(board("EEEE EQQE EEEE EEEE"));
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..50 {
            let (c1, c2) = problem.crossover(&p1, &p2, &mut rng);
            assert_eq!(
                c1.chromosome().count(Piece::Queen) + c2.chromosome().count(Piece::Queen),
                4
            );
        }
    }

    #[test]
    fn test_mutate_keeps_counts_and_repair_restores_targets() {
        let targets = PieceCounts::new(1, 2, 1, 1);
        let problem = PlacementProblem::new(targets).unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        let mut ind = Placement::new(board("QQQR RRBB KKEE EEEE"));
        let before = ind.chromosome().piece_counts();
        problem.mutate(&mut ind, &mut rng);
        assert_eq!(ind.chromosome().piece_counts(), before);

        problem.repair(&mut ind, &mut rng).unwrap();
        assert_eq!(ind.chromosome().piece_counts(), targets);
        assert_eq!(ind.chromosome().empty_count(), 16 - targets.total());
    }

    #[test]
    fn test_solve_empty_targets_converges_immediately() {
        let problem = PlacementProblem::new(PieceCounts::default()).unwrap();
        let result = problem.solve(&GaConfig::default().with_seed(1)).unwrap();

        assert_eq!(result.state, RunState::Converged);
        assert_eq!(result.generations, 0);
        assert_eq!(result.best_fitness, 1.0);
        assert_eq!(*result.best.chromosome(), Chromosome::empty());
    }

    #[test]
    fn test_solve_rejects_invalid_problem() {
        let problem = PlacementProblem::new(PieceCounts::new(1, 0, 0, 0))
            .unwrap()
            .with_max_repair_attempts(0);
        let err = problem.solve(&GaConfig::default()).unwrap_err();
        assert!(matches!(err, GaError::Config(ConfigError::ZeroRepairAttempts)));
    }

    #[test]
    fn test_solve_population_respects_targets() {
        let targets = PieceCounts::new(1, 1, 2, 2);
        let problem = PlacementProblem::new(targets).unwrap();
        let config = GaConfig::default().with_max_generations(25).with_seed(3);

        let result = problem.solve(&config).unwrap();

        assert_eq!(result.population.len(), 10);
        for ind in &result.population {
            assert_eq!(ind.chromosome().piece_counts(), targets);
            assert_eq!(ind.fitness(), fitness(ind.chromosome()));
        }
    }
}
