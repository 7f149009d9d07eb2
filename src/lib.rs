//! Genetic-algorithm search for chess piece placements on a 4×4 board.
//!
//! Given how many queens, rooks, bishops, and knights must appear, the
//! engine evolves boards that minimize the number of threatened pieces and
//! the number of columns holding more than one queen.
//!
//! - **Board** ([`board`]): 16-cell chromosome, pieces, target counts, repair.
//! - **Fitness** ([`fitness`]): `1 / (1 + threatened cells + stacked-queen columns)`.
//! - **GA engine** ([`ga`]): Generic tournament selection, single-point
//!   crossover, swap mutation with repair, elitist truncation, and the
//!   generational driver.
//! - **Placement problem** ([`placement`]): Wires the board into the engine.
//!
//! # Quick Start
//!
//! ```
//! use u_placement::board::PieceCounts;
//! use u_placement::ga::GaConfig;
//! use u_placement::placement::PlacementProblem;
//!
//! let problem = PlacementProblem::new(PieceCounts::new(4, 0, 0, 0))?;
//! let result = problem.solve(&GaConfig::default().with_seed(1))?;
//! println!("{}\nfitness {:.3}", result.best.chromosome(), result.best_fitness);
//! # Ok::<(), u_placement::GaError>(())
//! ```
//!
//! # Architecture
//!
//! The engine is single-threaded and synchronous. The only state shared
//! across a run is the population owned by the driver; operators take
//! their inputs by reference and return new values.

pub mod board;
pub mod error;
pub mod fitness;
pub mod ga;
pub mod placement;

pub use error::{BoardError, ConfigError, GaError};
