//! Error types.
//!
//! Configuration problems are rejected up front by [`ConfigError`]. Once a
//! run has started, the only failure the engine reports is a repair that
//! could not restore the piece counts ([`GaError::RepairExhausted`]).

use crate::board::Piece;

/// Invalid run or problem configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("population_size must be at least 2")]
    PopulationTooSmall,
    #[error("max_generations must be at least 1")]
    ZeroGenerations,
    #[error("selection_size must be at least 2")]
    SelectionTooSmall,
    #[error("{name} must lie in [0, 1], got {value}")]
    InvalidRate { name: &'static str, value: f64 },
    #[error("target_fitness must lie in (0, 1], got {0}")]
    InvalidTargetFitness(f64),
    #[error("total piece count {total} exceeds the 16 board cells")]
    TooManyPieces { total: usize },
    #[error("crossover point {0} is outside 0..=16")]
    InvalidCrossoverPoint(usize),
    #[error("max_repair_attempts must be positive")]
    ZeroRepairAttempts,
    #[error("initial population holds {actual} individuals, expected {expected}")]
    PopulationSizeMismatch { expected: usize, actual: usize },
}

/// Failure to parse a board from its textual form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("expected 16 cells, found {0}")]
    InvalidLength(usize),
    #[error("unknown cell symbol '{0}'")]
    InvalidSymbol(char),
}

/// Errors returned by a GA run.
#[derive(Debug, thiserror::Error)]
pub enum GaError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("repair could not place or remove {piece:?} after {attempts} attempts")]
    RepairExhausted { piece: Piece, attempts: usize },
}
