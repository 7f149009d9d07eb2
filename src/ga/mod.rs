//! Genetic Algorithm engine.
//!
//! A generic GA built on trait-based abstractions. Problems plug in by
//! implementing [`GaProblem`], which specifies how to create, evaluate,
//! recombine, mutate, and repair individuals. Fitness is maximized.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution carrying its cached fitness
//! - [`GaProblem`]: Problem definition — initialization, evaluation, operators
//! - [`GenerationObserver`]: Optional per-stage and per-generation callbacks
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, target)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final population, best individual, and history
//!
//! # Submodules
//!
//! - [`operators`]: Single-point crossover and swap mutation on fixed arrays
//! - [`selection`]: Binary tournament selection
//! - [`replacement`]: Elitist truncation of the parent + offspring pool
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
pub mod replacement;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner, GenerationObserver, GenerationStats, RunState, Stage};
pub use types::{GaProblem, Individual};
