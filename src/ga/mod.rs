//! Genetic algorithm components for itinerary planning.
//!
//! - [`Chromosome`]: Ordered, repeat-free subset of the desired rides
//! - [`operators`]: Roulette selection, order crossover, swap mutation
//! - [`GeneticSolver`]: Generational loop with single-elite preservation

mod chromosome;
mod config;
pub mod operators;
mod solver;

pub use chromosome::Chromosome;
pub use config::GeneticConfig;
pub use solver::{Evolution, GeneticSolver};
