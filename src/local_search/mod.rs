//! Local search for improving itineraries.
//!
//! - [`neighborhood`]: Insertion and swap moves, [`Score`] ordering
//! - [`HillClimbSolver`]: Multi-restart steepest-ascent hill climbing

mod config;
mod hill_climb;
pub mod neighborhood;

pub use config::HillClimbConfig;
pub use hill_climb::{ClimbTrace, HillClimbSolver};
pub use neighborhood::Score;
