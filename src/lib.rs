//! # u-itinerary
//!
//! Theme park itinerary optimization: choose and order the rides a visitor
//! can fit in a time budget, maximizing the ride count and then minimizing
//! elapsed time. Travel, ride duration and a day-dependent category delay
//! all count against the budget.
//!
//! ## Modules
//!
//! - [`models`]: Domain model types (Attraction, Park, Visitor, ProblemInstance, SolverResult)
//! - [`distance`]: Travel time matrix
//! - [`evaluation`]: Shared cost model: ride delay, path time, feasibility
//! - [`constructive`]: Greedy nearest-neighbor construction
//! - [`local_search`]: Multi-restart hill climbing over insertion/swap moves
//! - [`ga`]: Genetic algorithm with roulette selection and order crossover
//! - [`generator`]: Synthetic park and visitor data
//! - [`compare`]: Algorithm dispatch and timed comparisons
//! - [`error`]: Input validation and configuration errors

pub mod compare;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod ga;
pub mod generator;
pub mod local_search;
pub mod models;
pub mod random;
