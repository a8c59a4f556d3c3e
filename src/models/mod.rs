//! Domain model types for itinerary planning.
//!
//! Provides attractions with durations and categories, the calendar tables
//! that decide which category is delayed on the visit day, park and visitor
//! data, the validated problem instance, and the result every solver reports.

mod attraction;
mod calendar;
mod park;
mod problem;
mod solution;

pub use attraction::{Attraction, Category};
pub use calendar::{CategoryDelays, DayEffects, Weekday};
pub use park::{Park, Visitor};
pub use problem::ProblemInstance;
pub use solution::SolverResult;
