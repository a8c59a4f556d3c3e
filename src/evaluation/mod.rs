//! Cost and feasibility evaluation.
//!
//! [`CostModel`] is the single place travel, duration and category delay are
//! combined; every solver goes through it.

mod cost_model;

pub use cost_model::{CostModel, ORIGIN};
