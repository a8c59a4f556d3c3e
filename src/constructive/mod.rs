//! Constructive heuristics for building itineraries in a single pass.
//!
//! - [`GreedySolver`]: Nearest-neighbor walk under the remaining-time ledger, O(n²)

mod greedy;

pub use greedy::{GreedySolver, GreedyTrace};
