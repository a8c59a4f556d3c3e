//! Nearest-neighbor itinerary construction.
//!
//! Starting from the origin, repeatedly walk to the closest desired ride that
//! is reachable with the time left, as long as riding it still fits.
//!
//! # Complexity
//!
//! O(n²) where n = number of desired rides.

use tracing::{debug, trace};

use crate::evaluation::{CostModel, ORIGIN};
use crate::models::{ProblemInstance, SolverResult};

/// Greedy nearest-neighbor solver.
///
/// Candidates are rides not yet visited whose travel time from the current
/// position does not exceed the remaining time. The closest wins, ties going
/// to the first in desired-ride order. If the chosen ride's full leg (travel,
/// duration and delay) would overdraw the remaining time, construction stops
/// without it.
///
/// The reported total time is read off the remaining-time ledger
/// (`budget - remaining`) rather than recomputed from the path.
///
/// # Examples
///
/// ```
/// use u_itinerary::constructive::GreedySolver;
/// use u_itinerary::distance::TravelMatrix;
/// use u_itinerary::models::{Attraction, Category, Park, ProblemInstance, Visitor};
///
/// let park = Park::new(
///     "Demo",
///     vec![Attraction::new(5, Category::Family); 3],
///     TravelMatrix::from_rows(vec![vec![0, 2, 9], vec![2, 0, 3], vec![9, 3, 0]]).unwrap(),
/// ).unwrap();
/// let problem = ProblemInstance::new(park, Visitor::new(vec![0, 1, 2], 30, None)).unwrap();
///
/// let result = GreedySolver::new().solve(&problem);
/// assert_eq!(result.into_parts(), (3, 28, vec![1, 0, 2]));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySolver;

/// Ledger state after a greedy construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreedyTrace {
    /// Rides in visiting order.
    pub path: Vec<usize>,
    /// Time left on the ledger when construction stopped.
    pub remaining: u64,
}

impl GreedySolver {
    /// Creates the solver.
    pub fn new() -> Self {
        Self
    }

    /// Builds an itinerary and reports its ledger-based total time.
    pub fn solve(&self, problem: &ProblemInstance) -> SolverResult {
        let budget = problem.time_budget();
        let trace = self.construct(problem);
        let total_time = budget - trace.remaining;
        debug!(
            rides = trace.path.len(),
            total_time, "greedy construction finished"
        );
        SolverResult::new(trace.path, total_time)
    }

    /// Runs the construction and returns the path with the final ledger.
    pub fn construct(&self, problem: &ProblemInstance) -> GreedyTrace {
        let model = CostModel::new(problem);
        let travel = problem.travel();
        let desired = problem.desired_rides();

        let mut current = ORIGIN;
        let mut remaining = problem.time_budget();
        let mut visited = vec![false; problem.num_attractions()];
        let mut path = Vec::new();

        loop {
            let candidates = desired
                .iter()
                .copied()
                .filter(|&r| !visited[r] && r != current);
            let Some(next) = travel.nearest_within(current, candidates, remaining) else {
                break;
            };

            let step = model.leg_cost(current, next);
            let Some(left) = remaining.checked_sub(step) else {
                trace!(ride = next, step, remaining, "next ride does not fit");
                break;
            };
            remaining = left;

            trace!(ride = next, step, remaining, "ride accepted");
            visited[next] = true;
            path.push(next);
            current = next;
        }

        GreedyTrace { path, remaining }
    }
}
