//! Multi-restart steepest-ascent hill climbing.
//!
//! # Algorithm
//!
//! 1. Shuffle the desired rides and walk them in that order, keeping each one
//!    that still fits (rides that don't fit are skipped, not retried).
//! 2. Repeatedly move to the best feasible neighbor (insertion or swap) while
//!    it strictly improves the [`Score`].
//! 3. Repeat from fresh random starts and keep the best local optimum.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

use super::config::HillClimbConfig;
use super::neighborhood::{best_neighbor, Score};
use crate::error::ProblemError;
use crate::evaluation::{CostModel, ORIGIN};
use crate::models::{ProblemInstance, SolverResult};
use crate::random::create_rng;

/// Outcome of a single climb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClimbTrace {
    /// Local optimum (or the itinerary reached when iterations ran out).
    pub solution: Vec<usize>,
    /// Score of the starting itinerary followed by the score after each move.
    pub scores: Vec<Score>,
}

/// Hill-climbing solver over the insertion/swap neighborhood.
///
/// # Examples
///
/// ```
/// use u_itinerary::distance::TravelMatrix;
/// use u_itinerary::local_search::{HillClimbConfig, HillClimbSolver};
/// use u_itinerary::models::{Attraction, Category, Park, ProblemInstance, Visitor};
///
/// let park = Park::new(
///     "Demo",
///     vec![Attraction::new(5, Category::Family); 3],
///     TravelMatrix::from_rows(vec![vec![0, 2, 9], vec![2, 0, 3], vec![9, 3, 0]]).unwrap(),
/// ).unwrap();
/// let problem = ProblemInstance::new(park, Visitor::new(vec![0, 1, 2], 30, None)).unwrap();
///
/// let solver = HillClimbSolver::new(HillClimbConfig::default().with_seed(42)).unwrap();
/// let result = solver.solve(&problem);
/// assert_eq!(result.ride_count(), 3);
/// assert!(result.total_time() <= 30);
/// ```
#[derive(Debug, Clone)]
pub struct HillClimbSolver {
    config: HillClimbConfig,
}

impl HillClimbSolver {
    /// Creates a solver, rejecting an invalid configuration.
    pub fn new(config: HillClimbConfig) -> Result<Self, ProblemError> {
        config.validate().map_err(ProblemError::InvalidConfig)?;
        Ok(Self { config })
    }

    /// Returns the solver configuration.
    pub fn config(&self) -> &HillClimbConfig {
        &self.config
    }

    /// Solves with a generator seeded from the configuration.
    pub fn solve(&self, problem: &ProblemInstance) -> SolverResult {
        let mut rng = create_rng(self.config.seed);
        self.solve_with_rng(problem, &mut rng)
    }

    /// Solves using the supplied random source.
    pub fn solve_with_rng<R: Rng + ?Sized>(
        &self,
        problem: &ProblemInstance,
        rng: &mut R,
    ) -> SolverResult {
        let model = CostModel::new(problem);
        let mut best: Option<(Vec<usize>, Score)> = None;

        for restart in 0..self.config.num_restarts {
            let initial = self.random_initial(&model, rng);
            let trace = self.climb(&model, initial);
            let score = Score::of(&model, &trace.solution);
            debug!(
                restart,
                moves = trace.scores.len() - 1,
                rides = score.rides,
                time = score.time,
                "hill climb restart finished"
            );

            let is_better = best.as_ref().is_none_or(|(_, b)| score > *b);
            if is_better {
                best = Some((trace.solution, score));
            }
        }

        let path = best.map(|(path, _)| path).unwrap_or_default();
        let total_time = model.path_time(&path);
        SolverResult::new(path, total_time)
    }

    /// Builds a random feasible starting itinerary.
    pub fn random_initial<R: Rng + ?Sized>(&self, model: &CostModel<'_>, rng: &mut R) -> Vec<usize> {
        let mut order = model.problem().desired_rides().to_vec();
        order.shuffle(rng);

        let budget = model.time_budget();
        let mut solution = Vec::new();
        let mut elapsed = 0;
        let mut prev = ORIGIN;
        for ride in order {
            let leg = model.leg_cost(prev, ride);
            if elapsed + leg <= budget {
                solution.push(ride);
                elapsed += leg;
                prev = ride;
            }
        }
        solution
    }

    /// Climbs from `initial` until no neighbor strictly improves or the
    /// iteration limit is reached.
    pub fn climb(&self, model: &CostModel<'_>, initial: Vec<usize>) -> ClimbTrace {
        let desired = model.problem().desired_rides();
        let mut current = initial;
        let mut score = Score::of(model, &current);
        let mut scores = vec![score];

        for _ in 0..self.config.max_iterations_per_restart {
            let Some((candidate, candidate_score)) = best_neighbor(model, desired, &current) else {
                break;
            };
            if candidate_score <= score {
                break;
            }
            trace!(
                rides = candidate_score.rides,
                time = candidate_score.time,
                "improving move"
            );
            current = candidate;
            score = candidate_score;
            scores.push(score);
        }

        ClimbTrace {
            solution: current,
            scores,
        }
    }
}
