//! Running and comparing the three solvers.
//!
//! [`Algorithm`] names a solver and runs it with its default parameters;
//! [`compare_all`] times all three on one instance, and [`simulate`] repeats
//! that over randomly generated parks.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use rand::Rng;
use serde::Serialize;
use tracing::info;

use crate::constructive::GreedySolver;
use crate::error::ProblemError;
use crate::ga::{GeneticConfig, GeneticSolver};
use crate::generator::{random_instance, PARK_SIZE_RANGE};
use crate::local_search::{HillClimbConfig, HillClimbSolver};
use crate::models::{ProblemInstance, SolverResult};

/// The available solvers.
///
/// # Examples
///
/// ```
/// use u_itinerary::compare::Algorithm;
///
/// assert_eq!("hill".parse::<Algorithm>(), Ok(Algorithm::HillClimb));
/// assert_eq!("Genetic".parse::<Algorithm>(), Ok(Algorithm::Genetic));
/// assert!("annealing".parse::<Algorithm>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Algorithm {
    Greedy,
    HillClimb,
    Genetic,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::HillClimb, Algorithm::Genetic, Algorithm::Greedy];

    /// Command-line name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Greedy => "greedy",
            Algorithm::HillClimb => "hill",
            Algorithm::Genetic => "genetic",
        }
    }

    /// Display title.
    pub fn title(&self) -> &'static str {
        match self {
            Algorithm::Greedy => "Greedy Algorithm",
            Algorithm::HillClimb => "Hill Climbing",
            Algorithm::Genetic => "Genetic Algorithm",
        }
    }

    /// Runs this solver with default parameters and the given seed.
    pub fn solve(
        &self,
        problem: &ProblemInstance,
        seed: Option<u64>,
    ) -> Result<SolverResult, ProblemError> {
        let result = match self {
            Algorithm::Greedy => GreedySolver::new().solve(problem),
            Algorithm::HillClimb => {
                let mut config = HillClimbConfig::default();
                config.seed = seed;
                HillClimbSolver::new(config)?.solve(problem)
            }
            Algorithm::Genetic => {
                let mut config = GeneticConfig::default();
                config.seed = seed;
                GeneticSolver::new(config)?.solve(problem)
            }
        };
        Ok(result)
    }

    /// Runs this solver and measures its wall-clock time.
    pub fn run_timed(
        &self,
        problem: &ProblemInstance,
        seed: Option<u64>,
    ) -> Result<TimedResult, ProblemError> {
        let start = Instant::now();
        let result = self.solve(problem, seed)?;
        let elapsed = start.elapsed();
        info!(
            algorithm = self.name(),
            rides = result.ride_count(),
            total_time = result.total_time(),
            elapsed_ms = elapsed.as_secs_f64() * 1e3,
            "solver finished"
        );
        Ok(TimedResult {
            algorithm: *self,
            result,
            elapsed,
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ProblemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Algorithm::ALL
            .iter()
            .copied()
            .find(|a| a.name() == key)
            .ok_or_else(|| ProblemError::UnknownAlgorithm(key))
    }
}

/// A solver result with its computation time.
#[derive(Debug, Clone, Serialize)]
pub struct TimedResult {
    pub algorithm: Algorithm,
    pub result: SolverResult,
    pub elapsed: Duration,
}

/// All three solvers on one instance, in [`Algorithm::ALL`] order.
pub fn compare_all(
    problem: &ProblemInstance,
    seed: Option<u64>,
) -> Result<Vec<TimedResult>, ProblemError> {
    Algorithm::ALL
        .iter()
        .map(|a| a.run_timed(problem, seed))
        .collect()
}

/// Comparison on one generated park.
#[derive(Debug, Clone)]
pub struct ParkComparison {
    pub name: String,
    pub num_attractions: usize,
    pub results: Vec<TimedResult>,
}

/// Generates `num_parks` random instances and compares the solvers on each.
pub fn simulate<R: Rng + ?Sized>(
    num_parks: usize,
    rng: &mut R,
) -> Result<Vec<ParkComparison>, ProblemError> {
    (0..num_parks)
        .map(|i| {
            let name = i.to_string();
            let problem = random_instance(&name, PARK_SIZE_RANGE, rng)?;
            let seed = rng.random::<u64>();
            Ok(ParkComparison {
                name,
                num_attractions: problem.num_attractions(),
                results: compare_all(&problem, Some(seed))?,
            })
        })
        .collect()
}

/// Per-algorithm averages over a set of comparisons.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub algorithm: Algorithm,
    pub runs: usize,
    pub mean_rides: f64,
    pub mean_total_time: f64,
    pub mean_elapsed: Duration,
}

/// Averages ride count, total time and computation time per algorithm.
pub fn summarize(comparisons: &[ParkComparison]) -> Vec<Summary> {
    Algorithm::ALL
        .iter()
        .map(|&algorithm| {
            let runs: Vec<&TimedResult> = comparisons
                .iter()
                .flat_map(|c| c.results.iter())
                .filter(|r| r.algorithm == algorithm)
                .collect();
            let n = runs.len();
            let denom = n.max(1) as f64;
            let elapsed: Duration = runs.iter().map(|r| r.elapsed).sum();
            Summary {
                algorithm,
                runs: n,
                mean_rides: runs.iter().map(|r| r.result.ride_count() as f64).sum::<f64>() / denom,
                mean_total_time: runs.iter().map(|r| r.result.total_time() as f64).sum::<f64>()
                    / denom,
                mean_elapsed: elapsed / n.max(1) as u32,
            }
        })
        .collect()
}
