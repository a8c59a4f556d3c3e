//! Solver output.

use serde::{Deserialize, Serialize};

/// The answer a solver reports: an itinerary and its total elapsed time.
///
/// The ride count is always the itinerary length.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::SolverResult;
///
/// let r = SolverResult::new(vec![1, 2, 0], 29);
/// assert_eq!(r.ride_count(), 3);
/// assert_eq!(r.total_time(), 29);
/// assert_eq!(r.into_parts(), (3, 29, vec![1, 2, 0]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverResult {
    ride_count: usize,
    total_time: u64,
    path: Vec<usize>,
}

impl SolverResult {
    /// Creates a result for the given path and reported total time.
    pub fn new(path: Vec<usize>, total_time: u64) -> Self {
        Self {
            ride_count: path.len(),
            total_time,
            path,
        }
    }

    /// The empty itinerary: no rides, no time.
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0)
    }

    /// Number of rides in the path.
    pub fn ride_count(&self) -> usize {
        self.ride_count
    }

    /// Total elapsed minutes reported by the solver.
    pub fn total_time(&self) -> u64 {
        self.total_time
    }

    /// Rides in visiting order.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Consumes the result into `(ride_count, total_time, path)`.
    pub fn into_parts(self) -> (usize, u64, Vec<usize>) {
        (self.ride_count, self.total_time, self.path)
    }
}

impl Default for SolverResult {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_empty() {
        let r = SolverResult::empty();
        assert_eq!(r.ride_count(), 0);
        assert_eq!(r.total_time(), 0);
        assert!(r.path().is_empty());
        assert_eq!(r, SolverResult::default());
    }

    #[test]
    fn test_ride_count_tracks_path() {
        let r = SolverResult::new(vec![4, 2], 17);
        assert_eq!(r.ride_count(), r.path().len());
    }
}
