//! Insertion and swap neighborhood of an itinerary.
//!
//! # Moves
//!
//! - **Insertion**: place a desired ride not yet in the itinerary at any
//!   position `0..=len`.
//! - **Swap**: exchange the rides at positions `i < j`.
//!
//! Only feasible candidates are kept. Enumeration order is fixed: all
//! insertions (by desired-ride order, then position) before all swaps (by
//! `i`, then `j`), so the first best candidate is well defined.
//!
//! # Complexity
//!
//! O(m·n + n²) candidates for m desired rides and an itinerary of length n,
//! each costing O(n) to evaluate.

use std::cmp::Ordering;

use crate::evaluation::CostModel;

/// Quality of an itinerary: more rides is better; among equal ride counts,
/// less elapsed time is better.
///
/// # Examples
///
/// ```
/// use u_itinerary::local_search::Score;
///
/// assert!(Score::new(3, 50) > Score::new(2, 10));
/// assert!(Score::new(3, 40) > Score::new(3, 50));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub rides: usize,
    pub time: u64,
}

impl Score {
    /// Creates a score from a ride count and a total time.
    pub fn new(rides: usize, time: u64) -> Self {
        Self { rides, time }
    }

    /// Scores `path` under `model`.
    pub fn of(model: &CostModel<'_>, path: &[usize]) -> Self {
        Self::new(path.len(), model.path_time(path))
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rides
            .cmp(&other.rides)
            .then_with(|| other.time.cmp(&self.time))
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Feasible itineraries obtained by inserting one missing desired ride.
pub fn insertion_neighbors(
    model: &CostModel<'_>,
    desired: &[usize],
    solution: &[usize],
) -> Vec<Vec<usize>> {
    let mut neighbors = Vec::new();
    for &ride in desired {
        if solution.contains(&ride) {
            continue;
        }
        for pos in 0..=solution.len() {
            let mut candidate = Vec::with_capacity(solution.len() + 1);
            candidate.extend_from_slice(&solution[..pos]);
            candidate.push(ride);
            candidate.extend_from_slice(&solution[pos..]);
            if model.is_feasible(&candidate) {
                neighbors.push(candidate);
            }
        }
    }
    neighbors
}

/// Feasible itineraries obtained by swapping two positions.
pub fn swap_neighbors(model: &CostModel<'_>, solution: &[usize]) -> Vec<Vec<usize>> {
    let mut neighbors = Vec::new();
    for i in 0..solution.len() {
        for j in (i + 1)..solution.len() {
            let mut candidate = solution.to_vec();
            candidate.swap(i, j);
            if model.is_feasible(&candidate) {
                neighbors.push(candidate);
            }
        }
    }
    neighbors
}

/// The full neighborhood: insertions followed by swaps.
pub fn neighbors(model: &CostModel<'_>, desired: &[usize], solution: &[usize]) -> Vec<Vec<usize>> {
    let mut all = insertion_neighbors(model, desired, solution);
    all.extend(swap_neighbors(model, solution));
    all
}

/// Best-scoring neighbor, ties going to the earliest in enumeration order.
///
/// Returns `None` when no feasible neighbor exists.
pub fn best_neighbor(
    model: &CostModel<'_>,
    desired: &[usize],
    solution: &[usize],
) -> Option<(Vec<usize>, Score)> {
    let mut best: Option<(Vec<usize>, Score)> = None;
    for candidate in neighbors(model, desired, solution) {
        let score = Score::of(model, &candidate);
        let is_better = best.as_ref().is_none_or(|(_, b)| score > *b);
        if is_better {
            best = Some((candidate, score));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::TravelMatrix;
    use crate::models::{Attraction, Category, Park, ProblemInstance, Visitor};

    fn problem(budget: u64) -> ProblemInstance {
        let park = Park::new(
            "test",
            vec![Attraction::new(5, Category::Family); 3],
            TravelMatrix::from_rows(vec![vec![0, 2, 9], vec![2, 0, 3], vec![9, 3, 0]])
                .expect("valid"),
        )
        .expect("valid");
        ProblemInstance::new(park, Visitor::new(vec![0, 1, 2], budget, None)).expect("valid")
    }

    #[test]
    fn test_score_ordering() {
        assert!(Score::new(1, 100) > Score::new(0, 0));
        assert!(Score::new(2, 7) > Score::new(2, 8));
        assert_eq!(Score::new(2, 7).cmp(&Score::new(2, 7)), Ordering::Equal);
    }

    #[test]
    fn test_insertion_order_and_feasibility() {
        let p = problem(15);
        let m = CostModel::new(&p);
        let ins = insertion_neighbors(&m, p.desired_rides(), &[1]);
        // [0,1]=5+7=12, [1,0]=7+7=14, [1,2]=7+8=15, [2,1]=14+8=22 (dropped)
        assert_eq!(ins, vec![vec![0, 1], vec![1, 0], vec![1, 2]]);
    }

    #[test]
    fn test_swap_neighbors() {
        let p = problem(100);
        let m = CostModel::new(&p);
        let swaps = swap_neighbors(&m, &[0, 1, 2]);
        assert_eq!(swaps, vec![vec![1, 0, 2], vec![2, 1, 0], vec![0, 2, 1]]);
        assert!(swap_neighbors(&m, &[1]).is_empty());
    }

    #[test]
    fn test_insertions_precede_swaps() {
        let p = problem(100);
        let m = CostModel::new(&p);
        let all = neighbors(&m, p.desired_rides(), &[1, 2]);
        assert_eq!(all.len(), 3 + 1);
        assert_eq!(all[0], vec![0, 1, 2]);
        assert_eq!(all[3], vec![2, 1]);
    }

    #[test]
    fn test_best_neighbor_first_tie_wins() {
        // Every ride costs 1 + 1 from anywhere: equal scores everywhere.
        let park = Park::new(
            "flat",
            vec![Attraction::new(1, Category::Food); 3],
            TravelMatrix::from_rows(vec![vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]])
                .expect("valid"),
        )
        .expect("valid");
        let p = ProblemInstance::new(park, Visitor::new(vec![2, 1], 100, None)).expect("valid");
        let m = CostModel::new(&p);
        let (best, score) = best_neighbor(&m, p.desired_rides(), &[]).expect("neighbor");
        assert_eq!(best, vec![2]);
        assert_eq!(score, Score::new(1, 2));
    }

    #[test]
    fn test_best_neighbor_none_when_stuck() {
        let p = problem(6);
        let m = CostModel::new(&p);
        // [0] costs 5; any insertion exceeds 6 and there is nothing to swap.
        assert!(best_neighbor(&m, p.desired_rides(), &[0]).is_none());
    }
}
