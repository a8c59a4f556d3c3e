//! End-to-end scenarios on a small three-ride park.

use u_itinerary::compare::{compare_all, Algorithm};
use u_itinerary::constructive::GreedySolver;
use u_itinerary::distance::TravelMatrix;
use u_itinerary::error::ProblemError;
use u_itinerary::evaluation::CostModel;
use u_itinerary::models::{
    Attraction, Category, CategoryDelays, DayEffects, Park, ProblemInstance, SolverResult,
    Visitor, Weekday,
};

fn park() -> Park {
    Park::new(
        "Scenario",
        vec![Attraction::new(5, Category::Family); 3],
        TravelMatrix::from_rows(vec![vec![0, 2, 9], vec![2, 0, 3], vec![9, 3, 0]]).unwrap(),
    )
    .unwrap()
}

fn problem(budget: u64) -> ProblemInstance {
    ProblemInstance::new(park(), Visitor::new(vec![0, 1, 2], budget, None)).unwrap()
}

#[test]
fn greedy_visits_all_three_rides() {
    let result = GreedySolver::new().solve(&problem(30));
    assert_eq!(result.into_parts(), (3, 28, vec![1, 0, 2]));
}

#[test]
fn greedy_stops_after_first_ride_on_tight_budget() {
    let result = GreedySolver::new().solve(&problem(10));
    assert_eq!(result.into_parts(), (1, 7, vec![1]));
}

#[test]
fn greedy_ledger_total_matches_path_time() {
    let p = problem(30);
    let solver = GreedySolver::new();
    let ledger = solver.construct(&p);
    let result = solver.solve(&p);

    // Ledger form: budget minus what is left.
    assert_eq!(ledger.remaining, 2);
    assert_eq!(result.total_time(), 30 - 2);
    // Recomputed form over the same path.
    assert_eq!(CostModel::new(&p).path_time(result.path()), 28);
}

#[test]
fn every_solver_handles_empty_request() {
    let p = ProblemInstance::new(park(), Visitor::new(vec![], 30, Some(Weekday::Monday))).unwrap();
    for algorithm in Algorithm::ALL {
        let result = algorithm.solve(&p, Some(1)).unwrap();
        assert_eq!(result, SolverResult::empty(), "{algorithm}");
    }
}

#[test]
fn every_solver_fits_all_three_rides() {
    let p = problem(30);
    let results = compare_all(&p, Some(42)).unwrap();
    for timed in &results {
        assert_eq!(timed.result.ride_count(), 3, "{}", timed.algorithm);
    }
    let hill = results
        .iter()
        .find(|r| r.algorithm == Algorithm::HillClimb)
        .unwrap();
    assert_eq!(hill.result.total_time(), 20);
}

#[test]
fn out_of_range_ride_is_rejected() {
    let err = ProblemInstance::new(park(), Visitor::new(vec![1, 5], 30, None)).unwrap_err();
    assert_eq!(
        err,
        ProblemError::RideOutOfRange {
            ride: 5,
            num_attractions: 3
        }
    );
}

#[test]
fn day_effect_applies_to_every_solver_equally() {
    let park = park()
        .with_category_delays(CategoryDelays::new().with(Category::Family, 100))
        .with_day_effects(DayEffects::new().with(Weekday::Saturday, Category::Family));
    // Every ride now costs 5 extra minutes: [1] = 2 + 10 = 12.
    let p = ProblemInstance::new(park, Visitor::new(vec![1], 12, Some(Weekday::Saturday))).unwrap();
    for algorithm in Algorithm::ALL {
        let result = algorithm.solve(&p, Some(3)).unwrap();
        assert_eq!(result.into_parts(), (1, 12, vec![1]), "{algorithm}");
    }
}
