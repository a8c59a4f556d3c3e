//! Property tests for solver invariants on generated instances.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::seq::SliceRandom;

use u_itinerary::constructive::GreedySolver;
use u_itinerary::evaluation::CostModel;
use u_itinerary::ga::{GeneticConfig, GeneticSolver};
use u_itinerary::generator::random_instance;
use u_itinerary::local_search::{HillClimbConfig, HillClimbSolver};
use u_itinerary::models::{ProblemInstance, SolverResult};
use u_itinerary::random::create_rng;

fn instance(seed: u64, max_rides: usize) -> ProblemInstance {
    let mut rng = create_rng(Some(seed));
    random_instance("prop", 1..=max_rides, &mut rng).expect("generated instance is valid")
}

fn assert_valid_itinerary(problem: &ProblemInstance, result: &SolverResult) {
    let model = CostModel::new(problem);
    let desired: HashSet<usize> = problem.desired_rides().iter().copied().collect();
    let mut seen = HashSet::new();
    for &ride in result.path() {
        assert!(desired.contains(&ride), "ride {ride} not desired");
        assert!(seen.insert(ride), "ride {ride} repeated");
    }
    assert!(model.is_feasible(result.path()));
    assert_eq!(result.ride_count(), result.path().len());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn hill_climb_returns_feasible_unique_paths(seed in any::<u64>()) {
        let problem = instance(seed, 15);
        let solver = HillClimbSolver::new(HillClimbConfig::default()).unwrap();
        let mut rng = create_rng(Some(seed ^ 0x5eed));
        let result = solver.solve_with_rng(&problem, &mut rng);
        assert_valid_itinerary(&problem, &result);
        prop_assert_eq!(result.total_time(), CostModel::new(&problem).path_time(result.path()));
    }

    #[test]
    fn genetic_returns_feasible_unique_paths(seed in any::<u64>()) {
        let problem = instance(seed, 15);
        let solver = GeneticSolver::new(
            GeneticConfig::default().with_population_size(20).with_generations(5),
        )
        .unwrap();
        let mut rng = create_rng(Some(seed ^ 0x5eed));
        let result = solver.solve_with_rng(&problem, &mut rng);
        assert_valid_itinerary(&problem, &result);
        prop_assert_eq!(result.total_time(), CostModel::new(&problem).path_time(result.path()));
    }

    #[test]
    fn genetic_population_always_feasible(seed in any::<u64>()) {
        let problem = instance(seed, 12);
        let model = CostModel::new(&problem);
        let solver = GeneticSolver::new(
            GeneticConfig::default().with_population_size(16).with_mutation_rate(0.5),
        )
        .unwrap();
        let mut rng = create_rng(Some(seed));
        let mut population = solver.initial_population(&model, &mut rng);
        prop_assert!(population.iter().all(|c| c.is_feasible(&model)));
        for _ in 0..4 {
            population = solver.next_generation(&model, &population, &mut rng);
            prop_assert_eq!(population.len(), 16);
            prop_assert!(population.iter().all(|c| c.is_feasible(&model)));
        }
    }

    #[test]
    fn greedy_is_deterministic_and_within_budget(seed in any::<u64>()) {
        let problem = instance(seed, 30);
        let a = GreedySolver::new().solve(&problem);
        let b = GreedySolver::new().solve(&problem);
        prop_assert_eq!(&a, &b);
        prop_assert!(a.total_time() <= problem.time_budget());
        let desired: HashSet<usize> = problem.desired_rides().iter().copied().collect();
        prop_assert!(a.path().iter().all(|r| desired.contains(r)));
    }

    #[test]
    fn path_time_monotone_under_append(seed in any::<u64>()) {
        let problem = instance(seed, 20);
        let model = CostModel::new(&problem);
        let mut path = problem.desired_rides().to_vec();
        path.shuffle(&mut create_rng(Some(seed)));

        let times: Vec<u64> = (0..=path.len()).map(|k| model.path_time(&path[..k])).collect();
        prop_assert!(times.windows(2).all(|w| w[0] <= w[1]));

        let feasible_len = model.feasible_prefix_len(&path);
        for k in 0..=feasible_len {
            prop_assert!(model.is_feasible(&path[..k]));
        }
        if feasible_len < path.len() {
            prop_assert!(!model.is_feasible(&path[..feasible_len + 1]));
        }
    }

    #[test]
    fn hill_climb_scores_never_decrease(seed in any::<u64>()) {
        let problem = instance(seed, 12);
        let model = CostModel::new(&problem);
        let solver = HillClimbSolver::new(HillClimbConfig::default()).unwrap();
        let mut rng = create_rng(Some(seed));
        let initial = solver.random_initial(&model, &mut rng);
        let trace = solver.climb(&model, initial);
        prop_assert!(trace.scores.windows(2).all(|w| w[0] <= w[1]));
    }
}
