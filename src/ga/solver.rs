//! Generational genetic algorithm over itinerary chromosomes.
//!
//! # Loop
//!
//! 1. Initialize: shuffle the desired rides, drop trailing rides until the
//!    itinerary fits, repeat until the population is full.
//! 2. Each generation: score every chromosome, carry the fittest over
//!    unchanged, then fill the rest by roulette selection → order crossover
//!    (infeasible children are dropped and selection retried) → swap mutation
//!    (rejected mutations fall back to the unmutated child).
//! 3. Report the fittest chromosome of the final population with its true
//!    path time.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use super::chromosome::Chromosome;
use super::config::GeneticConfig;
use super::operators::{order_crossover, roulette_select, swap_mutation};
use crate::error::ProblemError;
use crate::evaluation::CostModel;
use crate::models::{ProblemInstance, SolverResult};
use crate::random::create_rng;

/// Final population and per-generation statistics of a run.
#[derive(Debug, Clone)]
pub struct Evolution {
    /// Population after the last generation.
    pub population: Vec<Chromosome>,
    /// Best selection fitness of the initial population and after each generation.
    pub fitness_history: Vec<usize>,
}

/// Genetic algorithm solver.
///
/// # Examples
///
/// ```
/// use u_itinerary::distance::TravelMatrix;
/// use u_itinerary::ga::{GeneticConfig, GeneticSolver};
/// use u_itinerary::models::{Attraction, Category, Park, ProblemInstance, Visitor};
///
/// let park = Park::new(
///     "Demo",
///     vec![Attraction::new(5, Category::Family); 3],
///     TravelMatrix::from_rows(vec![vec![0, 2, 9], vec![2, 0, 3], vec![9, 3, 0]]).unwrap(),
/// ).unwrap();
/// let problem = ProblemInstance::new(park, Visitor::new(vec![0, 1, 2], 30, None)).unwrap();
///
/// let solver = GeneticSolver::new(GeneticConfig::default().with_seed(42)).unwrap();
/// let result = solver.solve(&problem);
/// assert!(result.total_time() <= 30);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticSolver {
    config: GeneticConfig,
}

impl GeneticSolver {
    /// Creates a solver, rejecting an invalid configuration.
    pub fn new(config: GeneticConfig) -> Result<Self, ProblemError> {
        config.validate().map_err(ProblemError::InvalidConfig)?;
        Ok(Self { config })
    }

    /// Returns the solver configuration.
    pub fn config(&self) -> &GeneticConfig {
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
        let evolution = self.evolve(&model, rng);

        let fitnesses = fitnesses(&model, &evolution.population);
        let best = evolution.population[fittest(&fitnesses)].clone();
        let path = best.into_genes();
        let total_time = model.path_time(&path);
        SolverResult::new(path, total_time)
    }

    /// Runs initialization and every generation.
    pub fn evolve<R: Rng + ?Sized>(&self, model: &CostModel<'_>, rng: &mut R) -> Evolution {
        let mut population = self.initial_population(model, rng);
        let mut fitness_history = Vec::with_capacity(self.config.generations + 1);
        fitness_history.push(best_fitness(model, &population));

        for generation in 0..self.config.generations {
            population = self.next_generation(model, &population, rng);
            let best = best_fitness(model, &population);
            debug!(generation, best_fitness = best, "generation complete");
            fitness_history.push(best);
        }

        Evolution {
            population,
            fitness_history,
        }
    }

    /// Builds `population_size` feasible chromosomes from shuffled desired rides.
    pub fn initial_population<R: Rng + ?Sized>(
        &self,
        model: &CostModel<'_>,
        rng: &mut R,
    ) -> Vec<Chromosome> {
        let desired = model.problem().desired_rides();
        let mut population = Vec::with_capacity(self.config.population_size);
        while population.len() < self.config.population_size {
            let mut genes = desired.to_vec();
            genes.shuffle(rng);
            while !genes.is_empty() && !model.is_feasible(&genes) {
                genes.pop();
            }
            let chromosome = Chromosome::new(genes);
            if chromosome.is_feasible(model) {
                population.push(chromosome);
            }
        }
        population
    }

    /// Produces the next generation from `population`.
    ///
    /// # Panics
    ///
    /// Panics if `population` is empty.
    pub fn next_generation<R: Rng + ?Sized>(
        &self,
        model: &CostModel<'_>,
        population: &[Chromosome],
        rng: &mut R,
    ) -> Vec<Chromosome> {
        let size = self.config.population_size;
        let fitnesses = fitnesses(model, population);

        let mut next = Vec::with_capacity(size);
        next.push(population[fittest(&fitnesses)].clone());

        let mut failures = 0;
        while next.len() < size {
            let p1 = roulette_select(&fitnesses, rng);
            let p2 = roulette_select(&fitnesses, rng);
            let child = order_crossover(&population[p1], &population[p2], rng);

            if !child.is_feasible(model) {
                failures += 1;
                if failures >= self.config.max_reproduction_attempts {
                    warn!(
                        attempts = failures,
                        "no feasible offspring found, admitting parent clone"
                    );
                    next.push(population[p1].clone());
                    failures = 0;
                }
                continue;
            }
            failures = 0;

            let offspring = swap_mutation(model, &child, self.config.mutation_rate, rng)
                .unwrap_or(child);
            next.push(offspring);
        }
        next
    }
}

fn fitnesses(model: &CostModel<'_>, population: &[Chromosome]) -> Vec<usize> {
    population.iter().map(|c| c.fitness(model)).collect()
}

fn best_fitness(model: &CostModel<'_>, population: &[Chromosome]) -> usize {
    population.iter().map(|c| c.fitness(model)).max().unwrap_or(0)
}

/// Index of the first chromosome with maximal fitness.
fn fittest(fitnesses: &[usize]) -> usize {
    let mut best = 0;
    for (i, &f) in fitnesses.iter().enumerate() {
        if f > fitnesses[best] {
            best = i;
        }
    }
    best
}
