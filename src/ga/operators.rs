//! Selection, crossover and mutation operators.
//!
//! # References
//!
//! - Goldberg, D.E. (1989). *Genetic Algorithms in Search, Optimization and
//!   Machine Learning*. Roulette-wheel selection.
//! - Davis, L. (1985). "Applying Adaptive Algorithms to Epistatic Domains",
//!   IJCAI. Order crossover.

use rand::seq::index;
use rand::Rng;

use super::chromosome::Chromosome;
use crate::evaluation::CostModel;

/// Fitness-proportionate (roulette wheel) selection.
///
/// Draws a value uniformly in `[0, total)` and returns the index of the first
/// individual whose cumulative fitness meets or exceeds it. Individuals with
/// zero fitness are never chosen, even on a draw of exactly zero. When every
/// fitness is zero the first individual is returned.
///
/// # Panics
///
/// Panics if `fitnesses` is empty.
///
/// # Examples
///
/// ```
/// use u_itinerary::ga::operators::roulette_select;
/// use u_itinerary::random::create_rng;
///
/// let mut rng = create_rng(Some(1));
/// // Only the third individual has any fitness.
/// assert_eq!(roulette_select(&[0, 0, 4, 0], &mut rng), 2);
/// ```
pub fn roulette_select<R: Rng + ?Sized>(fitnesses: &[usize], rng: &mut R) -> usize {
    assert!(!fitnesses.is_empty(), "population must not be empty");
    let total: usize = fitnesses.iter().sum();
    if total == 0 {
        return 0;
    }

    let pick = rng.random_range(0.0..total as f64);
    let mut cumulative = 0usize;
    for (i, &f) in fitnesses.iter().enumerate() {
        cumulative += f;
        if f > 0 && cumulative as f64 >= pick {
            return i;
        }
    }
    fitnesses.iter().rposition(|&f| f > 0).unwrap_or(0)
}

/// Two distinct cut points `start < end` in `0..len`.
fn cut_points<R: Rng + ?Sized>(len: usize, rng: &mut R) -> (usize, usize) {
    let picks = index::sample(rng, len, 2);
    let (a, b) = (picks.index(0), picks.index(1));
    (a.min(b), a.max(b))
}

/// Order crossover for variable-length itineraries.
///
/// Cuts `start < end` are drawn within the shorter parent. The child starts
/// with `parent1[start..end]` and continues with parent2's genes that are not
/// in that segment, in parent2's order. A parent with fewer than two genes
/// yields a copy of `parent1`.
///
/// # Examples
///
/// ```
/// use u_itinerary::ga::Chromosome;
/// use u_itinerary::ga::operators::order_crossover;
/// use u_itinerary::random::create_rng;
///
/// let p1 = Chromosome::new(vec![1, 2, 3, 4]);
/// let p2 = Chromosome::new(vec![4, 3, 5]);
/// let mut rng = create_rng(Some(42));
/// let child = order_crossover(&p1, &p2, &mut rng);
///
/// let mut seen = child.genes().to_vec();
/// seen.sort();
/// seen.dedup();
/// assert_eq!(seen.len(), child.len());
/// ```
pub fn order_crossover<R: Rng + ?Sized>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    rng: &mut R,
) -> Chromosome {
    let size = parent1.len().min(parent2.len());
    if size < 2 {
        return parent1.clone();
    }

    let (start, end) = cut_points(size, rng);
    let segment = &parent1.genes()[start..end];

    let mut child: Vec<usize> = Vec::with_capacity(segment.len() + parent2.len());
    child.extend_from_slice(segment);
    child.extend(parent2.genes().iter().filter(|g| !segment.contains(g)));

    let mut unique = Vec::with_capacity(child.len());
    for gene in child {
        if !unique.contains(&gene) {
            unique.push(gene);
        }
    }
    Chromosome::new(unique)
}

/// Swap mutation with feasibility check.
///
/// With probability `rate`, swaps two distinct random positions of a copy of
/// `chromosome`. Returns `None` when the result is infeasible, in which case
/// the caller keeps the original.
pub fn swap_mutation<R: Rng + ?Sized>(
    model: &CostModel<'_>,
    chromosome: &Chromosome,
    rate: f64,
    rng: &mut R,
) -> Option<Chromosome> {
    let mut mutated = chromosome.clone();
    if rng.random::<f64>() < rate {
        if mutated.len() < 2 {
            return Some(mutated);
        }
        let (i, j) = cut_points(mutated.len(), rng);
        mutated.genes_mut().swap(i, j);
    }
    mutated.is_feasible(model).then_some(mutated)
}
