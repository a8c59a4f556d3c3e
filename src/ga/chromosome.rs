//! Itinerary chromosome.
//!
//! A chromosome is a repeat-free ordered subset of the desired rides, i.e. a
//! prefix of some permutation of them. Its genes are the itinerary itself.

use crate::evaluation::CostModel;

/// An ordered, repeat-free sequence of desired rides.
///
/// # Examples
///
/// ```
/// use u_itinerary::ga::Chromosome;
///
/// let c = Chromosome::new(vec![3, 1, 2]);
/// assert_eq!(c.genes(), &[3, 1, 2]);
/// assert_eq!(c.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chromosome {
    genes: Vec<usize>,
}

impl Chromosome {
    /// Wraps an itinerary as a chromosome.
    pub fn new(genes: Vec<usize>) -> Self {
        Self { genes }
    }

    /// Returns the rides in visiting order.
    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    /// Mutable access to the ride order.
    pub fn genes_mut(&mut self) -> &mut Vec<usize> {
        &mut self.genes
    }

    /// Consumes the chromosome, returning its ride order.
    pub fn into_genes(self) -> Vec<usize> {
        self.genes
    }

    /// Number of rides in the itinerary.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the itinerary has no rides.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Selection fitness: how many leading rides fit in the budget.
    ///
    /// This is a selection signal only; reported results are recomputed
    /// with [`CostModel::path_time`].
    pub fn fitness(&self, model: &CostModel<'_>) -> usize {
        model.feasible_prefix_len(&self.genes)
    }

    /// Whether the whole itinerary fits in the budget.
    pub fn is_feasible(&self, model: &CostModel<'_>) -> bool {
        model.is_feasible(&self.genes)
    }
}

impl From<Vec<usize>> for Chromosome {
    fn from(genes: Vec<usize>) -> Self {
        Self::new(genes)
    }
}
