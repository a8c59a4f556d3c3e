//! Genetic solver configuration.

/// Configuration for [`GeneticSolver`](super::GeneticSolver).
///
/// # Defaults
///
/// ```
/// use u_itinerary::ga::GeneticConfig;
///
/// let config = GeneticConfig::default();
/// assert_eq!(config.population_size, 80);
/// assert_eq!(config.generations, 30);
/// assert!((config.mutation_rate - 0.05).abs() < 1e-12);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_itinerary::ga::GeneticConfig;
///
/// let config = GeneticConfig::default()
///     .with_population_size(200)
///     .with_generations(100)
///     .with_mutation_rate(0.1)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeneticConfig {
    /// Number of chromosomes per generation, elite included.
    pub population_size: usize,

    /// Number of generations to evolve.
    pub generations: usize,

    /// Probability of attempting a swap mutation on an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Consecutive infeasible offspring tolerated before a clone of the
    /// selected parent is admitted instead.
    ///
    /// Keeps a generation from spinning forever when crossover almost never
    /// yields a feasible child.
    pub max_reproduction_attempts: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 80,
            generations: 30,
            mutation_rate: 0.05,
            max_reproduction_attempts: 10_000,
            seed: None,
        }
    }
}

impl GeneticConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets how many infeasible children in a row are tolerated before a parent clone is admitted.
    pub fn with_max_reproduction_attempts(mut self, n: usize) -> Self {
        self.max_reproduction_attempts = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err("mutation_rate must lie in [0, 1]".into());
        }
        if self.max_reproduction_attempts == 0 {
            return Err("max_reproduction_attempts must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let c = GeneticConfig::default();
        assert_eq!(c.population_size, 80);
        assert_eq!(c.generations, 30);
        assert_eq!(c.max_reproduction_attempts, 10_000);
        assert!(c.seed.is_none());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_clamp_mutation_rate() {
        assert_eq!(GeneticConfig::default().with_mutation_rate(1.5).mutation_rate, 1.0);
        assert_eq!(GeneticConfig::default().with_mutation_rate(-0.5).mutation_rate, 0.0);
    }

    #[test]
    fn test_validate_population_zero() {
        let c = GeneticConfig::default().with_population_size(0);
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_validate_rate_out_of_range() {
        let c = GeneticConfig {
            mutation_rate: f64::NAN,
            ..GeneticConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_validate_zero_attempts() {
        let c = GeneticConfig::default().with_max_reproduction_attempts(0);
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_zero_generations_allowed() {
        let c = GeneticConfig::default().with_generations(0);
        assert!(c.validate().is_ok());
    }
}
