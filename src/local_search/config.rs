//! Hill-climbing configuration.

/// Configuration for [`HillClimbSolver`](super::HillClimbSolver).
///
/// # Defaults
///
/// ```
/// use u_itinerary::local_search::HillClimbConfig;
///
/// let config = HillClimbConfig::default();
/// assert_eq!(config.num_restarts, 5);
/// assert_eq!(config.max_iterations_per_restart, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_itinerary::local_search::HillClimbConfig;
///
/// let config = HillClimbConfig::default()
///     .with_num_restarts(20)
///     .with_max_iterations_per_restart(500)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HillClimbConfig {
    /// Number of independent climbs from fresh random starting itineraries.
    pub num_restarts: usize,

    /// Maximum number of improving moves per climb.
    ///
    /// A climb also stops earlier at a local optimum.
    pub max_iterations_per_restart: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for HillClimbConfig {
    fn default() -> Self {
        Self {
            num_restarts: 5,
            max_iterations_per_restart: 100,
            seed: None,
        }
    }
}

impl HillClimbConfig {
    /// Sets the number of random restarts.
    pub fn with_num_restarts(mut self, n: usize) -> Self {
        self.num_restarts = n;
        self
    }

    /// Sets the move limit of a single climb.
    pub fn with_max_iterations_per_restart(mut self, n: usize) -> Self {
        self.max_iterations_per_restart = n;
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
        if self.num_restarts == 0 {
            return Err("num_restarts must be at least 1".into());
        }
        Ok(())
    }
}
