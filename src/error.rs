//! Error types for instance construction and solver configuration.

use std::fmt::{self, Display};

/// The error type for building problem instances and solvers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProblemError {
    /// A desired ride index does not name an attraction.
    RideOutOfRange {
        /// The offending ride index.
        ride: usize,
        /// Number of attractions in the park.
        num_attractions: usize,
    },
    /// The travel matrix does not match the number of attractions.
    DimensionMismatch {
        /// Expected number of cells (or rows).
        expected: usize,
        /// Number actually supplied.
        found: usize,
    },
    /// The travel time from an attraction to itself is not zero.
    NonZeroDiagonal {
        /// Attraction index with a non-zero self-travel time.
        index: usize,
    },
    /// An attraction has a zero duration.
    ZeroDuration {
        /// Attraction index.
        ride: usize,
    },
    /// The visitor's time budget is zero.
    ZeroBudget,
    /// A solver configuration failed validation.
    InvalidConfig(String),
    /// The requested algorithm name is not recognized.
    UnknownAlgorithm(String),
}

impl Display for ProblemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RideOutOfRange {
                ride,
                num_attractions,
            } => write!(
                f,
                "Desired ride {ride} is out of range (park has {num_attractions} attractions)"
            ),
            Self::DimensionMismatch { expected, found } => write!(
                f,
                "Travel matrix dimension mismatch: expected {expected}, found {found}"
            ),
            Self::NonZeroDiagonal { index } => {
                write!(f, "Travel time from attraction {index} to itself must be 0")
            }
            Self::ZeroDuration { ride } => {
                write!(f, "Attraction {ride} must have a positive duration")
            }
            Self::ZeroBudget => write!(f, "Time budget must be positive"),
            Self::InvalidConfig(msg) => write!(f, "Invalid solver configuration: {msg}"),
            Self::UnknownAlgorithm(name) => write!(f, "Unknown algorithm: {name}"),
        }
    }
}

impl std::error::Error for ProblemError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_out_of_range() {
        let e = ProblemError::RideOutOfRange {
            ride: 7,
            num_attractions: 3,
        };
        assert_eq!(
            e.to_string(),
            "Desired ride 7 is out of range (park has 3 attractions)"
        );
    }

    #[test]
    fn test_display_unknown_algorithm() {
        let e = ProblemError::UnknownAlgorithm("annealing".into());
        assert_eq!(e.to_string(), "Unknown algorithm: annealing");
    }
}
