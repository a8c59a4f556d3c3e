//! Validated problem instance shared by every solver.

use serde::Serialize;

use super::{Attraction, CategoryDelays, DayEffects, Park, Visitor, Weekday};
use crate::distance::TravelMatrix;
use crate::error::ProblemError;

/// A park paired with a visitor's request.
///
/// Construction validates the input once so solvers can index freely:
/// every desired ride names an attraction, the travel matrix is square over
/// the attractions, and the budget is positive. Repeated desired rides are
/// collapsed to their first occurrence; the remaining order is kept because
/// the greedy solver breaks ties by it.
///
/// # Examples
///
/// ```
/// use u_itinerary::distance::TravelMatrix;
/// use u_itinerary::models::{Attraction, Category, Park, ProblemInstance, Visitor};
///
/// let attractions = vec![Attraction::new(5, Category::Family); 2];
/// let travel = TravelMatrix::from_rows(vec![vec![0, 3], vec![4, 0]]).unwrap();
/// let park = Park::new("Demo", attractions, travel).unwrap();
///
/// let problem = ProblemInstance::new(park, Visitor::new(vec![1, 0, 1], 30, None)).unwrap();
/// assert_eq!(problem.desired_rides(), &[1, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProblemInstance {
    park: Park,
    visitor: Visitor,
}

impl ProblemInstance {
    /// Validates and combines park and visitor data.
    pub fn new(park: Park, mut visitor: Visitor) -> Result<Self, ProblemError> {
        park.validate()?;
        if visitor.time_budget == 0 {
            return Err(ProblemError::ZeroBudget);
        }
        let n = park.num_attractions();
        if let Some(&ride) = visitor.desired_rides.iter().find(|&&r| r >= n) {
            return Err(ProblemError::RideOutOfRange {
                ride,
                num_attractions: n,
            });
        }

        let mut seen = vec![false; n];
        visitor.desired_rides.retain(|&r| !std::mem::replace(&mut seen[r], true));

        Ok(Self { park, visitor })
    }

    /// The park being visited.
    pub fn park(&self) -> &Park {
        &self.park
    }

    /// The visitor request.
    pub fn visitor(&self) -> &Visitor {
        &self.visitor
    }

    /// Attraction `ride`.
    ///
    /// # Panics
    ///
    /// Panics if `ride` is out of range.
    pub fn attraction(&self, ride: usize) -> &Attraction {
        &self.park.attractions()[ride]
    }

    /// Number of attractions in the park.
    pub fn num_attractions(&self) -> usize {
        self.park.num_attractions()
    }

    /// The park's travel matrix.
    pub fn travel(&self) -> &TravelMatrix {
        self.park.travel()
    }

    /// The park's category delay table.
    pub fn category_delays(&self) -> &CategoryDelays {
        self.park.category_delays()
    }

    /// The park's weekday effect table.
    pub fn day_effects(&self) -> &DayEffects {
        self.park.day_effects()
    }

    /// Desired rides, repeat-free, in the visitor's order.
    pub fn desired_rides(&self) -> &[usize] {
        &self.visitor.desired_rides
    }

    /// Minutes available to the visitor.
    pub fn time_budget(&self) -> u64 {
        self.visitor.time_budget
    }

    /// Day of the visit, if known.
    pub fn visit_day(&self) -> Option<Weekday> {
        self.visitor.visit_day
    }
}
