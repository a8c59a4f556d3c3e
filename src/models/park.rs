//! Park and visitor data.

use serde::{Deserialize, Serialize};

use super::{Attraction, CategoryDelays, DayEffects, Weekday};
use crate::distance::TravelMatrix;
use crate::error::ProblemError;

/// Static park data: attractions, travel times and calendar tables.
///
/// # Examples
///
/// ```
/// use u_itinerary::distance::TravelMatrix;
/// use u_itinerary::models::{Attraction, Category, Park};
///
/// let attractions = vec![
///     Attraction::new(5, Category::Family),
///     Attraction::new(8, Category::Thrill),
/// ];
/// let travel = TravelMatrix::from_rows(vec![vec![0, 3], vec![4, 0]]).unwrap();
/// let park = Park::new("Demo", attractions, travel).unwrap();
/// assert_eq!(park.num_attractions(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Park {
    name: String,
    attractions: Vec<Attraction>,
    travel: TravelMatrix,
    #[serde(default)]
    category_delays: CategoryDelays,
    #[serde(default)]
    day_effects: DayEffects,
}

impl Park {
    /// Creates a park with no category delays and no day effects.
    pub fn new(
        name: impl Into<String>,
        attractions: Vec<Attraction>,
        travel: TravelMatrix,
    ) -> Result<Self, ProblemError> {
        let park = Self {
            name: name.into(),
            attractions,
            travel,
            category_delays: CategoryDelays::new(),
            day_effects: DayEffects::new(),
        };
        park.validate()?;
        Ok(park)
    }

    /// Replaces the category delay table.
    pub fn with_category_delays(mut self, delays: CategoryDelays) -> Self {
        self.category_delays = delays;
        self
    }

    /// Replaces the weekday effect table.
    pub fn with_day_effects(mut self, effects: DayEffects) -> Self {
        self.day_effects = effects;
        self
    }

    /// Checks that the travel matrix covers every attraction and that every
    /// duration is positive.
    pub fn validate(&self) -> Result<(), ProblemError> {
        if self.travel.size() != self.attractions.len() {
            return Err(ProblemError::DimensionMismatch {
                expected: self.attractions.len(),
                found: self.travel.size(),
            });
        }
        if let Some(ride) = self.attractions.iter().position(|a| a.duration() == 0) {
            return Err(ProblemError::ZeroDuration { ride });
        }
        Ok(())
    }

    /// Park name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attractions, indexed by ride number.
    pub fn attractions(&self) -> &[Attraction] {
        &self.attractions
    }

    /// Number of attractions.
    pub fn num_attractions(&self) -> usize {
        self.attractions.len()
    }

    /// Travel times between attractions.
    pub fn travel(&self) -> &TravelMatrix {
        &self.travel
    }

    /// Percentage surcharge per category.
    pub fn category_delays(&self) -> &CategoryDelays {
        &self.category_delays
    }

    /// Category affected on each weekday.
    pub fn day_effects(&self) -> &DayEffects {
        &self.day_effects
    }
}

/// What the visitor wants: rides of interest, available time, and the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visitor {
    /// Attractions the visitor wants to experience, in preference order.
    pub desired_rides: Vec<usize>,
    /// Total minutes available.
    pub time_budget: u64,
    /// Day of the visit; `None` is a neutral day.
    pub visit_day: Option<Weekday>,
}

impl Visitor {
    /// Creates a visitor request.
    pub fn new(desired_rides: Vec<usize>, time_budget: u64, visit_day: Option<Weekday>) -> Self {
        Self {
            desired_rides,
            time_budget,
            visit_day,
        }
    }
}
