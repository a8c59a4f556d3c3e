//! Attraction and category types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of attraction categories.
///
/// A category may carry a percentage surcharge on its rides' durations when
/// it is the category affected on the visit day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Family,
    Thrill,
    Adventure,
    Adults,
    Food,
    NoShelter,
    Maintenance,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 7] = [
        Category::Family,
        Category::Thrill,
        Category::Adventure,
        Category::Adults,
        Category::Food,
        Category::NoShelter,
        Category::Maintenance,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Family => "Family",
            Category::Thrill => "Thrill",
            Category::Adventure => "Adventure",
            Category::Adults => "Adults",
            Category::Food => "Food",
            Category::NoShelter => "No Shelter",
            Category::Maintenance => "Maintenance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single ride in the park.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::{Attraction, Category};
///
/// let a = Attraction::new(12, Category::Thrill);
/// assert_eq!(a.duration(), 12);
/// assert_eq!(a.category(), Category::Thrill);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attraction {
    duration: u64,
    category: Category,
}

impl Attraction {
    /// Creates an attraction with the given duration (minutes) and category.
    pub fn new(duration: u64, category: Category) -> Self {
        Self { duration, category }
    }

    /// Time spent on the ride itself, before any category delay.
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Category used to look up the visit-day delay.
    pub fn category(&self) -> Category {
        self.category
    }
}
