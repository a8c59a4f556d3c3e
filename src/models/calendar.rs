//! Visit-day effects: which category is delayed on which weekday, and by
//! how much.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Category;

/// Day of the week a visit takes place on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Lowercase day name.
    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Weekday {
    type Err = String;

    /// Parses full names or three-letter abbreviations, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Weekday::ALL
            .iter()
            .copied()
            .find(|d| d.label() == key || (key.len() == 3 && d.label().starts_with(&key)))
            .ok_or_else(|| format!("unknown weekday: {s}"))
    }
}

/// Percentage surcharge per category.
///
/// Categories without an entry carry no surcharge.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::{Category, CategoryDelays};
///
/// let delays = CategoryDelays::new().with(Category::Food, 40);
/// assert_eq!(delays.percentage(Category::Food), 40);
/// assert_eq!(delays.percentage(Category::Thrill), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDelays {
    percentages: BTreeMap<Category, u64>,
}

impl CategoryDelays {
    /// Creates an empty table (no surcharges).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the surcharge for a category.
    pub fn with(mut self, category: Category, percentage: u64) -> Self {
        self.set(category, percentage);
        self
    }

    /// Sets the surcharge for `category`.
    pub fn set(&mut self, category: Category, percentage: u64) {
        self.percentages.insert(category, percentage);
    }

    /// Surcharge percentage for `category`, 0 when the table has no entry.
    pub fn percentage(&self, category: Category) -> u64 {
        self.percentages.get(&category).copied().unwrap_or(0)
    }

    /// Iterates `(category, percentage)` pairs in category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u64)> + '_ {
        self.percentages.iter().map(|(&c, &p)| (c, p))
    }
}

/// The single category affected on each weekday.
///
/// Days without an entry are neutral: no category is delayed.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::{Category, DayEffects, Weekday};
///
/// let effects = DayEffects::new().with(Weekday::Monday, Category::NoShelter);
/// assert_eq!(effects.affected(Some(Weekday::Monday)), Some(Category::NoShelter));
/// assert_eq!(effects.affected(Some(Weekday::Tuesday)), None);
/// assert_eq!(effects.affected(None), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEffects {
    affected: BTreeMap<Weekday, Category>,
}

impl DayEffects {
    /// Creates an empty table; no day has an effect.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `category` as the one affected on `day`, replacing any previous entry.
    pub fn with(mut self, day: Weekday, category: Category) -> Self {
        self.set(day, category);
        self
    }

    /// Marks `category` as affected on `day`.
    pub fn set(&mut self, day: Weekday, category: Category) {
        self.affected.insert(day, category);
    }

    /// Category affected on `day`, or `None` for a neutral or absent day.
    pub fn affected(&self, day: Option<Weekday>) -> Option<Category> {
        day.and_then(|d| self.affected.get(&d).copied())
    }

    /// Iterates over the entries in weekday order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, Category)> + '_ {
        self.affected.iter().map(|(&d, &c)| (d, c))
    }
}
