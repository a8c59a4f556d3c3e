//! Synthetic park and visitor data.
//!
//! Produces random instances for experiments and for the command-line tool.
//! All draws go through the caller's generator so instances are reproducible.
//!
//! | Quantity | Distribution |
//! |---|---|
//! | ride duration | uniform `3..=20` |
//! | travel time (i ≠ j) | uniform `3..=15`, independent per direction |
//! | category | uniform over [`Category::ALL`] |
//! | Family / Thrill / Adventure delay | uniform `1..=20` / `3..=25` / `5..=45` % |
//! | Adults / Food / No Shelter / Maintenance delay | 20 / 40 / 60 / 80 % |
//! | affected category per weekday | uniform over [`Category::ALL`] |
//! | desired rides | `1..=N` distinct rides, random order |
//! | time budget | uniform `10..=50` |
//! | visit day | uniform over [`Weekday::ALL`] |

use std::ops::RangeInclusive;

use rand::seq::{index, IndexedRandom};
use rand::Rng;

use crate::distance::TravelMatrix;
use crate::error::ProblemError;
use crate::models::{
    Attraction, Category, CategoryDelays, DayEffects, Park, ProblemInstance, Visitor, Weekday,
};

/// Ride duration range, minutes.
pub const DURATION_RANGE: RangeInclusive<u64> = 3..=20;
/// Travel time range between distinct attractions, minutes.
pub const TRAVEL_RANGE: RangeInclusive<u64> = 3..=15;
/// Visitor time budget range, minutes.
pub const BUDGET_RANGE: RangeInclusive<u64> = 10..=50;
/// Park size range used by [`random_instance`] callers by default.
pub const PARK_SIZE_RANGE: RangeInclusive<usize> = 10..=40;

/// Generates a park with `num_rides` attractions.
///
/// # Examples
///
/// ```
/// use u_itinerary::generator::generate_park;
/// use u_itinerary::random::create_rng;
///
/// let mut rng = create_rng(Some(42));
/// let park = generate_park("Demo", 12, &mut rng).unwrap();
/// assert_eq!(park.num_attractions(), 12);
/// assert_eq!(park.travel().get(3, 3), 0);
/// ```
pub fn generate_park<R: Rng + ?Sized>(
    name: &str,
    num_rides: usize,
    rng: &mut R,
) -> Result<Park, ProblemError> {
    let attractions = (0..num_rides)
        .map(|_| {
            let duration = rng.random_range(DURATION_RANGE);
            let category = *Category::ALL.choose(rng).unwrap_or(&Category::Family);
            Attraction::new(duration, category)
        })
        .collect();

    let mut travel = TravelMatrix::new(num_rides);
    for i in 0..num_rides {
        for j in 0..num_rides {
            if i != j {
                travel.set(i, j, rng.random_range(TRAVEL_RANGE));
            }
        }
    }

    Ok(Park::new(name, attractions, travel)?
        .with_category_delays(generate_category_delays(rng))
        .with_day_effects(generate_day_effects(rng)))
}

/// Draws the per-category surcharge table.
pub fn generate_category_delays<R: Rng + ?Sized>(rng: &mut R) -> CategoryDelays {
    CategoryDelays::new()
        .with(Category::Family, rng.random_range(1..=20))
        .with(Category::Thrill, rng.random_range(3..=25))
        .with(Category::Adventure, rng.random_range(5..=45))
        .with(Category::Adults, 20)
        .with(Category::Food, 40)
        .with(Category::NoShelter, 60)
        .with(Category::Maintenance, 80)
}

/// Assigns one affected category to every weekday.
pub fn generate_day_effects<R: Rng + ?Sized>(rng: &mut R) -> DayEffects {
    let mut effects = DayEffects::new();
    for day in Weekday::ALL {
        if let Some(&category) = Category::ALL.choose(rng) {
            effects.set(day, category);
        }
    }
    effects
}

/// Generates a visitor for a park with `num_rides` attractions.
///
/// A park without attractions yields a visitor who wants nothing.
pub fn generate_visitor<R: Rng + ?Sized>(num_rides: usize, rng: &mut R) -> Visitor {
    let desired_rides = if num_rides == 0 {
        Vec::new()
    } else {
        let count = rng.random_range(1..=num_rides);
        index::sample(rng, num_rides, count).into_vec()
    };
    let time_budget = rng.random_range(BUDGET_RANGE);
    let visit_day = Weekday::ALL.choose(rng).copied();
    Visitor::new(desired_rides, time_budget, visit_day)
}

/// Generates a complete instance with a park size drawn from `sizes`.
///
/// # Examples
///
/// ```
/// use u_itinerary::generator::{random_instance, PARK_SIZE_RANGE};
/// use u_itinerary::random::create_rng;
///
/// let mut rng = create_rng(Some(1));
/// let problem = random_instance("7", PARK_SIZE_RANGE, &mut rng).unwrap();
/// assert!((10..=40).contains(&problem.num_attractions()));
/// assert!(!problem.desired_rides().is_empty());
/// ```
pub fn random_instance<R: Rng + ?Sized>(
    name: &str,
    sizes: RangeInclusive<usize>,
    rng: &mut R,
) -> Result<ProblemInstance, ProblemError> {
    let num_rides = rng.random_range(sizes);
    let park = generate_park(name, num_rides, rng)?;
    let visitor = generate_visitor(num_rides, rng);
    ProblemInstance::new(park, visitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_park_ranges() {
        let mut rng = create_rng(Some(42));
        let park = generate_park("p", 25, &mut rng).expect("valid");
        for a in park.attractions() {
            assert!(DURATION_RANGE.contains(&a.duration()));
        }
        let tm = park.travel();
        for i in 0..25 {
            for j in 0..25 {
                if i == j {
                    assert_eq!(tm.get(i, j), 0);
                } else {
                    assert!(TRAVEL_RANGE.contains(&tm.get(i, j)));
                }
            }
        }
    }

    #[test]
    fn test_category_delays_fixed_entries() {
        let mut rng = create_rng(Some(3));
        let d = generate_category_delays(&mut rng);
        assert_eq!(d.percentage(Category::Adults), 20);
        assert_eq!(d.percentage(Category::Food), 40);
        assert_eq!(d.percentage(Category::NoShelter), 60);
        assert_eq!(d.percentage(Category::Maintenance), 80);
        assert!((1..=20).contains(&d.percentage(Category::Family)));
        assert!((3..=25).contains(&d.percentage(Category::Thrill)));
        assert!((5..=45).contains(&d.percentage(Category::Adventure)));
    }

    #[test]
    fn test_every_weekday_has_effect() {
        let mut rng = create_rng(Some(8));
        let e = generate_day_effects(&mut rng);
        for d in Weekday::ALL {
            assert!(e.affected(Some(d)).is_some());
        }
    }

    #[test]
    fn test_visitor_ranges() {
        let mut rng = create_rng(Some(11));
        for _ in 0..50 {
            let v = generate_visitor(15, &mut rng);
            assert!(!v.desired_rides.is_empty());
            assert!(v.desired_rides.len() <= 15);
            assert!(v.desired_rides.iter().all(|&r| r < 15));
            let mut sorted = v.desired_rides.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), v.desired_rides.len());
            assert!(BUDGET_RANGE.contains(&v.time_budget));
            assert!(v.visit_day.is_some());
        }
    }

    #[test]
    fn test_empty_park_visitor() {
        let mut rng = create_rng(Some(0));
        assert!(generate_visitor(0, &mut rng).desired_rides.is_empty());
    }

    #[test]
    fn test_reproducible() {
        let a = random_instance("x", PARK_SIZE_RANGE, &mut create_rng(Some(5))).expect("valid");
        let b = random_instance("x", PARK_SIZE_RANGE, &mut create_rng(Some(5))).expect("valid");
        assert_eq!(a, b);
    }
}
