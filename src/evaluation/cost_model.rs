//! Elapsed-time and feasibility rules shared by every solver.

use crate::models::{Category, ProblemInstance};

/// Index of the virtual starting point. Itineraries begin at attraction 0's
/// location without visiting it.
pub const ORIGIN: usize = 0;

/// Computes ride delays, path times and feasibility for one problem instance.
///
/// The category affected on the visit day is resolved once at construction.
///
/// # Examples
///
/// ```
/// use u_itinerary::distance::TravelMatrix;
/// use u_itinerary::evaluation::CostModel;
/// use u_itinerary::models::{Attraction, Category, Park, ProblemInstance, Visitor};
///
/// let park = Park::new(
///     "Demo",
///     vec![Attraction::new(5, Category::Family); 3],
///     TravelMatrix::from_rows(vec![vec![0, 2, 9], vec![2, 0, 3], vec![9, 3, 0]]).unwrap(),
/// ).unwrap();
/// let problem = ProblemInstance::new(park, Visitor::new(vec![0, 1, 2], 30, None)).unwrap();
///
/// let model = CostModel::new(&problem);
/// assert_eq!(model.path_time(&[1, 2, 0]), 29);
/// assert!(model.is_feasible(&[1, 2, 0]));
/// assert!(!model.is_feasible(&[2, 0, 1]));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CostModel<'a> {
    problem: &'a ProblemInstance,
    affected: Option<Category>,
}

impl<'a> CostModel<'a> {
    /// Binds the model to `problem` and its visit day.
    pub fn new(problem: &'a ProblemInstance) -> Self {
        Self {
            problem,
            affected: problem.day_effects().affected(problem.visit_day()),
        }
    }

    /// The instance being evaluated.
    pub fn problem(&self) -> &'a ProblemInstance {
        self.problem
    }

    /// Visitor's time budget in minutes.
    pub fn time_budget(&self) -> u64 {
        self.problem.time_budget()
    }

    /// Category delayed on the visit day, if any.
    pub fn affected_category(&self) -> Option<Category> {
        self.affected
    }

    /// Extra minutes a ride costs on the visit day.
    ///
    /// Non-zero only when the ride's category is the affected one; the
    /// surcharge is `duration * percentage / 100`, rounded down.
    pub fn ride_delay(&self, ride: usize) -> u64 {
        let attraction = self.problem.attraction(ride);
        match self.affected {
            Some(category) if category == attraction.category() => {
                let pct = self.problem.category_delays().percentage(category);
                attraction.duration().saturating_mul(pct) / 100
            }
            _ => 0,
        }
    }

    /// Cost of moving from `prev` to `ride` and experiencing it.
    pub fn leg_cost(&self, prev: usize, ride: usize) -> u64 {
        self.problem
            .travel()
            .get(prev, ride)
            .saturating_add(self.problem.attraction(ride).duration())
            .saturating_add(self.ride_delay(ride))
    }

    /// Total elapsed time of `path`, starting from [`ORIGIN`].
    ///
    /// Saturates at `u64::MAX` instead of overflowing.
    pub fn path_time(&self, path: &[usize]) -> u64 {
        let mut prev = ORIGIN;
        let mut total: u64 = 0;
        for &ride in path {
            total = total.saturating_add(self.leg_cost(prev, ride));
            prev = ride;
        }
        total
    }

    /// Whether `path` finishes within the time budget.
    pub fn is_feasible(&self, path: &[usize]) -> bool {
        self.path_time(path) <= self.time_budget()
    }

    /// Number of leading rides of `path` that fit in the budget.
    ///
    /// Stops at the first ride whose leg would push the running total past
    /// the budget; the rest of the path is ignored.
    pub fn feasible_prefix_len(&self, path: &[usize]) -> usize {
        let budget = self.time_budget();
        let mut prev = ORIGIN;
        let mut total: u64 = 0;
        for (count, &ride) in path.iter().enumerate() {
            total = total.saturating_add(self.leg_cost(prev, ride));
            if total > budget {
                return count;
            }
            prev = ride;
        }
        path.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::TravelMatrix;
    use crate::models::{Attraction, CategoryDelays, DayEffects, Park, Visitor, Weekday};

    fn problem(visit_day: Option<Weekday>, budget: u64) -> ProblemInstance {
        let park = Park::new(
            "test",
            vec![
                Attraction::new(5, Category::Family),
                Attraction::new(10, Category::Thrill),
                Attraction::new(7, Category::Thrill),
            ],
            TravelMatrix::from_rows(vec![vec![0, 2, 9], vec![2, 0, 3], vec![9, 3, 0]])
                .expect("valid"),
        )
        .expect("valid")
        .with_category_delays(
            CategoryDelays::new()
                .with(Category::Thrill, 25)
                .with(Category::Family, 50),
        )
        .with_day_effects(
            DayEffects::new()
                .with(Weekday::Saturday, Category::Thrill)
                .with(Weekday::Sunday, Category::Adults),
        );
        ProblemInstance::new(park, Visitor::new(vec![0, 1, 2], budget, visit_day))
            .expect("valid")
    }

    #[test]
    fn test_delay_on_affected_day() {
        let p = problem(Some(Weekday::Saturday), 100);
        let m = CostModel::new(&p);
        assert_eq!(m.affected_category(), Some(Category::Thrill));
        assert_eq!(m.ride_delay(0), 0);
        // 10 * 25 / 100 = 2.5 -> 2
        assert_eq!(m.ride_delay(1), 2);
        // 7 * 25 / 100 = 1.75 -> 1
        assert_eq!(m.ride_delay(2), 1);
    }

    #[test]
    fn test_no_delay_when_day_absent() {
        for day in [None, Some(Weekday::Monday)] {
            let p = problem(day, 100);
            let m = CostModel::new(&p);
            assert_eq!(m.affected_category(), None);
            assert!((0..3).all(|r| m.ride_delay(r) == 0));
        }
    }

    #[test]
    fn test_affected_category_without_table_entry() {
        let p = problem(Some(Weekday::Sunday), 100);
        let m = CostModel::new(&p);
        assert_eq!(m.affected_category(), Some(Category::Adults));
        assert!((0..3).all(|r| m.ride_delay(r) == 0));
    }

    #[test]
    fn test_path_time_origin_anchored() {
        let p = problem(Some(Weekday::Saturday), 100);
        let m = CostModel::new(&p);
        assert_eq!(m.path_time(&[]), 0);
        // 0->1: 2 + 10 + 2
        assert_eq!(m.path_time(&[1]), 14);
        // + 1->2: 3 + 7 + 1
        assert_eq!(m.path_time(&[1, 2]), 25);
        // origin to ride 0 travels 0
        assert_eq!(m.path_time(&[0]), 5);
    }

    #[test]
    fn test_feasibility_boundary() {
        let p = problem(Some(Weekday::Saturday), 25);
        let m = CostModel::new(&p);
        assert!(m.is_feasible(&[1, 2]));
        assert!(!m.is_feasible(&[1, 2, 0]));
        assert!(m.is_feasible(&[]));
    }

    #[test]
    fn test_feasible_prefix_len() {
        let p = problem(Some(Weekday::Saturday), 25);
        let m = CostModel::new(&p);
        assert_eq!(m.feasible_prefix_len(&[1, 2, 0]), 2);
        assert_eq!(m.feasible_prefix_len(&[1, 2]), 2);
        assert_eq!(m.feasible_prefix_len(&[]), 0);
        // 0->2 costs 9 + 7 + 1 = 17, 2->1 costs 3 + 10 + 2 = 15
        assert_eq!(m.feasible_prefix_len(&[2, 1]), 1);
    }

    #[test]
    fn test_huge_times_saturate() {
        let park = Park::new(
            "huge",
            vec![
                Attraction::new(u64::MAX / 2, Category::Thrill),
                Attraction::new(u64::MAX, Category::Thrill),
            ],
            TravelMatrix::from_rows(vec![vec![0, u64::MAX], vec![u64::MAX, 0]]).expect("valid"),
        )
        .expect("valid")
        .with_category_delays(CategoryDelays::new().with(Category::Thrill, 80))
        .with_day_effects(DayEffects::new().with(Weekday::Friday, Category::Thrill));
        let p = ProblemInstance::new(park, Visitor::new(vec![0, 1], 100, Some(Weekday::Friday)))
            .expect("valid");
        let m = CostModel::new(&p);
        assert_eq!(m.ride_delay(1), u64::MAX / 100);
        assert_eq!(m.leg_cost(0, 1), u64::MAX);
        assert_eq!(m.path_time(&[0, 1, 0]), u64::MAX);
        assert!(!m.is_feasible(&[0]));
        assert_eq!(m.feasible_prefix_len(&[0, 1]), 0);
    }
}
