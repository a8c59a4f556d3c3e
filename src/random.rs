//! Seedable random number generation.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a generator from `seed`, or from a fresh random seed when `None`.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_itinerary::random::create_rng;
///
/// let a: u64 = create_rng(Some(7)).random();
/// let b: u64 = create_rng(Some(7)).random();
/// assert_eq!(a, b);
/// ```
pub fn create_rng(seed: Option<u64>) -> StdRng {
    StdRng::seed_from_u64(seed.unwrap_or_else(rand::random))
}
