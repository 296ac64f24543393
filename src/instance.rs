//! Synthetic instances for benchmarking and testing.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::City;

/// Generates `n` cities uniformly in the square `[0, side) × [0, side)`.
///
/// Cities are named `"1"` to `"n"` in generation order.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_tour::instance::random_uniform;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let cities = random_uniform(100, 1000.0, &mut rng);
/// assert_eq!(cities.len(), 100);
/// assert_eq!(cities[0].name(), "1");
/// assert!(cities.iter().all(|c| (0.0..1000.0).contains(&c.x())));
/// ```
pub fn random_uniform<R: Rng>(n: usize, side: f64, rng: &mut R) -> Vec<City> {
    (1..=n)
        .map(|id| {
            let x = rng.random::<f64>() * side;
            let y = rng.random::<f64>() * side;
            City::new(id.to_string(), x, y)
        })
        .collect()
}

/// Seeded variant of [`random_uniform`]; the same seed yields the same cities.
pub fn seeded_uniform(n: usize, side: f64, seed: u64) -> Vec<City> {
    let mut rng = StdRng::seed_from_u64(seed);
    random_uniform(n, side, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_is_reproducible() {
        assert_eq!(seeded_uniform(50, 10.0, 42), seeded_uniform(50, 10.0, 42));
        assert_ne!(seeded_uniform(50, 10.0, 42), seeded_uniform(50, 10.0, 43));
    }

    #[test]
    fn test_names_and_bounds() {
        let cities = seeded_uniform(20, 5.0, 1);
        for (i, c) in cities.iter().enumerate() {
            assert_eq!(c.name(), (i + 1).to_string());
            assert!(c.x() >= 0.0 && c.x() < 5.0);
            assert!(c.y() >= 0.0 && c.y() < 5.0);
        }
    }

    #[test]
    fn test_zero_cities() {
        assert!(seeded_uniform(0, 5.0, 1).is_empty());
    }
}
