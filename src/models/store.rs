//! Point store.

use super::City;
use crate::distance::{self, DistanceMetric};

/// The fixed, read-only set of cities a tour is built over.
///
/// Cities keep their input order; index `0` is the tour's starting city.
///
/// # Examples
///
/// ```
/// use u_tour::models::{City, PointStore};
///
/// let store = PointStore::from_cities(vec![
///     City::new("a", 0.0, 0.0),
///     City::new("b", 3.0, 4.0),
/// ]);
/// assert_eq!(store.len(), 2);
/// assert!((store.distance(0, 1) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PointStore {
    cities: Vec<City>,
}

impl PointStore {
    /// Creates a store owning the given cities, in order.
    pub fn from_cities(cities: Vec<City>) -> Self {
        Self { cities }
    }

    /// All cities in input order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Returns the city at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&City> {
        self.cities.get(index)
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if the store holds no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Iterates over cities in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, City> {
        self.cities.iter()
    }

    /// Euclidean distance between the cities at `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        distance::euclidean(&self.cities[from], &self.cities[to])
    }

    /// Distance between the cities at `from` and `to` under `metric`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn distance_with(&self, metric: DistanceMetric, from: usize, to: usize) -> f64 {
        metric.between(&self.cities[from], &self.cities[to])
    }
}

impl From<Vec<City>> for PointStore {
    fn from(cities: Vec<City>) -> Self {
        Self::from_cities(cities)
    }
}

impl<'a> IntoIterator for &'a PointStore {
    type Item = &'a City;
    type IntoIter = std::slice::Iter<'a, City>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> PointStore {
        PointStore::from_cities(vec![
            City::new("a", 0.0, 0.0),
            City::new("b", 3.0, 4.0),
            City::new("c", 0.0, 8.0),
        ])
    }

    #[test]
    fn test_store_basics() {
        let store = sample_store();
        assert_eq!(store.len(), 3);
        assert!(!store.is_empty());
        assert_eq!(store.get(2).map(City::name), Some("c"));
        assert!(store.get(3).is_none());
        let names: Vec<&str> = store.iter().map(City::name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_store_empty() {
        let store = PointStore::default();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_store_distance() {
        let store = sample_store();
        assert!((store.distance(0, 1) - 5.0).abs() < 1e-10);
        assert!((store.distance(0, 2) - 8.0).abs() < 1e-10);
        assert_eq!(store.distance(1, 1), 0.0);
    }

    #[test]
    fn test_store_distance_symmetric() {
        let store = sample_store();
        for i in 0..store.len() {
            for j in 0..store.len() {
                assert_eq!(store.distance(i, j), store.distance(j, i));
            }
        }
    }

    #[test]
    fn test_store_distance_with_rounded() {
        let store = PointStore::from(vec![City::new("a", 0.0, 0.0), City::new("b", 1.0, 1.0)]);
        assert_eq!(store.distance_with(DistanceMetric::RoundedEuclidean, 0, 1), 1.0);
        assert!((store.distance_with(DistanceMetric::Euclidean, 0, 1) - 2f64.sqrt()).abs() < 1e-12);
    }
}
