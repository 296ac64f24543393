//! Nearest-neighbor constructive heuristic.
//!
//! Builds a closed tour greedily: starting from the first input city, always
//! travel to the nearest unvisited city, then return to the start.
//!
//! # Complexity
//!
//! O(n²) distance evaluations where n = number of cities. Each step scans the
//! remaining [`UnvisitedSet`] once and unlinks the chosen slot in O(1).
//!
//! # Reference
//!
//! Rosenkrantz, Stearns & Lewis (1977). "An analysis of several heuristics
//! for the traveling salesman problem", *SIAM J. Comput.* 6(3), 563-581.

use super::UnvisitedSet;
use crate::config::TourConfig;
use crate::distance::DistanceMetric;
use crate::evaluation::tour_length;
use crate::models::{City, PointStore, Tour};
use crate::{Error, Result};

/// Greedy visiting order over `n` slots, starting at slot `0`.
///
/// `dist(from, to)` is called once for every remaining candidate at every
/// step, `n * (n - 1) / 2` calls in total. Ties go to the lowest remaining
/// slot. The returned order has `n` entries and does not repeat the start.
///
/// # Examples
///
/// ```
/// use u_tour::constructive::nearest_neighbor_order;
///
/// let xs = [0.0f64, 5.0, 1.0, 3.0];
/// let order = nearest_neighbor_order(xs.len(), |a, b| (xs[a] - xs[b]).abs());
/// assert_eq!(order, vec![0, 2, 3, 1]);
/// ```
pub fn nearest_neighbor_order<F>(n: usize, mut dist: F) -> Vec<usize>
where
    F: FnMut(usize, usize) -> f64,
{
    let mut order = Vec::with_capacity(n + 1);
    let mut unvisited = UnvisitedSet::with_len(n);

    let Some(start) = unvisited.first() else {
        return order;
    };
    unvisited.remove(start);
    order.push(start);

    let mut current = start;
    while !unvisited.is_empty() {
        let mut best: Option<(usize, f64)> = None;
        for slot in &unvisited {
            let d = dist(current, slot);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                // NaN never beats a candidate but the first one is always taken
                Some(_) if d.is_nan() => {}
                _ => best = Some((slot, d)),
            }
        }

        let Some((next, _)) = best else { break };
        unvisited.remove(next);
        order.push(next);
        current = next;
    }

    order
}

/// Constructs a nearest-neighbor tour over `cities` with Euclidean distance.
///
/// The tour starts at `cities[0]`, visits every city once, and repeats the
/// start at the end. Its length is the sum of the consecutive edge lengths,
/// closing edge included.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `cities` is empty.
///
/// # Examples
///
/// ```
/// use u_tour::models::City;
/// use u_tour::constructive::construct;
///
/// let cities = vec![
///     City::new("A", 0.0, 0.0),
///     City::new("B", 0.0, 1.0),
///     City::new("C", 1.0, 1.0),
///     City::new("D", 1.0, 0.0),
/// ];
/// let tour = construct(&cities).unwrap();
/// assert_eq!(tour.names(), vec!["A", "B", "C", "D", "A"]);
/// assert!((tour.length() - 4.0).abs() < 1e-10);
/// ```
pub fn construct(cities: &[City]) -> Result<Tour<'_>> {
    build(cities, DistanceMetric::Euclidean)
}

/// Constructs a nearest-neighbor tour over a [`PointStore`] using `config`.
///
/// The configured metric drives both neighbor selection and the reported
/// length.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if the store holds no cities.
///
/// # Examples
///
/// ```
/// use u_tour::models::{City, PointStore};
/// use u_tour::config::TourConfig;
/// use u_tour::constructive::nearest_neighbor;
///
/// let store = PointStore::from_cities(vec![
///     City::new("A", 0.0, 0.0),
///     City::new("B", 1.0, 0.0),
///     City::new("C", 3.0, 0.0),
/// ]);
/// let tour = nearest_neighbor(&store, &TourConfig::default()).unwrap();
/// assert_eq!(tour.names(), vec!["A", "B", "C", "A"]);
/// assert!((tour.length() - 6.0).abs() < 1e-10);
/// ```
pub fn nearest_neighbor<'a>(store: &'a PointStore, config: &TourConfig) -> Result<Tour<'a>> {
    build(store.cities(), config.metric)
}

fn build(cities: &[City], metric: DistanceMetric) -> Result<Tour<'_>> {
    let Some(start) = cities.first() else {
        return Err(Error::EmptyInput);
    };
    log::debug!(
        "nearest neighbor: n={} start={} metric={metric:?}",
        cities.len(),
        start.name()
    );

    let mut indices =
        nearest_neighbor_order(cities.len(), |a, b| metric.between(&cities[a], &cities[b]));
    indices.push(indices[0]);

    let stops: Vec<&City> = indices.iter().map(|&i| &cities[i]).collect();
    let length = tour_length(&stops, metric);
    log::debug!("nearest neighbor: stops={} length={length:.3}", stops.len());

    Ok(Tour::new(stops, indices, length))
}
