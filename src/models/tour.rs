//! Tour type.

use super::City;

/// A closed visiting sequence over a set of cities.
///
/// For `n` input cities a tour holds `n + 1` stops: every city once, then the
/// starting city again. `indices` mirrors `stops` with each city's position in
/// the input list, so coincident cities stay distinguishable.
///
/// # Examples
///
/// ```
/// use u_tour::models::City;
/// use u_tour::constructive::construct;
///
/// let cities = vec![City::new("a", 0.0, 0.0), City::new("b", 1.0, 0.0)];
/// let tour = construct(&cities).unwrap();
/// assert_eq!(tour.names(), vec!["a", "b", "a"]);
/// assert_eq!(tour.indices(), &[0, 1, 0]);
/// assert!((tour.length() - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tour<'a> {
    stops: Vec<&'a City>,
    indices: Vec<usize>,
    length: f64,
}

impl<'a> Tour<'a> {
    /// Assembles a tour from parallel stop/index sequences and its length.
    pub(crate) fn new(stops: Vec<&'a City>, indices: Vec<usize>, length: f64) -> Self {
        debug_assert_eq!(stops.len(), indices.len());
        Self {
            stops,
            indices,
            length,
        }
    }

    /// Cities in visiting order, closing repeat included.
    pub fn stops(&self) -> &[&'a City] {
        &self.stops
    }

    /// Input positions of the stops, closing repeat included.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Total cycle length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Number of stops (input cities + 1).
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always `false` for a constructed tour.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// The starting (and closing) city.
    pub fn start(&self) -> Option<&'a City> {
        self.stops.first().copied()
    }

    /// Stops without the closing repeat: each input city exactly once.
    pub fn interior(&self) -> &[&'a City] {
        match self.stops.len() {
            0 => &[],
            n => &self.stops[..n - 1],
        }
    }

    /// City names in visiting order; first and last are identical.
    pub fn names(&self) -> Vec<&'a str> {
        self.stops.iter().map(|c| c.name()).collect()
    }
}
