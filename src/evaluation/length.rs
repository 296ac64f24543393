//! Tour length and structural checks.

use crate::distance::DistanceMetric;
use crate::models::City;

/// Sum of the edge lengths between consecutive stops.
///
/// The stops are expected to already contain the closing repeat; no edge is
/// added from the last stop back to the first.
///
/// # Examples
///
/// ```
/// use u_tour::models::City;
/// use u_tour::distance::DistanceMetric;
/// use u_tour::evaluation::tour_length;
///
/// let a = City::new("a", 0.0, 0.0);
/// let b = City::new("b", 3.0, 4.0);
/// assert!((tour_length(&[&a, &b, &a], DistanceMetric::Euclidean) - 10.0).abs() < 1e-10);
/// assert_eq!(tour_length(&[&a], DistanceMetric::Euclidean), 0.0);
/// ```
pub fn tour_length(stops: &[&City], metric: DistanceMetric) -> f64 {
    stops
        .windows(2)
        .map(|pair| metric.between(pair[0], pair[1]))
        .sum()
}

/// A structural defect in a closed visiting sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TourDefect {
    /// The sequence does not have `n + 1` entries.
    WrongLength {
        /// Number of entries found.
        actual: usize,
        /// Number of entries required.
        expected: usize,
    },
    /// Last entry differs from the first.
    NotClosed {
        /// First entry.
        first: usize,
        /// Last entry.
        last: usize,
    },
    /// An index outside `0..n`.
    OutOfRange {
        /// The offending index.
        index: usize,
    },
    /// An input position visited more than once in the interior.
    Repeated {
        /// The repeated index.
        index: usize,
    },
    /// An input position never visited.
    Missing {
        /// The missing index.
        index: usize,
    },
}

/// Checks that `indices` is a closed tour over `n` input positions.
///
/// Returns every defect found; an empty list means each position appears
/// exactly once in the interior and the last entry repeats the first.
///
/// # Examples
///
/// ```
/// use u_tour::evaluation::{check_tour, TourDefect};
///
/// assert!(check_tour(&[0, 2, 1, 0], 3).is_empty());
/// assert_eq!(
///     check_tour(&[0, 1, 1, 0], 3),
///     vec![TourDefect::Repeated { index: 1 }, TourDefect::Missing { index: 2 }]
/// );
/// ```
pub fn check_tour(indices: &[usize], n: usize) -> Vec<TourDefect> {
    let mut defects = Vec::new();

    if indices.len() != n + 1 {
        defects.push(TourDefect::WrongLength {
            actual: indices.len(),
            expected: n + 1,
        });
    }

    if let (Some(&first), Some(&last)) = (indices.first(), indices.last()) {
        if indices.len() > 1 && first != last {
            defects.push(TourDefect::NotClosed { first, last });
        }
    }

    let interior = match indices.len() {
        0 => indices,
        len => &indices[..len - 1],
    };
    let mut seen = vec![false; n];
    for &index in interior {
        match seen.get_mut(index) {
            None => defects.push(TourDefect::OutOfRange { index }),
            Some(visited) if *visited => defects.push(TourDefect::Repeated { index }),
            Some(visited) => *visited = true,
        }
    }

    defects.extend(
        seen.iter()
            .enumerate()
            .filter(|(_, visited)| !**visited)
            .map(|(index, _)| TourDefect::Missing { index }),
    );

    defects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_square() {
        let a = City::new("a", 0.0, 0.0);
        let b = City::new("b", 0.0, 1.0);
        let c = City::new("c", 1.0, 1.0);
        let d = City::new("d", 1.0, 0.0);
        let len = tour_length(&[&a, &b, &c, &d, &a], DistanceMetric::Euclidean);
        assert!((len - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_length_empty() {
        assert_eq!(tour_length(&[], DistanceMetric::Euclidean), 0.0);
    }

    #[test]
    fn test_length_does_not_add_closing_edge() {
        let a = City::new("a", 0.0, 0.0);
        let b = City::new("b", 0.0, 2.0);
        assert!((tour_length(&[&a, &b], DistanceMetric::Euclidean) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_length_rounded() {
        let a = City::new("a", 0.0, 0.0);
        let b = City::new("b", 1.0, 1.0);
        assert_eq!(tour_length(&[&a, &b, &a], DistanceMetric::RoundedEuclidean), 2.0);
    }

    #[test]
    fn test_check_valid() {
        assert!(check_tour(&[0, 0], 1).is_empty());
        assert!(check_tour(&[0, 3, 1, 2, 0], 4).is_empty());
    }

    #[test]
    fn test_check_not_closed() {
        assert_eq!(
            check_tour(&[0, 1, 2, 1], 3),
            vec![TourDefect::NotClosed { first: 0, last: 1 }]
        );
    }

    #[test]
    fn test_check_wrong_length_and_missing() {
        let defects = check_tour(&[0, 1, 0], 3);
        assert!(defects.contains(&TourDefect::WrongLength {
            actual: 3,
            expected: 4
        }));
        assert!(defects.contains(&TourDefect::Missing { index: 2 }));
    }

    #[test]
    fn test_check_out_of_range() {
        let defects = check_tour(&[0, 5, 0], 2);
        assert!(defects.contains(&TourDefect::OutOfRange { index: 5 }));
        assert!(defects.contains(&TourDefect::Missing { index: 1 }));
    }

    #[test]
    fn test_check_empty_sequence() {
        assert_eq!(
            check_tour(&[], 0),
            vec![TourDefect::WrongLength {
                actual: 0,
                expected: 1
            }]
        );
    }
}
