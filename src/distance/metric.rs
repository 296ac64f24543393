//! Planar distance functions.

use serde::{Deserialize, Serialize};

use crate::models::City;

/// Straight-line distance between two cities.
///
/// Symmetric, and zero exactly when both coordinates coincide.
///
/// # Examples
///
/// ```
/// use u_tour::models::City;
/// use u_tour::distance::euclidean;
///
/// let a = City::new("a", 1.0, 1.0);
/// let b = City::new("b", 4.0, 5.0);
/// assert!((euclidean(&a, &b) - 5.0).abs() < 1e-10);
/// assert_eq!(euclidean(&a, &b), euclidean(&b, &a));
/// ```
#[inline]
pub fn euclidean(a: &City, b: &City) -> f64 {
    a.distance_to(b)
}

/// How edge lengths are measured during construction.
///
/// `RoundedEuclidean` rounds the full-precision distance to the nearest whole
/// number, as TSPLIB `EUC_2D` instances do. Coordinates are never truncated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    /// Real-valued Euclidean distance.
    #[default]
    Euclidean,
    /// Euclidean distance rounded to the nearest integer.
    RoundedEuclidean,
}

impl DistanceMetric {
    /// Distance between `a` and `b` under this metric.
    pub fn between(self, a: &City, b: &City) -> f64 {
        let d = euclidean(a, b);
        match self {
            Self::Euclidean => d,
            Self::RoundedEuclidean => d.round(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_zero_for_same_coordinates() {
        let a = City::new("a", -3.25, 7.5);
        let b = City::new("b", -3.25, 7.5);
        assert_eq!(euclidean(&a, &b), 0.0);
    }

    #[test]
    fn test_euclidean_positive_for_distinct_coordinates() {
        let a = City::new("a", 0.0, 0.0);
        let b = City::new("b", 1e-9, 0.0);
        assert!(euclidean(&a, &b) > 0.0);
    }

    #[test]
    fn test_rounded_metric() {
        let a = City::new("a", 0.0, 0.0);
        let b = City::new("b", 1.6, 1.2);
        // exact distance is 2.0
        assert_eq!(DistanceMetric::RoundedEuclidean.between(&a, &b), 2.0);
        let c = City::new("c", 0.3, 0.4);
        assert!((DistanceMetric::Euclidean.between(&a, &c) - 0.5).abs() < 1e-12);
        assert_eq!(DistanceMetric::RoundedEuclidean.between(&a, &c), 1.0);
    }

    #[test]
    fn test_rounded_uses_full_precision_deltas() {
        // Truncating the deltas first would give 0.
        let a = City::new("a", 0.0, 0.0);
        let b = City::new("b", 0.9, 0.9);
        assert_eq!(DistanceMetric::RoundedEuclidean.between(&a, &b), 1.0);
    }

    #[test]
    fn test_metric_default_is_euclidean() {
        assert_eq!(DistanceMetric::default(), DistanceMetric::Euclidean);
    }

    #[test]
    fn test_metric_serde_names() {
        let m: DistanceMetric = serde_json::from_str("\"rounded_euclidean\"").expect("valid");
        assert_eq!(m, DistanceMetric::RoundedEuclidean);
        assert_eq!(
            serde_json::to_string(&DistanceMetric::Euclidean).expect("serializable"),
            "\"euclidean\""
        );
    }
}
