//! Distance computation between cities.
//!
//! Provides the real-valued Euclidean distance and the optional rounded metric.

mod metric;

pub use metric::{euclidean, DistanceMetric};
