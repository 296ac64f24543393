//! Construction options.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMetric;
use crate::{Error, Result};

/// Options for a nearest-neighbor construction run.
///
/// Can be built in code or read from a JSON document; missing fields take
/// their defaults.
///
/// # Examples
///
/// ```
/// use u_tour::config::TourConfig;
/// use u_tour::distance::DistanceMetric;
///
/// let config = TourConfig::new().with_metric(DistanceMetric::RoundedEuclidean);
/// assert_eq!(config.metric, DistanceMetric::RoundedEuclidean);
///
/// let parsed = TourConfig::from_json(r#"{ "metric": "euclidean" }"#).unwrap();
/// assert_eq!(parsed, TourConfig::default());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TourConfig {
    /// Metric used both for neighbor selection and the reported length.
    pub metric: DistanceMetric,
}

impl TourConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the distance metric.
    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Parses a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::invalid_config(e.to_string()))
    }

    /// Reads a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
