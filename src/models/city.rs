//! City type.

use serde::{Deserialize, Serialize};

/// A named location in the plane.
///
/// Two cities are equal only when name and both coordinates match exactly.
/// Cities sharing coordinates are still distinct entries of a tour.
///
/// # Examples
///
/// ```
/// use u_tour::models::City;
///
/// let a = City::new("a", 0.0, 0.0);
/// let b = City::new("b", 3.0, 4.0);
/// assert_eq!(a.name(), "a");
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    name: String,
    x: f64,
    y: f64,
}

impl City {
    /// Creates a new city.
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    /// Identifying label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another city.
    pub fn distance_to(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
