//! Plain-text rendering of a constructed tour.

use std::fmt;
use std::time::Duration;

use crate::models::Tour;

/// Printable summary of a tour: the `Visited Nodes:` line, the total
/// distance, and an optional construction time measured by the caller.
///
/// # Examples
///
/// ```
/// use u_tour::models::City;
/// use u_tour::constructive::construct;
/// use u_tour::report::Report;
///
/// let cities = vec![City::new("1", 0.0, 0.0), City::new("2", 0.0, 3.0)];
/// let tour = construct(&cities).unwrap();
/// let text = Report::new(&tour).to_string();
/// assert_eq!(text, "Visited Nodes: 1 2 1\nTotal Distance: 6\n");
/// ```
#[derive(Debug, Clone)]
pub struct Report<'t> {
    names: Vec<&'t str>,
    length: f64,
    elapsed: Option<Duration>,
}

impl<'t> Report<'t> {
    /// Creates a report for `tour` without timing.
    pub fn new(tour: &Tour<'t>) -> Self {
        Self {
            names: tour.names(),
            length: tour.length(),
            elapsed: None,
        }
    }

    /// Attaches the measured construction time.
    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = Some(elapsed);
        self
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Visited Nodes: {}", self.names.join(" "))?;
        writeln!(f, "Total Distance: {}", self.length)?;
        if let Some(elapsed) = self.elapsed {
            writeln!(f, "Time in ms: {}", elapsed.as_millis())?;
        }
        Ok(())
    }
}
