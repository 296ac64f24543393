//! Domain model types for tour construction.
//!
//! Provides named cities, the read-only point store they live in, and the
//! closed tour produced by the constructive heuristics.

mod city;
mod store;
mod tour;

pub use city::City;
pub use store::PointStore;
pub use tour::Tour;
