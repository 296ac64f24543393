//! # u-tour
//!
//! Nearest-neighbor tour construction for the planar Traveling Salesman
//! Problem. Starting from the first city, the builder always moves to the
//! closest unvisited city and finally returns to the start.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (City, PointStore, Tour)
//! - [`distance`] — Euclidean distance and the optional rounded metric
//! - [`constructive`] — Nearest-neighbor builder and its slot-linked unvisited set
//! - [`evaluation`] — Tour length and structural checks
//! - [`config`] — Construction options
//! - [`io`] — TSPLIB coordinate reader
//! - [`report`] — Plain-text tour summary
//! - [`instance`] — Seeded random instances
//! - [`logging`] — Logger setup for the binary

pub mod config;
pub mod constructive;
pub mod distance;
mod error;
pub mod evaluation;
pub mod instance;
pub mod io;
pub mod logging;
pub mod models;
pub mod report;

pub use error::{Error, Result};
