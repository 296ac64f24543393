//! City loading.
//!
//! - [`read_cities`] / [`load_cities`] — TSPLIB `NODE_COORD_SECTION` reader

mod tsplib;

pub use tsplib::{load_cities, read_cities};
