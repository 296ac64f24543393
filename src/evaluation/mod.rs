//! Tour evaluation, independent of construction.
//!
//! - [`tour_length`] — Sum of consecutive edge lengths
//! - [`check_tour`] — Closed-permutation check over input positions

mod length;

pub use length::{check_tour, tour_length, TourDefect};
