//! Constructive heuristics for building closed tours.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor tour, O(n²)
//! - [`UnvisitedSet`] — Slot-linked working set with O(1) removal

mod nearest_neighbor;
mod unvisited;

pub use nearest_neighbor::{construct, nearest_neighbor, nearest_neighbor_order};
pub use unvisited::{Iter, UnvisitedSet};
