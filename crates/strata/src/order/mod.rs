//! Crossing reduction.
//!
//! [`OrderAssigner`] permutes the vertices inside each level, sweeping down and up the level
//! map and sorting each level by an [`OrderingHeuristic`] weight computed from the adjacent,
//! already-fixed level. A transposition pass then swaps neighbours while that lowers the
//! crossing count.

mod assigner;
mod heuristic;

pub use assigner::{MAX_ITERATIONS, OrderAssigner};
pub use heuristic::{Barycenter, OrderingHeuristic, WeightedMedian};
