//! Layered (Sugiyama-style) graph layout.
//!
//! The pipeline assigns every vertex a level, splits long edges into chains of dummy
//! vertices, orders each level to reduce edge crossings and finally computes horizontal
//! coordinates. [`Layout`] wraps the whole thing behind a caller-facing API keyed by the
//! caller's own vertex values; the individual phases are public for callers that want to
//! drive them directly on a [`graph::Graph`].

#![forbid(unsafe_code)]

pub use strata_graph as graph;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod coordinate_system;
pub mod error;
pub mod hierarchy;
pub mod level;
pub mod model;
pub mod navigator;
pub mod order;
pub mod pipeline;
pub mod position;
pub mod proper;

mod drawing;
mod dump;

pub use drawing::Layout;
pub use dump::{EdgeSnapshot, LayoutSnapshot, VertexSnapshot};
pub use error::{Error, Result};
pub use level::{Level, LevelDirection, LevelMap, Memento};
pub use model::{Heuristic, LayoutOptions, Orientation};
pub use navigator::{AdjacencyNavigator, Navigator};
