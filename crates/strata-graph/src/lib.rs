//! Graph container APIs used by `strata`.
//!
//! The container is an arena of [`Vertex`] records addressed by [`VertexId`]. Every vertex keeps a
//! forward and a backward neighbour set; the two are exact mutual inverses and can only be
//! changed through [`Graph::add_edge`], [`Graph::remove_edge`] and [`Graph::reverse_edge`].
//!
//! The graph only grows during a layout run: dummy vertices are appended when long edges are
//! split, nothing is ever removed.

mod graph;

pub use graph::dfs::{self, Dfs, Visitor};
pub use graph::{AdjSet, EdgeDirection, Graph, Point, Rect, Size, Vertex, VertexId};
