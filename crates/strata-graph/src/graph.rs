//! Vertex arena with mutual-inverse adjacency.

use std::fmt;
use std::ops::{Index, IndexMut};

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};

mod direction;
mod geom;
mod vertex;

pub mod dfs;

pub use direction::EdgeDirection;
pub use geom::{Point, Rect, Size};
pub use vertex::Vertex;

/// Insertion-ordered neighbour set. Iteration order is part of the layout's determinism.
pub type AdjSet = IndexSet<VertexId, FxBuildHasher>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(usize);

impl VertexId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Graph<T> {
    vertices: Vec<Vertex<T>>,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a real vertex carrying the caller's tag.
    pub fn add_vertex(&mut self, tag: T, size: Size) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex::new(Some(tag), size));
        id
    }

    /// Adds a zero-size dummy vertex standing in for a segment of the edge `source -> sink`.
    ///
    /// The dummy has no edges yet; the caller wires it into the chain.
    pub fn add_dummy(&mut self, source: VertexId, sink: VertexId, level: i32) -> VertexId {
        let id = VertexId(self.vertices.len());
        let mut v = Vertex::new(None, Size::default());
        v.source = Some(source);
        v.sink = Some(sink);
        v.level = level;
        self.vertices.push(v);
        id
    }

    /// Adds the edge `u -> v`. Adding an existing edge is a no-op.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) {
        self.vertices[u.0].forward.insert(v);
        self.vertices[v.0].backward.insert(u);
    }

    /// Removes the edge `u -> v`, returning whether it existed.
    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) -> bool {
        let removed = self.vertices[u.0].forward.shift_remove(&v);
        self.vertices[v.0].backward.shift_remove(&u);
        removed
    }

    /// Replaces `u -> v` with `v -> u`.
    pub fn reverse_edge(&mut self, u: VertexId, v: VertexId) {
        if self.remove_edge(u, v) {
            self.add_edge(v, u);
        }
    }

    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.vertices[u.0].forward.contains(&v)
    }

    /// Checked lookup; `g[id]` panics where this returns `None`.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(id.0)
    }

    /// Vertex ids in insertion order (real vertices first, then dummies as they were created).
    pub fn ids(&self) -> impl DoubleEndedIterator<Item = VertexId> + ExactSizeIterator + use<T> {
        (0..self.vertices.len()).map(VertexId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &Vertex<T>)> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(ix, v)| (VertexId(ix), v))
    }

    /// Every edge as `(source, target)`, grouped by source in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.iter()
            .flat_map(|(id, v)| v.forward.iter().map(move |&w| (id, w)))
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.forward.len()).sum()
    }

    /// Snapshot of `v`'s neighbours in `dir`, safe to hold while the graph is being edited.
    pub fn neighbors(&self, v: VertexId, dir: EdgeDirection) -> Vec<VertexId> {
        dir.edges(&self.vertices[v.0]).iter().copied().collect()
    }
}

impl<T> Index<VertexId> for Graph<T> {
    type Output = Vertex<T>;

    fn index(&self, id: VertexId) -> &Self::Output {
        &self.vertices[id.0]
    }
}

impl<T> IndexMut<VertexId> for Graph<T> {
    fn index_mut(&mut self, id: VertexId) -> &mut Self::Output {
        &mut self.vertices[id.0]
    }
}
