//! How the layout reads the caller's graph.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::graph::Size;

/// Read-only view of a caller's graph.
///
/// Vertices are identified by the caller's own values. The order in which [`vertices`]
/// reports them, and in which [`edges`] reports targets, is the order the layout starts from.
///
/// [`vertices`]: Navigator::vertices
/// [`edges`]: Navigator::edges
pub trait Navigator<T> {
    fn vertices(&self) -> Vec<T>;

    /// Targets of the edges leaving `v`.
    fn edges(&self, v: &T) -> Vec<T>;

    fn size(&self, v: &T) -> Size;
}

/// An in-memory [`Navigator`] built from explicit vertices and edges.
#[derive(Debug, Clone)]
pub struct AdjacencyNavigator<T> {
    order: Vec<T>,
    entries: FxHashMap<T, Entry<T>>,
}

#[derive(Debug, Clone)]
struct Entry<T> {
    size: Size,
    targets: Vec<T>,
}

impl<T> Default for AdjacencyNavigator<T> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            entries: FxHashMap::default(),
        }
    }
}

impl<T: Clone + Eq + Hash> AdjacencyNavigator<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every vertex gets `size`; endpoints become vertices in order of first appearance.
    pub fn from_edges(edges: impl IntoIterator<Item = (T, T)>, size: Size) -> Self {
        let mut nav = Self::new();
        for (from, to) in edges {
            nav.ensure(from.clone(), size);
            nav.ensure(to.clone(), size);
            nav.add_edge(from, to);
        }
        nav
    }

    fn ensure(&mut self, v: T, size: Size) {
        if !self.entries.contains_key(&v) {
            self.add_vertex(v, size);
        }
    }

    /// Adds `v`, or updates its size if already present.
    pub fn add_vertex(&mut self, v: T, size: Size) -> &mut Self {
        match self.entries.get_mut(&v) {
            Some(entry) => entry.size = size,
            None => {
                self.order.push(v.clone());
                self.entries.insert(
                    v,
                    Entry {
                        size,
                        targets: Vec::new(),
                    },
                );
            }
        }
        self
    }

    /// Records the edge `from -> to`. `to` does not have to be a vertex; the layout reports
    /// such edges as errors. Edges leaving an unknown vertex are dropped.
    pub fn add_edge(&mut self, from: T, to: T) -> &mut Self {
        if let Some(entry) = self.entries.get_mut(&from) {
            entry.targets.push(to);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<T: Clone + Eq + Hash> Navigator<T> for AdjacencyNavigator<T> {
    fn vertices(&self) -> Vec<T> {
        self.order.clone()
    }

    fn edges(&self, v: &T) -> Vec<T> {
        self.entries
            .get(v)
            .map(|e| e.targets.clone())
            .unwrap_or_default()
    }

    fn size(&self, v: &T) -> Size {
        self.entries.get(v).map(|e| e.size).unwrap_or_default()
    }
}
