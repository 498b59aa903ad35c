//! Levels and the ordered map of levels.
//!
//! A [`Level`] is the ordered list of vertices drawn on one line. The vertex's own `order`
//! field mirrors its index in that list; every mutation here keeps the two in sync.

use std::collections::VecDeque;
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::graph::dfs::preorder;
use crate::graph::{AdjSet, EdgeDirection, Graph, Vertex, VertexId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    number: i32,
    vertices: Vec<VertexId>,
}

impl Level {
    pub fn new(number: i32) -> Self {
        Self {
            number,
            vertices: Vec::new(),
        }
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains<T>(&self, g: &Graph<T>, v: VertexId) -> bool {
        g[v].level == self.number && self.vertices.get(g[v].order) == Some(&v)
    }

    /// Appends `v` at the end of the level and records its order.
    pub fn push<T>(&mut self, g: &mut Graph<T>, v: VertexId) {
        g[v].order = self.vertices.len();
        self.vertices.push(v);
    }

    /// Writes each vertex's index into its `order` field.
    pub fn assign_order<T>(&self, g: &mut Graph<T>) {
        for (order, &v) in self.vertices.iter().enumerate() {
            g[v].order = order;
        }
    }

    /// Replaces the level's contents with a permutation of the same vertices.
    pub fn reorder<T>(&mut self, g: &mut Graph<T>, vertices: Vec<VertexId>) {
        debug_assert_eq!(vertices.len(), self.vertices.len());
        self.vertices = vertices;
        self.assign_order(g);
    }

    /// Swaps two vertices of this level.
    pub fn swap<T>(&mut self, g: &mut Graph<T>, v: VertexId, w: VertexId) {
        let (i, j) = (g[v].order, g[w].order);
        debug_assert!(self.vertices[i] == v && self.vertices[j] == w);
        self.vertices.swap(i, j);
        g[v].order = j;
        g[w].order = i;
    }

    /// Number of crossings between the edges leaving this level in `dir` (toward the next
    /// level for `Forward`, the previous one for `Backward`).
    pub fn count_crossings<T>(&self, g: &Graph<T>, dir: EdgeDirection) -> usize {
        self.count_with(g, dir, |u| g[u].order)
    }

    /// Like [`Level::count_crossings`], but as if `v` and `w` on the adjacent level had
    /// traded places. Nothing is mutated.
    pub fn count_swap_crossings<T>(
        &self,
        g: &Graph<T>,
        v: VertexId,
        w: VertexId,
        dir: EdgeDirection,
    ) -> usize {
        let (ov, ow) = (g[v].order, g[w].order);
        self.count_with(g, dir, |u| {
            if u == v {
                ow
            } else if u == w {
                ov
            } else {
                g[u].order
            }
        })
    }

    fn count_with<T>(
        &self,
        g: &Graph<T>,
        dir: EdgeDirection,
        order: impl Fn(VertexId) -> usize,
    ) -> usize {
        let mut crossings = 0;
        for (i, &a) in self.vertices.iter().enumerate() {
            for &b in &self.vertices[i + 1..] {
                for &c in dir.edges(&g[a]) {
                    let oc = order(c);
                    crossings += dir
                        .edges(&g[b])
                        .iter()
                        .filter(|&&d| oc > order(d))
                        .count();
                }
            }
        }
        crossings
    }
}

/// Snapshot of every level's ordering, used to roll back an optimisation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memento {
    levels: Vec<Vec<VertexId>>,
}

/// All levels of a layered graph, indexed by level number.
///
/// Level numbers form a contiguous range `first..=last`; levels inside the range that hold
/// no vertex are present and empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelMap {
    levels: VecDeque<Level>,
}

impl LevelMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populates the levels from the vertices' assigned levels. Within a level, vertices
    /// appear in the order a forward depth-first walk first reaches them, which keeps
    /// connected vertices close together from the start.
    pub fn build<T>(g: &mut Graph<T>) -> Self {
        let mut map = Self::new();
        for v in preorder(g, g.ids(), EdgeDirection::Forward) {
            let level = g[v].level;
            map.make(level).push(g, v);
        }
        map
    }

    /// Returns the level `number`, creating it and every level between it and the existing
    /// range.
    pub fn make(&mut self, number: i32) -> &mut Level {
        let (first, last) = match (self.first_number(), self.last_number()) {
            (Some(first), Some(last)) => (first, last),
            _ => (number, number - 1),
        };
        for n in (number..first).rev() {
            self.levels.push_front(Level::new(n));
        }
        for n in last + 1..=number {
            self.levels.push_back(Level::new(n));
        }
        let first = first.min(number);
        &mut self.levels[(number - first) as usize]
    }

    fn slot(&self, number: i32) -> Option<usize> {
        let first = self.first_number()?;
        let ix = usize::try_from(i64::from(number) - i64::from(first)).ok()?;
        (ix < self.levels.len()).then_some(ix)
    }

    pub fn get(&self, number: i32) -> Option<&Level> {
        self.slot(number).map(|ix| &self.levels[ix])
    }

    pub fn get_mut(&mut self, number: i32) -> Option<&mut Level> {
        self.slot(number).map(|ix| &mut self.levels[ix])
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn first(&self) -> Option<&Level> {
        self.levels.front()
    }

    pub fn last(&self) -> Option<&Level> {
        self.levels.back()
    }

    pub fn first_number(&self) -> Option<i32> {
        self.first().map(Level::number)
    }

    pub fn last_number(&self) -> Option<i32> {
        self.last().map(Level::number)
    }

    /// The level above `number`.
    pub fn prev(&self, number: i32) -> Option<&Level> {
        self.get(number - 1)
    }

    /// The level below `number`.
    pub fn next(&self, number: i32) -> Option<&Level> {
        self.get(number + 1)
    }

    /// Levels from top to bottom.
    pub fn levels(&self) -> impl DoubleEndedIterator<Item = &Level> + ExactSizeIterator {
        self.levels.iter()
    }

    pub fn numbers(&self) -> impl DoubleEndedIterator<Item = i32> + use<> {
        match (self.first_number(), self.last_number()) {
            (Some(first), Some(last)) => first..last + 1,
            _ => 0..0,
        }
    }

    /// Total number of edge crossings over all pairs of adjacent levels.
    pub fn count_crossing<T>(&self, g: &Graph<T>) -> usize {
        self.levels()
            .filter(|level| self.next(level.number()).is_some())
            .map(|level| level.count_crossings(g, EdgeDirection::Forward))
            .sum()
    }

    /// Crossings on both sides of level `number`.
    pub fn adjacent_crossings<T>(&self, g: &Graph<T>, number: i32) -> usize {
        let below = match (self.get(number), self.next(number)) {
            (Some(level), Some(_)) => level.count_crossings(g, EdgeDirection::Forward),
            _ => 0,
        };
        let above = match self.prev(number) {
            Some(prev) => prev.count_crossings(g, EdgeDirection::Forward),
            None => 0,
        };
        below + above
    }

    /// Crossings on both sides of level `number` if its vertices `v` and `w` were swapped.
    pub fn adjacent_swap_crossings<T>(
        &self,
        g: &Graph<T>,
        number: i32,
        v: VertexId,
        w: VertexId,
    ) -> usize {
        let above = self
            .prev(number)
            .map_or(0, |prev| prev.count_swap_crossings(g, v, w, EdgeDirection::Forward));
        let below = self
            .next(number)
            .map_or(0, |next| next.count_swap_crossings(g, v, w, EdgeDirection::Backward));
        above + below
    }

    pub fn memento(&self) -> Memento {
        Memento {
            levels: self.levels.iter().map(|l| l.vertices.clone()).collect(),
        }
    }

    /// Puts back the orderings captured by [`LevelMap::memento`].
    pub fn restore<T>(&mut self, g: &mut Graph<T>, memento: &Memento) {
        debug_assert_eq!(memento.levels.len(), self.levels.len());
        for (level, vertices) in self.levels.iter_mut().zip(&memento.levels) {
            level.vertices.clone_from(vertices);
            level.assign_order(g);
        }
    }

    /// Renders one line per level, each vertex shown as `id@x`.
    pub fn display<'a, T>(&'a self, g: &'a Graph<T>) -> impl fmt::Display + 'a {
        LevelMapDisplay { map: self, g }
    }
}

impl Index<i32> for LevelMap {
    type Output = Level;

    /// Panics when `number` is outside the map.
    fn index(&self, number: i32) -> &Level {
        match self.slot(number) {
            Some(ix) => &self.levels[ix],
            None => panic!("level {number} is not in the map"),
        }
    }
}

impl IndexMut<i32> for LevelMap {
    fn index_mut(&mut self, number: i32) -> &mut Level {
        match self.slot(number) {
            Some(ix) => &mut self.levels[ix],
            None => panic!("level {number} is not in the map"),
        }
    }
}

struct LevelMapDisplay<'a, T> {
    map: &'a LevelMap,
    g: &'a Graph<T>,
}

impl<T> fmt::Display for LevelMapDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for level in self.map.levels() {
            write!(f, "{:>3}: [", level.number())?;
            for (i, &v) in level.vertices().iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                let marker = if self.g[v].is_dummy() { "~" } else { "" };
                write!(f, "{marker}{v}@{}", self.g[v].pos.x)?;
            }
            f.write_str("]\n")?;
        }
        Ok(())
    }
}

/// Direction of a sweep over the levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LevelDirection {
    /// From the first level to the last.
    Down,
    /// From the last level to the first.
    Up,
}

impl LevelDirection {
    pub fn opposite(self) -> Self {
        match self {
            LevelDirection::Down => LevelDirection::Up,
            LevelDirection::Up => LevelDirection::Down,
        }
    }

    /// Number of the level a sweep starts from.
    pub fn first(self, map: &LevelMap) -> Option<i32> {
        match self {
            LevelDirection::Down => map.first_number(),
            LevelDirection::Up => map.last_number(),
        }
    }

    /// Number of the level visited after `number`.
    pub fn next(self, number: i32) -> i32 {
        match self {
            LevelDirection::Down => number + 1,
            LevelDirection::Up => number - 1,
        }
    }

    /// Edges pointing toward the levels not yet visited.
    pub fn forward_edges<T>(self, v: &Vertex<T>) -> &AdjSet {
        match self {
            LevelDirection::Down => v.forward(),
            LevelDirection::Up => v.backward(),
        }
    }

    /// Edges pointing back toward the levels already visited.
    pub fn backward_edges<T>(self, v: &Vertex<T>) -> &AdjSet {
        self.opposite().forward_edges(v)
    }

    /// `(fixed, next)` pairs of adjacent level numbers in sweep order.
    pub fn sweep(self, map: &LevelMap) -> Vec<(i32, i32)> {
        let Some(mut fixed) = self.first(map) else {
            return Vec::new();
        };
        let mut pairs = Vec::with_capacity(map.len().saturating_sub(1));
        while map.get(self.next(fixed)).is_some() {
            pairs.push((fixed, self.next(fixed)));
            fixed = self.next(fixed);
        }
        pairs
    }
}
