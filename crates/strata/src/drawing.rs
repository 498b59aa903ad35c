use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::coordinate_system;
use crate::dump::LayoutSnapshot;
use crate::error::{Error, Result};
use crate::graph::{Graph, Point, Rect, VertexId};
use crate::level::LevelMap;
use crate::model::{LayoutOptions, Orientation};
use crate::navigator::Navigator;
use crate::pipeline;

/// A finished layout of a caller's graph, queried by the caller's own vertex values.
///
/// ```
/// use strata::graph::Size;
/// use strata::{AdjacencyNavigator, Layout, LayoutOptions};
///
/// let nav = AdjacencyNavigator::from_edges([("a", "b"), ("b", "c"), ("a", "c")], Size::new(20.0, 10.0));
/// let layout = Layout::new(&nav, LayoutOptions::default()).unwrap();
///
/// assert_eq!(layout.level_of(&"c"), Some(2));
/// assert_eq!(layout.edge(&"a", &"b"), Some(vec![]));
/// assert_eq!(layout.edge(&"a", &"c").map(|points| points.len()), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct Layout<T> {
    graph: Graph<T>,
    index: FxHashMap<T, VertexId>,
    /// Targets as the navigator reported them, deduplicated, self-loops included.
    targets: Vec<Vec<VertexId>>,
    levels: LevelMap,
    orientation: Orientation,
}

impl<T: Clone + Eq + Hash + fmt::Debug> Layout<T> {
    /// Reads the caller's graph through `nav` and lays it out.
    pub fn new<N: Navigator<T> + ?Sized>(nav: &N, options: LayoutOptions) -> Result<Self> {
        options.validate()?;
        let orientation = options.orientation;

        let tags = nav.vertices();
        let mut graph = Graph::with_capacity(tags.len());
        let mut index = FxHashMap::default();
        for tag in &tags {
            let size = nav.size(tag);
            let valid = |d: f64| d.is_finite() && d >= 0.0;
            if !(valid(size.width) && valid(size.height)) {
                return Err(Error::InvalidSize {
                    vertex: format!("{tag:?}"),
                });
            }
            if index.contains_key(tag) {
                return Err(Error::DuplicateVertex {
                    vertex: format!("{tag:?}"),
                });
            }
            let id = graph.add_vertex(tag.clone(), coordinate_system::size(size, orientation));
            index.insert(tag.clone(), id);
        }

        let mut targets = vec![Vec::new(); graph.len()];
        let mut self_loops = 0usize;
        for (tag, v) in tags.iter().zip(graph.ids()) {
            for to in nav.edges(tag) {
                let Some(&w) = index.get(&to) else {
                    return Err(Error::MissingEndpoint {
                        from: format!("{tag:?}"),
                        to: format!("{to:?}"),
                    });
                };
                let known: &mut Vec<VertexId> = &mut targets[v.index()];
                if !known.contains(&w) {
                    known.push(w);
                }
                if v == w {
                    self_loops += 1;
                    continue;
                }
                graph.add_edge(v, w);
            }
        }
        debug!(
            vertices = graph.len(),
            edges = graph.edge_count(),
            self_loops,
            "graph ingested"
        );

        let levels = pipeline::run(&mut graph, &options);
        Ok(Self {
            graph,
            index,
            targets,
            levels,
            orientation,
        })
    }
}

impl<T: Eq + Hash> Layout<T> {
    fn id(&self, v: &T) -> Option<VertexId> {
        self.index.get(v).copied()
    }

    /// Caller vertices in the order the navigator reported them.
    pub fn vertices(&self) -> impl Iterator<Item = &T> {
        self.graph.iter().filter_map(|(_, v)| v.tag())
    }

    /// Targets of `v` as the navigator reported them, self-loops included. Empty for an
    /// unknown vertex.
    pub fn edges(&self, v: &T) -> Vec<&T> {
        self.id(v)
            .map(|id| {
                self.targets[id.index()]
                    .iter()
                    .filter_map(|&w| self.graph[w].tag())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Bounding box of `v`.
    pub fn vertex(&self, v: &T) -> Option<Rect> {
        let id = self.id(v)?;
        Some(coordinate_system::rect(
            self.graph[id].bound_box(),
            self.orientation,
        ))
    }

    /// Bend points of the edge `v -> w`, from `v` toward `w`.
    ///
    /// Empty when the edge joins adjacent levels or is a self-loop, the dummy positions when it
    /// spans several, and `None` when the navigator never reported the edge.
    pub fn edge(&self, v: &T, w: &T) -> Option<Vec<Point>> {
        let (a, b) = (self.id(v)?, self.id(w)?);
        if !self.targets[a.index()].contains(&b) {
            return None;
        }
        if a == b {
            return Some(Vec::new());
        }
        if let Some(points) = self.chain(a, b) {
            return Some(points);
        }
        // Reversed while breaking a cycle.
        self.chain(b, a).map(|mut points| {
            points.reverse();
            points
        })
    }

    fn chain(&self, a: VertexId, b: VertexId) -> Option<Vec<Point>> {
        if self.graph.has_edge(a, b) {
            return Some(Vec::new());
        }
        let head = self.graph[a].forward().iter().copied().find(|&d| {
            let dummy = &self.graph[d];
            dummy.is_dummy() && dummy.source() == Some(a) && dummy.sink() == Some(b)
        })?;

        let mut points = Vec::new();
        let mut d = head;
        while self.graph[d].is_dummy() {
            points.push(coordinate_system::point(
                self.graph[d].pos,
                self.orientation,
            ));
            match self.graph[d].forward().first() {
                Some(&next) => d = next,
                None => break,
            }
        }
        Some(points)
    }

    /// Smallest rectangle containing every vertex and every bend point.
    pub fn drawing_area(&self) -> Rect {
        let mut area: Option<Rect> = None;
        for (_, vertex) in self.graph.iter() {
            area = Some(match (area, vertex.is_dummy()) {
                (None, false) => vertex.bound_box(),
                (None, true) => Rect::new(vertex.pos.x, vertex.pos.y, 0.0, 0.0),
                (Some(r), false) => r.union(&vertex.bound_box()),
                (Some(r), true) => r.include(vertex.pos),
            });
        }
        coordinate_system::rect(area.unwrap_or_default(), self.orientation)
    }

    pub fn level_of(&self, v: &T) -> Option<i32> {
        Some(self.graph[self.id(v)?].level)
    }

    pub fn order_of(&self, v: &T) -> Option<usize> {
        Some(self.graph[self.id(v)?].order)
    }

    /// Edge crossings left in the final ordering, counted on the proper graph.
    pub fn crossing_count(&self) -> usize {
        self.levels.count_crossing(&self.graph)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The laid-out internal graph, dummies included. Coordinates are top-down.
    pub fn graph(&self) -> &Graph<T> {
        &self.graph
    }

    pub fn levels(&self) -> &LevelMap {
        &self.levels
    }

    pub fn snapshot(&self) -> LayoutSnapshot<'_, T> {
        LayoutSnapshot::from_layout(self)
    }

    pub(crate) fn caller_edges(&self) -> impl Iterator<Item = (&T, &T)> {
        self.graph
            .iter()
            .zip(&self.targets)
            .flat_map(move |((_, vertex), targets)| {
                targets
                    .iter()
                    .filter_map(move |&w| Some((vertex.tag()?, self.graph[w].tag()?)))
            })
    }
}

impl<T: Eq + Hash + serde::Serialize> Layout<T> {
    /// Serializes [`Layout::snapshot`] as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.snapshot()).map_err(Error::Dump)
    }
}
