//! Level assignment.
//!
//! Turns an arbitrary directed graph into a layered one: every vertex gets an integer
//! level, cycles are broken by reversing edges, and every edge ends up pointing from a lower
//! level to a strictly higher one.
//!
//! With [`EdgeDirection::Forward`] every source lands on level 0 and levels grow downwards.
//! With [`EdgeDirection::Backward`] every sink lands on level 0 and levels are negative.

use tracing::{debug, trace};

use crate::graph::dfs::postorder;
use crate::graph::{EdgeDirection, Graph, VertexId};

/// Assigns levels, breaks cycles and tightens the hierarchy with [`fall`].
pub fn assign_levels<T>(g: &mut Graph<T>, dir: EdgeDirection) {
    let _span = tracing::debug_span!("assign_levels", ?dir, vertices = g.len()).entered();
    topological_sort(g, dir);
    let rounds = fall(g, dir);
    debug!(rounds, "levels assigned");
}

/// Levels every vertex by a topological walk in `dir` and reverses the edges that close a
/// cycle. Returns the topological order (postorder of the depth-first walk).
///
/// A vertex is placed one level past the furthest of its already-levelled predecessors;
/// predecessors reached only through a cycle are ignored and their edge is reversed
/// afterwards.
pub fn topological_sort<T>(g: &mut Graph<T>, dir: EdgeDirection) -> Vec<VertexId> {
    let topo = postorder(g, g.ids(), dir);
    let back = dir.opposite();
    let mut levelled = vec![false; g.len()];

    for &v in topo.iter().rev() {
        let mut level = 0;
        for &w in back.edges(&g[v]) {
            if !levelled[w.index()] {
                continue;
            }
            level = match dir {
                EdgeDirection::Forward => level.max(g[w].level + 1),
                EdgeDirection::Backward => level.min(g[w].level - 1),
            };
        }
        g[v].level = level;
        levelled[v.index()] = true;
    }

    let reversed = break_cycles(g, &topo, dir);
    debug!(reversed, "topological sort done");
    topo
}

/// Reverses every edge that points "upstream" after levelling. Returns how many edges were
/// reversed.
pub fn break_cycles<T>(g: &mut Graph<T>, topo: &[VertexId], dir: EdgeDirection) -> usize {
    let mut reversed = 0;
    for &v in topo {
        for w in g.neighbors(v, dir) {
            let flip = match dir {
                EdgeDirection::Forward => g[v].level > g[w].level,
                EdgeDirection::Backward => g[v].level < g[w].level,
            };
            if !flip {
                continue;
            }
            trace!(%v, %w, "reversing edge to break a cycle");
            match dir {
                EdgeDirection::Forward => g.reverse_edge(v, w),
                EdgeDirection::Backward => g.reverse_edge(w, v),
            }
            reversed += 1;
        }
    }
    reversed
}

#[derive(Debug, Default, Clone)]
struct Cluster {
    /// How far the cluster can move in the fall direction; `None` when nothing constrains it.
    drop_height: Option<i32>,
    /// Clusters this one is falling toward.
    targets: Vec<usize>,
}

impl Cluster {
    fn can_drop(&self) -> bool {
        self.drop_height.is_some_and(|h| h > 0)
    }
}

/// Groups vertices connected by edges that span exactly one level.
struct Clusters {
    of: Vec<usize>,
    clusters: Vec<Cluster>,
}

impl Clusters {
    fn form<T>(g: &Graph<T>) -> Self {
        const UNASSIGNED: usize = usize::MAX;
        let mut of = vec![UNASSIGNED; g.len()];
        let mut clusters = Vec::new();
        let mut stack = Vec::new();

        for root in g.ids() {
            if of[root.index()] != UNASSIGNED {
                continue;
            }
            let id = clusters.len();
            clusters.push(Cluster::default());
            stack.push(root);
            while let Some(v) = stack.pop() {
                if of[v.index()] != UNASSIGNED {
                    continue;
                }
                of[v.index()] = id;
                let level = g[v].level;
                for &w in g[v].forward() {
                    if g[w].level == level + 1 && of[w.index()] == UNASSIGNED {
                        stack.push(w);
                    }
                }
                for &w in g[v].backward() {
                    if g[w].level == level - 1 && of[w.index()] == UNASSIGNED {
                        stack.push(w);
                    }
                }
            }
        }
        Self { of, clusters }
    }

    fn cluster_of(&self, v: VertexId) -> usize {
        self.of[v.index()]
    }

    /// Clusters that move this round.
    ///
    /// A cluster only falls toward clusters that stay put, so its gap closes and the two merge
    /// in the next round. Clusters that all wait on each other release the first of them.
    fn falling(&self) -> Vec<bool> {
        let mut falling: Vec<bool> = self
            .clusters
            .iter()
            .map(|c| {
                c.can_drop()
                    && c
                        .targets
                        .iter()
                        .all(|&t| !self.clusters[t].can_drop())
            })
            .collect();
        if !falling.contains(&true) {
            if let Some(first) = self.clusters.iter().position(Cluster::can_drop) {
                falling[first] = true;
            }
        }
        falling
    }
}

/// Repeatedly moves rigid clusters toward their neighbours in `dir` until no cluster can
/// move. Returns the number of rounds in which something moved.
///
/// Only edges in `dir` constrain a cluster, so with `Forward` clusters sink toward their
/// successors and with `Backward` they rise toward their predecessors. Every round merges at
/// least one pair of clusters, which bounds the loop by the vertex count.
pub fn fall<T>(g: &mut Graph<T>, dir: EdgeDirection) -> usize {
    let mut rounds = 0;
    loop {
        let mut clusters = Clusters::form(g);
        for (v, vertex) in g.iter() {
            let cv = clusters.cluster_of(v);
            for &w in dir.edges(vertex) {
                let cw = clusters.cluster_of(w);
                if cw == cv {
                    continue;
                }
                let gap = (g[w].level - vertex.level).abs() - 1;
                let cluster = &mut clusters.clusters[cv];
                cluster.drop_height = Some(cluster.drop_height.map_or(gap, |h| h.min(gap)));
                if !cluster.targets.contains(&cw) {
                    cluster.targets.push(cw);
                }
            }
        }

        let falling = clusters.falling();
        let mut dropped = false;
        for v in g.ids() {
            let c = clusters.cluster_of(v);
            if !falling[c] {
                continue;
            }
            if let Some(h) = clusters.clusters[c].drop_height {
                g[v].level += dir.sign() * h;
                dropped = true;
            }
        }
        if !dropped {
            break;
        }
        rounds += 1;
        trace!(
            round = rounds,
            clusters = clusters.clusters.len(),
            "clusters dropped"
        );
    }
    rounds
}
