//! Optional pass that lines up the dummies of long edges.

use tracing::{debug, trace};

use crate::graph::{EdgeDirection, Graph, VertexId};
use crate::level::LevelMap;

/// Lines up the dummies of a long edge on one x coordinate when that is possible without
/// changing the order of any level.
///
/// A chain that bends in two places can flip between aligning with its top and its bottom
/// end forever, so the number of passes is capped.
#[derive(Debug, Clone)]
pub struct StraightenLongEdge {
    /// Minimum horizontal space between two vertices of one level.
    pub x_gap: f64,
    pub max_passes: usize,
}

impl Default for StraightenLongEdge {
    fn default() -> Self {
        Self {
            x_gap: 10.0,
            max_passes: 10,
        }
    }
}

impl StraightenLongEdge {
    pub fn new(x_gap: f64, max_passes: usize) -> Self {
        Self { x_gap, max_passes }
    }

    /// Returns the number of passes made.
    pub fn layout<T>(&self, g: &mut Graph<T>, map: &LevelMap) -> usize {
        let mut passes = 0;
        while passes < self.max_passes {
            passes += 1;
            let mut moved = 0usize;
            for level in map.levels() {
                for &v in level.vertices() {
                    if g[v].is_dummy() {
                        continue;
                    }
                    for dir in EdgeDirection::ALL {
                        for w in g.neighbors(v, dir) {
                            if self.straighten(g, map, level.number(), w, dir) {
                                moved += 1;
                            }
                        }
                    }
                }
            }
            trace!(pass = passes, moved, "straightening pass");
            if moved == 0 {
                break;
            }
        }
        debug!(passes, "long edges straightened");
        passes
    }

    /// Follows the chain that starts at `w` (a neighbour of a real vertex on level `from`)
    /// in `dir` until the first vertex `u` whose x differs from `w`'s, then moves every
    /// dummy before `u` onto `u`'s x if each fits between its level neighbours.
    fn straighten<T>(
        &self,
        g: &mut Graph<T>,
        map: &LevelMap,
        from: i32,
        w: VertexId,
        dir: EdgeDirection,
    ) -> bool {
        let start_x = g[w].pos.x;
        let mut u = w;
        loop {
            if g[u].pos.x != start_x {
                break;
            }
            if !g[u].is_dummy() {
                return false;
            }
            match chain_next(g, u, dir) {
                Some(n) => u = n,
                None => return false,
            }
        }

        let ideal = g[u].pos.x;
        let mut a = w;
        let mut number = from + dir.sign();
        while a != u {
            let Some(level) = map.get(number) else {
                return false;
            };
            let row = level.vertices();
            let pos = g[a].order;
            let half = g[a].size().width / 2.0;
            let min = match pos.checked_sub(1) {
                Some(i) => g[row[i]].right() + self.x_gap + half,
                None => f64::NEG_INFINITY,
            };
            let max = match row.get(pos + 1) {
                Some(&n) => g[n].left() - self.x_gap - half,
                None => f64::INFINITY,
            };
            if !(min <= ideal && ideal <= max) {
                return false;
            }
            let Some(n) = chain_next(g, a, dir) else {
                return false;
            };
            a = n;
            number += dir.sign();
        }

        let mut a = w;
        while a != u {
            g[a].pos.x = ideal;
            match chain_next(g, a, dir) {
                Some(n) => a = n,
                None => break,
            }
        }
        true
    }
}

fn chain_next<T>(g: &Graph<T>, v: VertexId, dir: EdgeDirection) -> Option<VertexId> {
    dir.edges(&g[v]).first().copied()
}
